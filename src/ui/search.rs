//! Search UI
//!
//! Renders the header search input and the search results screen.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use chump::api::User;
use chump::logic::{formatting, handles, html};
use chump::views::search::{NO_POSTS, NO_USERS};
use chump::views::SearchView;

use super::EMPTY_STYLE;

/// Input line with a blinking cursor while active
pub fn input_line<'a>(prefix: &'a str, query: &'a str, active: bool) -> Line<'a> {
    let cursor_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::SLOW_BLINK);

    if active {
        Line::from(vec![
            Span::raw(prefix),
            Span::raw(query),
            Span::styled("█", cursor_style),
        ])
    } else {
        Line::from(vec![Span::styled(
            format!("{}{}", prefix, query),
            Style::default().fg(Color::Gray),
        )])
    }
}

fn user_lines(user: &User) -> Vec<Line<'static>> {
    let handle = handles::qualify(&user.handle, &user.host);
    let mut header = vec![Span::styled(
        format!("  @{}", handle),
        Style::default().fg(Color::Yellow),
    )];
    if !user.display_name.is_empty() {
        header.push(Span::raw(format!("  {}", user.display_name)));
    }
    if user.is_followed {
        header.push(Span::styled("  (following)", Style::default().fg(Color::Green)));
    }

    let mut lines = vec![Line::from(header)];
    let bio = html::summary_line(&user.bio);
    if !bio.is_empty() {
        lines.push(Line::styled(format!("    {}", bio), Style::default().fg(Color::DarkGray)));
    }
    lines
}

/// Render the search screen: input box on top, users then posts below
pub fn render_search(f: &mut Frame, area: Rect, search: &SearchView, scroll_offset: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    let input = Paragraph::new(vec![input_line("Query: ", &search.input, true)]).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Search - Enter to run ")
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(input, chunks[0]);

    let title = if search.shown_query().is_empty() {
        " Results ".to_string()
    } else {
        format!(" Results for \"{}\" ", search.shown_query())
    };
    let block = Block::default().borders(Borders::ALL).title(title);

    if search.state().is_loading() {
        f.render_widget(Paragraph::new("Searching...").style(EMPTY_STYLE).block(block), chunks[1]);
        return;
    }

    let heading = Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    let mut lines: Vec<Line> = vec![Line::styled("Users", heading)];
    if search.users().is_empty() {
        lines.push(Line::styled(format!("  {}", NO_USERS), EMPTY_STYLE));
    } else {
        for user in search.visible_users() {
            lines.extend(user_lines(user));
        }
        if let Some(label) = search.users_toggle_label() {
            lines.push(Line::styled(
                format!("  [Tab: {}]", label),
                Style::default().fg(Color::Cyan),
            ));
        }
    }

    lines.push(Line::raw(""));
    lines.push(Line::styled("Posts", heading));
    if search.posts().is_empty() {
        lines.push(Line::styled(format!("  {}", NO_POSTS), EMPTY_STYLE));
    } else {
        for post in search.posts() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {}", post.title), Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(
                    format!("  @{}  {}", post.author_handle(), formatting::format_published(post)),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
            lines.push(Line::raw(format!("    {}", html::summary_line(&post.body))));
        }
    }

    let scroll = scroll_offset.min(u16::MAX as usize) as u16;
    let results = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    f.render_widget(results, chunks[1]);
}
