use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::search::input_line;

/// Render the top bar: screen name and who is logged in, or the header
/// search input while it is active
pub fn render_header(
    f: &mut Frame,
    area: Rect,
    screen_title: &str,
    username: &str,
    search: Option<&str>,
) {
    if let Some(query) = search {
        let input = Paragraph::new(vec![input_line("Search: ", query, true)]).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search - Esc to cancel ")
                .style(Style::default().fg(Color::Cyan)),
        );
        f.render_widget(input, area);
        return;
    }

    let who = if username.is_empty() {
        Span::styled("not logged in", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(format!("@{}", username), Style::default().fg(Color::Yellow))
    };

    let line = Line::from(vec![
        Span::styled("chump", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::raw(" │ "),
        Span::styled(screen_title.to_string(), Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" │ "),
        who,
    ]);

    let header = Paragraph::new(line)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Gray));
    f.render_widget(header, area);
}
