//! Post cards for the feed, profile and single post screens

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use chump::api::Post;
use chump::logic::{formatting, html, ui as ui_logic};
use chump::views::feed::FeedSource;
use chump::views::{FeedView, FollowButton};

use super::EMPTY_STYLE;

/// Lines a card takes in the list, divider included
const CARD_HEIGHT: u16 = 5;

/// Header, metadata and counters of a post
fn card_lines(post: &Post, selected: bool, full_body: bool) -> Vec<Line<'static>> {
    let title_style = if selected {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let marker = if selected { "► " } else { "  " };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Cyan)),
            Span::styled(post.title.clone(), title_style),
        ]),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("@{}", post.author_handle()), Style::default().fg(Color::Yellow)),
            Span::styled(
                format!("  {}", formatting::format_published(post)),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    ];

    if full_body {
        lines.push(Line::raw(""));
        for line in html::to_plain_text(&post.body).lines() {
            lines.push(Line::raw(format!("  {}", line)));
        }
        lines.push(Line::raw(""));
    } else {
        let summary = if post.summary.is_empty() {
            html::summary_line(&post.body)
        } else {
            post.summary.clone()
        };
        lines.push(Line::raw(format!("  {}", summary)));
    }

    let like_style = if post.is_liked {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Gray)
    };
    let share_style = if post.is_shared {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Gray)
    };
    let mut counters = vec![
        Span::raw("  "),
        Span::styled(
            format!("♥ {}", formatting::format_count(post.likes_count, "like", "likes")),
            like_style,
        ),
        Span::raw("  "),
        Span::styled(
            format!("⟲ {}", formatting::format_count(post.shares_count, "share", "shares")),
            share_style,
        ),
    ];
    if !post.tags.is_empty() {
        let tags: Vec<String> = post.tags.iter().map(|t| format!("#{}", t)).collect();
        counters.push(Span::styled(
            format!("  {}", tags.join(" ")),
            Style::default().fg(Color::Blue),
        ));
    }
    lines.push(Line::from(counters));
    lines
}

/// Render a feed or profile as a scrolling list of cards. Returns the
/// first visible card so the caller can keep it for the next frame.
pub fn render_feed(
    f: &mut Frame,
    area: Rect,
    feed: &FeedView,
    follow: Option<&FollowButton>,
    scroll_offset: usize,
) -> usize {
    let mut title = format!(" {} ", feed.title());
    if let Some(button) = follow {
        let (label, hover) = button.labels();
        match hover {
            Some(hover) => title.push_str(&format!("[{} · f:{}] ", label, hover)),
            None => title.push_str(&format!("[f:{}] ", label)),
        }
    }
    let block = Block::default().borders(Borders::ALL).title(title);

    if feed.state().is_loading() && feed.posts().is_empty() {
        f.render_widget(Paragraph::new("Loading...").style(EMPTY_STYLE).block(block), area);
        return 0;
    }
    if feed.posts().is_empty() {
        f.render_widget(Paragraph::new("No posts").style(EMPTY_STYLE).block(block), area);
        return 0;
    }

    if matches!(feed.source(), FeedSource::Single { .. }) {
        render_single(f, area, feed, block, scroll_offset);
        return scroll_offset;
    }

    let inner_height = area.height.saturating_sub(2);
    let visible = (inner_height / CARD_HEIGHT).max(1) as usize;
    let offset = ui_logic::scroll_offset(feed.selected_index(), scroll_offset, visible);

    let divider = "─".repeat(area.width.saturating_sub(4) as usize);
    let mut lines: Vec<Line> = Vec::new();
    for (index, (has_divider, post)) in feed.cards().enumerate().skip(offset).take(visible) {
        if has_divider && index > offset {
            lines.push(Line::styled(format!(" {}", divider), Style::default().fg(Color::DarkGray)));
        } else if has_divider {
            lines.push(Line::raw(""));
        }
        lines.extend(card_lines(post, index == feed.selected_index(), false));
    }

    f.render_widget(Paragraph::new(lines).block(block), area);
    offset
}

/// A single post shows its whole body and scrolls line by line
fn render_single(f: &mut Frame, area: Rect, feed: &FeedView, block: Block, scroll_offset: usize) {
    let Some(post) = feed.posts().first() else {
        return;
    };
    let mut lines = card_lines(post, false, true);
    if !post.bio.is_empty() {
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            format!("  About @{}: {}", post.author, html::to_plain_text(&post.bio)),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let scroll = scroll_offset.min(u16::MAX as usize) as u16;
    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    f.render_widget(paragraph, area);
}

/// Render one post inside a popup, as the write screen previews it
pub fn render_preview(f: &mut Frame, area: Rect, post: &Post) {
    let mut lines = card_lines(post, false, true);
    lines.push(Line::styled(
        "  Enter/^S: Post  Esc: Keep editing",
        Style::default().fg(Color::Yellow),
    ));
    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Preview ")
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black))
        .wrap(Wrap { trim: false });
    f.render_widget(ratatui::widgets::Clear, area);
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post() -> Post {
        Post {
            title: "Hello".to_string(),
            author: "sam".to_string(),
            body: "<p>first line</p><p>second</p>".to_string(),
            likes_count: 1,
            shares_count: 2,
            tags: vec!["rust".to_string()],
            is_liked: true,
            ..Default::default()
        }
    }

    fn text(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_card_shows_summary_only() {
        let lines = card_lines(&post(), false, false);
        let t = text(&lines);
        assert!(t.contains("Hello"));
        assert!(t.contains("@sam"));
        assert!(t.contains("first line"));
        assert!(!t.contains("second"));
        assert!(t.contains("1 like"));
        assert!(t.contains("2 shares"));
        assert!(t.contains("#rust"));
    }

    #[test]
    fn test_full_card_shows_body() {
        let t = text(&card_lines(&post(), false, true));
        assert!(t.contains("second"));
    }

    #[test]
    fn test_selected_card_is_marked() {
        let t = text(&card_lines(&post(), true, false));
        assert!(t.starts_with("► "));
    }
}
