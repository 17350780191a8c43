use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use chump::views::PendingFollowsView;

use super::EMPTY_STYLE;

/// Render the follow requests waiting on the user
pub fn render_pending(f: &mut Frame, area: Rect, pending: &PendingFollowsView) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Pending follows ");

    if pending.state().is_loading() && pending.followers().is_empty() {
        f.render_widget(Paragraph::new("Loading...").style(EMPTY_STYLE).block(block), area);
        return;
    }
    if pending.followers().is_empty() {
        f.render_widget(
            Paragraph::new("No pending follow requests").style(EMPTY_STYLE).block(block),
            area,
        );
        return;
    }

    let items: Vec<ListItem> = pending
        .followers()
        .iter()
        .map(|follower| ListItem::new(Span::raw(format!("@{}", follower.display_handle()))))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("► ");

    // Create temporary ListState for rendering
    let mut temp_state = ListState::default();
    temp_state.select(Some(pending.selected_index()));
    f.render_stateful_widget(list, area, &mut temp_state);
}
