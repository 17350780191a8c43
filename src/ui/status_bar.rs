use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Color the labels (before colons) of " | " separated parts
fn status_spans(status_line: &str) -> Vec<Span<'_>> {
    if status_line.is_empty() {
        return vec![Span::raw("")];
    }

    let mut spans = vec![];
    for (idx, part) in status_line.split(" | ").enumerate() {
        if idx > 0 {
            spans.push(Span::raw(" | "));
        }
        if let Some(colon_pos) = part.find(':') {
            // Split on first colon to separate label from value
            spans.push(Span::styled(&part[..=colon_pos], Style::default().fg(Color::Yellow)));
            spans.push(Span::raw(&part[colon_pos + 1..]));
        } else {
            spans.push(Span::raw(part));
        }
    }
    spans
}

/// Render the bottom status bar from `label: value` metrics
pub fn render_status_bar(f: &mut Frame, area: Rect, metrics: &[String]) {
    let status_line = metrics.join(" | ");
    let status_bar = Paragraph::new(Line::from(status_spans(&status_line)))
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(Style::default().fg(Color::Gray));

    f.render_widget(status_bar, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_split_from_values() {
        let spans = status_spans("Posts: 3 | Loading");
        let parts: Vec<&str> = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(parts, vec!["Posts:", " 3", " | ", "Loading"]);
        assert_eq!(spans[0].style.fg, Some(Color::Yellow));
    }
}
