//! Text forms: one bordered box per field, the focused one highlighted

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use chump::logic::formatting;
use chump::views::{FieldSpec, Form};

/// Height of a field box, borders included
fn field_height(spec: &FieldSpec) -> u16 {
    if spec.multiline {
        6
    } else {
        3
    }
}

fn field_lines<'a>(spec: &FieldSpec, value: &'a str, focused: bool) -> Vec<Line<'a>> {
    if value.is_empty() && !focused {
        return vec![Line::styled(
            spec.placeholder,
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        )];
    }

    let shown = if spec.secret {
        formatting::mask(value)
    } else {
        value.to_string()
    };
    let mut lines: Vec<Line> = shown.split('\n').map(|l| Line::raw(l.to_string())).collect();

    if focused {
        let cursor = Span::styled(
            "█",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::SLOW_BLINK),
        );
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor);
        }
    }
    lines
}

/// Render a form. `extras` are lines drawn under the fields (toggles and
/// hints that are not text inputs).
pub fn render_form(f: &mut Frame, area: Rect, title: &str, form: &dyn Form, extras: Vec<Line>) {
    let outer = Block::default().borders(Borders::ALL).title(format!(" {} ", title));
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let fields = form.fields();
    let mut constraints: Vec<Constraint> = fields
        .iter()
        .map(|spec| Constraint::Length(field_height(spec)))
        .collect();
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (index, spec) in fields.iter().enumerate() {
        let focused = index == form.focus();
        let border = if focused { Color::Cyan } else { Color::Gray };
        let paragraph = Paragraph::new(field_lines(spec, form.value(index), focused))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(spec.label)
                    .border_style(Style::default().fg(border)),
            )
            .wrap(Wrap { trim: false });
        f.render_widget(paragraph, chunks[index]);
    }

    if let Some(rest) = chunks.last() {
        f.render_widget(Paragraph::new(extras).wrap(Wrap { trim: false }), *rest);
    }
}

/// A labelled on/off switch line
pub fn toggle_line(label: &str, on: bool, key: &str) -> Line<'static> {
    let state = if on { "[x]" } else { "[ ]" };
    Line::from(vec![
        Span::styled(format!(" {} ", state), Style::default().fg(Color::Cyan)),
        Span::raw(label.to_string()),
        Span::styled(format!("  ({})", key), Style::default().fg(Color::DarkGray)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_placeholder_when_empty_and_unfocused() {
        let spec = FieldSpec::text("Username", "Username");
        assert_eq!(text(&field_lines(&spec, "", false)), "Username");
    }

    #[test]
    fn test_secret_is_masked() {
        let spec = FieldSpec::secret("Password", "Password");
        let t = text(&field_lines(&spec, "hunter2", false));
        assert!(!t.contains("hunter2"));
        assert_eq!(t.chars().count(), 7);
    }

    #[test]
    fn test_multiline_keeps_lines_and_cursor() {
        let spec = FieldSpec::multiline("Body", "");
        let lines = field_lines(&spec, "a\nb", true);
        assert_eq!(lines.len(), 2);
        assert_eq!(text(&lines), "a\nb█");
    }
}
