use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Which set of keys the mounted screen responds to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegendContext {
    Feed,
    Search,
    Pending,
    Form,
    Write,
    Follow,
    Account,
    Login,
    Other,
}

fn key(k: &'static str, label: &'static str) -> [Span<'static>; 2] {
    [
        Span::styled(k, Style::default().fg(Color::Yellow)),
        Span::raw(label),
    ]
}

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(
    context: LegendContext,
    vim_mode: bool,
    logged_in: bool,
    search_mode: bool,
) -> Vec<Span<'static>> {
    let mut hotkey_spans = vec![];

    // Header search swallows every key
    if search_mode {
        hotkey_spans.extend(key("Enter", ":Search  "));
        hotkey_spans.extend(key("Esc", ":Cancel"));
        return hotkey_spans;
    }

    match context {
        LegendContext::Feed => {
            if vim_mode {
                hotkey_spans.extend(key("jk", ":Nav  "));
                hotkey_spans.extend(key("gg/G", ":First/Last  "));
            } else {
                hotkey_spans.extend(key("↑/↓", ":Nav  "));
            }
            hotkey_spans.extend(key("Enter", ":Open  "));
            hotkey_spans.extend(key("u", ":Author  "));
            if logged_in {
                hotkey_spans.extend(key("l", ":Like  "));
                hotkey_spans.extend(key("b", ":Reblog  "));
                hotkey_spans.extend(key("f", ":Follow  "));
                hotkey_spans.extend(key("d", ":Delete  "));
            }
            hotkey_spans.extend(key("r", ":Refresh  "));
        }
        LegendContext::Search => {
            hotkey_spans.extend(key("Enter", ":Search  "));
            hotkey_spans.extend(key("Tab", ":More Users  "));
            hotkey_spans.extend(key("↑/↓", ":Scroll  "));
        }
        LegendContext::Pending => {
            hotkey_spans.extend(key("↑/↓", ":Nav  "));
            hotkey_spans.extend(key("a", ":Accept  "));
            hotkey_spans.extend(key("x", ":Reject  "));
            hotkey_spans.extend(key("r", ":Refresh  "));
        }
        LegendContext::Form
        | LegendContext::Write
        | LegendContext::Follow
        | LegendContext::Account
        | LegendContext::Login => {
            hotkey_spans.extend(key("Tab", ":Next field  "));
            hotkey_spans.extend(key("^S", ":Submit  "));
            match context {
                LegendContext::Write => hotkey_spans.extend(key("^P", ":Preview  ")),
                LegendContext::Follow => hotkey_spans.extend(key("^T", ":User/Feed  ")),
                LegendContext::Account => hotkey_spans.extend(key("^T", ":Private  ")),
                LegendContext::Login => hotkey_spans.extend(key("^R", ":Register  ")),
                _ => {}
            }
            hotkey_spans.extend(key("Esc", ":Back  "));
            hotkey_spans.extend(key("^C", ":Quit"));
            return hotkey_spans;
        }
        LegendContext::Other => {}
    }

    hotkey_spans.extend(key("/", ":Search  "));
    hotkey_spans.extend(key("H", ":Home  "));
    if logged_in {
        hotkey_spans.extend(key("m", ":Profile  "));
        hotkey_spans.extend(key("w", ":Write  "));
        hotkey_spans.extend(key("F", ":Follow  "));
        hotkey_spans.extend(key("p", ":Pending  "));
        hotkey_spans.extend(key("a", ":Account  "));
        hotkey_spans.extend(key("L", ":Logout  "));
    } else {
        hotkey_spans.extend(key("L", ":Login  "));
        hotkey_spans.extend(key("N", ":Register  "));
    }
    hotkey_spans.extend(key("?", ":Help  "));

    // Quit - always available
    hotkey_spans.extend(key("q", ":Quit"));

    hotkey_spans
}

/// Build the legend paragraph (reusable for both rendering and height calculation)
pub fn build_legend_paragraph(
    context: LegendContext,
    vim_mode: bool,
    logged_in: bool,
    search_mode: bool,
) -> Paragraph<'static> {
    let hotkey_line = Line::from(build_hotkey_spans(context, vim_mode, logged_in, search_mode));

    Paragraph::new(vec![hotkey_line])
        .block(Block::default().borders(Borders::ALL).title("Hotkeys"))
        .style(Style::default().fg(Color::Gray))
        .wrap(ratatui::widgets::Wrap { trim: false })
}

pub fn render_legend(
    f: &mut Frame,
    area: Rect,
    context: LegendContext,
    vim_mode: bool,
    logged_in: bool,
    search_mode: bool,
) {
    let legend = build_legend_paragraph(context, vim_mode, logged_in, search_mode);
    f.render_widget(legend, area);
}

/// Calculate required height for legend based on terminal width and content
pub fn calculate_legend_height(
    terminal_width: u16,
    context: LegendContext,
    vim_mode: bool,
    logged_in: bool,
    search_mode: bool,
) -> u16 {
    // line_count() doesn't account for borders when a block is attached
    let hotkey_line = Line::from(build_hotkey_spans(context, vim_mode, logged_in, search_mode));
    let paragraph_for_counting =
        Paragraph::new(vec![hotkey_line]).wrap(ratatui::widgets::Wrap { trim: false });

    let available_width = terminal_width.saturating_sub(2);
    let line_count = paragraph_for_counting.line_count(available_width);

    // Add top + bottom borders, ensure minimum of 3
    (line_count as u16).saturating_add(2).max(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans_to_text(spans: &[Span]) -> String {
        spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect::<Vec<_>>()
            .join("")
    }

    #[test]
    fn test_anonymous_feed_offers_login_not_post_actions() {
        let text = spans_to_text(&build_hotkey_spans(LegendContext::Feed, false, false, false));
        assert!(text.contains("L:Login"), "got: {}", text);
        assert!(text.contains("N:Register"), "got: {}", text);
        assert!(!text.contains("l:Like"), "got: {}", text);
        assert!(!text.contains("w:Write"), "got: {}", text);
    }

    #[test]
    fn test_logged_in_feed_offers_post_actions() {
        let text = spans_to_text(&build_hotkey_spans(LegendContext::Feed, false, true, false));
        assert!(text.contains("l:Like"));
        assert!(text.contains("b:Reblog"));
        assert!(text.contains("L:Logout"));
        assert!(!text.contains("N:Register"));
    }

    #[test]
    fn test_vim_mode_shows_vim_motions() {
        let text = spans_to_text(&build_hotkey_spans(LegendContext::Feed, true, false, false));
        assert!(text.contains("gg/G"));
        let text = spans_to_text(&build_hotkey_spans(LegendContext::Feed, false, false, false));
        assert!(!text.contains("gg/G"));
    }

    #[test]
    fn test_forms_do_not_advertise_single_letter_keys() {
        let text = spans_to_text(&build_hotkey_spans(LegendContext::Write, false, true, false));
        assert!(text.contains("^P:Preview"));
        assert!(!text.contains("q:Quit"), "typing q in a form must not quit: {}", text);
    }

    #[test]
    fn test_search_mode_replaces_legend() {
        let text = spans_to_text(&build_hotkey_spans(LegendContext::Feed, false, true, true));
        assert_eq!(text, "Enter:Search  Esc:Cancel");
    }

    #[test]
    fn test_legend_height_grows_when_narrow() {
        let wide = calculate_legend_height(400, LegendContext::Feed, false, true, false);
        let narrow = calculate_legend_height(30, LegendContext::Feed, false, true, false);
        assert_eq!(wide, 3);
        assert!(narrow > wide);
    }
}
