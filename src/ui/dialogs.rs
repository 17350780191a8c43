use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::layout::centered;

/// Render the delete confirmation dialog
pub fn render_delete_confirmation(f: &mut Frame, question: &str, title: &str) {
    let prompt_text = format!(
        "{}\n\n\
        \"{}\"\n\n\
        Continue? (y/n)",
        question, title
    );

    let prompt_area = centered(f.area(), 50, 9);
    let prompt = Paragraph::new(prompt_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Confirm Delete")
                .border_style(Style::default().fg(Color::Red)),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black))
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, prompt_area);
    f.render_widget(prompt, prompt_area);
}

/// Render a blocking message that stays until dismissed
pub fn render_alert(f: &mut Frame, message: &str) {
    let lines = message.lines().count() as u16;
    let prompt_area = centered(f.area(), 60, lines + 6);
    let prompt = Paragraph::new(format!("{}\n\n[Enter] OK", message))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Alert")
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black))
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, prompt_area);
    f.render_widget(prompt, prompt_area);
}

const HELP: &[(&str, &str)] = &[
    ("↑/↓ j/k", "Move between posts (j/k and gg/G in vim mode)"),
    ("Enter", "Open the selected post"),
    ("u", "Open the author's profile"),
    ("l / b", "Like or reblog the selected post"),
    ("f", "Follow or unfollow"),
    ("d", "Delete your own post"),
    ("r", "Refresh"),
    ("/", "Search"),
    ("H / m", "Public feed / your profile"),
    ("w / F / p / a", "Write, follow, pending requests, account"),
    ("L / N", "Log in or out / register"),
    ("Esc", "Back"),
    ("q", "Quit"),
];

/// Render the key help overlay
pub fn render_help(f: &mut Frame) {
    let mut lines: Vec<Line> = HELP
        .iter()
        .map(|(keys, what)| {
            Line::from(vec![
                Span::styled(format!("{:>14}  ", keys), Style::default().fg(Color::Yellow)),
                Span::raw(*what),
            ])
        })
        .collect();
    lines.push(Line::raw(""));
    lines.push(Line::styled("Any key closes this help", Style::default().fg(Color::DarkGray)));

    let area = centered(f.area(), 70, HELP.len() as u16 + 4);
    let help = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Help")
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black));

    f.render_widget(Clear, area);
    f.render_widget(help, area);
}
