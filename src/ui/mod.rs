// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Calculates screen layout (header, content, legend, status bar)
// - render: Main orchestration function that coordinates all rendering
// - header: Top bar with screen title, session and header search
// - feed: Post cards for feed, profile and single post screens
// - search: Search results screen and input lines
// - pending: Pending follow requests list
// - forms: Text forms (login, register, write, follow, account)
// - legend: Renders hotkey legend
// - status_bar: Renders bottom status bar
// - dialogs: Delete confirmation, alerts and help overlay
// - toast: Renders toast notifications (brief pop-up messages)

use ratatui::style::{Color, Modifier, Style};

pub mod dialogs;
pub mod feed;
pub mod forms;
pub mod header;
pub mod layout;
pub mod legend;
pub mod pending;
pub mod render;
pub mod search;
pub mod status_bar;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;

/// Placeholder text for empty and loading lists
pub(crate) const EMPTY_STYLE: Style = Style::new().fg(Color::DarkGray).add_modifier(Modifier::ITALIC);
