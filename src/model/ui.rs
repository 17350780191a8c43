//! UI Model
//!
//! This sub-model contains all state related to the user interface:
//! preferences, dialogs, popups, and visual state.

use std::time::Instant;

use super::types::{ConfirmDelete, Toast, VimCommandState};
use crate::views::notify::{ErrorToast, Notification, Notifier};

/// UI preferences and popups
#[derive(Clone, Debug)]
pub struct UiModel {
    // ============================================
    // PREFERENCES
    // ============================================
    /// Whether vim keybindings are enabled
    pub vim_mode: bool,

    /// Vim command state (for 'gg' double-key)
    pub vim_command_state: VimCommandState,

    // ============================================
    // DIALOGS & POPUPS
    // ============================================
    /// Confirmation dialog for deleting a post
    pub confirm_delete: Option<ConfirmDelete>,

    /// Blocking messages, shown one at a time until dismissed
    pub alerts: Vec<String>,

    /// Toast message
    pub toast: Option<Toast>,

    /// Key help overlay
    pub show_help: bool,

    // ============================================
    // SEARCH
    // ============================================
    /// Whether the header search input is active
    pub search_mode: bool,

    /// Header search text
    pub search_query: String,

    // ============================================
    // VISUAL STATE
    // ============================================
    /// First visible card in list screens
    pub scroll_offset: usize,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    /// Create initial UI model with default preferences
    pub fn new(vim_mode: bool) -> Self {
        Self {
            vim_mode,
            vim_command_state: VimCommandState::None,
            confirm_delete: None,
            alerts: Vec::new(),
            toast: None,
            show_help: false,
            search_mode: false,
            search_query: String::new(),
            scroll_offset: 0,
            should_quit: false,
        }
    }

    /// Check if any modal dialog is currently showing
    pub fn has_modal(&self) -> bool {
        self.confirm_delete.is_some() || !self.alerts.is_empty() || self.show_help || self.search_mode
    }

    /// Close all modal dialogs
    pub fn close_all_modals(&mut self) {
        self.confirm_delete = None;
        self.alerts.clear();
        self.show_help = false;
        self.search_mode = false;
        self.search_query.clear();
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String) {
        self.toast = Some(Toast {
            message,
            is_error: false,
            shown_at: Instant::now(),
        });
    }

    pub fn show_error_toast(&mut self, message: String) {
        self.toast = Some(Toast {
            message,
            is_error: true,
            shown_at: Instant::now(),
        });
    }

    /// Check if toast should be dismissed
    pub fn should_dismiss_toast(&self) -> bool {
        if let Some(toast) = &self.toast {
            crate::logic::ui::should_dismiss_toast(toast.shown_at.elapsed().as_millis(), toast.is_error)
        } else {
            false
        }
    }

    /// Dismiss toast message
    pub fn dismiss_toast(&mut self) {
        self.toast = None;
    }

    pub fn current_alert(&self) -> Option<&str> {
        self.alerts.first().map(String::as_str)
    }

    pub fn dismiss_alert(&mut self) {
        if !self.alerts.is_empty() {
            self.alerts.remove(0);
        }
    }

    /// Route a recorded notification to the matching widget
    pub fn show_notification(&mut self, notification: Notification) {
        match notification {
            Notification::Error(toast) => self.show_error_toast(toast.to_string()),
            Notification::Success(message) => self.show_toast(message),
            Notification::Alert(message) => self.alerts.push(message),
        }
    }
}

impl Notifier for UiModel {
    fn error(&mut self, toast: ErrorToast) {
        if let Some(debug) = &toast.debug {
            crate::log_debug(&format!("DEBUG [ui]: {} ({})", toast, debug));
        }
        self.show_error_toast(toast.to_string());
    }

    fn success(&mut self, message: &str) {
        self.show_toast(message.to_string());
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}
