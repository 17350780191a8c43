//! Pure Application Model - Elm Architecture
//!
//! This module defines the pure, cloneable state for the application.
//! The Model is organized into focused sub-models:
//!
//! - **NavigationModel**: Current route and history
//! - **UiModel**: User preferences, dialogs, toasts
//!
//! Screen data itself lives in the view containers, which the shell owns.

pub mod navigation;
pub mod types;
pub mod ui;

pub use navigation::{NavigationModel, Route};
pub use types::*;
pub use ui::UiModel;

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    /// Navigation state (route, history)
    pub navigation: NavigationModel,

    /// UI preferences and popups
    pub ui: UiModel,
}

impl Model {
    /// Create initial model with default settings
    pub fn new(vim_mode: bool) -> Self {
        Self {
            navigation: NavigationModel::new(),
            ui: UiModel::new(vim_mode),
        }
    }

    pub fn route(&self) -> &Route {
        self.navigation.current()
    }

    /// Check if any modal dialog is showing
    pub fn has_modal(&self) -> bool {
        self.ui.has_modal()
    }

    /// Close all modal dialogs
    pub fn close_all_modals(&mut self) {
        self.ui.close_all_modals();
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String) {
        self.ui.show_toast(message);
    }

    /// Check if toast should be dismissed
    pub fn should_dismiss_toast(&self) -> bool {
        self.ui.should_dismiss_toast()
    }

    /// Dismiss toast message
    pub fn dismiss_toast(&mut self) {
        self.ui.dismiss_toast();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_creation() {
        let model = Model::new(true);
        assert_eq!(model.route(), &Route::Feed);
        assert!(model.ui.vim_mode);
        assert!(!model.has_modal());
    }

    #[test]
    fn test_model_is_cloneable() {
        let model = Model::new(false);
        let _cloned = model.clone();
    }
}
