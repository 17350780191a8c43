//! Shared types for the Model

use std::time::Instant;

/// Vim command state for tracking double-key commands like 'gg'
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VimCommandState {
    None,
    WaitingForSecondG, // First 'g' pressed, waiting for second 'g'
}

/// A transient message in the corner of the screen
#[derive(Clone, Debug)]
pub struct Toast {
    pub message: String,
    pub is_error: bool,
    pub shown_at: Instant,
}

/// Post waiting on the user to confirm its deletion
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfirmDelete {
    pub article_id: i64,
    pub title: String,
}
