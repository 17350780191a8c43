//! Event Handlers
//!
//! This module contains handlers for different types of events:
//! - api: Responses from the background fetch service
//! - keyboard: User keyboard input
//!
//! Handlers take &mut App and update the model and the mounted container.

pub mod api;
pub mod keyboard;

// Re-export for convenience
pub use api::handle_api_response;
