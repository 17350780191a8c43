//! External Services
//!
//! - api: background fetch queue for the screens that load lists

pub mod api;
