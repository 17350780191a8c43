//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - errors: Error classification and user-facing messages
//! - fetch: Fetch tickets so only the newest result reaches a view
//! - follow: Follow button visibility and state transitions
//! - formatting: Dates, counters and width-aware truncation
//! - handles: `user@host` handle parsing
//! - html: Post body HTML to terminal text
//! - pageview: Which navigations count as page views
//! - posts: Published date parsing and newest-first ordering
//! - ui: Toast lifetimes and list scrolling
//! - validation: Required-field checks run before any request

pub mod errors;
pub mod fetch;
pub mod follow;
pub mod formatting;
pub mod handles;
pub mod html;
pub mod pageview;
pub mod posts;
pub mod ui;
pub mod validation;
