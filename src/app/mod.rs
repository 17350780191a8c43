//! App Orchestration Methods
//!
//! This module contains App implementation methods grouped by domain.
//! Each submodule contains methods that orchestrate between:
//! - Model state (pure, in chump::model)
//! - View containers (chump::views)
//! - Services (API client, session store, background worker)
//! - UI rendering (in src/ui/)
//!
//! Methods are kept as `impl App` but organized by functional domain.

pub(crate) mod navigation;
pub(crate) mod posts;
pub(crate) mod screen;
pub(crate) mod session;

pub use screen::Screen;
