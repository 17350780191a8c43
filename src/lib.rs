//! Rabble client library
//!
//! Everything the terminal client needs that does not touch the terminal:
//! the backend API, the session store, pure logic, the model and the view
//! containers. Exposed as a library so it can be tested directly.

use std::sync::atomic::{AtomicBool, Ordering};

pub mod api;
pub mod logic;
pub mod model;
pub mod session;
pub mod utils;
pub mod views;

// Global flag for debug mode
pub static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

pub fn log_debug(msg: &str) {
    // Only log if debug mode is enabled
    if !DEBUG_MODE.load(Ordering::Relaxed) {
        return;
    }

    use std::fs::OpenOptions;
    use std::io::Write;
    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(utils::get_debug_log_path())
    {
        let _ = writeln!(file, "{}", msg);
    }
}
