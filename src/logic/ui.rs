//! UI timing and scrolling logic
//!
//! Pure functions for toast lifetimes and list scrolling.

/// How long a success toast stays up
pub const TOAST_DURATION_MS: u128 = 1500;

/// Error toasts carry more text and stay longer
pub const ERROR_TOAST_DURATION_MS: u128 = 4000;

/// Whether a toast shown `elapsed_ms` ago should go away
///
/// # Examples
/// ```
/// use chump::logic::ui::should_dismiss_toast;
///
/// assert!(!should_dismiss_toast(100, false));
/// assert!(should_dismiss_toast(1500, false));
/// assert!(!should_dismiss_toast(1500, true));
/// assert!(should_dismiss_toast(4000, true));
/// ```
pub fn should_dismiss_toast(elapsed_ms: u128, is_error: bool) -> bool {
    let limit = if is_error {
        ERROR_TOAST_DURATION_MS
    } else {
        TOAST_DURATION_MS
    };
    elapsed_ms >= limit
}

/// First item to draw so that `selected` stays on screen
///
/// # Arguments
/// * `selected` - Index of the selected item
/// * `offset` - Current first visible item
/// * `visible` - How many items fit
///
/// # Examples
/// ```
/// use chump::logic::ui::scroll_offset;
///
/// assert_eq!(scroll_offset(0, 0, 5), 0);
/// assert_eq!(scroll_offset(7, 0, 5), 3);
/// assert_eq!(scroll_offset(2, 4, 5), 2);
/// ```
pub fn scroll_offset(selected: usize, offset: usize, visible: usize) -> usize {
    if visible == 0 {
        return selected;
    }
    if selected < offset {
        selected
    } else if selected >= offset + visible {
        selected + 1 - visible
    } else {
        offset
    }
}
