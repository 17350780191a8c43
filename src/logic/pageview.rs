//! Page-view tracking decisions
//!
//! The shell feeds every navigation into `PageViewTracker::observe`, which
//! decides whether that navigation should be reported.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageViewTracker {
    last_path: Option<String>,
}

impl PageViewTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the path to report, or `None` when this navigation is not a
    /// new page view (an empty path, or the same path as the last report).
    ///
    /// # Examples
    /// ```
    /// use chump::logic::pageview::PageViewTracker;
    ///
    /// let mut tracker = PageViewTracker::new();
    /// assert_eq!(tracker.observe(""), None);
    /// assert_eq!(tracker.observe("/"), Some("/".to_string()));
    /// assert_eq!(tracker.observe("/"), None);
    /// assert_eq!(tracker.observe("/@cian"), Some("/@cian".to_string()));
    /// ```
    pub fn observe(&mut self, path: &str) -> Option<String> {
        if path.is_empty() {
            return None;
        }
        if self.last_path.as_deref() == Some(path) {
            return None;
        }
        self.last_path = Some(path.to_string());
        Some(path.to_string())
    }
}
