//! Fetch sequencing for view containers
//!
//! Every fetch a container issues gets a ticket. A result may only be
//! applied when its ticket is the newest one issued and the container is
//! still mounted, so a slow first response can never overwrite the answer
//! to a later query, and nothing lands in a view that has been left.

/// Identifies one fetch issued by a container
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FetchTicket(u64);

impl FetchTicket {
    pub fn seq(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchTracker {
    latest: u64,
    cancelled: bool,
}

impl FetchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next ticket; it supersedes every earlier one
    pub fn begin(&mut self) -> FetchTicket {
        self.latest += 1;
        FetchTicket(self.latest)
    }

    /// Whether a result carrying `ticket` should still be applied
    ///
    /// # Examples
    /// ```
    /// use chump::logic::fetch::FetchTracker;
    ///
    /// let mut tracker = FetchTracker::new();
    /// let first = tracker.begin();
    /// let second = tracker.begin();
    /// assert!(!tracker.is_current(first));
    /// assert!(tracker.is_current(second));
    ///
    /// tracker.cancel();
    /// assert!(!tracker.is_current(second));
    /// ```
    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        !self.cancelled && ticket.0 == self.latest
    }

    /// Mark the owning container as unmounted
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Newest ticket issued so far, if any
    pub fn latest(&self) -> Option<FetchTicket> {
        (self.latest > 0).then_some(FetchTicket(self.latest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tickets_increase() {
        let mut tracker = FetchTracker::new();
        let a = tracker.begin();
        let b = tracker.begin();
        let c = tracker.begin();
        assert!(a < b && b < c);
        assert_eq!(tracker.latest(), Some(c));
    }

    #[test]
    fn test_no_ticket_before_first_fetch() {
        let tracker = FetchTracker::new();
        assert_eq!(tracker.latest(), None);
        assert!(!tracker.is_cancelled());
    }

    #[test]
    fn test_only_latest_is_current() {
        let mut tracker = FetchTracker::new();
        let first = tracker.begin();
        assert!(tracker.is_current(first));

        let second = tracker.begin();
        // First resolves late: must be ignored
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
    }

    #[test]
    fn test_cancel_rejects_everything() {
        let mut tracker = FetchTracker::new();
        let ticket = tracker.begin();
        tracker.cancel();
        assert!(tracker.is_cancelled());
        assert!(!tracker.is_current(ticket));

        // Fetches started after unmount are dead on arrival too
        let late = tracker.begin();
        assert!(!tracker.is_current(late));
    }
}
