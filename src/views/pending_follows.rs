//! Follow requests waiting on a private account's approval

use super::notify::{ErrorToast, Notifier};
use super::LoadState;
use crate::api::{PendingFollow, RabbleClient};
use crate::logic::fetch::{FetchTicket, FetchTracker};

#[derive(Debug, Clone, Default)]
pub struct PendingFollowsView {
    followers: Vec<PendingFollow>,
    selected: usize,
    state: LoadState,
    tracker: FetchTracker,
}

impl PendingFollowsView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn followers(&self) -> &[PendingFollow] {
        &self.followers
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.followers.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.state = LoadState::Loading;
        self.tracker.begin()
    }

    pub fn apply(
        &mut self,
        ticket: FetchTicket,
        result: anyhow::Result<Vec<PendingFollow>>,
        notifier: &mut dyn Notifier,
    ) -> bool {
        if !self.tracker.is_current(ticket) {
            return false;
        }
        match result {
            Ok(followers) => {
                self.followers = followers;
                self.selected = 0;
                self.state = LoadState::Loaded;
            }
            Err(e) => {
                notifier.error(ErrorToast::from_error(&e));
                self.state = LoadState::Errored;
            }
        }
        true
    }

    pub async fn refresh(&mut self, client: &RabbleClient, notifier: &mut dyn Notifier) {
        let ticket = self.begin_fetch();
        let result = client
            .get_pending_follows()
            .await
            .map(|pending| pending.followers.unwrap_or_default());
        self.apply(ticket, result, notifier);
    }

    pub fn cancel(&mut self) {
        self.tracker.cancel();
    }

    /// Accept or reject the selected request on behalf of `handle`. The
    /// entry leaves the list only when the backend accepted the answer.
    pub async fn respond(
        &mut self,
        client: &RabbleClient,
        handle: &str,
        accept: bool,
        notifier: &mut dyn Notifier,
    ) {
        let Some(follower) = self.followers.get(self.selected).cloned() else {
            return;
        };

        match client.accept_follow(handle, &follower, accept).await {
            Ok(()) => {
                let verb = if accept { "Accepted" } else { "Rejected" };
                notifier.success(&format!("{} {}", verb, follower.display_handle()));
                self.followers.retain(|f| f != &follower);
                self.selected = self.selected.min(self.followers.len().saturating_sub(1));
            }
            Err(e) => notifier.error(ErrorToast::from_error(&e)),
        }
    }
}
