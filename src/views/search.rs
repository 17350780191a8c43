//! Search results: posts and users matching a query

use anyhow::Result;

use super::notify::{ErrorToast, Notifier};
use super::LoadState;
use crate::api::{Post, RabbleClient, SearchResponse, User};
use crate::log_debug;
use crate::logic::fetch::{FetchTicket, FetchTracker};

pub const NO_POSTS: &str = "No Posts found";
pub const NO_USERS: &str = "No Users found";

/// A query waiting to be sent, tagged with its ticket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSearch {
    pub ticket: FetchTicket,
    pub query: String,
}

#[derive(Debug, Clone, Default)]
pub struct SearchView {
    /// Query from the route (header search)
    route_query: String,
    /// On-page search box
    pub input: String,
    /// Query the current results answer
    shown_query: String,
    posts: Vec<Post>,
    users: Vec<User>,
    users_expanded: bool,
    state: LoadState,
    tracker: FetchTracker,
}

impl SearchView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route query changed. Only a different query triggers a fetch.
    pub fn set_route_query(&mut self, query: &str) -> Option<PendingSearch> {
        if self.state != LoadState::Unloaded && self.route_query == query {
            return None;
        }
        self.route_query = query.to_string();
        self.input = query.to_string();
        Some(self.begin(query.to_string()))
    }

    /// Search for whatever is in the on-page box
    pub fn submit(&mut self) -> PendingSearch {
        let query = self.input.trim().to_string();
        self.begin(query)
    }

    fn begin(&mut self, query: String) -> PendingSearch {
        self.state = LoadState::Loading;
        PendingSearch {
            ticket: self.tracker.begin(),
            query,
        }
    }

    /// Apply results. The newest query issued wins regardless of which
    /// response arrives last.
    pub fn apply(
        &mut self,
        pending: &PendingSearch,
        result: Result<SearchResponse>,
        notifier: &mut dyn Notifier,
    ) -> bool {
        if !self.tracker.is_current(pending.ticket) {
            log_debug(&format!(
                "DEBUG [search]: dropping stale results for {:?}",
                pending.query
            ));
            return false;
        }

        match result {
            Ok(response) => {
                self.posts = response.posts;
                self.users = response.users;
                self.shown_query = pending.query.clone();
                self.users_expanded = false;
                self.state = LoadState::Loaded;
            }
            Err(e) => {
                notifier.error(ErrorToast::from_error(&e));
                self.state = LoadState::Errored;
            }
        }
        true
    }

    pub async fn run(
        &mut self,
        client: &RabbleClient,
        pending: PendingSearch,
        notifier: &mut dyn Notifier,
    ) {
        let result = client.search(&pending.query).await;
        self.apply(&pending, result, notifier);
    }

    pub fn cancel(&mut self) {
        self.tracker.cancel();
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn route_query(&self) -> &str {
        &self.route_query
    }

    pub fn shown_query(&self) -> &str {
        &self.shown_query
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Users currently on screen; past the first they hide until expanded
    pub fn visible_users(&self) -> &[User] {
        if self.users_expanded || self.users.len() < 2 {
            &self.users
        } else {
            &self.users[..1]
        }
    }

    pub fn users_expanded(&self) -> bool {
        self.users_expanded
    }

    pub fn toggle_users(&mut self) {
        if self.users.len() >= 2 {
            self.users_expanded = !self.users_expanded;
        }
    }

    /// Label for the expand/close toggle, absent when there is nothing to hide
    pub fn users_toggle_label(&self) -> Option<&'static str> {
        if self.users.len() < 2 {
            None
        } else if self.users_expanded {
            Some("Close")
        } else {
            Some("More Users")
        }
    }
}
