//! Feed containers: the public feed, one user's posts, or a single post

use anyhow::Result;

use super::notify::{ErrorToast, Notifier};
use super::LoadState;
use crate::api::{Post, RabbleClient};
use crate::log_debug;
use crate::logic::fetch::{FetchTicket, FetchTracker};

/// Which posts a feed shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedSource {
    /// The public feed, as seen by `username` (empty when anonymous)
    Public(String),
    /// Everything `username` has written
    User(String),
    /// One post
    Single { username: String, id: String },
}

impl FeedSource {
    pub async fn fetch(&self, client: &RabbleClient) -> Result<Vec<Post>> {
        match self {
            FeedSource::Public(username) => client.get_public_posts(username).await,
            FeedSource::User(username) => client.get_users_posts(username).await,
            FeedSource::Single { username, id } => client.get_single_post(username, id).await,
        }
    }

    /// Path reported for page views
    pub fn path(&self) -> String {
        match self {
            FeedSource::Public(_) => "/".to_string(),
            FeedSource::User(username) => format!("/@{}", username),
            FeedSource::Single { username, id } => format!("/@{}/{}", username, id),
        }
    }
}

/// Headings for the public feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedTitles {
    pub feed: String,
    pub user_feed: String,
}

impl Default for FeedTitles {
    fn default() -> Self {
        Self {
            feed: "Feed".to_string(),
            user_feed: "Your Feed".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FeedView {
    source: FeedSource,
    title: String,
    posts: Vec<Post>,
    state: LoadState,
    tracker: FetchTracker,
    selected: usize,
}

impl FeedView {
    pub fn new(source: FeedSource, titles: &FeedTitles) -> Self {
        let title = match &source {
            FeedSource::Public(username) if username.is_empty() => titles.feed.clone(),
            FeedSource::Public(_) => titles.user_feed.clone(),
            FeedSource::User(username) => format!("@{}", username),
            FeedSource::Single { username, .. } => format!("Post by @{}", username),
        };

        Self {
            source,
            title,
            posts: Vec::new(),
            state: LoadState::Unloaded,
            tracker: FetchTracker::new(),
            selected: 0,
        }
    }

    pub fn source(&self) -> &FeedSource {
        &self.source
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    /// Posts with a flag saying whether a divider goes above each card
    pub fn cards(&self) -> impl Iterator<Item = (bool, &Post)> {
        self.posts.iter().enumerate().map(|(i, post)| (i > 0, post))
    }

    /// Start a fetch. Any result for an earlier ticket will be ignored.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.state = LoadState::Loading;
        self.tracker.begin()
    }

    /// Apply a settled fetch. Returns whether the result was used.
    ///
    /// On failure the list is left alone, an error toast is shown and the
    /// feed stays errored until the user refreshes.
    pub fn apply(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<Post>>,
        notifier: &mut dyn Notifier,
    ) -> bool {
        if !self.tracker.is_current(ticket) {
            log_debug(&format!(
                "DEBUG [feed]: dropping stale result #{} for {:?}",
                ticket.seq(),
                self.source
            ));
            return false;
        }

        match result {
            Ok(posts) => {
                self.posts = posts;
                self.selected = self.selected.min(self.posts.len().saturating_sub(1));
                self.state = LoadState::Loaded;
            }
            Err(e) => {
                notifier.error(ErrorToast::from_error(&e));
                self.state = LoadState::Errored;
            }
        }
        true
    }

    /// Fetch and apply in one go
    pub async fn refresh(&mut self, client: &RabbleClient, notifier: &mut dyn Notifier) {
        let ticket = self.begin_fetch();
        let result = self.source.fetch(client).await;
        self.apply(ticket, result, notifier);
    }

    /// The screen was left; pending results must not land
    pub fn cancel(&mut self) {
        self.tracker.cancel();
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_post(&self) -> Option<&Post> {
        self.posts.get(self.selected)
    }

    pub fn selected_post_mut(&mut self) -> Option<&mut Post> {
        self.posts.get_mut(self.selected)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.posts.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.posts.len().saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::views::notify::Notifications;

    fn post(title: &str) -> Post {
        Post {
            title: title.to_string(),
            ..Post::default()
        }
    }

    #[test]
    fn test_titles() {
        let titles = FeedTitles::default();
        assert_eq!(
            FeedView::new(FeedSource::Public(String::new()), &titles).title(),
            "Feed"
        );
        assert_eq!(
            FeedView::new(FeedSource::Public("cian".to_string()), &titles).title(),
            "Your Feed"
        );
        assert_eq!(
            FeedView::new(FeedSource::User("aaron".to_string()), &titles).title(),
            "@aaron"
        );
    }

    #[test]
    fn test_apply_success_loads() {
        let mut feed = FeedView::new(FeedSource::Public(String::new()), &FeedTitles::default());
        let mut notes = Notifications::new();
        assert_eq!(feed.state(), LoadState::Unloaded);

        let ticket = feed.begin_fetch();
        assert_eq!(feed.state(), LoadState::Loading);
        assert!(feed.apply(ticket, Ok(vec![post("a"), post("b")]), &mut notes));

        assert_eq!(feed.state(), LoadState::Loaded);
        assert_eq!(feed.posts().len(), 2);
        assert!(notes.is_empty());
    }

    #[test]
    fn test_apply_error_keeps_posts() {
        let mut feed = FeedView::new(FeedSource::Public(String::new()), &FeedTitles::default());
        let mut notes = Notifications::new();
        let ticket = feed.begin_fetch();
        feed.apply(ticket, Ok(vec![post("kept")]), &mut notes);

        let ticket = feed.begin_fetch();
        let err = ApiError::Status {
            status: 500,
            body: String::new(),
        };
        feed.apply(ticket, Err(err.into()), &mut notes);

        assert_eq!(feed.state(), LoadState::Errored);
        assert_eq!(feed.posts()[0].title, "kept");
        assert_eq!(notes.errors().len(), 1);
        assert!(notes.errors()[0].debug.is_some());
    }

    #[test]
    fn test_stale_result_dropped() {
        let mut feed = FeedView::new(FeedSource::Public(String::new()), &FeedTitles::default());
        let mut notes = Notifications::new();
        let first = feed.begin_fetch();
        let second = feed.begin_fetch();

        assert!(feed.apply(second, Ok(vec![post("new")]), &mut notes));
        assert!(!feed.apply(first, Ok(vec![post("old")]), &mut notes));
        assert_eq!(feed.posts()[0].title, "new");
    }

    #[test]
    fn test_cancelled_feed_ignores_results() {
        let mut feed = FeedView::new(FeedSource::Public(String::new()), &FeedTitles::default());
        let mut notes = Notifications::new();
        let ticket = feed.begin_fetch();
        feed.cancel();

        assert!(!feed.apply(ticket, Ok(vec![post("late")]), &mut notes));
        assert!(feed.posts().is_empty());
    }

    #[test]
    fn test_divider_before_every_card_but_first() {
        let mut feed = FeedView::new(FeedSource::Public(String::new()), &FeedTitles::default());
        let mut notes = Notifications::new();
        let ticket = feed.begin_fetch();
        feed.apply(ticket, Ok(vec![post("a"), post("b"), post("c")]), &mut notes);

        let dividers: Vec<bool> = feed.cards().map(|(divider, _)| divider).collect();
        assert_eq!(dividers, vec![false, true, true]);
    }

    #[test]
    fn test_selection_clamped_after_reload() {
        let mut feed = FeedView::new(FeedSource::Public(String::new()), &FeedTitles::default());
        let mut notes = Notifications::new();
        let ticket = feed.begin_fetch();
        feed.apply(ticket, Ok(vec![post("a"), post("b"), post("c")]), &mut notes);
        feed.select_last();
        assert_eq!(feed.selected_index(), 2);

        let ticket = feed.begin_fetch();
        feed.apply(ticket, Ok(vec![post("a")]), &mut notes);
        assert_eq!(feed.selected_index(), 0);
        assert_eq!(feed.selected_post().map(|p| p.title.as_str()), Some("a"));
    }

    #[test]
    fn test_source_paths() {
        assert_eq!(FeedSource::Public(String::new()).path(), "/");
        assert_eq!(FeedSource::User("cian".to_string()).path(), "/@cian");
        assert_eq!(
            FeedSource::Single {
                username: "cian".to_string(),
                id: "3".to_string()
            }
            .path(),
            "/@cian/3"
        );
    }
}
