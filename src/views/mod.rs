//! View containers
//!
//! Each screen of the client is a plain struct that owns its state and
//! talks to the backend through an explicitly passed `RabbleClient`.
//! Outcomes the user should see go through a `Notifier`. Nothing here
//! knows about the terminal, so every container can be driven from tests.
//!
//! - feed: public feed, a user's posts, a single post
//! - search: posts and users matching a query
//! - login / logout / register / account_edit: account screens
//! - article_form: writing and previewing an article
//! - follow_form / follow_button / pending_follows: follow relationships
//! - post_actions: like, reblog and delete on a single post
//! - notify: the `Notifier` capability
//! - form: text input handling shared by the forms

pub mod account_edit;
pub mod article_form;
pub mod feed;
pub mod follow_button;
pub mod follow_form;
pub mod form;
pub mod login;
pub mod logout;
pub mod notify;
pub mod pending_follows;
pub mod post_actions;
pub mod register;
pub mod search;

pub use account_edit::AccountEditView;
pub use article_form::ArticleFormView;
pub use feed::{FeedSource, FeedView};
pub use follow_button::FollowButton;
pub use follow_form::{FollowForm, FollowKind};
pub use form::{FieldSpec, Form};
pub use login::LoginView;
pub use logout::LogoutView;
pub use notify::{ErrorToast, Notification, Notifications, Notifier};
pub use pending_follows::PendingFollowsView;
pub use register::RegisterView;
pub use search::SearchView;

/// Lifecycle of a container's remote data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Unloaded,
    Loading,
    Loaded,
    Errored,
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}
