//! The container mounted for the current route

use chump::views::{
    AccountEditView, ArticleFormView, FeedView, FollowButton, FollowForm, Form, LoginView,
    LogoutView, PendingFollowsView, RegisterView, SearchView,
};

pub enum Screen {
    /// Nothing mounted yet
    Empty,
    Feed {
        feed: FeedView,
        /// Shown on a user's profile once their posts are in
        follow: Option<FollowButton>,
    },
    Search(SearchView),
    Write(ArticleFormView),
    Follow(FollowForm),
    Pending(PendingFollowsView),
    Account(AccountEditView),
    Login(LoginView),
    Register(RegisterView),
    Logout(LogoutView),
}

impl Screen {
    /// Stop pending results from landing in this container
    pub fn cancel(&mut self) {
        match self {
            Screen::Feed { feed, .. } => feed.cancel(),
            Screen::Search(search) => search.cancel(),
            Screen::Pending(pending) => pending.cancel(),
            _ => {}
        }
    }

    pub fn form(&self) -> Option<&dyn Form> {
        match self {
            Screen::Write(view) => Some(view),
            Screen::Follow(view) => Some(view),
            Screen::Account(view) => Some(view),
            Screen::Login(view) => Some(view),
            Screen::Register(view) => Some(view),
            _ => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut dyn Form> {
        match self {
            Screen::Write(view) => Some(view),
            Screen::Follow(view) => Some(view),
            Screen::Account(view) => Some(view),
            Screen::Login(view) => Some(view),
            Screen::Register(view) => Some(view),
            _ => None,
        }
    }
}
