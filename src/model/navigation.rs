//! Navigation Model
//!
//! This sub-model contains the current route and the back-stack.

/// Every screen the client can show
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Feed,
    UserFeed(String),
    Post { username: String, id: String },
    Search(String),
    Write,
    Follow,
    Pending,
    Account,
    Login,
    Register,
    Logout,
}

impl Route {
    /// Path as the web client would show it; also what page views report
    pub fn path(&self) -> String {
        match self {
            Route::Feed => "/".to_string(),
            Route::UserFeed(username) => format!("/@{}", username),
            Route::Post { username, id } => format!("/@{}/{}", username, id),
            Route::Search(query) => format!("/search/{}", query),
            Route::Write => "/write".to_string(),
            Route::Follow => "/follow".to_string(),
            Route::Pending => "/pending".to_string(),
            Route::Account => "/account".to_string(),
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::Logout => "/logout".to_string(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Feed => "Feed",
            Route::UserFeed(_) => "Profile",
            Route::Post { .. } => "Post",
            Route::Search(_) => "Search",
            Route::Write => "Write",
            Route::Follow => "Follow",
            Route::Pending => "Follow requests",
            Route::Account => "Account",
            Route::Login => "Login",
            Route::Register => "Register",
            Route::Logout => "Logout",
        }
    }

    /// Screens that make no sense without a session
    pub fn requires_login(&self) -> bool {
        matches!(
            self,
            Route::Write | Route::Follow | Route::Pending | Route::Account | Route::Logout
        )
    }

    /// Screens where typed characters go into a form
    pub fn is_form(&self) -> bool {
        matches!(
            self,
            Route::Write | Route::Follow | Route::Account | Route::Login | Route::Register
        )
    }
}

/// Navigation state (current route, history)
#[derive(Clone, Debug)]
pub struct NavigationModel {
    current: Route,
    history: Vec<Route>,
}

impl NavigationModel {
    pub fn new() -> Self {
        Self {
            current: Route::Feed,
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    /// Go to `route`, remembering where we came from. Returns false when
    /// already there.
    pub fn navigate(&mut self, route: Route) -> bool {
        if route == self.current {
            return false;
        }
        let previous = std::mem::replace(&mut self.current, route);
        self.history.push(previous);
        true
    }

    /// Go to `route` without a history entry (redirects)
    pub fn replace(&mut self, route: Route) {
        self.current = route;
    }

    /// Return to the previous route, if there is one
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.current = previous;
                true
            }
            None => false,
        }
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.history.len()
    }
}

impl Default for NavigationModel {
    fn default() -> Self {
        Self::new()
    }
}
