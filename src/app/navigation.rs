//! Route changes: mounting and unmounting containers

use chump::log_debug;
use chump::model::Route;
use chump::views::feed::{FeedSource, FeedTitles};
use chump::views::{
    AccountEditView, ArticleFormView, FeedView, FollowForm, LoginView, LogoutView,
    PendingFollowsView, RegisterView, SearchView,
};

use super::Screen;
use crate::services::api::ApiRequest;
use crate::App;

impl App {
    /// Screens that need a session send anonymous users to the login form
    fn guard(&self, route: Route) -> Route {
        if route.requires_login() && self.session.session().is_anonymous() {
            log_debug(&format!("DEBUG [nav]: {:?} needs a session, showing login", route));
            Route::Login
        } else {
            route
        }
    }

    pub async fn navigate(&mut self, route: Route) {
        let route = self.guard(route);
        if self.model.navigation.navigate(route) {
            self.mount().await;
        }
    }

    pub async fn go_back(&mut self) {
        if self.model.navigation.back() {
            self.mount().await;
        }
    }

    /// Leave the current screen without leaving a way back to it
    pub async fn redirect(&mut self, route: Route) {
        let route = self.guard(route);
        self.model.navigation.replace(route);
        self.mount().await;
    }

    fn feed_titles(&self) -> FeedTitles {
        FeedTitles {
            feed: self.config.strings.feed_title.clone(),
            user_feed: self.config.strings.user_feed_title.clone(),
        }
    }

    /// Tear down the current container and build one for the current route
    pub(crate) async fn mount(&mut self) {
        // A screen may hand control straight on (logout does)
        while let Some(next) = self.mount_current().await {
            let next = self.guard(next);
            self.model.navigation.replace(next);
        }
    }

    async fn mount_current(&mut self) -> Option<Route> {
        self.unmount();

        self.next_view_id += 1;
        self.view_id = self.next_view_id;
        self.model.ui.scroll_offset = 0;

        let route = self.model.route().clone();
        let username = self.session.username().to_string();
        log_debug(&format!("DEBUG [nav]: mounting {:?} as view {}", route, self.view_id));

        self.screen = match &route {
            Route::Feed => Screen::Feed {
                feed: FeedView::new(FeedSource::Public(username), &self.feed_titles()),
                follow: None,
            },
            Route::UserFeed(user) => Screen::Feed {
                feed: FeedView::new(FeedSource::User(user.clone()), &self.feed_titles()),
                follow: None,
            },
            Route::Post { username, id } => Screen::Feed {
                feed: FeedView::new(
                    FeedSource::Single {
                        username: username.clone(),
                        id: id.clone(),
                    },
                    &self.feed_titles(),
                ),
                follow: None,
            },
            Route::Search(_) => Screen::Search(SearchView::new()),
            Route::Write => Screen::Write(ArticleFormView::new()),
            Route::Follow => Screen::Follow(FollowForm::new()),
            Route::Pending => Screen::Pending(PendingFollowsView::new()),
            Route::Account => Screen::Account(AccountEditView::new()),
            Route::Login => Screen::Login(LoginView::new()),
            Route::Register => Screen::Register(RegisterView::new()),
            Route::Logout => Screen::Logout(LogoutView::new()),
        };

        self.track_page_view(&route);
        self.start_loading(&route).await
    }

    fn unmount(&mut self) {
        self.screen.cancel();
        if self.view_id != 0 {
            let _ = self.api_tx.send(ApiRequest::Cancel { view: self.view_id });
        }
    }

    /// Kick off whatever the new screen needs from the backend. Returns a
    /// route to go to instead when the screen is done immediately.
    async fn start_loading(&mut self, route: &Route) -> Option<Route> {
        match route {
            Route::Feed | Route::UserFeed(_) | Route::Post { .. } => self.request_feed(),
            Route::Search(query) => {
                if let Screen::Search(search) = &mut self.screen {
                    if let Some(pending) = search.set_route_query(query) {
                        let _ = self.api_tx.send(ApiRequest::Search {
                            view: self.view_id,
                            pending,
                        });
                    }
                }
            }
            Route::Pending => self.request_pending_follows(),
            Route::Account => {
                if let Screen::Account(view) = &mut self.screen {
                    view.load(&self.client, &mut self.model.ui).await;
                }
            }
            Route::Logout => {
                if self.run_logout().await {
                    return Some(Route::Feed);
                }
            }
            _ => {}
        }
        None
    }

    /// (Re)load the mounted feed in the background
    pub fn request_feed(&mut self) {
        if let Screen::Feed { feed, .. } = &mut self.screen {
            let ticket = feed.begin_fetch();
            let _ = self.api_tx.send(ApiRequest::LoadFeed {
                view: self.view_id,
                ticket,
                source: feed.source().clone(),
            });
        }
    }

    pub fn request_pending_follows(&mut self) {
        if let Screen::Pending(pending) = &mut self.screen {
            let ticket = pending.begin_fetch();
            let _ = self.api_tx.send(ApiRequest::LoadPendingFollows {
                view: self.view_id,
                ticket,
            });
        }
    }

    /// Search from the on-page box of the mounted search screen
    pub fn submit_search(&mut self) {
        if let Screen::Search(search) = &mut self.screen {
            let pending = search.submit();
            let _ = self.api_tx.send(ApiRequest::Search {
                view: self.view_id,
                pending,
            });
        }
    }

    fn track_page_view(&mut self, route: &Route) {
        if !self.config.track_views {
            return;
        }
        if let Some(path) = self.pageviews.observe(&route.path()) {
            let _ = self.api_tx.send(ApiRequest::TrackView {
                path,
                user_id: self.session.user_id(),
            });
        }
    }
}
