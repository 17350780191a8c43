//! API Response Handler
//!
//! Handles responses from the background fetch service and hands them to
//! the mounted container.

use chump::log_debug;
use chump::views::FollowButton;

use crate::app::Screen;
use crate::services::api::{ApiResponse, ViewId};
use crate::App;

/// Handle API response from background service
///
/// Response types:
/// - FeedResult: Posts for a feed, profile or single post screen
/// - SearchResult: Posts and users for a search
/// - PendingFollowsResult: Follow requests awaiting approval
/// - ViewTracked: Outcome of a page view report (only logged)
pub fn handle_api_response(app: &mut App, response: ApiResponse) {
    match response {
        ApiResponse::FeedResult {
            view,
            ticket,
            posts,
        } => {
            if !is_relevant(app, view) {
                return;
            }
            let viewer = app.session.username().to_string();
            let Screen::Feed { feed, follow } = &mut app.screen else {
                return;
            };

            if !feed.apply(ticket, posts, &mut app.model.ui) {
                return;
            }

            // Profiles get a follow button once we know whose they are
            if let chump::views::FeedSource::User(username) = feed.source() {
                let following = feed.posts().first().is_some_and(|p| p.is_followed);
                let (handle, host) = chump::logic::handles::split(username);
                let button = FollowButton::new(&viewer, &handle, host.as_deref().unwrap_or(""), following);
                *follow = button.is_visible().then_some(button);
            }
        }

        ApiResponse::SearchResult {
            view,
            pending,
            results,
        } => {
            if !is_relevant(app, view) {
                return;
            }
            if let Screen::Search(search) = &mut app.screen {
                search.apply(&pending, results, &mut app.model.ui);
            }
        }

        ApiResponse::PendingFollowsResult {
            view,
            ticket,
            followers,
        } => {
            if !is_relevant(app, view) {
                return;
            }
            if let Screen::Pending(pending) = &mut app.screen {
                pending.apply(ticket, followers, &mut app.model.ui);
            }
        }

        ApiResponse::ViewTracked { path, result } => {
            if let Err(e) = result {
                log_debug(&format!("DEBUG [ViewTracked]: failed for {}: {:#}", path, e));
            }
        }
    }
}

/// Responses for a screen that has since been left are dropped
fn is_relevant(app: &App, view: ViewId) -> bool {
    if view != app.view_id {
        log_debug(&format!(
            "DEBUG [api]: Skipping response for view {} (current view {})",
            view, app.view_id
        ));
        return false;
    }
    true
}
