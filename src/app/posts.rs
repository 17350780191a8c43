//! Actions on the selected post of a feed screen

use chump::log_debug;
use chump::model::{ConfirmDelete, Route};
use chump::views::{post_actions, FollowButton};

use super::Screen;
use crate::App;

impl App {
    pub async fn like_selected(&mut self) {
        if self.session.session().is_anonymous() {
            self.navigate(Route::Login).await;
            return;
        }
        if let Screen::Feed { feed, .. } = &mut self.screen {
            if let Some(post) = feed.selected_post_mut() {
                post_actions::toggle_like(&self.client, post, &mut self.model.ui).await;
            }
        }
    }

    pub async fn reblog_selected(&mut self) {
        if self.session.session().is_anonymous() {
            self.navigate(Route::Login).await;
            return;
        }
        if let Screen::Feed { feed, .. } = &mut self.screen {
            if let Some(post) = feed.selected_post_mut() {
                if post_actions::reblog(&self.client, post, &mut self.model.ui).await {
                    self.model.ui.show_toast("Reblogged".to_string());
                }
            }
        }
    }

    /// Ask before deleting; only the author gets the prompt
    pub fn request_delete_selected(&mut self) {
        let Screen::Feed { feed, .. } = &self.screen else {
            return;
        };
        let Some(post) = feed.selected_post() else {
            return;
        };
        if !post_actions::can_delete(self.session.username(), post) {
            log_debug("DEBUG [posts]: delete refused, not the author");
            return;
        }
        self.model.ui.confirm_delete = Some(ConfirmDelete {
            article_id: post.global_id,
            title: post.title.clone(),
        });
    }

    pub async fn delete_confirmed(&mut self) {
        let Some(confirm) = self.model.ui.confirm_delete.take() else {
            return;
        };
        let Screen::Feed { feed, .. } = &self.screen else {
            return;
        };
        let Some(post) = feed
            .posts()
            .iter()
            .find(|p| p.global_id == confirm.article_id)
            .cloned()
        else {
            return;
        };

        if post_actions::delete(&self.client, &post, &mut self.model.ui).await {
            // A deleted single post has nothing left to show
            if matches!(self.model.route(), Route::Post { .. }) {
                self.go_back().await;
            } else {
                self.request_feed();
            }
        }
    }

    /// Follow or unfollow: the profile owner on a profile, otherwise the
    /// author of the selected post
    pub async fn toggle_follow(&mut self) {
        let viewer = self.session.username().to_string();
        if viewer.is_empty() {
            self.navigate(Route::Login).await;
            return;
        }

        let Screen::Feed { feed, follow } = &mut self.screen else {
            return;
        };

        if let Some(button) = follow {
            button.submit(&self.client, &mut self.model.ui).await;
            return;
        }

        let Some(post) = feed.selected_post_mut() else {
            return;
        };
        let mut button = FollowButton::new(&viewer, &post.author, &post.author_host, post.is_followed);
        if !button.is_visible() {
            return;
        }
        button.submit(&self.client, &mut self.model.ui).await;
        post.is_followed = button.following();
    }

    /// Open the selected post's author profile
    pub async fn open_selected_author(&mut self) {
        let Screen::Feed { feed, .. } = &self.screen else {
            return;
        };
        if let Some(post) = feed.selected_post() {
            let route = Route::UserFeed(post.author_handle());
            self.navigate(route).await;
        }
    }

    /// Open the selected post on its own
    pub async fn open_selected_post(&mut self) {
        let Screen::Feed { feed, .. } = &self.screen else {
            return;
        };
        if matches!(self.model.route(), Route::Post { .. }) {
            return;
        }
        if let Some(post) = feed.selected_post() {
            let route = Route::Post {
                username: post.author.clone(),
                id: post.global_id.to_string(),
            };
            self.navigate(route).await;
        }
    }
}
