//! Follow / unfollow toggle shown on profiles and posts

use super::notify::{ErrorToast, Notifier};
use crate::api::RabbleClient;
use crate::logic::follow::{self, FollowAction};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FollowButton {
    follower: String,
    followed: String,
    followed_host: String,
    following: bool,
}

impl FollowButton {
    pub fn new(follower: &str, followed: &str, followed_host: &str, following: bool) -> Self {
        Self {
            follower: follower.to_string(),
            followed: followed.to_string(),
            followed_host: followed_host.to_string(),
            following,
        }
    }

    pub fn following(&self) -> bool {
        self.following
    }

    pub fn is_visible(&self) -> bool {
        follow::should_show_follow_button(&self.follower, &self.followed, &self.followed_host)
    }

    /// Button text: the primary label, plus the hover label while following
    pub fn labels(&self) -> (&'static str, Option<&'static str>) {
        if self.following {
            ("Following", Some("Unfollow"))
        } else {
            ("Follow", None)
        }
    }

    /// Follow or unfollow depending on the current state. The state only
    /// changes once the backend confirms with a 200.
    pub async fn submit(&mut self, client: &RabbleClient, notifier: &mut dyn Notifier) {
        if !self.is_visible() {
            return;
        }

        let action = FollowAction::for_state(self.following);
        let result = match action {
            FollowAction::Follow => {
                client
                    .create_follow(&self.follower, &self.followed, &self.followed_host)
                    .await
            }
            FollowAction::Unfollow => client.unfollow(&self.follower, &self.followed).await,
        };

        match result {
            Ok(status) => {
                if status != 200 {
                    notifier.error(ErrorToast::status(status));
                }
                self.following = follow::next_following(self.following, action, status);
            }
            Err(e) => notifier.error(ErrorToast::from_error(&e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility() {
        assert!(!FollowButton::new("", "cian", "", false).is_visible());
        assert!(!FollowButton::new("cian", "cian", "", false).is_visible());
        assert!(FollowButton::new("cian", "cian", "elsewhere.ie", false).is_visible());
        assert!(FollowButton::new("aaron", "cian", "", true).is_visible());
    }

    #[test]
    fn test_labels() {
        assert_eq!(FollowButton::new("a", "b", "", false).labels(), ("Follow", None));
        assert_eq!(
            FollowButton::new("a", "b", "", true).labels(),
            ("Following", Some("Unfollow"))
        );
    }
}
