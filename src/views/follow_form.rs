//! Follow a user or an RSS/Atom feed by typing it in

use super::form::{FieldSpec, Form};
use super::notify::{ErrorToast, Notifier};
use crate::api::RabbleClient;
use crate::logic::{handles, validation};

const USERNAME_PLACEHOLDER: &str = "user[@instance.com]";
const FEED_PLACEHOLDER: &str = "https://examplesite.com/feed";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FollowKind {
    #[default]
    Username,
    Feed,
}

impl FollowKind {
    pub fn placeholder(&self) -> &'static str {
        match self {
            FollowKind::Username => USERNAME_PLACEHOLDER,
            FollowKind::Feed => FEED_PLACEHOLDER,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FollowKind::Username => "Username",
            FollowKind::Feed => "Rss/Atom",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            FollowKind::Username => FollowKind::Feed,
            FollowKind::Feed => FollowKind::Username,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FollowForm {
    pub to_follow: String,
    pub kind: FollowKind,
}

impl FollowForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_kind(&mut self) {
        self.kind = self.kind.toggled();
    }

    fn reset(&mut self) {
        self.to_follow.clear();
        self.kind = FollowKind::Username;
    }

    /// Follow whatever was typed. Returns whether a request was sent.
    pub async fn submit(
        &mut self,
        client: &RabbleClient,
        follower: &str,
        success_message: &str,
        notifier: &mut dyn Notifier,
    ) -> bool {
        if validation::check_follow_target(&self.to_follow).is_err() {
            return false;
        }

        let target = self.to_follow.trim();
        let result = match self.kind {
            FollowKind::Feed => client.create_rss_follow(follower, target).await,
            FollowKind::Username => {
                let (handle, host) = handles::split(target);
                client
                    .create_follow(follower, &handle, host.as_deref().unwrap_or(""))
                    .await
            }
        };

        // The input is kept when the request fails so it can be retried
        match result {
            Ok(200) => {
                notifier.success(success_message);
                self.reset();
            }
            Ok(status) => {
                notifier.error(ErrorToast::status(status));
                self.reset();
            }
            Err(e) => notifier.error(ErrorToast::from_error(&e)),
        }
        true
    }
}

impl Form for FollowForm {
    fn fields(&self) -> Vec<FieldSpec> {
        vec![FieldSpec::text(self.kind.label(), self.kind.placeholder())]
    }

    fn value(&self, index: usize) -> &str {
        match index {
            0 => &self.to_follow,
            _ => "",
        }
    }

    fn value_mut(&mut self, index: usize) -> Option<&mut String> {
        match index {
            0 => Some(&mut self.to_follow),
            _ => None,
        }
    }

    fn focus(&self) -> usize {
        0
    }

    fn set_focus(&mut self, _index: usize) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_switches_placeholder() {
        let mut form = FollowForm::new();
        assert_eq!(form.fields()[0].placeholder, USERNAME_PLACEHOLDER);
        form.toggle_kind();
        assert_eq!(form.kind, FollowKind::Feed);
        assert_eq!(form.fields()[0].placeholder, FEED_PLACEHOLDER);
    }
}
