//! Follow button rules

/// Request the follow button issues for the current state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowAction {
    Follow,
    Unfollow,
}

impl FollowAction {
    pub fn for_state(following: bool) -> Self {
        if following {
            FollowAction::Unfollow
        } else {
            FollowAction::Follow
        }
    }
}

/// The button is hidden for anonymous viewers and on the viewer's own
/// (local) profile
///
/// # Examples
/// ```
/// use chump::logic::follow::should_show_follow_button;
///
/// assert!(!should_show_follow_button("", "cian", ""));
/// assert!(!should_show_follow_button("cian", "cian", ""));
/// assert!(should_show_follow_button("cian", "cian", "other.host"));
/// assert!(should_show_follow_button("aaron", "cian", ""));
/// ```
pub fn should_show_follow_button(follower: &str, followed: &str, followed_host: &str) -> bool {
    if follower.is_empty() {
        return false;
    }
    !(follower == followed && followed_host.is_empty())
}

/// State after a settled follow/unfollow request
///
/// Only a plain 200 confirms the change; anything else keeps the old state.
pub fn next_following(following: bool, action: FollowAction, status: u16) -> bool {
    if status != 200 {
        return following;
    }
    match action {
        FollowAction::Follow => true,
        FollowAction::Unfollow => false,
    }
}
