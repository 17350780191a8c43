//! Actions on a single post: like, reblog and delete

use super::notify::{ErrorToast, Notifier};
use crate::api::{Post, RabbleClient};

pub const DELETED: &str = "Article deleted successfully";

/// Only the local author may delete a post
pub fn can_delete(viewer: &str, post: &Post) -> bool {
    !viewer.is_empty() && post.author == viewer && post.author_host.is_empty()
}

/// Like or unlike. The post only changes when the backend accepted it.
pub async fn toggle_like(client: &RabbleClient, post: &mut Post, notifier: &mut dyn Notifier) -> bool {
    let is_liked = !post.is_liked;
    match client.send_like(post.global_id, is_liked).await {
        Ok(_) => {
            post.is_liked = is_liked;
            post.likes_count += if is_liked { 1 } else { -1 };
            post.likes_count = post.likes_count.max(0);
            true
        }
        Err(e) => {
            notifier.error(ErrorToast::from_error(&e));
            false
        }
    }
}

/// Reblog a post the viewer has not shared yet
pub async fn reblog(client: &RabbleClient, post: &mut Post, notifier: &mut dyn Notifier) -> bool {
    if post.is_shared {
        return false;
    }
    match client.send_reblog(post.global_id).await {
        Ok(_) => {
            post.is_shared = true;
            post.shares_count += 1;
            true
        }
        Err(e) => {
            notifier.error(ErrorToast::from_error(&e));
            false
        }
    }
}

/// Delete a post once the user has confirmed. On success the caller
/// refreshes whatever list the post came from.
pub async fn delete(client: &RabbleClient, post: &Post, notifier: &mut dyn Notifier) -> bool {
    match client.delete_article(post.global_id).await {
        Ok(_) => {
            notifier.success(DELETED);
            true
        }
        Err(e) => {
            notifier.error(ErrorToast::from_error(&e));
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_delete() {
        let post = Post {
            author: "cian".to_string(),
            ..Post::default()
        };
        assert!(can_delete("cian", &post));
        assert!(!can_delete("aaron", &post));
        assert!(!can_delete("", &post));

        let remote = Post {
            author: "cian".to_string(),
            author_host: "other.ie".to_string(),
            ..Post::default()
        };
        assert!(!can_delete("cian", &remote));
    }
}
