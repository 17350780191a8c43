use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub base_url: String,
    #[serde(default)]
    pub vim_mode: bool,
    /// Report page views to the backend
    #[serde(default = "default_track_views")]
    pub track_views: bool,
    /// Where the session database lives (default: platform data dir)
    #[serde(default)]
    pub session_path: Option<PathBuf>,
    #[serde(default)]
    pub strings: Strings,
}

/// User-visible text that deployments like to reword
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Strings {
    pub bad_login: String,
    pub feed_title: String,
    pub user_feed_title: String,
    pub success_follow_form: String,
    pub delete_confirm: String,
}

impl Default for Strings {
    fn default() -> Self {
        Self {
            bad_login: "Incorrect username or password".to_string(),
            feed_title: "Feed".to_string(),
            user_feed_title: "Your Feed".to_string(),
            success_follow_form: "Followed successfully".to_string(),
            delete_confirm: "Are you sure you want to delete this article?".to_string(),
        }
    }
}

fn default_track_views() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config() {
        let config: Config = serde_yaml::from_str("base_url: http://localhost:1916\n").unwrap();
        assert_eq!(config.base_url, "http://localhost:1916");
        assert!(!config.vim_mode);
        assert!(config.track_views);
        assert!(config.session_path.is_none());
        assert_eq!(config.strings.feed_title, "Feed");
    }

    #[test]
    fn test_partial_strings_keep_defaults() {
        let yaml = "base_url: http://x\nstrings:\n  bad_login: Nope\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.strings.bad_login, "Nope");
        assert_eq!(config.strings.user_feed_title, "Your Feed");
    }

    #[test]
    fn test_base_url_required() {
        assert!(serde_yaml::from_str::<Config>("vim_mode: true\n").is_err());
    }
}
