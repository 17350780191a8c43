use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::cookie::{CookieStore, Jar};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, StatusCode, Url};
use serde::{Deserialize, Deserializer, Serialize};

use crate::log_debug;
use crate::logic;

/// Extra attempts for the calls the backend treats as idempotent
const MAX_RETRIES: u32 = 2;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct Post {
    #[serde(default)]
    pub global_id: i64,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub author_host: String,
    #[serde(default)]
    pub author_id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String, // HTML
    #[serde(default)]
    pub summary: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub likes_count: i64,
    #[serde(default)]
    pub shares_count: i64,
    #[serde(default)]
    pub published: String,
    /// Derived from `published`, only used for ordering
    #[serde(skip)]
    pub parsed_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub is_liked: bool,
    #[serde(default)]
    pub is_followed: bool,
    #[serde(default)]
    pub is_shared: bool,
}

impl Post {
    /// Author handle, qualified with the remote host when there is one
    pub fn author_handle(&self) -> String {
        logic::handles::qualify(&self.author, &self.author_host)
    }
}

/// Wrapped boolean as the backend encodes optional flags (`{"value": true}`)
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct BoolValue {
    #[serde(default)]
    pub value: Option<bool>,
}

impl BoolValue {
    pub fn get(&self) -> bool {
        self.value.unwrap_or(false)
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct User {
    #[serde(default)]
    pub handle: String,
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub private: Option<BoolValue>,
    #[serde(default)]
    pub is_followed: bool,
    #[serde(default)]
    pub global_id: i64,
}

impl User {
    pub fn is_private(&self) -> bool {
        self.private.map(|p| p.get()).unwrap_or(false)
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct PendingFollow {
    pub handle: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
}

impl PendingFollow {
    pub fn display_handle(&self) -> String {
        logic::handles::qualify(&self.handle, self.host.as_deref().unwrap_or(""))
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct PendingFollows {
    #[serde(default)]
    pub followers: Option<Vec<PendingFollow>>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct SearchResponse {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub posts: Vec<Post>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub users: Vec<User>,
}

/// Body returned by login, register and profile edits
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct UserResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: String,
    #[serde(default)]
    pub user_id: i64,
    /// HTTP status the body arrived with
    #[serde(skip)]
    pub status_code: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoutResult {
    pub success: bool,
    pub status_code: u16,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct UserDetails {
    #[serde(default)]
    pub handle: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub private: BoolValue,
    #[serde(default)]
    pub custom_css: String,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct EditUserRequest {
    pub bio: String,
    pub display_name: String,
    pub current_password: String,
    pub new_password: String,
    pub private: BoolValue,
    pub custom_css: String,
}

#[derive(Debug, Serialize)]
struct FollowBody<'a> {
    follower: &'a str,
    followed: &'a str,
}

#[derive(Debug, Serialize)]
struct RssFollowBody<'a> {
    follower: &'a str,
    feed_url: &'a str,
}

#[derive(Debug, Serialize)]
struct AcceptFollowBody<'a> {
    handle: &'a str,
    follower: &'a PendingFollow,
    is_accepted: bool,
}

#[derive(Debug, Serialize)]
struct ArticleIdBody {
    article_id: i64,
}

#[derive(Debug, Serialize)]
struct LikeBody {
    article_id: i64,
    is_liked: bool,
}

#[derive(Debug, Serialize)]
struct LoginBody<'a> {
    handle: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct RegisterBody<'a> {
    handle: &'a str,
    password: &'a str,
    #[serde(rename = "displayName")]
    display_name: &'a str,
    bio: &'a str,
}

#[derive(Debug, Serialize)]
struct ArticleBody<'a> {
    author: &'a str,
    title: &'a str,
    body: &'a str,
    tags: &'a [String],
    creation_datetime: String,
}

#[derive(Debug, Serialize)]
struct ViewBody<'a> {
    path: &'a str,
    user: i64,
}

#[derive(Debug, Deserialize)]
struct MessageResponse {
    #[serde(default)]
    message: String,
}

/// Failures the backend reports through the HTTP exchange itself
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed with status {status}")]
    Status { status: u16, body: String },
    #[error("{0}")]
    EmptyBody(&'static str),
}

/// Helper function to deserialize null as empty vector
fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let opt = Option::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

/// Parse a post list body. The feed answers `null` (or nothing) when there
/// are no posts, which is an empty list rather than an error.
pub fn parse_post_list(text: &str) -> Result<Vec<Post>> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    let posts: Option<Vec<Post>> =
        serde_json::from_str(text).context("Failed to parse post list")?;
    Ok(posts.unwrap_or_default())
}

fn is_retryable_status(status: StatusCode) -> bool {
    matches!(status.as_u16(), 408 | 429 | 500 | 502 | 503 | 504)
}

async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status: status.as_u16(),
        body,
    }
    .into())
}

/// Interpret a login/register/edit response. Error statuses still carry a
/// JSON body with the reason, so they come back as unsuccessful results.
async fn parse_user_response(response: reqwest::Response) -> Result<UserResponse> {
    let status = response.status();
    let text = response.text().await.context("Failed to read user response")?;

    if let Ok(mut parsed) = serde_json::from_str::<UserResponse>(&text) {
        parsed.status_code = status.as_u16();
        if !status.is_success() {
            parsed.success = false;
        }
        return Ok(parsed);
    }

    if status.is_success() {
        return Err(anyhow::anyhow!("Failed to parse user response: {}", text));
    }

    Ok(UserResponse {
        success: false,
        error: text,
        user_id: 0,
        status_code: status.as_u16(),
    })
}

#[derive(Clone)]
pub struct RabbleClient {
    base_url: String,
    client: Client,
    cookies: Arc<Jar>,
}

impl RabbleClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let cookies = Arc::new(Jar::default());
        let client = Client::builder()
            .cookie_provider(cookies.clone())
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            cookies,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Current server session cookie header (`name=value; ...`), if any
    pub fn session_cookie(&self) -> Option<String> {
        let url = Url::parse(&self.base_url).ok()?;
        self.cookies
            .cookies(&url)
            .and_then(|value| value.to_str().ok().map(str::to_string))
    }

    /// Reload a cookie header saved by `session_cookie`
    pub fn restore_session_cookie(&self, header: &str) -> Result<()> {
        let url = Url::parse(&self.base_url).context("Invalid base_url")?;
        for cookie in header.split("; ").filter(|c| !c.is_empty()) {
            self.cookies.add_cookie_str(cookie, &url);
        }
        Ok(())
    }

    async fn fetch_posts(&self, path: &str) -> Result<Vec<Post>> {
        log_debug(&format!("DEBUG [api]: GET {}", path));
        let response = self
            .client
            .get(self.url(path))
            .header(ACCEPT, "application/json")
            .send()
            .await
            .with_context(|| format!("Failed to fetch {}", path))?;

        let response = ensure_success(response).await?;
        let text = response.text().await.context("Failed to read response")?;

        let mut posts = parse_post_list(&text)?;
        logic::posts::sort_posts(&mut posts);
        Ok(posts)
    }

    /// POST with the fixed retry policy: transport failures and transient
    /// statuses are retried up to `MAX_RETRIES` times.
    async fn post_with_retry<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<reqwest::Response> {
        let url = self.url(path);
        let mut attempt = 0;

        loop {
            let mut request = self.client.post(&url).header(ACCEPT, "application/json");
            if let Some(body) = body {
                request = request.json(body);
            }

            match request.send().await {
                Ok(response) if attempt < MAX_RETRIES && is_retryable_status(response.status()) => {
                    log_debug(&format!(
                        "DEBUG [api]: POST {} returned {}, retrying ({}/{})",
                        path,
                        response.status(),
                        attempt + 1,
                        MAX_RETRIES
                    ));
                }
                Ok(response) => return ensure_success(response).await,
                Err(e) if attempt < MAX_RETRIES => {
                    log_debug(&format!(
                        "DEBUG [api]: POST {} failed: {}, retrying ({}/{})",
                        path,
                        e,
                        attempt + 1,
                        MAX_RETRIES
                    ));
                }
                Err(e) => {
                    return Err(anyhow::Error::new(e).context(format!("Failed to POST {}", path)))
                }
            }

            attempt += 1;
        }
    }

    async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<reqwest::Response> {
        log_debug(&format!("DEBUG [api]: POST {}", path));
        self.client
            .post(self.url(path))
            .header(ACCEPT, "application/json")
            .json(body)
            .send()
            .await
            .with_context(|| format!("Failed to POST {}", path))
    }

    /// Public feed, or the feed as seen by `username` when non-empty
    pub async fn get_public_posts(&self, username: &str) -> Result<Vec<Post>> {
        if username.is_empty() {
            self.fetch_posts("/c2s/feed").await
        } else {
            self.fetch_posts(&format!("/c2s/feed/{}", username)).await
        }
    }

    pub async fn get_users_posts(&self, username: &str) -> Result<Vec<Post>> {
        self.fetch_posts(&format!("/c2s/@{}", urlencoding::encode(username)))
            .await
    }

    pub async fn get_single_post(&self, username: &str, id: &str) -> Result<Vec<Post>> {
        self.fetch_posts(&format!("/c2s/@{}/{}", urlencoding::encode(username), id))
            .await
    }

    pub async fn create_follow(
        &self,
        follower: &str,
        followed: &str,
        followed_host: &str,
    ) -> Result<u16> {
        let followed = logic::handles::qualify(followed, followed_host);
        let body = FollowBody {
            follower,
            followed: &followed,
        };
        let response = self.post_with_retry("/c2s/follow", Some(&body)).await?;
        Ok(response.status().as_u16())
    }

    pub async fn unfollow(&self, follower: &str, followed: &str) -> Result<u16> {
        let body = FollowBody { follower, followed };
        let response = self.post_with_retry("/c2s/unfollow", Some(&body)).await?;
        Ok(response.status().as_u16())
    }

    pub async fn create_rss_follow(&self, follower: &str, feed_url: &str) -> Result<u16> {
        let body = RssFollowBody { follower, feed_url };
        let response = self.post_with_retry("/c2s/rss_follow", Some(&body)).await?;
        Ok(response.status().as_u16())
    }

    pub async fn get_pending_follows(&self) -> Result<PendingFollows> {
        let response = self
            .post_with_retry::<()>("/c2s/follows/pending", None)
            .await?;
        let text = response
            .text()
            .await
            .context("Failed to read pending follows")?;

        let pending: Option<PendingFollows> =
            serde_json::from_str(&text).context("Failed to parse pending follows")?;
        pending.ok_or_else(|| ApiError::EmptyBody("could not parse result").into())
    }

    pub async fn accept_follow(
        &self,
        handle: &str,
        follower: &PendingFollow,
        is_accepted: bool,
    ) -> Result<()> {
        let body = AcceptFollowBody {
            handle,
            follower,
            is_accepted,
        };
        self.post_with_retry("/c2s/follows/accept", Some(&body))
            .await?;
        Ok(())
    }

    /// Reblog ("announce") an article. Only a plain 200 counts as success.
    pub async fn send_reblog(&self, article_id: i64) -> Result<u16> {
        let body = ArticleIdBody { article_id };
        let response = self.post_with_retry("/c2s/announce", Some(&body)).await?;
        let status = response.status().as_u16();
        if status != 200 {
            return Err(anyhow::anyhow!("status = {}", status));
        }
        Ok(status)
    }

    pub async fn search(&self, query: &str) -> Result<SearchResponse> {
        let url = self.url(&format!(
            "/c2s/search?query={}",
            urlencoding::encode(query)
        ));
        log_debug(&format!("DEBUG [api]: search query={:?}", query));

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .context("Failed to search")?;

        let response = ensure_success(response).await?;
        let text = response.text().await.context("Failed to read search response")?;
        let mut results: SearchResponse = if text.trim().is_empty() || text.trim() == "null" {
            SearchResponse::default()
        } else {
            serde_json::from_str(&text).context("Failed to parse search response")?
        };

        logic::posts::sort_posts(&mut results.posts);
        Ok(results)
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<UserResponse> {
        let body = LoginBody {
            handle: username,
            password,
        };
        let response = self.post_json("/c2s/login", &body).await?;
        parse_user_response(response).await
    }

    pub async fn logout(&self) -> Result<LogoutResult> {
        let response = self
            .client
            .post(self.url("/c2s/logout"))
            .header(ACCEPT, "application/json")
            .send()
            .await
            .context("Failed to log out")?;

        let status = response.status();
        Ok(LogoutResult {
            success: status.is_success(),
            status_code: status.as_u16(),
        })
    }

    pub async fn register(
        &self,
        handle: &str,
        password: &str,
        display_name: &str,
        bio: &str,
    ) -> Result<UserResponse> {
        let body = RegisterBody {
            handle,
            password,
            display_name,
            bio,
        };
        let response = self.post_json("/c2s/register", &body).await?;
        parse_user_response(response).await
    }

    pub async fn get_user_info(&self) -> Result<UserDetails> {
        let response = self
            .client
            .get(self.url("/c2s/details/user"))
            .header(ACCEPT, "application/json")
            .send()
            .await
            .context("Failed to fetch user details")?;

        let response = ensure_success(response).await?;
        let details: UserDetails = response
            .json()
            .await
            .context("Failed to parse user details")?;
        Ok(details)
    }

    pub async fn edit_user(&self, request: &EditUserRequest) -> Result<UserResponse> {
        let response = self.post_json("/c2s/update/user", request).await?;
        parse_user_response(response).await
    }

    /// Upload a new profile picture. The file must be an image format we can
    /// name a mime type for.
    pub async fn edit_user_profile_pic(&self, path: &Path) -> Result<UserResponse> {
        let format = image::ImageFormat::from_path(path)
            .with_context(|| format!("Not an image: {}", path.display()))?;
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let response = self
            .client
            .post(self.url("/c2s/update/user_pic"))
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, format.to_mime_type())
            .body(bytes)
            .send()
            .await
            .context("Failed to upload profile picture")?;

        parse_user_response(response).await
    }

    /// Publish an article; returns the server's message for the user
    pub async fn create_article(
        &self,
        author: &str,
        title: &str,
        body: &str,
        tags: &[String],
    ) -> Result<String> {
        let request = ArticleBody {
            author,
            title,
            body,
            tags,
            creation_datetime: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        };
        let response = self.post_json("/c2s/create_article", &request).await?;
        let response = ensure_success(response).await?;
        let text = response.text().await.context("Failed to read article response")?;

        let message = match serde_json::from_str::<MessageResponse>(&text) {
            Ok(parsed) if !parsed.message.is_empty() => parsed.message,
            _ => text,
        };
        Ok(message)
    }

    /// Server-rendered preview of an article, not persisted
    pub async fn create_preview(&self, author: &str, title: &str, body: &str) -> Result<Post> {
        let request = ArticleBody {
            author,
            title,
            body,
            tags: &[],
            creation_datetime: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        };
        let response = self.post_json("/c2s/preview", &request).await?;
        let response = ensure_success(response).await?;
        let text = response.text().await.context("Failed to read preview")?;

        let post: Option<Post> = if text.trim().is_empty() {
            None
        } else {
            serde_json::from_str(&text).context("Failed to parse preview")?
        };
        post.ok_or_else(|| ApiError::EmptyBody("Could not preview").into())
    }

    pub async fn delete_article(&self, article_id: i64) -> Result<u16> {
        let response = self
            .post_json("/c2s/delete_article", &ArticleIdBody { article_id })
            .await?;
        let response = ensure_success(response).await?;
        Ok(response.status().as_u16())
    }

    pub async fn send_like(&self, article_id: i64, is_liked: bool) -> Result<u16> {
        let response = self
            .post_json("/c2s/like", &LikeBody { article_id, is_liked })
            .await?;
        let response = ensure_success(response).await?;
        Ok(response.status().as_u16())
    }

    /// Report a page view for `path`
    pub async fn track_view(&self, path: &str, user_id: i64) -> Result<()> {
        let response = self
            .post_json("/c2s/track_view", &ViewBody { path, user: user_id })
            .await?;
        ensure_success(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_post_list_null_is_empty() {
        assert!(parse_post_list("null").unwrap().is_empty());
        assert!(parse_post_list("").unwrap().is_empty());
        assert!(parse_post_list("  \n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_post_list_with_missing_fields() {
        let posts = parse_post_list(r#"[{"author": "sips", "title": "hi"}]"#).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].author, "sips");
        assert_eq!(posts[0].likes_count, 0);
        assert!(posts[0].parsed_date.is_none());
    }

    #[test]
    fn test_parse_post_list_rejects_garbage() {
        assert!(parse_post_list("{not json").is_err());
    }

    #[test]
    fn test_null_tags_become_empty() {
        let posts = parse_post_list(r#"[{"title": "t", "tags": null}]"#).unwrap();
        assert!(posts[0].tags.is_empty());
    }

    #[test]
    fn test_user_private_flag() {
        let user: User =
            serde_json::from_str(r#"{"handle": "cian", "private": {"value": true}}"#).unwrap();
        assert!(user.is_private());

        let user: User = serde_json::from_str(r#"{"handle": "cian", "private": {}}"#).unwrap();
        assert!(!user.is_private());

        let user: User = serde_json::from_str(r#"{"handle": "cian"}"#).unwrap();
        assert!(!user.is_private());
    }

    #[test]
    fn test_search_response_null_lists() {
        let resp: SearchResponse =
            serde_json::from_str(r#"{"posts": null, "users": null}"#).unwrap();
        assert!(resp.posts.is_empty());
        assert!(resp.users.is_empty());
    }

    #[test]
    fn test_pending_follow_serializes_without_host() {
        let follow = PendingFollow {
            handle: "aaron".to_string(),
            host: None,
        };
        assert_eq!(
            serde_json::to_value(&follow).unwrap(),
            serde_json::json!({"handle": "aaron"})
        );
    }

    #[test]
    fn test_retryable_statuses() {
        assert!(is_retryable_status(StatusCode::SERVICE_UNAVAILABLE));
        assert!(is_retryable_status(StatusCode::TOO_MANY_REQUESTS));
        assert!(!is_retryable_status(StatusCode::BAD_REQUEST));
        assert!(!is_retryable_status(StatusCode::UNAUTHORIZED));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = RabbleClient::new("http://localhost:1916/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:1916");
        assert_eq!(client.url("/c2s/feed"), "http://localhost:1916/c2s/feed");
    }
}
