//! Writing, previewing and posting an article

use super::form::{FieldSpec, Form};
use super::notify::Notifier;
use crate::api::{ApiError, Post, RabbleClient};
use crate::logic::{errors, validation};

pub const DEFAULT_BIO: &str = "Nowadays everybody wanna talk like they got something to say. \
But nothing comes out when they move their lips; just a bunch of gibberish.";
pub const DEFAULT_IMAGE: &str =
    "https://qph.fs.quoracdn.net/main-qimg-8aff684700be1b8c47fa370b6ad9ca13.webp";
const POSTED: &str = "Posted article";
const NO_PREVIEW: &str = "Could not preview";

#[derive(Debug, Clone, Default)]
pub struct ArticleFormView {
    pub title: String,
    pub body: String,
    focus: usize,
    /// Server-rendered preview, shown as an overlay while set
    preview: Option<Post>,
}

/// What the user should read when a request fails: the backend's own text
/// when it sent one
fn failure_message(error: &anyhow::Error) -> String {
    match error.downcast_ref::<ApiError>() {
        Some(ApiError::Status { body, .. }) if !body.trim().is_empty() => body.clone(),
        _ => errors::format_error_message(error),
    }
}

impl ArticleFormView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn preview(&self) -> Option<&Post> {
        self.preview.as_ref()
    }

    pub fn showing_preview(&self) -> bool {
        self.preview.is_some()
    }

    pub fn close_preview(&mut self) {
        self.preview = None;
    }

    /// Ask the backend to render the article without saving it
    pub async fn request_preview(
        &mut self,
        client: &RabbleClient,
        author: &str,
        notifier: &mut dyn Notifier,
    ) {
        match client.create_preview(author, &self.title, &self.body).await {
            Ok(mut post) => {
                post.parsed_date = Some(chrono::Utc::now());
                post.bio = DEFAULT_BIO.to_string();
                post.image = DEFAULT_IMAGE.to_string();
                post.likes_count = 0;
                post.shares_count = 0;
                self.preview = Some(post);
            }
            Err(e) => match e.downcast_ref::<ApiError>() {
                Some(ApiError::EmptyBody(_)) => notifier.alert(NO_PREVIEW),
                _ => notifier.alert(&failure_message(&e)),
            },
        }
    }

    /// Post the article. Posting from the preview overlay closes it.
    /// Returns whether a request was sent.
    pub async fn submit(
        &mut self,
        client: &RabbleClient,
        author: &str,
        notifier: &mut dyn Notifier,
    ) -> bool {
        if let Err(e) = validation::check_title(&self.title) {
            notifier.alert(&e.to_string());
            return false;
        }

        let from_preview = self.showing_preview();
        match client
            .create_article(author, &self.title, &self.body, &[])
            .await
        {
            Ok(message) => {
                let message = if message.trim().is_empty() {
                    POSTED.to_string()
                } else {
                    message
                };
                notifier.alert(&message);
                self.title.clear();
                self.body.clear();
                self.focus = 0;
                if from_preview {
                    self.preview = None;
                }
            }
            Err(e) => notifier.alert(&failure_message(&e)),
        }
        true
    }
}

impl Form for ArticleFormView {
    fn fields(&self) -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("Title", "Title"),
            FieldSpec::multiline("Body", "Start here"),
        ]
    }

    fn value(&self, index: usize) -> &str {
        match index {
            0 => &self.title,
            1 => &self.body,
            _ => "",
        }
    }

    fn value_mut(&mut self, index: usize) -> Option<&mut String> {
        match index {
            0 => Some(&mut self.title),
            1 => Some(&mut self.body),
            _ => None,
        }
    }

    fn focus(&self) -> usize {
        self.focus
    }

    fn set_focus(&mut self, index: usize) {
        self.focus = index;
    }
}
