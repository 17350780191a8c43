//! Account settings form

use std::path::PathBuf;

use super::form::{FieldSpec, Form};
use super::notify::{ErrorToast, Notifier};
use super::LoadState;
use crate::api::{BoolValue, EditUserRequest, RabbleClient, UserDetails};
use crate::log_debug;
use crate::logic::validation;

#[derive(Debug, Clone, Default)]
pub struct AccountEditView {
    pub new_password: String,
    /// Path to a new profile picture, blank to keep the current one
    pub profile_pic: String,
    pub display_name: String,
    pub bio: String,
    pub custom_css: String,
    pub current_password: String,
    pub private_account: bool,
    focus: usize,
    state: LoadState,
    redirect: bool,
}

impl AccountEditView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn redirect(&self) -> bool {
        self.redirect
    }

    /// Fetch the current details and pre-fill the form with them
    pub async fn load(&mut self, client: &RabbleClient, notifier: &mut dyn Notifier) {
        self.state = LoadState::Loading;
        match client.get_user_info().await {
            Ok(details) => self.prefill(details),
            Err(e) => {
                notifier.error(ErrorToast::from_error(&e));
                self.state = LoadState::Errored;
            }
        }
    }

    pub fn prefill(&mut self, details: UserDetails) {
        self.bio = details.bio;
        self.display_name = details.display_name;
        self.private_account = details.private.get();
        self.custom_css = details.custom_css;
        self.state = LoadState::Loaded;
    }

    pub fn toggle_private(&mut self) {
        self.private_account = !self.private_account;
    }

    /// The chosen picture, if one was given and it names an image file
    pub fn profile_pic_path(&self) -> Option<PathBuf> {
        let trimmed = self.profile_pic.trim();
        if trimmed.is_empty() {
            return None;
        }
        let path = PathBuf::from(trimmed);
        match image::ImageFormat::from_path(&path) {
            Ok(_) => Some(path),
            Err(_) => {
                log_debug(&format!(
                    "DEBUG [account]: ignoring non-image profile picture {}",
                    path.display()
                ));
                None
            }
        }
    }

    pub fn request(&self) -> EditUserRequest {
        EditUserRequest {
            bio: self.bio.clone(),
            display_name: self.display_name.clone(),
            current_password: self.current_password.clone(),
            new_password: self.new_password.clone(),
            private: BoolValue {
                value: Some(self.private_account),
            },
            custom_css: self.custom_css.clone(),
        }
    }

    /// Send the edit, then the picture upload when one was chosen and the
    /// edit went through. Returns whether anything was sent.
    pub async fn submit(&mut self, client: &RabbleClient, notifier: &mut dyn Notifier) -> bool {
        if let Err(e) = validation::check_current_password(&self.current_password) {
            notifier.alert(&e.to_string());
            return false;
        }

        let edited = match client.edit_user(&self.request()).await {
            Ok(response) if response.success => true,
            Ok(response) => {
                notifier.alert(&format!("Error editing: {}", response.error));
                false
            }
            Err(e) => {
                notifier.alert(&format!("Error editing: {}", ErrorToast::from_error(&e)));
                false
            }
        };

        // A failed edit keeps the user on the form, so the picture waits too
        if !edited {
            return true;
        }

        if let Some(path) = self.profile_pic_path() {
            match client.edit_user_profile_pic(&path).await {
                Ok(response) if response.success => {}
                Ok(response) => notifier.alert(&format!("Error editing: {}", response.error)),
                Err(e) => notifier.error(ErrorToast::from_error(&e)),
            }
        }

        self.redirect = true;

        self.current_password.clear();
        true
    }

    pub fn cancel(&mut self) {
        self.redirect = true;
    }
}

impl Form for AccountEditView {
    fn fields(&self) -> Vec<FieldSpec> {
        vec![
            FieldSpec::secret("New password", "Blank leaves it unchanged"),
            FieldSpec::text("Profile picture", "Path to an image file"),
            FieldSpec::text("Display name", "Display Name"),
            FieldSpec::multiline("Bio", "Bio"),
            FieldSpec::multiline("Custom CSS", "{\"color\": \"red\"}"),
            FieldSpec::secret("Current password", "Required"),
        ]
    }

    fn value(&self, index: usize) -> &str {
        match index {
            0 => &self.new_password,
            1 => &self.profile_pic,
            2 => &self.display_name,
            3 => &self.bio,
            4 => &self.custom_css,
            5 => &self.current_password,
            _ => "",
        }
    }

    fn value_mut(&mut self, index: usize) -> Option<&mut String> {
        match index {
            0 => Some(&mut self.new_password),
            1 => Some(&mut self.profile_pic),
            2 => Some(&mut self.display_name),
            3 => Some(&mut self.bio),
            4 => Some(&mut self.custom_css),
            5 => Some(&mut self.current_password),
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
