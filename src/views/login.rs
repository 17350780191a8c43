//! Login form

use anyhow::Result;

use super::form::{FieldSpec, Form};
use super::notify::{ErrorToast, Notifier};
use crate::api::RabbleClient;
use crate::log_debug;
use crate::logic::validation;

#[derive(Debug, Clone, Default)]
pub struct LoginView {
    pub username: String,
    pub password: String,
    focus: usize,
    redirect: bool,
}

impl LoginView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set once the user is logged in and the screen should be left
    pub fn redirect(&self) -> bool {
        self.redirect
    }

    /// Submit the form. Returns whether a request was sent.
    ///
    /// `on_login` receives the submitted username and the id the backend
    /// assigned, and is only called after a successful login.
    pub async fn submit(
        &mut self,
        client: &RabbleClient,
        bad_login: &str,
        notifier: &mut dyn Notifier,
        on_login: &mut dyn FnMut(&str, i64) -> Result<()>,
    ) -> bool {
        if validation::check_credentials(&self.username, &self.password).is_err() {
            return false;
        }

        let response = match client.login(&self.username, &self.password).await {
            Ok(response) => response,
            Err(e) => {
                notifier.error(ErrorToast::from_error(&e));
                return true;
            }
        };

        if !response.success {
            log_debug(&format!(
                "DEBUG [login]: rejected with status {}",
                response.status_code
            ));
            if response.status_code == 401 {
                notifier.error(ErrorToast::message(bad_login));
            } else {
                notifier.error(ErrorToast::status(response.status_code));
            }
            return true;
        }

        match on_login(&self.username, response.user_id) {
            Ok(()) => {
                self.password.clear();
                self.redirect = true;
            }
            Err(e) => notifier.error(ErrorToast::from_error(&e)),
        }
        true
    }
}

impl Form for LoginView {
    fn fields(&self) -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("Username", "Username"),
            FieldSpec::secret("Password", "Password"),
        ]
    }

    fn value(&self, index: usize) -> &str {
        match index {
            0 => &self.username,
            1 => &self.password,
            _ => "",
        }
    }

    fn value_mut(&mut self, index: usize) -> Option<&mut String> {
        match index {
            0 => Some(&mut self.username),
            1 => Some(&mut self.password),
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
