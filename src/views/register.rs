//! Account registration form

use anyhow::Result;

use super::form::{FieldSpec, Form};
use super::notify::Notifier;
use crate::api::RabbleClient;
use crate::logic::validation;

#[derive(Debug, Clone, Default)]
pub struct RegisterView {
    pub display_name: String,
    pub username: String,
    pub password: String,
    pub bio: String,
    focus: usize,
    redirect: bool,
}

impl RegisterView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn redirect(&self) -> bool {
        self.redirect
    }

    /// Display name sent to the backend; the username when left blank
    pub fn effective_display_name(&self) -> &str {
        if self.display_name.is_empty() {
            &self.username
        } else {
            &self.display_name
        }
    }

    /// Returns whether a request was sent.
    ///
    /// The backend does not hand out an id on registration, so `on_login`
    /// gets `0` until the next real login.
    pub async fn submit(
        &mut self,
        client: &RabbleClient,
        notifier: &mut dyn Notifier,
        on_login: &mut dyn FnMut(&str, i64) -> Result<()>,
    ) -> bool {
        if let Err(e) = validation::check_credentials(&self.username, &self.password) {
            notifier.alert(&e.to_string());
            return false;
        }

        let result = client
            .register(
                &self.username,
                &self.password,
                self.effective_display_name(),
                &self.bio,
            )
            .await;

        match result {
            Ok(response) if response.success => match on_login(&self.username, 0) {
                Ok(()) => self.redirect = true,
                Err(e) => notifier.alert(&format!("Error registering: {}", e)),
            },
            Ok(response) => notifier.alert(&format!("Error registering: {}", response.error)),
            Err(e) => {
                crate::log_debug(&format!("DEBUG [register]: {:#}", e));
                notifier.alert("Error attempting to register.");
            }
        }
        true
    }
}

impl Form for RegisterView {
    fn fields(&self) -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("Display name", "Display Name - defaults to username"),
            FieldSpec::text("Username", "Username*"),
            FieldSpec::secret("Password", "Password*"),
            FieldSpec::text("Bio", "Something about you"),
        ]
    }

    fn value(&self, index: usize) -> &str {
        match index {
            0 => &self.display_name,
            1 => &self.username,
            2 => &self.password,
            3 => &self.bio,
            _ => "",
        }
    }

    fn value_mut(&mut self, index: usize) -> Option<&mut String> {
        match index {
            0 => Some(&mut self.display_name),
            1 => Some(&mut self.username),
            2 => Some(&mut self.password),
            3 => Some(&mut self.bio),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_defaults_to_username() {
        let mut view = RegisterView::new();
        view.username = "cian".to_string();
        assert_eq!(view.effective_display_name(), "cian");

        view.display_name = "Cian R".to_string();
        assert_eq!(view.effective_display_name(), "Cian R");
    }
}
