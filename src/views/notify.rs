//! User notifications
//!
//! Containers never talk to the terminal. They report outcomes through a
//! `Notifier` handed to them by whoever owns the screen.

use std::fmt;

use crate::logic::errors;

/// Failure shown to the user as a toast
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorToast {
    pub status_code: Option<u16>,
    pub message: Option<String>,
    /// Full error chain, written to the debug log rather than shown
    pub debug: Option<String>,
}

impl ErrorToast {
    pub fn status(status_code: u16) -> Self {
        Self {
            status_code: Some(status_code),
            ..Self::default()
        }
    }

    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }

    /// Build a toast from a failed request, keeping the status when the
    /// backend answered
    pub fn from_error(error: &anyhow::Error) -> Self {
        Self {
            status_code: errors::status_code(error),
            message: Some(errors::format_error_message(error)),
            debug: Some(format!("{:#}", error)),
        }
    }
}

impl fmt::Display for ErrorToast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.message, self.status_code) {
            (Some(message), _) => write!(f, "Error: {}", message),
            (None, Some(status)) => write!(f, "Error: status {}", status),
            (None, None) => write!(f, "Error: something went wrong"),
        }
    }
}

/// Where containers send their user-visible outcomes
pub trait Notifier {
    fn error(&mut self, toast: ErrorToast);
    fn success(&mut self, message: &str);
    /// Blocking message the user has to dismiss
    fn alert(&mut self, message: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Error(ErrorToast),
    Success(String),
    Alert(String),
}

impl Notification {
    pub fn text(&self) -> String {
        match self {
            Notification::Error(toast) => toast.to_string(),
            Notification::Success(message) | Notification::Alert(message) => message.clone(),
        }
    }

    pub fn is_alert(&self) -> bool {
        matches!(self, Notification::Alert(_))
    }
}

/// Records notifications in order until someone drains them
#[derive(Debug, Clone, Default)]
pub struct Notifications {
    items: Vec<Notification>,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn last(&self) -> Option<&Notification> {
        self.items.last()
    }

    pub fn drain(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.items)
    }

    pub fn errors(&self) -> Vec<&ErrorToast> {
        self.items
            .iter()
            .filter_map(|n| match n {
                Notification::Error(toast) => Some(toast),
                _ => None,
            })
            .collect()
    }

    pub fn alerts(&self) -> Vec<&str> {
        self.items
            .iter()
            .filter_map(|n| match n {
                Notification::Alert(message) => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn successes(&self) -> Vec<&str> {
        self.items
            .iter()
            .filter_map(|n| match n {
                Notification::Success(message) => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Notifier for Notifications {
    fn error(&mut self, toast: ErrorToast) {
        if let Some(debug) = &toast.debug {
            crate::log_debug(&format!("DEBUG [notify]: {} ({})", toast, debug));
        }
        self.items.push(Notification::Error(toast));
    }

    fn success(&mut self, message: &str) {
        self.items.push(Notification::Success(message.to_string()));
    }

    fn alert(&mut self, message: &str) {
        self.items.push(Notification::Alert(message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;

    #[test]
    fn test_error_toast_text() {
        assert_eq!(ErrorToast::status(404).to_string(), "Error: status 404");
        assert_eq!(
            ErrorToast::message("bad login").to_string(),
            "Error: bad login"
        );
        assert_eq!(
            ErrorToast::default().to_string(),
            "Error: something went wrong"
        );
    }

    #[test]
    fn test_error_toast_keeps_status() {
        let err: anyhow::Error = ApiError::Status {
            status: 503,
            body: String::new(),
        }
        .into();
        let toast = ErrorToast::from_error(&err);
        assert_eq!(toast.status_code, Some(503));
        assert!(toast.debug.is_some());
    }

    #[test]
    fn test_notifications_record_in_order() {
        let mut notes = Notifications::new();
        notes.success("Followed");
        notes.alert("Posted article");
        notes.error(ErrorToast::status(500));

        assert_eq!(notes.items().len(), 3);
        assert_eq!(notes.successes(), vec!["Followed"]);
        assert_eq!(notes.alerts(), vec!["Posted article"]);
        assert_eq!(notes.errors()[0].status_code, Some(500));
        assert!(notes.last().is_some_and(|n| !n.is_alert()));

        assert_eq!(notes.drain().len(), 3);
        assert!(notes.is_empty());
    }
}
