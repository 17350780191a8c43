//! Logout screen. Logging out happens as soon as it is shown.

use anyhow::Result;

use super::notify::{ErrorToast, Notifier};
use crate::api::RabbleClient;

#[derive(Debug, Clone, Default)]
pub struct LogoutView {
    redirect: bool,
}

impl LogoutView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn redirect(&self) -> bool {
        self.redirect
    }

    /// Log out on the backend, then drop the local session via `on_logout`
    pub async fn run(
        &mut self,
        client: &RabbleClient,
        notifier: &mut dyn Notifier,
        on_logout: &mut dyn FnMut() -> Result<()>,
    ) {
        match client.logout().await {
            Ok(result) if result.success => match on_logout() {
                Ok(()) => self.redirect = true,
                Err(e) => notifier.error(ErrorToast::from_error(&e)),
            },
            Ok(result) => notifier.error(ErrorToast::status(result.status_code)),
            Err(e) => notifier.error(ErrorToast::from_error(&e)),
        }
    }
}
