//! Login, registration and logout, and keeping the session on disk

use anyhow::Result;

use chump::api::RabbleClient;
use chump::log_debug;
use chump::model::Route;
use chump::session::SessionStore;

use super::Screen;
use crate::App;

/// Record a new identity, then keep the server cookie so a restart stays
/// logged in
fn store_login(
    session: &mut SessionStore,
    client: &RabbleClient,
    username: &str,
    user_id: i64,
) -> Result<()> {
    session.login(username, user_id)?;
    if let Some(cookie) = client.session_cookie() {
        session.save_cookie(&cookie)?;
    }
    log_debug(&format!("DEBUG [session]: logged in as {} ({})", username, user_id));
    Ok(())
}

impl App {
    pub async fn submit_login(&mut self) {
        let Screen::Login(view) = &mut self.screen else {
            return;
        };

        let session = &mut self.session;
        let client = &self.client;
        let mut on_login = |username: &str, user_id: i64| store_login(session, client, username, user_id);

        view.submit(
            client,
            &self.config.strings.bad_login,
            &mut self.model.ui,
            &mut on_login,
        )
        .await;

        if view.redirect() {
            self.redirect(Route::Feed).await;
        }
    }

    pub async fn submit_register(&mut self) {
        let Screen::Register(view) = &mut self.screen else {
            return;
        };

        let session = &mut self.session;
        let client = &self.client;
        let mut on_login = |username: &str, user_id: i64| store_login(session, client, username, user_id);

        view.submit(client, &mut self.model.ui, &mut on_login).await;

        if view.redirect() {
            self.redirect(Route::Feed).await;
        }
    }

    /// Returns whether the logout went through and the screen should be left
    pub(crate) async fn run_logout(&mut self) -> bool {
        let Screen::Logout(view) = &mut self.screen else {
            return false;
        };

        let session = &mut self.session;
        let mut on_logout = || session.logout();

        view.run(&self.client, &mut self.model.ui, &mut on_logout).await;
        view.redirect()
    }
}
