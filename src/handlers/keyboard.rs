//! Keyboard Input Handler
//!
//! Handles all keyboard input and user interactions. Modal state is checked
//! first (alerts, confirmations, header search), then the mounted screen
//! gets the key, then the global bindings.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use chump::model::{Route, VimCommandState};
use chump::views::{FeedSource, FeedView};

use crate::app::Screen;
use crate::App;

/// Handle keyboard input
pub async fn handle_key(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind == KeyEventKind::Release {
        return Ok(());
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        app.model.ui.should_quit = true;
        return Ok(());
    }

    // Blocking alerts swallow everything until dismissed
    if app.model.ui.current_alert().is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            app.model.ui.dismiss_alert();
        }
        return Ok(());
    }

    // Delete confirmation prompt
    if app.model.ui.confirm_delete.is_some() {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => app.delete_confirmed().await,
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.model.ui.confirm_delete = None;
            }
            _ => {}
        }
        return Ok(());
    }

    if app.model.ui.show_help {
        app.model.ui.show_help = false;
        return Ok(());
    }

    // Header search input
    if app.model.ui.search_mode {
        match key.code {
            KeyCode::Esc => {
                app.model.ui.search_mode = false;
                app.model.ui.search_query.clear();
            }
            KeyCode::Enter => {
                let query = app.model.ui.search_query.trim().to_string();
                app.model.ui.search_mode = false;
                app.model.ui.search_query.clear();
                if !query.is_empty() {
                    app.navigate(Route::Search(query)).await;
                }
            }
            KeyCode::Backspace => {
                app.model.ui.search_query.pop();
            }
            KeyCode::Char(c) => app.model.ui.search_query.push(c),
            _ => {}
        }
        return Ok(());
    }

    if app.screen.form().is_some() {
        return handle_form_key(app, key).await;
    }

    if matches!(app.screen, Screen::Search(_)) && handle_search_key(app, key) {
        return Ok(());
    }

    if matches!(app.screen, Screen::Pending(_)) && handle_pending_key(app, key).await {
        return Ok(());
    }

    if matches!(app.screen, Screen::Feed { .. }) && handle_feed_key(app, key).await {
        return Ok(());
    }

    handle_global_key(app, key).await;
    Ok(())
}

/// Keys for screens that are a form: typing edits the focused field
async fn handle_form_key(app: &mut App, key: KeyEvent) -> Result<()> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // The preview overlay sits on top of the write form
    if let Screen::Write(view) = &mut app.screen {
        if view.showing_preview() {
            match key.code {
                KeyCode::Esc => view.close_preview(),
                KeyCode::Enter => submit_form(app).await,
                KeyCode::Char('s') if ctrl => submit_form(app).await,
                _ => {}
            }
            return Ok(());
        }
    }

    match key.code {
        KeyCode::Esc => {
            if let Screen::Account(view) = &mut app.screen {
                view.cancel();
                let profile = Route::UserFeed(app.session.username().to_string());
                app.redirect(profile).await;
            } else {
                app.go_back().await;
            }
        }
        KeyCode::Char('s') if ctrl => submit_form(app).await,
        KeyCode::Char('p') if ctrl => {
            if let Screen::Write(view) = &mut app.screen {
                let author = app.session.username().to_string();
                view.request_preview(&app.client, &author, &mut app.model.ui).await;
            }
        }
        KeyCode::Char('t') if ctrl => match &mut app.screen {
            Screen::Follow(view) => view.toggle_kind(),
            Screen::Account(view) => view.toggle_private(),
            _ => {}
        },
        KeyCode::Char('r') if ctrl => {
            if matches!(app.screen, Screen::Login(_)) {
                app.navigate(Route::Register).await;
            }
        }
        KeyCode::Tab | KeyCode::Down => {
            if let Some(form) = app.screen.form_mut() {
                form.focus_next();
            }
        }
        KeyCode::BackTab | KeyCode::Up => {
            if let Some(form) = app.screen.form_mut() {
                form.focus_previous();
            }
        }
        KeyCode::Enter => {
            let newline = app.screen.form_mut().is_some_and(|form| form.insert_newline());
            if !newline {
                submit_form(app).await;
            }
        }
        KeyCode::Backspace => {
            if let Some(form) = app.screen.form_mut() {
                form.backspace();
            }
        }
        KeyCode::Char(c) if !ctrl => {
            if let Some(form) = app.screen.form_mut() {
                form.insert_char(c);
            }
        }
        _ => {}
    }
    Ok(())
}

async fn submit_form(app: &mut App) {
    match app.screen {
        Screen::Login(_) => return app.submit_login().await,
        Screen::Register(_) => return app.submit_register().await,
        _ => {}
    }

    let username = app.session.username().to_string();
    match &mut app.screen {
        Screen::Write(view) => {
            view.submit(&app.client, &username, &mut app.model.ui).await;
        }
        Screen::Follow(view) => {
            let success = app.config.strings.success_follow_form.clone();
            view.submit(&app.client, &username, &success, &mut app.model.ui)
                .await;
        }
        Screen::Account(view) => {
            view.submit(&app.client, &mut app.model.ui).await;
            if view.redirect() {
                app.redirect(Route::UserFeed(username)).await;
            }
        }
        _ => {}
    }
}

/// Search screen: the on-page box takes text, Enter searches
fn handle_search_key(app: &mut App, key: KeyEvent) -> bool {
    let Screen::Search(search) = &mut app.screen else {
        return false;
    };
    match key.code {
        KeyCode::Enter => {
            app.submit_search();
            true
        }
        KeyCode::Tab => {
            search.toggle_users();
            true
        }
        KeyCode::Backspace => {
            if search.input.is_empty() {
                return false;
            }
            search.input.pop();
            true
        }
        KeyCode::Down => {
            app.model.ui.scroll_offset = app.model.ui.scroll_offset.saturating_add(1);
            true
        }
        KeyCode::Up => {
            app.model.ui.scroll_offset = app.model.ui.scroll_offset.saturating_sub(1);
            true
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            search.input.push(c);
            true
        }
        _ => false,
    }
}

async fn handle_pending_key(app: &mut App, key: KeyEvent) -> bool {
    let handle = app.session.username().to_string();
    let Screen::Pending(pending) = &mut app.screen else {
        return false;
    };
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => pending.select_next(),
        KeyCode::Up | KeyCode::Char('k') => pending.select_previous(),
        KeyCode::Char('a') | KeyCode::Enter => {
            pending
                .respond(&app.client, &handle, true, &mut app.model.ui)
                .await
        }
        KeyCode::Char('x') => {
            pending
                .respond(&app.client, &handle, false, &mut app.model.ui)
                .await
        }
        KeyCode::Char('r') => app.request_pending_follows(),
        _ => return false,
    }
    true
}

async fn handle_feed_key(app: &mut App, key: KeyEvent) -> bool {
    let vim = app.model.ui.vim_mode;

    // 'gg' needs two presses
    if vim && key.code == KeyCode::Char('g') {
        if app.model.ui.vim_command_state == VimCommandState::WaitingForSecondG {
            app.model.ui.vim_command_state = VimCommandState::None;
            if let Screen::Feed { feed, .. } = &mut app.screen {
                feed.select_first();
            }
        } else {
            app.model.ui.vim_command_state = VimCommandState::WaitingForSecondG;
        }
        return true;
    }
    app.model.ui.vim_command_state = VimCommandState::None;

    // A single post scrolls its body instead of moving a selection
    let single = matches!(
        &app.screen,
        Screen::Feed { feed, .. } if matches!(feed.source(), FeedSource::Single { .. })
    );
    if single {
        let ui = &mut app.model.ui;
        match key.code {
            KeyCode::Down => ui.scroll_offset = ui.scroll_offset.saturating_add(1),
            KeyCode::Up => ui.scroll_offset = ui.scroll_offset.saturating_sub(1),
            KeyCode::Char('j') if vim => ui.scroll_offset = ui.scroll_offset.saturating_add(1),
            KeyCode::Char('k') if vim => ui.scroll_offset = ui.scroll_offset.saturating_sub(1),
            _ => {}
        }
    }

    match key.code {
        KeyCode::Down => select(app, |feed| feed.select_next()),
        KeyCode::Up => select(app, |feed| feed.select_previous()),
        KeyCode::Char('j') if vim => select(app, |feed| feed.select_next()),
        KeyCode::Char('k') if vim => select(app, |feed| feed.select_previous()),
        KeyCode::Char('G') if vim => select(app, |feed| feed.select_last()),
        KeyCode::Home => select(app, |feed| feed.select_first()),
        KeyCode::End => select(app, |feed| feed.select_last()),
        KeyCode::Enter => app.open_selected_post().await,
        KeyCode::Char('u') => app.open_selected_author().await,
        KeyCode::Char('l') => app.like_selected().await,
        KeyCode::Char('b') => app.reblog_selected().await,
        KeyCode::Char('d') => app.request_delete_selected(),
        KeyCode::Char('f') => app.toggle_follow().await,
        KeyCode::Char('r') => app.request_feed(),
        _ => return false,
    }
    true
}

fn select(app: &mut App, action: impl FnOnce(&mut FeedView)) {
    if let Screen::Feed { feed, .. } = &mut app.screen {
        action(feed);
    }
}

async fn handle_global_key(app: &mut App, key: KeyEvent) {
    let logged_in = !app.session.session().is_anonymous();
    match key.code {
        KeyCode::Char('q') => app.model.ui.should_quit = true,
        KeyCode::Char('?') => app.model.ui.show_help = true,
        KeyCode::Char('/') => {
            app.model.ui.search_mode = true;
            app.model.ui.search_query.clear();
        }
        KeyCode::Esc | KeyCode::Backspace => app.go_back().await,
        KeyCode::Char('H') => app.navigate(Route::Feed).await,
        KeyCode::Char('w') => app.navigate(Route::Write).await,
        KeyCode::Char('F') => app.navigate(Route::Follow).await,
        KeyCode::Char('p') => app.navigate(Route::Pending).await,
        KeyCode::Char('a') => app.navigate(Route::Account).await,
        KeyCode::Char('m') if logged_in => {
            let me = app.session.username().to_string();
            app.navigate(Route::UserFeed(me)).await;
        }
        KeyCode::Char('L') => {
            let route = if logged_in { Route::Logout } else { Route::Login };
            app.navigate(route).await;
        }
        KeyCode::Char('N') if !logged_in => app.navigate(Route::Register).await,
        _ => {}
    }
}
