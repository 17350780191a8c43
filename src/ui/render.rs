use ratatui::{
    style::{Color, Style},
    text::Line,
    Frame,
};

use chump::logic::formatting;

use super::legend::LegendContext;
use super::{dialogs, feed, forms, header, layout, legend, pending, search, status_bar, toast};
use crate::app::Screen;
use crate::App;

fn legend_context(screen: &Screen) -> LegendContext {
    match screen {
        Screen::Feed { .. } => LegendContext::Feed,
        Screen::Search(_) => LegendContext::Search,
        Screen::Pending(_) => LegendContext::Pending,
        Screen::Write(_) => LegendContext::Write,
        Screen::Follow(_) => LegendContext::Follow,
        Screen::Account(_) => LegendContext::Account,
        Screen::Login(_) => LegendContext::Login,
        Screen::Register(_) => LegendContext::Form,
        Screen::Logout(_) | Screen::Empty => LegendContext::Other,
    }
}

/// `label: value` pairs for the status bar
fn status_metrics(app: &App) -> Vec<String> {
    let mut metrics = Vec::new();
    match &app.screen {
        Screen::Feed { feed, .. } => {
            metrics.push(format!("Posts: {}", feed.posts().len()));
            if let Some(post) = feed.selected_post() {
                metrics.push(format!(
                    "Selected: {}",
                    formatting::truncate_to_width(&post.title, 40)
                ));
            }
            if feed.state().is_loading() {
                metrics.push("Loading".to_string());
            }
        }
        Screen::Search(view) => {
            metrics.push(format!("Users: {}", view.users().len()));
            metrics.push(format!("Posts: {}", view.posts().len()));
        }
        Screen::Pending(view) => {
            metrics.push(format!("Requests: {}", view.followers().len()));
        }
        _ => {}
    }
    metrics.push(format!("Server: {}", app.config.base_url));
    metrics
}

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, app: &mut App) {
    let size = f.area();

    let context = legend_context(&app.screen);
    let logged_in = !app.session.session().is_anonymous();
    let legend_height = legend::calculate_legend_height(
        size.width,
        context,
        app.model.ui.vim_mode,
        logged_in,
        app.model.ui.search_mode,
    );
    let layout_info = layout::calculate_layout(size, legend_height);

    let screen_title = match &app.screen {
        Screen::Feed { feed, .. } => feed.title().to_string(),
        _ => app.model.route().title().to_string(),
    };
    header::render_header(
        f,
        layout_info.header_area,
        &screen_title,
        app.session.username(),
        app.model
            .ui
            .search_mode
            .then_some(app.model.ui.search_query.as_str()),
    );

    let area = layout_info.content_area;
    let hint = Style::default().fg(Color::DarkGray);
    match &app.screen {
        Screen::Feed { feed, follow } => {
            let offset =
                feed::render_feed(f, area, feed, follow.as_ref(), app.model.ui.scroll_offset);
            // Sync back the first visible card
            app.model.ui.scroll_offset = offset;
        }
        Screen::Search(view) => search::render_search(f, area, view, app.model.ui.scroll_offset),
        Screen::Pending(view) => pending::render_pending(f, area, view),
        Screen::Write(view) => {
            forms::render_form(f, area, "Write", view, vec![]);
            if let Some(post) = view.preview() {
                let popup = layout::centered(
                    size,
                    size.width.saturating_sub(8),
                    size.height.saturating_sub(6),
                );
                feed::render_preview(f, popup, post);
            }
        }
        Screen::Follow(view) => {
            let other = view.kind.toggled().label();
            let extras = vec![Line::styled(format!(" ^T to follow by {} instead", other), hint)];
            forms::render_form(f, area, "Follow", view, extras);
        }
        Screen::Account(view) => {
            let mut extras = vec![forms::toggle_line("Private account", view.private_account, "^T")];
            if view.state().is_loading() {
                extras.push(Line::styled(" Loading your details...", hint));
            }
            forms::render_form(f, area, "Account", view, extras);
        }
        Screen::Login(view) => {
            let extras = vec![Line::styled(" No account yet? ^R to register", hint)];
            forms::render_form(f, area, "Login", view, extras);
        }
        Screen::Register(view) => forms::render_form(f, area, "Register", view, vec![]),
        Screen::Logout(_) | Screen::Empty => {}
    }

    legend::render_legend(
        f,
        layout_info.legend_area,
        context,
        app.model.ui.vim_mode,
        logged_in,
        app.model.ui.search_mode,
    );

    let metrics = status_metrics(app);
    status_bar::render_status_bar(f, layout_info.status_area, &metrics);

    // Overlays, most urgent last
    if app.model.ui.show_help {
        dialogs::render_help(f);
    }

    if let Some(confirm) = &app.model.ui.confirm_delete {
        dialogs::render_delete_confirmation(f, &app.config.strings.delete_confirm, &confirm.title);
    }

    if let Some(alert) = app.model.ui.current_alert() {
        dialogs::render_alert(f, alert);
    }

    if let Some(active) = &app.model.ui.toast {
        toast::render_toast(f, size, active);
    }
}
