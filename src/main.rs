use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{fs, io, sync::atomic::Ordering};

use chump::api::RabbleClient;
use chump::logic::pageview::PageViewTracker;
use chump::model;
use chump::session::SessionStore;
use chump::{log_debug, DEBUG_MODE};

/// Terminal client for rabble
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to <tmp>/chump-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (hjkl, gg/G)
    #[arg(long)]
    vim: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,
}

mod app;
mod config;
mod handlers;
mod services;
mod ui;

use app::Screen;
use config::Config;
use services::api::{ApiRequest, ApiResponse, ViewId};

pub struct App {
    pub model: model::Model,

    /// Container for the current route
    pub screen: Screen,
    /// Id of the mounted screen; responses tagged with another id are stale
    pub view_id: ViewId,
    next_view_id: ViewId,

    pub client: RabbleClient,
    pub session: SessionStore,
    pub config: Config,

    api_tx: tokio::sync::mpsc::UnboundedSender<ApiRequest>,
    api_rx: tokio::sync::mpsc::UnboundedReceiver<ApiResponse>,

    pageviews: PageViewTracker,
}

impl App {
    async fn new(config: Config) -> Result<Self> {
        let client = RabbleClient::new(&config.base_url)?;

        let session_path = config
            .session_path
            .clone()
            .unwrap_or_else(SessionStore::default_path);
        log_debug(&format!("Opening session store at {:?}", session_path));
        let session = SessionStore::open(&session_path)?;

        if let Some(cookie) = session.cookie()? {
            client.restore_session_cookie(&cookie)?;
        }

        let (api_tx, api_rx) = services::api::spawn_api_service(client.clone());

        let mut app = App {
            model: model::Model::new(config.vim_mode),
            screen: Screen::Empty,
            view_id: 0,
            next_view_id: 0,
            client,
            session,
            config,
            api_tx,
            api_rx,
            pageviews: PageViewTracker::new(),
        };

        app.mount().await;
        Ok(app)
    }

    fn handle_api_response(&mut self, response: ApiResponse) {
        handlers::handle_api_response(self, response);
    }

    async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        handlers::keyboard::handle_key(self, key).await
    }
}

fn get_config_path(cli_path: Option<String>) -> Result<std::path::PathBuf> {
    // 1. CLI argument wins
    if let Some(path) = cli_path {
        let path = std::path::PathBuf::from(path);
        if path.exists() {
            return Ok(path);
        }
        anyhow::bail!("Config file not found: {}", path.display());
    }

    // 2. Platform config dir
    if let Some(config_dir) = dirs::config_dir() {
        let path = config_dir.join("chump").join("config.yaml");
        if path.exists() {
            return Ok(path);
        }
    }

    // 3. Current directory
    let local = std::path::PathBuf::from("config.yaml");
    if local.exists() {
        return Ok(local);
    }

    // No config found, provide helpful error
    let expected_path = if let Some(config_dir) = dirs::config_dir() {
        config_dir
            .join("chump")
            .join("config.yaml")
            .display()
            .to_string()
    } else {
        "~/.config/chump/config.yaml".to_string()
    };

    anyhow::bail!(
        "Config file not found. Expected locations:\n\
         1. {} (preferred)\n\
         2. ./config.yaml (fallback)\n\
         \n\
         Use --config <path> to specify a custom location.",
        expected_path
    )
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    // Set debug mode
    DEBUG_MODE.store(args.debug, Ordering::Relaxed);

    if args.debug {
        log_debug("Debug mode enabled");
    }

    // Determine config file path
    let config_path = get_config_path(args.config)?;

    if args.debug {
        log_debug(&format!("Loading config from: {:?}", config_path));
    }

    // Load configuration
    let config_str = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read {}", config_path.display()))?;
    let mut config: Config = serde_yaml::from_str(&config_str)
        .with_context(|| format!("Failed to parse {}", config_path.display()))?;

    // Override config with CLI flags
    if args.vim {
        config.vim_mode = true;
    }

    // Initialize app
    let mut app = App::new(config).await?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Return result after cleanup
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Always render (Elm Architecture approach)
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        // Auto-dismiss toasts
        if app.model.should_dismiss_toast() {
            app.model.dismiss_toast();
        }

        if app.model.ui.should_quit {
            break;
        }

        // Process API responses (non-blocking)
        while let Ok(response) = app.api_rx.try_recv() {
            app.handle_api_response(response);
        }

        if event::poll(std::time::Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key).await?;
            }
        }
    }

    Ok(())
}
