//! navpanel — collapsible navigation panel in the terminal.
//!
//! Options:
//! - `--config` — TOML file with brand, timings, theme and routes
//! - `--theme` — start in light or dark mode
//! - `--collapsed` — start with the rail collapsed
//! - `--log-file` — where tracing output goes (the terminal belongs to the UI)

use std::fs::{self, File};
use std::io::{self, stdout};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::info;

use navpanel_core::{PanelConfig, ThemeMode};
use navpanel_tui::{input, ui, AppState};

/// Longest the loop sleeps, so staggered labels keep appearing smoothly.
const FRAME_BUDGET: Duration = Duration::from_millis(50);

#[derive(Parser)]
#[command(name = "navpanel", about = "Collapsible navigation panel in the terminal")]
struct Cli {
    /// Path to a TOML config file. Defaults to <config dir>/navpanel/config.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Theme mode: light or dark. Overrides the config file.
    #[arg(long)]
    theme: Option<ThemeMode>,

    /// Start with the rail collapsed.
    #[arg(long, default_value_t = false)]
    collapsed: bool,

    /// Log file. Defaults to <data dir>/navpanel/navpanel.log.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_path = cli.log_file.clone().unwrap_or_else(|| {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("navpanel")
            .join("navpanel.log")
    });
    init_tracing(&log_path)?;

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }
    if cli.collapsed {
        config.initially_opened = false;
    }
    let settings = config.build().context("invalid panel configuration")?;

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let mut app = AppState::new(settings);
    info!(routes = app.route_count(), theme = %app.theme_mode, "panel mounted");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the main event loop
    let result = run_app(&mut terminal, &mut app);

    app.shutdown();
    info!("panel unmounted");

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Fire due reveals, then render
        app.tick(Instant::now());
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Apply theme switches requested by the panel
        app.drain_theme_requests();

        // 3. Poll for input until the next reveal is due
        let timeout = app.poll_timeout(Instant::now(), FRAME_BUDGET);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        // 4. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}

/// Explicit path must load; the default path is used only if it exists.
fn load_config(explicit: Option<&Path>) -> Result<PanelConfig> {
    if let Some(path) = explicit {
        return PanelConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()));
    }
    let default_path = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("navpanel")
        .join("config.toml");
    if default_path.exists() {
        PanelConfig::load(&default_path)
            .with_context(|| format!("failed to load config {}", default_path.display()))
    } else {
        Ok(PanelConfig::default())
    }
}

fn init_tracing(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    let file = File::create(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
    Ok(())
}
