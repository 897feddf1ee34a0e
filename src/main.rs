use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use chrono::Utc;
use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use rdv_dashboard::{
    app::{update, AppState},
    config::Config,
    event::AppEvent,
    export::{export_roster, ExportFormat},
    paths::Paths,
    view::render,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Redraw and status-expiry cadence.
const TICK_RATE: Duration = Duration::from_millis(250);

#[derive(Debug, Parser)]
#[command(name = "rdv-dashboard", version, about = "RDV quota dashboard for CRM and Digital agents")]
struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Initial CRM pool to dispatch
    #[arg(long)]
    crm_pool: Option<u32>,

    /// Initial Digital pool to dispatch
    #[arg(long)]
    digital_pool: Option<u32>,

    /// Directory the export is written into
    #[arg(long)]
    export_dir: Option<PathBuf>,

    /// Export file format
    #[arg(long, value_enum)]
    format: Option<ExportFormat>,

    /// Tracing output file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// Export target resolved from config and CLI.
#[derive(Debug, Clone)]
struct ExportTarget {
    dir: PathBuf,
    format: ExportFormat,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let working_dir = std::env::current_dir().wrap_err("failed to get current directory")?;
    let paths = Paths::resolve(&working_dir);

    let config_path = cli.config.clone().unwrap_or_else(|| paths.config_file.clone());
    let config = apply_overrides(Config::load(&config_path)?, &cli);

    let log_file = cli.log_file.clone().unwrap_or_else(|| paths.log_file.clone());
    init_tracing(&log_file, &config.log_level)?;
    info!(config = %config_path.display(), "rdv-dashboard starting");

    let target = ExportTarget {
        dir: config
            .export_dir
            .clone()
            .unwrap_or_else(|| paths.export_dir.clone()),
        format: config.export_format,
    };

    let mut state = AppState::from_config(&config);

    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_event_loop(&mut terminal, &mut state, &target, TICK_RATE);

    // Terminal cleanup (always execute even if event loop errored)
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("rdv-dashboard stopped");
    result
}

/// CLI flags win over the config file.
fn apply_overrides(mut config: Config, cli: &Cli) -> Config {
    if let Some(crm) = cli.crm_pool {
        config.crm_pool = crm;
    }
    if let Some(digital) = cli.digital_pool {
        config.digital_pool = digital;
    }
    if let Some(dir) = &cli.export_dir {
        config.export_dir = Some(dir.clone());
    }
    if let Some(format) = cli.format {
        config.export_format = format;
    }
    config
}

/// Log to a file: the terminal belongs to the TUI.
/// RUST_LOG takes precedence over the configured level.
fn init_tracing(log_file: &Path, level: &str) -> Result<()> {
    if let Some(parent) = log_file.parent() {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .wrap_err_with(|| format!("failed to open log file {}", log_file.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(())
}

/// Run the export requested by the last key and report back as an event.
fn run_export(state: &AppState, target: &ExportTarget) -> AppEvent {
    match export_roster(&state.domain.roster, &target.dir, target.format) {
        Ok(path) => AppEvent::ExportFinished(path),
        Err(e) => AppEvent::Error {
            source: target.dir.join(target.format.file_name()).display().to_string(),
            error: e.into(),
        },
    }
}

/// Main event loop following Elm Architecture.
/// Separated from main() for testability.
fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    state: &mut AppState,
    target: &ExportTarget,
    tick_rate: Duration,
) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| {
            render(state, frame);
        })?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                update(state, AppEvent::Key(key));
            }
        }

        if state.meta.export_requested {
            state.meta.export_requested = false;
            let outcome = run_export(state, target);
            update(state, outcome);
        }

        if last_tick.elapsed() >= tick_rate {
            update(state, AppEvent::Tick(Utc::now()));
            last_tick = Instant::now();
        }

        if state.meta.should_quit {
            break;
        }
    }

    Ok(())
}
