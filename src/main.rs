use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::filter::LevelFilter;

use vitals_tui::settings::{self, LogLevel, Settings};
use vitals_tui::ui::{self, Theme, ThemeChoice};
use vitals_tui::{events, App, LayoutMode, Locale, VitalsCatalog};

#[derive(Parser, Debug)]
#[command(name = "vitals")]
#[command(about = "Terminal viewer for the latest health measurements")]
struct Args {
    /// Display locale (defaults to the settings file, then LANG)
    #[arg(short, long)]
    locale: Option<Locale>,

    /// Layout: list on small terminals and cards otherwise, or forced
    #[arg(long)]
    layout: Option<LayoutMode>,

    /// Color theme
    #[arg(long)]
    theme: Option<ThemeChoice>,

    /// Redraw interval (e.g., "250ms", "1s")
    #[arg(long)]
    tick_rate: Option<String>,

    /// Settings file (TOML); `vitals.toml` in the working directory is used if present
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write logs to this file (the terminal is owned by the UI)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log verbosity
    #[arg(long)]
    log_level: Option<LogLevel>,

    /// Export the formatted vitals to a JSON file and exit
    #[arg(short, long)]
    export: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let settings = Settings::load(args.config.as_deref())?;

    if let Some(path) = &args.log_file {
        init_logging(path, args.log_level.unwrap_or(settings.log_level))?;
    }

    let lang = std::env::var("LANG").ok();
    let locale = settings::resolve_locale(args.locale, settings.locale, lang.as_deref());
    let layout = args.layout.unwrap_or(settings.layout);
    let tick_rate = match &args.tick_rate {
        Some(value) => settings::parse_tick_rate(value)?,
        None => settings.tick_rate()?,
    };

    tracing::info!(%locale, layout = layout.label(), ?tick_rate, "starting");

    let catalog = VitalsCatalog::sample(Utc::now());

    // Handle export mode (non-interactive)
    if let Some(export_path) = args.export {
        return export_to_file(catalog, locale, &export_path);
    }

    let theme = Theme::from_choice(args.theme.unwrap_or(settings.theme));
    let app = App::new(catalog, locale, layout, theme);
    run_tui(app, tick_rate)
}

/// Send tracing output to a file; stdout belongs to the terminal UI.
fn init_logging(path: &Path, level: LogLevel) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::from(level))
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

/// Run the TUI until the user quits
fn run_tui(mut app: App, tick_rate: Duration) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic);
    }));

    // Run the main loop
    let result = run_app(&mut terminal, &mut app, tick_rate);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    tick_rate: Duration,
) -> Result<()> {
    while app.running {
        // Relative times are recomputed against the wall clock every frame
        terminal.draw(|frame| ui::draw(frame, app, Utc::now()))?;

        if let Some(event) = events::poll_event(tick_rate)? {
            match event {
                Event::Key(key) => events::handle_key_event(app, key),
                Event::Mouse(mouse) => events::handle_mouse_event(app, mouse),
                Event::Resize(width, height) => {
                    tracing::debug!(width, height, "terminal resized");
                }
                _ => {}
            }
        }
    }

    tracing::info!("exiting");
    Ok(())
}

/// Export the formatted catalog to a JSON file
fn export_to_file(catalog: VitalsCatalog, locale: Locale, export_path: &Path) -> Result<()> {
    // Colors are not part of the export, so skip terminal detection
    let app = App::new(catalog, locale, LayoutMode::default(), Theme::dark());
    app.export_state(export_path, Utc::now())?;

    println!("Exported vitals to {}", export_path.display());
    Ok(())
}
