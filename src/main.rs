//! # Chronicle CLI Entry Point
//!
//! Terminal job board: search, filter, sort and page through job listings.
//!
//! ## Usage
//!
//! ```bash
//! # Built-in demo listings
//! chronicle
//!
//! # Listings from a JSON file, starting in dark mode
//! chronicle --data ./jobs.json --dark
//!
//! # Debug mode - print the first page and exit
//! chronicle --debug
//! ```
//!
//! ## Architecture
//!
//! 1. **Config**: read `config.json` (themes, default data file)
//! 2. **Load**: the listing source runs once on a blocking task
//! 3. **UI**: each frame derives the visible page from the app state
//! 4. **Input**: keys and clicks are dispatched to `App` handlers
//!
//! ## Key Bindings
//!
//! - `/` - Search titles and companies (`Enter` keeps, `Esc` clears)
//! - `1`-`4` - Open the scale, country, industry or age dropdown
//! - `s` - Switch sort
//! - `c` - Clear search and filters
//! - `←` / `→`, `[` / `]` - Previous / next page
//! - `↑` / `↓`, `j` / `k` - Move between cards
//! - `Enter` - Open listing details
//! - `f` - Favorite the selected listing
//! - `y` - Copy apply link (in details)
//! - `d` - Toggle dark mode
//! - `?` - Help
//! - `q` - Quit

use chronicle::listing::{
    derive, Clock, JsonFileSource, Listing, ListingSource, MockSource, Query, SourceError,
    SystemClock,
};
use chronicle::logging;
use chronicle::ui::{self, config::Config, hit::HitMap, input, theme::Theme, App};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::panic;
use std::path::PathBuf;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Trait for reading terminal events (allows dependency injection for testing)
trait EventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

/// Production event reader that uses crossterm's event polling + read
struct CrosstermEventReader;

impl EventReader for CrosstermEventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout).context("Failed to poll for events")? {
            Ok(Some(event::read().context("Failed to read terminal event")?))
        } else {
            Ok(None)
        }
    }
}

type PendingLoad = JoinHandle<Result<Vec<Listing>, SourceError>>;

/// Chronicle - a terminal job board
#[derive(Parser, Debug)]
#[command(name = "chronicle")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Search, filter and page through job listings", long_about = None)]
struct Args {
    /// Load listings from a JSON array file instead of the built-in set
    #[arg(short, long, value_name = "FILE")]
    data: Option<PathBuf>,

    /// Config file to read instead of the default location
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Start in dark mode
    #[arg(long)]
    dark: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    log_level: String,

    /// Print the first page of listings and exit
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Set up panic hook to ensure terminal is restored on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    let result = run_application(args).await;

    let _ = panic::take_hook();

    result
}

/// Pick the listing source: `--data`, then the config's `data_file`, then
/// the built-in set.
fn select_source(args: &Args, config: &Config) -> Box<dyn ListingSource + Send> {
    match args.data.as_ref().or(config.data_file.as_ref()) {
        Some(path) => Box::new(JsonFileSource::new(path.clone())),
        None => Box::new(MockSource::new(SystemClock)),
    }
}

async fn run_application(args: Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let source = select_source(&args, &config);

    if args.debug {
        return print_debug(source.as_ref(), &SystemClock);
    }

    // Logging is best effort; the board still works without a log file.
    let _log_guard = match logging::init(&args.log_level) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: Could not initialize logging: {e:#}");
            None
        }
    };
    tracing::info!(source = %source.name(), "Starting");

    let mut app = App::new(
        Theme::resolve(&config.light_theme, false),
        Theme::resolve(&config.dark_theme, true),
        Box::new(SystemClock),
    );
    app.dark_mode = args.dark;

    let pending: PendingLoad = tokio::task::spawn_blocking(move || source.load());

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode for terminal")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    // Run the app and ensure cleanup happens even on error
    let mut event_reader = CrosstermEventReader;
    let run_result = run_app(&mut terminal, &mut app, &mut event_reader, Some(pending)).await;

    // Restore terminal (always runs, even if run_app failed)
    let cleanup_result = cleanup_terminal(&mut terminal);

    run_result?;
    cleanup_result?;

    tracing::info!("Exiting");
    Ok(())
}

fn print_debug(source: &dyn ListingSource, clock: &dyn Clock) -> Result<()> {
    println!("=== Source: {} ===", source.name());
    let listings = source
        .load()
        .with_context(|| format!("Failed to load listings from {}", source.name()))?;

    let derived = derive(&listings, &Query::default(), clock.now_millis());
    for listing in &derived.items {
        println!(
            "  [{}] {}\n    Company: {}\n    Where: {}, {}\n",
            listing.id, listing.title, listing.company, listing.location, listing.country
        );
    }
    println!(
        "Total: {} listings, page {} of {}",
        derived.total_matches, derived.page, derived.page_count
    );
    Ok(())
}

/// Clean up terminal state
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;

    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;

    terminal.show_cursor().context("Failed to show cursor")?;

    Ok(())
}

/// Hand a finished load to the app. Returns the handle again while it is
/// still running.
async fn poll_load(app: &mut App, pending: Option<PendingLoad>) -> Option<PendingLoad> {
    let handle = pending?;
    if !handle.is_finished() {
        return Some(handle);
    }

    let result = handle.await.unwrap_or_else(|e| {
        Err(SourceError::DataUnavailable {
            source_name: "loader task".to_string(),
            reason: e.to_string(),
        })
    });
    app.finish_loading(result);
    None
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    event_reader: &mut dyn EventReader,
    mut pending: Option<PendingLoad>,
) -> Result<()> {
    loop {
        pending = poll_load(app, pending).await;

        let mut hits = HitMap::new();
        terminal
            .draw(|f| hits = ui::render(f, app))
            .map_err(|e| anyhow::anyhow!("Failed to draw terminal UI: {e}"))?;
        app.sync_select_regions(&hits);

        // Poll faster while the load is still running so it shows up promptly
        let poll_timeout = if pending.is_some() {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };

        let event = match event_reader.read_event(poll_timeout)? {
            Some(e) => e,
            None => {
                if app.should_quit {
                    break;
                }
                continue;
            }
        };

        match event {
            Event::Key(key) if key.kind == event::KeyEventKind::Press => {
                input::handle_key(app, key);
            }
            Event::Mouse(mouse) => input::handle_mouse(app, mouse, &hits),
            _ => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
