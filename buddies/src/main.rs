//! Math Buddies TUI application.
//!
//! A terminal counting game: solve small sums and differences with the help of
//! fingers, cakes, toys, apples and stars, and hear a cheer from your buddy.
//!
//! # Headless Mode
//!
//! Run with `--headless` for a text-based interface suitable for automated testing:
//!
//! ```bash
//! cargo run -p buddies -- --headless
//! ```

mod app;
mod events;
mod headless;
mod logging;
mod ui;

use crossterm::{
    event, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use std::time::Duration;

use buddies_core::{encourager_from_config, GameConfig, GameDriver, Session};

use app::App;
use events::{handle_event, EventResult};
use ui::render::render;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();

    // Check for --help
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    let config = GameConfig::from_env();

    // Check for --headless mode
    if args.iter().any(|a| a == "--headless") {
        logging::init_stderr();
        let driver = new_driver(&config);
        return headless::run_headless(driver).await.map_err(|e| e.into());
    }

    let _log_guard = logging::init_file(&config.log_dir)?;
    let driver = new_driver(&config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, App::new(driver));

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        tracing::error!(error = %e, "Terminal loop failed");
        eprintln!("Error: {e}");
    }

    tracing::info!("Goodbye");
    Ok(())
}

fn new_driver(config: &GameConfig) -> GameDriver {
    GameDriver::new(Session::new(), encourager_from_config(config), config)
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> io::Result<()> {
    loop {
        // Apply finished encouragement requests and advance timers
        app.pump();

        // Render
        terminal.draw(|f| render(f, &app))?;

        // Poll for events with timeout for animations
        if event::poll(Duration::from_millis(100))? {
            let ev = event::read()?;

            match handle_event(&mut app, ev) {
                EventResult::Quit => return Ok(()),
                EventResult::NeedsRedraw | EventResult::Continue => {}
            }
        } else {
            // Tick animations
            app.tick();
        }
    }
}

fn print_help() {
    println!("Math Buddies - count, add and subtract up to 20");
    println!();
    println!("USAGE:");
    println!("  buddies [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  -h, --help       Show this help message");
    println!("  --headless       Run in headless mode (text-only, no TUI)");
    println!();
    println!("KEYS:");
    println!("  Enter / s        Start playing (menu)");
    println!("  0-9              Type an answer");
    println!("  Enter            Check the answer");
    println!("  Backspace        Clear the answer");
    println!("  Arrows, Space    Use the on-screen keypad");
    println!("  Esc              Back to the menu");
    println!("  q, Ctrl-C        Quit");
    println!();
    println!("ENVIRONMENT:");
    println!("  ANTHROPIC_API_KEY                 Enables cheers from Claude (optional)");
    println!("  BUDDIES_MODEL                     Model for cheers (default: claude-3-5-haiku-latest)");
    println!("  BUDDIES_ADVANCE_DELAY_MS          Pause after a correct answer (default: 2000)");
    println!("  BUDDIES_ENCOURAGEMENT_TIMEOUT_MS  Cheer request timeout (default: 5000)");
    println!("  BUDDIES_LOG_DIR                   Log directory (default: logs)");
    println!();
    println!("EXAMPLES:");
    println!("  buddies                # Interactive TUI mode");
    println!("  buddies --headless     # Line protocol on stdin/stdout");
}
