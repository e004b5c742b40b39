// Defensive programming lints - prevent panics and unsafe patterns
#![deny(clippy::indexing_slicing)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::fallible_impl_from)]
#![warn(clippy::wildcard_enum_match_arm)]
#![warn(clippy::fn_params_excessive_bools)]
// Idiomatic Rust lints
#![warn(clippy::needless_return)]
#![warn(clippy::let_and_return)]
#![warn(clippy::must_use_candidate)]
#![warn(clippy::redundant_closure_for_method_calls)]
#![warn(clippy::map_unwrap_or)]
#![warn(clippy::explicit_iter_loop)]

mod app;
mod config;
mod container;
mod panel;
mod ui;

use app::{App, AppMode, Demo, MenuNavigable, Navigable, RootNavigable};
use color_eyre::Result;
use config::Config;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::{
    fs, io,
    time::{Duration, Instant},
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    // Load config
    let config = Config::load()?;

    // Pick the demo from command-line arguments
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map_or("switchdeck", String::as_str);
    let demo = match args.get(1).map(String::as_str) {
        None | Some("colors") => Demo::Colors,
        Some("search") => Demo::Search,
        Some("--help") | Some("-h") => {
            print_help(program_name);
            return Ok(());
        }
        Some("--version") | Some("-v") => {
            println!("switchdeck v{}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Some(other) => {
            eprintln!("Unknown demo: {}", other);
            eprintln!("Run with --help for available demos.");
            std::process::exit(1);
        }
    };

    // Lifecycle events go to a log file; stdout belongs to the TUI
    let lifecycle_logging = init_tracing().is_ok();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(demo, config);
    app.lifecycle_logging = lifecycle_logging;
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

fn print_help(program_name: &str) {
    println!("Switchdeck - container switching demos");
    println!();
    println!("Usage: {} [demo]", program_name);
    println!();
    println!("Demos:");
    println!("  colors     - Switchable color panels (default)");
    println!("  search     - Global search domains");
    println!("  --help     - Show this help");
    println!("  --version  - Show version");
    println!();
    println!("Inside a demo: enter opens the container, m opens the");
    println!("switcher menu, esc goes back, ctrl+c quits.");
}

/// Routes `tracing` output to the lifecycle log file.
fn init_tracing() -> Result<()> {
    let log_path = Config::log_path()?;
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|error| color_eyre::eyre::eyre!("could not install tracing subscriber: {error}"))?;
    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        // Advance an in-flight cross-fade before drawing
        let now = Instant::now();
        app.tick(now);

        terminal.draw(|f| ui::render(f, app, now))?;

        if app.should_quit {
            break;
        }

        // Poll for events with a timeout; short enough to keep the
        // fade animation fluid
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) => {
                    // Only handle KeyPress events to avoid duplicate handling
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        app.should_quit = true;
                        continue;
                    }

                    match app.mode {
                        AppMode::Root => handle_root_mode(app, key.code)?,
                        AppMode::Container => handle_container_mode(app, key.code)?,
                        AppMode::SwitcherMenu => handle_menu_mode(app, key.code)?,
                    }
                }
                Event::Mouse(_)
                | Event::Paste(_)
                | Event::FocusGained
                | Event::FocusLost
                | Event::Resize(_, _) => {}
            }
        }
    }

    Ok(())
}

fn handle_root_mode(app: &mut App, key_code: KeyCode) -> Result<()> {
    match key_code {
        KeyCode::Up => RootNavigable::new(app).previous_item(),
        KeyCode::Down => RootNavigable::new(app).next_item(),
        KeyCode::Enter => app.open_selected_root_item()?,
        KeyCode::Esc
        | KeyCode::Backspace
        | KeyCode::Left
        | KeyCode::Right
        | KeyCode::Home
        | KeyCode::End
        | KeyCode::PageUp
        | KeyCode::PageDown
        | KeyCode::Tab
        | KeyCode::BackTab
        | KeyCode::Delete
        | KeyCode::Insert
        | KeyCode::F(_)
        | KeyCode::Char(_)
        | KeyCode::Null
        | KeyCode::CapsLock
        | KeyCode::ScrollLock
        | KeyCode::NumLock
        | KeyCode::PrintScreen
        | KeyCode::Pause
        | KeyCode::Menu
        | KeyCode::KeypadBegin
        | KeyCode::Media(_)
        | KeyCode::Modifier(_) => {}
    }
    Ok(())
}

fn handle_container_mode(app: &mut App, key_code: KeyCode) -> Result<()> {
    match key_code {
        KeyCode::Esc => app.close_container(),
        KeyCode::Char('m') | KeyCode::Tab => app.open_switcher_menu(),
        KeyCode::Backspace
        | KeyCode::Enter
        | KeyCode::Left
        | KeyCode::Right
        | KeyCode::Up
        | KeyCode::Down
        | KeyCode::Home
        | KeyCode::End
        | KeyCode::PageUp
        | KeyCode::PageDown
        | KeyCode::BackTab
        | KeyCode::Delete
        | KeyCode::Insert
        | KeyCode::F(_)
        | KeyCode::Char(_)
        | KeyCode::Null
        | KeyCode::CapsLock
        | KeyCode::ScrollLock
        | KeyCode::NumLock
        | KeyCode::PrintScreen
        | KeyCode::Pause
        | KeyCode::Menu
        | KeyCode::KeypadBegin
        | KeyCode::Media(_)
        | KeyCode::Modifier(_) => {}
    }
    Ok(())
}

fn handle_menu_mode(app: &mut App, key_code: KeyCode) -> Result<()> {
    match key_code {
        KeyCode::Esc => app.close_switcher_menu(),
        KeyCode::Enter => app.confirm_menu_selection(Instant::now())?,
        KeyCode::Up => MenuNavigable::new(app).previous_item(),
        KeyCode::Down => MenuNavigable::new(app).next_item(),
        KeyCode::Backspace
        | KeyCode::Left
        | KeyCode::Right
        | KeyCode::Home
        | KeyCode::End
        | KeyCode::PageUp
        | KeyCode::PageDown
        | KeyCode::Tab
        | KeyCode::BackTab
        | KeyCode::Delete
        | KeyCode::Insert
        | KeyCode::F(_)
        | KeyCode::Char(_)
        | KeyCode::Null
        | KeyCode::CapsLock
        | KeyCode::ScrollLock
        | KeyCode::NumLock
        | KeyCode::PrintScreen
        | KeyCode::Pause
        | KeyCode::Menu
        | KeyCode::KeypadBegin
        | KeyCode::Media(_)
        | KeyCode::Modifier(_) => {}
    }
    Ok(())
}
