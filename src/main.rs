//! Tripdeck - Build a travel itinerary in the terminal
//!
//! A terminal UI application for entering destinations with dates and
//! times and viewing them as a sorted list, a timeline, and a
//! schematic route.

mod app;
mod cli;
mod itinerary;
mod rating;
mod trip;
mod ui;
mod views;

use std::io;
use std::panic;
use std::process;
use std::time::Duration;

use chrono::Local;
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use app::{App, AppState};
use cli::{Cli, StartupConfig};

/// Sets up a panic hook that restores the terminal before printing the panic message.
/// This ensures the terminal is usable even if the application panics.
fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Attempt to restore the terminal
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        // Call the original panic hook
        original_hook(panic_info);
    }));
}

/// Renders the UI based on the current application state
fn render_ui(frame: &mut ratatui::Frame, app: &App) {
    match app.state {
        AppState::List => {
            ui::render_itinerary_list(frame, app);
        }
        AppState::Timeline => {
            ui::render_timeline(frame, app);
        }
        AppState::RouteMap => {
            ui::render_route_map(frame, app);
        }
        AppState::AddDestination => {
            ui::render_add_form(frame, app);
        }
        AppState::TripSettings => {
            ui::render_trip_form(frame, app);
        }
    }

    // Overlays draw on top of whatever view is active
    if app.show_help {
        ui::render_help_overlay(frame);
    }
    if app.show_rating {
        ui::render_rating_overlay(frame);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = match StartupConfig::from_cli(&cli, Local::now().date_naive()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(2);
        }
    };

    // Set up panic hook to restore terminal on crash
    setup_panic_hook();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app instance with CLI-provided trip details
    let mut app = App::with_startup_config(config);

    // Main event loop
    loop {
        // Render UI
        terminal.draw(|f| render_ui(f, &app))?;

        // Poll for keyboard events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }

        // Check if we should quit
        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    Ok(())
}
