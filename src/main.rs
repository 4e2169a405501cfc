//! grid-tui - A paginated data grid in the terminal
//!
//! Columns can be shown, hidden and reordered by dragging their headers.
//! It uses the Component Architecture pattern from ratatui.

mod action;
mod app;
mod component;
mod components;
mod config;
mod model;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::config::Config;
use crate::model::column::ColumnRegistry;
use crate::tui::Tui;
use anyhow::Result;
use crossterm::event::Event;
use simplelog::{LevelFilter, WriteLogger};
use std::fs::{self, File};
use std::time::Duration;

fn main() -> Result<()> {
    let registry = ColumnRegistry::default();
    let loaded = Config::load(&registry);
    let config = loaded.as_ref().cloned().unwrap_or_default();
    init_logging(&config);
    if let Err(e) = &loaded {
        log::warn!("Using default config: {}", e);
    }
    log::info!("Starting grid-tui with {:?}", config);

    // Setup terminal
    let mut tui = Tui::new()?.with_tick_rate(Duration::from_millis(100));
    tui.enter()?;

    let mut app = App::new(config, registry);
    app.init()?;

    let result = run_app(&mut tui, &mut app);

    tui.exit()?;

    if let Err(err) = result {
        log::error!("Exited with error: {:?}", err);
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    log::info!("Bye");
    Ok(())
}

/// Log to a file so output never lands on the alternate screen.
/// Logging is optional: any failure here leaves it disabled.
fn init_logging(config: &Config) {
    let Some(path) = config.log_path() else {
        return;
    };
    if let Some(dir) = path.parent() {
        if fs::create_dir_all(dir).is_err() {
            return;
        }
    }
    let level = config.level_filter().unwrap_or(LevelFilter::Info);
    if let Ok(file) = File::create(&path) {
        let _ = WriteLogger::init(level, simplelog::Config::default(), file);
    }
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        tui.draw(|frame| {
            if let Err(e) = app.draw(frame, frame.area()) {
                log::error!("Draw error: {}", e);
            }
        })?;

        let action = match tui.next_event()? {
            Some(Event::Key(key)) => app.handle_key_event(key)?,
            Some(Event::Mouse(mouse)) => app.handle_mouse_event(mouse)?,
            Some(Event::Resize(w, h)) => Some(Action::Resize(w, h)),
            Some(_) => None,
            // No event - send a tick for time-based updates
            None => Some(Action::Tick),
        };

        // Action might produce a follow-up action
        let mut current_action = action;
        while let Some(a) = current_action {
            current_action = app.update(a)?;
        }
    }

    Ok(())
}
