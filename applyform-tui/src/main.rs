use std::fs::{self, File};

use applyform_tui::event::KeyInput;
use applyform_tui::paths;
use applyform_tui::render::render;
use applyform_tui::settings::Settings;
use applyform_tui::{Flow, FormApp, Terminal, TuiError};
use simplelog::{Config, WriteLogger};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), TuiError> {
    let loaded = match paths::settings_file() {
        Some(path) => Settings::load(&path),
        None => Ok(Settings::default()),
    };
    let settings = loaded.as_ref().cloned().unwrap_or_default();

    init_logging(&settings)?;
    if let Err(e) = &loaded {
        log::warn!("Using default settings: {}", e);
    }

    let mut term = Terminal::new()?;
    let mut app = FormApp::new(settings.show_errors_untouched);
    log::info!("Form opened");

    loop {
        let (width, height) = term.size()?;
        term.draw(&render(&app, width, height))?;

        for raw in term.poll(None)? {
            let Some(input) = KeyInput::from_crossterm(&raw) else {
                continue;
            };
            let now = chrono::Local::now().naive_local();
            if app.handle_key(input, now) == Flow::Quit {
                return Ok(());
            }
        }
    }
}

/// Log to `<cache>/latest.log`; the terminal itself is occupied by the form.
fn init_logging(settings: &Settings) -> Result<(), TuiError> {
    let Some(path) = paths::log_file() else {
        return Ok(());
    };
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
        paths::rotate_logs(dir);
    }

    let log_file = File::create(&path)?;
    WriteLogger::init(settings.level_filter(), Config::default(), log_file)?;
    Ok(())
}
