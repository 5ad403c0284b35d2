use std::env;

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::{LibraryScreen, PlaylistScreen};
use crate::logging;

mod commands;
mod event_loop;
mod settings;
mod startup;


use commands::Command;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let command = match commands::parse_args(env::args().skip(1)) {
        Ok(c) => c,
        Err(msg) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
    };

    let settings = settings::load_settings();

    if let Err(e) = logging::init_logging(&settings.log_dir(), &settings.logging) {
        // Logging is best-effort; the app still works without it.
        eprintln!("mixtape: logging disabled: {e}");
    }

    let mut store = startup::open_store(&settings)?;

    match command {
        Command::NewPlaylist(draft) => return Ok(commands::new_playlist(&mut store, draft)?),
        Command::Reset => return Ok(commands::reset(&mut store)?),
        Command::Browse => {}
    }

    let mut library = LibraryScreen::open(&mut store, settings.search.exact_match)?;
    let controller = startup::build_controller(startup::open_device(&settings), &settings);
    let mut playlist = PlaylistScreen::new(controller, settings.controls.skip_seconds);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(&mut terminal, &settings, &mut store, &mut library, &mut playlist);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run_result
}
