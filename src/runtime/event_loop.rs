use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::{LibraryScreen, PlaylistScreen, Shortcut};
use crate::config;
use crate::player::PlaybackDevice;
use crate::store::PersistentStore;
use crate::ui;

/// Which screen currently owns the terminal.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum View {
    Library,
    Playlist,
}

/// Main terminal event loop: draws the active screen, feeds it key presses
/// and lets playback advance on its own. Returns `Ok(())` when quit is requested.
pub fn run<D: PlaybackDevice>(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    store: &mut PersistentStore,
    library: &mut LibraryScreen,
    playlist: &mut PlaylistScreen<D>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut view = View::Library;

    loop {
        playlist.tick();

        terminal.draw(|f| match view {
            View::Library => ui::draw_library(f, library),
            View::Playlist => ui::draw_playlist(f, playlist, settings),
        })?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                let quit = match view {
                    View::Library => handle_library_key(key, store, library, playlist, &mut view),
                    View::Playlist => handle_playlist_key(key, playlist, &mut view),
                };
                if quit {
                    break;
                }
            }
        }
    }

    Ok(())
}

fn handle_library_key<D: PlaybackDevice>(
    key: KeyEvent,
    store: &mut PersistentStore,
    library: &mut LibraryScreen,
    playlist: &mut PlaylistScreen<D>,
    view: &mut View,
) -> bool {
    if library.typing {
        match key.code {
            KeyCode::Esc => library.clear_query(),
            KeyCode::Enter => library.typing = false,
            KeyCode::Backspace => library.pop_query_char(),
            KeyCode::Down => library.next(),
            KeyCode::Up => library.prev(),
            KeyCode::Char(c) if !c.is_control() => library.push_query_char(c),
            _ => {}
        }
        return false;
    }

    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('/') => library.typing = true,
        KeyCode::Char('x') => {
            library.toggle_exact();
        }
        KeyCode::Char('f') => {
            if let Some(id) = library.selected_song_id() {
                match library.toggle_liked(store, id) {
                    Ok(liked) => tracing::debug!(id, ?liked, "toggled liked"),
                    Err(e) => tracing::error!(id, error = %e, "failed to save liked state"),
                }
            }
        }
        KeyCode::Char('j') | KeyCode::Down => library.next(),
        KeyCode::Char('k') | KeyCode::Up => library.prev(),
        KeyCode::Enter => {
            if let Some(id) = library.selected_playlist_id() {
                if playlist.open(store, Some(id)) {
                    *view = View::Playlist;
                }
            }
        }
        _ => {}
    }

    false
}

fn handle_playlist_key<D: PlaybackDevice>(key: KeyEvent, playlist: &mut PlaylistScreen<D>, view: &mut View) -> bool {
    if let Some(typed) = playlist.jump.as_mut() {
        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() => typed.push(c),
            KeyCode::Backspace => {
                typed.pop();
            }
            KeyCode::Enter => {
                if let Some(typed) = playlist.jump.take() {
                    playlist.jump_to(&typed);
                }
            }
            KeyCode::Esc => playlist.jump = None,
            _ => {}
        }
        return false;
    }

    if let Some(shortcut) = Shortcut::from_key(key.code) {
        playlist.handle_shortcut(shortcut);
        return false;
    }

    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Esc => {
            playlist.close();
            *view = View::Library;
        }
        KeyCode::Enter => playlist.play_selected(),
        KeyCode::Char('j') | KeyCode::Down => playlist.next(),
        KeyCode::Char('k') | KeyCode::Up => playlist.prev(),
        KeyCode::Char('s') => {
            playlist.toggle_shuffle();
        }
        KeyCode::Char('g') => playlist.jump = Some(String::new()),
        KeyCode::Char(c @ '0'..='9') => {
            let tenth = c.to_digit(10).unwrap_or(0);
            playlist.seek_percent(f64::from(tenth) * 10.0);
        }
        _ => {}
    }

    false
}
