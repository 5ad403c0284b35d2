//! Application layer: the screens the TUI and runtime drive.
//!
//! `LibraryScreen` browses and searches the catalog, `PlaylistScreen` plays a
//! single playlist through a `PlaybackController`, and the editor creates
//! new playlists. Each one borrows the store it works on.

mod editor;
mod library_screen;
mod playlist_screen;
mod shortcuts;

pub use editor::{PlaylistDraft, create_playlist};
pub use library_screen::{LibraryEntry, LibraryScreen};
pub use playlist_screen::PlaylistScreen;
pub use shortcuts::Shortcut;

#[cfg(test)]
mod tests;
