//! Library records: songs, playlists and the dataset shipped on first run.

mod defaults;
mod display;
mod model;

pub use defaults::{DEFAULT_THUMBNAIL, default_playlists, default_songs};
pub use display::now_playing_label;
pub use model::*;
