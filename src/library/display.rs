use crate::config::SongField;

use super::model::Song;

/// Build the "now playing" text for `song` from the configured `fields`.
///
/// Blank fields are skipped; when nothing remains the song name is used.
pub fn now_playing_label(song: &Song, fields: &[SongField], sep: &str) -> String {
    let parts: Vec<&str> = fields
        .iter()
        .map(|f| match f {
            SongField::Name => song.name.trim(),
            SongField::Artist => song.artist.trim(),
            SongField::Genre => song.genre.trim(),
        })
        .filter(|s| !s.is_empty())
        .collect();

    if parts.is_empty() {
        song.name.clone()
    } else {
        parts.join(sep)
    }
}
