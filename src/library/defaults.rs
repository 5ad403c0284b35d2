use super::model::{Playlist, PlaylistItem, Song};

/// Thumbnail used by playlists created without an image.
pub const DEFAULT_THUMBNAIL: &str = "./assets/img/default.png";

fn song(id: i64, name: &str, artist: &str, genre: &str) -> Song {
    Song {
        id,
        name: name.to_string(),
        artist: artist.to_string(),
        genre: genre.to_string(),
        src: format!("./assets/media/{:02}_song.mp3", id + 1),
        liked: false,
    }
}

/// Songs written under `songs` the first time the store starts.
pub fn default_songs() -> Vec<Song> {
    vec![
        song(0, "Whip", "Prazkhanal", "Electronic"),
        song(1, "Overflow", "Everet Almond", "Hip-Hop"),
        song(2, "Intrigue Fun", "Coma-Media", "Jazz"),
        song(3, "Bounce", "Coma-Media", "Electronic"),
        song(4, "Summer Pranks", "Ashot-Danielyan", "Pop"),
    ]
}

/// Playlists written under `playlists` the first time the store starts.
pub fn default_playlists() -> Vec<Playlist> {
    vec![Playlist {
        id: 0,
        name: "Ma Premiere Playlist".to_string(),
        description: "Playlist de base".to_string(),
        thumbnail: DEFAULT_THUMBNAIL.to_string(),
        songs: vec![PlaylistItem::Ref { id: 0 }, PlaylistItem::Ref { id: 1 }],
    }]
}
