use serde::{Deserialize, Serialize};

use crate::store::Entity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    pub id: i64,
    pub name: String,
    pub artist: String,
    pub genre: String,
    /// Location handed to the playback device.
    pub src: String,
    #[serde(default)]
    pub liked: bool,
}

impl Song {
    pub fn toggle_liked(&mut self) -> bool {
        self.liked = !self.liked;
        self.liked
    }
}

/// One entry of a playlist's song list.
///
/// Stored playlists reference songs by bare id, by `{"id": n}` or by
/// embedding the whole song; all three resolve to a song id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlaylistItem {
    Id(i64),
    Song(Song),
    Ref { id: i64 },
}

impl PlaylistItem {
    pub fn song_id(&self) -> i64 {
        match self {
            Self::Id(id) | Self::Ref { id } => *id,
            Self::Song(song) => song.id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub songs: Vec<PlaylistItem>,
}

impl Playlist {
    /// Resolve this playlist's entries against `library`, in playlist order.
    ///
    /// Entries whose id names no song are skipped.
    pub fn resolve_songs(&self, library: &[Song]) -> Vec<Song> {
        self.songs
            .iter()
            .filter_map(|item| {
                let id = item.song_id();
                let found = library.iter().find(|s| s.id == id).cloned();
                if found.is_none() {
                    tracing::debug!(playlist = self.id, song = id, "playlist references a missing song");
                }
                found
            })
            .collect()
    }
}

impl Entity for Song {
    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Entity for Playlist {
    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn name(&self) -> &str {
        &self.name
    }
}
