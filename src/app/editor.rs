use crate::library::{DEFAULT_THUMBNAIL, Playlist, PlaylistItem, Song};
use crate::store::{self, MISSING_ID, PLAYLISTS_KEY, PersistentStore, SONGS_KEY};

/// User input for a new playlist. Songs are picked by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaylistDraft {
    pub name: String,
    pub description: String,
    pub thumbnail: Option<String>,
    pub song_names: Vec<String>,
}

/// Store a new playlist built from `draft` and return it with its assigned id.
///
/// Names that match no song are dropped.
pub fn create_playlist(store: &mut PersistentStore, draft: PlaylistDraft) -> store::Result<Playlist> {
    let songs: Vec<PlaylistItem> = draft
        .song_names
        .iter()
        .filter_map(|name| {
            let id = store.id_from_name::<Song>(SONGS_KEY, name);
            if id == MISSING_ID {
                tracing::debug!(name = %name, "dropping unknown song from playlist draft");
                None
            } else {
                Some(PlaylistItem::Ref { id })
            }
        })
        .collect();

    let thumbnail = draft
        .thumbnail
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_THUMBNAIL.to_string());

    let playlist = store.create(
        PLAYLISTS_KEY,
        Playlist {
            id: MISSING_ID,
            name: draft.name,
            description: draft.description,
            thumbnail,
            songs,
        },
    )?;

    tracing::info!(id = playlist.id, name = %playlist.name, songs = playlist.songs.len(), "playlist created");
    Ok(playlist)
}
