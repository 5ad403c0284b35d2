use crate::config::UiSettings;
use crate::library::{Playlist, Song, now_playing_label};
use crate::player::{Direction, PlaybackController, PlaybackDevice, parse_index};
use crate::store::{PLAYLISTS_KEY, PersistentStore, SONGS_KEY};

use super::shortcuts::Shortcut;

/// Single-playlist playback: the open playlist, its resolved songs loaded
/// into the controller, and the cursor over them.
pub struct PlaylistScreen<D: PlaybackDevice> {
    pub playlist: Option<Playlist>,
    pub controller: PlaybackController<D>,
    pub selected: usize,
    /// Track number being typed after `g`, if any.
    pub jump: Option<String>,
    skip_seconds: u64,
}

impl<D: PlaybackDevice> PlaylistScreen<D> {
    pub fn new(controller: PlaybackController<D>, skip_seconds: u64) -> Self {
        Self {
            playlist: None,
            controller,
            selected: 0,
            jump: None,
            skip_seconds,
        }
    }

    /// Open the playlist with `playlist_id` and load its songs.
    ///
    /// Returns `false`, leaving nothing loaded, when the id is absent or unknown.
    pub fn open(&mut self, store: &PersistentStore, playlist_id: Option<i64>) -> bool {
        let found = playlist_id.and_then(|id| store.find_by_id::<Playlist>(PLAYLISTS_KEY, id));
        let Some(playlist) = found else {
            tracing::debug!(?playlist_id, "playlist not found");
            self.playlist = None;
            self.controller.load(Vec::new());
            self.selected = 0;
            return false;
        };

        let library: Vec<Song> = store.read(SONGS_KEY).unwrap_or_default();
        let songs = playlist.resolve_songs(&library);
        tracing::info!(id = playlist.id, name = %playlist.name, songs = songs.len(), "opening playlist");

        self.controller.load(songs);
        self.playlist = Some(playlist);
        self.selected = 0;
        true
    }

    /// Stop listening and forget the playlist.
    pub fn close(&mut self) {
        if !self.controller.is_paused() {
            self.controller.play_or_toggle(None);
        }
        self.playlist = None;
    }

    pub fn songs(&self) -> &[Song] {
        self.controller.tracks()
    }

    /// Play the song under the cursor.
    pub fn play_selected(&mut self) {
        self.controller.play_or_toggle(Some(self.selected as i64));
    }

    /// Play the track whose 1-based number is typed in `raw`.
    ///
    /// Returns `false`, changing nothing, when `raw` is not a whole number
    /// or names no track.
    pub fn jump_to(&mut self, raw: &str) -> bool {
        let Some(index) = parse_index(raw).and_then(|n| n.checked_sub(1)) else {
            return false;
        };
        if self.controller.track_at(index).is_none() {
            tracing::debug!(raw, "no such track number");
            return false;
        }
        // track_at only resolves indices inside the list.
        self.selected = index as usize;
        self.controller.play_or_toggle(Some(index));
        true
    }

    pub fn handle_shortcut(&mut self, shortcut: Shortcut) {
        let skip = self.skip_seconds as f64;
        match shortcut {
            Shortcut::GoForward => self.controller.scrub(skip),
            Shortcut::GoBack => self.controller.scrub(-skip),
            Shortcut::PlayPause => self.controller.play_or_toggle(None),
            Shortcut::NextSong => self.controller.advance(Direction::Next),
            Shortcut::PreviousSong => self.controller.advance(Direction::Previous),
            Shortcut::Mute => {
                self.controller.mute_toggle();
            }
        }
    }

    /// Jump to `percent` of the current song, as the timeline control does.
    pub fn seek_percent(&mut self, percent: f64) {
        self.controller.seek_to_fraction(percent);
    }

    pub fn toggle_shuffle(&mut self) -> bool {
        self.controller.shuffle_toggle()
    }

    /// Advance when the device reports the current song finished.
    pub fn tick(&mut self) {
        if self.controller.device().ended() {
            self.controller.on_track_ended();
        }
    }

    /// Text for the now-playing line, or `None` when nothing is loaded.
    pub fn now_playing(&self, ui: &UiSettings) -> Option<String> {
        self.controller
            .current_track()
            .map(|song| now_playing_label(song, &ui.now_playing_fields, &ui.now_playing_separator))
    }

    pub fn next(&mut self) {
        let len = self.songs().len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    pub fn prev(&mut self) {
        let len = self.songs().len();
        if len > 0 {
            self.selected = (self.selected + len - 1) % len;
        }
    }
}
