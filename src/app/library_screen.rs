use crate::library::{Playlist, Song};
use crate::search::{SearchQuery, SearchResults, filter};
use crate::store::{self, PLAYLISTS_KEY, PersistentStore, SONGS_KEY};

/// One visible row of the library: playlists first, then songs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LibraryEntry<'a> {
    Playlist(&'a Playlist),
    Song(&'a Song),
}

/// Library browser state: the loaded catalog, the search box and the cursor.
#[derive(Debug, Default)]
pub struct LibraryScreen {
    pub playlists: Vec<Playlist>,
    pub songs: Vec<Song>,
    pub query: SearchQuery,
    /// Whether keystrokes currently go to the search box.
    pub typing: bool,
    pub selected: usize,
    results: SearchResults,
}

impl LibraryScreen {
    /// Seed the store if needed and load both collections.
    pub fn open(store: &mut PersistentStore, exact_match: bool) -> store::Result<Self> {
        store.load_all_data()?;

        let mut screen = Self {
            query: SearchQuery::new("", exact_match),
            ..Self::default()
        };
        screen.reload(store);
        Ok(screen)
    }

    /// Re-read the collections and re-apply the current query.
    pub fn reload(&mut self, store: &PersistentStore) {
        self.playlists = store.read(PLAYLISTS_KEY).unwrap_or_default();
        self.songs = store.read(SONGS_KEY).unwrap_or_default();
        self.refresh();
    }

    pub fn results(&self) -> &SearchResults {
        &self.results
    }

    /// Rows in display order after filtering.
    pub fn entries(&self) -> Vec<LibraryEntry<'_>> {
        self.results
            .playlists
            .iter()
            .map(LibraryEntry::Playlist)
            .chain(self.results.songs.iter().map(LibraryEntry::Song))
            .collect()
    }

    pub fn selected_entry(&self) -> Option<LibraryEntry<'_>> {
        self.entries().get(self.selected).copied()
    }

    pub fn selected_playlist_id(&self) -> Option<i64> {
        match self.selected_entry()? {
            LibraryEntry::Playlist(p) => Some(p.id),
            LibraryEntry::Song(_) => None,
        }
    }

    pub fn selected_song_id(&self) -> Option<i64> {
        match self.selected_entry()? {
            LibraryEntry::Song(s) => Some(s.id),
            LibraryEntry::Playlist(_) => None,
        }
    }

    /// Replace the query text and filter again.
    #[cfg(test)]
    pub fn search(&mut self, text: impl Into<String>) -> &SearchResults {
        self.query.text = text.into();
        self.refresh();
        &self.results
    }

    pub fn push_query_char(&mut self, c: char) {
        self.query.text.push(c);
        self.refresh();
    }

    pub fn pop_query_char(&mut self) {
        self.query.text.pop();
        self.refresh();
    }

    pub fn clear_query(&mut self) {
        self.query.text.clear();
        self.typing = false;
        self.refresh();
    }

    /// Flip exact matching. Returns the new state.
    pub fn toggle_exact(&mut self) -> bool {
        self.query.exact = !self.query.exact;
        self.refresh();
        self.query.exact
    }

    /// Flip `liked` on the song with `song_id` and persist it.
    ///
    /// Returns the new state, or `None` when no such song exists.
    pub fn toggle_liked(&mut self, store: &mut PersistentStore, song_id: i64) -> store::Result<Option<bool>> {
        let Some(mut song) = store.find_by_id::<Song>(SONGS_KEY, song_id) else {
            return Ok(None);
        };
        let liked = song.toggle_liked();
        store.replace(SONGS_KEY, song)?;
        self.reload(store);
        Ok(Some(liked))
    }

    /// Move the cursor down, wrapping to the top.
    pub fn next(&mut self) {
        let len = self.results.playlists.len() + self.results.songs.len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    /// Move the cursor up, wrapping to the bottom.
    pub fn prev(&mut self) {
        let len = self.results.playlists.len() + self.results.songs.len();
        if len > 0 {
            self.selected = (self.selected + len - 1) % len;
        }
    }

    fn refresh(&mut self) {
        self.results = filter(&self.query, &self.playlists, &self.songs);
        let len = self.results.playlists.len() + self.results.songs.len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }
}
