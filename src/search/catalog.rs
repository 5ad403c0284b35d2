use crate::library::{Playlist, Song};

use super::matcher::matches_any;

/// Text fields a record is searched on.
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;
}

impl Searchable for Playlist {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str()]
    }
}

impl Searchable for Song {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.artist.as_str(), self.genre.as_str()]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub text: String,
    pub exact: bool,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>, exact: bool) -> Self {
        Self {
            text: text.into(),
            exact,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn accepts<T: Searchable>(&self, record: &T) -> bool {
        self.is_empty() || matches_any(record.search_fields(), &self.text, self.exact)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResults {
    pub playlists: Vec<Playlist>,
    pub songs: Vec<Song>,
}

/// Keep the playlists and songs accepted by `query`, in their original order.
pub fn filter(query: &SearchQuery, playlists: &[Playlist], songs: &[Song]) -> SearchResults {
    SearchResults {
        playlists: retain_matching(query, playlists),
        songs: retain_matching(query, songs),
    }
}

fn retain_matching<T: Searchable + Clone>(query: &SearchQuery, records: &[T]) -> Vec<T> {
    records
        .iter()
        .filter(|r| query.accepts(*r))
        .cloned()
        .collect()
}
