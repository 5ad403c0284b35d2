use crate::library::{default_playlists, default_songs};

use super::collection::PersistentStore;
use super::error::Result;
use super::{PLAYLISTS_KEY, SONGS_KEY};

impl PersistentStore {
    /// Seed every known key with the shipped dataset. Safe on every start.
    pub fn load_all_data(&mut self) -> Result<()> {
        self.seed_if_absent(SONGS_KEY, &default_songs())?;
        self.seed_if_absent(PLAYLISTS_KEY, &default_playlists())?;
        Ok(())
    }
}
