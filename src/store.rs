//! Persistent collection store.
//!
//! Songs and playlists live as JSON collections under fixed storage keys
//! (`songs`, `playlists`) in a key/value backend. The store seeds those
//! keys on first run, looks entities up by id or name, appends and
//! replaces them, and can wipe everything.

mod backend;
mod collection;
mod entity;
mod error;
mod seed;

pub use backend::{FileBackend, MemoryBackend};
pub use collection::{MISSING_ID, PersistentStore};
pub use entity::Entity;
pub use error::Result;

/// Storage key of the song collection.
pub const SONGS_KEY: &str = "songs";
/// Storage key of the playlist collection.
pub const PLAYLISTS_KEY: &str = "playlists";
