use serde::{Serialize, de::DeserializeOwned};

use super::backend::StorageBackend;
use super::entity::Entity;
use super::error::{Result, StoreError};

/// Returned by [`PersistentStore::id_from_name`] when no entity has the name.
pub const MISSING_ID: i64 = -1;

/// Collections of entities addressed by storage key.
///
/// The store exclusively owns its backend. Reads degrade to `None` on a
/// missing or unreadable key; writes are unconditional read-modify-write.
pub struct PersistentStore {
    backend: Box<dyn StorageBackend>,
}

impl PersistentStore {
    pub fn new(backend: impl StorageBackend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    /// Write `default_payload` under `key` unless the key already holds data.
    ///
    /// Returns `true` when the payload was written.
    pub fn seed_if_absent<T: Serialize>(&mut self, key: &str, default_payload: &[T]) -> Result<bool> {
        if self.backend.get_item(key).is_some() {
            tracing::debug!(key, "already seeded");
            return Ok(false);
        }

        self.backend
            .set_item(key, serde_json::to_string(default_payload)?)?;
        tracing::info!(key, items = default_payload.len(), "seeded collection");
        Ok(true)
    }

    /// The collection stored under `key`, or `None` when absent or unreadable.
    pub fn read<T: DeserializeOwned>(&self, key: &str) -> Option<Vec<T>> {
        let raw = self.backend.get_item(key)?;
        match serde_json::from_str(&raw) {
            Ok(items) => Some(items),
            Err(e) => {
                tracing::warn!(key, error = %e, "stored collection is unreadable");
                None
            }
        }
    }

    pub fn find_by_id<T: Entity>(&self, key: &str, id: i64) -> Option<T> {
        self.read::<T>(key)?.into_iter().find(|item| item.id() == id)
    }

    /// Append `entity` to the collection under `key`, creating it if absent.
    pub fn add<T: Entity>(&mut self, key: &str, entity: T) -> Result<()> {
        let mut items: Vec<T> = self.read_for_update(key)?;
        tracing::debug!(key, id = entity.id(), "adding item");
        items.push(entity);
        self.write(key, &items)
    }

    /// Give `draft` the next free id in `key` and append it.
    pub fn create<T: Entity>(&mut self, key: &str, mut draft: T) -> Result<T> {
        let mut items: Vec<T> = self.read_for_update(key)?;
        let id = match items.iter().map(Entity::id).max() {
            None => 0,
            Some(max) => max.checked_add(1).ok_or_else(|| StoreError::IdOverflow {
                key: key.to_string(),
            })?,
        };
        draft.set_id(id);
        items.push(draft.clone());
        self.write(key, &items)?;
        tracing::info!(key, id, name = draft.name(), "created item");
        Ok(draft)
    }

    /// Swap the stored element carrying `entity`'s id for `entity`, keeping its position.
    ///
    /// Returns `false` and leaves the collection untouched when no id matches.
    pub fn replace<T: Entity>(&mut self, key: &str, entity: T) -> Result<bool> {
        let mut items: Vec<T> = self.read_for_update(key)?;
        let Some(slot) = items.iter_mut().find(|item| item.id() == entity.id()) else {
            tracing::debug!(key, id = entity.id(), "replace found no matching item");
            return Ok(false);
        };

        *slot = entity;
        self.write(key, &items)?;
        Ok(true)
    }

    /// Id of the first entity named exactly `name`, or [`MISSING_ID`].
    pub fn id_from_name<T: Entity>(&self, key: &str, name: &str) -> i64 {
        self.read::<T>(key)
            .unwrap_or_default()
            .iter()
            .find(|item| item.name() == name)
            .map_or(MISSING_ID, Entity::id)
    }

    /// Forget every stored key. Reads return `None` until the next seeding.
    pub fn reset_all(&mut self) -> Result<()> {
        tracing::info!("resetting all stored data");
        self.backend.clear()
    }

    /// Current collection before a write: empty when the key is absent, an
    /// error when it holds data that does not parse.
    fn read_for_update<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>> {
        let Some(raw) = self.backend.get_item(key) else {
            return Ok(Vec::new());
        };
        serde_json::from_str(&raw).map_err(|source| {
            tracing::warn!(key, error = %source, "refusing to overwrite unreadable collection");
            StoreError::Corrupt {
                key: key.to_string(),
                source,
            }
        })
    }

    fn write<T: Serialize>(&mut self, key: &str, items: &[T]) -> Result<()> {
        self.backend.set_item(key, serde_json::to_string(items)?)
    }
}
