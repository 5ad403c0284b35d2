use serde::{Serialize, de::DeserializeOwned};

/// A record that can live in a stored collection.
pub trait Entity: Serialize + DeserializeOwned + Clone {
    fn id(&self) -> i64;
    fn set_id(&mut self, id: i64);
    fn name(&self) -> &str;
}
