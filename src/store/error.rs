use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

/// Failures of the write side of the store.
///
/// Reads never fail: a missing or unreadable key is reported as `None`.
/// Writes refuse to touch a key whose current value is unreadable.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("storage I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("data serialization failure: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The key holds data that no longer parses; it is left untouched.
    #[error("stored collection `{key}` is unreadable: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("no id left to assign in `{key}`")]
    IdOverflow { key: String },
}
