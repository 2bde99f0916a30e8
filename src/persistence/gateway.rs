use std::io;
use thiserror::Error;

/// Key holding the serialized task collection
pub const TASKS_KEY: &str = "tasks";
/// Key holding the serialized active mode
pub const SETTINGS_KEY: &str = "settings";
/// Every key the application writes; `clear` touches nothing else
pub const STORE_KEYS: [&str; 2] = [TASKS_KEY, SETTINGS_KEY];

/// Failure reported by a storage backend
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("I/O error on key `{key}`: {source}")]
    Io {
        key: String,
        #[source]
        source: io::Error,
    },
    #[error("invalid storage key `{0}`")]
    InvalidKey(String),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Durable string key-value storage shared by the mode and task stores.
///
/// Knows nothing about tasks; the stores own the encoding.
pub trait KeyValueStore {
    /// `Ok(None)` when the key has never been written (or was cleared)
    fn get(&self, key: &str) -> Result<Option<String>, GatewayError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), GatewayError>;

    /// Remove every key in [`STORE_KEYS`]
    fn clear(&mut self) -> Result<(), GatewayError>;
}

/// Keys become file names, so only a conservative alphabet is allowed.
pub fn validate_key(key: &str) -> Result<(), GatewayError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(GatewayError::InvalidKey(key.to_string()))
    }
}
