pub mod collection;
pub mod file_store;
pub mod files;
pub mod gateway;
#[cfg(test)]
pub mod memory_store;
pub mod settings;

use thiserror::Error;

pub use collection::{decode_tasks, encode_tasks};
pub use file_store::FileStore;
pub use files::{ensure_data_dir, init_local_data_dir, log_dir};
pub use gateway::{GatewayError, KeyValueStore, SETTINGS_KEY, TASKS_KEY};
#[cfg(test)]
pub use memory_store::MemoryStore;
pub use settings::{decode_mode, encode_mode};

/// Stored data that could not be turned back into domain values
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("settings carry no category")]
    MissingCategory,
}
