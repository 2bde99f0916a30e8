use super::gateway::{validate_key, GatewayError, KeyValueStore, STORE_KEYS};
use std::collections::HashMap;

/// In-memory key-value store with switchable failures, for exercising the stores
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    pub fail_reads: bool,
    pub fail_writes: bool,
    /// Key that `clear` fails to remove while still removing the others
    pub stuck_key: Option<&'static str>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, bypassing the failure switches
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, GatewayError> {
        validate_key(key)?;
        if self.fail_reads {
            return Err(GatewayError::Unavailable("reads disabled".to_string()));
        }
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), GatewayError> {
        validate_key(key)?;
        if self.fail_writes {
            return Err(GatewayError::Unavailable("writes disabled".to_string()));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), GatewayError> {
        if self.fail_writes {
            return Err(GatewayError::Unavailable("writes disabled".to_string()));
        }
        let stuck = self.stuck_key;
        self.entries
            .retain(|key, _| !STORE_KEYS.contains(&key.as_str()) || Some(key.as_str()) == stuck);
        match stuck {
            Some(key) if self.entries.contains_key(key) => {
                Err(GatewayError::Unavailable(format!("could not remove `{}`", key)))
            }
            _ => Ok(()),
        }
    }
}
