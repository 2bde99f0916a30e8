use super::files::{atomic_write, read_optional};
use super::gateway::{validate_key, GatewayError, KeyValueStore, STORE_KEYS};
use log::{debug, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const KEY_FILE_EXTENSION: &str = "json";

/// Key-value store backed by one JSON file per key inside the data directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open (and create if needed) a store rooted at `dir`
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self, GatewayError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|source| GatewayError::Io {
            key: dir.display().to_string(),
            source,
        })?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, GatewayError> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{}.{}", key, KEY_FILE_EXTENSION)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, GatewayError> {
        let path = self.path_for(key)?;
        read_optional(&path).map_err(|source| GatewayError::Io {
            key: key.to_string(),
            source,
        })
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), GatewayError> {
        let path = self.path_for(key)?;
        atomic_write(&path, value).map_err(|source| GatewayError::Io {
            key: key.to_string(),
            source,
        })?;
        debug!("event=kv_set key={} bytes={}", key, value.len());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), GatewayError> {
        let mut removed = 0usize;
        let mut first_error = None;
        for key in STORE_KEYS {
            let path = self.path_for(key)?;
            match fs::remove_file(&path) {
                Ok(()) => removed += 1,
                Err(err) if err.kind() == io::ErrorKind::NotFound => {}
                Err(source) => {
                    warn!("event=kv_clear key={} status=error reason=\"{}\"", key, source);
                    if first_error.is_none() {
                        first_error = Some(GatewayError::Io {
                            key: key.to_string(),
                            source,
                        });
                    }
                }
            }
        }

        debug!("event=kv_clear removed={}", removed);
        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
