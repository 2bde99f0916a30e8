use super::error::StoreResult;
use crate::domain::Category;
use crate::persistence::{decode_mode, encode_mode, KeyValueStore, SETTINGS_KEY};
use log::{error, info, warn};

/// Tracks which category is active and persists every switch
#[derive(Debug, Clone, Default)]
pub struct ModeStore {
    mode: Category,
}

impl ModeStore {
    /// Load the persisted mode, falling back to `Work` on any problem
    pub fn load<G: KeyValueStore + ?Sized>(gateway: &G) -> Self {
        let mode = match gateway.get(SETTINGS_KEY) {
            Ok(Some(raw)) => match decode_mode(&raw) {
                Ok(mode) => mode,
                Err(err) => {
                    warn!("event=mode_load status=defaulted reason=\"{}\"", err);
                    Category::default()
                }
            },
            Ok(None) => Category::default(),
            Err(err) => {
                warn!("event=mode_load status=defaulted reason=\"{}\"", err);
                Category::default()
            }
        };
        Self { mode }
    }

    pub fn mode(&self) -> Category {
        self.mode
    }

    /// Switch the active mode. The in-memory value only changes once the
    /// write has gone through.
    pub fn set_mode<G: KeyValueStore + ?Sized>(
        &mut self,
        gateway: &mut G,
        mode: Category,
    ) -> StoreResult<()> {
        let raw = encode_mode(mode)?;
        if let Err(err) = gateway.set(SETTINGS_KEY, &raw) {
            error!("event=mode_set status=error mode={} reason=\"{}\"", mode, err);
            return Err(err.into());
        }
        info!("event=mode_set status=ok from={} to={}", self.mode, mode);
        self.mode = mode;
        Ok(())
    }

    /// Forget the in-memory mode after the backing storage was wiped
    pub(crate) fn reset(&mut self) {
        self.mode = Category::default();
    }
}
