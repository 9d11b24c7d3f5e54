//! In-memory store

use super::{decode_or_empty, encode_devices, DeviceStore};
use crate::core::{NormalizedDevice, Result};

/// Keeps the serialized device list in memory
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    raw: Option<String>,
    saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `raw` as its serialized value
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
            saves: 0,
        }
    }

    /// The serialized value currently held
    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    /// Number of successful saves
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DeviceStore for MemoryStore {
    fn load(&self) -> Result<Vec<NormalizedDevice>> {
        Ok(decode_or_empty(self.raw()))
    }

    fn save(&mut self, devices: &[NormalizedDevice]) -> Result<()> {
        self.raw = Some(encode_devices(devices)?);
        self.saves += 1;
        Ok(())
    }
}
