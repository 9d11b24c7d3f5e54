//! Device list persistence
//!
//! The device list is stored as one serialized value under a single key, the
//! same way the browser build keeps it in local storage:
//! a JSON array of `{"name", "watt", "hours"}` objects.
//!
//! Backends:
//! - [`Database`]: SQLite key-value table on disk (default)
//! - [`MemoryStore`]: in-process, used by the demo and tests

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::Database;

use crate::core::{Error, NormalizedDevice, Result};

/// Load/save interface the estimator persists through
pub trait DeviceStore {
    /// Read the stored device list.
    ///
    /// Returns an empty list when nothing is stored or the stored value is
    /// corrupt. `Err` is reserved for backend failures.
    fn load(&self) -> Result<Vec<NormalizedDevice>>;

    /// Replace the stored device list
    fn save(&mut self, devices: &[NormalizedDevice]) -> Result<()>;
}

/// Serialize a device list to its stored form
pub fn encode_devices(devices: &[NormalizedDevice]) -> Result<String> {
    serde_json::to_string(devices).map_err(|e| Error::Serialization(e.to_string()))
}

/// Parse a stored device list.
///
/// A payload that is not a JSON array is corrupt. Entries that are malformed
/// or carry negative or non-finite figures are dropped individually.
pub fn decode_devices(raw: &str) -> Result<Vec<NormalizedDevice>> {
    let entries: Vec<serde_json::Value> =
        serde_json::from_str(raw).map_err(|e| Error::PersistenceCorrupt(e.to_string()))?;

    let devices = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            match serde_json::from_value::<NormalizedDevice>(entry) {
                Ok(device) if device.is_valid() => Some(device),
                Ok(device) => {
                    log::warn!("Dropping stored device #{} {:?}: invalid figures", index, device.name);
                    None
                }
                Err(e) => {
                    log::warn!("Dropping stored device #{}: {}", index, e);
                    None
                }
            }
        })
        .collect();

    Ok(devices)
}

/// Parse a stored device list, treating corrupt data as empty
pub(crate) fn decode_or_empty(raw: Option<&str>) -> Vec<NormalizedDevice> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    match decode_devices(raw) {
        Ok(devices) => devices,
        Err(e) => {
            log::warn!("Discarding stored devices: {}", e);
            Vec::new()
        }
    }
}
