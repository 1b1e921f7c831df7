//! Persistence seams
//!
//! The shared session configuration lives in a settings store (a SQLite file
//! or a hosted REST table); the device-local selection lives in a small JSON
//! file next to it.

mod device;
#[cfg(test)]
pub(crate) mod memory;
mod rest;
mod sqlite;

use serde_json::Value;

use crate::error::StoreError;

pub(crate) use device::FileDeviceStore;
pub(crate) use rest::RestSettingsStore;
pub(crate) use sqlite::SqliteSettingsStore;

/// Keyed settings shared by every user and device. `write` replaces the
/// whole value stored under `key`.
pub(crate) trait SettingsStore: Send + Sync {
    fn name(&self) -> &'static str;

    fn read(&self, key: &str) -> Result<Option<Value>, StoreError>;

    fn write(&self, key: &str, value: &Value) -> Result<(), StoreError>;
}

/// Per-device preferences. Writes are best effort and never fail the caller.
pub(crate) trait DeviceStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str);
}

pub(crate) type BoxedSettingsStore = Box<dyn SettingsStore>;
pub(crate) type BoxedDeviceStore = Box<dyn DeviceStore>;
