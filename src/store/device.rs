use std::collections::BTreeMap;
use std::fs::File;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::utils::debug_enabled;

use super::DeviceStore;

/// Device preferences kept as a flat JSON object on disk.
pub(crate) struct FileDeviceStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileDeviceStore {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    fn guard(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn load(&self) -> BTreeMap<String, String> {
        let Ok(file) = File::open(&self.path) else {
            return BTreeMap::new();
        };
        match serde_json::from_reader(file) {
            Ok(map) => map,
            Err(e) => {
                if debug_enabled() {
                    eprintln!("[DEBUG] Ignoring unreadable {}: {}", self.path.display(), e);
                }
                BTreeMap::new()
            }
        }
    }

    /// Write to a sibling temp file and rename it over the old one, so
    /// readers see either the previous contents or the new ones.
    fn save(&self, map: &BTreeMap<String, String>) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let tmp_path = self.path.with_extension("json.tmp");
        let file = File::create(&tmp_path)?;
        serde_json::to_writer_pretty(&file, map)?;
        file.sync_all()?;
        drop(file);
        std::fs::rename(&tmp_path, &self.path)
    }
}

impl DeviceStore for FileDeviceStore {
    fn get(&self, key: &str) -> Option<String> {
        let _guard = self.guard();
        self.load().remove(key)
    }

    fn set(&self, key: &str, value: &str) {
        let _guard = self.guard();
        let mut map = self.load();
        map.insert(key.to_string(), value.to_string());
        if let Err(e) = self.save(&map)
            && debug_enabled()
        {
            eprintln!("[DEBUG] Failed to write {}: {}", self.path.display(), e);
        }
    }
}
