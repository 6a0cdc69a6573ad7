//! In-Memory-Storage für Tests und flüchtige Sitzungen.

use super::KeyValueStore;
use std::collections::HashMap;
use std::sync::Mutex;

/// Hält alle Keys in einer prozesslokalen Map; nichts überlebt den Neustart.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Erstellt ein leeres In-Memory-Storage.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> anyhow::Result<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| anyhow::anyhow!("Storage-Lock vergiftet"))?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| anyhow::anyhow!("Storage-Lock vergiftet"))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
