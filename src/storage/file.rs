//! Datei-basiertes Storage: ein JSON-Dokument pro Key.

use super::KeyValueStore;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Legt jeden Key als `<key>.json` im Storage-Verzeichnis ab.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Öffnet das Storage-Verzeichnis und legt es bei Bedarf an.
    pub fn new(dir: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        log::info!("Annotations-Storage: {}", dir.display());
        Ok(Self { dir })
    }

    /// Standard-Datenverzeichnis neben der Binary (analog zur Optionen-Datei).
    pub fn data_dir() -> PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| PathBuf::from("fantasy_map_annotator"))
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join("annotations")
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: &str) -> anyhow::Result<Option<String>> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> anyhow::Result<()> {
        std::fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_write_roundtrip() {
        let dir = std::env::temp_dir().join(format!("fma_store_{}", std::process::id()));
        let store = FileStore::new(&dir).expect("Verzeichnis anlegbar");

        assert_eq!(store.read("custom-markers").unwrap(), None);
        store.write("custom-markers", "[]").unwrap();
        assert_eq!(store.read("custom-markers").unwrap().as_deref(), Some("[]"));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
