//! Opakes Key-Value-Text-Storage für die Custom-Annotationen.
//!
//! Werte sind vollständige JSON-Dokumente pro Kind; jeder Write ersetzt das
//! Dokument eines Keys als Ganzes. Es gibt keine Schema-Versionierung.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Schlüssel→Text-Ablage für persistierte Custom-Listen.
pub trait KeyValueStore: Send + Sync {
    /// Liest den Wert zu `key`; `Ok(None)` wenn der Key nie geschrieben wurde.
    fn read(&self, key: &str) -> anyhow::Result<Option<String>>;

    /// Ersetzt den Wert zu `key` vollständig.
    fn write(&self, key: &str, value: &str) -> anyhow::Result<()>;
}
