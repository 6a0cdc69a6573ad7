//! Generischer Record-Vertrag für den Entity-Store sowie das ID-Schema.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Kartenposition in Weltkoordinaten (Breiten-/Längen-artig, eigenes CRS,
/// ohne Wertebereichs-Beschränkung).
pub type MapPoint = glam::DVec2;

/// Entity-Kind für kind-parametrisierte Operationen (Transfer, Bulk-Clear).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationKind {
    /// Punkt-Marker
    Markers,
    /// Streckenzüge
    Routes,
}

impl AnnotationKind {
    /// Pluralform für Alert- und Log-Texte.
    pub fn label(self) -> &'static str {
        match self {
            AnnotationKind::Markers => "markers",
            AnnotationKind::Routes => "routes",
        }
    }

    /// Fester Dateiname des Export-Dokuments dieses Kinds.
    pub fn export_filename(self) -> &'static str {
        match self {
            AnnotationKind::Markers => "custom-markers.json",
            AnnotationKind::Routes => "custom-routes.json",
        }
    }
}

/// Vom Store vergebene Identität eines neuen Custom-Records.
/// Wird nach der Erstellung nie mehr verändert.
#[derive(Debug, Clone)]
pub struct RecordIdentity {
    /// Prozessweit eindeutige Record-ID
    pub id: String,
    /// Erstellungszeitpunkt in Epoch-Millisekunden
    pub created_at: u64,
}

/// Vertrag eines Record-Typs gegenüber dem generischen [`EntityStore`].
///
/// Jedes Kind liefert: seinen Storage-Key, die Slugs für das ID-Schema,
/// die Draft→Record-Konstruktion, die Patch-Anwendung und den
/// Minimal-Vertrag für Import-Elemente.
///
/// [`EntityStore`]: super::store::EntityStore
pub trait AnnotationRecord: Clone + Serialize + DeserializeOwned {
    /// Eingabefelder eines neuen Records (ohne Identität).
    type Draft: Clone;
    /// Partielles Update; Identitätsfelder sind hier nicht ausdrückbar.
    type Patch;

    /// Kind-Slug für das ID-Schema ("marker" / "route").
    const KIND: &'static str;
    /// Storage-Key der Custom-Liste dieses Kinds.
    const STORAGE_KEY: &'static str;

    /// Record-ID.
    fn id(&self) -> &str;
    /// Ob der Record benutzerdefiniert ist (nur solche werden persistiert).
    fn is_custom(&self) -> bool;
    /// Subtyp-Slug des Drafts für das ID-Schema (z.B. "town", "main").
    fn subtype_slug(draft: &Self::Draft) -> &'static str;
    /// Baut den persistierbaren Record aus Draft + vergebener Identität.
    fn from_draft(draft: Self::Draft, identity: RecordIdentity) -> Self;
    /// Wendet einen Patch an (shallow, Last-Write-Wins pro Feld).
    fn apply_patch(&mut self, patch: Self::Patch);
    /// Minimal-Vertrag für Import-Elemente; `None` = Element wird verworfen.
    fn draft_from_import(value: &serde_json::Value) -> Option<Self::Draft>;
}

/// Epoch-Millisekunden der Systemuhr.
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Prozessweit eindeutige Record-ID nach dem Schema
/// `{kind}-{subtype}-{epoch_millis}-{suffix}`.
pub fn new_record_id(kind: &str, subtype: &str) -> String {
    format!("{kind}-{subtype}-{}-{}", now_millis(), id_suffix())
}

static ID_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Base36-Suffix aus Subsekunden-Nanos und einer monotonen Sequenz.
/// Die Sequenz in den oberen Bits hält den Suffix prozessweit kollisionsfrei.
fn id_suffix() -> String {
    let seq = ID_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| u64::from(d.subsec_nanos()))
        .unwrap_or(0);
    to_base36((seq << 32) | nanos)
}

fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut buffer = [0u8; 13];
    let mut index = buffer.len();
    while value > 0 {
        index -= 1;
        buffer[index] = DIGITS[(value % 36) as usize];
        value /= 36;
    }
    String::from_utf8_lossy(&buffer[index..]).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_record_ids_are_unique_within_process() {
        let mut seen = HashSet::new();
        for _ in 0..1000 {
            assert!(seen.insert(new_record_id("marker", "town")));
        }
    }

    #[test]
    fn test_record_id_follows_scheme() {
        let id = new_record_id("route", "main");
        let parts: Vec<&str> = id.splitn(4, '-').collect();
        assert_eq!(parts[0], "route");
        assert_eq!(parts[1], "main");
        assert!(parts[2].parse::<u64>().is_ok());
        assert!(!parts[3].is_empty());
    }

    #[test]
    fn test_base36_digits() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
    }
}
