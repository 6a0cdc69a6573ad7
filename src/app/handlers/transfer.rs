//! Export und Import der Custom-Datensätze.
//!
//! Der Dateitransport selbst (Download, Datei-Picker, asynchrones Lesen) ist
//! Sache der Präsentationsschicht; hier werden nur Dokumente gebaut bzw.
//! verarbeitet. Stößt der Benutzer einen zweiten Import an, bevor der erste
//! Lese-Callback eintrifft, werden beide Ergebnisse in Callback-Reihenfolge
//! vollständig und unabhängig angewendet (Last-Write-Wins pro Kind).

use super::alerts;
use crate::app::state::{AppState, DownloadRequest};
use crate::core::{AnnotationKind, AnnotationRecord, MarkerRecord, RouteRecord};

/// Abweisungsgründe beim Import; alle führen zu null Seiteneffekten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportError {
    /// Dokument ist kein wohlgeformtes JSON
    Parse,
    /// Dokument ist JSON, aber keine Sequenz
    Format,
    /// Kein Element erfüllt den Minimal-Vertrag
    NoValidRecords,
}

/// Ergebnis einer Import-Prüfung: akzeptierte Drafts plus Eingabeanzahl.
pub struct ImportBatch<D> {
    /// Elemente, die den Minimal-Vertrag erfüllen
    pub drafts: Vec<D>,
    /// Anzahl der Elemente im Eingabedokument
    pub total: usize,
}

/// Prüft ein Import-Dokument gegen den Minimal-Vertrag des Kinds.
/// Ungültige Elemente werden still verworfen und nur gezählt.
pub fn parse_import_document<K: AnnotationRecord>(
    raw: &str,
) -> Result<ImportBatch<K::Draft>, ImportError> {
    let value: serde_json::Value = serde_json::from_str(raw).map_err(|e| {
        log::warn!("Import-Dokument nicht parsebar: {e}");
        ImportError::Parse
    })?;
    let Some(elements) = value.as_array() else {
        return Err(ImportError::Format);
    };
    let total = elements.len();
    let drafts: Vec<K::Draft> = elements.iter().filter_map(K::draft_from_import).collect();
    if drafts.is_empty() {
        return Err(ImportError::NoValidRecords);
    }
    Ok(ImportBatch { drafts, total })
}

/// Exportiert die Custom-Records eines Kinds als eingerücktes JSON-Dokument.
/// Ohne Custom-Records ein informativer No-op ohne Download-Artefakt;
/// eingebaute Records werden nie exportiert.
pub fn export_records(state: &mut AppState, kind: AnnotationKind) -> anyhow::Result<()> {
    let (contents, count) = match kind {
        AnnotationKind::Markers => {
            let custom = state.markers.get_custom();
            if custom.is_empty() {
                alerts::push_info(state, "No Markers", "No custom markers to export.");
                return Ok(());
            }
            (serde_json::to_string_pretty(&custom)?, custom.len())
        }
        AnnotationKind::Routes => {
            let custom = state.routes.get_custom();
            if custom.is_empty() {
                alerts::push_info(state, "No Routes", "No custom routes to export.");
                return Ok(());
            }
            (serde_json::to_string_pretty(&custom)?, custom.len())
        }
    };

    let filename = kind.export_filename();
    state.ui.pending_download = Some(DownloadRequest {
        filename: filename.to_string(),
        contents,
    });
    log::info!("{count} {} exportiert nach {filename}", kind.label());
    alerts::push_success(
        state,
        "Export Successful",
        &format!("{count} {} have been exported to {filename}", kind.label()),
    );
    Ok(())
}

/// Merkt den Import-Wunsch vor; die Präsentationsschicht öffnet den Picker
/// und meldet den Dateiinhalt per `ImportFileLoaded` zurück.
pub fn request_import_dialog(state: &mut AppState, kind: AnnotationKind) {
    state.ui.import_request = Some(kind);
}

/// Verarbeitet ein gelesenes Import-Dokument für das angegebene Kind.
pub fn import_records(state: &mut AppState, kind: AnnotationKind, raw: &str) {
    state.ui.import_request = None;
    match kind {
        AnnotationKind::Markers => run_import::<MarkerRecord>(state, kind, raw, |state, draft| {
            state.markers.add(draft);
        }),
        AnnotationKind::Routes => run_import::<RouteRecord>(state, kind, raw, |state, draft| {
            state.routes.add(draft);
        }),
    }
}

/// Gemeinsamer Import-Ablauf: prüfen, Teil-Import melden, einfügen.
/// Jedes gültige Element erhält über `add` eine frische Identität —
/// mitgelieferte IDs oder Zeitstempel der Eingabe werden ignoriert.
fn run_import<K: AnnotationRecord>(
    state: &mut AppState,
    kind: AnnotationKind,
    raw: &str,
    insert: impl Fn(&AppState, K::Draft),
) {
    let batch = match parse_import_document::<K>(raw) {
        Ok(batch) => batch,
        Err(error) => {
            report_rejection(state, kind, error);
            return;
        }
    };

    let imported = batch.drafts.len();
    if imported < batch.total {
        alerts::push_info(
            state,
            "Partial Import",
            &format!(
                "{imported} out of {} {} are valid and will be imported.",
                batch.total,
                kind.label()
            ),
        );
    }

    for draft in batch.drafts {
        insert(state, draft);
    }

    log::info!("{imported} {} importiert", kind.label());
    alerts::push_success(
        state,
        "Import Successful",
        &format!("{imported} {} have been successfully imported.", kind.label()),
    );
}

fn report_rejection(state: &mut AppState, kind: AnnotationKind, error: ImportError) {
    let (title, description) = match (error, kind) {
        (ImportError::Parse, _) => (
            "Invalid File",
            "Invalid file format. Please select a valid JSON file.".to_string(),
        ),
        (ImportError::Format, kind) => (
            "Invalid Format",
            format!("The file must contain an array of {}.", kind.label()),
        ),
        (ImportError::NoValidRecords, AnnotationKind::Markers) => (
            "No Valid Markers",
            "No valid markers found in the file. Each marker must have a name, type, and location coordinates."
                .to_string(),
        ),
        (ImportError::NoValidRecords, AnnotationKind::Routes) => (
            "No Valid Routes",
            "No valid routes found in the file. Each route must have a name, type, and at least 2 path points."
                .to_string(),
        ),
    };
    alerts::push_error(state, title, &description);
}
