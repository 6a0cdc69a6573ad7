//! Handler für Marker-Operationen.

use super::{alerts, dialog, mode};
use crate::app::state::AppState;
use crate::core::{MarkerDraft, MarkerPatch};

/// Wertet den Marker-Dialog aus: Neuanlage an der Klickposition oder Update
/// des bearbeiteten Custom-Markers. Bei leerem Namen bleibt der Dialog offen.
pub fn submit_dialog(state: &mut AppState) {
    let form = state.ui.marker_dialog.clone();
    if !form.visible {
        log::debug!("Marker-Dialog-Bestätigung ohne offenen Dialog ignoriert");
        return;
    }

    let name = form.name.trim().to_string();
    if name.is_empty() {
        alerts::push_error(state, "Validation Error", "Marker name is required.");
        return;
    }
    let description = non_blank(&form.description);
    let link = non_blank(&form.link);

    if let Some(id) = form.editing_id {
        let patch = MarkerPatch {
            name: Some(name),
            kind: Some(form.kind),
            description: Some(description),
            link: Some(link),
            major: Some(form.major),
            ..MarkerPatch::default()
        };
        if state.markers.update(&id, patch) {
            alerts::push_success(
                state,
                "Marker Updated",
                "The marker has been successfully updated.",
            );
        } else {
            alerts::push_error(state, "Marker Not Found", "Only custom markers can be edited.");
        }
    } else {
        let Some(location) = form.location else {
            log::warn!("Marker-Dialog ohne Platzierungsort bestätigt");
            dialog::close_marker_dialog(state);
            mode::exit_marker_mode(state);
            return;
        };
        let draft = MarkerDraft {
            name,
            kind: form.kind,
            location,
            description,
            link,
            major: form.major,
        };
        let marker = state.markers.add(draft);
        log::info!(
            "Custom-Marker '{}' bei ({:.2}, {:.2}) platziert",
            marker.name,
            location.x,
            location.y
        );
    }

    dialog::close_marker_dialog(state);
    // Single-Shot-Platzierung: der Dialogschluss beendet den Modus
    mode::exit_marker_mode(state);
}

/// Löscht einen Custom-Marker (nach bestätigtem Dialog).
pub fn delete_marker(state: &mut AppState, id: &str) {
    if state.markers.delete(id) {
        alerts::push_success(
            state,
            "Marker Deleted",
            "The marker has been successfully deleted.",
        );
    } else {
        log::debug!("Kein Custom-Marker mit ID '{id}' zu löschen");
    }
}

/// Löscht alle Custom-Marker (nach bestätigtem Dialog).
pub fn clear_markers(state: &mut AppState) {
    let removed = state.markers.clear_all();
    log::info!("{removed} Custom-Marker gelöscht");
    alerts::push_success(
        state,
        "Markers Cleared",
        "All custom markers have been deleted successfully.",
    );
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
