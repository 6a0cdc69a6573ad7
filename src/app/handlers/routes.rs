//! Handler für Routen-Operationen.

use super::{alerts, dialog};
use crate::app::state::AppState;
use crate::core::{is_valid_hex_color, RouteDraft, RoutePatch};

/// Wertet den Routen-Dialog aus: Neuanlage aus der abgeschlossenen Zeichnung
/// oder Update der bearbeiteten Custom-Route. Bei Validierungsfehlern bleibt
/// der Dialog offen und die Zeichnung erhalten.
pub fn submit_dialog(state: &mut AppState) {
    let form = state.ui.route_dialog.clone();
    if !form.visible {
        log::debug!("Routen-Dialog-Bestätigung ohne offenen Dialog ignoriert");
        return;
    }

    let name = form.name.trim().to_string();
    if name.is_empty() {
        alerts::push_error(state, "Validation Error", "Route name is required.");
        return;
    }
    if form.editing_id.is_none() && form.path.len() < 2 {
        alerts::push_error(state, "Validation Error", "Route must have at least 2 points.");
        return;
    }
    if !is_valid_hex_color(&form.color) {
        alerts::push_error(
            state,
            "Validation Error",
            "Route color must be a hex value like #FF6B6B.",
        );
        return;
    }
    if form.width == 0 {
        alerts::push_error(state, "Validation Error", "Route width must be at least 1.");
        return;
    }

    if let Some(id) = form.editing_id {
        let patch = RoutePatch {
            name: Some(name.clone()),
            kind: Some(form.kind),
            description: Some(form.description.trim().to_string()),
            color: Some(form.color),
            width: Some(form.width),
            ..RoutePatch::default()
        };
        if state.routes.update(&id, patch) {
            alerts::push_success(
                state,
                "Route Updated",
                &format!("Route \"{name}\" has been successfully updated."),
            );
        } else {
            alerts::push_error(state, "Route Not Found", "Only custom routes can be edited.");
        }
        dialog::close_route_dialog(state);
    } else {
        let draft = RouteDraft {
            name: name.clone(),
            path: form.path,
            kind: form.kind,
            description: form.description.trim().to_string(),
            color: form.color,
            width: form.width,
        };
        let route = state.routes.add(draft);
        log::info!("Custom-Route '{}' mit {} Punkten erstellt", route.name, route.path.len());
        alerts::push_success(
            state,
            "Route Added",
            &format!("Route \"{name}\" has been successfully added to the map."),
        );
        dialog::close_route_dialog(state);
        // Commit räumt die Zeichnung auf und kehrt zu Idle zurück
        super::mode::cancel_route_drawing(state);
    }
}

/// Löscht eine Custom-Route (nach bestätigtem Dialog).
pub fn delete_route(state: &mut AppState, id: &str) {
    if state.routes.delete(id) {
        alerts::push_success(
            state,
            "Route Deleted",
            "The route has been successfully deleted.",
        );
    } else {
        log::debug!("Keine Custom-Route mit ID '{id}' zu löschen");
    }
}

/// Löscht alle Custom-Routen (nach bestätigtem Dialog).
pub fn clear_routes(state: &mut AppState) {
    let removed = state.routes.clear_all();
    log::info!("{removed} Custom-Routen gelöscht");
    alerts::push_success(
        state,
        "Routes Cleared",
        "All custom routes have been deleted successfully.",
    );
}
