//! Handler für Dialog-State und Bestätigungen.

use crate::app::state::{
    AppState, ConfirmAction, ConfirmDialogState, MarkerDialogState, RouteDialogState,
};
use crate::core::MapPoint;

/// Öffnet den Marker-Dialog für eine Neuanlage an der Klickposition.
pub fn open_marker_dialog(state: &mut AppState, location: MapPoint) {
    state.ui.marker_dialog = MarkerDialogState {
        visible: true,
        location: Some(location),
        ..MarkerDialogState::default()
    };
}

/// Öffnet den Marker-Dialog vorbefüllt zum Bearbeiten eines Custom-Markers.
pub fn open_marker_dialog_for_edit(state: &mut AppState, id: &str) {
    let Some(marker) = state.markers.get_custom().into_iter().find(|m| m.id == id) else {
        log::warn!("Kein Custom-Marker mit ID '{id}' zu bearbeiten");
        return;
    };
    state.ui.marker_dialog = MarkerDialogState {
        visible: true,
        location: Some(marker.location),
        editing_id: Some(marker.id),
        name: marker.name,
        kind: marker.kind,
        description: marker.description.unwrap_or_default(),
        link: marker.link.unwrap_or_default(),
        major: marker.major,
    };
}

/// Schließt den Marker-Dialog und setzt dessen Formular zurück.
pub fn close_marker_dialog(state: &mut AppState) {
    state.ui.marker_dialog = MarkerDialogState::default();
}

/// Öffnet den Routen-Dialog vorbefüllt zum Bearbeiten einer Custom-Route.
pub fn open_route_dialog_for_edit(state: &mut AppState, id: &str) {
    let Some(route) = state.routes.get_custom().into_iter().find(|r| r.id == id) else {
        log::warn!("Keine Custom-Route mit ID '{id}' zu bearbeiten");
        return;
    };
    state.ui.route_dialog = RouteDialogState {
        visible: true,
        path: route.path,
        editing_id: Some(route.id),
        name: route.name,
        kind: route.kind,
        description: route.description,
        color: route.color,
        width: route.width,
    };
}

/// Schließt den Routen-Dialog und setzt dessen Formular zurück.
pub fn close_route_dialog(state: &mut AppState) {
    state.ui.route_dialog = RouteDialogState::default();
}

/// Fordert die Bestätigung einer destruktiven Aktion an.
pub fn request_confirm(state: &mut AppState, action: ConfirmAction) {
    let (title, description) = match &action {
        ConfirmAction::DeleteMarker { .. } => (
            "Delete Marker",
            "Are you sure you want to delete this marker? This action cannot be undone.",
        ),
        ConfirmAction::DeleteRoute { .. } => (
            "Delete Route",
            "Are you sure you want to delete this route? This action cannot be undone.",
        ),
        ConfirmAction::ClearMarkers => (
            "Clear All Markers",
            "Are you sure you want to delete ALL custom markers? This action cannot be undone.",
        ),
        ConfirmAction::ClearRoutes => (
            "Clear All Routes",
            "Are you sure you want to delete ALL custom routes? This action cannot be undone.",
        ),
    };
    state.ui.confirm_dialog = Some(ConfirmDialogState {
        title: title.to_string(),
        description: description.to_string(),
        action,
    });
}

/// Schließt den Bestätigungsdialog.
pub fn close_confirm_dialog(state: &mut AppState) {
    state.ui.confirm_dialog = None;
}
