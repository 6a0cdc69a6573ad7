//! Handler für Moduswechsel und Routenzeichnung.

use crate::app::state::{AppState, RouteDialogState};
use crate::core::MapPoint;

/// Schaltet den Marker-Platzierungsmodus um; ein laufender Zeichenmodus wird
/// dabei verlassen und der angefangene Pfad verworfen.
pub fn toggle_marker_mode(state: &mut AppState) {
    let discarded = state.mode.pending_path().len();
    state.mode.toggle_marker_mode();
    if discarded > 0 {
        log::info!("Zeichenmodus verlassen, {discarded} Pfadpunkte verworfen");
    }
    log::info!(
        "Marker-Platzierungsmodus {}",
        if state.mode.is_placing_marker() {
            "aktiviert"
        } else {
            "beendet"
        }
    );
}

/// Schaltet den Routen-Zeichenmodus um; der Pfad startet immer leer.
pub fn toggle_route_mode(state: &mut AppState) {
    state.mode.toggle_route_mode();
    log::info!(
        "Routen-Zeichenmodus {}",
        if state.mode.is_drawing_route() {
            "aktiviert"
        } else {
            "beendet"
        }
    );
}

/// Hängt einen Punkt an die laufende Zeichnung an.
pub fn add_route_point(state: &mut AppState, location: MapPoint) {
    state.mode.add_route_point(location);
    log::debug!(
        "Routenpunkt {} bei ({:.2}, {:.2})",
        state.mode.pending_path().len(),
        location.x,
        location.y
    );
}

/// Schließt die Zeichnung ab und öffnet den Routen-Dialog mit dem Pfad.
/// Unter 2 Punkten ein stiller No-op; der Modus bleibt bestehen.
pub fn finish_route(state: &mut AppState) {
    if !state.mode.can_finish_route() {
        log::debug!("Routenabschluss ignoriert: weniger als 2 Punkte");
        return;
    }
    state.ui.route_dialog = RouteDialogState {
        visible: true,
        path: state.mode.pending_path().to_vec(),
        color: state.options.default_route_color.clone(),
        width: state.options.default_route_width,
        ..RouteDialogState::default()
    };
}

/// Verlässt den Zeichenmodus (Commit wie Abbruch) und leert den Pfad.
pub fn cancel_route_drawing(state: &mut AppState) {
    state.mode.commit_or_cancel_route();
}

/// Verlässt den Platzierungsmodus nach dem Dialogschluss.
pub fn exit_marker_mode(state: &mut AppState) {
    state.mode.exit_marker_mode();
}
