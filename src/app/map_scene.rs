//! Baut die Karten-Szene aus dem aktuellen AppState.

use super::AppState;
use crate::core::{MarkerLayer, RouteKind};
use crate::shared::MapScene;

/// Erstellt den read-only Szenen-Snapshot für die Präsentationsschicht:
/// zusammengeführte Datensätze, Layer-Gruppierung und Zeichen-Feedback.
pub fn build(state: &AppState) -> MapScene {
    let markers = state.markers.get_all();
    let routes = state.routes.get_all();

    let mut civilization_layer = Vec::new();
    let mut wilderness_layer = Vec::new();
    for marker in &markers {
        match marker.kind.layer() {
            MarkerLayer::Civilization => civilization_layer.push(marker.id.clone()),
            MarkerLayer::Wilderness => wilderness_layer.push(marker.id.clone()),
        }
    }

    let route_layers = [
        RouteKind::Main,
        RouteKind::Secondary,
        RouteKind::Secret,
        RouteKind::Custom,
    ]
    .into_iter()
    .map(|kind| {
        let ids = routes
            .iter()
            .filter(|route| route.kind == kind)
            .map(|route| route.id.clone())
            .collect();
        (kind, ids)
    })
    .collect();

    MapScene {
        markers,
        routes,
        civilization_layer,
        wilderness_layer,
        route_layers,
        pending_path: state.mode.pending_path().to_vec(),
        drawing_route: state.mode.is_drawing_route(),
        placing_marker: state.mode.is_placing_marker(),
        click_location: state.view.click_location,
        zoom: state.view.zoom,
        options: state.options.clone(),
    }
}
