//! Handler für View-Zustand (Zoom, Klickposition).

use crate::app::state::AppState;
use crate::core::MapPoint;

/// Merkt sich die zuletzt angeklickte Position (nur Anzeige).
pub fn set_click_location(state: &mut AppState, location: MapPoint) {
    state.view.click_location = Some(location);
}

/// Setzt die Zoomstufe; der Interaktionsmodus bleibt unberührt.
pub fn set_zoom_level(state: &mut AppState, level: f64) {
    state.view.zoom = level;
}
