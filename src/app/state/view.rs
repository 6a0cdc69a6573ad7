//! View-Zustand: Zoomstufe und zuletzt angeklickte Position.

use crate::core::MapPoint;
use crate::shared::options::INITIAL_ZOOM;

/// Karten-View-Zustand; Zoomänderungen berühren den Interaktionsmodus nie.
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Aktuelle Zoomstufe der Karte
    pub zoom: f64,
    /// Zuletzt im Idle-Modus angeklickte Position (nur Anzeige)
    pub click_location: Option<MapPoint>,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            zoom: INITIAL_ZOOM,
            click_location: None,
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
