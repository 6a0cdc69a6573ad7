//! Karten-Szene als expliziter Übergabevertrag zwischen App und Präsentation.
//!
//! Lebt im shared-Modul, da `app` sie baut und die Präsentationsschicht
//! sie konsumiert.

use super::options::AnnotatorOptions;
use crate::core::{MapPoint, MarkerRecord, RouteKind, RouteRecord};

/// Read-only Daten für einen Karten-Frame.
#[derive(Clone)]
pub struct MapScene {
    /// Zusammengeführte Marker (eingebaut + custom) in Render-Reihenfolge
    pub markers: Vec<MarkerRecord>,
    /// Zusammengeführte Routen (eingebaut + custom)
    pub routes: Vec<RouteRecord>,
    /// Marker-IDs des Civilization-Layers
    pub civilization_layer: Vec<String>,
    /// Marker-IDs des Wilderness-Layers
    pub wilderness_layer: Vec<String>,
    /// Routen-IDs gruppiert nach Routentyp
    pub route_layers: Vec<(RouteKind, Vec<String>)>,
    /// Punkte der aktuell gezeichneten Route (Zeichen-Feedback)
    pub pending_path: Vec<MapPoint>,
    /// Ob der Routen-Zeichenmodus aktiv ist
    pub drawing_route: bool,
    /// Ob der Marker-Platzierungsmodus aktiv ist
    pub placing_marker: bool,
    /// Zuletzt im Idle-Modus angeklickte Position (nur Anzeige)
    pub click_location: Option<MapPoint>,
    /// Aktuelle Zoomstufe
    pub zoom: f64,
    /// Laufzeit-Optionen für die Darstellung
    pub options: AnnotatorOptions,
}

impl MapScene {
    /// Ob gerade ein Interaktionsmodus aktiv ist (für Modus-Indikatoren).
    pub fn is_interacting(&self) -> bool {
        self.drawing_route || self.placing_marker
    }
}
