//! Exklusive Interaktionsmodi der Karte.

use crate::core::MapPoint;

/// Aktiver Interaktionsmodus.
///
/// Es gilt immer genau einer: Marker-Platzierung und Routen-Zeichnung
/// schließen sich gegenseitig aus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    /// Standard: Karte ansehen, Klicks merken nur die Position
    #[default]
    Idle,
    /// Der nächste Karten-Klick öffnet den Marker-Dialog
    PlacingMarker,
    /// Karten-Klicks sammeln Punkte der neuen Route
    DrawingRoute,
}

/// Moduszustand inklusive der transienten Daten des aktiven Modus.
///
/// Felder sind privat; Mutation läuft ausschließlich über die
/// Command-Handler (Single-Writer).
#[derive(Debug, Default)]
pub struct ModeState {
    mode: InteractionMode,
    pending_path: Vec<MapPoint>,
}

impl ModeState {
    /// Erstellt den Standard-Moduszustand (Idle).
    pub fn new() -> Self {
        Self::default()
    }

    /// Aktiver Modus.
    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    /// Ob der Marker-Platzierungsmodus aktiv ist.
    pub fn is_placing_marker(&self) -> bool {
        self.mode == InteractionMode::PlacingMarker
    }

    /// Ob der Routen-Zeichenmodus aktiv ist.
    pub fn is_drawing_route(&self) -> bool {
        self.mode == InteractionMode::DrawingRoute
    }

    /// Punkte der laufenden Routenzeichnung.
    pub fn pending_path(&self) -> &[MapPoint] {
        &self.pending_path
    }

    /// `Idle ⇄ PlacingMarker`; aus `DrawingRoute` heraus wird der Zeichenmodus
    /// zuerst verlassen und der angefangene Pfad verworfen.
    pub(crate) fn toggle_marker_mode(&mut self) {
        self.pending_path.clear();
        self.mode = match self.mode {
            InteractionMode::PlacingMarker => InteractionMode::Idle,
            _ => InteractionMode::PlacingMarker,
        };
    }

    /// `Idle ⇄ DrawingRoute`; beim Einstieg ist der Pfad immer leer, aus
    /// `PlacingMarker` heraus wird der Platzierungsmodus zuerst verlassen.
    pub(crate) fn toggle_route_mode(&mut self) {
        self.pending_path.clear();
        self.mode = match self.mode {
            InteractionMode::DrawingRoute => InteractionMode::Idle,
            _ => InteractionMode::DrawingRoute,
        };
    }

    /// Hängt einen Punkt an den Pfad an; außerhalb von `DrawingRoute` ein No-op.
    pub(crate) fn add_route_point(&mut self, point: MapPoint) {
        if self.mode != InteractionMode::DrawingRoute {
            log::debug!("Routenpunkt ignoriert: Zeichenmodus nicht aktiv");
            return;
        }
        self.pending_path.push(point);
    }

    /// Ob der Pfad lang genug für einen Abschluss ist (≥ 2 Punkte).
    pub fn can_finish_route(&self) -> bool {
        self.mode == InteractionMode::DrawingRoute && self.pending_path.len() >= 2
    }

    /// Verlässt den Zeichenmodus in jedem Fall (Commit wie Abbruch) und
    /// leert den Pfad.
    pub(crate) fn commit_or_cancel_route(&mut self) {
        if self.mode == InteractionMode::DrawingRoute {
            self.mode = InteractionMode::Idle;
        }
        self.pending_path.clear();
    }

    /// Verlässt den Platzierungsmodus (Single-Shot nach Dialogschluss).
    pub(crate) fn exit_marker_mode(&mut self) {
        if self.mode == InteractionMode::PlacingMarker {
            self.mode = InteractionMode::Idle;
        }
    }
}

#[cfg(test)]
mod tests;
