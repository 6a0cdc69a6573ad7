use crate::core::{AnnotationKind, MapPoint};

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Einfacher Karten-Klick an Weltposition
    MapClicked { location: MapPoint },
    /// Doppelklick auf die Karte; der Viewport meldet Klick ODER Doppelklick,
    /// nie beides, damit der Abschluss nicht als zwei Einzelklicks ankommt
    MapDoubleClicked { location: MapPoint },
    /// Zoomstufe der Karte hat sich geändert
    ZoomChanged { level: f64 },
    /// Marker-Platzierungsmodus umschalten (Toolbar-Button)
    ToggleMarkerModeRequested,
    /// Routen-Zeichenmodus umschalten (Toolbar-Button)
    ToggleRouteModeRequested,
    /// Marker-Dialog bestätigt (Formularfelder stehen im Dialog-State)
    MarkerDialogConfirmed,
    /// Marker-Dialog abgebrochen
    MarkerDialogCancelled,
    /// Custom-Marker bearbeiten (Dialog öffnen)
    EditMarkerRequested { id: String },
    /// Custom-Marker löschen (mit Bestätigung)
    DeleteMarkerRequested { id: String },
    /// Routen-Dialog bestätigt
    RouteDialogConfirmed,
    /// Routen-Dialog abgebrochen
    RouteDialogCancelled,
    /// Custom-Route bearbeiten (Dialog öffnen)
    EditRouteRequested { id: String },
    /// Custom-Route löschen (mit Bestätigung)
    DeleteRouteRequested { id: String },
    /// Alle Custom-Marker löschen (mit Bestätigung)
    ClearAllMarkersRequested,
    /// Alle Custom-Routen löschen (mit Bestätigung)
    ClearAllRoutesRequested,
    /// Bestätigungsdialog angenommen
    ConfirmDialogAccepted,
    /// Bestätigungsdialog abgelehnt
    ConfirmDialogRejected,
    /// Export der Custom-Records eines Kinds angefordert
    ExportRequested { kind: AnnotationKind },
    /// Import angefordert (Präsentationsschicht öffnet den Datei-Picker)
    ImportRequested { kind: AnnotationKind },
    /// Import-Datei wurde asynchron zu Text gelesen
    ImportFileLoaded {
        kind: AnnotationKind,
        contents: String,
    },
    /// Benachrichtigung manuell geschlossen
    AlertDismissed { id: String },
    /// Uhr-Tick der Präsentationsschicht (Auto-Dismiss abgelaufener Benachrichtigungen)
    ClockTicked { now_ms: u64 },
}
