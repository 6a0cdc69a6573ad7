//! Dialog- und UI-Zustände; das Dialog-Chrome rendert die Präsentationsschicht.

use crate::core::{AnnotationKind, MapPoint, MarkerKind, RouteKind};
use crate::shared::options::{DEFAULT_ROUTE_COLOR, DEFAULT_ROUTE_WIDTH};

/// Zustand des Marker-Dialogs (anlegen oder bearbeiten).
/// Die Formularfelder werden von der Präsentationsschicht direkt editiert.
#[derive(Debug, Clone, Default)]
pub struct MarkerDialogState {
    /// Ob der Dialog sichtbar ist
    pub visible: bool,
    /// Platzierungsort bei Neuanlage
    pub location: Option<MapPoint>,
    /// ID des bearbeiteten Custom-Markers (None = Neuanlage)
    pub editing_id: Option<String>,
    /// Anzeigename im Formular
    pub name: String,
    /// Ortstyp im Formular
    pub kind: MarkerKind,
    /// Beschreibung im Formular
    pub description: String,
    /// Link-URL im Formular
    pub link: String,
    /// Major-Flag im Formular
    pub major: bool,
}

/// Zustand des Routen-Dialogs (Abschluss einer Zeichnung oder bearbeiten).
#[derive(Debug, Clone)]
pub struct RouteDialogState {
    /// Ob der Dialog sichtbar ist
    pub visible: bool,
    /// Übergebener Pfad der abgeschlossenen Zeichnung
    pub path: Vec<MapPoint>,
    /// ID der bearbeiteten Custom-Route (None = Neuanlage)
    pub editing_id: Option<String>,
    /// Anzeigename im Formular
    pub name: String,
    /// Routentyp im Formular
    pub kind: RouteKind,
    /// Beschreibung im Formular
    pub description: String,
    /// Linienfarbe im Formular (Hex)
    pub color: String,
    /// Linienbreite im Formular
    pub width: u32,
}

impl Default for RouteDialogState {
    fn default() -> Self {
        Self {
            visible: false,
            path: Vec::new(),
            editing_id: None,
            name: String::new(),
            kind: RouteKind::Custom,
            description: String::new(),
            color: DEFAULT_ROUTE_COLOR.to_string(),
            width: DEFAULT_ROUTE_WIDTH,
        }
    }
}

/// Aktion, die nach Bestätigung des Confirm-Dialogs ausgeführt wird.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    /// Einzelnen Custom-Marker löschen
    DeleteMarker { id: String },
    /// Einzelne Custom-Route löschen
    DeleteRoute { id: String },
    /// Alle Custom-Marker löschen
    ClearMarkers,
    /// Alle Custom-Routen löschen
    ClearRoutes,
}

/// Zustand des Bestätigungsdialogs für destruktive Aktionen.
#[derive(Debug, Clone)]
pub struct ConfirmDialogState {
    /// Dialogtitel
    pub title: String,
    /// Beschreibungstext
    pub description: String,
    /// Aktion bei Bestätigung
    pub action: ConfirmAction,
}

/// Export-Dokument, das die Präsentationsschicht als Datei-Download ausliefert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    /// Fester Dateiname pro Kind
    pub filename: String,
    /// Eingerücktes JSON-Dokument
    pub contents: String,
}

/// UI-bezogener Anwendungszustand.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Marker-Dialog (anlegen/bearbeiten)
    pub marker_dialog: MarkerDialogState,
    /// Routen-Dialog (Abschluss einer Zeichnung/bearbeiten)
    pub route_dialog: RouteDialogState,
    /// Bestätigungsdialog für destruktive Aktionen (None = geschlossen)
    pub confirm_dialog: Option<ConfirmDialogState>,
    /// Anstehender Export-Download für die Präsentationsschicht
    pub pending_download: Option<DownloadRequest>,
    /// Kind, für das die Präsentationsschicht einen Datei-Picker öffnen soll
    pub import_request: Option<AnnotationKind>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand (alle Dialoge geschlossen).
    pub fn new() -> Self {
        Self::default()
    }
}
