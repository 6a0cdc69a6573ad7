use crate::app::state::ConfirmAction;
use crate::core::{AnnotationKind, MapPoint};

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Marker-Platzierungsmodus umschalten
    ToggleMarkerMode,
    /// Routen-Zeichenmodus umschalten
    ToggleRouteMode,
    /// Punkt an die laufende Routenzeichnung anhängen
    AddRoutePoint { location: MapPoint },
    /// Laufende Zeichnung abschließen (öffnet den Routen-Dialog ab 2 Punkten)
    FinishRoute,
    /// Zeichenmodus verlassen und Pfad verwerfen
    CancelRouteDrawing,
    /// Platzierungsmodus verlassen (Single-Shot-Platzierung)
    ExitMarkerMode,
    /// Zuletzt angeklickte Position merken (nur Anzeige)
    SetClickLocation { location: MapPoint },
    /// Zoomstufe setzen
    SetZoomLevel { level: f64 },
    /// Marker-Dialog für eine Neuanlage an Position öffnen
    OpenMarkerDialog { location: MapPoint },
    /// Marker-Dialog zum Bearbeiten eines Custom-Markers öffnen
    OpenMarkerDialogForEdit { id: String },
    /// Marker-Dialog auswerten (anlegen oder aktualisieren)
    SubmitMarkerDialog,
    /// Marker-Dialog schließen
    CloseMarkerDialog,
    /// Routen-Dialog zum Bearbeiten einer Custom-Route öffnen
    OpenRouteDialogForEdit { id: String },
    /// Routen-Dialog auswerten (anlegen oder aktualisieren)
    SubmitRouteDialog,
    /// Routen-Dialog schließen
    CloseRouteDialog,
    /// Custom-Marker löschen
    DeleteMarker { id: String },
    /// Custom-Route löschen
    DeleteRoute { id: String },
    /// Alle Custom-Marker löschen
    ClearMarkers,
    /// Alle Custom-Routen löschen
    ClearRoutes,
    /// Bestätigungsdialog für eine destruktive Aktion anfordern
    RequestConfirm { action: ConfirmAction },
    /// Bestätigungsdialog schließen
    CloseConfirmDialog,
    /// Custom-Records eines Kinds exportieren
    ExportRecords { kind: AnnotationKind },
    /// Datei-Picker für den Import anfordern
    RequestImportDialog { kind: AnnotationKind },
    /// Gelesenes Import-Dokument verarbeiten
    ImportRecords {
        kind: AnnotationKind,
        contents: String,
    },
    /// Benachrichtigung entfernen
    DismissAlert { id: String },
    /// Abgelaufene Benachrichtigungen entfernen
    SweepAlerts { now_ms: u64 },
}
