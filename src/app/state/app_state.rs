use crate::app::CommandLog;
use crate::core::{builtin, EntityStore, MarkerRecord, RouteRecord};
use crate::shared::AnnotatorOptions;
use crate::storage::{FileStore, KeyValueStore, MemoryStore};
use std::sync::Arc;

use super::{AlertCenter, ModeState, UiState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Store für Marker (eingebaut + custom)
    pub markers: EntityStore<MarkerRecord>,
    /// Store für Routen (eingebaut + custom)
    pub routes: EntityStore<RouteRecord>,
    /// Interaktionsmodus inklusive Pfad der laufenden Zeichnung
    pub mode: ModeState,
    /// View-State (Zoom, letzte Klickposition)
    pub view: ViewState,
    /// UI-State (Dialoge, Download-/Import-Anforderungen)
    pub ui: UiState,
    /// Aktive Benachrichtigungen
    pub alerts: AlertCenter,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: AnnotatorOptions,
}

impl AppState {
    /// Erstellt einen App-State mit flüchtigem In-Memory-Storage.
    pub fn new() -> Self {
        Self::with_storage(Arc::new(MemoryStore::new()))
    }

    /// Erstellt einen App-State über dem angegebenen Storage-Backend.
    pub fn with_storage(storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            markers: EntityStore::new(builtin::default_markers(), storage.clone()),
            routes: EntityStore::new(builtin::default_routes(), storage),
            mode: ModeState::new(),
            view: ViewState::new(),
            ui: UiState::new(),
            alerts: AlertCenter::new(),
            command_log: CommandLog::new(),
            options: AnnotatorOptions::default(),
        }
    }

    /// Erstellt einen App-State mit Datei-Storage im Standard-Datenverzeichnis.
    pub fn persistent() -> anyhow::Result<Self> {
        let storage = FileStore::new(FileStore::data_dir())?;
        Ok(Self::with_storage(Arc::new(storage)))
    }

    /// Gibt die Anzahl sichtbarer Marker zurück (für UI-Anzeige)
    pub fn marker_count(&self) -> usize {
        self.markers.get_all().len()
    }

    /// Gibt die Anzahl sichtbarer Routen zurück (für UI-Anzeige)
    pub fn route_count(&self) -> usize {
        self.routes.get_all().len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
