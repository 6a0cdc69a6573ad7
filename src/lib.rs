//! Fantasy Map Annotator Library.
//! Annotations-Kern als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod storage;

pub use crate::app::{
    AppCommand, AppController, AppIntent, AppState, InteractionMode, ModeState, UiState, ViewState,
};
pub use crate::core::{
    AnnotationKind, EntityStore, MapPoint, MarkerDraft, MarkerKind, MarkerLayer, MarkerPatch,
    MarkerRecord, RouteDraft, RouteKind, RoutePatch, RouteRecord,
};
pub use crate::shared::{AnnotatorOptions, MapScene};
pub use crate::storage::{FileStore, KeyValueStore, MemoryStore};
