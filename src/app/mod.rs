//! Application-Layer: Controller, State, Events und Handler.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod map_scene;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Stores, Modus, Dialoge).
pub mod state;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use map_scene::build as build_map_scene;
pub use state::{
    AlertCenter, AlertSeverity, AppState, InteractionMode, ModeState, UiState, ViewState,
};
