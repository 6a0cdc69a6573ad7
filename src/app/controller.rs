//! Application Controller für zentrale Event-Verarbeitung.

use super::map_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::MapScene;

/// Orchestriert UI-Events und Handler auf dem AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Modus & Karten-Events ===
            AppCommand::ToggleMarkerMode => handlers::mode::toggle_marker_mode(state),
            AppCommand::ToggleRouteMode => handlers::mode::toggle_route_mode(state),
            AppCommand::AddRoutePoint { location } => {
                handlers::mode::add_route_point(state, location)
            }
            AppCommand::FinishRoute => handlers::mode::finish_route(state),
            AppCommand::CancelRouteDrawing => handlers::mode::cancel_route_drawing(state),
            AppCommand::ExitMarkerMode => handlers::mode::exit_marker_mode(state),
            AppCommand::SetClickLocation { location } => {
                handlers::view::set_click_location(state, location)
            }
            AppCommand::SetZoomLevel { level } => handlers::view::set_zoom_level(state, level),

            // === Marker ===
            AppCommand::OpenMarkerDialog { location } => {
                handlers::dialog::open_marker_dialog(state, location)
            }
            AppCommand::OpenMarkerDialogForEdit { id } => {
                handlers::dialog::open_marker_dialog_for_edit(state, &id)
            }
            AppCommand::SubmitMarkerDialog => handlers::markers::submit_dialog(state),
            AppCommand::CloseMarkerDialog => handlers::dialog::close_marker_dialog(state),
            AppCommand::DeleteMarker { id } => handlers::markers::delete_marker(state, &id),
            AppCommand::ClearMarkers => handlers::markers::clear_markers(state),

            // === Routen ===
            AppCommand::OpenRouteDialogForEdit { id } => {
                handlers::dialog::open_route_dialog_for_edit(state, &id)
            }
            AppCommand::SubmitRouteDialog => handlers::routes::submit_dialog(state),
            AppCommand::CloseRouteDialog => handlers::dialog::close_route_dialog(state),
            AppCommand::DeleteRoute { id } => handlers::routes::delete_route(state, &id),
            AppCommand::ClearRoutes => handlers::routes::clear_routes(state),

            // === Bestätigungen ===
            AppCommand::RequestConfirm { action } => handlers::dialog::request_confirm(state, action),
            AppCommand::CloseConfirmDialog => handlers::dialog::close_confirm_dialog(state),

            // === Import/Export ===
            AppCommand::ExportRecords { kind } => handlers::transfer::export_records(state, kind)?,
            AppCommand::RequestImportDialog { kind } => {
                handlers::transfer::request_import_dialog(state, kind)
            }
            AppCommand::ImportRecords { kind, contents } => {
                handlers::transfer::import_records(state, kind, &contents)
            }

            // === Benachrichtigungen ===
            AppCommand::DismissAlert { id } => handlers::alerts::dismiss(state, &id),
            AppCommand::SweepAlerts { now_ms } => handlers::alerts::sweep(state, now_ms),
        }

        Ok(())
    }

    /// Baut die Karten-Szene aus dem aktuellen AppState.
    pub fn build_map_scene(&self, state: &AppState) -> MapScene {
        map_scene::build(state)
    }
}
