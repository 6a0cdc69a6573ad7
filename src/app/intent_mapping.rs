//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Hier lebt die Dispatcher-Policy: Karten-Events werden abhängig vom aktiven
//! Modus übersetzt, in dieser Vorrang-Reihenfolge: Marker-Dialog öffnen,
//! Routenpunkt anhängen, Klickposition merken.

use super::state::ConfirmAction;
use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::MapClicked { location } => {
            if state.mode.is_placing_marker() {
                // Modus bleibt aktiv; Single-Shot-Exit folgt beim Dialogschluss
                vec![AppCommand::OpenMarkerDialog { location }]
            } else if state.mode.is_drawing_route() {
                vec![AppCommand::AddRoutePoint { location }]
            } else {
                vec![AppCommand::SetClickLocation { location }]
            }
        }
        AppIntent::MapDoubleClicked { .. } => {
            if state.mode.is_drawing_route() {
                vec![AppCommand::FinishRoute]
            } else {
                Vec::new()
            }
        }
        AppIntent::ZoomChanged { level } => vec![AppCommand::SetZoomLevel { level }],
        AppIntent::ToggleMarkerModeRequested => vec![AppCommand::ToggleMarkerMode],
        AppIntent::ToggleRouteModeRequested => vec![AppCommand::ToggleRouteMode],
        AppIntent::MarkerDialogConfirmed => vec![AppCommand::SubmitMarkerDialog],
        AppIntent::MarkerDialogCancelled => vec![
            AppCommand::CloseMarkerDialog,
            AppCommand::ExitMarkerMode,
        ],
        AppIntent::EditMarkerRequested { id } => vec![AppCommand::OpenMarkerDialogForEdit { id }],
        AppIntent::DeleteMarkerRequested { id } => vec![AppCommand::RequestConfirm {
            action: ConfirmAction::DeleteMarker { id },
        }],
        AppIntent::RouteDialogConfirmed => vec![AppCommand::SubmitRouteDialog],
        AppIntent::RouteDialogCancelled => vec![
            AppCommand::CloseRouteDialog,
            AppCommand::CancelRouteDrawing,
        ],
        AppIntent::EditRouteRequested { id } => vec![AppCommand::OpenRouteDialogForEdit { id }],
        AppIntent::DeleteRouteRequested { id } => vec![AppCommand::RequestConfirm {
            action: ConfirmAction::DeleteRoute { id },
        }],
        AppIntent::ClearAllMarkersRequested => vec![AppCommand::RequestConfirm {
            action: ConfirmAction::ClearMarkers,
        }],
        AppIntent::ClearAllRoutesRequested => vec![AppCommand::RequestConfirm {
            action: ConfirmAction::ClearRoutes,
        }],
        AppIntent::ConfirmDialogAccepted => {
            let Some(dialog) = state.ui.confirm_dialog.as_ref() else {
                log::debug!("Bestätigung ohne offenen Confirm-Dialog ignoriert");
                return Vec::new();
            };
            let action_command = match dialog.action.clone() {
                ConfirmAction::DeleteMarker { id } => AppCommand::DeleteMarker { id },
                ConfirmAction::DeleteRoute { id } => AppCommand::DeleteRoute { id },
                ConfirmAction::ClearMarkers => AppCommand::ClearMarkers,
                ConfirmAction::ClearRoutes => AppCommand::ClearRoutes,
            };
            vec![AppCommand::CloseConfirmDialog, action_command]
        }
        AppIntent::ConfirmDialogRejected => vec![AppCommand::CloseConfirmDialog],
        AppIntent::ExportRequested { kind } => vec![AppCommand::ExportRecords { kind }],
        AppIntent::ImportRequested { kind } => vec![AppCommand::RequestImportDialog { kind }],
        AppIntent::ImportFileLoaded { kind, contents } => {
            vec![AppCommand::ImportRecords { kind, contents }]
        }
        AppIntent::AlertDismissed { id } => vec![AppCommand::DismissAlert { id }],
        AppIntent::ClockTicked { now_ms } => vec![AppCommand::SweepAlerts { now_ms }],
    }
}

#[cfg(test)]
mod tests;
