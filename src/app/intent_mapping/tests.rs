use super::*;
use crate::app::state::ConfirmDialogState;
use crate::core::MapPoint;

fn click(state: &AppState) -> Vec<AppCommand> {
    map_intent_to_commands(
        state,
        AppIntent::MapClicked {
            location: MapPoint::new(1.0, 2.0),
        },
    )
}

#[test]
fn test_click_in_idle_records_location() {
    let state = AppState::new();
    let commands = click(&state);
    assert!(matches!(
        commands.as_slice(),
        [AppCommand::SetClickLocation { .. }]
    ));
}

#[test]
fn test_click_while_placing_opens_marker_dialog() {
    let mut state = AppState::new();
    state.mode.toggle_marker_mode();
    let commands = click(&state);
    assert!(matches!(
        commands.as_slice(),
        [AppCommand::OpenMarkerDialog { .. }]
    ));
}

#[test]
fn test_click_while_drawing_appends_route_point() {
    let mut state = AppState::new();
    state.mode.toggle_route_mode();
    let commands = click(&state);
    assert!(matches!(
        commands.as_slice(),
        [AppCommand::AddRoutePoint { .. }]
    ));
}

#[test]
fn test_double_click_finishes_route_only_while_drawing() {
    let mut state = AppState::new();
    let double_click = AppIntent::MapDoubleClicked {
        location: MapPoint::new(0.0, 0.0),
    };

    assert!(map_intent_to_commands(&state, double_click.clone()).is_empty());

    state.mode.toggle_route_mode();
    let commands = map_intent_to_commands(&state, double_click);
    assert!(matches!(commands.as_slice(), [AppCommand::FinishRoute]));
}

#[test]
fn test_zoom_change_maps_independent_of_mode() {
    let mut state = AppState::new();
    state.mode.toggle_route_mode();
    let commands = map_intent_to_commands(&state, AppIntent::ZoomChanged { level: 5.0 });
    assert!(matches!(
        commands.as_slice(),
        [AppCommand::SetZoomLevel { level }] if *level == 5.0
    ));
}

#[test]
fn test_confirm_accept_resolves_pending_action() {
    let mut state = AppState::new();
    state.ui.confirm_dialog = Some(ConfirmDialogState {
        title: "Clear All Markers".to_string(),
        description: String::new(),
        action: ConfirmAction::ClearMarkers,
    });

    let commands = map_intent_to_commands(&state, AppIntent::ConfirmDialogAccepted);
    assert!(matches!(
        commands.as_slice(),
        [AppCommand::CloseConfirmDialog, AppCommand::ClearMarkers]
    ));
}

#[test]
fn test_confirm_accept_without_dialog_is_noop() {
    let state = AppState::new();
    assert!(map_intent_to_commands(&state, AppIntent::ConfirmDialogAccepted).is_empty());
}

#[test]
fn test_dialog_cancel_exits_modes() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::MarkerDialogCancelled);
    assert!(matches!(
        commands.as_slice(),
        [AppCommand::CloseMarkerDialog, AppCommand::ExitMarkerMode]
    ));

    let commands = map_intent_to_commands(&state, AppIntent::RouteDialogCancelled);
    assert!(matches!(
        commands.as_slice(),
        [AppCommand::CloseRouteDialog, AppCommand::CancelRouteDrawing]
    ));
}
