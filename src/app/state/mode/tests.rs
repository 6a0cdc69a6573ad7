use super::*;

#[test]
fn test_toggle_marker_mode_roundtrip() {
    let mut mode = ModeState::new();
    assert_eq!(mode.mode(), InteractionMode::Idle);

    mode.toggle_marker_mode();
    assert!(mode.is_placing_marker());

    mode.toggle_marker_mode();
    assert_eq!(mode.mode(), InteractionMode::Idle);
}

#[test]
fn test_marker_mode_forces_route_mode_exit_and_discards_path() {
    let mut mode = ModeState::new();
    mode.toggle_route_mode();
    mode.add_route_point(MapPoint::new(1.0, 1.0));
    mode.add_route_point(MapPoint::new(2.0, 2.0));
    assert_eq!(mode.pending_path().len(), 2);

    mode.toggle_marker_mode();
    assert!(mode.is_placing_marker());
    assert!(!mode.is_drawing_route());
    assert!(mode.pending_path().is_empty());
}

#[test]
fn test_route_mode_forces_marker_mode_exit() {
    let mut mode = ModeState::new();
    mode.toggle_marker_mode();

    mode.toggle_route_mode();
    assert!(mode.is_drawing_route());
    assert!(!mode.is_placing_marker());
    assert!(mode.pending_path().is_empty());
}

#[test]
fn test_add_route_point_is_noop_outside_drawing() {
    let mut mode = ModeState::new();
    mode.add_route_point(MapPoint::new(1.0, 1.0));
    assert!(mode.pending_path().is_empty());

    mode.toggle_marker_mode();
    mode.add_route_point(MapPoint::new(1.0, 1.0));
    assert!(mode.pending_path().is_empty());
}

#[test]
fn test_can_finish_route_requires_two_points() {
    let mut mode = ModeState::new();
    mode.toggle_route_mode();
    assert!(!mode.can_finish_route());

    mode.add_route_point(MapPoint::new(1.0, 1.0));
    assert!(!mode.can_finish_route());

    mode.add_route_point(MapPoint::new(2.0, 2.0));
    assert!(mode.can_finish_route());
}

#[test]
fn test_commit_or_cancel_always_returns_to_idle() {
    let mut mode = ModeState::new();
    mode.toggle_route_mode();
    mode.add_route_point(MapPoint::new(1.0, 1.0));

    mode.commit_or_cancel_route();
    assert_eq!(mode.mode(), InteractionMode::Idle);
    assert!(mode.pending_path().is_empty());

    // Außerhalb des Zeichenmodus ein No-op
    mode.toggle_marker_mode();
    mode.commit_or_cancel_route();
    assert!(mode.is_placing_marker());
}

#[test]
fn test_exit_marker_mode_only_leaves_placing() {
    let mut mode = ModeState::new();
    mode.exit_marker_mode();
    assert_eq!(mode.mode(), InteractionMode::Idle);

    mode.toggle_route_mode();
    mode.exit_marker_mode();
    assert!(mode.is_drawing_route());

    mode.toggle_marker_mode();
    mode.exit_marker_mode();
    assert_eq!(mode.mode(), InteractionMode::Idle);
}
