use fantasy_map_annotator::{
    AnnotationKind, AppController, AppIntent, AppState, MapPoint, MarkerKind,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn import(controller: &mut AppController, state: &mut AppState, kind: AnnotationKind, raw: &str) {
    controller
        .handle_intent(
            state,
            AppIntent::ImportFileLoaded {
                kind,
                contents: raw.to_string(),
            },
        )
        .expect("Import sollte ohne Fehler durchlaufen");
}

fn add_marker(controller: &mut AppController, state: &mut AppState, name: &str, x: f64, y: f64) {
    controller
        .handle_intent(state, AppIntent::ToggleMarkerModeRequested)
        .unwrap();
    controller
        .handle_intent(
            state,
            AppIntent::MapClicked {
                location: MapPoint::new(x, y),
            },
        )
        .unwrap();
    state.ui.marker_dialog.name = name.to_string();
    state.ui.marker_dialog.link = "https://example.com/mine".to_string();
    state.ui.marker_dialog.description = "handgesetzt".to_string();
    controller
        .handle_intent(state, AppIntent::MarkerDialogConfirmed)
        .unwrap();
}

#[test]
fn test_import_partial_one_of_two() {
    init_logging();
    let mut controller = AppController::new();
    let mut state = AppState::new();

    // Zweites Element ohne Namen wird still verworfen
    let raw = r#"[
        {"name": "A", "type": "town", "location": [1, 2]},
        {"type": "town", "location": [3, 4]}
    ]"#;
    import(&mut controller, &mut state, AnnotationKind::Markers, raw);

    let custom = state.markers.get_custom();
    assert_eq!(custom.len(), 1);
    assert_eq!(custom[0].name, "A");
    assert_eq!(custom[0].kind, MarkerKind::Town);
    approx::assert_abs_diff_eq!(custom[0].location.x, 1.0);
    approx::assert_abs_diff_eq!(custom[0].location.y, 2.0);

    let partial = state
        .alerts
        .alerts()
        .iter()
        .find(|a| a.title == "Partial Import")
        .expect("Teil-Import wird gemeldet");
    assert!(partial.description.contains("1 out of 2"));
    assert!(state
        .alerts
        .alerts()
        .iter()
        .any(|a| a.title == "Import Successful"));
}

#[test]
fn test_import_malformed_json_has_zero_side_effects() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    import(&mut controller, &mut state, AnnotationKind::Markers, "{kaputt");

    assert!(state.markers.get_custom().is_empty());
    let alert = &state.alerts.alerts()[0];
    assert_eq!(alert.title, "Invalid File");
}

#[test]
fn test_import_non_array_is_rejected() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    import(
        &mut controller,
        &mut state,
        AnnotationKind::Markers,
        r#"{"name": "A"}"#,
    );

    assert!(state.markers.get_custom().is_empty());
    assert!(state
        .alerts
        .alerts()
        .iter()
        .any(|a| a.title == "Invalid Format"));
}

#[test]
fn test_import_without_valid_records_is_rejected() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    // Name fehlt, Typ unbekannt, Koordinatenpaar zu kurz
    let raw = r#"[
        {"type": "town", "location": [1, 2]},
        {"name": "B", "type": "metropolis", "location": [1, 2]},
        {"name": "C", "type": "town", "location": [1]}
    ]"#;
    import(&mut controller, &mut state, AnnotationKind::Markers, raw);

    assert!(state.markers.get_custom().is_empty());
    assert!(state
        .alerts
        .alerts()
        .iter()
        .any(|a| a.title == "No Valid Markers"));
}

#[test]
fn test_import_assigns_fresh_identity() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let raw = r#"[
        {"id": "capital-city", "name": "Impostor", "type": "city", "location": [0, 0],
         "isCustom": false, "createdAt": 1}
    ]"#;
    import(&mut controller, &mut state, AnnotationKind::Markers, raw);

    let custom = state.markers.get_custom();
    assert_eq!(custom.len(), 1);
    // Mitgelieferte Identität wird ignoriert
    assert_ne!(custom[0].id, "capital-city");
    assert!(custom[0].id.starts_with("marker-city-"));
    assert!(custom[0].is_custom);
    assert!(custom[0].created_at.expect("frischer Zeitstempel") > 1);
    // Keine ID-Kollision im zusammengeführten Datensatz
    let all = state.markers.get_all();
    assert_eq!(
        all.iter().filter(|m| m.id == "capital-city").count(),
        1
    );
}

#[test]
fn test_export_clear_import_round_trip() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    add_marker(&mut controller, &mut state, "Erster", -3.25, 7.5);
    add_marker(&mut controller, &mut state, "Zweiter", 12.0, -8.0);
    let before = state.markers.get_custom();
    let original_ids: Vec<String> = before.iter().map(|m| m.id.clone()).collect();

    // Export liefert das Download-Artefakt mit festem Dateinamen
    controller
        .handle_intent(
            &mut state,
            AppIntent::ExportRequested {
                kind: AnnotationKind::Markers,
            },
        )
        .unwrap();
    let download = state
        .ui
        .pending_download
        .take()
        .expect("Download-Artefakt vorhanden");
    assert_eq!(download.filename, "custom-markers.json");
    // Eingebaute Records werden nie exportiert
    assert!(!download.contents.contains("capital-city"));

    // Alles löschen, dann reimportieren
    controller
        .handle_intent(&mut state, AppIntent::ClearAllMarkersRequested)
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::ConfirmDialogAccepted)
        .unwrap();
    assert!(state.markers.get_custom().is_empty());

    import(
        &mut controller,
        &mut state,
        AnnotationKind::Markers,
        &download.contents,
    );

    let after = state.markers.get_custom();
    assert_eq!(after.len(), before.len());
    for (reimported, original) in after.iter().zip(before.iter()) {
        assert_eq!(reimported.name, original.name);
        assert_eq!(reimported.kind, original.kind);
        approx::assert_abs_diff_eq!(reimported.location.x, original.location.x);
        approx::assert_abs_diff_eq!(reimported.location.y, original.location.y);
        assert_eq!(reimported.description, original.description);
        assert_eq!(reimported.link, original.link);
        assert_eq!(reimported.major, original.major);
        // Identität ist frisch vergeben
        assert!(!original_ids.contains(&reimported.id));
    }
}

#[test]
fn test_export_with_no_custom_records_is_informational_noop() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::ExportRequested {
                kind: AnnotationKind::Routes,
            },
        )
        .unwrap();

    assert!(state.ui.pending_download.is_none());
    let alert = &state.alerts.alerts()[0];
    assert_eq!(alert.title, "No Routes");
    assert_eq!(alert.description, "No custom routes to export.");
}

#[test]
fn test_route_import_validates_path_and_normalizes_presentation() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let raw = r#"[
        {"name": "Gut", "type": "custom", "path": [[0, 0], [1, 1]],
         "color": "nicht-hex", "width": 0},
        {"name": "Zu kurz", "type": "custom", "path": [[0, 0]]}
    ]"#;
    import(&mut controller, &mut state, AnnotationKind::Routes, raw);

    let custom = state.routes.get_custom();
    assert_eq!(custom.len(), 1);
    assert_eq!(custom[0].name, "Gut");
    // Ungültige Darstellungsattribute fallen auf die Standardwerte zurück
    assert_eq!(custom[0].color, state.options.default_route_color);
    assert_eq!(custom[0].width, state.options.default_route_width);
    assert!(state
        .alerts
        .alerts()
        .iter()
        .any(|a| a.title == "Partial Import"));
}

#[test]
fn test_import_request_roundtrip_clears_pending_kind() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::ImportRequested {
                kind: AnnotationKind::Markers,
            },
        )
        .unwrap();
    assert_eq!(state.ui.import_request, Some(AnnotationKind::Markers));

    import(&mut controller, &mut state, AnnotationKind::Markers, "[]");
    assert!(state.ui.import_request.is_none());
}

#[test]
fn test_two_overlapping_imports_both_apply() {
    // Akzeptiertes Wettrennen: beide Callbacks werden nacheinander
    // vollständig angewendet, jeder Write ersetzt die Liste des Kinds
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let first = r#"[{"name": "A", "type": "town", "location": [1, 1]}]"#;
    let second = r#"[{"name": "B", "type": "city", "location": [2, 2]}]"#;
    import(&mut controller, &mut state, AnnotationKind::Markers, first);
    import(&mut controller, &mut state, AnnotationKind::Markers, second);

    let names: Vec<String> = state
        .markers
        .get_custom()
        .into_iter()
        .map(|m| m.name)
        .collect();
    assert_eq!(names, vec!["A".to_string(), "B".to_string()]);
}
