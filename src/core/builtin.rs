//! Eingebaute Marker- und Routen-Datensätze der Weltkarte.
//!
//! Diese Records sind unveränderlich, werden nie persistiert und existieren
//! für die Prozesslebensdauer in fester Reihenfolge vor den Custom-Records.

use super::marker::{MarkerKind, MarkerRecord};
use super::record::MapPoint;
use super::route::{RouteKind, RouteRecord};

fn builtin_marker(
    id: &str,
    name: &str,
    kind: MarkerKind,
    location: MapPoint,
    description: &str,
    link: &str,
) -> MarkerRecord {
    MarkerRecord {
        id: id.to_string(),
        name: name.to_string(),
        kind,
        location,
        description: Some(description.to_string()),
        link: Some(link.to_string()),
        major: true,
        is_custom: false,
        created_at: None,
    }
}

fn builtin_route(
    id: &str,
    name: &str,
    path: &[MapPoint],
    kind: RouteKind,
    description: &str,
    color: &str,
    width: u32,
) -> RouteRecord {
    RouteRecord {
        id: id.to_string(),
        name: name.to_string(),
        path: path.to_vec(),
        kind,
        description: description.to_string(),
        color: color.to_string(),
        width,
        is_custom: false,
        created_at: None,
    }
}

/// Die fest eingebauten Orte der Karte.
pub fn default_markers() -> Vec<MarkerRecord> {
    vec![
        builtin_marker(
            "capital-city",
            "Capital City",
            MarkerKind::City,
            MapPoint::new(-54.38, 89.63),
            "The grand capital city of the realm, home to the royal palace and bustling markets.",
            "https://example.com/capital",
        ),
        builtin_marker(
            "riverside-village",
            "Riverside Village",
            MarkerKind::Village,
            MapPoint::new(-30.0, 80.0),
            "A peaceful village by the river, known for its fishing and boat building.",
            "https://example.com/riverside",
        ),
        builtin_marker(
            "mountain-fort",
            "Mountain Fort",
            MarkerKind::Fort,
            MapPoint::new(-80.0, 120.0),
            "An ancient fortress guarding the mountain pass, now home to a small garrison.",
            "https://example.com/fort",
        ),
        builtin_marker(
            "dark-cave",
            "Dark Cave",
            MarkerKind::Cave,
            MapPoint::new(-120.0, 60.0),
            "A mysterious cave system rumored to contain ancient treasures and dangerous creatures.",
            "https://example.com/cave",
        ),
        builtin_marker(
            "ancient-portal",
            "Ancient Portal",
            MarkerKind::Portal,
            MapPoint::new(-90.0, 40.0),
            "A magical portal that leads to distant lands. Its power waxes and wanes with the moon.",
            "https://example.com/portal",
        ),
        builtin_marker(
            "abandoned-dungeon",
            "Abandoned Dungeon",
            MarkerKind::Dungeon,
            MapPoint::new(-60.0, 160.0),
            "The ruins of an ancient dungeon, now overrun with monsters and traps.",
            "https://example.com/dungeon",
        ),
        builtin_marker(
            "golden-farm",
            "Golden Farm",
            MarkerKind::Farm,
            MapPoint::new(-20.0, 140.0),
            "A prosperous farm known for its golden wheat fields and friendly farmers.",
            "https://example.com/farm",
        ),
        builtin_marker(
            "trading-town",
            "Trading Town",
            MarkerKind::Town,
            MapPoint::new(-50.88, 72.38),
            "A busy trading town where merchants from all corners of the realm gather.",
            "https://example.com/town",
        ),
        builtin_marker(
            "mysterious-ruins",
            "Mysterious Ruins",
            MarkerKind::Unknown,
            MapPoint::new(-150.0, 100.0),
            "Ancient ruins whose purpose and origin remain a mystery to scholars.",
            "https://example.com/ruins",
        ),
    ]
}

/// Die fest eingebauten Routen der Karte.
pub fn default_routes() -> Vec<RouteRecord> {
    vec![
        builtin_route(
            "royal-road",
            "Royal Road",
            &[
                MapPoint::new(-50.0, 100.0),
                MapPoint::new(-40.0, 60.0),
                MapPoint::new(-30.0, 80.0),
            ],
            RouteKind::Main,
            "The main trade route connecting the capital to the coastal regions.",
            "#FFD700",
            4,
        ),
        builtin_route(
            "mountain-path",
            "Mountain Path",
            &[MapPoint::new(-50.0, 100.0), MapPoint::new(-80.0, 120.0)],
            RouteKind::Main,
            "A treacherous mountain path leading to the ancient fortress.",
            "#8B4513",
            3,
        ),
        builtin_route(
            "river-trail",
            "River Trail",
            &[
                MapPoint::new(-30.0, 80.0),
                MapPoint::new(-20.0, 140.0),
                MapPoint::new(-60.0, 160.0),
            ],
            RouteKind::Secondary,
            "A winding trail that follows the river through fertile lands.",
            "#4169E1",
            2,
        ),
        builtin_route(
            "ancient-way",
            "Ancient Way",
            &[
                MapPoint::new(-90.0, 40.0),
                MapPoint::new(-120.0, 60.0),
                MapPoint::new(-150.0, 100.0),
            ],
            RouteKind::Secret,
            "An ancient path that connects mystical locations, known only to few.",
            "#9932CC",
            2,
        ),
        builtin_route(
            "trade-route",
            "Trade Route",
            &[MapPoint::new(-40.0, 60.0), MapPoint::new(-20.0, 140.0)],
            RouteKind::Secondary,
            "A busy trade route connecting the trading town to the farmlands.",
            "#228B22",
            3,
        ),
    ]
}
