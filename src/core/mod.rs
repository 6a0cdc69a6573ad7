//! Core-Domänentypen: Marker, Routen, Record-Vertrag und Entity-Store.

pub mod builtin;
pub mod marker;
/// Core-Datenmodelle für Karten-Annotationen
///
/// Dieses Modul definiert die Haupt-Datenstrukturen:
/// - MarkerRecord: Einzelner Ort mit Position und Eigenschaften
/// - RouteRecord: Streckenzug aus mindestens zwei Punkten
/// - EntityStore: Container für eingebaute + benutzerdefinierte Records
pub mod record;
pub mod route;
pub mod store;

pub use marker::{MarkerDraft, MarkerKind, MarkerLayer, MarkerPatch, MarkerRecord};
pub use record::{
    new_record_id, now_millis, AnnotationKind, AnnotationRecord, MapPoint, RecordIdentity,
};
pub use route::{is_valid_hex_color, RouteDraft, RouteKind, RoutePatch, RouteRecord};
pub use store::EntityStore;
