//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und der Präsentationsschicht geteilt
//! werden, um direkte Abhängigkeiten zu vermeiden.

mod map_scene;
pub mod options;

pub use map_scene::MapScene;
pub use options::AnnotatorOptions;
pub use options::{ALERT_AUTO_DISMISS_MS, DEFAULT_ROUTE_COLOR, DEFAULT_ROUTE_WIDTH};
