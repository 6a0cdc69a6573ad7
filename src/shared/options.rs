//! Zentrale Konfiguration für den Fantasy Map Annotator.
//!
//! `AnnotatorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Benachrichtigungen ──────────────────────────────────────────────

/// Anzeigedauer einer Benachrichtigung bis zum Auto-Dismiss (Millisekunden).
pub const ALERT_AUTO_DISMISS_MS: u64 = 5000;

// ── Routen ──────────────────────────────────────────────────────────

/// Standard-Farbe neuer Custom-Routen (Hex).
pub const DEFAULT_ROUTE_COLOR: &str = "#FF6B6B";
/// Standard-Linienbreite neuer Custom-Routen in Pixeln.
pub const DEFAULT_ROUTE_WIDTH: u32 = 3;
/// Maximal wählbare Linienbreite im Routen-Dialog.
pub const MAX_ROUTE_WIDTH: u32 = 5;
/// Farbpalette des Routen-Dialogs.
pub const ROUTE_COLOR_PALETTE: [&str; 8] = [
    "#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FFEAA7", "#DDA0DD", "#FFB347", "#87CEEB",
];

// ── Karte ───────────────────────────────────────────────────────────

/// Start-Zoomstufe der Karte.
pub const INITIAL_ZOOM: f64 = 2.0;
/// Ab dieser Zoomstufe werden auch nicht-major Marker eingeblendet.
pub const MINOR_MARKER_MIN_ZOOM: f64 = 4.0;

/// Alle zur Laufzeit änderbaren Annotator-Optionen.
/// Wird als `fantasy_map_annotator.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotatorOptions {
    // ── Benachrichtigungen ──────────────────────────────────────
    /// Anzeigedauer von Benachrichtigungen in Millisekunden
    pub alert_auto_dismiss_ms: u64,

    // ── Routen ──────────────────────────────────────────────────
    /// Standard-Farbe neuer Routen (Hex)
    pub default_route_color: String,
    /// Standard-Linienbreite neuer Routen in Pixeln
    pub default_route_width: u32,

    // ── Karte ───────────────────────────────────────────────────
    /// Start-Zoomstufe der Karte
    pub initial_zoom: f64,
    /// Zoomschwelle, ab der nicht-major Marker sichtbar werden
    #[serde(default = "default_minor_marker_min_zoom")]
    pub minor_marker_min_zoom: f64,
}

impl Default for AnnotatorOptions {
    fn default() -> Self {
        Self {
            alert_auto_dismiss_ms: ALERT_AUTO_DISMISS_MS,
            default_route_color: DEFAULT_ROUTE_COLOR.to_string(),
            default_route_width: DEFAULT_ROUTE_WIDTH,
            initial_zoom: INITIAL_ZOOM,
            minor_marker_min_zoom: MINOR_MARKER_MIN_ZOOM,
        }
    }
}

/// Serde-Default für `minor_marker_min_zoom` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_minor_marker_min_zoom() -> f64 {
    MINOR_MARKER_MIN_ZOOM
}

impl AnnotatorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("fantasy_map_annotator"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("fantasy_map_annotator.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let opts = AnnotatorOptions::default();
        assert_eq!(opts.alert_auto_dismiss_ms, ALERT_AUTO_DISMISS_MS);
        assert_eq!(opts.default_route_color, DEFAULT_ROUTE_COLOR);
        assert_eq!(opts.default_route_width, DEFAULT_ROUTE_WIDTH);
    }

    #[test]
    fn test_toml_roundtrip() {
        let path = std::env::temp_dir().join(format!("fma_options_{}.toml", std::process::id()));
        let mut opts = AnnotatorOptions::default();
        opts.default_route_color = "#4ECDC4".to_string();
        opts.alert_auto_dismiss_ms = 2500;
        opts.save_to_file(&path).expect("Optionen speicherbar");

        let loaded = AnnotatorOptions::load_from_file(&path);
        assert_eq!(loaded.default_route_color, "#4ECDC4");
        assert_eq!(loaded.alert_auto_dismiss_ms, 2500);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_unreadable_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("fma_options_gibt_es_nicht.toml");
        let opts = AnnotatorOptions::load_from_file(&path);
        assert_eq!(opts.default_route_width, DEFAULT_ROUTE_WIDTH);
    }
}
