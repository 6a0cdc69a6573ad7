//! Routen-Records: Streckenzüge zwischen Orten.

use super::record::{AnnotationRecord, MapPoint, RecordIdentity};
use crate::shared::options::{DEFAULT_ROUTE_COLOR, DEFAULT_ROUTE_WIDTH};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Routentyp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteKind {
    Main,
    Secondary,
    Secret,
    #[default]
    Custom,
}

impl RouteKind {
    /// Slug für das ID-Schema und Log-Ausgaben.
    pub fn slug(self) -> &'static str {
        match self {
            RouteKind::Main => "main",
            RouteKind::Secondary => "secondary",
            RouteKind::Secret => "secret",
            RouteKind::Custom => "custom",
        }
    }

    /// Anzeigename für UI-Texte.
    pub fn label(self) -> &'static str {
        match self {
            RouteKind::Main => "Main",
            RouteKind::Secondary => "Secondary",
            RouteKind::Secret => "Secret",
            RouteKind::Custom => "Custom",
        }
    }
}

/// Ein Streckenzug auf der Karte (eingebaut oder benutzerdefiniert).
///
/// `path` hat bei committeten Routen mindestens 2 Punkte; kürzere Pfade
/// existieren nur transient während des Zeichnens im Mode-Controller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRecord {
    /// Eindeutige, unveränderliche ID
    pub id: String,
    /// Anzeigename (nicht leer)
    pub name: String,
    /// Geordnete Punktfolge der Strecke
    pub path: Vec<MapPoint>,
    /// Routentyp
    #[serde(rename = "type")]
    pub kind: RouteKind,
    /// Beschreibung (darf leer sein)
    #[serde(default)]
    pub description: String,
    /// Linienfarbe als Hex-Wert (`#RRGGBB`)
    #[serde(default = "default_route_color")]
    pub color: String,
    /// Linienbreite in Pixeln (positiv)
    #[serde(default = "default_route_width")]
    pub width: u32,
    /// true nur für benutzerdefinierte Records
    #[serde(default)]
    pub is_custom: bool,
    /// Erstellungszeitpunkt (Epoch-Millisekunden); eingebaute Records haben keinen
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<u64>,
}

/// Eingabefelder für eine neue Route; die Identität vergibt der Store.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDraft {
    pub name: String,
    pub path: Vec<MapPoint>,
    #[serde(rename = "type")]
    pub kind: RouteKind,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_route_color")]
    pub color: String,
    #[serde(default = "default_route_width")]
    pub width: u32,
}

/// Partielles Routen-Update; nicht gesetzte Felder bleiben unverändert.
#[derive(Debug, Clone, Default)]
pub struct RoutePatch {
    pub name: Option<String>,
    pub path: Option<Vec<MapPoint>>,
    pub kind: Option<RouteKind>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub width: Option<u32>,
}

impl AnnotationRecord for RouteRecord {
    type Draft = RouteDraft;
    type Patch = RoutePatch;

    const KIND: &'static str = "route";
    const STORAGE_KEY: &'static str = "custom-routes";

    fn id(&self) -> &str {
        &self.id
    }

    fn is_custom(&self) -> bool {
        self.is_custom
    }

    fn subtype_slug(draft: &RouteDraft) -> &'static str {
        draft.kind.slug()
    }

    fn from_draft(draft: RouteDraft, identity: RecordIdentity) -> Self {
        Self {
            id: identity.id,
            name: draft.name,
            path: draft.path,
            kind: draft.kind,
            description: draft.description,
            color: draft.color,
            width: draft.width,
            is_custom: true,
            created_at: Some(identity.created_at),
        }
    }

    fn apply_patch(&mut self, patch: RoutePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(path) = patch.path {
            self.path = path;
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
        if let Some(width) = patch.width {
            self.width = width;
        }
    }

    /// Minimal-Vertrag: nicht-leerer Name, bekannter Typ, Pfad mit ≥ 2 Punkten.
    /// Ungültige Darstellungsattribute fallen auf die Standardwerte zurück.
    fn draft_from_import(value: &serde_json::Value) -> Option<RouteDraft> {
        let mut draft: RouteDraft = serde_json::from_value(value.clone()).ok()?;
        if draft.name.trim().is_empty() || draft.path.len() < 2 {
            return None;
        }
        if !is_valid_hex_color(&draft.color) {
            log::debug!(
                "Importierte Route '{}': Farbe '{}' ungültig, verwende Standard",
                draft.name,
                draft.color
            );
            draft.color = DEFAULT_ROUTE_COLOR.to_string();
        }
        if draft.width == 0 {
            draft.width = DEFAULT_ROUTE_WIDTH;
        }
        Some(draft)
    }
}

fn default_route_color() -> String {
    DEFAULT_ROUTE_COLOR.to_string()
}

fn default_route_width() -> u32 {
    DEFAULT_ROUTE_WIDTH
}

static HEX_COLOR_RE: OnceLock<Regex> = OnceLock::new();

/// Prüft einen Farbwert gegen das Format `#RRGGBB`.
pub fn is_valid_hex_color(value: &str) -> bool {
    HEX_COLOR_RE
        .get_or_init(|| Regex::new(r"^#[0-9a-fA-F]{6}$").expect("statisches Hex-Pattern"))
        .is_match(value)
}
