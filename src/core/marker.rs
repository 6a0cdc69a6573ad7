//! Marker-Records: benannte Orte auf der Karte.

use super::record::{AnnotationRecord, MapPoint, RecordIdentity};
use serde::{Deserialize, Serialize};

/// Ortstyp eines Markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerKind {
    City,
    #[default]
    Town,
    Village,
    Fort,
    Dungeon,
    Cave,
    Portal,
    Farm,
    Unknown,
}

impl MarkerKind {
    /// Slug für das ID-Schema und Log-Ausgaben.
    pub fn slug(self) -> &'static str {
        match self {
            MarkerKind::City => "city",
            MarkerKind::Town => "town",
            MarkerKind::Village => "village",
            MarkerKind::Fort => "fort",
            MarkerKind::Dungeon => "dungeon",
            MarkerKind::Cave => "cave",
            MarkerKind::Portal => "portal",
            MarkerKind::Farm => "farm",
            MarkerKind::Unknown => "unknown",
        }
    }

    /// Anzeigename für UI-Texte.
    pub fn label(self) -> &'static str {
        match self {
            MarkerKind::City => "City",
            MarkerKind::Town => "Town",
            MarkerKind::Village => "Village",
            MarkerKind::Fort => "Fort",
            MarkerKind::Dungeon => "Dungeon",
            MarkerKind::Cave => "Cave",
            MarkerKind::Portal => "Portal",
            MarkerKind::Farm => "Farm",
            MarkerKind::Unknown => "Unknown",
        }
    }

    /// Karten-Layer, in dem Marker dieses Typs gerendert werden.
    pub fn layer(self) -> MarkerLayer {
        match self {
            MarkerKind::City
            | MarkerKind::Town
            | MarkerKind::Village
            | MarkerKind::Fort
            | MarkerKind::Farm => MarkerLayer::Civilization,
            MarkerKind::Portal | MarkerKind::Dungeon | MarkerKind::Cave | MarkerKind::Unknown => {
                MarkerLayer::Wilderness
            }
        }
    }
}

/// Gruppierung der Marker in Render-Layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerLayer {
    /// Städte, Dörfer, Forts, Höfe
    Civilization,
    /// Portale, Dungeons, Höhlen, Unbekanntes
    Wilderness,
}

/// Ein benannter Ort auf der Karte (eingebaut oder benutzerdefiniert).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerRecord {
    /// Eindeutige, unveränderliche ID
    pub id: String,
    /// Anzeigename (nicht leer)
    pub name: String,
    /// Ortstyp
    #[serde(rename = "type")]
    pub kind: MarkerKind,
    /// Weltposition
    pub location: MapPoint,
    /// Optionale Beschreibung
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optionale Link-URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Major-Orte bleiben unabhängig von der Zoomstufe sichtbar
    #[serde(default)]
    pub major: bool,
    /// true nur für benutzerdefinierte Records
    #[serde(default)]
    pub is_custom: bool,
    /// Erstellungszeitpunkt (Epoch-Millisekunden); eingebaute Records haben keinen
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<u64>,
}

/// Eingabefelder für einen neuen Marker; die Identität vergibt der Store.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerDraft {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: MarkerKind,
    pub location: MapPoint,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub major: bool,
}

/// Partielles Marker-Update; nicht gesetzte Felder bleiben unverändert.
/// Bei `description`/`link`: äußeres `None` = unverändert, inneres `None` = Feld entfernen.
#[derive(Debug, Clone, Default)]
pub struct MarkerPatch {
    pub name: Option<String>,
    pub kind: Option<MarkerKind>,
    pub location: Option<MapPoint>,
    pub description: Option<Option<String>>,
    pub link: Option<Option<String>>,
    pub major: Option<bool>,
}

impl AnnotationRecord for MarkerRecord {
    type Draft = MarkerDraft;
    type Patch = MarkerPatch;

    const KIND: &'static str = "marker";
    const STORAGE_KEY: &'static str = "custom-markers";

    fn id(&self) -> &str {
        &self.id
    }

    fn is_custom(&self) -> bool {
        self.is_custom
    }

    fn subtype_slug(draft: &MarkerDraft) -> &'static str {
        draft.kind.slug()
    }

    fn from_draft(draft: MarkerDraft, identity: RecordIdentity) -> Self {
        Self {
            id: identity.id,
            name: draft.name,
            kind: draft.kind,
            location: draft.location,
            description: draft.description,
            link: draft.link,
            major: draft.major,
            is_custom: true,
            created_at: Some(identity.created_at),
        }
    }

    fn apply_patch(&mut self, patch: MarkerPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(link) = patch.link {
            self.link = link;
        }
        if let Some(major) = patch.major {
            self.major = major;
        }
    }

    /// Minimal-Vertrag: nicht-leerer Name, bekannter Typ, Position als
    /// 2-elementiges Koordinatenpaar. Unbekannte Felder werden ignoriert.
    fn draft_from_import(value: &serde_json::Value) -> Option<MarkerDraft> {
        let draft: MarkerDraft = serde_json::from_value(value.clone()).ok()?;
        if draft.name.trim().is_empty() {
            return None;
        }
        Some(draft)
    }
}
