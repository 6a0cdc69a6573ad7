//! Generischer Entity-Store: eingebaute + benutzerdefinierte Records.
//!
//! Custom-Records werden bei jedem Zugriff frisch aus dem Storage gelesen
//! (kein Cache). Lesefehler degradieren zu einer leeren Custom-Liste,
//! Schreibfehler werden geloggt und nicht an den Aufrufer durchgereicht —
//! ein Persistenzausfall darf den Interaktionsfluss nie abbrechen.

use super::record::{new_record_id, now_millis, AnnotationRecord, RecordIdentity};
use crate::storage::KeyValueStore;
use indexmap::IndexMap;
use std::sync::Arc;

/// CRUD + Persistenz für einen Record-Typ (Marker oder Route).
pub struct EntityStore<K: AnnotationRecord> {
    builtin: Vec<K>,
    storage: Arc<dyn KeyValueStore>,
}

impl<K: AnnotationRecord> EntityStore<K> {
    /// Erstellt einen Store über der eingebauten Liste und dem Storage-Backend.
    pub fn new(builtin: Vec<K>, storage: Arc<dyn KeyValueStore>) -> Self {
        Self { builtin, storage }
    }

    /// Eingebaute Records in fester Reihenfolge.
    pub fn builtin(&self) -> &[K] {
        &self.builtin
    }

    /// Anzahl der eingebauten Records.
    pub fn builtin_count(&self) -> usize {
        self.builtin.len()
    }

    /// Zusammengeführter Datensatz: eingebaute Records, danach Custom-Records
    /// in Einfüge-Reihenfolge. IDs sind über die Konkatenation eindeutig;
    /// Duplikate werden übersprungen und geloggt.
    pub fn get_all(&self) -> Vec<K> {
        let mut merged: IndexMap<String, K> = IndexMap::new();
        for record in self.builtin.iter().cloned().chain(self.get_custom()) {
            if merged.contains_key(record.id()) {
                log::warn!(
                    "Doppelte {}-ID '{}' im zusammengeführten Datensatz, Eintrag übersprungen",
                    K::KIND,
                    record.id()
                );
                continue;
            }
            merged.insert(record.id().to_string(), record);
        }
        merged.into_values().collect()
    }

    /// Nur die Custom-Records. Fehlendes, unlesbares oder korruptes Storage
    /// zählt als leere Liste.
    pub fn get_custom(&self) -> Vec<K> {
        let raw = match self.storage.read(K::STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                log::warn!("Storage-Read für '{}' fehlgeschlagen: {e:#}", K::STORAGE_KEY);
                return Vec::new();
            }
        };
        match serde_json::from_str::<Vec<K>>(&raw) {
            Ok(records) => records,
            Err(e) => {
                log::warn!(
                    "Custom-Liste '{}' nicht lesbar, verwende leere Liste: {e}",
                    K::STORAGE_KEY
                );
                Vec::new()
            }
        }
    }

    /// Anzahl der Custom-Records.
    pub fn custom_count(&self) -> usize {
        self.get_custom().len()
    }

    /// Erstellt einen Custom-Record aus dem Draft: vergibt ID und
    /// Erstellungszeitpunkt, hängt ihn an die Custom-Liste an und persistiert
    /// die vollständige Liste. Validiert nichts über den Aufrufer hinaus.
    pub fn add(&self, draft: K::Draft) -> K {
        let identity = RecordIdentity {
            id: new_record_id(K::KIND, K::subtype_slug(&draft)),
            created_at: now_millis(),
        };
        let record = K::from_draft(draft, identity);
        let mut custom = self.get_custom();
        custom.push(record.clone());
        self.persist(&custom);
        log::info!("{} '{}' erstellt", K::KIND, record.id());
        record
    }

    /// Aktualisiert einen Custom-Record per shallow Feld-Merge.
    /// `false` wenn die ID nicht in der Custom-Liste steht — eingebaute
    /// Records werden dort nie gefunden und bleiben damit unveränderlich.
    pub fn update(&self, id: &str, patch: K::Patch) -> bool {
        let mut custom = self.get_custom();
        let Some(record) = custom.iter_mut().find(|r| r.id() == id) else {
            log::debug!("Kein Custom-{} mit ID '{id}' zu aktualisieren", K::KIND);
            return false;
        };
        record.apply_patch(patch);
        self.persist(&custom);
        log::info!("{} '{id}' aktualisiert", K::KIND);
        true
    }

    /// Entfernt einen Custom-Record; schreibt das Storage nur, wenn
    /// tatsächlich etwas entfernt wurde.
    pub fn delete(&self, id: &str) -> bool {
        let mut custom = self.get_custom();
        let before = custom.len();
        custom.retain(|r| r.id() != id);
        if custom.len() == before {
            return false;
        }
        self.persist(&custom);
        log::info!("{} '{id}' gelöscht", K::KIND);
        true
    }

    /// Entfernt alle Custom-Records dieses Kinds.
    /// Wiederholtes Delete statt Einmal-Write: Teilfortschritt bleibt bei
    /// einer Unterbrechung sichtbar.
    pub fn clear_all(&self) -> usize {
        let ids: Vec<String> = self
            .get_custom()
            .iter()
            .map(|r| r.id().to_string())
            .collect();
        let mut removed = 0;
        for id in ids {
            if self.delete(&id) {
                removed += 1;
            }
        }
        removed
    }

    fn persist(&self, custom: &[K]) {
        let document = match serde_json::to_string(custom) {
            Ok(document) => document,
            Err(e) => {
                log::warn!("Serialisierung der Custom-Liste '{}' fehlgeschlagen: {e}", K::STORAGE_KEY);
                return;
            }
        };
        if let Err(e) = self.storage.write(K::STORAGE_KEY, &document) {
            log::warn!(
                "Storage-Write für '{}' fehlgeschlagen, Änderung geht beim Neustart verloren: {e:#}",
                K::STORAGE_KEY
            );
        }
    }
}
