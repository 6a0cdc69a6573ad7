//! Handler und Kurzformen für die Benachrichtigungszentrale.

use crate::app::state::{AlertSeverity, AppState};
use crate::core::now_millis;

/// Entfernt eine Benachrichtigung; ein bereits entfernter Eintrag ist kein Fehler.
pub fn dismiss(state: &mut AppState, id: &str) {
    if !state.alerts.dismiss(id) {
        log::debug!("Benachrichtigung '{id}' war bereits entfernt");
    }
}

/// Entfernt alle Benachrichtigungen, deren Anzeigedauer abgelaufen ist.
pub fn sweep(state: &mut AppState, now_ms: u64) {
    let removed = state
        .alerts
        .sweep_expired(now_ms, state.options.alert_auto_dismiss_ms);
    if removed > 0 {
        log::debug!("{removed} Benachrichtigungen automatisch entfernt");
    }
}

/// Informationsmeldung.
pub fn push_info(state: &mut AppState, title: &str, description: &str) {
    push(state, title, description, AlertSeverity::Info);
}

/// Erfolgsmeldung.
pub fn push_success(state: &mut AppState, title: &str, description: &str) {
    push(state, title, description, AlertSeverity::Success);
}

/// Fehlermeldung (Abweisung einer Benutzeraktion).
pub fn push_error(state: &mut AppState, title: &str, description: &str) {
    push(state, title, description, AlertSeverity::Error);
}

fn push(state: &mut AppState, title: &str, description: &str, severity: AlertSeverity) {
    let id = state.alerts.push(title, description, severity, now_millis());
    log::debug!("Benachrichtigung {id}: {title}");
}
