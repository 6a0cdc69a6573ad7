//! Benachrichtigungszentrale; das Toast-Rendering übernimmt die Präsentationsschicht.

/// Schweregrad einer Benachrichtigung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertSeverity {
    Info,
    Success,
    Warning,
    Error,
}

/// Eine aktive Benachrichtigung.
#[derive(Debug, Clone)]
pub struct Alert {
    /// Eindeutige ID (`alert-{n}`)
    pub id: String,
    /// Titel
    pub title: String,
    /// Beschreibungstext
    pub description: String,
    /// Schweregrad
    pub severity: AlertSeverity,
    /// Erstellungszeitpunkt in Epoch-Millisekunden
    pub created_at: u64,
}

/// Verwaltet aktive Benachrichtigungen inklusive Auto-Dismiss.
#[derive(Debug, Default)]
pub struct AlertCenter {
    alerts: Vec<Alert>,
    next_id: u64,
}

impl AlertCenter {
    /// Erstellt eine leere Benachrichtigungszentrale.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fügt eine Benachrichtigung hinzu und gibt deren ID zurück.
    pub(crate) fn push(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        severity: AlertSeverity,
        now_ms: u64,
    ) -> String {
        let id = format!("alert-{}", self.next_id);
        self.next_id += 1;
        self.alerts.push(Alert {
            id: id.clone(),
            title: title.into(),
            description: description.into(),
            severity,
            created_at: now_ms,
        });
        id
    }

    /// Entfernt eine Benachrichtigung per ID; idempotent, `false` wenn sie
    /// bereits entfernt war.
    pub(crate) fn dismiss(&mut self, id: &str) -> bool {
        let before = self.alerts.len();
        self.alerts.retain(|alert| alert.id != id);
        self.alerts.len() != before
    }

    /// Entfernt alle Benachrichtigungen, deren Anzeigedauer abgelaufen ist.
    pub(crate) fn sweep_expired(&mut self, now_ms: u64, timeout_ms: u64) -> usize {
        let before = self.alerts.len();
        self.alerts
            .retain(|alert| now_ms.saturating_sub(alert.created_at) < timeout_ms);
        before - self.alerts.len()
    }

    /// Aktive Benachrichtigungen in Anzeigereihenfolge.
    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    /// Ob keine Benachrichtigung aktiv ist.
    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    /// Anzahl aktiver Benachrichtigungen.
    pub fn len(&self) -> usize {
        self.alerts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_sequential_ids() {
        let mut center = AlertCenter::new();
        let first = center.push("A", "a", AlertSeverity::Info, 0);
        let second = center.push("B", "b", AlertSeverity::Error, 0);
        assert_eq!(first, "alert-0");
        assert_eq!(second, "alert-1");
        assert_eq!(center.len(), 2);
    }

    #[test]
    fn test_dismiss_is_idempotent() {
        let mut center = AlertCenter::new();
        let id = center.push("A", "a", AlertSeverity::Info, 0);
        assert!(center.dismiss(&id));
        assert!(!center.dismiss(&id));
        assert!(center.is_empty());
    }

    #[test]
    fn test_sweep_removes_only_expired() {
        let mut center = AlertCenter::new();
        center.push("alt", "", AlertSeverity::Info, 1000);
        let fresh = center.push("neu", "", AlertSeverity::Info, 5500);

        assert_eq!(center.sweep_expired(6200, 5000), 1);
        assert_eq!(center.alerts().len(), 1);
        assert_eq!(center.alerts()[0].id, fresh);
    }

    #[test]
    fn test_manual_dismiss_before_sweep_causes_no_double_removal() {
        let mut center = AlertCenter::new();
        let id = center.push("A", "a", AlertSeverity::Success, 0);
        assert!(center.dismiss(&id));
        // Der spätere Sweep findet die Benachrichtigung nicht mehr
        assert_eq!(center.sweep_expired(10_000, 5000), 0);
    }
}
