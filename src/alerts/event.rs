//! Wire model for the realtime alert channel.

// Rust guideline compliant 2026-02

use serde::{Deserialize, Serialize};

/// Discriminator value that marks a frame as a freshly raised alert.
pub const NEW_ALERT_EVENT: &str = "new_alert";

/// Alert severity levels.
///
/// Ordered so that `Low < Medium < High < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational finding, no action expected.
    Low,
    /// Worth a look during normal triage.
    Medium,
    /// Needs prompt attention.
    High,
    /// Active threat, page someone.
    Critical,
}

impl Severity {
    /// Returns `true` for the severity that drives error-styled notifications.
    #[must_use]
    pub fn is_critical(self) -> bool {
        self == Self::Critical
    }

    /// Lowercase wire representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One alert event as broadcast by the backend.
///
/// Constructed server-side, serialized once, and discarded client-side
/// after dispatch. The client never mutates it or acknowledges it back;
/// the channel is unidirectional for this use case. Unknown extra fields
/// on the wire are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealtimeAlertEvent {
    /// Frame discriminator; only [`NEW_ALERT_EVENT`] is dispatched.
    pub event: String,
    /// Short human-readable summary.
    pub title: String,
    /// Textual IP address the alert was raised against.
    pub source_ip: String,
    /// Free-text classification label.
    pub category: String,
    /// Drives notification styling.
    pub severity: Severity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_wire_format_is_lowercase() {
        let json = serde_json::to_string(&Severity::Critical).expect("severity serializes");
        assert_eq!(json, "\"critical\"");

        let parsed: Severity = serde_json::from_str("\"high\"").expect("severity parses");
        assert_eq!(parsed, Severity::High);
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
        assert!(Severity::High < Severity::Critical);
    }

    #[test]
    fn test_only_critical_is_critical() {
        assert!(Severity::Critical.is_critical());
        assert!(!Severity::High.is_critical());
        assert!(!Severity::Medium.is_critical());
        assert!(!Severity::Low.is_critical());
    }

    #[test]
    fn test_event_ignores_unknown_fields() {
        let frame = r#"{
            "event": "new_alert",
            "title": "Port scan detected",
            "source_ip": "10.13.37.5",
            "category": "reconnaissance",
            "severity": "high",
            "rule_id": "ET-2010935",
            "country_code": "CN"
        }"#;
        let event: RealtimeAlertEvent = serde_json::from_str(frame).expect("frame parses");
        assert_eq!(event.title, "Port scan detected");
        assert_eq!(event.severity, Severity::High);
    }

    #[test]
    fn test_unknown_severity_fails_parse() {
        // Out-of-set severities are malformed frames, not a fifth level.
        let result = serde_json::from_str::<Severity>("\"catastrophic\"");
        assert!(result.is_err());
    }
}
