//! Notification directives for accepted alert events.
//!
//! Translates a [`RealtimeAlertEvent`] into a presentation-neutral
//! directive: which style to render with, for how long, and the composed
//! text. Consumers (the CLI listener, a future desktop integration)
//! decide how a directive is actually shown.

// Rust guideline compliant 2026-02

use std::time::Duration;

use crate::alerts::event::RealtimeAlertEvent;
use crate::constants::{CRITICAL_NOTIFICATION_DURATION, STANDARD_NOTIFICATION_DURATION};

/// Rendering style of an alert notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationStyle {
    /// Error styling; reserved for critical severity.
    Error,
    /// Warning styling; every non-critical severity.
    Warning,
}

impl std::fmt::Display for NotificationStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
        }
    }
}

/// One user-facing notification, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertNotification {
    /// Rendering style derived from severity.
    pub style: NotificationStyle,
    /// How long the notification should stay on screen.
    pub duration: Duration,
    /// Primary text: alert title with the source address.
    pub message: String,
    /// Secondary text: the alert's classification label.
    pub detail: String,
}

impl AlertNotification {
    /// Build the notification directive for an accepted event.
    ///
    /// Critical alerts get error styling and the longer display window;
    /// everything else renders as a warning with the standard window.
    #[must_use]
    pub fn from_event(event: &RealtimeAlertEvent) -> Self {
        let (style, duration) = if event.severity.is_critical() {
            (NotificationStyle::Error, CRITICAL_NOTIFICATION_DURATION)
        } else {
            (NotificationStyle::Warning, STANDARD_NOTIFICATION_DURATION)
        };

        Self {
            style,
            duration,
            message: format!("{} ({})", event.title, event.source_ip),
            detail: event.category.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::event::Severity;

    fn event_with_severity(severity: Severity) -> RealtimeAlertEvent {
        RealtimeAlertEvent {
            event: "new_alert".to_string(),
            title: "Malware beacon".to_string(),
            source_ip: "10.0.8.41".to_string(),
            category: "command-and-control".to_string(),
            severity,
        }
    }

    #[test]
    fn test_critical_maps_to_error_style_and_long_duration() {
        let notification = AlertNotification::from_event(&event_with_severity(Severity::Critical));
        assert_eq!(notification.style, NotificationStyle::Error);
        assert_eq!(notification.duration, Duration::from_secs(8));
    }

    #[test]
    fn test_non_critical_maps_to_warning_style_and_short_duration() {
        for severity in [Severity::High, Severity::Medium, Severity::Low] {
            let notification = AlertNotification::from_event(&event_with_severity(severity));
            assert_eq!(notification.style, NotificationStyle::Warning);
            assert_eq!(notification.duration, Duration::from_secs(6));
        }
    }

    #[test]
    fn test_message_composes_title_and_source_ip() {
        let notification = AlertNotification::from_event(&event_with_severity(Severity::High));
        assert_eq!(notification.message, "Malware beacon (10.0.8.41)");
        assert_eq!(notification.detail, "command-and-control");
    }
}
