//! Inbound frame decoding for the alert channel.
//!
//! Every text frame goes through two stages: a JSON value parse, then a
//! discriminator check. Only frames tagged `new_alert` are parsed into the
//! typed event and handed onward. Anything else (malformed JSON, the
//! backend's `alert_acknowledged`/`alert_resolved` bookkeeping frames,
//! event kinds this client does not know yet) is dropped without
//! disturbing the connection.

// Rust guideline compliant 2026-02

use crate::alerts::event::{RealtimeAlertEvent, NEW_ALERT_EVENT};

/// Decode one raw text frame, returning the event if it should be dispatched.
///
/// Per-frame failures are reported to the log sink and swallowed; a bad
/// frame never tears down the channel.
#[must_use]
pub fn decode_frame(text: &str) -> Option<RealtimeAlertEvent> {
    let json: serde_json::Value = match serde_json::from_str(text) {
        Ok(value) => value,
        Err(e) => {
            // The serde error already carries the offending byte position
            log::error!("[Alerts] Failed to parse frame as JSON: {}", e);
            return None;
        }
    };

    // Owned copy so the typed parse below can consume the value
    let kind = json
        .get("event")
        .and_then(|e| e.as_str())
        .map(ToOwned::to_owned);

    match kind.as_deref() {
        Some(NEW_ALERT_EVENT) => match serde_json::from_value::<RealtimeAlertEvent>(json) {
            Ok(event) => Some(event),
            Err(e) => {
                log::error!("[Alerts] new_alert frame did not conform: {}", e);
                None
            }
        },
        Some(other) => {
            // Forward-compatible: future event kinds are ignored, not errors
            log::trace!("[Alerts] Ignoring event kind: {}", other);
            None
        }
        None => {
            // Ack/resolve broadcasts carry a `type` tag instead of `event`
            log::debug!(
                "[Alerts] Frame without event discriminator: {}",
                json.get("type").and_then(|t| t.as_str()).unwrap_or("none")
            );
            None
        }
    }
}
