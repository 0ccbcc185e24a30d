//! Application-wide constants for campuswatch.
//!
//! This module centralizes the magic numbers of the alert channel so the
//! wire contract and timing rules are discoverable in one place.

// Rust guideline compliant 2026-02

use std::time::Duration;

// ============================================================================
// Alert channel
// ============================================================================

/// Resource path of the realtime alert endpoint on the backend.
///
/// Appended to the WS-scheme origin; the trailing slash is part of the
/// route (Django `path('ws/alerts/')`) and must not be dropped.
pub const ALERTS_WS_PATH: &str = "/ws/alerts/";

/// Delay between a disconnection and the next connection attempt.
///
/// Fixed cadence, no backoff and no retry cap: the channel is meant to
/// recover silently from transient network blips for as long as the
/// owning process lives.
pub const RECONNECT_DELAY: Duration = Duration::from_millis(5000);

// ============================================================================
// Notifications
// ============================================================================

/// Display duration for critical-severity alert notifications.
pub const CRITICAL_NOTIFICATION_DURATION: Duration = Duration::from_secs(8);

/// Display duration for all non-critical alert notifications.
pub const STANDARD_NOTIFICATION_DURATION: Duration = Duration::from_secs(6);
