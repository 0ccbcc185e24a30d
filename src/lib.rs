//! Campuswatch - realtime security alert listener.
//!
//! This crate provides the client side of the campus security dashboard's
//! realtime alert channel: a persistent WebSocket connection to the
//! monitoring backend that surfaces `new_alert` events as notification
//! directives, recovering silently from any disconnection.
//!
//! # Architecture
//!
//! ```text
//!   AlertChannel (background task)
//!       │ owns the single live WebSocket
//!       │
//!       ├── ws        - transport wrapper (connect, split halves)
//!       ├── decoder   - frame → RealtimeAlertEvent, discriminator filter
//!       └── HandlerCell - swappable dispatch slot
//!               │
//!               ▼
//!       caller-supplied handler → AlertNotification directive
//! ```
//!
//! # Modules
//!
//! - [`alerts`] - channel lifecycle, wire model, decoding, dispatch
//! - [`notifications`] - severity → notification style mapping
//! - [`config`] - configuration loading/saving
//! - [`ws`] - shared WebSocket transport

// Rust guideline compliant 2026-02

// Library modules
pub mod alerts;
pub mod config;
pub mod constants;
pub mod env;
pub mod notifications;
pub mod ws;

// Re-export commonly used types
pub use alerts::{AlertChannel, ChannelOptions, RealtimeAlertEvent, Severity};
pub use config::Config;
pub use notifications::{AlertNotification, NotificationStyle};
