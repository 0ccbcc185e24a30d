//! Realtime alert channel.
//!
//! Client side of the backend's `/ws/alerts/` push channel. The server
//! broadcasts a JSON frame for every alert lifecycle change; this module
//! keeps one connection alive for the life of the owning process and
//! dispatches `new_alert` events to a caller-supplied handler.
//!
//! # Architecture
//!
//! ```text
//!   AlertChannel::spawn(options, handler)
//!         │
//!         ▼
//!   background task: connect → message loop → 5s delay → reconnect …
//!         │                │
//!         │                └── decoder::decode_frame() per text frame
//!         │                        │ (discriminator == "new_alert")
//!         │                        ▼
//!         │                HandlerCell::dispatch(event)
//!         │
//!         └── watch channel: shutdown cancels the loop, the sleep,
//!             and any in-flight dial
//! ```

// Rust guideline compliant 2026-02

pub mod channel;
pub mod decoder;
pub mod event;
pub mod handler;

pub use channel::{AlertChannel, ChannelOptions};
pub use event::{RealtimeAlertEvent, Severity};
pub use handler::HandlerCell;
