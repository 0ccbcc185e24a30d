//! Connection manager for the realtime alert channel.
//!
//! Owns a background task that keeps exactly one WebSocket connection to
//! the backend's alert endpoint alive, reconnecting on a fixed cadence
//! after any disconnection. Errors are never fatal: a transport error
//! forces the connection closed, and the close path schedules the next
//! attempt.
//!
//! Teardown is cooperative. [`AlertChannel::shutdown`] (also fired on
//! `Drop`) flips a watch channel the loop selects against everywhere it
//! can wait (the read loop, the reconnect sleep, and the dial itself),
//! so a pending reconnect cannot resurrect a connection after teardown.

// Rust guideline compliant 2026-02

use std::time::Duration;

use tokio::sync::watch;

use crate::alerts::decoder;
use crate::alerts::event::RealtimeAlertEvent;
use crate::alerts::handler::HandlerCell;
use crate::config::Config;
use crate::constants::{ALERTS_WS_PATH, RECONNECT_DELAY};
use crate::ws;

/// Connection parameters for [`AlertChannel::spawn`].
#[derive(Debug, Clone)]
pub struct ChannelOptions {
    /// Origin of the backend (`http(s)://` or `ws(s)://` accepted).
    pub server_url: String,
    /// Bearer token sent on the handshake, if any.
    pub token: Option<String>,
    /// Delay between a disconnection and the next attempt.
    ///
    /// Defaults to [`RECONNECT_DELAY`]; overridable so tests do not wait
    /// out the full production cadence.
    pub reconnect_delay: Duration,
}

impl ChannelOptions {
    /// Options for `server_url` with the production reconnect cadence.
    #[must_use]
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
            token: None,
            reconnect_delay: RECONNECT_DELAY,
        }
    }

    /// Build options from the loaded configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let mut options = Self::new(config.server_url.clone());
        if config.has_token() {
            options.token = Some(config.get_api_key().to_string());
        }
        options
    }
}

/// Handle to the realtime alert channel.
///
/// Spawning the channel starts a background task that connects and
/// reconnects for as long as the handle lives. Dropping the handle tears
/// the channel down.
#[derive(Debug)]
pub struct AlertChannel {
    handler: HandlerCell,
    shutdown_tx: watch::Sender<bool>,
}

impl AlertChannel {
    /// Spawn the channel's background task.
    ///
    /// `handler` is invoked once per accepted `new_alert` event, on the
    /// channel task. Must be called within a tokio runtime.
    #[must_use]
    pub fn spawn<F>(options: ChannelOptions, handler: F) -> Self
    where
        F: Fn(RealtimeAlertEvent) + Send + Sync + 'static,
    {
        let handler = HandlerCell::new(handler);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        tokio::spawn(run_channel_loop(options, handler.clone(), shutdown_rx));

        Self {
            handler,
            shutdown_tx,
        }
    }

    /// Replace the alert handler without reconnecting.
    ///
    /// The connection's lifetime is independent of the handler's; the
    /// new handler sees the next dispatched event.
    pub fn set_handler<F>(&self, handler: F)
    where
        F: Fn(RealtimeAlertEvent) + Send + Sync + 'static,
    {
        self.handler.set(handler);
    }

    /// Tear down the channel.
    ///
    /// Closes the live connection if one exists and cancels any pending
    /// reconnect. Idempotent.
    pub fn shutdown(&self) {
        let _ = self.shutdown_tx.send(true);
    }
}

impl Drop for AlertChannel {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Compute the alert endpoint URL for a backend origin.
///
/// Substitutes the WS scheme for the origin's HTTP scheme and appends
/// the fixed alert path: `https://host` becomes `wss://host/ws/alerts/`.
fn alerts_ws_url(server_url: &str) -> String {
    format!(
        "{}{}",
        ws::to_ws_origin(server_url.trim_end_matches('/')),
        ALERTS_WS_PATH
    )
}

/// Why the per-connection message loop returned.
enum ChannelExit {
    /// Teardown was requested.
    Shutdown,
    /// Connection was lost -- reconnect after the fixed delay.
    Disconnected,
}

/// Main connection loop: dial, pump messages, wait, repeat.
///
/// Runs until the shutdown watch flips. Each iteration re-runs the same
/// connect path with per-connection state built fresh, so nothing
/// accumulates across reconnects.
async fn run_channel_loop(
    options: ChannelOptions,
    handler: HandlerCell,
    mut shutdown_rx: watch::Receiver<bool>,
) {
    let url = alerts_ws_url(&options.server_url);

    loop {
        if *shutdown_rx.borrow() {
            break;
        }

        log::info!("[Alerts] Connecting to {}", url);

        let dial = ws::connect(&url, options.token.as_deref());
        let connected = tokio::select! {
            result = dial => result,
            _ = shutdown_rx.changed() => break,
        };

        match connected {
            Ok((writer, reader)) => {
                log::info!("[Alerts] Alert channel connected");
                if let ChannelExit::Shutdown =
                    run_message_loop(writer, reader, &handler, &mut shutdown_rx).await
                {
                    break;
                }
                log::info!(
                    "[Alerts] Disconnected, reconnecting in {}ms",
                    options.reconnect_delay.as_millis()
                );
            }
            Err(e) => {
                log::warn!(
                    "[Alerts] Connection failed: {} (retry in {}ms)",
                    e,
                    options.reconnect_delay.as_millis()
                );
            }
        }

        tokio::select! {
            _ = tokio::time::sleep(options.reconnect_delay) => {}
            _ = shutdown_rx.changed() => break,
        }
    }

    log::info!("[Alerts] Shutdown requested, exiting channel loop");
}

/// Message loop for a single connection.
///
/// Dispatches decoded `new_alert` events, answers transport pings, and
/// returns when the connection drops or teardown is requested. A
/// transport error closes the connection first so the server sees a
/// clean close; the caller then reconnects.
async fn run_message_loop(
    mut writer: ws::WsWriter,
    mut reader: ws::WsReader,
    handler: &HandlerCell,
    shutdown_rx: &mut watch::Receiver<bool>,
) -> ChannelExit {
    loop {
        tokio::select! {
            msg = reader.recv() => match msg {
                Some(Ok(ws::WsMessage::Text(text))) => {
                    if let Some(event) = decoder::decode_frame(&text) {
                        handler.dispatch(event);
                    }
                }
                Some(Ok(ws::WsMessage::Ping(data))) => {
                    let _ = writer.send_pong(data).await;
                }
                Some(Ok(ws::WsMessage::Close(frame))) => {
                    match frame {
                        Some((code, reason)) => log::info!(
                            "[Alerts] Connection closed by server (code {code}, reason {reason:?})"
                        ),
                        None => log::info!("[Alerts] Connection closed by server"),
                    }
                    return ChannelExit::Disconnected;
                }
                Some(Ok(ws::WsMessage::Ignored)) => {}
                Some(Err(e)) => {
                    log::warn!("[Alerts] WebSocket error: {}", e);
                    let _ = writer.close().await;
                    return ChannelExit::Disconnected;
                }
                None => {
                    log::info!("[Alerts] WebSocket stream ended");
                    return ChannelExit::Disconnected;
                }
            },
            _ = shutdown_rx.changed() => {
                log::info!("[Alerts] Shutdown requested, closing connection");
                let _ = writer.close().await;
                return ChannelExit::Shutdown;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alerts_ws_url_https() {
        assert_eq!(
            alerts_ws_url("https://security.campus.edu"),
            "wss://security.campus.edu/ws/alerts/"
        );
    }

    #[test]
    fn test_alerts_ws_url_http() {
        assert_eq!(
            alerts_ws_url("http://localhost:8000"),
            "ws://localhost:8000/ws/alerts/"
        );
    }

    #[test]
    fn test_alerts_ws_url_strips_trailing_slash() {
        assert_eq!(
            alerts_ws_url("https://security.campus.edu/"),
            "wss://security.campus.edu/ws/alerts/"
        );
    }

    #[test]
    fn test_alerts_ws_url_ws_passthrough() {
        assert_eq!(
            alerts_ws_url("ws://127.0.0.1:9001"),
            "ws://127.0.0.1:9001/ws/alerts/"
        );
    }

    #[test]
    fn test_options_default_to_production_cadence() {
        let options = ChannelOptions::new("https://security.campus.edu");
        assert_eq!(options.reconnect_delay, RECONNECT_DELAY);
        assert!(options.token.is_none());
    }

    #[test]
    fn test_options_from_config() {
        let config = Config {
            server_url: "https://security.campus.edu".to_string(),
            token: "jwt".to_string(),
        };
        let options = ChannelOptions::from_config(&config);
        assert_eq!(options.server_url, "https://security.campus.edu");
        assert_eq!(options.token.as_deref(), Some("jwt"));

        let no_token = Config {
            server_url: "http://localhost:8000".to_string(),
            token: String::new(),
        };
        assert!(ChannelOptions::from_config(&no_token).token.is_none());
    }
}
