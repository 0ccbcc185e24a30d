//! Shared WebSocket transport.
//!
//! Thin wrapper around `tokio-tungstenite` providing type-isolated
//! reader/writer halves. The alert channel is receive-only at the
//! application level, so the writer exposes control frames (pong, close)
//! but no application-frame senders, and inbound frame kinds the alert
//! contract never uses are collapsed into a single ignorable variant.
//!
//! Centralizing the connection logic here means TLS configuration,
//! timeouts, and auth headers apply to every consumer of the transport.

// Rust guideline compliant 2026-02

use anyhow::{Context, Result};
use futures_util::{SinkExt, StreamExt};
use tokio_tungstenite::tungstenite;

/// Concrete WebSocket stream type (avoids repeating the generic everywhere).
type WsStream = tokio_tungstenite::WebSocketStream<
    tokio_tungstenite::MaybeTlsStream<tokio::net::TcpStream>,
>;

/// Inbound message, reduced to the frame kinds the alert channel reacts to.
#[derive(Debug)]
pub enum WsMessage {
    /// UTF-8 text frame; the only kind that carries alert payloads.
    Text(String),
    /// Transport ping; must be answered with a pong echoing the payload.
    Ping(Vec<u8>),
    /// Close handshake from the server, with code and reason when supplied.
    Close(Option<(u16, String)>),
    /// Frame kinds with no role in the alert contract (binary, pong).
    Ignored,
}

impl WsMessage {
    /// Reduce a raw tungstenite message to the transport surface.
    ///
    /// Mid-fragment frames are an internal detail of the codec and yield
    /// `None`; they must never reach callers.
    fn from_raw(raw: tungstenite::Message) -> Option<Self> {
        Some(match raw {
            tungstenite::Message::Text(text) => Self::Text(text),
            tungstenite::Message::Ping(payload) => Self::Ping(payload),
            tungstenite::Message::Close(frame) => {
                Self::Close(frame.map(|f| (f.code.into(), f.reason.into_owned())))
            }
            tungstenite::Message::Binary(_) | tungstenite::Message::Pong(_) => Self::Ignored,
            tungstenite::Message::Frame(_) => return None,
        })
    }
}

/// Write half of a WebSocket connection.
///
/// Only transport control frames are exposed: the client never sends
/// application frames on the alert channel.
#[derive(Debug)]
pub struct WsWriter {
    sink: futures_util::stream::SplitSink<WsStream, tungstenite::Message>,
}

impl WsWriter {
    /// Send a pong frame in response to a ping.
    ///
    /// # Errors
    ///
    /// Returns an error if the send fails (connection closed, I/O error).
    pub async fn send_pong(&mut self, data: Vec<u8>) -> Result<()> {
        self.sink
            .send(tungstenite::Message::Pong(data))
            .await
            .context("WebSocket send_pong failed")
    }

    /// Flush pending writes and close the sink.
    ///
    /// # Errors
    ///
    /// Returns an error if closing fails.
    pub async fn close(&mut self) -> Result<()> {
        self.sink.close().await.context("WebSocket close failed")
    }
}

/// Read half of a WebSocket connection.
#[derive(Debug)]
pub struct WsReader {
    stream: futures_util::stream::SplitStream<WsStream>,
}

impl WsReader {
    /// Wait for the next inbound message.
    ///
    /// Yields `None` once the underlying stream is exhausted. A transport
    /// error surfaces once; the connection should be abandoned after it.
    pub async fn recv(&mut self) -> Option<Result<WsMessage>> {
        while let Some(next) = self.stream.next().await {
            match next.context("WebSocket receive failed") {
                Ok(raw) => {
                    if let Some(message) = WsMessage::from_raw(raw) {
                        return Some(Ok(message));
                    }
                }
                Err(e) => return Some(Err(e)),
            }
        }
        None
    }
}

/// Connect to a WebSocket URL, optionally authenticating with a bearer token.
///
/// Builds the handshake request from `url`, inserts an `Authorization`
/// header when `bearer_token` is non-empty, then performs the WebSocket
/// handshake (including TLS for `wss://`). Returns split (writer, reader)
/// halves for independent use in `tokio::select!` loops.
///
/// # Errors
///
/// Returns an error if the URL is invalid, the token contains bytes that
/// are not valid in a header, or the handshake fails.
pub async fn connect(url: &str, bearer_token: Option<&str>) -> Result<(WsWriter, WsReader)> {
    use tungstenite::client::IntoClientRequest;

    let mut request = url
        .into_client_request()
        .with_context(|| format!("invalid WebSocket URL: {url}"))?;

    if let Some(token) = bearer_token.filter(|t| !t.is_empty()) {
        let value = tungstenite::http::HeaderValue::from_str(&format!("Bearer {token}"))
            .context("bearer token is not a valid header value")?;
        request
            .headers_mut()
            .insert(tungstenite::http::header::AUTHORIZATION, value);
    }

    let (ws_stream, _response) = tokio_tungstenite::connect_async(request)
        .await
        .context("WebSocket connect failed")?;

    let (sink, stream) = ws_stream.split();

    Ok((WsWriter { sink }, WsReader { stream }))
}

/// Derive the WS(S) form of a backend origin.
///
/// `https://` becomes `wss://`, `http://` becomes `ws://`; an origin
/// already carrying a WebSocket scheme is returned as-is.
#[must_use]
pub fn to_ws_origin(origin: &str) -> String {
    if let Some(host) = origin.strip_prefix("https://") {
        format!("wss://{host}")
    } else if let Some(host) = origin.strip_prefix("http://") {
        format!("ws://{host}")
    } else {
        origin.to_string()
    }
}
