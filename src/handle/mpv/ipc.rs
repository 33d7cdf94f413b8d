//! mpv JSON IPC wire format.
//!
//! mpv speaks newline-delimited JSON over its `--input-ipc-server` socket:
//! requests carry a `command` array plus a client-chosen `request_id`;
//! the player answers with reply objects (`error`/`data`/`request_id`) and
//! interleaves asynchronous event objects (`event` plus event-specific
//! fields). This module only encodes and decodes lines; socket and process
//! handling live in the adapter.

use std::io::BufRead;
use std::sync::mpsc;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// A single request line.
#[derive(Debug, Clone, Serialize)]
pub struct Request {
    pub command: Vec<Value>,
    pub request_id: u64,
}

impl Request {
    pub fn new(command: Vec<Value>, request_id: u64) -> Self {
        Self {
            command,
            request_id,
        }
    }

    /// `set_property` request, e.g. pause/unpause.
    pub fn set_property(name: &str, value: impl Into<Value>, request_id: u64) -> Self {
        Self::new(vec![json!("set_property"), json!(name), value.into()], request_id)
    }

    /// Absolute seek to `seconds`.
    pub fn seek_absolute(seconds: f64, request_id: u64) -> Self {
        Self::new(
            vec![json!("seek"), json!(seconds), json!("absolute")],
            request_id,
        )
    }

    /// Subscribe to property-change events for `name` under observer `id`.
    pub fn observe_property(id: u64, name: &str, request_id: u64) -> Self {
        Self::new(
            vec![json!("observe_property"), json!(id), json!(name)],
            request_id,
        )
    }

    /// Cancel the subscription registered under observer `id`.
    pub fn unobserve_property(id: u64, request_id: u64) -> Self {
        Self::new(vec![json!("unobserve_property"), json!(id)], request_id)
    }

    /// Ask the player to exit.
    pub fn quit(request_id: u64) -> Self {
        Self::new(vec![json!("quit")], request_id)
    }

    /// Serialize to one protocol line, newline included.
    pub fn to_line(&self) -> Result<String, serde_json::Error> {
        let mut line = serde_json::to_string(self)?;
        line.push('\n');
        Ok(line)
    }
}

/// One incoming protocol line.
///
/// Replies always carry `error`; events always carry `event`. The variants
/// are tried in that order.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Message {
    Reply(Reply),
    Event(Event),
}

/// Command acknowledgement. `error` is the literal string "success" when the
/// command was accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct Reply {
    pub error: String,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub request_id: Option<u64>,
}

impl Reply {
    pub fn is_success(&self) -> bool {
        self.error == "success"
    }
}

/// Asynchronous player event. Only the fields vdeck consumes are modeled;
/// unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Event {
    pub event: String,
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub file_error: Option<String>,
}

/// Forward decoded messages from the socket into a channel until EOF.
///
/// Runs on the adapter's reader thread. Lines that fail to decode are
/// logged and skipped rather than killing the stream. Returning drops the
/// sender, which is how the controller side learns the player went away.
pub fn read_loop<R: BufRead>(reader: R, tx: mpsc::Sender<Message>) {
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str::<Message>(&line) {
            Ok(message) => {
                if tx.send(message).is_err() {
                    break;
                }
            }
            Err(e) => {
                tracing::debug!("Skipping unparseable player message: {}", e);
            }
        }
    }
}
