//! Probe message protocol definitions
//!
//! One JSON message per line in each direction.

use serde::{Deserialize, Serialize};

use crate::keyboard::{InvalidArgument, KeyStroke, ShortcutList};

/// Requests read from the input stream
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Request {
    /// A key press to resolve against the binding table
    Key(KeyStroke),

    /// Check one event against ad-hoc descriptors
    Check {
        event: KeyStroke,
        shortcut: ShortcutList,
    },

    /// List binding names
    Bindings,

    /// Ping to check the probe is alive
    Ping,
}

/// Responses written to the output stream, one per request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Response {
    /// The key press triggered these bindings
    Hit { bindings: Vec<String> },

    /// The key press triggered nothing
    Miss,

    /// Outcome of a `check` request
    Result { hit: bool },

    Bindings { names: Vec<String> },

    Pong,

    Error { code: String, message: String },
}

impl Response {
    /// A request line that could not be parsed
    pub fn invalid_request(err: &serde_json::Error) -> Self {
        Response::Error {
            code: "invalid_request".to_string(),
            message: err.to_string(),
        }
    }

    pub fn invalid_argument(err: &InvalidArgument) -> Self {
        Response::Error {
            code: "invalid_argument".to_string(),
            message: err.to_string(),
        }
    }
}
