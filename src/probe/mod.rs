//! Shortcut probe: resolves key presses against a binding table
//!
//! Reads newline-delimited JSON requests and answers each with exactly one
//! JSON response line. A malformed line gets an error response; the loop
//! only ends when the input does.

mod bindings;
mod protocol;

pub use bindings::BindingTable;
pub use protocol::{Request, Response};

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

use crate::keyboard::is_shortcut_hit;

pub struct Probe {
    bindings: BindingTable,
}

impl Probe {
    pub fn new(bindings: BindingTable) -> Self {
        Self { bindings }
    }

    pub fn bindings(&self) -> &BindingTable {
        &self.bindings
    }

    /// Answer requests from `reader` on `writer` until end of input
    pub async fn serve<R, W>(&self, reader: R, mut writer: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();

        while let Some(line) = lines.next_line().await.context("failed to read request")? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let response = self.handle_line(line);
            Self::send_message(&mut writer, &response).await?;
        }

        debug!("input closed");
        Ok(())
    }

    /// Parse and answer a single request line
    pub fn handle_line(&self, line: &str) -> Response {
        match serde_json::from_str::<Request>(line) {
            Ok(request) => {
                debug!(?request, "received request");
                self.process_request(request)
            }
            Err(e) => {
                warn!(error = %e, "malformed request");
                Response::invalid_request(&e)
            }
        }
    }

    fn process_request(&self, request: Request) -> Response {
        match request {
            Request::Ping => Response::Pong,

            Request::Bindings => Response::Bindings {
                names: self.bindings.names().map(str::to_string).collect(),
            },

            Request::Key(stroke) => match self.bindings.matching(&stroke) {
                Ok(names) if names.is_empty() => Response::Miss,
                Ok(names) => {
                    info!(key = %stroke.key, modifiers = %stroke.modifiers, bindings = ?names, "binding hit");
                    Response::Hit {
                        bindings: names.into_iter().map(str::to_string).collect(),
                    }
                }
                Err(e) => Response::invalid_argument(&e),
            },

            Request::Check { event, shortcut } => match is_shortcut_hit(&event, &shortcut) {
                Ok(hit) => Response::Result { hit },
                Err(e) => Response::invalid_argument(&e),
            },
        }
    }

    /// Send one JSON message followed by a newline
    async fn send_message<W, T>(writer: &mut W, msg: &T) -> Result<()>
    where
        W: AsyncWrite + Unpin,
        T: serde::Serialize,
    {
        let mut bytes = serde_json::to_vec(msg)?;
        bytes.push(b'\n');

        writer.write_all(&bytes).await?;
        writer.flush().await?;

        Ok(())
    }
}
