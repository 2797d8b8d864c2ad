//! Thin tokio transport for fetching one Gopher menu.
//!
//! The transport owns everything the parser deliberately does not:
//! connecting, request framing (`"\r\n"` termination), splitting the
//! response into lines and stopping at the `.` terminator. Each surviving
//! line goes through a fresh [`Parser`].

use std::time::Duration;

use thiserror::Error;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::debug;

use crate::entry::Entry;
use crate::parser::Parser;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const READ_TIMEOUT: Duration = Duration::from_secs(10);
const MAX_RESPONSE_SIZE: u64 = 2 * 1024 * 1024; // 2 MiB

#[derive(Error, Debug)]
pub enum GopherError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Connection timed out")]
    Timeout,
}

pub struct GopherClient;

impl GopherClient {
    async fn send_raw(host: &str, port: u16, payload: &str) -> Result<String, GopherError> {
        let mut stream = timeout(CONNECT_TIMEOUT, TcpStream::connect(format!("{}:{}", host, port)))
            .await
            .map_err(|_| GopherError::Timeout)??;
        debug!(host = %host, port = %port, "connected");

        stream.write_all(payload.as_bytes()).await?;
        stream.shutdown().await?;

        let mut buffer = Vec::new();
        timeout(
            READ_TIMEOUT,
            (&mut stream).take(MAX_RESPONSE_SIZE).read_to_end(&mut buffer),
        )
        .await
        .map_err(|_| GopherError::Timeout)??;
        debug!(bytes = buffer.len(), "response read");

        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    /// Split a raw menu response into lines and parse each one.
    ///
    /// A lone `.` terminates the menu; empty lines carry nothing and are
    /// skipped. Every other line produces exactly one [`Entry`],
    /// malformed ones included.
    pub fn menu_entries(content: &str) -> Vec<Entry> {
        let mut entries = Vec::new();

        for line in content.lines() {
            if line == "." {
                break;
            }
            if line.is_empty() {
                continue;
            }
            entries.push(Parser::new(line).next_line());
        }

        entries
    }

    /// Request `selector` from `host:port` and parse the returned menu.
    /// An empty selector requests the root menu.
    pub async fn fetch_menu(
        host: &str,
        port: u16,
        selector: &str,
    ) -> Result<Vec<Entry>, GopherError> {
        let content = Self::send_raw(host, port, &format!("{}\r\n", selector)).await?;
        Ok(Self::menu_entries(&content))
    }
}
