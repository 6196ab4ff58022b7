//! Error types for the Jira client
//!
//! Three classes of failure surface from this crate: transport problems
//! (network failures and non-success HTTP statuses), malformed response
//! payloads, and local filesystem failures around downloads and uploads.
//! Nothing is retried or recovered locally; every error propagates to the
//! caller unchanged.

use std::io;
use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The request never completed: connection, TLS, or protocol failure.
  #[error("transport error: {0}")]
  Transport(#[from] reqwest::Error),

  /// The server answered with a status this client does not accept.
  #[error("unexpected HTTP status {status} from {url}: {body}")]
  UnexpectedStatus {
    status: StatusCode,
    url: String,
    body: String,
  },

  /// The response body could not be decoded into the expected shape.
  #[error("failed to parse response: {0}")]
  Parse(String),

  /// A local file could not be read, written, or created.
  #[error("filesystem error at {path}: {source}")]
  Filesystem {
    path: PathBuf,
    #[source]
    source: io::Error,
  },
}

pub type Result<T> = std::result::Result<T, Error>;
