//! Query resolver: package name -> maintainer username.
//!
//! Two deployment variants share the contract: an HTTP GET against the
//! maintainers database (default), or a local `mgarepo maintdb get`
//! invocation. Every failure path returns a `LookupError`; nothing panics.
//! The caller collapses all errors to "no maintainer found" for display,
//! but the taxonomy is kept here for logs and diagnostics.

mod cmd;
mod http;
mod parse;

use crate::config::{CfindConfig, LookupBackend};
use thiserror::Error;

/// Why a lookup produced no maintainer. Collapsed to an empty display at
/// the presentation layer; distinguished here for tracing.
#[derive(Debug, Error)]
pub enum LookupError {
    /// curl reported an error (timeout, connection refused, DNS, etc.).
    #[error("maintdb transport error: {0}")]
    Transport(#[from] curl::Error),
    /// The maintainers database answered with a non-2xx status.
    #[error("maintdb returned HTTP {0}")]
    Http(u32),
    /// The response carried no usable line.
    #[error("empty response from maintainers database")]
    EmptyResponse,
    /// `mgarepo` could not be spawned.
    #[error("failed to run mgarepo: {0}")]
    Command(#[from] std::io::Error),
    /// `mgarepo` ran but exited with a failure status.
    #[error("mgarepo exited with status {status}")]
    CommandFailed { status: i32 },
    /// The configured base URL does not parse.
    #[error("invalid maintdb URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Resolve the maintainer of `package` with the configured backend.
///
/// Returns the trimmed username on success. Never panics; empty, blank,
/// and non-ASCII package names simply flow through to the backend and
/// come back as an error if nothing matches.
pub fn resolve(cfg: &CfindConfig, package: &str) -> Result<String, LookupError> {
    let result = match cfg.backend {
        LookupBackend::Http => http::fetch(cfg, package),
        LookupBackend::Mgarepo => cmd::fetch(package),
    };
    match &result {
        Ok(id) => tracing::debug!(package, maintainer = %id, "lookup succeeded"),
        Err(err) => tracing::debug!(package, error = %err, "lookup failed"),
    }
    result
}
