//! HTTP variant of the lookup: one GET against the maintainers database.

use std::time::Duration;

use super::{parse, LookupError};
use crate::config::CfindConfig;
use crate::urls;

/// Performs `GET <maintdb_url>/<encoded-package>` and returns the first
/// meaningful line of the body.
///
/// Follows redirects. Runs synchronously in the current thread.
pub(crate) fn fetch(cfg: &CfindConfig, package: &str) -> Result<String, LookupError> {
    let url = urls::lookup_url(cfg, package)?;

    let mut body: Vec<u8> = Vec::new();
    let mut easy = curl::easy::Easy::new();
    easy.url(url.as_str())?;
    easy.follow_location(true)?;
    easy.connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))?;
    easy.timeout(Duration::from_secs(cfg.timeout_secs))?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(LookupError::Http(code));
    }

    let text = String::from_utf8_lossy(&body);
    parse::first_meaningful_line(&text).ok_or(LookupError::EmptyResponse)
}
