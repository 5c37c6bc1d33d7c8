//! Launching the default browser, fire-and-forget.

use std::process::{Command, Stdio};

/// Seam for the "open in browser" action so the controller can be tested
/// without spawning processes.
pub trait BrowserOpener {
    /// Open `url` in the user's browser. Must not block on the browser.
    fn open(&mut self, url: &str);
}

/// Opens URLs through the platform's `xdg-open`. The child process is not
/// waited on; launch failures are logged and swallowed.
#[derive(Debug, Default)]
pub struct XdgOpen;

impl BrowserOpener for XdgOpen {
    fn open(&mut self, url: &str) {
        match Command::new("xdg-open")
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(_) => tracing::debug!(url, "opened in browser"),
            Err(err) => tracing::warn!(url, error = %err, "failed to launch browser"),
        }
    }
}
