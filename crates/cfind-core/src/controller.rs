//! Interaction controller: the event loop behind the dialog.
//!
//! The dialog toolkit is an external collaborator reached through the
//! [`Dialog`] trait; the controller only implements the three domain
//! transitions (search, open-in-browser, close/cancel). A failed lookup
//! never escapes the loop, and the dialog is destroyed on every exit path.

use crate::browser::BrowserOpener;
use crate::config::CfindConfig;
use crate::lookup;
use crate::render;
use crate::urls;

/// Domain-relevant events delivered by the dialog toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogEvent {
    /// The search button was activated.
    Search,
    /// The "show in browser" button was activated.
    OpenInBrowser,
    /// The close button was activated.
    Close,
    /// The window was dismissed (window-manager close, Escape, EOF).
    Cancel,
}

/// The dialog surface the controller drives. Widget construction and
/// layout live behind this trait.
pub trait Dialog {
    /// Block until the next event.
    fn wait_for_event(&mut self) -> DialogEvent;
    /// Current content of the package-name input field.
    fn package_name(&mut self) -> String;
    /// Replace the rich-text output (empty string clears it).
    fn set_info(&mut self, html: &str);
    /// Release the dialog resource.
    fn destroy(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Idle,
    AwaitingEvent,
    Terminated,
}

pub struct Controller<'a, D, B> {
    cfg: &'a CfindConfig,
    dialog: D,
    browser: B,
    /// Maintainer from the most recent completed search; empty when the
    /// last search found nothing.
    maintainer: String,
    state: ControllerState,
}

impl<'a, D: Dialog, B: BrowserOpener> Controller<'a, D, B> {
    pub fn new(cfg: &'a CfindConfig, dialog: D, browser: B) -> Self {
        Self {
            cfg,
            dialog,
            browser,
            maintainer: String::new(),
            state: ControllerState::Idle,
        }
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Tear down into the dialog and browser collaborators, for callers
    /// that need to inspect or reuse them after the loop ends.
    pub fn into_parts(self) -> (D, B) {
        (self.dialog, self.browser)
    }

    /// Run the event loop until close or cancel.
    pub fn run(&mut self) {
        self.state = ControllerState::AwaitingEvent;
        loop {
            match self.dialog.wait_for_event() {
                DialogEvent::Search => self.handle_search(),
                DialogEvent::OpenInBrowser => self.handle_open(),
                DialogEvent::Close | DialogEvent::Cancel => {
                    self.dialog.destroy();
                    self.state = ControllerState::Terminated;
                    return;
                }
            }
        }
    }

    fn handle_search(&mut self) {
        let package = self.dialog.package_name();
        let result = lookup::resolve(self.cfg, &package);
        let html = render::render(self.cfg, &result);
        self.maintainer = match result {
            Ok(id) if !id.trim().is_empty() => id.trim().to_string(),
            _ => String::new(),
        };
        self.dialog.set_info(&html);
    }

    fn handle_open(&mut self) {
        if self.maintainer.trim().is_empty() {
            return;
        }
        match urls::profile_url(self.cfg, &self.maintainer) {
            Ok(url) => self.browser.open(url.as_str()),
            Err(err) => tracing::warn!(error = %err, "cannot build profile URL"),
        }
    }
}
