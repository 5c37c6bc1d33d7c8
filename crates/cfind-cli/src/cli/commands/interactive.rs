//! `cfind interactive` – console dialog driving the controller loop.
//!
//! A line-oriented stand-in for the widget dialog: `search <package>` fills
//! the input field and triggers a search, `open` triggers the browser
//! action, `quit` closes. EOF counts as cancel.

use anyhow::Result;
use cfind_core::browser::XdgOpen;
use cfind_core::config::CfindConfig;
use cfind_core::controller::{Controller, Dialog, DialogEvent};
use std::io::{self, BufRead, Write};

struct ConsoleDialog {
    package: String,
}

impl ConsoleDialog {
    fn new() -> Self {
        Self {
            package: String::new(),
        }
    }
}

impl Dialog for ConsoleDialog {
    fn wait_for_event(&mut self) -> DialogEvent {
        let stdin = io::stdin();
        loop {
            print!("cfind> ");
            let _ = io::stdout().flush();

            let mut line = String::new();
            match stdin.lock().read_line(&mut line) {
                Ok(0) | Err(_) => return DialogEvent::Cancel,
                Ok(_) => {}
            }
            let line = line.trim();

            if let Some(package) = line.strip_prefix("search ") {
                self.package = package.trim().to_string();
                return DialogEvent::Search;
            }
            match line {
                "open" => return DialogEvent::OpenInBrowser,
                "quit" | "close" => return DialogEvent::Close,
                "" => continue,
                _ => println!("commands: search <package>, open, quit"),
            }
        }
    }

    fn package_name(&mut self) -> String {
        self.package.clone()
    }

    fn set_info(&mut self, html: &str) {
        if html.is_empty() {
            println!("No maintainer found.");
        } else {
            println!("{}", html);
        }
    }

    fn destroy(&mut self) {
        // Nothing to release for the console surface.
    }
}

pub fn run_interactive(cfg: &CfindConfig) -> Result<()> {
    let mut controller = Controller::new(cfg, ConsoleDialog::new(), XdgOpen);
    controller.run();
    Ok(())
}
