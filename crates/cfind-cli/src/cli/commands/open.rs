//! `cfind open` – open the maintainer's profile page in the browser.

use anyhow::Result;
use cfind_core::browser::{BrowserOpener, XdgOpen};
use cfind_core::config::CfindConfig;
use cfind_core::lookup;
use cfind_core::urls;

pub fn run_open(cfg: &CfindConfig, package: &str) -> Result<()> {
    match lookup::resolve(cfg, package) {
        Ok(maintainer) if !maintainer.trim().is_empty() => {
            let url = urls::profile_url(cfg, maintainer.trim())?;
            println!("Opening {}", url);
            XdgOpen.open(url.as_str());
            Ok(())
        }
        _ => {
            println!("No maintainer found.");
            Ok(())
        }
    }
}
