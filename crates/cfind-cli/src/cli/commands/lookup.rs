//! `cfind lookup` – print the maintainer username of a package.

use anyhow::Result;
use cfind_core::config::CfindConfig;
use cfind_core::lookup;

pub fn run_lookup(cfg: &CfindConfig, package: &str) -> Result<()> {
    match lookup::resolve(cfg, package) {
        Ok(maintainer) if !maintainer.trim().is_empty() => {
            println!("{}", maintainer.trim());
            Ok(())
        }
        other => {
            if let Err(err) = other {
                tracing::debug!(package, error = %err, "lookup collapsed to not-found");
            }
            println!("No maintainer found.");
            std::process::exit(1);
        }
    }
}
