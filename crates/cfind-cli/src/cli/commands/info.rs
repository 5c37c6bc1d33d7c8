//! `cfind info` – print the rich-text fragment for a package's maintainer.

use anyhow::Result;
use cfind_core::config::CfindConfig;
use cfind_core::lookup;
use cfind_core::render;

pub fn run_info(cfg: &CfindConfig, package: &str) -> Result<()> {
    let result = lookup::resolve(cfg, package);
    let out = render::render(cfg, &result);
    // Empty output means no maintainer; the fragment is all there is.
    println!("{}", out);
    Ok(())
}
