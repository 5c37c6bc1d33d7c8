use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Lookup backend: HTTP GET against the maintainers database, or a local
/// `mgarepo maintdb get` invocation (the older deployment variant).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupBackend {
    #[default]
    Http,
    Mgarepo,
}

/// Global configuration loaded from `~/.config/cfind/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CfindConfig {
    /// Base URL of the maintainers database; the package name is appended as
    /// one path segment.
    pub maintdb_url: String,
    /// Base URL of the contributor profile pages; profile pages live at
    /// `<people_url>/<identifier>.html`.
    pub people_url: String,
    /// Mail domain for contributor addresses (`<identifier>@<mail_domain>`).
    pub mail_domain: String,
    /// Lookup backend: "http" (default) or "mgarepo".
    #[serde(default)]
    pub backend: LookupBackend,
    /// Connect timeout for the HTTP lookup, in seconds.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Total timeout for the HTTP lookup, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for CfindConfig {
    fn default() -> Self {
        Self {
            maintdb_url: "http://maintdb.mageia.org".to_string(),
            people_url: "http://people.mageia.org/u".to_string(),
            mail_domain: "mageia.org".to_string(),
            backend: LookupBackend::Http,
            connect_timeout_secs: default_connect_timeout_secs(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("cfind")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<CfindConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = CfindConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: CfindConfig = toml::from_str(&data)?;
    Ok(cfg)
}
