//! CLI for the cfind maintainer finder.

mod commands;

use anyhow::Result;
use cfind_core::config::{self, CfindConfig, LookupBackend};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use commands::{run_completions, run_info, run_interactive, run_lookup, run_open};

/// Top-level CLI for the cfind maintainer finder.
#[derive(Debug, Parser)]
#[command(name = "cfind")]
#[command(about = "cfind: find the maintainer of a Mageia package", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Lookup backend override for a single invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BackendArg {
    /// HTTP GET against the maintainers database.
    Http,
    /// Local `mgarepo maintdb get` invocation.
    Mgarepo,
}

impl From<BackendArg> for LookupBackend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Http => LookupBackend::Http,
            BackendArg::Mgarepo => LookupBackend::Mgarepo,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Look up the maintainer of a package and print the username.
    Lookup {
        /// Name of the package.
        package: String,
        /// Override the configured lookup backend.
        #[arg(long, value_enum)]
        backend: Option<BackendArg>,
    },

    /// Print the rich-text fragment with profile and mail links.
    Info {
        /// Name of the package.
        package: String,
        /// Override the configured lookup backend.
        #[arg(long, value_enum)]
        backend: Option<BackendArg>,
    },

    /// Look up a package and open the maintainer's profile page in the
    /// default browser.
    Open {
        /// Name of the package.
        package: String,
        /// Override the configured lookup backend.
        #[arg(long, value_enum)]
        backend: Option<BackendArg>,
    },

    /// Run the interactive console dialog (search <package>, open, quit).
    Interactive {
        /// Override the configured lookup backend.
        #[arg(long, value_enum)]
        backend: Option<BackendArg>,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Lookup { package, backend } => {
                run_lookup(&with_backend(cfg, backend), &package)
            }
            CliCommand::Info { package, backend } => {
                run_info(&with_backend(cfg, backend), &package)
            }
            CliCommand::Open { package, backend } => {
                run_open(&with_backend(cfg, backend), &package)
            }
            CliCommand::Interactive { backend } => run_interactive(&with_backend(cfg, backend)),
            CliCommand::Completions { shell } => {
                run_completions(shell);
                Ok(())
            }
        }
    }
}

fn with_backend(mut cfg: CfindConfig, backend: Option<BackendArg>) -> CfindConfig {
    if let Some(backend) = backend {
        cfg.backend = backend.into();
    }
    cfg
}

#[cfg(test)]
mod tests;
