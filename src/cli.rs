// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! NOTE: this expects `clap` to be built with the `derive` feature, e.g.:
//! `clap = { version = "4.5.53", features = ["derive"] }` in `Cargo.toml`.

use clap::{Parser, ValueEnum};

use crate::provider::Provider;

/// Command-line arguments for `pkgstep`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "pkgstep",
    version,
    about = "Install OS packages with the right package manager for this host.",
    long_about = None
)]
pub struct CliArgs {
    /// Packages to install. May also be given as one comma/whitespace
    /// separated string, e.g. `pkgstep "git, curl wget"`.
    #[arg(value_name = "PKGS")]
    pub packages: Vec<String>,

    /// Run a declarative step file (TOML with a [step] table) instead of
    /// taking packages from the command line.
    #[arg(long, value_name = "PATH", conflicts_with = "packages")]
    pub step: Option<String>,

    /// Force a specific package manager instead of auto-detecting from the
    /// host distribution. Not validated against the host.
    #[arg(long, value_enum, value_name = "PROVIDER")]
    pub provider: Option<Provider>,

    /// Install command timeout in seconds.
    #[arg(long, value_name = "SECS", default_value_t = 60)]
    pub timeout: u64,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `PKGSTEP_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Resolve the provider and print the install command without executing.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
