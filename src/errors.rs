// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PkgstepError {
    /// No provider mapping exists for this distribution/version and no
    /// override was supplied. Fatal; never retried here.
    #[error("no package manager provider known for host '{id}' version '{version}'")]
    UnsupportedHost { id: String, version: String },

    /// The command could not be launched at all (e.g. missing shell).
    /// Distinct from a nonzero exit, which is reported as a result value.
    #[error("failed to start command '{command}': {source}")]
    ProcessStart {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, PkgstepError>;
