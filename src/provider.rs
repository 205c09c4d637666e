// src/provider.rs

//! Package-manager providers: host resolution and command construction.
//!
//! The provider set is a closed enum so that adding one is a single variant
//! plus a new match arm, with exhaustiveness checked by the compiler instead
//! of string comparisons scattered through the handler.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::Deserialize;

use crate::errors::{PkgstepError, Result};

/// A supported OS package manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Yum,
    Dnf,
    Apt,
    Pkg,
    Apk,
    Pacman,
}

/// A fully assembled installer invocation.
///
/// `line` is handed to the shell as-is; package tokens are joined with single
/// spaces and never quoted, so callers must supply shell-safe names.
/// `env` is an overlay applied on top of a copy of the inherited environment
/// of the child process only; the ambient process environment is untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallCommand {
    pub line: String,
    pub env: Option<Vec<(String, String)>>,
}

impl Provider {
    /// Map a host distribution id/version onto a provider.
    ///
    /// Rules are evaluated in priority order; the first match wins. Version
    /// comparison is an exact string match ("7" vs "8"), mirroring how the
    /// distributions report themselves.
    pub fn resolve(id: &str, version: &str) -> Result<Provider> {
        let provider = match (id, version) {
            ("centos" | "rhel", "7") => Provider::Yum,
            ("fedora", _) | ("centos" | "rhel", "8") => Provider::Dnf,
            ("debian" | "ubuntu", _) => Provider::Apt,
            ("freebsd", _) => Provider::Pkg,
            ("alpine", _) => Provider::Apk,
            ("arch", _) => Provider::Pacman,
            _ => {
                return Err(PkgstepError::UnsupportedHost {
                    id: id.to_string(),
                    version: version.to_string(),
                });
            }
        };
        Ok(provider)
    }

    /// Fixed non-interactive installer invocation prefix.
    pub fn command_prefix(&self) -> &'static str {
        match self {
            // skip_missing_names_on_install: yum otherwise returns 0 when a
            // named package does not exist, and we want an error.
            Provider::Yum => "sudo yum install -y --setopt=skip_missing_names_on_install=False",
            Provider::Dnf => "sudo dnf -y install",
            Provider::Apt => "sudo apt install --no-install-recommends -y",
            Provider::Pkg => "sudo pkg install -y",
            Provider::Apk => "sudo apk add",
            Provider::Pacman => "sudo pacman -S --needed --noconfirm --overwrite '*'",
        }
    }

    /// Environment overlay required by the provider, if any.
    ///
    /// Only apt needs one (`DEBIAN_FRONTEND=noninteractive`); the others run
    /// with the inherited environment unchanged.
    pub fn env_overlay(&self) -> Option<Vec<(String, String)>> {
        match self {
            Provider::Apt => Some(vec![(
                "DEBIAN_FRONTEND".to_string(),
                "noninteractive".to_string(),
            )]),
            _ => None,
        }
    }

    /// Assemble the full command line for the given package tokens.
    pub fn build_command(&self, packages: &[String]) -> InstallCommand {
        let line = format!("{} {}", self.command_prefix(), packages.join(" "));
        InstallCommand {
            line,
            env: self.env_overlay(),
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Provider::Yum => "yum",
            Provider::Dnf => "dnf",
            Provider::Apt => "apt",
            Provider::Pkg => "pkg",
            Provider::Apk => "apk",
            Provider::Pacman => "pacman",
        };
        f.write_str(s)
    }
}

impl FromStr for Provider {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "yum" => Ok(Provider::Yum),
            "dnf" => Ok(Provider::Dnf),
            "apt" => Ok(Provider::Apt),
            "pkg" => Ok(Provider::Pkg),
            "apk" => Ok(Provider::Apk),
            "pacman" => Ok(Provider::Pacman),
            other => Err(format!(
                "invalid provider: {other} (expected one of yum, dnf, apt, pkg, apk, pacman)"
            )),
        }
    }
}
