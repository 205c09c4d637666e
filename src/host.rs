// src/host.rs

//! Host distribution identity.
//!
//! The provider resolver only ever needs two strings from the host: the
//! distribution id and its version. `HostIdentity` keeps that seam narrow so
//! tests can substitute a fake without touching real OS state.

use std::fs;
use std::path::Path;

use crate::errors::Result;

/// Read-only view of the running distribution.
pub trait HostIdentity {
    /// Lowercase distribution id, e.g. "ubuntu", "centos", "arch".
    fn id(&self) -> &str;

    /// Distribution version as reported by the OS, e.g. "7", "22.04".
    fn version(&self) -> &str;
}

/// Host identity read from `/etc/os-release`.
#[derive(Debug, Clone)]
pub struct OsRelease {
    id: String,
    version: String,
}

impl OsRelease {
    /// Detect the running distribution from `/etc/os-release`.
    pub fn detect() -> Result<OsRelease> {
        Self::from_path("/etc/os-release")
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<OsRelease> {
        let contents = fs::read_to_string(path)?;
        Ok(Self::parse(&contents))
    }

    /// Parse os-release key/value lines, keeping `ID` and `VERSION_ID`.
    ///
    /// Values may be quoted (`ID="centos"`); quotes are stripped and the id
    /// lowercased. Missing keys leave empty strings, which the resolver then
    /// reports as an unsupported host.
    pub fn parse(contents: &str) -> OsRelease {
        let mut id = String::new();
        let mut version = String::new();

        for line in contents.lines() {
            let line = line.trim();
            if let Some(value) = line.strip_prefix("ID=") {
                id = unquote(value).to_lowercase();
            } else if let Some(value) = line.strip_prefix("VERSION_ID=") {
                version = unquote(value).to_string();
            }
        }

        OsRelease { id, version }
    }
}

impl HostIdentity for OsRelease {
    fn id(&self) -> &str {
        &self.id
    }

    fn version(&self) -> &str {
        &self.version
    }
}

fn unquote(value: &str) -> &str {
    value
        .trim()
        .trim_matches('"')
        .trim_matches('\'')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_quoted_centos_release() {
        let contents = r#"
NAME="CentOS Linux"
VERSION="7 (Core)"
ID="centos"
VERSION_ID="7"
"#;
        let host = OsRelease::parse(contents);
        assert_eq!(host.id(), "centos");
        assert_eq!(host.version(), "7");
    }

    #[test]
    fn parses_unquoted_alpine_release() {
        let contents = "ID=alpine\nVERSION_ID=3.19.1\n";
        let host = OsRelease::parse(contents);
        assert_eq!(host.id(), "alpine");
        assert_eq!(host.version(), "3.19.1");
    }

    #[test]
    fn missing_keys_leave_empty_identity() {
        let host = OsRelease::parse("NAME=Something\n");
        assert_eq!(host.id(), "");
        assert_eq!(host.version(), "");
    }

    #[test]
    fn id_is_lowercased() {
        let host = OsRelease::parse("ID=Ubuntu\nVERSION_ID=22.04\n");
        assert_eq!(host.id(), "ubuntu");
    }
}
