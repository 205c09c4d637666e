// src/pkgs.rs

//! Package-list input normalization.
//!
//! Step records may give packages either as a list or as a single free-form
//! string (`"git, curl wget"`). The ambiguity is resolved here, at the input
//! boundary; everything past `normalize` works with a plain `Vec<String>`.

use serde::Deserialize;

/// Packages as they appear in a step record: a list, or one string using
/// commas and/or whitespace as separators.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PackageSpec {
    Many(Vec<String>),
    One(String),
}

impl PackageSpec {
    /// Flatten the spec into an ordered list of package tokens.
    ///
    /// A list passes through unchanged (no trimming, no dedup). A string is
    /// split on commas first, each piece trimmed, then split again on
    /// internal whitespace, so `"git, curl wget"` becomes three tokens.
    /// Empty input yields an empty list, the no-op case.
    pub fn normalize(&self) -> Vec<String> {
        match self {
            PackageSpec::Many(list) => list.clone(),
            PackageSpec::One(s) => s
                .split(',')
                .map(str::trim)
                .flat_map(str::split_whitespace)
                .map(str::to_string)
                .collect(),
        }
    }
}

impl From<Vec<String>> for PackageSpec {
    fn from(list: Vec<String>) -> Self {
        PackageSpec::Many(list)
    }
}

impl From<&str> for PackageSpec {
    fn from(s: &str) -> Self {
        PackageSpec::One(s.to_string())
    }
}
