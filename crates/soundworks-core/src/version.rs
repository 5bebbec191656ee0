//! Loose semantic version parsing
//!
//! Recorded tool versions are plain semver, but dependency specs read from
//! `package.json` carry range operators (`^4.0.0`, `~1.2`, `>=4.0.0-alpha.29`).
//! Both are normalised to a [`Version`] before comparison.

use semver::Version;

use crate::error::{Error, Result};

/// Parse a version, tolerating range operators, a `v` prefix and missing components
pub fn parse_loose(input: &str) -> Result<Version> {
    let trimmed = input
        .trim()
        .trim_start_matches(['^', '~', '>', '<', '=', 'v', ' '])
        .trim();

    if let Ok(version) = Version::parse(trimmed) {
        return Ok(version);
    }

    // Pad `4` or `4.1` (optionally followed by a pre-release) to three components
    let (core, suffix) = match trimmed.find(['-', '+']) {
        Some(idx) => trimmed.split_at(idx),
        None => (trimmed, ""),
    };

    let mut parts: Vec<&str> = core.split('.').collect();
    if parts.is_empty() || parts.len() > 3 || parts.iter().any(|p| p.is_empty()) {
        return Err(Error::invalid_version(input));
    }
    while parts.len() < 3 {
        parts.push("0");
    }

    let padded = format!("{}{}", parts.join("."), suffix);
    Version::parse(&padded).map_err(|_| Error::invalid_version(input))
}

/// Whether `version` sorts strictly before `threshold`
pub fn is_older_than(version: &Version, threshold: &Version) -> bool {
    version < threshold
}

/// Whether `version` sorts strictly after `threshold`
pub fn is_newer_than(version: &Version, threshold: &Version) -> bool {
    version > threshold
}
