//! Version floor gate.

use semver::Version;

use crate::error::Result;

/// True when `version` is the same as or later than `major.minor.patch`.
/// A leading `v` is tolerated.
pub fn at_least(version: &str, major: u64, minor: u64, patch: u64) -> Result<bool> {
    let version = Version::parse(version.trim().trim_start_matches('v'))?;
    Ok(version >= Version::new(major, minor, patch))
}
