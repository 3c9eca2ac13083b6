//! Semantic version comparison.

use rescript_locate_core::{VersionComparator, VersionError};
use semver::{BuildMetadata, Version};

/// Compares versions by semver precedence.
///
/// Accepts the leading `v` or `=` npm tolerates and ignores build metadata,
/// which has no bearing on precedence.
#[derive(Debug, Clone, Copy, Default)]
pub struct SemverComparator;

impl SemverComparator {
    pub const fn new() -> Self {
        Self
    }
}

impl VersionComparator for SemverComparator {
    fn is_at_least(&self, version: &str, minimum: &str) -> Result<bool, VersionError> {
        Ok(parse(version)? >= parse(minimum)?)
    }
}

fn parse(raw: &str) -> Result<Version, VersionError> {
    let trimmed = raw.trim().trim_start_matches(['v', '=']);
    let mut version = Version::parse(trimmed).map_err(|e| VersionError {
        version: raw.to_string(),
        reason: e.to_string(),
    })?;
    version.build = BuildMetadata::EMPTY;
    Ok(version)
}
