//! Version comparison port.

use thiserror::Error;

/// A version string could not be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid version {version:?}: {reason}")]
pub struct VersionError {
    pub version: String,
    pub reason: String,
}

/// Answers "is `version` at least `minimum`" under semantic versioning
/// precedence (pre-releases sort before their release).
#[cfg_attr(test, mockall::automock)]
pub trait VersionComparator: Send + Sync {
    fn is_at_least(&self, version: &str, minimum: &str) -> Result<bool, VersionError>;
}
