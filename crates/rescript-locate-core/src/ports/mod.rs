//! Port definitions for collaborators the resolver depends on.
//!
//! Ports describe what the resolver needs without tying it to a concrete
//! implementation. Implementations live in `rescript-locate-runtime`.
//!
//! # Design Rules
//!
//! - Only domain types in signatures
//! - Version semantics stay behind [`VersionComparator`]
//! - Platform package contents stay behind [`PlatformPackageLoader`]

pub mod platform_package;
pub mod version;

pub use platform_package::{BinPaths, PlatformPackageLoader};
pub use version::{VersionComparator, VersionError};

#[cfg(test)]
pub use version::MockVersionComparator;
