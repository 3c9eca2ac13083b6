//! Port implementations for the core crate's traits.
//!
//! - [`SemverComparator`] implements `VersionComparator` with the `semver` crate
//! - [`InstalledPlatformPackages`] implements `PlatformPackageLoader` against
//!   packages installed in `node_modules`

mod platform_package;
mod version;

pub use platform_package::{InstalledPlatformPackages, PLATFORM_BIN_DIR, PLATFORM_MODULE};
pub use version::SemverComparator;
