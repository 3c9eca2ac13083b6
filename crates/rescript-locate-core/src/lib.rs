//! Core domain for locating ReScript toolchain binaries.
//!
//! This crate holds everything that does not need an async runtime:
//!
//! - [`BinaryName`] - the closed set of toolchain executables
//! - [`HostPlatform`] / [`PlatformTarget`] - OS and architecture naming as
//!   used by the toolchain's npm packages
//! - [`ToolchainLayout`] - where the toolchain keeps its files, and which
//!   layout generation a given version uses
//! - [`paths`] - lexical normalization, the upward file search and the
//!   monorepo root derivation
//! - [`ports`] - version comparison and platform package loading, implemented
//!   by `rescript-locate-runtime`
//!
//! The resolver itself lives in `rescript-locate-runtime`.

#![deny(unused_crate_dependencies)]

pub mod binary;
pub mod error;
pub mod layout;
pub mod paths;
pub mod platform;
pub mod ports;
pub mod request;

pub use binary::{BinaryName, UnknownBinaryError};
pub use error::LocateError;
pub use layout::{
    DEFAULT_COMPILER_INFO, DEFAULT_MODERN_LAYOUT_THRESHOLD, DEFAULT_PACKAGE_DIR,
    DEFAULT_PLATFORM_SCOPE, LayoutGeneration, ToolchainLayout,
};
pub use paths::{find_file_upwards, monorepo_root, normalize_path};
pub use platform::{HostPlatform, PlatformTarget};
pub use ports::{BinPaths, PlatformPackageLoader, VersionComparator, VersionError};
pub use request::ResolutionRequest;
