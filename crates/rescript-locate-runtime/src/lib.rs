//! Async resolution of ReScript toolchain binaries.
//!
//! [`BinaryResolver`] walks the resolution policy:
//!
//! 1. explicit platform path
//! 2. `lib/bs/compiler-info.json` written by the build system
//! 3. the installed `rescript` package, using per-platform packages for
//!    modern releases and platform subdirectories for legacy ones
//!
//! ```no_run
//! use rescript_locate_core::{BinaryName, ResolutionRequest};
//! use rescript_locate_runtime::find_binary;
//!
//! # async fn run() {
//! let request = ResolutionRequest::new(BinaryName::Bsc).with_project_root("/work/app");
//! if let Some(bsc) = find_binary(&request).await {
//!     println!("{}", bsc.display());
//! }
//! # }
//! ```

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod metadata;
pub mod ports_impl;
mod resolver;

pub use metadata::{CompilerInfo, ToolchainPackage};
pub use ports_impl::{
    InstalledPlatformPackages, PLATFORM_BIN_DIR, PLATFORM_MODULE, SemverComparator,
};
pub use resolver::{BinaryResolver, find_binary};
