//! Path utilities shared by every resolution step.
//!
//! - Lexical normalization of every path the resolver returns
//! - Upward search for the installed toolchain package
//! - Monorepo root derivation from a resolved binary path
//!
//! # Design
//!
//! - Normalization is purely lexical: no symlink resolution, no I/O
//! - The upward search only performs existence checks

mod ancestor;
mod monorepo;
mod normalize;

pub use ancestor::find_file_upwards;
pub use monorepo::{DEPENDENCY_DIR_MARKER, monorepo_root};
pub use normalize::normalize_path;
