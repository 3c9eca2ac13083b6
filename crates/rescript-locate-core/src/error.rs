//! Resolution error types.
//!
//! The public resolver contract only reports whether a binary was found.
//! These variants describe why a step failed so it can be traced and so each
//! step can decide between falling through and giving up.

use std::path::PathBuf;
use thiserror::Error;

use crate::ports::VersionError;

/// Errors that can occur while resolving a toolchain binary.
#[derive(Debug, Error)]
pub enum LocateError {
    /// No ancestor of the project root contains the toolchain package.
    #[error("No ancestor directory contains {0}")]
    ToolchainNotFound(PathBuf),

    /// A metadata file could not be read.
    #[error("Failed to read {path}: {reason}")]
    ReadFailed { path: PathBuf, reason: String },

    /// A metadata file is not valid JSON or has the wrong shape.
    #[error("Invalid JSON in {path}: {reason}")]
    InvalidJson { path: PathBuf, reason: String },

    /// A metadata file is valid but lacks a field this step needs.
    #[error("{path} has no usable `{field}` field")]
    MissingField { path: PathBuf, field: &'static str },

    /// The toolchain version could not be compared.
    #[error(transparent)]
    Version(#[from] VersionError),

    /// No platform package is published for this host.
    #[error("No platform package is published for {os}-{arch}")]
    UnsupportedPlatform { os: String, arch: String },

    /// The platform package for this host is not installed.
    #[error("Platform package not installed at {0}")]
    PlatformPackageMissing(PathBuf),

    /// The computed binary path does not exist.
    #[error("Binary not found at {0}")]
    CandidateNotFound(PathBuf),
}
