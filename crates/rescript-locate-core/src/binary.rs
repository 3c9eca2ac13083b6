//! The executables shipped by the ReScript toolchain.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A binary that can be requested from the toolchain.
///
/// Every variant except [`BinaryName::Rescript`] is a native executable.
/// Native executables of one installation always live in the same directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryName {
    /// `bsc.exe`, the compiler core.
    Bsc,
    /// `rescript-editor-analysis.exe`, used by editor integrations.
    EditorAnalysis,
    /// `rescript-tools.exe`, doc extraction and misc tooling.
    Tools,
    /// `rewatch.exe`, the incremental build watcher before it was renamed.
    Rewatch,
    /// `rescript.exe`, the native build system.
    RescriptExe,
    /// `rescript`, the JS wrapper script declared in the package `bin` field.
    Rescript,
}

impl BinaryName {
    /// All known binaries, natives first.
    pub const ALL: [Self; 6] = [
        Self::Bsc,
        Self::EditorAnalysis,
        Self::Tools,
        Self::Rewatch,
        Self::RescriptExe,
        Self::Rescript,
    ];

    /// File name on disk, identical on every platform.
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Bsc => "bsc.exe",
            Self::EditorAnalysis => "rescript-editor-analysis.exe",
            Self::Tools => "rescript-tools.exe",
            Self::Rewatch => "rewatch.exe",
            Self::RescriptExe => "rescript.exe",
            Self::Rescript => "rescript",
        }
    }

    /// Whether this is a native executable rather than the wrapper script.
    pub const fn is_native(self) -> bool {
        !matches!(self, Self::Rescript)
    }

    /// Whether this is the compiler core.
    pub const fn is_compiler(self) -> bool {
        matches!(self, Self::Bsc)
    }

    /// Key of this binary in a platform package's `binPaths` export.
    ///
    /// The watcher was folded into `rescript.exe` when platform packages were
    /// introduced, so both watcher names share a key. The wrapper script is
    /// not part of platform packages.
    pub const fn bin_paths_key(self) -> Option<&'static str> {
        match self {
            Self::Bsc => Some("bsc_exe"),
            Self::EditorAnalysis => Some("rescript_editor_analysis_exe"),
            Self::Tools => Some("rescript_tools_exe"),
            Self::Rewatch | Self::RescriptExe => Some("rescript_exe"),
            Self::Rescript => None,
        }
    }
}

impl fmt::Display for BinaryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Returned when parsing a name that is not a toolchain binary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown ReScript binary `{0}` (expected one of: bsc.exe, rescript-editor-analysis.exe, rescript-tools.exe, rewatch.exe, rescript.exe, rescript)")]
pub struct UnknownBinaryError(pub String);

impl FromStr for BinaryName {
    type Err = UnknownBinaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|binary| binary.file_name() == s)
            .ok_or_else(|| UnknownBinaryError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_wrapper_script_is_not_native() {
        let non_native: Vec<_> = BinaryName::ALL
            .into_iter()
            .filter(|b| !b.is_native())
            .collect();
        assert_eq!(non_native, vec![BinaryName::Rescript]);
    }

    #[test]
    fn test_every_native_binary_has_bin_paths_key() {
        for binary in BinaryName::ALL {
            assert_eq!(binary.bin_paths_key().is_some(), binary.is_native(), "{binary}");
        }
    }

    #[test]
    fn test_parse_accepts_file_names() {
        for binary in BinaryName::ALL {
            assert_eq!(binary.file_name().parse::<BinaryName>(), Ok(binary));
        }
    }

    #[test]
    fn test_parse_rejects_unknown_names() {
        let err = "bsc".parse::<BinaryName>().unwrap_err();
        assert_eq!(err, UnknownBinaryError("bsc".to_string()));
        assert!(err.to_string().contains("bsc.exe"));
    }

    #[test]
    fn test_display_is_file_name() {
        assert_eq!(BinaryName::EditorAnalysis.to_string(), "rescript-editor-analysis.exe");
    }
}
