//! Host OS and architecture, named the way the toolchain's npm packages name
//! them (`darwin`, `linux`, `win32`; `x64`, `arm64`).

use std::fmt;

/// The OS/architecture pair binaries are resolved for.
///
/// Defaults to the platform this crate was compiled for. Tests and callers
/// resolving for another machine can construct one explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HostPlatform {
    os: String,
    arch: String,
}

impl HostPlatform {
    pub fn new(os: impl Into<String>, arch: impl Into<String>) -> Self {
        Self {
            os: os.into(),
            arch: arch.into(),
        }
    }

    /// The platform this binary was built for.
    pub fn current() -> Self {
        Self::new(
            node_os_name(std::env::consts::OS),
            node_arch_name(std::env::consts::ARCH),
        )
    }

    pub fn os(&self) -> &str {
        &self.os
    }

    pub fn arch(&self) -> &str {
        &self.arch
    }

    pub fn is_arm64(&self) -> bool {
        self.arch == "arm64"
    }

    /// Subdirectory holding native binaries in the legacy layout.
    ///
    /// ARM64 builds were shipped in an architecture-qualified directory
    /// (`darwinarm64`), everything else in a plain OS directory.
    pub fn legacy_platform_dir(&self) -> String {
        if self.is_arm64() {
            format!("{}{}", self.os, self.arch)
        } else {
            self.os.clone()
        }
    }

    /// Platform package for this host, if one is published.
    pub fn target(&self) -> Option<PlatformTarget> {
        PlatformTarget::from_host(self)
    }
}

impl Default for HostPlatform {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for HostPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.os, self.arch)
    }
}

fn node_os_name(os: &str) -> &str {
    match os {
        "macos" => "darwin",
        "windows" => "win32",
        other => other,
    }
}

fn node_arch_name(arch: &str) -> &str {
    match arch {
        "x86_64" => "x64",
        "aarch64" => "arm64",
        "x86" => "ia32",
        other => other,
    }
}

/// Platform packages published for the modern layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformTarget {
    DarwinArm64,
    DarwinX64,
    LinuxArm64,
    LinuxX64,
    Win32X64,
}

impl PlatformTarget {
    pub const ALL: [Self; 5] = [
        Self::DarwinArm64,
        Self::DarwinX64,
        Self::LinuxArm64,
        Self::LinuxX64,
        Self::Win32X64,
    ];

    /// Package directory name inside the platform scope, e.g. `linux-x64`.
    pub const fn package_name(self) -> &'static str {
        match self {
            Self::DarwinArm64 => "darwin-arm64",
            Self::DarwinX64 => "darwin-x64",
            Self::LinuxArm64 => "linux-arm64",
            Self::LinuxX64 => "linux-x64",
            Self::Win32X64 => "win32-x64",
        }
    }

    pub fn from_host(host: &HostPlatform) -> Option<Self> {
        match (host.os(), host.arch()) {
            ("darwin", "arm64") => Some(Self::DarwinArm64),
            ("darwin", "x64") => Some(Self::DarwinX64),
            ("linux", "arm64") => Some(Self::LinuxArm64),
            ("linux", "x64") => Some(Self::LinuxX64),
            ("win32", "x64") => Some(Self::Win32X64),
            _ => None,
        }
    }
}

impl fmt::Display for PlatformTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.package_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_uses_node_names() {
        let host = HostPlatform::current();

        #[cfg(target_os = "macos")]
        assert_eq!(host.os(), "darwin");
        #[cfg(target_os = "windows")]
        assert_eq!(host.os(), "win32");
        #[cfg(target_os = "linux")]
        assert_eq!(host.os(), "linux");

        #[cfg(target_arch = "x86_64")]
        assert_eq!(host.arch(), "x64");
        #[cfg(target_arch = "aarch64")]
        assert_eq!(host.arch(), "arm64");
    }

    #[test]
    fn test_legacy_platform_dir_qualifies_arm64_only() {
        assert_eq!(
            HostPlatform::new("darwin", "arm64").legacy_platform_dir(),
            "darwinarm64"
        );
        assert_eq!(HostPlatform::new("linux", "x64").legacy_platform_dir(), "linux");
        assert_eq!(HostPlatform::new("win32", "ia32").legacy_platform_dir(), "win32");
    }

    #[test]
    fn test_targets_round_trip_through_host() {
        for target in PlatformTarget::ALL {
            let (os, arch) = target.package_name().split_once('-').unwrap();
            assert_eq!(HostPlatform::new(os, arch).target(), Some(target));
        }
    }

    #[test]
    fn test_unpublished_hosts_have_no_target() {
        assert_eq!(HostPlatform::new("win32", "arm64").target(), None);
        assert_eq!(HostPlatform::new("freebsd", "x64").target(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(HostPlatform::new("linux", "arm64").to_string(), "linux-arm64");
        assert_eq!(PlatformTarget::Win32X64.to_string(), "win32-x64");
    }
}
