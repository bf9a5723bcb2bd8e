// Host Profile - CPU architecture and OS family of the running host

use serde::Serialize;
use std::fmt;

/// CPU architecture classification
///
/// Only the 64-bit x86 family is supported. Every other identifier is kept
/// verbatim so failure messages can name it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "raw", rename_all = "snake_case")]
pub enum Architecture {
    X64,
    Other(String),
}

impl Architecture {
    /// Classify a raw architecture identifier
    ///
    /// Accepts the spellings different toolchains use for x86-64
    /// (`x86_64`, `x64`, `amd64`). 32-bit x86 and ARM are `Other`.
    pub fn classify(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "x86_64" | "x64" | "amd64" => Architecture::X64,
            _ => Architecture::Other(raw.to_string()),
        }
    }

    pub fn is_supported(&self) -> bool {
        matches!(self, Architecture::X64)
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Architecture::X64 => write!(f, "x64"),
            Architecture::Other(raw) => write!(f, "{}", raw),
        }
    }
}

/// Operating system family classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "raw", rename_all = "snake_case")]
pub enum OsFamily {
    Windows,
    Linux,
    Other(String),
}

impl OsFamily {
    /// Classify a raw OS identifier
    ///
    /// `windows` (Rust target naming), `windows_nt` (kernel type string) and
    /// `win32` (platform tag naming) all denote the Windows NT family.
    pub fn classify(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "windows" | "windows_nt" | "win32" => OsFamily::Windows,
            "linux" => OsFamily::Linux,
            _ => OsFamily::Other(raw.to_string()),
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, OsFamily::Other(_))
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OsFamily::Windows => write!(f, "windows"),
            OsFamily::Linux => write!(f, "linux"),
            OsFamily::Other(raw) => write!(f, "{}", raw),
        }
    }
}

/// Host profile, derived once per run and never mutated
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostProfile {
    architecture: Architecture,
    os_family: OsFamily,
}

impl HostProfile {
    pub fn new(architecture: Architecture, os_family: OsFamily) -> Self {
        Self {
            architecture,
            os_family,
        }
    }

    /// Build a profile from raw host identifiers
    pub fn classify(arch_id: &str, os_id: &str) -> Self {
        Self::new(Architecture::classify(arch_id), OsFamily::classify(os_id))
    }

    pub fn architecture(&self) -> &Architecture {
        &self.architecture
    }

    pub fn os_family(&self) -> &OsFamily {
        &self.os_family
    }

    /// True only for x64 on windows or linux
    pub fn is_supported(&self) -> bool {
        self.architecture.is_supported() && self.os_family.is_supported()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_architecture() {
        assert_eq!(Architecture::classify("x86_64"), Architecture::X64);
        assert_eq!(Architecture::classify("x64"), Architecture::X64);
        assert_eq!(Architecture::classify("AMD64"), Architecture::X64);

        for raw in ["x86", "ia32", "aarch64", "arm64", "arm", "riscv64", ""] {
            assert_eq!(
                Architecture::classify(raw),
                Architecture::Other(raw.to_string()),
                "{raw} must not be supported"
            );
        }
    }

    #[test]
    fn test_classify_os_family() {
        assert_eq!(OsFamily::classify("windows"), OsFamily::Windows);
        assert_eq!(OsFamily::classify("win32"), OsFamily::Windows);
        assert_eq!(OsFamily::classify("Windows_NT"), OsFamily::Windows);
        assert_eq!(OsFamily::classify("linux"), OsFamily::Linux);
        assert_eq!(
            OsFamily::classify("macos"),
            OsFamily::Other("macos".to_string())
        );
        assert!(!OsFamily::classify("freebsd").is_supported());
    }

    #[test]
    fn test_display_keeps_raw_identifier() {
        let profile = HostProfile::classify("aarch64", "darwin");
        assert_eq!(profile.architecture().to_string(), "aarch64");
        assert_eq!(profile.os_family().to_string(), "darwin");
        assert!(!profile.is_supported());
    }

    #[test]
    fn test_supported_matrix() {
        assert!(HostProfile::classify("x86_64", "linux").is_supported());
        assert!(HostProfile::classify("x86_64", "windows").is_supported());
        assert!(!HostProfile::classify("x86", "windows").is_supported());
        assert!(!HostProfile::classify("x86_64", "macos").is_supported());
    }
}
