// Binary Resolver - maps a host profile to the executable under build/
// Pure path construction, never touches the filesystem

use std::path::Path;

use crate::domain::{BinaryTarget, HostProfile, OsFamily, UnsupportedEnvironment};

/// Directory (relative to the install root) holding the platform binaries
pub const BUILD_DIR: &str = "build";

/// Windows x64 binary name
pub const WINDOWS_BINARY: &str = "git-release-windows-amd64.exe";

/// Linux x64 binary name
pub const LINUX_BINARY: &str = "git-release-linux-amd64";

/// Advisory emitted whenever dispatch goes through the wrapper on Linux
pub const LINUX_ADVISORY: &str =
    "Executing this action via wrapper is not recommended on Linux runner!";

/// Resolved target plus the advisory the caller must emit, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub target: BinaryTarget,
    pub advisory: Option<&'static str>,
}

/// Resolve the binary for `profile` under `install_dir`
///
/// Architecture is checked first: an unsupported CPU fails regardless of OS.
///
/// # Errors
/// - UnsupportedEnvironment::Architecture for anything but x64
/// - UnsupportedEnvironment::OperatingSystem for anything but windows/linux
pub fn resolve(
    profile: &HostProfile,
    install_dir: &Path,
) -> Result<Resolution, UnsupportedEnvironment> {
    if !profile.architecture().is_supported() {
        return Err(UnsupportedEnvironment::Architecture(
            profile.architecture().to_string(),
        ));
    }

    let (file_name, advisory) = match profile.os_family() {
        OsFamily::Windows => (WINDOWS_BINARY, None),
        OsFamily::Linux => (LINUX_BINARY, Some(LINUX_ADVISORY)),
        OsFamily::Other(raw) => {
            return Err(UnsupportedEnvironment::OperatingSystem(raw.clone()));
        }
    };

    let full_path = install_dir.join(BUILD_DIR).join(file_name);

    Ok(Resolution {
        target: BinaryTarget::new(file_name, full_path),
        advisory,
    })
}
