// Host environment probe
// reason: compile-time target constants are the identifiers of the running process

use release_wrapper_core::port::EnvironmentProbe;

/// Reads the architecture and OS the wrapper itself was built for
#[derive(Debug, Default, Clone, Copy)]
pub struct HostEnvironmentProbe;

impl EnvironmentProbe for HostEnvironmentProbe {
    fn arch_id(&self) -> String {
        std::env::consts::ARCH.to_string()
    }

    fn os_id(&self) -> String {
        std::env::consts::OS.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_is_deterministic() {
        let probe = HostEnvironmentProbe;
        assert_eq!(probe.probe(), probe.probe());
    }

    #[cfg(all(target_arch = "x86_64", target_os = "linux"))]
    #[test]
    fn test_linux_x64_host_is_supported() {
        use release_wrapper_core::domain::{Architecture, OsFamily};

        let profile = HostEnvironmentProbe.probe();
        assert_eq!(profile.architecture(), &Architecture::X64);
        assert_eq!(profile.os_family(), &OsFamily::Linux);
    }

    #[cfg(target_arch = "aarch64")]
    #[test]
    fn test_arm_host_is_unsupported() {
        let profile = HostEnvironmentProbe.probe();
        assert!(!profile.architecture().is_supported());
        assert_eq!(profile.architecture().to_string(), "aarch64");
    }
}
