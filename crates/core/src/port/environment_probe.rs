// Environment probe port
// Ambient architecture/OS reads live behind this trait so every combination is testable

use crate::domain::HostProfile;

/// Host environment probe
pub trait EnvironmentProbe: Send + Sync {
    /// Raw CPU architecture identifier (e.g. `x86_64`, `aarch64`)
    fn arch_id(&self) -> String;

    /// Raw operating system identifier (e.g. `linux`, `windows`, `win32`)
    fn os_id(&self) -> String;

    /// Classify the host
    ///
    /// Pure function of the identifiers above: calling it repeatedly within a
    /// process yields identical profiles.
    fn probe(&self) -> HostProfile {
        HostProfile::classify(&self.arch_id(), &self.os_id())
    }
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Mock probe returning fixed identifiers
    pub struct MockEnvironmentProbe {
        arch: String,
        os: String,
        probe_count: AtomicUsize,
    }

    impl MockEnvironmentProbe {
        pub fn new(arch: impl Into<String>, os: impl Into<String>) -> Self {
            Self {
                arch: arch.into(),
                os: os.into(),
                probe_count: AtomicUsize::new(0),
            }
        }

        pub fn windows_x64() -> Self {
            Self::new("x86_64", "windows")
        }

        pub fn linux_x64() -> Self {
            Self::new("x86_64", "linux")
        }

        /// Number of times `probe()` was called
        pub fn probe_count(&self) -> usize {
            self.probe_count.load(Ordering::SeqCst)
        }
    }

    impl EnvironmentProbe for MockEnvironmentProbe {
        fn arch_id(&self) -> String {
            self.arch.clone()
        }

        fn os_id(&self) -> String {
            self.os.clone()
        }

        fn probe(&self) -> HostProfile {
            self.probe_count.fetch_add(1, Ordering::SeqCst);
            HostProfile::classify(&self.arch, &self.os)
        }
    }
}
