// Domain Layer - Invocation-scoped values, no I/O

pub mod error;
pub mod host;
pub mod launch;
pub mod target;

// Re-exports
pub use error::UnsupportedEnvironment;
pub use host::{Architecture, HostProfile, OsFamily};
pub use launch::{LaunchArguments, LaunchOutcome};
pub use target::BinaryTarget;
