// Port Layer - Interfaces for external dependencies

pub mod environment_probe;
pub mod process_spawner;
pub mod reporter;

// Re-exports
pub use environment_probe::EnvironmentProbe;
pub use process_spawner::{ProcessSpawner, SpawnError};
pub use reporter::Reporter;
