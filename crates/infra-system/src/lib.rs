// git-release wrapper Infrastructure - System Adapters
// Implements: EnvironmentProbe, ProcessSpawner, Reporter

pub mod host_probe;
pub mod reporter;
pub mod subprocess_spawner;

pub use host_probe::HostEnvironmentProbe;
pub use reporter::{LogReporter, WorkflowCommandReporter};
pub use subprocess_spawner::SubprocessSpawner;
