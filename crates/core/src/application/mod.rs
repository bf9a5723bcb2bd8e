// Application Layer - probe → resolve → verify → launch

pub mod dispatcher;
pub mod launcher;
pub mod resolver;
pub mod shutdown;

// Re-exports
pub use dispatcher::{exit_code_for, DispatchPlan, Dispatcher};
pub use launcher::{LaunchError, Launcher};
pub use resolver::{resolve, Resolution};
pub use shutdown::{shutdown_channel, ShutdownSender, ShutdownToken};
