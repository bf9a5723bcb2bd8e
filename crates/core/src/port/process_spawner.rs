// Process Spawner Port
// Abstraction over child process creation with inherited stdio

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

use crate::application::shutdown::ShutdownToken;

/// Spawn errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpawnError {
    #[error("{0}")]
    Start(String),

    #[error("wait failed: {0}")]
    Wait(String),

    #[error("interrupted")]
    Cancelled,
}

/// Process Spawner trait
///
/// Implementations:
/// - SubprocessSpawner: real child process (infra-system)
/// - MockProcessSpawner: records calls, never touches the OS
#[async_trait]
pub trait ProcessSpawner: Send + Sync {
    /// Run `program` with `args` as discrete argv elements and wait for it
    ///
    /// stdin, stdout and stderr are inherited from the caller. No shell is
    /// involved. Returns the child's exit status.
    ///
    /// # Errors
    /// - SpawnError::Start if the process cannot be created
    /// - SpawnError::Wait if waiting on the child fails
    /// - SpawnError::Cancelled if `shutdown` fired before the child exited
    async fn run(
        &self,
        program: &Path,
        args: &[String],
        shutdown: ShutdownToken,
    ) -> Result<i32, SpawnError>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::path::PathBuf;
    use std::sync::Mutex;

    /// Mock spawner behavior
    #[derive(Debug, Clone)]
    pub enum MockBehavior {
        /// Child exits with the given status
        Exit(i32),
        /// Process creation fails with message
        FailToStart(String),
        /// Shutdown arrives while waiting
        Cancelled,
    }

    /// A recorded process creation request
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct SpawnCall {
        pub program: PathBuf,
        pub args: Vec<String>,
    }

    /// Mock Process Spawner for testing
    pub struct MockProcessSpawner {
        behavior: MockBehavior,
        calls: Mutex<Vec<SpawnCall>>,
    }

    impl MockProcessSpawner {
        pub fn new(behavior: MockBehavior) -> Self {
            Self {
                behavior,
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn exiting_with(code: i32) -> Self {
            Self::new(MockBehavior::Exit(code))
        }

        pub fn failing(message: impl Into<String>) -> Self {
            Self::new(MockBehavior::FailToStart(message.into()))
        }

        pub fn calls(&self) -> Vec<SpawnCall> {
            self.calls.lock().unwrap().clone()
        }

        pub fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl ProcessSpawner for MockProcessSpawner {
        async fn run(
            &self,
            program: &Path,
            args: &[String],
            _shutdown: ShutdownToken,
        ) -> Result<i32, SpawnError> {
            self.calls.lock().unwrap().push(SpawnCall {
                program: program.to_path_buf(),
                args: args.to_vec(),
            });

            match &self.behavior {
                MockBehavior::Exit(code) => Ok(*code),
                MockBehavior::FailToStart(msg) => Err(SpawnError::Start(msg.clone())),
                MockBehavior::Cancelled => Err(SpawnError::Cancelled),
            }
        }
    }
}
