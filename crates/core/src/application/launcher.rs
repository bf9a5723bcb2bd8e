// Process Launcher - verify, spawn, wait, surface the child's outcome

use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::application::shutdown::ShutdownToken;
use crate::domain::{BinaryTarget, LaunchArguments, LaunchOutcome};
use crate::port::{ProcessSpawner, SpawnError};

/// Launch errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LaunchError {
    #[error("file not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("failed to start {}: {cause}", .path.display())]
    SpawnFailure { path: PathBuf, cause: String },

    #[error("interrupted while waiting for {}", .path.display())]
    Cancelled { path: PathBuf },
}

/// Launches a resolved binary through the spawner port
pub struct Launcher {
    spawner: Arc<dyn ProcessSpawner>,
}

impl Launcher {
    pub fn new(spawner: Arc<dyn ProcessSpawner>) -> Self {
        Self { spawner }
    }

    /// Launch `target` with `args` and wait for it
    ///
    /// The existence check runs first, so a missing binary never reaches the
    /// spawner.
    ///
    /// # Errors
    /// - LaunchError::FileNotFound if nothing exists at the target path
    /// - LaunchError::SpawnFailure if the OS refused to start the binary
    /// - LaunchError::Cancelled if `shutdown` fired while waiting
    pub async fn launch(
        &self,
        target: &BinaryTarget,
        args: &LaunchArguments,
        shutdown: ShutdownToken,
    ) -> Result<LaunchOutcome, LaunchError> {
        let path = target.full_path();

        if !binary_exists(path).await {
            return Err(LaunchError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        if args.is_empty() {
            debug!(path = %path.display(), "Binary present, spawning without arguments");
        } else {
            debug!(path = %path.display(), argc = args.len(), "Binary present, spawning");
        }

        let exit_code = self
            .spawner
            .run(path, args.as_slice(), shutdown)
            .await
            .map_err(|e| match e {
                SpawnError::Cancelled => LaunchError::Cancelled {
                    path: path.to_path_buf(),
                },
                SpawnError::Start(cause) | SpawnError::Wait(cause) => LaunchError::SpawnFailure {
                    path: path.to_path_buf(),
                    cause,
                },
            })?;

        let outcome = LaunchOutcome::new(exit_code);
        if outcome.is_success() {
            info!(path = %path.display(), "Binary exited successfully");
        } else {
            warn!(path = %path.display(), exit_code, "Binary exited with non-zero status, forwarding");
        }

        Ok(outcome)
    }
}

// Unreadable metadata counts as missing
async fn binary_exists(path: &Path) -> bool {
    tokio::fs::try_exists(path).await.unwrap_or(false)
}
