// Subprocess spawner implementation
// reason: tokio process so the wait can race the shutdown token; nix for SIGTERM on unix
use async_trait::async_trait;
use std::path::Path;
use std::process::{ExitStatus, Stdio};
use std::time::Duration;
use tokio::process::{Child, Command};
use tracing::{info, warn};

use release_wrapper_core::application::shutdown::ShutdownToken;
use release_wrapper_core::port::process_spawner::{ProcessSpawner, SpawnError};

/// Grace period between SIGTERM and SIGKILL when the wrapper is interrupted
pub const DEFAULT_GRACE_PERIOD: Duration = Duration::from_secs(5);

/// Exit status reported when the platform gives neither a code nor a signal
const UNKNOWN_EXIT_CODE: i32 = 1;

/// Subprocess spawner
///
/// Runs the child with fully inherited stdio and no shell. Arguments reach
/// the child exactly as given, one argv element per token.
pub struct SubprocessSpawner {
    grace_period: Duration,
}

impl SubprocessSpawner {
    /// Create a new subprocess spawner
    ///
    /// # Arguments
    /// * `grace_period` - How long an interrupted child gets to exit after SIGTERM
    pub fn new(grace_period: Duration) -> Self {
        Self { grace_period }
    }

    fn spawn(&self, program: &Path, args: &[String]) -> Result<Child, SpawnError> {
        Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| SpawnError::Start(e.to_string()))
    }

    /// Terminate with SIGTERM first, then SIGKILL after the grace period
    async fn terminate(&self, child: &mut Child) {
        #[cfg(unix)]
        {
            use nix::sys::signal::{kill, Signal};
            use nix::unistd::Pid;

            if let Some(pid) = child.id() {
                info!(pid = %pid, "Forwarding SIGTERM to child");
                if let Err(e) = kill(Pid::from_raw(pid as i32), Signal::SIGTERM) {
                    warn!(pid = %pid, error = %e, "SIGTERM failed");
                }

                match tokio::time::timeout(self.grace_period, child.wait()).await {
                    Ok(Ok(status)) => {
                        info!(pid = %pid, exit_code = exit_code_of(status), "Child exited after SIGTERM");
                        return;
                    }
                    Ok(Err(e)) => warn!(pid = %pid, error = %e, "Wait after SIGTERM failed"),
                    Err(_) => warn!(pid = %pid, "Child did not exit after SIGTERM, sending SIGKILL"),
                }
            }
        }

        // Windows has no graceful signal for console children; force kill
        if let Err(e) = child.kill().await {
            warn!(error = %e, "Failed to kill child");
        }
    }
}

impl Default for SubprocessSpawner {
    fn default() -> Self {
        Self::new(DEFAULT_GRACE_PERIOD)
    }
}

#[async_trait]
impl ProcessSpawner for SubprocessSpawner {
    async fn run(
        &self,
        program: &Path,
        args: &[String],
        mut shutdown: ShutdownToken,
    ) -> Result<i32, SpawnError> {
        if shutdown.is_shutdown() {
            warn!(program = %program.display(), "Shutdown already requested, not spawning");
            return Err(SpawnError::Cancelled);
        }

        let mut child = self.spawn(program, args)?;

        info!(
            program = %program.display(),
            pid = ?child.id(),
            argc = args.len(),
            "Child process started"
        );

        let waited = tokio::select! {
            status = child.wait() => Some(status),
            _ = shutdown.wait() => None,
        };

        match waited {
            Some(Ok(status)) => Ok(exit_code_of(status)),
            Some(Err(e)) => Err(SpawnError::Wait(e.to_string())),
            None => {
                warn!(program = %program.display(), "Shutdown requested while child running");
                self.terminate(&mut child).await;
                Err(SpawnError::Cancelled)
            }
        }
    }
}

/// Map an exit status to a process exit code
///
/// On unix a child killed by signal N maps to 128 + N, as shells report it.
pub fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;

        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    UNKNOWN_EXIT_CODE
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use release_wrapper_core::application::shutdown::shutdown_channel;
    use std::path::PathBuf;

    fn sh() -> PathBuf {
        PathBuf::from("/bin/sh")
    }

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_exit_code_forwarded() {
        let spawner = SubprocessSpawner::default();

        let code = spawner
            .run(&sh(), &args(&["-c", "exit 3"]), ShutdownToken::never())
            .await
            .unwrap();

        assert_eq!(code, 3);
    }

    #[tokio::test]
    async fn test_arguments_are_not_word_split() {
        let spawner = SubprocessSpawner::default();

        // $# counts argv after $0; a single token with spaces must stay one argument
        let code = spawner
            .run(
                &sh(),
                &args(&["-c", "exit $#", "sh", "--foo bar; exit 9"]),
                ShutdownToken::never(),
            )
            .await
            .unwrap();

        assert_eq!(code, 1);
    }

    #[tokio::test]
    async fn test_missing_program_is_start_error() {
        let spawner = SubprocessSpawner::default();

        let err = spawner
            .run(
                Path::new("/nonexistent/git-release-linux-amd64"),
                &[],
                ShutdownToken::never(),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, SpawnError::Start(_)));
    }

    #[tokio::test]
    async fn test_shutdown_terminates_child() {
        let spawner = SubprocessSpawner::new(Duration::from_millis(500));
        let (tx, token) = shutdown_channel();

        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            tx.shutdown();
        });

        let started = std::time::Instant::now();
        let err = spawner
            .run(&sh(), &args(&["-c", "sleep 30"]), token)
            .await
            .unwrap_err();

        assert_eq!(err, SpawnError::Cancelled);
        assert!(started.elapsed() < Duration::from_secs(10));
    }

    #[tokio::test]
    async fn test_shutdown_before_spawn_starts_nothing() {
        let spawner = SubprocessSpawner::default();
        let (tx, token) = shutdown_channel();
        tx.shutdown();

        // A missing program would be a Start error if spawning were attempted
        let err = spawner
            .run(Path::new("/nonexistent/git-release-linux-amd64"), &[], token)
            .await
            .unwrap_err();

        assert_eq!(err, SpawnError::Cancelled);
    }

    #[test]
    fn test_signal_exit_maps_to_128_plus_signal() {
        use std::os::unix::process::ExitStatusExt;

        // Raw wait status for "killed by SIGKILL (9)"
        let status = ExitStatus::from_raw(9);
        assert_eq!(exit_code_of(status), 137);

        // Raw wait status for "exited with 2"
        let status = ExitStatus::from_raw(2 << 8);
        assert_eq!(exit_code_of(status), 2);
    }
}
