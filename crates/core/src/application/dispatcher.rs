// Dispatcher - top-level orchestration
// Start → Probed → Resolved → Verified → Launched → {Succeeded, Failed}, forward only

use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

use crate::application::launcher::Launcher;
use crate::application::resolver;
use crate::application::shutdown::ShutdownToken;
use crate::domain::{BinaryTarget, HostProfile, LaunchArguments, LaunchOutcome};
use crate::error::Result;
use crate::port::{EnvironmentProbe, ProcessSpawner, Reporter};

/// What a dispatch would do, without launching anything
#[derive(Debug, Clone, Serialize)]
pub struct DispatchPlan {
    pub profile: HostProfile,
    pub target: BinaryTarget,
    pub advisory: Option<&'static str>,
    pub binary_present: bool,
}

/// Dispatch pipeline
///
/// Never terminates the process: every path returns a value, and failures are
/// reported through the `Reporter` before being returned.
pub struct Dispatcher {
    probe: Arc<dyn EnvironmentProbe>,
    launcher: Launcher,
    reporter: Arc<dyn Reporter>,
    install_dir: PathBuf,
}

impl Dispatcher {
    pub fn new(
        probe: Arc<dyn EnvironmentProbe>,
        spawner: Arc<dyn ProcessSpawner>,
        reporter: Arc<dyn Reporter>,
        install_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            probe,
            launcher: Launcher::new(spawner),
            reporter,
            install_dir: install_dir.into(),
        }
    }

    /// Probe, resolve, verify and launch
    ///
    /// A non-zero child exit is a successful dispatch: the code is returned
    /// in `LaunchOutcome` and nothing is reported as a failure.
    pub async fn run(
        &self,
        args: &LaunchArguments,
        shutdown: ShutdownToken,
    ) -> Result<LaunchOutcome> {
        let result = self.dispatch(args, shutdown).await;
        self.report_failure(result)
    }

    /// Probe and resolve only, for diagnostics
    pub async fn plan(&self) -> Result<DispatchPlan> {
        let result = self.build_plan().await;
        self.report_failure(result)
    }

    async fn dispatch(
        &self,
        args: &LaunchArguments,
        shutdown: ShutdownToken,
    ) -> Result<LaunchOutcome> {
        let profile = self.probed();
        let resolution = resolver::resolve(&profile, &self.install_dir)?;

        if let Some(advisory) = resolution.advisory {
            self.reporter.warning(advisory);
        }

        debug!(
            path = %resolution.target.full_path().display(),
            args = ?args.as_slice(),
            "Resolved binary, forwarding arguments"
        );

        let outcome = self
            .launcher
            .launch(&resolution.target, args, shutdown)
            .await?;

        info!(exit_code = outcome.exit_code, "Dispatch completed");
        Ok(outcome)
    }

    async fn build_plan(&self) -> Result<DispatchPlan> {
        let profile = self.probed();
        let resolution = resolver::resolve(&profile, &self.install_dir)?;
        let binary_present = tokio::fs::try_exists(resolution.target.full_path())
            .await
            .unwrap_or(false);

        Ok(DispatchPlan {
            profile,
            target: resolution.target,
            advisory: resolution.advisory,
            binary_present,
        })
    }

    fn probed(&self) -> HostProfile {
        let profile = self.probe.probe();
        debug!(supported = profile.is_supported(), "Host probed");
        self.reporter.info(&format!(
            "platform: {}, architecture: {}",
            profile.os_family(),
            profile.architecture()
        ));
        profile
    }

    fn report_failure<T>(&self, result: Result<T>) -> Result<T> {
        if let Err(e) = &result {
            self.reporter.fail(&e.to_string());
        }
        result
    }
}

/// Exit status the wrapper process should terminate with
pub fn exit_code_for(result: &Result<LaunchOutcome>) -> i32 {
    match result {
        Ok(outcome) => outcome.exit_code,
        Err(e) => e.exit_code(),
    }
}
