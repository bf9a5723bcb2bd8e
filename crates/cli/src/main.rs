//! git-release wrapper - Main Entry Point
//! Picks the git-release binary for this runner and hands over to it

mod config;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tracing::{debug, info};

use release_wrapper_core::application::{exit_code_for, shutdown_channel, Dispatcher};
use release_wrapper_core::error::FAILURE_EXIT_CODE;
use release_wrapper_core::port::Reporter;
use release_wrapper_infra_system::{
    HostEnvironmentProbe, LogReporter, SubprocessSpawner, WorkflowCommandReporter,
};

use config::{Cli, ReporterKind, WrapperConfig};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let code = match start(Cli::parse()).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("[wrapper] {:#}", e);
            FAILURE_EXIT_CODE
        }
    };

    // Single termination point
    std::process::exit(code);
}

async fn start(cli: Cli) -> Result<i32> {
    logging::init_logging(cli.log_format).context("Failed to initialize logging")?;
    debug!("git-release-wrapper v{}", VERSION);
    run(cli).await
}

/// Wire adapters and dispatch; returns the exit status for the process
async fn run(cli: Cli) -> Result<i32> {
    let config = WrapperConfig::from_cli(cli)?;
    debug!(install_dir = %config.install_dir.display(), reporter = ?config.reporter, "Configuration loaded");

    let reporter: Arc<dyn Reporter> = match config.reporter {
        ReporterKind::Workflow => Arc::new(WorkflowCommandReporter::stdout()),
        ReporterKind::Log => Arc::new(LogReporter),
    };

    let dispatcher = Dispatcher::new(
        Arc::new(HostEnvironmentProbe),
        Arc::new(SubprocessSpawner::default()),
        reporter,
        config.install_dir.clone(),
    );

    if config.dry_run {
        return Ok(match dispatcher.plan().await {
            Ok(plan) => {
                println!("{}", serde_json::to_string_pretty(&plan)?);
                0
            }
            Err(e) => e.exit_code(),
        });
    }

    let (shutdown_tx, shutdown_rx) = shutdown_channel();
    tokio::spawn(async move {
        if wait_for_interrupt().await.is_ok() {
            info!("Interrupt received, stopping child");
            shutdown_tx.shutdown();
        }
    });

    let result = dispatcher.run(&config.arguments, shutdown_rx).await;
    Ok(exit_code_for(&result))
}

#[cfg(unix)]
async fn wait_for_interrupt() -> std::io::Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut terminate = signal(SignalKind::terminate())?;
    tokio::select! {
        res = tokio::signal::ctrl_c() => res,
        _ = terminate.recv() => Ok(()),
    }
}

#[cfg(not(unix))]
async fn wait_for_interrupt() -> std::io::Result<()> {
    tokio::signal::ctrl_c().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use release_wrapper_core::port::EnvironmentProbe;
    use std::path::Path;
    use tempfile::TempDir;

    fn cli(root: &Path, extra: &[&str]) -> Cli {
        let root = root.to_str().unwrap();
        let mut argv = vec!["git-release-wrapper", "--install-dir", root, "--reporter", "log"];
        argv.extend_from_slice(extra);
        Cli::try_parse_from(argv).unwrap()
    }

    #[tokio::test]
    async fn test_dry_run_exit_code_follows_host_support() {
        let root = TempDir::new().unwrap();
        let expected = if HostEnvironmentProbe.probe().is_supported() {
            0
        } else {
            FAILURE_EXIT_CODE
        };

        let code = run(cli(root.path(), &["--dry-run"])).await.unwrap();

        assert_eq!(code, expected);
    }

    #[tokio::test]
    async fn test_empty_install_root_fails() {
        // Unsupported host or missing binary: both are fatal
        let root = TempDir::new().unwrap();

        let code = run(cli(root.path(), &["--args", "v1.0.0"])).await.unwrap();

        assert_eq!(code, FAILURE_EXIT_CODE);
    }

    // Single process-spawning test in this binary (see ETXTBSY note in integration tests)
    #[cfg(all(target_os = "linux", target_arch = "x86_64"))]
    #[tokio::test]
    async fn test_payload_and_trailing_args_reach_child() {
        use release_wrapper_core::application::resolver::LINUX_BINARY;
        use std::fs;
        use std::os::unix::fs::PermissionsExt;

        let root = TempDir::new().unwrap();
        let build = root.path().join("build");
        fs::create_dir_all(&build).unwrap();
        let binary = build.join(LINUX_BINARY);
        fs::write(&binary, "#!/bin/sh\n[ \"$1\" = \"--foo bar\" ] || exit 40\nexit $#\n").unwrap();
        fs::set_permissions(&binary, fs::Permissions::from_mode(0o755)).unwrap();

        // Payload wins over trailing args and travels as one token
        let code = run(cli(root.path(), &["--args=--foo bar", "--", "x", "y"]))
            .await
            .unwrap();
        assert_eq!(code, 1);

        // Without a payload the trailing args are forwarded
        let code = run(cli(root.path(), &["--", "--foo bar", "x", "y"]))
            .await
            .unwrap();
        assert_eq!(code, 3);
    }
}
