//! Command-line and environment configuration

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use release_wrapper_core::domain::LaunchArguments;

/// Environment variable GitHub Actions sets on every runner
const GITHUB_ACTIONS_ENV: &str = "GITHUB_ACTIONS";

#[derive(Parser, Debug)]
#[command(name = "git-release-wrapper")]
#[command(about = "Launch the git-release binary built for this runner", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Argument payload, forwarded verbatim as a single argument
    #[arg(long = "args", env = "INPUT_ARGS", allow_hyphen_values = true)]
    pub payload: Option<String>,

    /// Root directory holding build/ (default: directory of this executable)
    #[arg(long, env = "GIT_RELEASE_WRAPPER_DIR")]
    pub install_dir: Option<PathBuf>,

    /// Failure reporting channel
    #[arg(long, env = "GIT_RELEASE_WRAPPER_REPORTER", value_enum, default_value_t = ReporterMode::Auto)]
    pub reporter: ReporterMode,

    /// Log output format
    #[arg(long, env = "GIT_RELEASE_WRAPPER_LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    /// Print the resolved binary as JSON instead of launching it
    #[arg(long)]
    pub dry_run: bool,

    /// Arguments forwarded when no payload is configured
    #[arg(last = true)]
    pub forward: Vec<String>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReporterMode {
    /// Workflow commands on GitHub Actions, logs elsewhere
    Auto,
    /// GitHub Actions workflow commands
    Workflow,
    /// Structured log lines only
    Log,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Concrete reporter after resolving `auto`
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ReporterKind {
    Workflow,
    Log,
}

impl ReporterMode {
    pub fn resolve(self, github_actions: Option<&str>) -> ReporterKind {
        match self {
            ReporterMode::Workflow => ReporterKind::Workflow,
            ReporterMode::Log => ReporterKind::Log,
            ReporterMode::Auto if github_actions == Some("true") => ReporterKind::Workflow,
            ReporterMode::Auto => ReporterKind::Log,
        }
    }
}

/// Wrapper configuration assembled from the CLI
#[derive(Debug, Clone)]
pub struct WrapperConfig {
    pub install_dir: PathBuf,
    pub arguments: LaunchArguments,
    pub reporter: ReporterKind,
    pub dry_run: bool,
}

impl WrapperConfig {
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let install_dir = match cli.install_dir {
            Some(dir) => dir,
            None => default_install_dir()?,
        };

        let github_actions = std::env::var(GITHUB_ACTIONS_ENV).ok();

        Ok(Self {
            install_dir,
            arguments: forwarded_arguments(cli.payload, cli.forward),
            reporter: cli.reporter.resolve(github_actions.as_deref()),
            dry_run: cli.dry_run,
        })
    }
}

/// A non-empty payload wins and travels as one token; otherwise trailing args
pub fn forwarded_arguments(payload: Option<String>, trailing: Vec<String>) -> LaunchArguments {
    match payload {
        Some(payload) if !payload.is_empty() => LaunchArguments::from_payload(payload),
        _ => LaunchArguments::new(trailing),
    }
}

fn default_install_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Failed to locate wrapper executable")?;
    exe.parent()
        .map(PathBuf::from)
        .context("Wrapper executable has no parent directory")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Cli {
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_payload_is_one_token() {
        let cli = parse(&["git-release-wrapper", "--args", "--foo bar"]);
        let args = forwarded_arguments(cli.payload, cli.forward);

        assert_eq!(args.as_slice(), &["--foo bar".to_string()]);
    }

    #[test]
    fn test_trailing_args_forwarded_when_no_payload() {
        let args = forwarded_arguments(None, vec!["v1.2.3".to_string(), "x y".to_string()]);
        assert_eq!(args.len(), 2);

        let args = forwarded_arguments(Some(String::new()), vec!["v1.2.3".to_string()]);
        assert_eq!(args.as_slice(), &["v1.2.3".to_string()]);
    }

    #[test]
    fn test_trailing_args_after_separator() {
        let cli = parse(&["git-release-wrapper", "--dry-run", "--", "--tag", "v1"]);

        assert!(cli.dry_run);
        assert_eq!(cli.forward, vec!["--tag".to_string(), "v1".to_string()]);
    }

    #[test]
    fn test_reporter_auto_detection() {
        assert_eq!(ReporterMode::Auto.resolve(Some("true")), ReporterKind::Workflow);
        assert_eq!(ReporterMode::Auto.resolve(None), ReporterKind::Log);
        assert_eq!(ReporterMode::Auto.resolve(Some("false")), ReporterKind::Log);
        assert_eq!(ReporterMode::Log.resolve(Some("true")), ReporterKind::Log);
        assert_eq!(ReporterMode::Workflow.resolve(None), ReporterKind::Workflow);
    }

    #[test]
    fn test_install_dir_override() {
        let cli = parse(&["git-release-wrapper", "--install-dir", "/opt/action"]);
        let config = WrapperConfig::from_cli(cli).unwrap();

        assert_eq!(config.install_dir, PathBuf::from("/opt/action"));
    }
}
