//! Logging setup
//! Logs go to stderr; stdout belongs to the child and to workflow commands

use anyhow::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LogFormat;

const DEFAULT_FILTER: &str =
    "git_release_wrapper=info,release_wrapper_core=info,release_wrapper_infra_system=info";

/// Initialize the global subscriber
///
/// # Environment Variables
///
/// - `RUST_LOG`: overrides the default filter
///
/// # Example
///
/// ```text
/// RUST_LOG=release_wrapper_core=debug git-release-wrapper --args "v1.0.0"
/// ```
pub fn init_logging(format: LogFormat) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))?;

    match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?,
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .try_init()?,
    }

    Ok(())
}
