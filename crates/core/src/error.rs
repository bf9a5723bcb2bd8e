// Central Error Type for a dispatch run

use std::path::PathBuf;

use thiserror::Error;

use crate::application::launcher::LaunchError;
use crate::domain::UnsupportedEnvironment;

/// Exit status used for every fatal wrapper failure
pub const FAILURE_EXIT_CODE: i32 = 1;

/// Exit status used when the wrapper was interrupted while waiting on the child
pub const CANCELLED_EXIT_CODE: i32 = 130;

/// Fatal dispatch failure
///
/// A non-zero exit of the launched binary is NOT represented here: it is
/// forwarded through `LaunchOutcome::exit_code` unchanged.
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("[wrapper] runner cpu architecture is not supported: '{0}'")]
    UnsupportedArchitecture(String),

    #[error("[wrapper] runner operation system is not supported: '{0}'")]
    UnsupportedOperatingSystem(String),

    #[error("[wrapper] file not found: '{}'", .0.display())]
    MissingBinary(PathBuf),

    #[error("[wrapper] failed to start '{}': {cause}", .path.display())]
    SpawnFailure { path: PathBuf, cause: String },

    #[error("[wrapper] interrupted while waiting for '{}'", .0.display())]
    Cancelled(PathBuf),
}

impl DispatchError {
    /// Process exit status the wrapper should terminate with
    pub fn exit_code(&self) -> i32 {
        match self {
            DispatchError::Cancelled(_) => CANCELLED_EXIT_CODE,
            _ => FAILURE_EXIT_CODE,
        }
    }
}

impl From<UnsupportedEnvironment> for DispatchError {
    fn from(err: UnsupportedEnvironment) -> Self {
        match err {
            UnsupportedEnvironment::Architecture(arch) => DispatchError::UnsupportedArchitecture(arch),
            UnsupportedEnvironment::OperatingSystem(os) => {
                DispatchError::UnsupportedOperatingSystem(os)
            }
        }
    }
}

impl From<LaunchError> for DispatchError {
    fn from(err: LaunchError) -> Self {
        match err {
            LaunchError::FileNotFound { path } => DispatchError::MissingBinary(path),
            LaunchError::SpawnFailure { path, cause } => DispatchError::SpawnFailure { path, cause },
            LaunchError::Cancelled { path } => DispatchError::Cancelled(path),
        }
    }
}

/// Result type alias using DispatchError
pub type Result<T> = std::result::Result<T, DispatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_offending_value() {
        let err: DispatchError = UnsupportedEnvironment::Architecture("arm64".to_string()).into();
        assert_eq!(
            err.to_string(),
            "[wrapper] runner cpu architecture is not supported: 'arm64'"
        );

        let err: DispatchError = UnsupportedEnvironment::OperatingSystem("darwin".to_string()).into();
        assert!(err.to_string().contains("'darwin'"));

        let err = DispatchError::MissingBinary(PathBuf::from("/opt/action/build/tool"));
        assert_eq!(
            err.to_string(),
            "[wrapper] file not found: '/opt/action/build/tool'"
        );
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            DispatchError::MissingBinary(PathBuf::from("x")).exit_code(),
            FAILURE_EXIT_CODE
        );
        assert_eq!(
            DispatchError::Cancelled(PathBuf::from("x")).exit_code(),
            CANCELLED_EXIT_CODE
        );
    }
}
