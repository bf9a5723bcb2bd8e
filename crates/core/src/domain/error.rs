// Domain Error Types

use thiserror::Error;

/// Host profile outside the supported x64 + {windows, linux} matrix
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnsupportedEnvironment {
    #[error("unsupported architecture: {0}")]
    Architecture(String),

    #[error("unsupported operating system: {0}")]
    OperatingSystem(String),
}

impl UnsupportedEnvironment {
    /// Machine-readable reason tag
    pub fn reason(&self) -> &'static str {
        match self {
            UnsupportedEnvironment::Architecture(_) => "architecture",
            UnsupportedEnvironment::OperatingSystem(_) => "operating_system",
        }
    }
}
