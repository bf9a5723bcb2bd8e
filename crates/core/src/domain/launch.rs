// Launch arguments and outcome

use serde::Serialize;

/// Ordered, opaque argument tokens forwarded to the child
///
/// Tokens are never parsed, split, or re-quoted. Each one reaches the child
/// as a discrete argv element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LaunchArguments(Vec<String>);

impl LaunchArguments {
    pub fn new(tokens: Vec<String>) -> Self {
        Self(tokens)
    }

    /// Forward a combined payload as exactly one token
    pub fn from_payload(payload: impl Into<String>) -> Self {
        Self(vec![payload.into()])
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Terminal result of a launched child
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchOutcome {
    pub exit_code: i32,
    pub streams_inherited: bool,
}

impl LaunchOutcome {
    pub fn new(exit_code: i32) -> Self {
        Self {
            exit_code,
            streams_inherited: true,
        }
    }

    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }
}
