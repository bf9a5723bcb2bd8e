// git-release wrapper Core - Dispatch Logic & Ports
// Host identification and process creation go through ports; the only direct
// filesystem access is the binary existence check

pub mod application;
pub mod domain;
pub mod error;
pub mod port;

pub use error::{DispatchError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
