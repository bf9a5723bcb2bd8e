// Binary Target - resolved executable for a supported host

use serde::Serialize;
use std::path::{Path, PathBuf};

/// Executable selected for the host
///
/// Only `application::resolver` constructs this, and only for a supported
/// host profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BinaryTarget {
    file_name: &'static str,
    full_path: PathBuf,
}

impl BinaryTarget {
    pub(crate) fn new(file_name: &'static str, full_path: PathBuf) -> Self {
        Self {
            file_name,
            full_path,
        }
    }

    pub fn file_name(&self) -> &'static str {
        self.file_name
    }

    pub fn full_path(&self) -> &Path {
        &self.full_path
    }
}
