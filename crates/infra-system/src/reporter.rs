// Reporter adapters
// Workflow commands for GitHub Actions runners, plain tracing everywhere else

use std::io::{self, Write};
use std::sync::Mutex;
use tracing::{debug, error, info, warn};

use release_wrapper_core::port::Reporter;

/// Emits GitHub Actions workflow commands (`::warning::`, `::error::`)
///
/// Info lines are written as plain text. Every emission is mirrored to
/// tracing at debug level only, so runner logs do not show it twice.
pub struct WorkflowCommandReporter<W: Write + Send = io::Stdout> {
    out: Mutex<W>,
}

impl WorkflowCommandReporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl<W: Write + Send> WorkflowCommandReporter<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn emit(&self, line: &str) {
        let mut out = match self.out.lock() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        };
        // A closed stdout must not abort dispatch
        let _ = writeln!(out, "{}", line).and_then(|_| out.flush());
    }
}

impl<W: Write + Send> Reporter for WorkflowCommandReporter<W> {
    fn info(&self, message: &str) {
        debug!(report = message, "Workflow info emitted");
        self.emit(message);
    }

    fn warning(&self, message: &str) {
        debug!(report = message, "Workflow warning emitted");
        self.emit(&format!("::warning::{}", escape_data(message)));
    }

    fn fail(&self, message: &str) {
        debug!(report = message, "Workflow error emitted");
        self.emit(&format!("::error::{}", escape_data(message)));
    }
}

/// Escape workflow command data (`%`, CR, LF)
pub fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Reports through tracing only
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn info(&self, message: &str) {
        info!("{}", message);
    }

    fn warning(&self, message: &str) {
        warn!("{}", message);
    }

    fn fail(&self, message: &str) {
        error!("{}", message);
    }
}
