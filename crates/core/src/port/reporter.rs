// Reporter port - side channel back to the automation host

/// Failure/warning side channel
///
/// `fail` only reports; terminating the process is left to the caller.
pub trait Reporter: Send + Sync {
    fn info(&self, message: &str);

    fn warning(&self, message: &str);

    fn fail(&self, message: &str);
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::sync::Mutex;

    /// A single emitted report
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Report {
        Info(String),
        Warning(String),
        Failure(String),
    }

    /// Reporter that keeps every emission in memory
    #[derive(Default)]
    pub struct RecordingReporter {
        reports: Mutex<Vec<Report>>,
    }

    impl RecordingReporter {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn reports(&self) -> Vec<Report> {
            self.reports.lock().unwrap().clone()
        }

        pub fn warnings(&self) -> Vec<String> {
            self.collect(|r| match r {
                Report::Warning(msg) => Some(msg.clone()),
                _ => None,
            })
        }

        pub fn failures(&self) -> Vec<String> {
            self.collect(|r| match r {
                Report::Failure(msg) => Some(msg.clone()),
                _ => None,
            })
        }

        fn collect(&self, pick: impl Fn(&Report) -> Option<String>) -> Vec<String> {
            self.reports.lock().unwrap().iter().filter_map(pick).collect()
        }

        fn push(&self, report: Report) {
            self.reports.lock().unwrap().push(report);
        }
    }

    impl Reporter for RecordingReporter {
        fn info(&self, message: &str) {
            self.push(Report::Info(message.to_string()));
        }

        fn warning(&self, message: &str) {
            self.push(Report::Warning(message.to_string()));
        }

        fn fail(&self, message: &str) {
            self.push(Report::Failure(message.to_string()));
        }
    }
}
