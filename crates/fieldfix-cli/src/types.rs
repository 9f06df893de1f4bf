use std::path::PathBuf;

use fieldfix_core::CorrectionReport;

/// What one `correct` invocation did, for the summary printer.
#[derive(Debug)]
pub struct RunResult {
    pub input: PathBuf,
    /// None on a dry run.
    pub output: Option<PathBuf>,
    pub rows: usize,
    pub report: CorrectionReport,
}
