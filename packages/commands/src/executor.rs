//! Batch executor: runs an ordered list of textual invocations with
//! per-command failure isolation.

use crate::dispatch::dispatch;
use crate::parser::parse_invocation;
use posterkit_editor::Session;

/// One failed command, addressed by its 1-based position in the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchFailure {
    pub index: usize,
    pub raw: String,
    pub kind: &'static str,
    pub message: String,
}

/// Outcome of a batch run.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// Commands actually attempted (blank and comment lines excluded).
    pub attempted: usize,
    pub succeeded: usize,
    /// Per-command result messages, in execution order.
    pub messages: Vec<String>,
    pub failures: Vec<BatchFailure>,
}

impl BatchReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Concatenated error report; empty means full success.
    pub fn error_report(&self) -> String {
        let mut out = String::new();
        for failure in &self.failures {
            out.push_str(&format!(
                "[Line {}] {}\n         Error: {}: {}\n\n",
                failure.index, failure.raw, failure.kind, failure.message
            ));
        }
        out
    }
}

/// Run every command in order. A failing command is recorded and the
/// batch continues; nothing short of a poisoned session stops it.
pub fn run_batch(session: &mut Session, lines: &[String]) -> BatchReport {
    let mut report = BatchReport::default();

    tracing::info!(total = lines.len(), "executing command batch");

    for (offset, raw) in lines.iter().enumerate() {
        let index = offset + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Raw newlines inside a command would have broken line
        // splitting upstream; re-escape any that slipped through.
        let fixed = line.replace('\n', "\\n");

        report.attempted += 1;
        tracing::info!(index, command = fixed.as_str(), "executing");

        match parse_invocation(&fixed).and_then(|inv| dispatch(session, inv)) {
            Ok(message) => {
                tracing::info!(index, result = message.as_str(), "ok");
                report.succeeded += 1;
                report.messages.push(message);
            }
            Err(err) => {
                tracing::warn!(index, %err, "command failed");
                report.failures.push(BatchFailure {
                    index,
                    raw: line.to_string(),
                    kind: err.kind(),
                    message: err.to_string(),
                });
            }
        }
    }

    tracing::info!(
        succeeded = report.succeeded,
        attempted = report.attempted,
        "batch finished"
    );
    report
}
