//! Pipeline result types

use termsheet_domain::AccumulatedRecord;

/// Outcome of one pipeline run.
///
/// Partial success is expected: some chunks may have failed, and the record
/// may resolve only a subset of the canonical fields.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// The merged field values.
    pub record: AccumulatedRecord,

    /// Total number of chunks the text was split into.
    pub chunks_total: usize,

    /// Chunks whose remote call never completed (skipped).
    pub chunks_failed: usize,

    /// Chunks whose reply could not be parsed (folded as the failure
    /// marker).
    pub parse_failures: usize,

    /// Wall-clock processing time in milliseconds.
    pub elapsed_ms: u64,
}
