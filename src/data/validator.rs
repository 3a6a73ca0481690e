// ============================================================
// Layer 4 — Sequence Validator
// ============================================================
// The gate between parsing and reduction: the raw sequences only
// become a SequencePair when they have equal non-zero lengths.
// The length check itself lives in SequencePair::new (Layer 3);
// this step runs it and logs the outcome.
//
// Reference: Rust Book §9 (Recoverable Errors with Result)

use crate::domain::error::PipelineError;
use crate::domain::sequence::SequencePair;

/// Validate two raw parsed sequences into a SequencePair.
/// A length mismatch or an empty pair fails the run here,
/// before any reduction happens.
pub fn validate(a: Vec<i64>, b: Vec<i64>) -> Result<SequencePair, PipelineError> {
    let (left, right) = (a.len(), b.len());

    match SequencePair::new(a, b) {
        Ok(pair) => {
            tracing::debug!("Validated sequence pair of length {}", pair.len());
            Ok(pair)
        }
        Err(err) => {
            tracing::debug!("Rejected sequences: {} vs {} elements", left, right);
            Err(err)
        }
    }
}
