// ============================================================
// Layer 3 — Pipeline Errors
// ============================================================
// The two ways a run can fail. Both are terminal — the pipeline
// stops at the first error and goes straight to the report path.
//
//   File       → the input file could not be opened or read
//   Validation → the parsed sequences are mismatched or empty
//
// The distinction is internal only: on stdout both kinds render
// as the same fixed error line. The kind shows up in the stderr
// log and lets tests assert WHICH stage rejected the input.
//
// Reference: Rust Book §9 (Error Handling)
//            thiserror crate documentation

use thiserror::Error;

/// Everything that can abort a pipeline run.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The input file could not be opened or read.
    /// Wraps the loader's full anyhow chain so the stderr log
    /// keeps the OS-level cause (missing file, permissions, ...).
    #[error("cannot read input: {0:#}")]
    File(#[source] anyhow::Error),

    /// The parsed sequences are unusable: different lengths,
    /// or no numbers at all. Carries both lengths for the log.
    #[error("mismatched or empty sequences ({left} vs {right})")]
    Validation { left: usize, right: usize },
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_names_both_lengths() {
        let err = PipelineError::Validation { left: 3, right: 2 };
        assert_eq!(err.to_string(), "mismatched or empty sequences (3 vs 2)");
    }

    #[test]
    fn test_file_message_keeps_cause() {
        let err = PipelineError::File(anyhow::anyhow!("no such file"));
        assert!(err.to_string().contains("no such file"));
    }
}
