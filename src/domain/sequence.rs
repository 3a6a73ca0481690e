// ============================================================
// Layer 3 — Sequence Pair Domain Type
// ============================================================
// Represents the two integer sequences after validation.
//
// The central invariant of the whole program lives here:
//   len(a) == len(b)  and  len(a) > 0
//
// A SequencePair can ONLY be created through `new`, which checks
// the invariant and returns an error otherwise. Downstream code
// (the reducer) therefore never has to re-check lengths or worry
// about dividing by zero — if it holds a SequencePair, the pair
// is usable. This is the "make invalid states unrepresentable"
// pattern: validate once at the boundary, then rely on the type.
//
// Reference: Rust Book §5 (Structs and Methods)
//            Rust Book §9 (Recoverable Errors with Result)

use crate::domain::error::PipelineError;

/// Two equal-length, non-empty sequences of signed integers.
/// `a` comes from line 1 of the input, `b` from the rest.
#[derive(Debug, Clone)]
pub struct SequencePair {
    /// The first sequence (everything before the first newline)
    a: Vec<i64>,

    /// The second sequence (everything after it)
    b: Vec<i64>,
}

impl SequencePair {
    /// Build a pair from two raw parsed sequences, enforcing the
    /// invariant. Fails with a Validation error when the lengths
    /// differ or both sequences are empty.
    pub fn new(a: Vec<i64>, b: Vec<i64>) -> Result<Self, PipelineError> {
        if a.is_empty() || a.len() != b.len() {
            return Err(PipelineError::Validation {
                left:  a.len(),
                right: b.len(),
            });
        }
        Ok(Self { a, b })
    }

    /// Number of elements in each sequence. Guaranteed > 0.
    pub fn len(&self) -> usize {
        self.a.len()
    }

    /// Iterate over the element-wise (a[i], b[i]) pairs in order.
    pub fn iter_pairs(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        self.a.iter().copied().zip(self.b.iter().copied())
    }
}
