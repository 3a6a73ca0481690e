// ============================================================
// Layer 5 — Analysis
// ============================================================
// The single computation the program exists for: reduce a
// validated pair of sequences to one number.

/// Truncated average of the element-wise differences
pub mod reducer;
