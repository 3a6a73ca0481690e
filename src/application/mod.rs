// ============================================================
// Layer 2 — Application Layer
// ============================================================
// One use case: run the whole pipeline once and produce either
// the averaged difference or the first error. The CLI layer
// above only routes; the layers below only do one step each.

/// Load → parse → validate → reduce, in order
pub mod average_use_case;
