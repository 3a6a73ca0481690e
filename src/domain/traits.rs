// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// By programming against traits instead of concrete types,
// we can swap implementations without changing the code
// that uses them. For example:
//   - FileLoader implements InputSource
//   - Tests implement InputSource with an in-memory buffer
//   - The application layer only sees InputSource
//     and works with both without any changes
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;

// ─── InputSource ──────────────────────────────────────────────────────────────
/// Any component that can produce the raw input bytes for one run.
///
/// Implementations:
///   - FileLoader → bounded read of the input file
///   - test doubles → fixed byte buffers, failing sources
pub trait InputSource {
    /// Produce the raw bytes to parse, already truncated to
    /// whatever size limit the source enforces.
    fn read_input(&self) -> Result<Vec<u8>>;
}
