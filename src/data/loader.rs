// ============================================================
// Layer 4 — Input File Loader
// ============================================================
// Reads the raw bytes of the input file, up to a fixed cap.
//
// The cap matters: the program only handles small inputs, so
// anything past `max_bytes` is silently truncated rather than
// treated as an error. A short read is accepted as-is —
// there is no retry loop, whatever `read_to_end` returns under
// the cap is the buffer we parse.
//
// The file handle is scoped to `read_input` and dropped on
// every exit path, so it is closed whether the read succeeds
// or fails.
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (I/O and File Handling)

use anyhow::{Context, Result};
use std::{fs::File, io::Read, path::PathBuf};

use crate::domain::traits::InputSource;

/// Loads the input file from a fixed path with a byte cap.
/// Implements the InputSource trait from Layer 3.
pub struct FileLoader {
    /// Path of the file to read
    path: PathBuf,

    /// Maximum number of bytes to read; the rest is ignored
    max_bytes: usize,
}

impl FileLoader {
    /// Create a new FileLoader for the given path and size cap
    pub fn new(path: impl Into<PathBuf>, max_bytes: usize) -> Self {
        Self {
            path: path.into(),
            max_bytes,
        }
    }
}

/// Implement the InputSource trait so the application layer
/// can call read_input() without knowing about the filesystem
impl InputSource for FileLoader {
    fn read_input(&self) -> Result<Vec<u8>> {
        // Open read-only. A missing file or a permission problem
        // surfaces here, before any output has been produced.
        let file = File::open(&self.path)
            .with_context(|| format!("Cannot open '{}'", self.path.display()))?;

        // take() caps the read at max_bytes; everything past the
        // cap stays unread and is discarded when the handle drops
        let mut buffer  = Vec::with_capacity(self.max_bytes);
        let mut bounded = file.take(self.max_bytes as u64);
        bounded
            .read_to_end(&mut buffer)
            .with_context(|| format!("Cannot read '{}'", self.path.display()))?;

        tracing::debug!(
            "Read {} bytes from '{}' (cap {})",
            buffer.len(),
            self.path.display(),
            self.max_bytes,
        );

        Ok(buffer)
    }
}
