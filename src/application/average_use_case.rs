// ============================================================
// Layer 2 — AverageUseCase
// ============================================================
// Orchestrates the full pipeline in order:
//
//   Step 1: Read the input bytes      (Layer 4 - data)
//   Step 2: Parse the two sequences   (Layer 4 - data)
//   Step 3: Validate the pair         (Layer 4 - data)
//   Step 4: Reduce to the average     (Layer 5 - analysis)
//
// The first failing step ends the run — there are no retries
// and no partial results. A value only exists after Step 3
// has accepted the sequences.
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §13 (Iterators and Closures)

use std::path::PathBuf;

use crate::analysis::reducer;
use crate::data::{loader::FileLoader, parser, validator};
use crate::domain::{error::PipelineError, traits::InputSource};

// ─── Pipeline Configuration ──────────────────────────────────────────────────
// The process-wide constants of the program. There are no flags
// and no environment knobs — this struct exists so the limits
// are named values in one place and so tests can point the
// pipeline at temporary files and smaller caps.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Path of the input file
    pub input_path: PathBuf,

    /// How many bytes of the file are read; the rest is ignored
    pub max_input_bytes: usize,

    /// How many numbers each sequence may hold; the rest are
    /// dropped during parsing
    pub max_elements: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_path:      PathBuf::from("input.txt"),
            max_input_bytes: 1024,
            max_elements:    100,
        }
    }
}

// ─── AverageUseCase ──────────────────────────────────────────────────────────
// Owns the config and the input source and runs the pipeline.
pub struct AverageUseCase {
    config: PipelineConfig,
    source: Box<dyn InputSource>,
}

impl AverageUseCase {
    /// Create a use case reading from the configured input file
    pub fn new(config: PipelineConfig) -> Self {
        let source = FileLoader::new(&config.input_path, config.max_input_bytes);
        Self {
            config,
            source: Box::new(source),
        }
    }

    /// Create a use case over any InputSource — used by tests
    /// to run the pipeline against in-memory buffers
    pub fn with_source(config: PipelineConfig, source: Box<dyn InputSource>) -> Self {
        Self { config, source }
    }

    /// Execute the full pipeline end to end.
    /// Returns the truncated average of the pairwise differences,
    /// or the error of the first failing step.
    pub fn execute(&self) -> Result<i64, PipelineError> {
        // ── Step 1: Read the raw input bytes ─────────────────────────────────
        // Any open/read failure becomes the File error kind here,
        // before a single byte has been written to stdout
        let bytes = self
            .source
            .read_input()
            .map_err(PipelineError::File)?;
        tracing::info!("Loaded {} input bytes", bytes.len());

        // ── Step 2: Parse the two integer sequences ──────────────────────────
        let (a, b) = parser::parse_sequences(&bytes, self.config.max_elements);
        tracing::info!("Parsed sequences of {} and {} numbers", a.len(), b.len());

        // ── Step 3: Validate into a SequencePair ─────────────────────────────
        // Mismatched or empty sequences stop the run here,
        // so Step 4 never divides by zero
        let pair = validator::validate(a, b)?;

        // ── Step 4: Reduce to a single number ────────────────────────────────
        let average = reducer::average_difference(&pair);
        tracing::info!("Average difference over {} pairs: {}", pair.len(), average);

        Ok(average)
    }
}
