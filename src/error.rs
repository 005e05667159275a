//! Error types for the ziprank pipeline.
//!
//! This module defines a hierarchy of error types, one per pipeline stage:
//!
//! - [`CsvError`] - Source file loading and CSV parsing errors
//! - [`SchemaError`] - Required-column errors during projection
//! - [`SnapshotError`] - Snapshot persistence and reload errors
//! - [`PipelineError`] - Top-level orchestration errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.
//!
//! Row-level degradation (a coordinate string that fails to split or parse)
//! is deliberately NOT an error: it is absorbed into the data model as an
//! invalid marker, see [`crate::models`].

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// CSV Loading Errors
// =============================================================================

/// Errors while loading and parsing the source CSV.
#[derive(Debug, Error)]
pub enum CsvError {
    /// Source file does not exist.
    #[error("Source file not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    /// Failed to read file.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// Input could not be parsed as delimited text.
    #[error("Malformed CSV input: {0}")]
    Parse(String),

    /// Empty file.
    #[error("CSV file is empty")]
    EmptyFile,

    /// No headers found.
    #[error("No headers found in CSV")]
    NoHeaders,
}

// =============================================================================
// Schema Errors
// =============================================================================

/// Errors while projecting the required columns.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// One or more required columns are absent from the header row.
    #[error("Missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),
}

// =============================================================================
// Snapshot Errors
// =============================================================================

/// Errors while persisting or reloading the top-N snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Could not write the snapshot file.
    #[error("Failed to write snapshot: {0}")]
    Write(std::io::Error),

    /// Could not read a persisted snapshot file.
    #[error("Failed to read snapshot: {0}")]
    Read(std::io::Error),

    /// Snapshot (de)serialization failed.
    #[error("Snapshot JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level pipeline orchestration errors.
///
/// This is the main error type returned by [`crate::transform::pipeline::run`].
/// It wraps all lower-level errors; any variant is fatal to the run.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// CSV loading error.
    #[error("CSV error: {0}")]
    Csv(#[from] CsvError),

    /// Schema mismatch during projection.
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    /// Snapshot persistence error.
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for CSV loading operations.
pub type CsvResult<T> = Result<T, CsvError>;

/// Result type for projection operations.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Result type for snapshot operations.
pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
