//! # Ziprank - Top-N ZIP-code areas by household income
//!
//! Ziprank ingests a CSV of ZIP-code-level household income and coordinates,
//! splits the composite coordinate column into numeric latitude/longitude,
//! ranks by income descending, and persists the top 10 as a JSON snapshot
//! while printing them as a table.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   CSV File  │────▶│   Parser    │────▶│  Transform  │────▶│  Snapshot   │
//! │  (auto-enc) │     │ (csv rows)  │     │(project/rank│     │ (JSON + TTY)│
//! └─────────────┘     └─────────────┘     │  /enrich)   │     └─────────────┘
//!                                         └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ziprank::{run, PipelineOptions};
//! use std::path::Path;
//!
//! fn main() {
//!     let summary = run(Path::new("NY_HH_INCOME.csv"), &PipelineOptions::default()).unwrap();
//!     println!("{}", ziprank::render_table(&summary.snapshot));
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`models`] - Domain models (Record, EnrichedRecord)
//! - [`parser`] - CSV loading with encoding auto-detection
//! - [`transform`] - Projection, enrichment, ranking, pipeline
//! - [`snapshot`] - Snapshot persistence and reload
//! - [`report`] - Console table rendering

// Core modules
pub mod error;
pub mod models;

// Parsing
pub mod parser;

// Transformation
pub mod transform;

// Persistence
pub mod snapshot;

// Console output
pub mod report;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{CsvError, PipelineError, SchemaError, SnapshotError};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{
    coerce_decimal, EnrichedRecord, Record, COL_AVG_INC_HH, COL_COORDINATES, COL_LATITUDE,
    COL_LONGITUDE, COL_ZIP, REQUIRED_COLUMNS,
};

// =============================================================================
// Re-exports - CSV Parsing
// =============================================================================

pub use parser::{detect_encoding, parse_bytes, parse_source_file, ParseResult};

// =============================================================================
// Re-exports - Transform
// =============================================================================

pub use transform::{enrich, project, sort_by_income_desc, split_coordinates, top};

// =============================================================================
// Re-exports - Pipeline
// =============================================================================

pub use transform::pipeline::{
    run, CsvInfo, PipelineOptions, PipelineSummary, DEFAULT_SNAPSHOT_PATH, DEFAULT_SOURCE_PATH,
    DEFAULT_TOP_N,
};

// =============================================================================
// Re-exports - Snapshot & Report
// =============================================================================

pub use report::render_table;
pub use snapshot::{load as load_snapshot, persist as persist_snapshot};
