//! End-to-end pipeline: Load → Project → Enrich → Rank → Top → Persist.
//!
//! # Example
//!
//! ```rust,ignore
//! use ziprank::{run, PipelineOptions};
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let summary = run(Path::new("NY_HH_INCOME.csv"), &PipelineOptions::default())?;
//!     println!("Persisted {} rows", summary.snapshot.len());
//!     Ok(())
//! }
//! ```

use std::path::{Path, PathBuf};

use crate::error::PipelineResult;
use crate::models::EnrichedRecord;
use crate::parser::parse_source_file;
use crate::snapshot;
use crate::transform::{enrich, project, rank};

/// Default source file, in the working directory.
pub const DEFAULT_SOURCE_PATH: &str = "NY_HH_INCOME.csv";

/// Default snapshot file, in the working directory.
pub const DEFAULT_SNAPSHOT_PATH: &str = "top10income.json";

/// Default number of rows kept in the snapshot.
pub const DEFAULT_TOP_N: usize = 10;

/// Options for a pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Where the snapshot is persisted.
    pub snapshot_path: PathBuf,

    /// How many top rows to keep.
    pub top_n: usize,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            snapshot_path: PathBuf::from(DEFAULT_SNAPSHOT_PATH),
            top_n: DEFAULT_TOP_N,
        }
    }
}

/// Result of a complete pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineSummary {
    /// The persisted top-N rows, ranked by income descending.
    pub snapshot: Vec<EnrichedRecord>,

    /// Source file metadata.
    pub csv_info: CsvInfo,
}

/// Source CSV information.
#[derive(Debug, Clone)]
pub struct CsvInfo {
    pub encoding: String,
    pub headers: Vec<String>,
    pub row_count: usize,
}

/// Run the full pipeline and persist the snapshot.
///
/// Steps, in order:
/// 1. Load the CSV (encoding auto-detected)
/// 2. Project {ZIP, COORDINATES, AVG_INC_HH}
/// 3. Enrich with LATITUDE/LONGITUDE (row-local, best-effort)
/// 4. Rank by income descending, stable, invalid income last
/// 5. Keep the top `top_n` rows
/// 6. Persist to `snapshot_path` (all-or-nothing overwrite)
///
/// Load, projection and persist failures are fatal and abort the run; no
/// snapshot file is touched in that case. Row-level coordinate problems only
/// degrade the affected row.
pub fn run(source: &Path, options: &PipelineOptions) -> PipelineResult<PipelineSummary> {
    let parsed = parse_source_file(source)?;

    let csv_info = CsvInfo {
        encoding: parsed.encoding.clone(),
        headers: parsed.headers.clone(),
        row_count: parsed.records.len(),
    };

    let records = project(&parsed)?;
    let enriched = enrich(records);
    let ranked = rank::sort_by_income_desc(enriched);
    let top = rank::top(ranked, options.top_n);

    snapshot::persist(&top, &options.snapshot_path)?;

    Ok(PipelineSummary {
        snapshot: top,
        csv_info,
    })
}
