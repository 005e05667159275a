//! Transformation module.
//!
//! The pipeline stages between parsing and persistence:
//! - Project: select the three required columns
//! - Enrich: split coordinates and coerce to numbers
//! - Rank: stable descending sort by income, top-N truncation
//! - Pipeline: end-to-end orchestration

pub mod enrich;
pub mod pipeline;
pub mod project;
pub mod rank;

pub use enrich::{enrich, split_coordinates};
pub use pipeline::*;
pub use project::project;
pub use rank::{sort_by_income_desc, top};
