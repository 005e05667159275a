//! Domain models for the ziprank pipeline.
//!
//! This module contains the core data structures used throughout the pipeline:
//!
//! - [`Record`] - One projected input row: ZIP, coordinate string, income
//! - [`EnrichedRecord`] - Record plus derived latitude/longitude
//! - [`coerce_decimal`] - Lenient string-to-float coercion
//!
//! Fields that could not be parsed carry `None`, the explicit invalid marker.
//! An invalid value is distinct from a real zero and never aborts the run.

use serde::{Deserialize, Serialize};

// =============================================================================
// Column Names
// =============================================================================

/// Header name of the ZIP code column.
pub const COL_ZIP: &str = "ZIP";
/// Header name of the composite coordinate column.
pub const COL_COORDINATES: &str = "COORDINATES";
/// Header name of the average household income column.
pub const COL_AVG_INC_HH: &str = "AVG_INC_HH";
/// Column name of the derived latitude.
pub const COL_LATITUDE: &str = "LATITUDE";
/// Column name of the derived longitude.
pub const COL_LONGITUDE: &str = "LONGITUDE";

/// Columns that must be present in the source header (case-sensitive).
pub const REQUIRED_COLUMNS: [&str; 3] = [COL_ZIP, COL_COORDINATES, COL_AVG_INC_HH];

/// Separator between latitude and longitude inside `COORDINATES`.
pub const COORDINATE_SEPARATOR: &str = ", ";

// =============================================================================
// Record
// =============================================================================

/// One projected input row, before coordinate enrichment.
///
/// `avg_income_household` is already coerced: a blank or non-numeric source
/// value becomes `None` rather than failing the row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// ZIP code, kept as text (leading zeros matter).
    #[serde(rename = "ZIP")]
    pub zip: String,

    /// Raw composite coordinate string, format `"<lat>, <lon>"`.
    #[serde(rename = "COORDINATES")]
    pub coordinates: String,

    /// Average household income; `None` when missing or unparseable.
    #[serde(rename = "AVG_INC_HH")]
    pub avg_income_household: Option<f64>,
}

// =============================================================================
// Enriched Record
// =============================================================================

/// A [`Record`] with latitude/longitude split out of the coordinate string.
///
/// Serialized keys are exactly the snapshot column names, so a persisted
/// snapshot round-trips values and column names unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedRecord {
    /// ZIP code.
    #[serde(rename = "ZIP")]
    pub zip: String,

    /// Raw composite coordinate string.
    #[serde(rename = "COORDINATES")]
    pub coordinates: String,

    /// Average household income; `None` when missing or unparseable.
    #[serde(rename = "AVG_INC_HH")]
    pub avg_income_household: Option<f64>,

    /// Derived latitude; `None` when the coordinate string was malformed.
    #[serde(rename = "LATITUDE")]
    pub latitude: Option<f64>,

    /// Derived longitude; `None` when the coordinate string was malformed.
    #[serde(rename = "LONGITUDE")]
    pub longitude: Option<f64>,
}

impl EnrichedRecord {
    /// Snapshot column names, in display order.
    pub fn column_names() -> [&'static str; 5] {
        [
            COL_ZIP,
            COL_COORDINATES,
            COL_AVG_INC_HH,
            COL_LATITUDE,
            COL_LONGITUDE,
        ]
    }
}

// =============================================================================
// Numeric Coercion
// =============================================================================

/// Coerce a string to a finite `f64`, mapping failures to `None`.
///
/// Accepts optional sign and fractional part. Non-numeric input, empty input,
/// and non-finite parses (NaN, infinities) all coerce to `None` so downstream
/// comparisons never see NaN.
pub fn coerce_decimal(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_decimal_valid() {
        assert_eq!(coerce_decimal("40.7128"), Some(40.7128));
        assert_eq!(coerce_decimal("-74.0060"), Some(-74.0060));
        assert_eq!(coerce_decimal("  90000 "), Some(90000.0));
        assert_eq!(coerce_decimal("+12.5"), Some(12.5));
    }

    #[test]
    fn test_coerce_decimal_invalid() {
        assert_eq!(coerce_decimal(""), None);
        assert_eq!(coerce_decimal("abc"), None);
        assert_eq!(coerce_decimal("12.3.4"), None);
        assert_eq!(coerce_decimal("NaN"), None);
        assert_eq!(coerce_decimal("inf"), None);
    }

    #[test]
    fn test_enriched_record_serialized_keys() {
        let record = EnrichedRecord {
            zip: "10007".into(),
            coordinates: "40.7128, -74.0060".into(),
            avg_income_household: Some(250000.0),
            latitude: Some(40.7128),
            longitude: Some(-74.0060),
        };

        let json = serde_json::to_value(&record).unwrap();
        for col in EnrichedRecord::column_names() {
            assert!(json.get(col).is_some(), "missing column {col}");
        }
    }

    #[test]
    fn test_invalid_marker_roundtrip() {
        let record = EnrichedRecord {
            zip: "10007".into(),
            coordinates: "invalidformat".into(),
            avg_income_household: None,
            latitude: None,
            longitude: None,
        };

        let json = serde_json::to_string(&record).unwrap();
        let back: EnrichedRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
        assert!(back.latitude.is_none());
        assert!(back.longitude.is_none());
    }
}
