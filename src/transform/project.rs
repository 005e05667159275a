//! Column projection: raw parsed rows to typed [`Record`]s.

use serde_json::Value;

use crate::error::{SchemaError, SchemaResult};
use crate::models::{coerce_decimal, Record, COL_AVG_INC_HH, COL_COORDINATES, COL_ZIP, REQUIRED_COLUMNS};
use crate::parser::ParseResult;

/// Project the parsed table down to the three required columns.
///
/// The header check is case-sensitive. Every other column is discarded; row
/// count and order are preserved. Income is coerced here: a blank or
/// non-numeric `AVG_INC_HH` becomes the invalid marker, not an error.
///
/// # Errors
/// [`SchemaError::MissingColumns`] when any required column is absent.
pub fn project(parsed: &ParseResult) -> SchemaResult<Vec<Record>> {
    let missing: Vec<String> = REQUIRED_COLUMNS
        .into_iter()
        .filter(|col| !parsed.headers.iter().any(|h| h.as_str() == *col))
        .map(String::from)
        .collect();

    if !missing.is_empty() {
        return Err(SchemaError::MissingColumns(missing));
    }

    let records = parsed
        .records
        .iter()
        .map(|row| Record {
            zip: field_str(row, COL_ZIP),
            coordinates: field_str(row, COL_COORDINATES),
            avg_income_household: coerce_decimal(&field_str(row, COL_AVG_INC_HH)),
        })
        .collect();

    Ok(records)
}

/// Extract a field as an owned string, empty when absent or non-string.
fn field_str(row: &Value, column: &str) -> String {
    row.get(column)
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string()
}
