//! Coordinate enrichment: split the composite string, coerce each half.

use crate::models::{coerce_decimal, EnrichedRecord, Record, COORDINATE_SEPARATOR};

/// Split a composite coordinate string into its latitude and longitude halves.
///
/// The split is on the literal `", "` and must yield exactly two parts;
/// anything else (missing separator, extra separators, empty string) returns
/// `None`.
pub fn split_coordinates(coordinates: &str) -> Option<(&str, &str)> {
    let mut parts = coordinates.split(COORDINATE_SEPARATOR);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(lat), Some(lon), None) => Some((lat, lon)),
        _ => None,
    }
}

/// Derive latitude/longitude for every record.
///
/// Row-local and non-fatal: a malformed coordinate string marks both derived
/// fields invalid for that row only; a split that succeeds but yields a
/// non-numeric half marks just that half invalid. Row count and order are
/// preserved.
pub fn enrich(records: Vec<Record>) -> Vec<EnrichedRecord> {
    records
        .into_iter()
        .map(|record| {
            let (latitude, longitude) = match split_coordinates(&record.coordinates) {
                Some((lat, lon)) => (coerce_decimal(lat), coerce_decimal(lon)),
                None => (None, None),
            };

            EnrichedRecord {
                zip: record.zip,
                coordinates: record.coordinates,
                avg_income_household: record.avg_income_household,
                latitude,
                longitude,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(coordinates: &str) -> Record {
        Record {
            zip: "10007".into(),
            coordinates: coordinates.into(),
            avg_income_household: Some(90000.0),
        }
    }

    #[test]
    fn test_split_valid() {
        assert_eq!(
            split_coordinates("40.7128, -74.0060"),
            Some(("40.7128", "-74.0060"))
        );
    }

    #[test]
    fn test_split_requires_exactly_two_parts() {
        assert_eq!(split_coordinates("invalidformat"), None);
        assert_eq!(split_coordinates(""), None);
        assert_eq!(split_coordinates("1, 2, 3"), None);
        // Comma without the space is not the separator
        assert_eq!(split_coordinates("40.7128,-74.0060"), None);
    }

    #[test]
    fn test_enrich_valid_pair() {
        let enriched = enrich(vec![record("40.7128, -74.0060")]);

        assert_eq!(enriched[0].latitude, Some(40.7128));
        assert_eq!(enriched[0].longitude, Some(-74.0060));
        // Original fields carried through untouched
        assert_eq!(enriched[0].coordinates, "40.7128, -74.0060");
        assert_eq!(enriched[0].avg_income_household, Some(90000.0));
    }

    #[test]
    fn test_enrich_malformed_marks_both_invalid() {
        let enriched = enrich(vec![record("invalidformat")]);

        assert_eq!(enriched[0].latitude, None);
        assert_eq!(enriched[0].longitude, None);
        assert_eq!(enriched[0].avg_income_household, Some(90000.0));
    }

    #[test]
    fn test_enrich_partial_numeric() {
        let enriched = enrich(vec![record("north, -74.0060")]);

        assert_eq!(enriched[0].latitude, None);
        assert_eq!(enriched[0].longitude, Some(-74.0060));
    }

    #[test]
    fn test_enrich_is_row_local() {
        let enriched = enrich(vec![record("bogus"), record("1.5, -2.5")]);

        assert_eq!(enriched.len(), 2);
        assert_eq!(enriched[0].latitude, None);
        assert_eq!(enriched[1].latitude, Some(1.5));
        assert_eq!(enriched[1].longitude, Some(-2.5));
    }
}
