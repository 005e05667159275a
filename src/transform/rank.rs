//! Ranking: stable descending sort by income, top-N truncation.

use std::cmp::Ordering;

use crate::models::EnrichedRecord;

/// Sort records by average household income, highest first.
///
/// The sort is stable, so ties keep their input order. Records with an
/// invalid/missing income always sort after every valid value. Coercion
/// normalizes NaN to the invalid marker, so valid incomes are totally
/// ordered.
pub fn sort_by_income_desc(mut records: Vec<EnrichedRecord>) -> Vec<EnrichedRecord> {
    records.sort_by(|a, b| {
        match (a.avg_income_household, b.avg_income_household) {
            (Some(x), Some(y)) => y.total_cmp(&x),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    });
    records
}

/// Take the first `n` records of the ranked table.
pub fn top(mut records: Vec<EnrichedRecord>, n: usize) -> Vec<EnrichedRecord> {
    records.truncate(n);
    records
}
