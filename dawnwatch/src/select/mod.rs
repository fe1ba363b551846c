//! Earliest-sunrise selection.
//!
//! Placeholder records (day length 0) are discarded before comparison.
//! Sunrise strings are compared lexicographically, which matches
//! chronological order for ISO-8601 timestamps with a consistent offset.

use thiserror::Error;
use tracing::debug;

use crate::twilight::TwilightRecord;

/// Errors that can occur during selection.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SelectError {
    /// Every fetched record was a placeholder; there is nothing to report.
    #[error("No valid twilight data in any fetched record")]
    NoValidRecords,
}

/// Returns the valid record with the earliest sunrise.
///
/// Ties return the first such record in iteration order. Fails with
/// [`SelectError::NoValidRecords`] when no record has a positive day length.
pub fn earliest_sunrise(records: &[TwilightRecord]) -> Result<&TwilightRecord, SelectError> {
    let mut earliest: Option<&TwilightRecord> = None;

    for record in records.iter().filter(|r| r.is_valid()) {
        // Strict < keeps the first record on ties
        let replace = match earliest {
            Some(best) => record.results.sunrise < best.results.sunrise,
            None => true,
        };
        if replace {
            earliest = Some(record);
        }
    }

    if let Some(record) = earliest {
        debug!(
            sunrise = %record.results.sunrise,
            day_length = record.results.day_length,
            "earliest sunrise selected"
        );
    }

    earliest.ok_or(SelectError::NoValidRecords)
}
