//! Report formatting.

use crate::twilight::TwilightRecord;

/// Converts a day length in seconds to hours with one decimal place.
///
/// Uses standard rounding, not truncation: 5430 seconds renders as "1.5".
pub fn day_length_hours(seconds: u64) -> String {
    format!("{:.1}", seconds as f64 / 3600.0)
}

/// Renders the final report line for the winning record.
pub fn report_line(record: &TwilightRecord) -> String {
    format!(
        "Earliest sunrise day length: {} hours",
        day_length_hours(record.results.day_length)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::twilight::tests::record;

    #[test]
    fn test_one_hour() {
        assert_eq!(day_length_hours(3600), "1.0");
    }

    #[test]
    fn test_one_and_a_half_hours() {
        assert_eq!(day_length_hours(5400), "1.5");
    }

    #[test]
    fn test_ten_hours() {
        assert_eq!(day_length_hours(36000), "10.0");
    }

    #[test]
    fn test_rounds_rather_than_truncates() {
        // 3599 s = 0.9997 h, rounds up to 1.0
        assert_eq!(day_length_hours(3599), "1.0");
        // 3420 s = 0.95 h, rounds to one decimal
        assert_eq!(day_length_hours(3420), "0.9");
    }

    #[test]
    fn test_report_line() {
        let winner = record("2024-01-01T06:00:00+00:00", 36000);
        assert_eq!(
            report_line(&winner),
            "Earliest sunrise day length: 10.0 hours"
        );
    }
}
