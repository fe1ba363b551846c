//! Wire model for the sunrise-sunset.org JSON API.
//!
//! These are our own types, decoupled from the transport. All timestamps are
//! kept as the API's ISO-8601 strings; with a consistent UTC offset they
//! compare lexicographically in chronological order, so the selector never
//! needs to parse them.

use serde::Deserialize;

/// Sunrise/sunset/twilight timings for one coordinate on the current date.
///
/// Field names match the API's `results` object.
#[derive(Debug, Clone, Deserialize)]
pub struct TwilightTimes {
    /// Sunrise time, ISO-8601 with UTC offset.
    pub sunrise: String,
    /// Sunset time, ISO-8601 with UTC offset.
    pub sunset: String,
    /// Solar noon time, ISO-8601 with UTC offset.
    pub solar_noon: String,
    /// Duration between sunrise and sunset, in seconds.
    pub day_length: u64,
    pub civil_twilight_begin: String,
    pub civil_twilight_end: String,
    pub nautical_twilight_begin: String,
    pub nautical_twilight_end: String,
    pub astronomical_twilight_begin: String,
    pub astronomical_twilight_end: String,
}

/// One parsed API response: the timing data plus the API status string.
#[derive(Debug, Clone, Deserialize)]
pub struct TwilightRecord {
    pub results: TwilightTimes,
    pub status: String,
}

impl TwilightRecord {
    /// Whether this record carries real data.
    ///
    /// The API returns epoch-zero placeholder timings with `day_length` 0
    /// for degenerate coordinates; those records must be excluded before
    /// selection.
    pub fn is_valid(&self) -> bool {
        self.results.day_length > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_deserialize_from_api_shape() {
        let json = r#"{
            "results": {
                "sunrise": "2024-01-01T06:00:00+00:00",
                "sunset": "2024-01-01T16:00:00+00:00",
                "solar_noon": "2024-01-01T11:00:00+00:00",
                "day_length": 36000,
                "civil_twilight_begin": "2024-01-01T05:30:00+00:00",
                "civil_twilight_end": "2024-01-01T16:30:00+00:00",
                "nautical_twilight_begin": "2024-01-01T05:00:00+00:00",
                "nautical_twilight_end": "2024-01-01T17:00:00+00:00",
                "astronomical_twilight_begin": "2024-01-01T04:30:00+00:00",
                "astronomical_twilight_end": "2024-01-01T17:30:00+00:00"
            },
            "status": "OK"
        }"#;

        let record: TwilightRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.status, "OK");
        assert_eq!(record.results.sunrise, "2024-01-01T06:00:00+00:00");
        assert_eq!(record.results.day_length, 36000);
        assert!(record.is_valid());
    }

    #[test]
    fn test_record_deserialize_ignores_extra_fields() {
        // The API also returns a "tzid" field in some modes
        let json = r#"{
            "results": {
                "sunrise": "2024-06-21T03:43:00+00:00",
                "sunset": "2024-06-21T20:21:00+00:00",
                "solar_noon": "2024-06-21T12:02:00+00:00",
                "day_length": 59880,
                "civil_twilight_begin": "2024-06-21T02:58:00+00:00",
                "civil_twilight_end": "2024-06-21T21:06:00+00:00",
                "nautical_twilight_begin": "2024-06-21T01:55:00+00:00",
                "nautical_twilight_end": "2024-06-21T22:09:00+00:00",
                "astronomical_twilight_begin": "2024-06-21T00:00:01+00:00",
                "astronomical_twilight_end": "2024-06-21T23:59:59+00:00"
            },
            "status": "OK",
            "tzid": "UTC"
        }"#;

        let record: TwilightRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.results.day_length, 59880);
    }

    #[test]
    fn test_zero_day_length_placeholder_is_invalid() {
        let json = r#"{
            "results": {
                "sunrise": "1970-01-01T00:00:01+00:00",
                "sunset": "1970-01-01T00:00:01+00:00",
                "solar_noon": "1970-01-01T00:00:01+00:00",
                "day_length": 0,
                "civil_twilight_begin": "1970-01-01T00:00:01+00:00",
                "civil_twilight_end": "1970-01-01T00:00:01+00:00",
                "nautical_twilight_begin": "1970-01-01T00:00:01+00:00",
                "nautical_twilight_end": "1970-01-01T00:00:01+00:00",
                "astronomical_twilight_begin": "1970-01-01T00:00:01+00:00",
                "astronomical_twilight_end": "1970-01-01T00:00:01+00:00"
            },
            "status": "OK"
        }"#;

        let record: TwilightRecord = serde_json::from_str(json).unwrap();
        assert!(!record.is_valid());
    }
}
