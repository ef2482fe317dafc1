//! Error types for the agrocal-et0 crate.

use crate::weather::WeatherField;

/// Error type for all fallible operations in the agrocal-et0 crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Et0Error {
    /// Returned when a live reading claims to be complete but lacks a field.
    #[error("incomplete weather reading: missing {field}")]
    IncompleteWeather {
        /// The field that was not supplied.
        field: WeatherField,
    },

    /// Returned when a weather value is non-finite or physically implausible.
    #[error("invalid {field}: {value} ({reason})")]
    InvalidWeather {
        /// The offending field.
        field: WeatherField,
        /// The rejected value.
        value: f64,
        /// Accepted range or other constraint.
        reason: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_incomplete_weather() {
        let e = Et0Error::IncompleteWeather {
            field: WeatherField::WindSpeed,
        };
        assert_eq!(e.to_string(), "incomplete weather reading: missing wind speed");
    }

    #[test]
    fn error_invalid_weather() {
        let e = Et0Error::InvalidWeather {
            field: WeatherField::RelativeHumidity,
            value: 120.0,
            reason: "must be within 0..=100 %",
        };
        assert_eq!(
            e.to_string(),
            "invalid relative humidity: 120 (must be within 0..=100 %)"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<Et0Error>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<Et0Error>();
    }
}
