//! Error types for the agrocal-fertilizer crate.

/// Error type for all fallible operations in the agrocal-fertilizer crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FertilizerError {
    /// Returned when a field area is non-finite or not positive.
    #[error("invalid area: {area} acres (must be finite and > 0)")]
    InvalidArea {
        /// The rejected area.
        area: f64,
    },

    /// Returned when a requested nutrient amount is negative or non-finite.
    #[error("invalid {nutrient} dose: {value} kg (must be finite and >= 0)")]
    InvalidDose {
        /// Nutrient name (`"nitrogen"`, `"phosphorus"` or `"potassium"`).
        nutrient: &'static str,
        /// The rejected amount.
        value: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_area() {
        let e = FertilizerError::InvalidArea { area: -1.0 };
        assert_eq!(e.to_string(), "invalid area: -1 acres (must be finite and > 0)");
    }

    #[test]
    fn error_invalid_dose() {
        let e = FertilizerError::InvalidDose {
            nutrient: "potassium",
            value: f64::NAN,
        };
        assert_eq!(
            e.to_string(),
            "invalid potassium dose: NaN kg (must be finite and >= 0)"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<FertilizerError>();
    }
}
