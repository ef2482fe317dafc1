//! Error types for the agrocal-reference crate.

/// Error type for reference-table lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReferenceError {
    /// Returned when a crop name is not in the crop table.
    #[error("unknown crop: {name:?}")]
    UnknownCrop {
        /// The name that was looked up.
        name: String,
    },

    /// Returned when a soil class is not in the soil table.
    #[error("unknown soil type: {name:?}")]
    UnknownSoil {
        /// The name that was looked up.
        name: String,
    },
}
