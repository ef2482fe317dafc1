//! Error types for the agrocal-engine crate.

use agrocal_calendar::CalendarError;
use agrocal_et0::Et0Error;
use agrocal_fertilizer::FertilizerError;
use agrocal_reference::ReferenceError;

/// Error type for all fallible operations in the agrocal-engine crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    /// Crop or soil lookup failed.
    #[error(transparent)]
    Reference(#[from] ReferenceError),

    /// Day or date arithmetic failed.
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    /// A weather reading was incomplete or out of range.
    #[error(transparent)]
    Weather(#[from] Et0Error),

    /// A nutrient schedule entry could not be decomposed.
    #[error(transparent)]
    Fertilizer(#[from] FertilizerError),

    /// Returned when the field area is non-finite or not positive.
    #[error("invalid area: {area} acres (must be finite and > 0)")]
    InvalidArea {
        /// The rejected area.
        area: f64,
    },

    /// Returned when a day is advanced out of chronological order.
    #[error("day out of order: expected day {expected}, got day {got}")]
    DayOutOfOrder {
        /// The only day the state accepts next.
        expected: u32,
        /// The day that was requested.
        got: u32,
    },

    /// Returned when advancing past the last day of the cycle.
    #[error("crop cycle complete: day {day} is past the {total_days}-day cycle")]
    CycleComplete {
        /// The day that was requested.
        day: u32,
        /// Length of the cycle.
        total_days: u32,
    },

    /// Returned when a soil-moisture reading is outside 0..=100 %.
    #[error("invalid soil moisture: {percent}% (must be in 0..=100)")]
    InvalidMoisture {
        /// The rejected reading.
        percent: f64,
    },

    /// Returned when a seeded depletion is negative or non-finite.
    #[error("invalid depletion: {depletion_mm} mm (must be finite and >= 0)")]
    InvalidDepletion {
        /// The rejected depletion.
        depletion_mm: f64,
    },

    /// Returned when seeding a state that has already advanced.
    #[error("simulation already started: next day is {next_day}")]
    AlreadyStarted {
        /// The next day the state expects.
        next_day: u32,
    },

    /// Returned when an [`EngineConfig`](crate::EngineConfig) fails validation.
    #[error("invalid config: {reason}")]
    InvalidConfig {
        /// Description of what is invalid.
        reason: String,
    },
}
