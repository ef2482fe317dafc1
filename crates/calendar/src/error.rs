//! Error types for the agrocal-calendar crate.

use chrono::NaiveDate;

/// Error type for all fallible operations in the agrocal-calendar crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a cycle length is zero.
    #[error("invalid cycle length: {total_days} days (must be > 0)")]
    InvalidCycleLength {
        /// The rejected cycle length.
        total_days: u32,
    },

    /// Returned when a day number is outside the crop cycle.
    #[error("invalid day: {day} (must be 1..={total_days})")]
    InvalidDay {
        /// The rejected day number.
        day: u32,
        /// Length of the cycle in days.
        total_days: u32,
    },

    /// Returned when the sowing date lies after the reference date.
    #[error("sowing date {sowing} is after {today}")]
    SowingInFuture {
        /// The sowing date supplied.
        sowing: NaiveDate,
        /// The reference ("today") date.
        today: NaiveDate,
    },
}
