//! Conversion between calendar dates and crop-cycle day numbers.

use chrono::{Days, NaiveDate};

use crate::error::CalendarError;

/// Returns the 1-indexed cycle day that `today` falls on (sowing day = 1).
///
/// The result may exceed the crop's cycle length; callers decide whether
/// the cycle is complete.
///
/// # Errors
///
/// Returns [`CalendarError::SowingInFuture`] if `sowing` is after `today`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use agrocal_calendar::day_number;
///
/// let sowing = NaiveDate::from_ymd_opt(2024, 11, 1).unwrap();
/// let today = NaiveDate::from_ymd_opt(2024, 11, 10).unwrap();
/// assert_eq!(day_number(sowing, today).unwrap(), 10);
/// ```
pub fn day_number(sowing: NaiveDate, today: NaiveDate) -> Result<u32, CalendarError> {
    if sowing > today {
        return Err(CalendarError::SowingInFuture { sowing, today });
    }
    let elapsed = (today - sowing).num_days();
    Ok(u32::try_from(elapsed).unwrap_or(u32::MAX - 1) + 1)
}

/// Returns the calendar date of cycle day `day` for a crop sown on `sowing`.
///
/// Day 1 is the sowing date itself. Day 0 is treated as day 1. Returns
/// `None` if the date would overflow the supported range.
pub fn date_for_day(sowing: NaiveDate, day: u32) -> Option<NaiveDate> {
    sowing.checked_add_days(Days::new(u64::from(day.saturating_sub(1))))
}

/// Returns the last day of a `total_days` cycle sown on `sowing`.
pub fn completion_date(sowing: NaiveDate, total_days: u32) -> Option<NaiveDate> {
    date_for_day(sowing, total_days)
}
