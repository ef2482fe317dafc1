//! Forecast day sequences for a crop cycle.

/// Generates the cycle days covered by a forecast.
///
/// Starting from `start_day`, produces at most `horizon` consecutive day
/// numbers, stopping early once a day would exceed `total_days`. A
/// `start_day` already past the cycle yields an empty sequence.
///
/// # Example
///
/// ```
/// use agrocal_calendar::forecast_days;
///
/// // Five days left in a 130-day cycle.
/// assert_eq!(forecast_days(126, 31, 130), vec![126, 127, 128, 129, 130]);
/// ```
pub fn forecast_days(start_day: u32, horizon: u32, total_days: u32) -> Vec<u32> {
    let start = start_day.max(1);
    (start..=total_days).take(horizon as usize).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_horizon() {
        assert!(forecast_days(1, 0, 130).is_empty());
    }

    #[test]
    fn full_horizon_inside_cycle() {
        let days = forecast_days(10, 31, 130);
        assert_eq!(days.len(), 31);
        assert_eq!(days.first(), Some(&10));
        assert_eq!(days.last(), Some(&40));
    }

    #[test]
    fn clipped_at_cycle_end() {
        let days = forecast_days(120, 31, 130);
        assert_eq!(days.len(), 11);
        assert_eq!(days.last(), Some(&130));
    }

    #[test]
    fn start_past_cycle() {
        assert!(forecast_days(131, 31, 130).is_empty());
    }

    #[test]
    fn contiguous() {
        let days = forecast_days(1, 31, 55);
        assert!(days.windows(2).all(|w| w[1] == w[0] + 1));
    }
}
