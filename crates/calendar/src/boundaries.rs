//! Partitioning of a crop cycle into initial, mid and late stages.

use serde::Serialize;

use crate::error::CalendarError;
use crate::stage::GrowthStage;

/// Fraction of the cycle assigned to each of the initial and late stages.
pub(crate) const EDGE_STAGE_FRACTION: f64 = 0.20;

/// Stage boundaries for a cycle of `total_days`.
///
/// The initial and late stages each last `floor(total_days * 0.20)` days;
/// the mid stage takes the remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StageBoundaries {
    total_days: u32,
    initial_duration: u32,
    late_duration: u32,
}

impl StageBoundaries {
    /// Computes the boundaries for a cycle of `total_days`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidCycleLength`] if `total_days` is zero.
    pub fn new(total_days: u32) -> Result<Self, CalendarError> {
        if total_days == 0 {
            return Err(CalendarError::InvalidCycleLength { total_days });
        }
        let edge = (f64::from(total_days) * EDGE_STAGE_FRACTION).floor() as u32;
        Ok(Self {
            total_days,
            initial_duration: edge,
            late_duration: edge,
        })
    }

    /// Length of the cycle in days.
    pub fn total_days(&self) -> u32 {
        self.total_days
    }

    /// Number of days in the initial stage.
    pub fn initial_duration(&self) -> u32 {
        self.initial_duration
    }

    /// Number of days in the mid stage.
    pub fn mid_duration(&self) -> u32 {
        self.total_days - self.initial_duration - self.late_duration
    }

    /// Number of days in the late stage.
    pub fn late_duration(&self) -> u32 {
        self.late_duration
    }

    /// Classifies a 1-indexed day of the cycle (1 = sowing day).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDay`] if `day` is 0 or greater than
    /// `total_days`.
    pub fn stage_for_day(&self, day: u32) -> Result<GrowthStage, CalendarError> {
        if day == 0 || day > self.total_days {
            return Err(CalendarError::InvalidDay {
                day,
                total_days: self.total_days,
            });
        }
        let stage = if day <= self.initial_duration {
            GrowthStage::Initial
        } else if day > self.total_days - self.late_duration {
            GrowthStage::Late
        } else {
            GrowthStage::Mid
        };
        Ok(stage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheat_boundaries() {
        let b = StageBoundaries::new(130).unwrap();
        assert_eq!(b.initial_duration(), 26);
        assert_eq!(b.late_duration(), 26);
        assert_eq!(b.mid_duration(), 78);
        assert_eq!(b.stage_for_day(26).unwrap(), GrowthStage::Initial);
        assert_eq!(b.stage_for_day(27).unwrap(), GrowthStage::Mid);
        assert_eq!(b.stage_for_day(104).unwrap(), GrowthStage::Mid);
        assert_eq!(b.stage_for_day(105).unwrap(), GrowthStage::Late);
    }

    #[test]
    fn floor_applied_to_edges() {
        // 55 * 0.2 = 11, 57 * 0.2 = 11.4 -> 11
        let b = StageBoundaries::new(57).unwrap();
        assert_eq!(b.initial_duration(), 11);
        assert_eq!(b.late_duration(), 11);
        assert_eq!(b.mid_duration(), 35);
    }

    #[test]
    fn tiny_cycle_is_all_mid() {
        let b = StageBoundaries::new(4).unwrap();
        for day in 1..=4 {
            assert_eq!(b.stage_for_day(day).unwrap(), GrowthStage::Mid);
        }
        assert_eq!(b.initial_duration(), 0);
        assert_eq!(b.mid_duration(), 4);
    }

    #[test]
    fn zero_length_rejected() {
        assert_eq!(
            StageBoundaries::new(0).unwrap_err(),
            CalendarError::InvalidCycleLength { total_days: 0 }
        );
    }

    #[test]
    fn out_of_cycle_days_rejected() {
        let b = StageBoundaries::new(100).unwrap();
        assert!(matches!(
            b.stage_for_day(0),
            Err(CalendarError::InvalidDay { day: 0, .. })
        ));
        assert!(matches!(
            b.stage_for_day(101),
            Err(CalendarError::InvalidDay { day: 101, .. })
        ));
    }
}
