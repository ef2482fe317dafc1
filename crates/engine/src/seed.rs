//! Restoring a mid-cycle simulation.

use tracing::debug;

use agrocal_et0::WeatherSample;

use crate::config::SensorSeeding;
use crate::error::EngineError;
use crate::state::CalendarState;

impl CalendarState {
    /// Seeds depletion from a soil-moisture sensor reading taken on `day`.
    ///
    /// `depletion = TAW * (1 - moisture_percent / 100)`, with TAW at the root
    /// depth of `day`. What happens to days `1..day` depends on the
    /// configured [`SensorSeeding`]:
    ///
    /// - `SkipReplay`: the state resumes directly at `day`.
    /// - `ReplayHistory`: days `1..day` are replayed with default weather
    ///   on top of the seeded depletion.
    ///
    /// Returns the depletion (mm) after seeding.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::AlreadyStarted`] if the state has advanced,
    /// [`EngineError::InvalidMoisture`] for a reading outside 0..=100, or
    /// [`EngineError::Calendar`] if `day` is outside the cycle.
    pub fn seed_from_moisture(&mut self, day: u32, moisture_percent: f64) -> Result<f64, EngineError> {
        self.ensure_fresh()?;
        if !(0.0..=100.0).contains(&moisture_percent) {
            return Err(EngineError::InvalidMoisture {
                percent: moisture_percent,
            });
        }
        let params = self.stage_for_day(day)?;
        let taw = self.taw_mm(params.root_depth_m);
        let seeded = taw * (1.0 - moisture_percent / 100.0);

        match self.config().sensor_seeding() {
            SensorSeeding::SkipReplay => {
                self.depletion_mm = seeded;
                self.next_day = day;
            }
            SensorSeeding::ReplayHistory => {
                self.depletion_mm = seeded;
                self.replay_until(day)?;
            }
        }
        debug!(
            day,
            moisture_percent,
            seeded,
            depletion = self.depletion_mm,
            seeding = ?self.config().sensor_seeding(),
            "seeded from sensor"
        );
        Ok(self.depletion_mm)
    }

    /// Sets depletion directly and resumes the state at `day`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::AlreadyStarted`] if the state has advanced,
    /// [`EngineError::InvalidDepletion`] for a negative or non-finite value,
    /// or [`EngineError::Calendar`] if `day` is outside the cycle.
    pub fn seed_depletion(&mut self, day: u32, depletion_mm: f64) -> Result<(), EngineError> {
        self.ensure_fresh()?;
        if !depletion_mm.is_finite() || depletion_mm < 0.0 {
            return Err(EngineError::InvalidDepletion { depletion_mm });
        }
        self.stage_for_day(day)?;
        self.depletion_mm = depletion_mm;
        self.next_day = day;
        Ok(())
    }

    /// Advances through every day before `day` with default weather,
    /// discarding the records.
    ///
    /// A `day` at or before [`next_day`](Self::next_day) is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::CycleComplete`] if `day - 1` is past the cycle.
    /// The state is unchanged on error.
    pub fn replay_until(&mut self, day: u32) -> Result<(), EngineError> {
        let total_days = self.total_days();
        let last = day.saturating_sub(1);
        if last > total_days {
            return Err(EngineError::CycleComplete {
                day: last,
                total_days,
            });
        }
        let weather = WeatherSample::default();
        for d in self.next_day..day {
            self.daily_advice(d, &weather)?;
        }
        Ok(())
    }

    fn ensure_fresh(&self) -> Result<(), EngineError> {
        if self.next_day != 1 || self.depletion_mm != 0.0 {
            return Err(EngineError::AlreadyStarted {
                next_day: self.next_day,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;

    fn state(seeding: SensorSeeding) -> CalendarState {
        let config = EngineConfig::new().with_sensor_seeding(seeding);
        CalendarState::resolve("Wheat", "loamy", 1.0, config).unwrap()
    }

    #[test]
    fn skip_replay_uses_reading_only() {
        let mut s = state(SensorSeeding::SkipReplay);
        // Day 60 is mid stage: TAW = 0.16 * 1000 * 0.6 = 96 mm.
        let d = s.seed_from_moisture(60, 75.0).unwrap();
        assert!((d - 24.0).abs() < 1e-9);
        assert_eq!(s.next_day(), 60);
    }

    #[test]
    fn replay_history_advances_prior_days() {
        let mut skip = state(SensorSeeding::SkipReplay);
        let mut replay = state(SensorSeeding::ReplayHistory);
        skip.seed_from_moisture(10, 90.0).unwrap();
        replay.seed_from_moisture(10, 90.0).unwrap();
        assert_eq!(replay.next_day(), 10);
        assert!(replay.depletion_mm() > skip.depletion_mm());
    }

    #[test]
    fn moisture_out_of_range() {
        let mut s = state(SensorSeeding::SkipReplay);
        for pct in [-1.0, 100.5, f64::NAN] {
            assert!(matches!(
                s.seed_from_moisture(5, pct),
                Err(EngineError::InvalidMoisture { .. })
            ));
        }
    }

    #[test]
    fn saturated_soil_seeds_zero() {
        let mut s = state(SensorSeeding::SkipReplay);
        assert_eq!(s.seed_from_moisture(5, 100.0).unwrap(), 0.0);
    }

    #[test]
    fn seeding_twice_rejected() {
        let mut s = state(SensorSeeding::SkipReplay);
        s.seed_depletion(3, 6.0).unwrap();
        assert_eq!(
            s.seed_depletion(3, 6.0).unwrap_err(),
            EngineError::AlreadyStarted { next_day: 3 }
        );
    }

    #[test]
    fn replay_past_cycle_leaves_state_untouched() {
        let mut s = CalendarState::create("Okra", "loamy", 1.0).unwrap();
        assert_eq!(s.total_days(), 55);
        assert_eq!(
            s.replay_until(60).unwrap_err(),
            EngineError::CycleComplete {
                day: 59,
                total_days: 55
            }
        );
        assert_eq!(s.next_day(), 1);
        assert_eq!(s.depletion_mm(), 0.0);

        // Replaying through the last day is still allowed.
        s.replay_until(56).unwrap();
        assert!(s.is_complete());
    }

    #[test]
    fn seed_past_cycle_rejected() {
        let mut s = state(SensorSeeding::SkipReplay);
        assert!(matches!(
            s.seed_depletion(131, 1.0),
            Err(EngineError::Calendar(_))
        ));
        assert!(matches!(
            s.seed_depletion(3, -1.0),
            Err(EngineError::InvalidDepletion { .. })
        ));
    }
}
