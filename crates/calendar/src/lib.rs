//! # agrocal-calendar
//!
//! Day arithmetic for a single crop cycle.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["sowing date + today"] -->|"day_number()"| B["day (1..=total)"]
//!     B -->|"StageBoundaries::stage_for_day()"| C["GrowthStage"]
//!     B -->|"date_for_day()"| D["NaiveDate"]
//!     B -->|"forecast_days()"| E["Vec of day numbers"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use agrocal_calendar::{GrowthStage, StageBoundaries};
//!
//! let bounds = StageBoundaries::new(130).unwrap();
//! assert_eq!(bounds.stage_for_day(1).unwrap(), GrowthStage::Initial);
//! assert_eq!(bounds.stage_for_day(60).unwrap(), GrowthStage::Mid);
//! assert_eq!(bounds.stage_for_day(130).unwrap(), GrowthStage::Late);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `stage` | Growth stage enum |
//! | `boundaries` | Stage partitioning of a cycle |
//! | `sowing` | Sowing-date to day-number conversion |
//! | `sequence` | Forecast day sequences clipped to the cycle |
//! | `error` | Error types |

mod boundaries;
mod error;
mod sequence;
mod sowing;
mod stage;

pub use boundaries::StageBoundaries;
pub use error::CalendarError;
pub use sequence::forecast_days;
pub use sowing::{completion_date, date_for_day, day_number};
pub use stage::GrowthStage;
