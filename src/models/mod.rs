//! Operating-theater domain models.
//!
//! Core data types for the scheduling problem and its solutions: the
//! day window and interval primitives, the surgical case roster, and
//! the placed-schedule snapshots produced by a run.
//!
//! # Vocabulary
//!
//! | Type | Clinical meaning |
//! |------|------------------|
//! | [`Case`] | One procedure needing a theater, surgeon, and equipment |
//! | [`Priority`] | Clinical urgency class, 1 (emergency) to 5 (elective) |
//! | [`DayWindow`] | The nominal operating day; beyond it is overtime |
//! | [`ScheduledCase`] | A case fixed to a theater and start minute |
//! | [`FullSchedule`] | Optimized + baseline placements with KPIs |

mod case;
mod schedule;
mod time;

pub use case::{Case, Priority, MIN_CASE_MIN};
pub use schedule::{FullSchedule, KpiSummary, ScheduleResult, ScheduledCase};
pub use time::{format_clock, DayWindow, TimeSlot};
