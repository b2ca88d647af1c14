//! Operating theater scheduling engine.
//!
//! Builds conflict-free daily schedules for surgical cases across
//! parallel operating theaters, honoring surgeon and equipment
//! exclusivity with mandatory turnover between cases. Produces
//! comparative utilization and overtime metrics against a
//! submission-order baseline, audits finished schedules for
//! double-bookings, and re-plans the day around incoming emergencies.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Case`, `Priority`, `TimeSlot`,
//!   `DayWindow`, `ScheduledCase`, `ScheduleResult`, `KpiSummary`,
//!   `FullSchedule`
//! - **`config`**: `SuiteConfig` theater suite parameters
//! - **`ledger`**: Per-resource booking timelines behind feasibility checks
//! - **`policy`**: Pluggable case sequencing rules (`CaseRanking`)
//! - **`scheduler`**: Greedy placement, KPI computation, emergency re-planning
//! - **`conflict`**: Double-booking audit over finished schedules
//! - **`validation`**: Input integrity checks (duplicate IDs, blank resources)
//! - **`generator`**: Seeded random roster generation
//! - **`samples`**: Small hand-written demonstration roster
//! - **`assistant`**: Serializable snapshot and trait seam for an external
//!   natural-language assistant
//!
//! # Architecture
//!
//! Pure domain logic: no I/O, no persistence, no wall clock. A planning
//! run is a function from a case roster and a `SuiteConfig` to a
//! `FullSchedule`; callers own storage and presentation. Scheduling is
//! deterministic, so equal inputs always produce equal plans.
//!
//! # References
//!
//! - Cardoen, Demeulemeester & Beliën (2010), "Operating room planning
//!   and scheduling: A literature review"
//! - Guerriero & Guido (2011), "Operational research in the management
//!   of the operating theatre: a survey"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod assistant;
pub mod config;
pub mod conflict;
pub mod generator;
pub mod ledger;
pub mod models;
pub mod policy;
pub mod samples;
pub mod scheduler;
pub mod validation;
