//! Greedy theater scheduling, KPI evaluation, and re-optimization.
//!
//! Provides a priority-driven scheduler over parallel operating
//! theaters, comparative schedule quality metrics, and emergency
//! re-planning.
//!
//! # Algorithm
//!
//! `TheaterScheduler` uses a greedy, priority-driven,
//! earliest-feasible-theater heuristic. It is not optimal, but places
//! every case deterministically and never reports an infeasible day:
//! when the regular day cannot hold a case, placement spills into
//! overtime instead of failing.
//!
//! # KPI
//!
//! `compute_kpis` contrasts the optimized plan with a submission-order
//! baseline: utilization rate, hourly utilization series, and
//! projected overtime.
//!
//! # Re-planning
//!
//! `TheaterScheduler::insert_emergency` rebuilds the day around an
//! incoming emergency and reports which elective cases slipped.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3-4
//! - Cardoen, Demeulemeester & Beliën (2010), "Operating room planning
//!   and scheduling: A literature review"

mod greedy;
mod metrics;
mod replan;

pub use greedy::TheaterScheduler;
pub use metrics::compute_kpis;
pub use replan::{DelayedCase, ReplanOutcome};
