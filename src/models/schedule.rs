//! Schedule output models.
//!
//! A scheduling run turns a roster of [`Case`]s into placed
//! [`ScheduledCase`]s grouped in a [`ScheduleResult`]; a full run pairs
//! the optimized result with a baseline plus comparative KPIs. Results
//! are snapshots: superseded wholesale by the next run, never patched
//! in place.

use serde::{Deserialize, Serialize};

use super::{Case, DayWindow, Priority, TimeSlot};

/// A case fixed to a theater and a start minute.
///
/// Produced only by the placement engine; immutable within a run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduledCase {
    /// Case identifier.
    pub id: String,
    /// Procedure name.
    pub name: String,
    /// Operating surgeon.
    pub surgeon: String,
    /// Required equipment set.
    pub equipment: String,
    /// Clinical priority class.
    pub priority: Priority,
    /// Theater (lane) index, 0-based.
    pub theater: usize,
    /// Start minute (inclusive).
    pub start_min: i64,
    /// End minute (exclusive), start plus duration.
    pub end_min: i64,
}

impl ScheduledCase {
    /// Places a case in a theater at a start minute.
    pub fn place(case: &Case, theater: usize, start_min: i64) -> Self {
        Self {
            id: case.id.clone(),
            name: case.name.clone(),
            surgeon: case.surgeon.clone(),
            equipment: case.equipment.clone(),
            priority: case.priority,
            theater,
            start_min,
            end_min: start_min + case.duration_min,
        }
    }

    /// Procedure duration (minutes).
    #[inline]
    pub fn duration_min(&self) -> i64 {
        self.end_min - self.start_min
    }

    /// The occupied core interval (without turnover).
    #[inline]
    pub fn slot(&self) -> TimeSlot {
        TimeSlot::new(self.start_min, self.end_min)
    }

    /// Minutes the patient waits past the day opening.
    pub fn wait_min(&self, day: &DayWindow) -> i64 {
        (self.start_min - day.start_min).max(0)
    }
}

/// One placement outcome: the placed cases plus their cost metrics.
///
/// `cases` is sorted ascending by start minute (ties keep placement
/// order). Within each theater, consecutive cases are separated by at
/// least the turnover buffer; no surgeon or equipment set is booked
/// twice over overlapping core intervals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduleResult {
    /// Placed cases, sorted by start minute.
    pub cases: Vec<ScheduledCase>,
    /// Idle theater minutes inside the nominal day.
    pub idle_min: i64,
    /// Minutes of theater time past the nominal close, summed over lanes.
    pub overtime_min: i64,
    /// Priority-weighted waiting minutes.
    pub wait_cost: i64,
}

impl ScheduleResult {
    /// An empty result with zeroed metrics.
    pub fn empty() -> Self {
        Self {
            cases: Vec::new(),
            idle_min: 0,
            overtime_min: 0,
            wait_cost: 0,
        }
    }

    /// Cases placed in one theater, in start order.
    pub fn cases_for_theater(&self, theater: usize) -> Vec<&ScheduledCase> {
        self.cases.iter().filter(|c| c.theater == theater).collect()
    }

    /// Finds a placed case by ID.
    pub fn case_by_id(&self, id: &str) -> Option<&ScheduledCase> {
        self.cases.iter().find(|c| c.id == id)
    }

    /// Latest end minute across all cases (0 when empty).
    pub fn makespan_min(&self) -> i64 {
        self.cases.iter().map(|c| c.end_min).max().unwrap_or(0)
    }

    /// Total operating minutes across all cases.
    pub fn total_case_min(&self) -> i64 {
        self.cases.iter().map(|c| c.duration_min()).sum()
    }
}

/// Comparative key performance indicators for one run.
///
/// Rates are percentages rounded to one decimal; the series hold
/// per-bucket utilization percentages over the nominal day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KpiSummary {
    /// Optimized utilization: case minutes over theater capacity (%).
    pub utilization_rate: f64,
    /// Baseline utilization (%).
    pub baseline_utilization_rate: f64,
    /// Optimized per-bucket utilization over the day (%).
    pub utilization_series: Vec<f64>,
    /// Baseline per-bucket utilization over the day (%).
    pub baseline_series: Vec<f64>,
    /// Optimized minus baseline utilization (percentage points).
    pub utilization_delta: f64,
    /// Projected overtime of the optimized schedule (minutes).
    pub total_projected_overtime_min: i64,
    /// Overtime of the baseline schedule (minutes).
    pub baseline_overtime_min: i64,
}

impl KpiSummary {
    /// Whether the optimized schedule meets operational targets
    /// (e.g. utilization above 85% with under 10 minutes of overtime).
    pub fn meets_targets(&self, min_utilization_rate: f64, max_overtime_min: i64) -> bool {
        self.utilization_rate >= min_utilization_rate
            && self.total_projected_overtime_min <= max_overtime_min
    }
}

/// The complete outcome of one generate action: optimized placement,
/// baseline placement, and the KPIs comparing them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FullSchedule {
    /// Priority-ordered placement.
    pub optimized: ScheduleResult,
    /// Submission-ordered placement.
    pub baseline: ScheduleResult,
    /// Comparative indicators.
    pub kpis: KpiSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placed(id: &str, theater: usize, start: i64, duration: i64) -> ScheduledCase {
        let case = Case::new(id).with_duration_min(duration);
        ScheduledCase::place(&case, theater, start)
    }

    #[test]
    fn test_place_copies_case() {
        let case = Case::new("S-1")
            .with_name("Hip Replacement")
            .with_duration_min(120)
            .with_surgeon("Dr. Smith")
            .with_equipment("C-Arm")
            .with_priority(Priority::Urgent);
        let sc = ScheduledCase::place(&case, 2, 30);

        assert_eq!(sc.id, "S-1");
        assert_eq!(sc.name, "Hip Replacement");
        assert_eq!(sc.theater, 2);
        assert_eq!(sc.start_min, 30);
        assert_eq!(sc.end_min, 150);
        assert_eq!(sc.duration_min(), 120);
        assert_eq!(sc.slot(), TimeSlot::new(30, 150));
    }

    #[test]
    fn test_wait_min() {
        let day = DayWindow::default();
        assert_eq!(placed("a", 0, 0, 60).wait_min(&day), 0);
        assert_eq!(placed("b", 0, 90, 60).wait_min(&day), 90);

        let late_day = DayWindow::new(60, 660);
        assert_eq!(placed("c", 0, 45, 30).wait_min(&late_day), 0);
    }

    #[test]
    fn test_result_helpers() {
        let result = ScheduleResult {
            cases: vec![
                placed("a", 0, 0, 60),
                placed("b", 1, 0, 90),
                placed("c", 0, 90, 30),
            ],
            idle_min: 30,
            overtime_min: 0,
            wait_cost: 270,
        };

        let lane0 = result.cases_for_theater(0);
        assert_eq!(lane0.len(), 2);
        assert_eq!(lane0[1].id, "c");
        assert!(result.cases_for_theater(3).is_empty());

        assert_eq!(result.case_by_id("b").map(|c| c.theater), Some(1));
        assert!(result.case_by_id("zz").is_none());

        assert_eq!(result.makespan_min(), 120);
        assert_eq!(result.total_case_min(), 180);
    }

    #[test]
    fn test_empty_result() {
        let result = ScheduleResult::empty();
        assert_eq!(result.makespan_min(), 0);
        assert_eq!(result.total_case_min(), 0);
    }

    #[test]
    fn test_meets_targets() {
        let kpis = KpiSummary {
            utilization_rate: 87.5,
            baseline_utilization_rate: 80.0,
            utilization_series: vec![],
            baseline_series: vec![],
            utilization_delta: 7.5,
            total_projected_overtime_min: 5,
            baseline_overtime_min: 40,
        };
        assert!(kpis.meets_targets(85.0, 10));
        assert!(!kpis.meets_targets(90.0, 10));
        assert!(!kpis.meets_targets(85.0, 0));
    }

    #[test]
    fn test_full_schedule_round_trip() {
        let full = FullSchedule {
            optimized: ScheduleResult {
                cases: vec![placed("a", 0, 0, 60)],
                idle_min: 0,
                overtime_min: 0,
                wait_cost: 0,
            },
            baseline: ScheduleResult::empty(),
            kpis: KpiSummary {
                utilization_rate: 2.0,
                baseline_utilization_rate: 0.0,
                utilization_series: vec![20.0, 0.0],
                baseline_series: vec![0.0, 0.0],
                utilization_delta: 2.0,
                total_projected_overtime_min: 0,
                baseline_overtime_min: 0,
            },
        };

        let json = serde_json::to_string(&full).unwrap();
        let back: FullSchedule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, full);
    }
}
