//! Schedule cost metrics and comparative KPIs.
//!
//! Two layers: [`attach_metrics`] prices a single placement (idle,
//! overtime, wait cost) and [`compute_kpis`] compares the optimized
//! placement against the baseline (utilization rates, hourly series,
//! delta). All percentages are rounded to one decimal.
//!
//! # Accounting
//!
//! - **Idle**: gaps between cases inside the nominal day, per lane. The
//!   cursor starts at day open and jumps to case end + turnover; only
//!   the day-window portion of each gap counts.
//! - **Overtime**: per lane, the effective close is the later of the
//!   last case end and the cursor minus turnover; minutes past the
//!   nominal close sum over lanes. Trailing turnover after the last
//!   case is not billed.
//! - **Wait cost**: Σ priority level × minutes waited past day open.

use tracing::debug;

use crate::config::SuiteConfig;
use crate::models::{KpiSummary, ScheduleResult, ScheduledCase, TimeSlot};

/// Rounds to one decimal place.
#[inline]
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Prices a placement: idle, overtime, and wait cost.
pub(crate) fn attach_metrics(cases: Vec<ScheduledCase>, config: &SuiteConfig) -> ScheduleResult {
    let day = config.day;
    let mut lanes: Vec<Vec<&ScheduledCase>> = vec![Vec::new(); config.theaters];
    for case in &cases {
        lanes[case.theater].push(case);
    }

    let mut idle_min = 0;
    let mut overtime_min = 0;
    for lane in &mut lanes {
        lane.sort_by_key(|c| c.start_min);

        let mut cursor = day.start_min;
        for case in lane.iter() {
            if case.start_min > cursor {
                idle_min +=
                    (case.start_min.min(day.end_min) - cursor.min(day.end_min)).max(0);
            }
            cursor = case.end_min + config.turnover_min;
        }

        let last_end = lane.last().map_or(day.start_min, |c| c.end_min);
        let lane_close = last_end.max(cursor - config.turnover_min);
        if lane_close > day.end_min {
            overtime_min += lane_close - day.end_min;
        }
    }

    let wait_cost = cases
        .iter()
        .map(|c| c.priority.weight() * c.wait_min(&day))
        .sum();

    ScheduleResult {
        cases,
        idle_min,
        overtime_min,
        wait_cost,
    }
}

/// Compares the optimized placement against the baseline.
///
/// Utilization counts full case durations, including overtime spill;
/// the hourly series only counts minutes inside the nominal day.
pub fn compute_kpis(
    optimized: &ScheduleResult,
    baseline: &ScheduleResult,
    config: &SuiteConfig,
) -> KpiSummary {
    let capacity = config.capacity_min();
    let rate = |result: &ScheduleResult| {
        if capacity > 0 {
            round1(result.total_case_min() as f64 / capacity as f64 * 100.0)
        } else {
            0.0
        }
    };

    let utilization_rate = rate(optimized);
    let baseline_utilization_rate = rate(baseline);
    debug!(
        "utilization {}% vs baseline {}%",
        utilization_rate, baseline_utilization_rate
    );

    KpiSummary {
        utilization_rate,
        baseline_utilization_rate,
        utilization_series: bucket_series(optimized, config),
        baseline_series: bucket_series(baseline, config),
        utilization_delta: round1(utilization_rate - baseline_utilization_rate),
        total_projected_overtime_min: optimized.overtime_min,
        baseline_overtime_min: baseline.overtime_min,
    }
}

/// Per-bucket busy percentage over the nominal day.
fn bucket_series(result: &ScheduleResult, config: &SuiteConfig) -> Vec<f64> {
    let day = config.day;
    let bucket_min = config.bucket_min.max(1);
    let buckets = ((day.length_min().max(0) + bucket_min - 1) / bucket_min) as usize;

    let capacity = config.theaters as i64 * bucket_min;
    if capacity <= 0 {
        return vec![0.0; buckets];
    }

    let mut busy = vec![0i64; buckets];
    for case in &result.cases {
        let clamped = TimeSlot::new(
            case.start_min.max(day.start_min),
            case.end_min.min(day.end_min),
        );
        if clamped.end_min <= clamped.start_min {
            continue;
        }
        for (index, minutes) in busy.iter_mut().enumerate() {
            let bucket_start = day.start_min + index as i64 * bucket_min;
            let bucket = TimeSlot::new(bucket_start, bucket_start + bucket_min);
            *minutes += clamped.overlap_min(&bucket);
        }
    }

    busy.iter()
        .map(|&minutes| round1(minutes as f64 / capacity as f64 * 100.0))
        .collect()
}
