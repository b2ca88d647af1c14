//! Narrow interface to a natural-language schedule assistant.
//!
//! The engine never talks to a language model itself. It exposes a
//! lossless, serializable snapshot of one planning run and a single
//! trait an external collaborator implements. Keeping the seam this
//! small lets the assistant live in another process or service
//! without the engine knowing.

use serde::Serialize;

use crate::models::{Case, FullSchedule};

/// Read-only view of one planning run, serialized as prompt context.
///
/// `now_min` is the caller's clock in minutes after day start, so the
/// assistant can distinguish finished cases from upcoming ones.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleSnapshot<'a> {
    pub schedule: &'a FullSchedule,
    pub cases: &'a [Case],
    pub now_min: i64,
}

impl<'a> ScheduleSnapshot<'a> {
    pub fn new(schedule: &'a FullSchedule, cases: &'a [Case], now_min: i64) -> Self {
        Self {
            schedule,
            cases,
            now_min,
        }
    }
}

/// Answers free-form questions about a schedule snapshot.
///
/// Implementations are external collaborators; the crate ships none.
pub trait ScheduleAssistant: Send + Sync {
    fn answer(&self, question: &str, snapshot: &ScheduleSnapshot<'_>) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SuiteConfig;
    use crate::samples::sample_cases;
    use crate::scheduler::TheaterScheduler;

    struct ScriptedAssistant;

    impl ScheduleAssistant for ScriptedAssistant {
        fn answer(&self, question: &str, snapshot: &ScheduleSnapshot<'_>) -> String {
            format!(
                "{} cases scheduled (asked: {})",
                snapshot.schedule.optimized.cases.len(),
                question
            )
        }
    }

    #[test]
    fn test_snapshot_serializes_to_json() {
        let cases = sample_cases();
        let scheduler = TheaterScheduler::new(SuiteConfig::default());
        let schedule = scheduler.full_schedule(&cases);
        let snapshot = ScheduleSnapshot::new(&schedule, &cases, 120);

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["now_min"], 120);
        assert_eq!(json["cases"].as_array().unwrap().len(), cases.len());
        assert!(json["schedule"]["kpis"]["utilization_rate"].is_number());
        assert_eq!(
            json["schedule"]["optimized"]["cases"]
                .as_array()
                .unwrap()
                .len(),
            cases.len()
        );
    }

    #[test]
    fn test_trait_object_dispatch() {
        let cases = sample_cases();
        let scheduler = TheaterScheduler::new(SuiteConfig::default());
        let schedule = scheduler.full_schedule(&cases);
        let snapshot = ScheduleSnapshot::new(&schedule, &cases, 0);

        let assistant: Box<dyn ScheduleAssistant> = Box::new(ScriptedAssistant);
        let reply = assistant.answer("how full is the day?", &snapshot);
        assert!(reply.starts_with("8 cases scheduled"));
    }
}
