//! Demonstration case roster.
//!
//! A realistic eight-case operating list used by documentation,
//! examples, and tests: five surgeons, six equipment sets, priorities
//! from emergency CABG down to elective hernia repair.

use crate::models::{Case, Priority};

/// The demonstration roster.
pub fn sample_cases() -> Vec<Case> {
    vec![
        Case::new("S-101")
            .with_name("Hip Replacement")
            .with_duration_min(120)
            .with_surgeon("Dr. Smith")
            .with_equipment("C-Arm")
            .with_priority(Priority::Urgent),
        Case::new("S-102")
            .with_name("Appendectomy")
            .with_duration_min(60)
            .with_surgeon("Dr. Lee")
            .with_equipment("Lap Tower")
            .with_priority(Priority::SemiUrgent),
        Case::new("S-103")
            .with_name("Knee Arthroscopy")
            .with_duration_min(90)
            .with_surgeon("Dr. Patel")
            .with_equipment("Scope")
            .with_priority(Priority::Routine),
        Case::new("S-104")
            .with_name("CABG")
            .with_duration_min(180)
            .with_surgeon("Dr. Chen")
            .with_equipment("Heart-Lung")
            .with_priority(Priority::Emergency),
        Case::new("S-105")
            .with_name("Spine Fusion")
            .with_duration_min(150)
            .with_surgeon("Dr. Smith")
            .with_equipment("C-Arm")
            .with_priority(Priority::SemiUrgent),
        Case::new("S-106")
            .with_name("Cholecystectomy")
            .with_duration_min(75)
            .with_surgeon("Dr. Lee")
            .with_equipment("Lap Tower")
            .with_priority(Priority::SemiUrgent),
        Case::new("S-107")
            .with_name("Hernia Repair")
            .with_duration_min(45)
            .with_surgeon("Dr. Gomez")
            .with_equipment("Basic Set")
            .with_priority(Priority::Elective),
        Case::new("S-108")
            .with_name("Thyroidectomy")
            .with_duration_min(110)
            .with_surgeon("Dr. Patel")
            .with_equipment("Neuro Monitor")
            .with_priority(Priority::Routine),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SuiteConfig;
    use crate::conflict::find_conflicts;
    use crate::scheduler::TheaterScheduler;
    use crate::validation::validate_cases;
    use std::collections::HashSet;

    #[test]
    fn test_roster_shape() {
        let roster = sample_cases();
        assert_eq!(roster.len(), 8);

        let ids: HashSet<&str> = roster.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), 8);
    }

    #[test]
    fn test_roster_passes_validation() {
        assert!(validate_cases(&sample_cases()).is_ok());
    }

    #[test]
    fn test_roster_schedules_cleanly() {
        let scheduler = TheaterScheduler::new(SuiteConfig::default());
        let full = scheduler.full_schedule(&sample_cases());

        assert_eq!(full.optimized.cases.len(), 8);
        assert!(find_conflicts(&full.optimized.cases).is_empty());
        assert!(find_conflicts(&full.baseline.cases).is_empty());

        // The emergency CABG leads the optimized list
        let cabg = full.optimized.case_by_id("S-104").unwrap();
        assert_eq!((cabg.theater, cabg.start_min), (0, 0));
        // Everything fits inside the nominal day
        assert_eq!(full.kpis.total_projected_overtime_min, 0);
    }
}
