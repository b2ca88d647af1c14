//! Seeded random roster generation.
//!
//! Builds reproducible case rosters for invariant tests and load
//! experiments. The same seed and configuration always produce the
//! same roster; durations land on the 5-minute grid and never fall
//! under the bookable floor, so generated rosters pass validation.

use rand::prelude::IndexedRandom;
use rand::rngs::SmallRng;
use rand::Rng;
use rand::SeedableRng;

use crate::models::{Case, Priority, MIN_CASE_MIN};

/// Deterministic random roster builder.
///
/// # Example
/// ```
/// use optiqueue::generator::CaseGenerator;
///
/// let roster = CaseGenerator::new(42).with_case_count(12).generate();
/// assert_eq!(roster.len(), 12);
/// assert_eq!(roster, CaseGenerator::new(42).with_case_count(12).generate());
/// ```
#[derive(Debug, Clone)]
pub struct CaseGenerator {
    seed: u64,
    case_count: usize,
    duration_range: (i64, i64),
    surgeon_pool: usize,
    equipment_pool: usize,
    emergency_share: f64,
}

impl CaseGenerator {
    /// Creates a generator: 20 cases, 30–180 minute durations, six
    /// surgeons, five equipment sets, one emergency in ten.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            case_count: 20,
            duration_range: (30, 180),
            surgeon_pool: 6,
            equipment_pool: 5,
            emergency_share: 0.1,
        }
    }

    /// Sets how many cases to generate.
    pub fn with_case_count(mut self, case_count: usize) -> Self {
        self.case_count = case_count;
        self
    }

    /// Sets the duration range (minutes, inclusive). Bounds are kept
    /// above the bookable floor and ordered.
    pub fn with_duration_range(mut self, min_min: i64, max_min: i64) -> Self {
        let lo = min_min.min(max_min).max(MIN_CASE_MIN);
        let hi = min_min.max(max_min).max(lo);
        self.duration_range = (lo, hi);
        self
    }

    /// Sets the surgeon pool size (at least one).
    pub fn with_surgeons(mut self, surgeons: usize) -> Self {
        self.surgeon_pool = surgeons.max(1);
        self
    }

    /// Sets the equipment pool size (at least one).
    pub fn with_equipment(mut self, equipment: usize) -> Self {
        self.equipment_pool = equipment.max(1);
        self
    }

    /// Sets the probability of an emergency case, clamped to [0, 1].
    pub fn with_emergency_share(mut self, share: f64) -> Self {
        self.emergency_share = share.clamp(0.0, 1.0);
        self
    }

    /// Generates the roster.
    pub fn generate(&self) -> Vec<Case> {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let surgeons: Vec<String> = (1..=self.surgeon_pool)
            .map(|i| format!("Dr. #{}", i))
            .collect();
        let equipment: Vec<String> = (1..=self.equipment_pool)
            .map(|i| format!("Set #{}", i))
            .collect();

        (0..self.case_count)
            .map(|index| {
                let raw = rng.random_range(self.duration_range.0..=self.duration_range.1);
                let duration = (raw - raw % 5).max(MIN_CASE_MIN);
                let priority = if rng.random_bool(self.emergency_share) {
                    Priority::Emergency
                } else {
                    Priority::from_level_clamped(rng.random_range(2..=5))
                };
                // Pools are non-empty by construction
                let surgeon = surgeons
                    .choose(&mut rng)
                    .cloned()
                    .unwrap_or_default();
                let equipment = equipment
                    .choose(&mut rng)
                    .cloned()
                    .unwrap_or_default();

                Case::new(format!("G-{:03}", index + 1))
                    .with_name(format!("Generated Case {}", index + 1))
                    .with_duration_min(duration)
                    .with_surgeon(surgeon)
                    .with_equipment(equipment)
                    .with_priority(priority)
            })
            .collect()
    }
}
