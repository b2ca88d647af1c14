//! Surgical case model.
//!
//! A case is the unit of scheduling: one procedure needing one theater,
//! one surgeon, and one equipment set for a contiguous block of minutes.
//!
//! # Reference
//! Cardoen, Demeulemeester & Beliën (2010), "Operating room planning and
//! scheduling: A literature review", EJOR 201(3)

use serde::{Deserialize, Serialize};

use super::TimeSlot;

/// Shortest case duration accepted at the validation boundary (minutes).
///
/// Anything shorter is not a realistic theater booking once anesthesia
/// and positioning are accounted for.
pub const MIN_CASE_MIN: i64 = 15;

/// Clinical priority class, level 1 (most urgent) through 5 (least).
///
/// Ordering follows urgency: `Emergency < Elective`, so sorting cases by
/// priority ascending puts the most urgent first.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "u8", into = "u8")]
pub enum Priority {
    /// Level 1: immediate threat to life or limb.
    Emergency = 1,
    /// Level 2: operate within hours.
    Urgent = 2,
    /// Level 3: operate within days.
    SemiUrgent = 3,
    /// Level 4: scheduled routine surgery.
    Routine = 4,
    /// Level 5: elective, freely movable.
    Elective = 5,
}

impl Priority {
    /// Numeric level, 1..=5.
    #[inline]
    pub fn level(self) -> u8 {
        self as u8
    }

    /// Maps a level to a priority, clamping out-of-range values to the
    /// nearest end of the scale.
    pub fn from_level_clamped(level: i64) -> Self {
        match level {
            i64::MIN..=1 => Priority::Emergency,
            2 => Priority::Urgent,
            3 => Priority::SemiUrgent,
            4 => Priority::Routine,
            _ => Priority::Elective,
        }
    }

    /// Wait-cost weight: the raw level.
    ///
    /// Reporting weight, not an urgency weight: each minute of wait
    /// costs a level-5 elective five units and a level-1 emergency one.
    #[inline]
    pub fn weight(self) -> i64 {
        i64::from(self.level())
    }
}

impl TryFrom<u8> for Priority {
    type Error = String;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            1 => Ok(Priority::Emergency),
            2 => Ok(Priority::Urgent),
            3 => Ok(Priority::SemiUrgent),
            4 => Ok(Priority::Routine),
            5 => Ok(Priority::Elective),
            other => Err(format!("priority level must be 1..=5, got {}", other)),
        }
    }
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> Self {
        priority.level()
    }
}

/// A surgical case awaiting placement.
///
/// Immutable once handed to a scheduling run; the engine copies what it
/// needs into [`ScheduledCase`](super::ScheduledCase) values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Case {
    /// Unique case identifier.
    pub id: String,
    /// Human-readable procedure name (display only, may be empty).
    pub name: String,
    /// Procedure duration in minutes. Positive; the validation boundary
    /// enforces [`MIN_CASE_MIN`].
    pub duration_min: i64,
    /// Operating surgeon (exclusive resource).
    pub surgeon: String,
    /// Required equipment set (exclusive resource).
    pub equipment: String,
    /// Clinical priority class.
    pub priority: Priority,
}

impl Case {
    /// Creates a case with the given ID and booking-form defaults:
    /// 60 minutes, semi-urgent, empty identities.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            duration_min: 60,
            surgeon: String::new(),
            equipment: String::new(),
            priority: Priority::SemiUrgent,
        }
    }

    /// Creates an emergency case: priority forced to level 1 and the
    /// duration clamped up to the [`MIN_CASE_MIN`] floor.
    pub fn emergency(
        id: impl Into<String>,
        name: impl Into<String>,
        duration_min: i64,
        surgeon: impl Into<String>,
        equipment: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            duration_min: duration_min.max(MIN_CASE_MIN),
            surgeon: surgeon.into(),
            equipment: equipment.into(),
            priority: Priority::Emergency,
        }
    }

    /// Sets the procedure name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the duration (minutes).
    pub fn with_duration_min(mut self, duration_min: i64) -> Self {
        self.duration_min = duration_min;
        self
    }

    /// Sets the surgeon.
    pub fn with_surgeon(mut self, surgeon: impl Into<String>) -> Self {
        self.surgeon = surgeon.into();
        self
    }

    /// Sets the equipment set.
    pub fn with_equipment(mut self, equipment: impl Into<String>) -> Self {
        self.equipment = equipment.into();
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// The slot this case would occupy if started at `start_min`.
    #[inline]
    pub fn slot_from(&self, start_min: i64) -> TimeSlot {
        TimeSlot::new(start_min, start_min + self.duration_min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_builder() {
        let case = Case::new("S-1")
            .with_name("Hip Replacement")
            .with_duration_min(120)
            .with_surgeon("Dr. Smith")
            .with_equipment("C-Arm")
            .with_priority(Priority::Urgent);

        assert_eq!(case.id, "S-1");
        assert_eq!(case.name, "Hip Replacement");
        assert_eq!(case.duration_min, 120);
        assert_eq!(case.surgeon, "Dr. Smith");
        assert_eq!(case.equipment, "C-Arm");
        assert_eq!(case.priority, Priority::Urgent);
    }

    #[test]
    fn test_case_defaults() {
        let case = Case::new("S-2");
        assert_eq!(case.duration_min, 60);
        assert_eq!(case.priority, Priority::SemiUrgent);
        assert!(case.surgeon.is_empty());
    }

    #[test]
    fn test_emergency_clamps_duration() {
        let em = Case::emergency("EM-1", "Ruptured AAA", 5, "Dr. Chen", "Heart-Lung Machine");
        assert_eq!(em.priority, Priority::Emergency);
        assert_eq!(em.duration_min, MIN_CASE_MIN);

        let long = Case::emergency("EM-2", "Trauma Laparotomy", 90, "Dr. Lee", "Lap Tower");
        assert_eq!(long.duration_min, 90);
    }

    #[test]
    fn test_priority_levels() {
        assert_eq!(Priority::Emergency.level(), 1);
        assert_eq!(Priority::Elective.level(), 5);
        assert_eq!(Priority::try_from(3), Ok(Priority::SemiUrgent));
        assert!(Priority::try_from(0).is_err());
        assert!(Priority::try_from(6).is_err());
    }

    #[test]
    fn test_priority_clamped() {
        assert_eq!(Priority::from_level_clamped(-3), Priority::Emergency);
        assert_eq!(Priority::from_level_clamped(1), Priority::Emergency);
        assert_eq!(Priority::from_level_clamped(4), Priority::Routine);
        assert_eq!(Priority::from_level_clamped(99), Priority::Elective);
    }

    #[test]
    fn test_priority_ordering() {
        assert!(Priority::Emergency < Priority::Urgent);
        assert!(Priority::Routine < Priority::Elective);
        assert_eq!(Priority::SemiUrgent.weight(), 3);
    }

    #[test]
    fn test_priority_serializes_as_level() {
        let json = serde_json::to_string(&Priority::Routine).unwrap();
        assert_eq!(json, "4");
        let back: Priority = serde_json::from_str("2").unwrap();
        assert_eq!(back, Priority::Urgent);
        assert!(serde_json::from_str::<Priority>("7").is_err());
    }

    #[test]
    fn test_slot_from() {
        let case = Case::new("S-3").with_duration_min(45);
        let slot = case.slot_from(100);
        assert_eq!(slot.start_min, 100);
        assert_eq!(slot.end_min, 145);
    }
}
