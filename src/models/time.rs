//! Time primitives for the operating day.
//!
//! # Time Model
//! All times are in whole minutes relative to the start of the operating
//! day (minute 0). The consumer defines which wall-clock hour minute 0
//! maps to; [`format_clock`] renders labels under that convention.

use serde::{Deserialize, Serialize};

/// A time interval [start, end).
///
/// Half-open: includes start, excludes end. Two slots that merely touch
/// (one ends exactly where the other begins) do not overlap, so a case
/// may start the minute its predecessor's interval closes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeSlot {
    /// Interval start (minutes, inclusive).
    pub start_min: i64,
    /// Interval end (minutes, exclusive).
    pub end_min: i64,
}

impl TimeSlot {
    /// Creates a new time slot.
    pub fn new(start_min: i64, end_min: i64) -> Self {
        Self { start_min, end_min }
    }

    /// Duration of this slot (minutes).
    #[inline]
    pub fn duration_min(&self) -> i64 {
        self.end_min - self.start_min
    }

    /// Whether a minute falls within this slot.
    #[inline]
    pub fn contains(&self, minute: i64) -> bool {
        minute >= self.start_min && minute < self.end_min
    }

    /// Whether two slots overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_min < other.end_min && other.start_min < self.end_min
    }

    /// Minutes shared between two slots (0 when disjoint).
    pub fn overlap_min(&self, other: &Self) -> i64 {
        let start = self.start_min.max(other.start_min);
        let end = self.end_min.min(other.end_min);
        (end - start).max(0)
    }
}

/// The nominal operating day.
///
/// Cases may run past `end_min`; anything beyond it counts as overtime
/// rather than being rejected.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DayWindow {
    /// First schedulable minute (inclusive).
    pub start_min: i64,
    /// Nominal close of the day (exclusive).
    pub end_min: i64,
}

impl DayWindow {
    /// Creates a new day window.
    pub fn new(start_min: i64, end_min: i64) -> Self {
        Self { start_min, end_min }
    }

    /// Length of the nominal day (minutes).
    #[inline]
    pub fn length_min(&self) -> i64 {
        self.end_min - self.start_min
    }

    /// Whether a minute falls within the nominal day.
    #[inline]
    pub fn contains(&self, minute: i64) -> bool {
        minute >= self.start_min && minute < self.end_min
    }

    /// Clamps a minute into [start, end].
    pub fn clamp(&self, minute: i64) -> i64 {
        minute.max(self.start_min).min(self.end_min)
    }
}

impl Default for DayWindow {
    /// A ten-hour day starting at minute 0.
    fn default() -> Self {
        Self::new(0, 600)
    }
}

/// Renders a day-relative minute as a 12-hour wall-clock label.
///
/// `day_start_hour` anchors minute 0 (e.g. 7 for a 07:00 first case).
/// Minutes past midnight keep counting forward, so a long overtime day
/// renders as late-evening labels rather than wrapping.
///
/// ```
/// use optiqueue::models::format_clock;
///
/// assert_eq!(format_clock(7, 0), "7:00 AM");
/// assert_eq!(format_clock(7, 330), "12:30 PM");
/// assert_eq!(format_clock(7, 600), "5:00 PM");
/// ```
pub fn format_clock(day_start_hour: u32, minutes_after_start: i64) -> String {
    let total = i64::from(day_start_hour) * 60 + minutes_after_start;
    let hour = total.div_euclid(60);
    let minute = total.rem_euclid(60);
    let hour12 = (hour + 11).rem_euclid(12) + 1;
    let meridiem = if hour >= 12 { "PM" } else { "AM" };
    format!("{}:{:02} {}", hour12, minute, meridiem)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_slot() {
        let s = TimeSlot::new(100, 200);
        assert_eq!(s.duration_min(), 100);
        assert!(s.contains(100));
        assert!(s.contains(199));
        assert!(!s.contains(200)); // exclusive end
        assert!(!s.contains(50));
    }

    #[test]
    fn test_time_slot_overlap() {
        let a = TimeSlot::new(0, 100);
        let b = TimeSlot::new(50, 150);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));

        let c = TimeSlot::new(100, 200); // touching but not overlapping
        assert!(!a.overlaps(&c));
        assert!(!c.overlaps(&a));
    }

    #[test]
    fn test_time_slot_overlap_min() {
        let a = TimeSlot::new(0, 100);
        assert_eq!(a.overlap_min(&TimeSlot::new(50, 150)), 50);
        assert_eq!(a.overlap_min(&TimeSlot::new(100, 200)), 0);
        assert_eq!(a.overlap_min(&TimeSlot::new(20, 30)), 10);
    }

    #[test]
    fn test_day_window() {
        let day = DayWindow::default();
        assert_eq!(day.length_min(), 600);
        assert!(day.contains(0));
        assert!(day.contains(599));
        assert!(!day.contains(600));
        assert_eq!(day.clamp(-10), 0);
        assert_eq!(day.clamp(300), 300);
        assert_eq!(day.clamp(750), 600);
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(7, 0), "7:00 AM");
        assert_eq!(format_clock(7, 61), "8:01 AM");
        assert_eq!(format_clock(7, 300), "12:00 PM");
        assert_eq!(format_clock(7, 330), "12:30 PM");
        assert_eq!(format_clock(7, 600), "5:00 PM");
        assert_eq!(format_clock(0, 30), "12:30 AM");
    }
}
