//! Suite-level scheduling parameters.
//!
//! One [`SuiteConfig`] describes the operating suite for a run: how many
//! theaters, the nominal day, the turnover buffer, and the granularities
//! used by the feasibility search and the KPI series. Defaults model a
//! five-theater suite on a ten-hour day.

use crate::models::DayWindow;

/// Parameters of the operating suite and the engine knobs.
///
/// Plain data with builder-style setters; callers own the values and
/// pass the config at scheduler construction.
#[derive(Debug, Clone, PartialEq)]
pub struct SuiteConfig {
    /// Number of theaters (lanes).
    pub theaters: usize,
    /// Cleaning/setup buffer between consecutive cases in one theater
    /// (minutes).
    pub turnover_min: i64,
    /// The nominal operating day.
    pub day: DayWindow,
    /// KPI series bucket width (minutes).
    pub bucket_min: i64,
    /// Feasibility search step (minutes).
    pub search_step_min: i64,
    /// Minimum forward slip before a case counts as delayed by a
    /// re-optimization (minutes).
    pub delay_threshold_min: i64,
    /// How far past the nominal close the feasibility search will look
    /// (minutes).
    pub max_overtime_min: i64,
}

impl SuiteConfig {
    /// Creates the default suite configuration.
    pub fn new() -> Self {
        Self {
            theaters: 5,
            turnover_min: 30,
            day: DayWindow::default(),
            bucket_min: 60,
            search_step_min: 5,
            delay_threshold_min: 5,
            max_overtime_min: 12 * 60,
        }
    }

    /// Sets the number of theaters.
    pub fn with_theaters(mut self, theaters: usize) -> Self {
        self.theaters = theaters;
        self
    }

    /// Sets the turnover buffer (minutes).
    pub fn with_turnover_min(mut self, turnover_min: i64) -> Self {
        self.turnover_min = turnover_min;
        self
    }

    /// Sets the nominal operating day.
    pub fn with_day(mut self, day: DayWindow) -> Self {
        self.day = day;
        self
    }

    /// Sets the KPI series bucket width (minutes).
    pub fn with_bucket_min(mut self, bucket_min: i64) -> Self {
        self.bucket_min = bucket_min;
        self
    }

    /// Sets the feasibility search step (minutes).
    pub fn with_search_step_min(mut self, search_step_min: i64) -> Self {
        self.search_step_min = search_step_min;
        self
    }

    /// Sets the delay-flag threshold (minutes).
    pub fn with_delay_threshold_min(mut self, delay_threshold_min: i64) -> Self {
        self.delay_threshold_min = delay_threshold_min;
        self
    }

    /// Sets the overtime search bound (minutes past nominal close).
    pub fn with_max_overtime_min(mut self, max_overtime_min: i64) -> Self {
        self.max_overtime_min = max_overtime_min;
        self
    }

    /// Total theater capacity over the nominal day (minutes).
    pub fn capacity_min(&self) -> i64 {
        self.theaters as i64 * self.day.length_min()
    }

    /// Last minute the feasibility search may let a case end at.
    #[inline]
    pub fn search_horizon_min(&self) -> i64 {
        self.day.end_min + self.max_overtime_min
    }
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SuiteConfig::default();
        assert_eq!(config.theaters, 5);
        assert_eq!(config.turnover_min, 30);
        assert_eq!(config.day, DayWindow::new(0, 600));
        assert_eq!(config.bucket_min, 60);
        assert_eq!(config.search_step_min, 5);
        assert_eq!(config.delay_threshold_min, 5);
        assert_eq!(config.max_overtime_min, 720);
    }

    #[test]
    fn test_builders() {
        let config = SuiteConfig::new()
            .with_theaters(2)
            .with_turnover_min(15)
            .with_day(DayWindow::new(60, 540))
            .with_bucket_min(30)
            .with_search_step_min(10)
            .with_delay_threshold_min(1)
            .with_max_overtime_min(120);

        assert_eq!(config.theaters, 2);
        assert_eq!(config.turnover_min, 15);
        assert_eq!(config.day.length_min(), 480);
        assert_eq!(config.bucket_min, 30);
        assert_eq!(config.search_step_min, 10);
        assert_eq!(config.delay_threshold_min, 1);
        assert_eq!(config.search_horizon_min(), 660);
    }

    #[test]
    fn test_capacity() {
        assert_eq!(SuiteConfig::default().capacity_min(), 3000);
        let small = SuiteConfig::new()
            .with_theaters(1)
            .with_day(DayWindow::new(0, 480));
        assert_eq!(small.capacity_min(), 480);
    }
}
