//! StatRange - Inclusive percentage interval for one grade

use serde::{Deserialize, Serialize};

/// Inclusive `[min, max]` percentage modifier
///
/// A value of `8.0` means "+8%". Negative bounds are allowed for weak grades.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct StatRange {
    pub min: f64,
    pub max: f64,
}

impl StatRange {
    pub const fn new(min: f64, max: f64) -> Self {
        StatRange { min, max }
    }

    /// Percentage picked when the grade is first selected
    pub fn default_selection(&self) -> f64 {
        self.min
    }

    pub fn contains(&self, percentage: f64) -> bool {
        percentage >= self.min && percentage <= self.max
    }

    /// Clamp a percentage into the interval
    pub fn clamp(&self, percentage: f64) -> f64 {
        percentage.clamp(self.min, self.max)
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Where `percentage` sits within the interval, 0.0 at min and 1.0 at max
    pub fn position(&self, percentage: f64) -> f64 {
        if self.width() <= 0.0 {
            return 1.0;
        }
        ((percentage - self.min) / self.width()).clamp(0.0, 1.0)
    }
}

impl From<(f64, f64)> for StatRange {
    fn from((min, max): (f64, f64)) -> Self {
        StatRange { min, max }
    }
}

impl From<StatRange> for (f64, f64) {
    fn from(range: StatRange) -> Self {
        (range.min, range.max)
    }
}
