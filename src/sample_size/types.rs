use serde::Serialize;

/// Interval estimate for the absolute difference p2 - p1
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct ConfidenceInterval {
    pub lower: f64,
    pub upper: f64,
    /// Confidence level, 1 - alpha (before any Bonferroni adjustment)
    pub level: f64,
}

impl ConfidenceInterval {
    pub fn contains(&self, x: f64) -> bool {
        self.lower <= x && x <= self.upper
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct SampleSizeResult {
    /// Per-group size of the equivalent balanced design; under equal
    /// allocation this is the size of each arm
    pub per_group_size: u64,
    pub treatment_size: u64,
    pub control_size: u64,
    pub total_size: u64,
    pub confidence_interval: ConfidenceInterval,
    pub baseline_rate: f64,
    pub treatment_rate: f64,
    /// Absolute difference p2 - p1
    pub effect: f64,
    pub adjusted_alpha: f64,
    pub z_alpha: f64,
    pub z_power: f64,
}
