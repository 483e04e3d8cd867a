//----------------------------------------
// design mod types
//----------------------------------------
use serde::{Deserialize, Serialize};

use crate::hypothesis_type::HypothesisType;

pub const DEFAULT_ALPHA: f64 = 0.05;
pub const DEFAULT_POWER: f64 = 0.8;
pub const DEFAULT_COMPARISONS: u32 = 1;
pub const DEFAULT_SPLIT_RATIO: f64 = 0.5;

/// Design of a two-proportion A/B test, minus the effect being sized for.
///
/// `split_ratio` is the share of traffic sent to the treatment group; the
/// control group receives the rest. `comparisons` is the number of
/// simultaneous hypotheses, used for a Bonferroni adjustment of `alpha`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DesignParameters {
    pub baseline_rate: f64,
    #[serde(default = "default_alpha")]
    pub alpha: f64,
    #[serde(default = "default_power")]
    pub power: f64,
    #[serde(default = "default_two_tailed")]
    pub two_tailed: bool,
    #[serde(default = "default_comparisons")]
    pub comparisons: u32,
    #[serde(default = "default_split_ratio")]
    pub split_ratio: f64,
}

fn default_alpha() -> f64 {
    DEFAULT_ALPHA
}

fn default_power() -> f64 {
    DEFAULT_POWER
}

fn default_two_tailed() -> bool {
    true
}

fn default_comparisons() -> u32 {
    DEFAULT_COMPARISONS
}

fn default_split_ratio() -> f64 {
    DEFAULT_SPLIT_RATIO
}

impl DesignParameters {
    /// Parameters with every option at its default. Nothing is validated
    /// until the parameters are used.
    pub fn new(baseline_rate: f64) -> DesignParameters {
        DesignParameters {
            baseline_rate,
            alpha: DEFAULT_ALPHA,
            power: DEFAULT_POWER,
            two_tailed: true,
            comparisons: DEFAULT_COMPARISONS,
            split_ratio: DEFAULT_SPLIT_RATIO,
        }
    }

    pub fn with_alpha(mut self, alpha: f64) -> DesignParameters {
        self.alpha = alpha;
        self
    }

    pub fn with_power(mut self, power: f64) -> DesignParameters {
        self.power = power;
        self
    }

    pub fn with_two_tailed(mut self, two_tailed: bool) -> DesignParameters {
        self.two_tailed = two_tailed;
        self
    }

    pub fn with_comparisons(mut self, comparisons: u32) -> DesignParameters {
        self.comparisons = comparisons;
        self
    }

    pub fn with_split_ratio(mut self, split_ratio: f64) -> DesignParameters {
        self.split_ratio = split_ratio;
        self
    }

    pub fn hypothesis_type(&self) -> HypothesisType {
        HypothesisType::from_two_tailed(self.two_tailed)
    }

    /// Bonferroni-adjusted significance level
    pub fn adjusted_alpha(&self) -> f64 {
        self.alpha / f64::from(self.comparisons)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectKind {
    /// Fractional change over the baseline rate, e.g. 0.10 for +10%
    Relative,
    /// Additive change to the baseline rate, e.g. 0.02 for +2 points
    Absolute,
}

/// Minimum detectable effect, tagged with how it relates to the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Effect {
    Relative(f64),
    Absolute(f64),
}

impl Effect {
    pub fn new(kind: EffectKind, value: f64) -> Effect {
        match kind {
            EffectKind::Relative => Effect::Relative(value),
            EffectKind::Absolute => Effect::Absolute(value),
        }
    }

    /// Relative effect given as a percentage of the baseline (10.0 => +10%)
    pub fn relative_percent(percent: f64) -> Effect {
        Effect::Relative(percent / 100.)
    }

    pub fn kind(&self) -> EffectKind {
        match self {
            Effect::Relative(_) => EffectKind::Relative,
            Effect::Absolute(_) => EffectKind::Absolute,
        }
    }

    pub fn value(&self) -> f64 {
        match *self {
            Effect::Relative(v) | Effect::Absolute(v) => v,
        }
    }

    /// Additive difference between treatment and baseline rates.
    /// A relative effect is converted first so that relative and absolute
    /// inputs describing the same treatment rate produce the same difference.
    pub fn absolute_difference(&self, baseline_rate: f64) -> f64 {
        match *self {
            Effect::Relative(v) => baseline_rate * v,
            Effect::Absolute(v) => v,
        }
    }
}
