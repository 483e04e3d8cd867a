use serde::{Deserialize, Serialize};

/// Sidedness of the alternative hypothesis. Only the significance-side
/// critical value depends on it; power is always evaluated one-sided.
#[derive(Default, Debug, PartialEq, Eq, Copy, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HypothesisType {
    #[default]
    TwoSided,
    OneSided,
}

impl HypothesisType {
    pub fn from_two_tailed(two_tailed: bool) -> HypothesisType {
        if two_tailed {
            HypothesisType::TwoSided
        } else {
            HypothesisType::OneSided
        }
    }

    /// Upper-tail probability at which the significance critical value sits
    pub fn critical_tail(&self, alpha: f64) -> f64 {
        match self {
            HypothesisType::TwoSided => alpha / 2.,
            HypothesisType::OneSided => alpha,
        }
    }
}
