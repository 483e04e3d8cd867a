use crate::design::error::ParameterErr;
use crate::design::types::{DesignParameters, Effect};
use crate::error::AbComputeErr;

fn in_unit_interval(x: f64) -> bool {
    // NaN fails both comparisons
    x > 0. && x < 1.
}

/// Checks every design option independently, reporting the first violation
pub fn validate_design(params: &DesignParameters) -> Result<(), AbComputeErr> {
    if !in_unit_interval(params.baseline_rate) {
        return Err(ParameterErr::BaselineRate(params.baseline_rate).into());
    }
    if !in_unit_interval(params.alpha) {
        return Err(ParameterErr::Alpha(params.alpha).into());
    }
    if !in_unit_interval(params.power) {
        return Err(ParameterErr::Power(params.power).into());
    }
    if params.comparisons == 0 {
        return Err(ParameterErr::Comparisons(params.comparisons).into());
    }
    if !in_unit_interval(params.split_ratio) {
        return Err(ParameterErr::SplitRatio(params.split_ratio).into());
    }
    Ok(())
}

/// Derives the treatment rate p2 for a validated baseline, rejecting effects
/// that push it out of (0, 1)
pub fn treatment_rate(baseline_rate: f64, effect: &Effect) -> Result<f64, AbComputeErr> {
    if !effect.value().is_finite() {
        return Err(ParameterErr::NonFiniteEffect(effect.value()).into());
    }
    let treatment_rate = baseline_rate + effect.absolute_difference(baseline_rate);
    if !in_unit_interval(treatment_rate) {
        return Err(ParameterErr::TreatmentRate {
            baseline_rate,
            effect: effect.value(),
            treatment_rate,
        }
        .into());
    }
    Ok(treatment_rate)
}
