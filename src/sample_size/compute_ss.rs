use tracing::{debug, warn};

use crate::design::types::{DesignParameters, Effect};
use crate::design::validate::{treatment_rate, validate_design};
use crate::error::AbComputeErr;
use crate::normal::std_normal::Quantile;
use crate::sample_size::error::EffectErr;
use crate::sample_size::types::{ConfidenceInterval, SampleSizeResult};

// Below this many expected successes or failures in a group the normal
// approximation is unreliable
const MIN_EXPECTED_COUNT: f64 = 5.;
// 2^64; anything at or above it cannot be counted in a u64
const MAX_TOTAL_SIZE: f64 = u64::MAX as f64;

/// Computes the sample size needed to detect `effect` in a two-proportion
/// z-test designed by `params`.
///
/// With w the treatment share of traffic, the total size is
///     N = (z_alpha + z_power)^2 * (p2 q2 / w + p1 q1 / (1 - w)) / (p2 - p1)^2
/// and the treatment and control groups get ceil(w N) and ceil((1 - w) N).
/// `per_group_size` is ceil(N / 2), which for w = 0.5 is the classical
///     (z_alpha + z_power)^2 * (p1 q1 + p2 q2) / (p2 - p1)^2
/// z_alpha is Bonferroni-adjusted and one- or two-tailed according to the
/// design; z_power is always one-tailed.
///
/// The confidence interval is the two-sided 1 - alpha interval (unadjusted)
/// for p2 - p1 that an experiment of the computed size would give.
pub fn compute_ss<Q>(
    params: &DesignParameters,
    effect: Effect,
    quantile: &Q,
) -> Result<SampleSizeResult, AbComputeErr>
where
    Q: Quantile + ?Sized,
{
    //----------------------------------------
    // Check arguments
    //----------------------------------------
    validate_design(params)?;
    let p1 = params.baseline_rate;
    let p2 = treatment_rate(p1, &effect)?;
    let delta = p2 - p1;
    if delta == 0. {
        return Err(EffectErr::ZeroDifference(p1).into());
    }

    //----------------------------------------
    // Critical values
    //----------------------------------------
    let adjusted_alpha = params.adjusted_alpha();
    let z_alpha =
        quantile.quantile(1. - params.hypothesis_type().critical_tail(adjusted_alpha))?;
    let z_power = quantile.quantile(params.power)?;

    //----------------------------------------
    // Sample size
    //----------------------------------------
    let w = params.split_ratio;
    let var_trt = p2 * (1. - p2);
    let var_ctrl = p1 * (1. - p1);
    // Halved so that w = 0.5 gives var_trt + var_ctrl
    let variance_term = (var_trt / w + var_ctrl / (1. - w)) / 2.;
    let n = (z_alpha + z_power).powi(2) * variance_term / delta.powi(2);
    // Both arm sizes and their sum must fit in a u64
    if !n.is_finite() || 2. * n >= MAX_TOTAL_SIZE {
        return Err(EffectErr::Unbounded(delta).into());
    }

    let per_group_size = ceil_size(n);
    let treatment_size = ceil_size(w * 2. * n);
    let control_size = ceil_size((1. - w) * 2. * n);

    //----------------------------------------
    // Confidence interval for the effect
    //----------------------------------------
    let z_ci = quantile.quantile(1. - params.alpha / 2.)?;
    let se = (var_trt / treatment_size as f64 + var_ctrl / control_size as f64).sqrt();
    let confidence_interval = ConfidenceInterval {
        lower: delta - z_ci * se,
        upper: delta + z_ci * se,
        level: 1. - params.alpha,
    };

    debug!(
        p1,
        p2,
        adjusted_alpha,
        z_alpha,
        z_power,
        variance_term,
        n,
        treatment_size,
        control_size,
        "computed sample size"
    );

    let total_size = treatment_size
        .checked_add(control_size)
        .ok_or(EffectErr::Unbounded(delta))?;

    let min_count = min_expected_count(treatment_size, p2, control_size, p1);
    if min_count < MIN_EXPECTED_COUNT {
        warn!(
            min_count,
            "expected count below {MIN_EXPECTED_COUNT} in a group; normal approximation may be poor"
        );
    }

    Ok(SampleSizeResult {
        per_group_size,
        treatment_size,
        control_size,
        total_size,
        confidence_interval,
        baseline_rate: p1,
        treatment_rate: p2,
        effect: delta,
        adjusted_alpha,
        z_alpha,
        z_power,
    })
}

/// Smallest expected number of successes or failures across both groups
pub(crate) fn min_expected_count(
    treatment_size: u64,
    treatment_rate: f64,
    control_size: u64,
    baseline_rate: f64,
) -> f64 {
    let n_trt = treatment_size as f64;
    let n_ctrl = control_size as f64;
    [
        n_trt * treatment_rate,
        n_trt * (1. - treatment_rate),
        n_ctrl * baseline_rate,
        n_ctrl * (1. - baseline_rate),
    ]
    .into_iter()
    .fold(f64::INFINITY, f64::min)
}

// Every group needs at least one subject, even when the critical values cancel
fn ceil_size(x: f64) -> u64 {
    x.ceil().max(1.) as u64
}
