use tracing::instrument;

use crate::curve::mde_curve::mde_curve;
use crate::curve::types::MdeCurve;
use crate::design::types::{DesignParameters, Effect, EffectKind};
use crate::design::validate::validate_design;
use crate::error::AbComputeErr;
use crate::normal::std_normal::{Quantile, StatrsNormal};
use crate::sample_size::compute_ss::compute_ss;
use crate::sample_size::types::SampleSizeResult;

/// Sample size calculator with design defaults fixed at construction.
///
/// Every call is independent: the calculator holds no state besides its
/// defaults and quantile backend, so it can be shared across threads.
#[derive(Debug, Clone)]
pub struct SampleSizeCalculator<Q = StatrsNormal> {
    params: DesignParameters,
    quantile: Q,
}

impl SampleSizeCalculator<StatrsNormal> {
    pub fn new(params: DesignParameters) -> Result<Self, AbComputeErr> {
        SampleSizeCalculator::with_quantile(params, StatrsNormal)
    }
}

impl<Q: Quantile> SampleSizeCalculator<Q> {
    pub fn with_quantile(params: DesignParameters, quantile: Q) -> Result<Self, AbComputeErr> {
        validate_design(&params)?;
        Ok(SampleSizeCalculator { params, quantile })
    }

    pub fn params(&self) -> &DesignParameters {
        &self.params
    }

    /// Sample size for a fractional lift over the baseline (0.10 = +10%)
    pub fn compute_relative(&self, relative_mde: f64) -> Result<SampleSizeResult, AbComputeErr> {
        self.compute(Effect::Relative(relative_mde))
    }

    /// Sample size for an additive lift over the baseline (0.02 = +2 points)
    pub fn compute_absolute(&self, absolute_mde: f64) -> Result<SampleSizeResult, AbComputeErr> {
        self.compute(Effect::Absolute(absolute_mde))
    }

    pub fn compute(&self, effect: Effect) -> Result<SampleSizeResult, AbComputeErr> {
        self.compute_with(&self.params, effect)
    }

    /// Same as `compute`, but with design parameters overriding the defaults
    #[instrument(level = "debug", skip(self))]
    pub fn compute_with(
        &self,
        params: &DesignParameters,
        effect: Effect,
    ) -> Result<SampleSizeResult, AbComputeErr> {
        compute_ss(params, effect, &self.quantile)
    }

    pub fn mde_curve(
        &self,
        mde_values: &[f64],
        kind: EffectKind,
    ) -> Result<MdeCurve, AbComputeErr> {
        self.mde_curve_with(&self.params, mde_values, kind)
    }

    #[instrument(level = "debug", skip(self, mde_values), fields(n_mdes = mde_values.len()))]
    pub fn mde_curve_with(
        &self,
        params: &DesignParameters,
        mde_values: &[f64],
        kind: EffectKind,
    ) -> Result<MdeCurve, AbComputeErr> {
        mde_curve(params, mde_values, kind, &self.quantile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normal::std_normal::AcklamNormal;

    #[test]
    fn rejects_invalid_defaults() {
        let err = SampleSizeCalculator::new(DesignParameters::new(1.2))
            .expect_err("baseline above 1 should be rejected");
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn relative_absolute_equivalence() {
        let calc = SampleSizeCalculator::new(DesignParameters::new(0.05))
            .expect("failed to construct calculator");
        let rel = calc
            .compute_relative(0.1)
            .expect("failed to compute relative sample size");
        let abs = calc
            .compute_absolute(0.05 * 0.1)
            .expect("failed to compute absolute sample size");
        assert_eq!(rel.per_group_size, abs.per_group_size);
        assert_eq!(rel, abs);
    }

    #[test]
    fn overrides_do_not_change_defaults() {
        let calc = SampleSizeCalculator::new(DesignParameters::new(0.1))
            .expect("failed to construct calculator");
        let unequal = calc
            .compute_with(
                &calc.params().with_split_ratio(0.3),
                Effect::Absolute(0.02),
            )
            .expect("failed to compute with override");
        let default = calc
            .compute_absolute(0.02)
            .expect("failed to compute with defaults");

        assert_eq!(calc.params().split_ratio, 0.5);
        assert!(unequal.per_group_size > default.per_group_size);
    }

    #[test]
    fn override_is_validated() {
        let calc = SampleSizeCalculator::new(DesignParameters::new(0.1))
            .expect("failed to construct calculator");
        let err = calc
            .compute_with(&calc.params().with_power(1.5), Effect::Relative(0.1))
            .expect_err("power above 1 should be rejected");
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn custom_quantile_backend() {
        let calc = SampleSizeCalculator::with_quantile(DesignParameters::new(0.05), AcklamNormal)
            .expect("failed to construct calculator");
        let res = calc
            .compute_relative(0.1)
            .expect("failed to compute sample size");
        assert_eq!(res.per_group_size, 31_231);
    }

    #[test]
    fn curve_through_calculator() {
        let calc = SampleSizeCalculator::new(DesignParameters::new(0.1))
            .expect("failed to construct calculator");
        let curve = calc
            .mde_curve(&[0.01, 0.05, 0.1, 0.15, 0.2], EffectKind::Relative)
            .expect("failed to compute curve");
        assert_eq!(curve.len(), 5);
    }
}
