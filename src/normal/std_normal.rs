use statrs::distribution::{ContinuousCDF, Normal};

use crate::error::AbComputeErr;
use crate::normal::error::NormalDistErr;

/// Inverse CDF of the standard normal distribution. This is the only thing
/// the sample size engine needs from a statistics library.
pub trait Quantile {
    /// Standard normal quantile for `p`, which callers guarantee is in (0, 1)
    fn quantile_unchecked(&self, p: f64) -> Result<f64, AbComputeErr>;

    fn quantile(&self, p: f64) -> Result<f64, AbComputeErr> {
        if !(p > 0.0 && p < 1.0) {
            return Err(NormalDistErr::QuantileOutOfBounds(p).into());
        }
        self.quantile_unchecked(p)
    }
}

/// Quantiles from statrs' normal distribution
#[derive(Debug, Default, Clone, Copy)]
pub struct StatrsNormal;

impl Quantile for StatrsNormal {
    fn quantile_unchecked(&self, p: f64) -> Result<f64, AbComputeErr> {
        let std_normal =
            Normal::new(0.0, 1.0).map_err(|e| NormalDistErr::Construction(e.to_string()))?;
        Ok(std_normal.inverse_cdf(p))
    }
}

/// Rational approximation of the normal quantile (Acklam 2003), relative
/// error below 1.15e-9 across (0, 1). Needs no statistics library.
#[derive(Debug, Default, Clone, Copy)]
pub struct AcklamNormal;

impl Quantile for AcklamNormal {
    #[allow(clippy::excessive_precision)]
    fn quantile_unchecked(&self, p: f64) -> Result<f64, AbComputeErr> {
        const A: [f64; 6] = [
            -3.969683028665376e+01,
            2.209460984245205e+02,
            -2.759285104469687e+02,
            1.383577518672690e+02,
            -3.066479806614716e+01,
            2.506628277459239e+00,
        ];
        const B: [f64; 5] = [
            -5.447609879822406e+01,
            1.615858368580409e+02,
            -1.556989798598866e+02,
            6.680131188771972e+01,
            -1.328068155288572e+01,
        ];
        const C: [f64; 6] = [
            -7.784894002430293e-03,
            -3.223964580411365e-01,
            -2.400758277161838e+00,
            -2.549732539343734e+00,
            4.374664141464968e+00,
            2.938163982698783e+00,
        ];
        const D: [f64; 4] = [
            7.784695709041462e-03,
            3.224671290700398e-01,
            2.445134137142996e+00,
            3.754408661907416e+00,
        ];
        const P_LOW: f64 = 0.02425;
        const P_HIGH: f64 = 1.0 - P_LOW;

        let tail = |q: f64| {
            (((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
                / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
        };

        if p < P_LOW {
            return Ok(tail((-2.0 * p.ln()).sqrt()));
        }
        if p > P_HIGH {
            return Ok(-tail((-2.0 * (1.0 - p).ln()).sqrt()));
        }
        let q = p - 0.5;
        let r = q * q;
        Ok(
            (((((A[0] * r + A[1]) * r + A[2]) * r + A[3]) * r + A[4]) * r + A[5]) * q
                / (((((B[0] * r + B[1]) * r + B[2]) * r + B[3]) * r + B[4]) * r + 1.0),
        )
    }
}

/// Standard normal quantile using the default statrs backend
pub fn std_normal_quantile(p: f64) -> Result<f64, AbComputeErr> {
    StatrsNormal.quantile(p)
}
