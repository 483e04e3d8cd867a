use tracing::{debug, trace};

use crate::curve::types::{MdeCurve, MdePoint};
use crate::design::error::ParameterErr;
use crate::design::types::{DesignParameters, Effect, EffectKind};
use crate::design::validate::validate_design;
use crate::error::AbComputeErr;
use crate::normal::std_normal::Quantile;
use crate::sample_size::compute_ss::compute_ss;

const MAX_GRID_POINTS: usize = 100_000;
// Slack so that a stop value reached up to rounding is still included
const GRID_EPS: f64 = 1e-9;

/// Computes one sample size per MDE, keeping the input order (duplicates
/// and non-monotonic orders included). Any invalid MDE fails the whole
/// curve; the error carries the offending index.
pub fn mde_curve<Q>(
    params: &DesignParameters,
    mde_values: &[f64],
    kind: EffectKind,
    quantile: &Q,
) -> Result<MdeCurve, AbComputeErr>
where
    Q: Quantile + ?Sized,
{
    validate_design(params)?;
    if mde_values.is_empty() {
        return Err(ParameterErr::EmptyMdeList.into());
    }

    let points = mde_values
        .iter()
        .enumerate()
        .map(|(index, &mde)| -> Result<MdePoint, AbComputeErr> {
            let result = compute_ss(params, Effect::new(kind, mde), quantile).map_err(|e| {
                ParameterErr::CurveElement {
                    index,
                    mde,
                    source: Box::new(e),
                }
            })?;
            trace!(index, mde, per_group_size = result.per_group_size, "curve point");
            Ok(MdePoint {
                mde,
                per_group_size: result.per_group_size,
                result,
            })
        })
        .collect::<Result<Vec<MdePoint>, AbComputeErr>>()?;

    debug!(n_points = points.len(), ?kind, "computed MDE curve");
    Ok(MdeCurve {
        kind,
        comparisons: params.comparisons,
        points,
    })
}

/// Evenly spaced MDE values from `start` to `stop` inclusive
pub fn mde_grid(start: f64, stop: f64, step: f64) -> Result<Vec<f64>, AbComputeErr> {
    if !start.is_finite() || !stop.is_finite() || start > stop {
        return Err(ParameterErr::GridBounds { start, stop }.into());
    }
    if !step.is_finite() || step <= 0. {
        return Err(ParameterErr::GridStep(step).into());
    }
    let intervals = ((stop - start) / step + GRID_EPS).floor();
    if intervals >= MAX_GRID_POINTS as f64 {
        return Err(ParameterErr::GridSize {
            points: intervals + 1.,
            max: MAX_GRID_POINTS,
        }
        .into());
    }
    // Multiply rather than accumulate so rounding doesn't drift along the grid
    Ok((0..=intervals as usize)
        .map(|i| start + i as f64 * step)
        .collect())
}
