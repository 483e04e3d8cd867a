//----------------------------------------
// computation mod
//----------------------------------------
pub mod calculator;

pub use crate::curve::mde_curve::{mde_curve, mde_grid};
pub use crate::curve::render::{CsvRenderer, CurveRenderer, JsonRenderer};
pub use crate::curve::types::{MdeCurve, MdePoint};
pub use crate::design::types::{DesignParameters, Effect, EffectKind};
pub use crate::hypothesis_type::HypothesisType;
pub use crate::normal::std_normal::{AcklamNormal, Quantile, StatrsNormal, std_normal_quantile};
pub use crate::sample_size::compute_ss::compute_ss;
pub use crate::sample_size::types::{ConfidenceInterval, SampleSizeResult};
pub use calculator::SampleSizeCalculator;
