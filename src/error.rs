//----------------------------------------
// Crate error type
//----------------------------------------
use crate::curve::error::RenderErr;
use crate::design::error::{ConfigErr, ParameterErr};
use crate::normal::error::NormalDistErr;
use crate::sample_size::error::EffectErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AbComputeErr {
    #[error("invalid parameter: {0}")]
    InvalidParameter(ParameterErr),
    #[error("degenerate effect: {0}")]
    DegenerateEffect(EffectErr),
    #[error("while evaluating normal distribution: {0}")]
    NormalDist(NormalDistErr),
    #[error("while loading design parameters: {0}")]
    Config(ConfigErr),
    #[error("while rendering MDE curve: {0}")]
    Render(RenderErr),
}

impl AbComputeErr {
    /// True for an out-of-range input, including one found inside an MDE
    /// curve request.
    pub fn is_invalid_parameter(&self) -> bool {
        match self {
            AbComputeErr::InvalidParameter(ParameterErr::CurveElement { source, .. }) => {
                source.is_invalid_parameter()
            }
            AbComputeErr::InvalidParameter(_) => true,
            _ => false,
        }
    }

    /// True when the requested effect collapses to zero difference, including
    /// one found inside an MDE curve request.
    pub fn is_degenerate_effect(&self) -> bool {
        match self {
            AbComputeErr::DegenerateEffect(_) => true,
            AbComputeErr::InvalidParameter(ParameterErr::CurveElement { source, .. }) => {
                source.is_degenerate_effect()
            }
            _ => false,
        }
    }
}
