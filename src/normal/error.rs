//----------------------------------------
// normal distribution errors
//----------------------------------------
use crate::error::AbComputeErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NormalDistErr {
    #[error("arguments to quantile function should be in (0, 1); got {0}")]
    QuantileOutOfBounds(f64),
    #[error("could not construct standard normal distribution: {0}")]
    Construction(String),
}

impl From<NormalDistErr> for AbComputeErr {
    fn from(err: NormalDistErr) -> AbComputeErr {
        AbComputeErr::NormalDist(err)
    }
}
