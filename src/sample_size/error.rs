use crate::error::AbComputeErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EffectErr {
    #[error("treatment rate equals baseline rate ({0}); effect size is zero")]
    ZeroDifference(f64),
    #[error("effect size {0} is too small for a finite sample size")]
    Unbounded(f64),
}

impl From<EffectErr> for AbComputeErr {
    fn from(err: EffectErr) -> AbComputeErr {
        AbComputeErr::DegenerateEffect(err)
    }
}
