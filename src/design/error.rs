//----------------------------------------
// design errors
//----------------------------------------
use crate::error::AbComputeErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParameterErr {
    #[error("baseline rate should be in (0, 1); got {0}")]
    BaselineRate(f64),
    #[error("alpha should be in (0, 1); got {0}")]
    Alpha(f64),
    #[error("power should be in (0, 1); got {0}")]
    Power(f64),
    #[error("split ratio should be in (0, 1); got {0}")]
    SplitRatio(f64),
    #[error("number of comparisons should be at least 1; got {0}")]
    Comparisons(u32),
    #[error("number of comparisons should be a whole number in [1, {max}]; got {value}")]
    ComparisonsValue { value: f64, max: u32 },
    #[error("effect should be a finite number; got {0}")]
    NonFiniteEffect(f64),
    #[error(
        "treatment rate derived from baseline {baseline_rate} and effect {effect} \
        should be in (0, 1); got {treatment_rate}"
    )]
    TreatmentRate {
        baseline_rate: f64,
        effect: f64,
        treatment_rate: f64,
    },
    #[error("MDE list was empty")]
    EmptyMdeList,
    #[error("MDE grid bounds should be finite with start <= stop; got start {start}, stop {stop}")]
    GridBounds { start: f64, stop: f64 },
    #[error("MDE grid step should be finite and positive; got {0}")]
    GridStep(f64),
    #[error("MDE grid would have {points} points; at most {max} are allowed")]
    GridSize { points: f64, max: usize },
    #[error("MDE at index {index} ({mde}): {source}")]
    CurveElement {
        index: usize,
        mde: f64,
        source: Box<AbComputeErr>,
    },
}

impl From<ParameterErr> for AbComputeErr {
    fn from(err: ParameterErr) -> AbComputeErr {
        AbComputeErr::InvalidParameter(err)
    }
}

#[derive(Error, Debug)]
pub enum ConfigErr {
    #[error("could not read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("malformed design parameters: {0}")]
    Parse(#[from] serde_json::Error),
}

impl From<ConfigErr> for AbComputeErr {
    fn from(err: ConfigErr) -> AbComputeErr {
        AbComputeErr::Config(err)
    }
}
