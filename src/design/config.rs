use std::path::Path;

use tracing::debug;

use crate::design::error::{ConfigErr, ParameterErr};
use crate::design::types::DesignParameters;
use crate::design::validate::validate_design;
use crate::error::AbComputeErr;

impl DesignParameters {
    /// Parses and validates design parameters from JSON. Options left out
    /// take their defaults; unrecognized options are rejected. A numeric
    /// `comparisons` that is not a positive whole number is reported as an
    /// invalid parameter rather than a parse failure.
    pub fn from_json_str(json: &str) -> Result<DesignParameters, AbComputeErr> {
        let mut value: serde_json::Value =
            serde_json::from_str(json).map_err(ConfigErr::from)?;
        if let Some(comparisons) = value.get("comparisons").and_then(serde_json::Value::as_f64) {
            let whole = comparisons.fract() == 0.;
            if !(whole && comparisons >= 1. && comparisons <= f64::from(u32::MAX)) {
                return Err(ParameterErr::ComparisonsValue {
                    value: comparisons,
                    max: u32::MAX,
                }
                .into());
            }
            // 3.0 is a valid count, but serde won't read it as a u32
            value["comparisons"] = serde_json::Value::from(comparisons as u32);
        }
        let params: DesignParameters = serde_json::from_value(value).map_err(ConfigErr::from)?;
        validate_design(&params)?;
        debug!(?params, "loaded design parameters");
        Ok(params)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<DesignParameters, AbComputeErr> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigErr::Read {
            path: path.display().to_string(),
            source,
        })?;
        DesignParameters::from_json_str(&json)
    }
}
