//----------------------------------------
// Root lib
//----------------------------------------
//! Sample size computation for two-proportion A/B tests.
//!
//! Given a baseline conversion rate and a minimum detectable effect
//! (relative or absolute), computes the per-group sample size a z-test
//! needs at a given significance level and power, with optional unequal
//! traffic allocation and Bonferroni correction. Also produces the
//! expected confidence interval for the effect and sample size vs. MDE
//! curves for plotting.
//!
//! ```
//! use abcompute::compute::{DesignParameters, SampleSizeCalculator};
//!
//! let calc = SampleSizeCalculator::new(DesignParameters::new(0.05)).unwrap();
//! let res = calc.compute_relative(0.10).unwrap();
//! assert_eq!(res.per_group_size, 31_231);
//! ```

/// This module houses the public API for computing sample sizes and
/// MDE curves
pub mod compute;
mod curve;
mod design;
/// This module contains error types
pub mod error;
mod hypothesis_type;
mod normal;
mod sample_size;

pub use crate::curve::error::RenderErr;
pub use crate::design::error::{ConfigErr, ParameterErr};
pub use crate::error::AbComputeErr;
pub use crate::normal::error::NormalDistErr;
pub use crate::sample_size::error::EffectErr;
