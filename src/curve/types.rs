use serde::Serialize;

use crate::design::types::EffectKind;
use crate::sample_size::types::SampleSizeResult;

#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct MdePoint {
    pub mde: f64,
    pub per_group_size: u64,
    pub result: SampleSizeResult,
}

/// Sample size as a function of minimum detectable effect, in the order the
/// effects were requested
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MdeCurve {
    pub kind: EffectKind,
    pub comparisons: u32,
    pub points: Vec<MdePoint>,
}

impl MdeCurve {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// (mde, per_group_size) pairs, the plain data a plot needs
    pub fn pairs(&self) -> impl Iterator<Item = (f64, u64)> + '_ {
        self.points.iter().map(|p| (p.mde, p.per_group_size))
    }
}

impl IntoIterator for MdeCurve {
    type Item = MdePoint;
    type IntoIter = std::vec::IntoIter<MdePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}
