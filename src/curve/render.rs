use std::io::Write;

use itertools::Itertools;

use crate::curve::error::RenderErr;
use crate::curve::types::MdeCurve;
use crate::error::AbComputeErr;

/// Consumer of a finished MDE curve, e.g. a chart or a file export.
/// Sample size computation never depends on an implementation of this.
pub trait CurveRenderer {
    fn render(&self, curve: &MdeCurve, out: &mut dyn Write) -> Result<(), AbComputeErr>;
}

pub const CSV_HEADER: [&str; 6] = [
    "mde",
    "per_group_size",
    "treatment_size",
    "control_size",
    "ci_lower",
    "ci_upper",
];

/// One row per curve point, in curve order
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvRenderer;

impl CurveRenderer for CsvRenderer {
    fn render(&self, curve: &MdeCurve, out: &mut dyn Write) -> Result<(), AbComputeErr> {
        writeln!(out, "{}", CSV_HEADER.iter().join(",")).map_err(RenderErr::from)?;
        for point in &curve.points {
            let ci = point.result.confidence_interval;
            let row = [
                point.mde.to_string(),
                point.per_group_size.to_string(),
                point.result.treatment_size.to_string(),
                point.result.control_size.to_string(),
                ci.lower.to_string(),
                ci.upper.to_string(),
            ];
            writeln!(out, "{}", row.iter().join(",")).map_err(RenderErr::from)?;
        }
        Ok(())
    }
}

/// The whole curve as a JSON document
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonRenderer {
    pub pretty: bool,
}

impl CurveRenderer for JsonRenderer {
    fn render(&self, curve: &MdeCurve, out: &mut dyn Write) -> Result<(), AbComputeErr> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut *out, curve).map_err(RenderErr::from)?;
        } else {
            serde_json::to_writer(&mut *out, curve).map_err(RenderErr::from)?;
        }
        writeln!(out).map_err(RenderErr::from)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::mde_curve::mde_curve;
    use crate::design::types::{DesignParameters, EffectKind};
    use crate::normal::std_normal::StatrsNormal;

    fn test_curve() -> MdeCurve {
        mde_curve(
            &DesignParameters::new(0.1),
            &[0.1, 0.2],
            EffectKind::Relative,
            &StatrsNormal,
        )
        .expect("failed to compute MDE curve")
    }

    #[test]
    fn csv_rows() {
        let mut buf = Vec::new();
        CsvRenderer
            .render(&test_curve(), &mut buf)
            .expect("failed to render csv");
        let text = String::from_utf8(buf).expect("csv should be utf-8");
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "mde,per_group_size,treatment_size,control_size,ci_lower,ci_upper"
        );
        assert!(lines[1].starts_with("0.1,14749,14749,14749,"));
        assert!(lines[2].starts_with("0.2,3839,3839,3839,"));
    }

    #[test]
    fn json_document() {
        let mut buf = Vec::new();
        JsonRenderer { pretty: false }
            .render(&test_curve(), &mut buf)
            .expect("failed to render json");
        let value: serde_json::Value = serde_json::from_slice(&buf).expect("invalid json");

        assert_eq!(value["kind"], "relative");
        assert_eq!(value["comparisons"], 1);
        assert_eq!(value["points"][1]["per_group_size"], 3839);
    }

    #[test]
    fn usable_as_trait_object() {
        let renderers: Vec<Box<dyn CurveRenderer>> =
            vec![Box::new(CsvRenderer), Box::new(JsonRenderer { pretty: true })];
        let curve = test_curve();
        for renderer in renderers {
            let mut buf = Vec::new();
            renderer
                .render(&curve, &mut buf)
                .expect("failed to render curve");
            assert!(!buf.is_empty());
        }
    }
}
