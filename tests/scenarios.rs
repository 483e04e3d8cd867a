use std::io::Write;

use abcompute::AbComputeErr;
use abcompute::compute::{
    CsvRenderer, CurveRenderer, DesignParameters, EffectKind, JsonRenderer, SampleSizeCalculator,
    mde_grid,
};

#[test]
fn low_baseline_relative_lift() {
    let calc = SampleSizeCalculator::new(DesignParameters::new(0.05))
        .expect("failed to construct calculator");
    let res = calc
        .compute_relative(0.10)
        .expect("failed to compute sample size");

    // Tens of thousands per group for a 10% lift on a 5% baseline
    assert!(res.per_group_size > 10_000 && res.per_group_size < 100_000);
    assert_eq!(res.per_group_size, 31_231);
    assert!((res.treatment_rate - 0.055).abs() < 1e-12);
}

#[test]
fn unequal_allocation_absolute_lift() {
    let params = DesignParameters::new(0.1).with_split_ratio(0.3);
    let calc = SampleSizeCalculator::new(params).expect("failed to construct calculator");
    let unequal = calc
        .compute_absolute(0.02)
        .expect("failed to compute unequal sample size");
    let equal = calc
        .compute_with(&params.with_split_ratio(0.5), abcompute::compute::Effect::Absolute(0.02))
        .expect("failed to compute equal sample size");

    assert!(unequal.per_group_size > equal.per_group_size);
    assert!(unequal.control_size > unequal.treatment_size);
    assert!(unequal.confidence_interval.contains(0.02));
}

#[test]
fn relative_curve() {
    let calc = SampleSizeCalculator::new(DesignParameters::new(0.1))
        .expect("failed to construct calculator");
    let curve = calc
        .mde_curve(&[0.01, 0.05, 0.1, 0.15, 0.2], EffectKind::Relative)
        .expect("failed to compute curve");

    let pairs: Vec<(f64, u64)> = curve.pairs().collect();
    assert_eq!(pairs.len(), 5);
    assert_eq!(
        pairs.iter().map(|p| p.0).collect::<Vec<f64>>(),
        vec![0.01, 0.05, 0.1, 0.15, 0.2]
    );
    for window in pairs.windows(2) {
        assert!(window[0].1 > window[1].1);
    }
}

#[test]
fn invalid_inputs() {
    let err = SampleSizeCalculator::new(DesignParameters::new(1.2))
        .expect_err("baseline above 1 should fail");
    assert!(err.is_invalid_parameter());

    let err = SampleSizeCalculator::new(DesignParameters::new(0.1).with_comparisons(0))
        .expect_err("zero comparisons should fail");
    assert!(err.is_invalid_parameter());

    let calc = SampleSizeCalculator::new(DesignParameters::new(0.1))
        .expect("failed to construct calculator");
    let err = calc
        .compute_relative(0.)
        .expect_err("zero effect should fail");
    assert!(matches!(err, AbComputeErr::DegenerateEffect(_)));
}

#[test]
fn error_messages_name_the_parameter() {
    let err = SampleSizeCalculator::new(DesignParameters::new(0.1).with_split_ratio(1.5))
        .expect_err("split ratio above 1 should fail");
    assert_eq!(
        format!("{err}"),
        "invalid parameter: split ratio should be in (0, 1); got 1.5"
    );
}

#[test]
fn config_file_to_curve() {
    let mut file = tempfile::NamedTempFile::new().expect("failed to create temp file");
    write!(
        file,
        r#"{{ "baseline_rate": 0.1, "comparisons": 2, "split_ratio": 0.4 }}"#
    )
    .expect("failed to write config");

    let params =
        DesignParameters::from_json_file(file.path()).expect("failed to load config file");
    assert_eq!(params.comparisons, 2);
    assert_eq!(params.alpha, 0.05);

    let calc = SampleSizeCalculator::new(params).expect("failed to construct calculator");
    let grid = mde_grid(0.05, 0.25, 0.05).expect("failed to build grid");
    let curve = calc
        .mde_curve(&grid, EffectKind::Relative)
        .expect("failed to compute curve");
    assert_eq!(curve.len(), 5);
    assert_eq!(curve.comparisons, 2);

    let mut csv = Vec::new();
    CsvRenderer
        .render(&curve, &mut csv)
        .expect("failed to render csv");
    assert_eq!(String::from_utf8_lossy(&csv).lines().count(), 6);

    let mut json = Vec::new();
    JsonRenderer { pretty: true }
        .render(&curve, &mut json)
        .expect("failed to render json");
    let value: serde_json::Value = serde_json::from_slice(&json).expect("invalid json");
    assert_eq!(value["points"].as_array().map(Vec::len), Some(5));
}
