use chrono::{DateTime, Duration, TimeZone, Utc};
use fundi_trust::trend::{
    classify, classify_gradient, project, summarize, ChartSizing, GradientTier, ScoreSample,
    ScoreTier, Viewport,
};

fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 6, 0, 0)
        .single()
        .expect("valid start timestamp")
}

fn irregular_series(values: &[f64]) -> Vec<ScoreSample> {
    let gaps = [0, 1, 5, 6, 13, 30, 31, 45];
    values
        .iter()
        .enumerate()
        .map(|(idx, value)| {
            ScoreSample::new(start() + Duration::days(gaps[idx % gaps.len()]), *value)
        })
        .collect()
}

#[test]
fn short_series_never_report_change() {
    for values in [&[][..], &[88.0][..]] {
        let summary = summarize(&irregular_series(values));
        assert_eq!(summary.change_from_previous, 0.0);
        assert!(summary.average.is_finite());
    }
}

#[test]
fn duplicate_timestamps_are_summarized_in_delivery_order() {
    let t1 = start();
    let t2 = t1 + Duration::days(1);
    let t3 = t1 + Duration::days(2);
    let samples = vec![
        ScoreSample::new(t1, 60.0),
        ScoreSample::new(t2, 65.0),
        ScoreSample::new(t2, 65.0),
        ScoreSample::new(t3, 55.0),
    ];

    let summary = summarize(&samples);
    assert_eq!(summary.current, 55.0);
    assert_eq!(summary.change_from_previous, -10.0);
}

#[test]
fn curve_has_one_point_per_sample_inside_padding() {
    let viewport = Viewport::default();
    let samples = irregular_series(&[12.0, 40.0, 39.5, 70.0, 100.0, 0.0, 64.0]);

    let curve = project(&samples, viewport);

    assert_eq!(curve.points.len(), samples.len());
    for point in &curve.points {
        assert!(point.x >= viewport.padding_x - 1e-9);
        assert!(point.x <= viewport.width - viewport.padding_x + 1e-9);
        assert!(point.y >= viewport.padding_y - 1e-9);
        assert!(point.y <= viewport.height - viewport.padding_y + 1e-9);
    }
    assert!(curve.line_path.starts_with("M 40.00 "));
    assert_eq!(curve.line_path.matches('Q').count(), samples.len() - 1);
    assert!(curve.area_path.ends_with(" Z"));
    assert!(curve.area_path.starts_with(&curve.line_path));
}

#[test]
fn resized_viewport_rescales_x_only() {
    let samples = irregular_series(&[30.0, 90.0]);
    let narrow = Viewport::default().with_width(
        fundi_trust::trend::responsive_width(400.0, ChartSizing::default()),
    );

    let wide_curve = project(&samples, Viewport::default());
    let narrow_curve = project(&samples, narrow);

    assert_eq!(narrow_curve.viewport.width, 352.0);
    assert_eq!(narrow_curve.points[1].x, 312.0);
    assert_eq!(wide_curve.points[1].y, narrow_curve.points[1].y);
}

#[test]
fn both_classifiers_agree_on_extremes_only() {
    assert_eq!(classify(95.0), ScoreTier::Excellent);
    assert_eq!(classify_gradient(95.0), GradientTier::High);
    assert_eq!(classify(10.0), ScoreTier::NeedsImprovement);
    assert_eq!(classify_gradient(10.0), GradientTier::Low);

    assert_eq!(classify(72.0), ScoreTier::Excellent);
    assert_eq!(classify_gradient(72.0), GradientTier::Medium);
    assert_eq!(classify(50.0), ScoreTier::Good);
    assert_eq!(classify_gradient(50.0), GradientTier::Low);
}
