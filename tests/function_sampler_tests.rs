use std::f64::consts::{FRAC_PI_2, PI};

use chart_surface::core::{
    BreakKind, RealPoint, SampleOptions, ViewTransform, Viewport, sample_function,
};

fn transform(center_x: f64, scale: f64) -> ViewTransform {
    ViewTransform::new(RealPoint::new(center_x, 0.0), scale, Viewport::new(200, 200))
        .expect("valid transform")
}

#[test]
fn sine_flags_each_turning_point_exactly_once() {
    // 200 columns over [-10, 10): six turning points of sin are visible.
    let trace = sample_function(&f64::sin, &transform(0.0, 10.0), SampleOptions::default());

    assert_eq!(trace.breaks.len(), 6);
    assert!(
        trace
            .breaks
            .iter()
            .all(|plot_break| plot_break.kind != BreakKind::Asymptote)
    );

    // No duplicate flags at adjacent columns.
    for pair in trace.breaks.windows(2) {
        assert!(pair[1].column > pair[0].column + 1);
    }

    // One suppressed connecting segment per turning point.
    assert_eq!(trace.segments.len(), 199 - trace.breaks.len());
}

#[test]
fn sine_turning_points_alternate_min_max() {
    let trace = sample_function(&f64::sin, &transform(0.0, 10.0), SampleOptions::default());

    let kinds: Vec<BreakKind> = trace.breaks.iter().map(|plot_break| plot_break.kind).collect();
    assert_eq!(
        kinds,
        vec![
            BreakKind::Minimum,
            BreakKind::Maximum,
            BreakKind::Minimum,
            BreakKind::Maximum,
            BreakKind::Minimum,
            BreakKind::Maximum,
        ]
    );
}

#[test]
fn tangent_flip_is_an_asymptote_not_an_extremum() {
    // One pixel column lands just past pi/2, where the discrete derivative
    // explodes: the magnitude ratio crosses the threshold.
    let trace = sample_function(
        &f64::tan,
        &transform(FRAC_PI_2 + 1e-5, 100.0),
        SampleOptions::default(),
    );

    assert_eq!(trace.breaks.len(), 1);
    assert_eq!(trace.breaks[0].kind, BreakKind::Asymptote);
    assert_eq!(trace.breaks[0].column, 100);

    // The crossing segment is suppressed even with extend disabled.
    assert_eq!(trace.segments.len(), 199 - 1);
}

#[test]
fn cosine_peak_is_a_maximum() {
    // Column 100 samples x = 0.0 exactly, the peak of cos.
    let trace = sample_function(&f64::cos, &transform(0.0, 10.0), SampleOptions::default());

    assert!(
        trace
            .breaks
            .iter()
            .any(|plot_break| plot_break.column == 101 && plot_break.kind == BreakKind::Maximum)
    );
    assert!(
        trace
            .breaks
            .iter()
            .all(|plot_break| plot_break.kind != BreakKind::Asymptote)
    );
}

#[test]
fn extend_on_extremum_emits_edge_segments() {
    let options = SampleOptions {
        extend_on_extremum: true,
        ..SampleOptions::default()
    };
    let trace = sample_function(&f64::cos, &transform(0.0, 10.0), options);

    let suppressed = trace.breaks.len();
    assert_eq!(trace.segments.len(), (199 - suppressed) + 2 * suppressed);

    // The maximum at column 101: the current column extends down to the
    // bottom edge, the previous column hangs from the top edge.
    assert!(
        trace
            .segments
            .iter()
            .any(|segment| segment.x1 == 101.0 && segment.x2 == 101.0 && segment.y2 == 200.0)
    );
    assert!(
        trace
            .segments
            .iter()
            .any(|segment| segment.x1 == 100.0 && segment.y1 == 0.0 && segment.x2 == 100.0)
    );
}

#[test]
fn extend_on_minimum_mirrors_the_assignment() {
    let options = SampleOptions {
        extend_on_extremum: true,
        ..SampleOptions::default()
    };
    // -cos has a minimum where cos peaks.
    let negated_cosine = |x: f64| -x.cos();
    let trace = sample_function(&negated_cosine, &transform(0.0, 10.0), options);

    let minimum = trace
        .breaks
        .iter()
        .find(|plot_break| plot_break.column == 101)
        .expect("minimum break at column 101");
    assert_eq!(minimum.kind, BreakKind::Minimum);

    // Current column extends up to the top edge, previous hangs from the
    // bottom edge.
    assert!(
        trace
            .segments
            .iter()
            .any(|segment| segment.x1 == 101.0 && segment.x2 == 101.0 && segment.y2 == 0.0)
    );
    assert!(
        trace
            .segments
            .iter()
            .any(|segment| segment.x1 == 100.0 && segment.y1 == 200.0 && segment.x2 == 100.0)
    );
}

#[test]
fn consecutive_flags_collapse_into_one_break() {
    // cos(10 * pi * x) alternates sign at every sampled column, so every
    // step after the first flip keeps flipping. Only the first of the run
    // suppresses its segment.
    let alternating = |x: f64| (10.0 * PI * x).cos();
    let trace = sample_function(&alternating, &transform(0.0, 10.0), SampleOptions::default());

    assert_eq!(trace.breaks.len(), 1);
    assert_eq!(trace.segments.len(), 199 - 1);
}

#[test]
fn non_finite_samples_split_the_curve() {
    // ln(x) is undefined for x <= 0: the first 101 columns produce no
    // geometry and the walk restarts at x = 0.1.
    let trace = sample_function(&f64::ln, &transform(0.0, 10.0), SampleOptions::default());

    assert!(trace.breaks.is_empty());
    assert_eq!(trace.segments.len(), 98);
}

#[test]
fn flat_function_draws_every_segment() {
    let constant = |_: f64| 1.0;
    let trace = sample_function(&constant, &transform(0.0, 10.0), SampleOptions::default());

    assert!(trace.breaks.is_empty());
    assert_eq!(trace.segments.len(), 199);
}
