use approx::assert_relative_eq;
use chart_surface::ChartError;
use chart_surface::core::{RealPoint, RealSize};
use chart_surface::object::{
    ChartEllipse, ChartLine, ChartObject, ChartPoint, ChartPolygon, ChartRectangle, FunctionPlot,
    PointSizeMode,
};

#[test]
fn point_bounds_divide_by_scale_in_pixel_mode() {
    let point = ChartPoint::new(RealPoint::new(0.0, 0.0)).expect("valid point");
    let bounds = point.bounds(10.0);

    assert_relative_eq!(bounds.x, -0.4);
    assert_relative_eq!(bounds.y, -0.4);
    assert_relative_eq!(bounds.width, 0.8);
    assert_relative_eq!(bounds.height, 0.8);

    // Doubling the zoom halves the real footprint.
    let zoomed = point.bounds(20.0);
    assert_relative_eq!(zoomed.width, 0.4);
}

#[test]
fn point_bounds_in_real_units_ignore_scale() {
    let mut point = ChartPoint::new(RealPoint::new(1.0, 1.0)).expect("valid point");
    point
        .set_size(RealSize::new(2.0, 2.0), PointSizeMode::RealUnits)
        .expect("valid size");

    for scale in [1.0, 10.0, 100.0] {
        let bounds = point.bounds(scale);
        assert_relative_eq!(bounds.x, 0.0);
        assert_relative_eq!(bounds.width, 2.0);
    }
}

#[test]
fn rectangle_move_recomputes_lower_left_corner() {
    let mut object = ChartObject::Rectangle(
        ChartRectangle::new(RealPoint::new(0.0, 0.0), RealSize::new(4.0, 2.0))
            .expect("valid rectangle"),
    );
    object.move_to(RealPoint::new(10.0, 5.0)).expect("movable");

    let bounds = object.bounds(1.0).expect("selectable");
    assert_relative_eq!(bounds.x, 8.0);
    assert_relative_eq!(bounds.y, 4.0);
    assert_relative_eq!(bounds.width, 4.0);
    assert_relative_eq!(bounds.height, 2.0);
}

#[test]
fn polygon_move_translates_every_vertex() {
    let polygon = ChartPolygon::new(vec![
        RealPoint::new(0.0, 0.0),
        RealPoint::new(3.0, 0.0),
        RealPoint::new(0.0, 3.0),
    ])
    .expect("valid polygon");
    assert_eq!(polygon.centroid(), RealPoint::new(1.0, 1.0));

    let mut object = ChartObject::Polygon(polygon.clone());
    object.move_to(RealPoint::new(2.0, 2.0)).expect("movable");
    let ChartObject::Polygon(moved) = &object else {
        unreachable!("variant unchanged by move");
    };

    assert_eq!(moved.centroid(), RealPoint::new(2.0, 2.0));
    assert_eq!(moved.vertices()[0], RealPoint::new(1.0, 1.0));
    assert_eq!(moved.vertices()[1], RealPoint::new(4.0, 1.0));
    assert_eq!(moved.vertices()[2], RealPoint::new(1.0, 4.0));

    // Bounds track the translated extrema.
    let bounds = moved.bounds();
    assert_relative_eq!(bounds.x, 1.0);
    assert_relative_eq!(bounds.y, 1.0);
    assert_relative_eq!(bounds.width, 3.0);
    assert_relative_eq!(bounds.height, 3.0);
}

#[test]
fn line_center_is_the_midpoint() {
    let mut line =
        ChartLine::new(RealPoint::new(0.0, 0.0), RealPoint::new(4.0, 2.0)).expect("valid line");
    assert_eq!(line.center(), RealPoint::new(2.0, 1.0));

    line.set_endpoints(RealPoint::new(-1.0, -1.0), RealPoint::new(1.0, 1.0))
        .expect("valid endpoints");
    let mut object = ChartObject::Line(line);
    object.move_to(RealPoint::new(5.0, 5.0)).expect("movable");

    let ChartObject::Line(moved) = &object else {
        unreachable!("variant unchanged by move");
    };
    assert_eq!(moved.begin(), RealPoint::new(4.0, 4.0));
    assert_eq!(moved.end(), RealPoint::new(6.0, 6.0));
}

#[test]
fn ellipse_bounds_match_inscribing_box() {
    let ellipse = ChartEllipse::new(RealPoint::new(1.0, -1.0), RealSize::new(6.0, 2.0))
        .expect("valid ellipse");
    let bounds = ellipse.bounds();

    assert_relative_eq!(bounds.x, -2.0);
    assert_relative_eq!(bounds.y, -2.0);
    assert_relative_eq!(bounds.width, 6.0);
    assert_relative_eq!(bounds.height, 2.0);
}

#[test]
fn empty_polygon_is_rejected() {
    let err = ChartPolygon::new(Vec::new()).expect_err("zero vertices must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn non_finite_construction_is_rejected() {
    assert!(ChartPoint::new(RealPoint::new(f64::NAN, 0.0)).is_err());
    assert!(ChartLine::new(RealPoint::new(0.0, 0.0), RealPoint::new(f64::INFINITY, 0.0)).is_err());
    assert!(ChartRectangle::new(RealPoint::new(0.0, 0.0), RealSize::new(0.0, 1.0)).is_err());
    assert!(
        ChartPolygon::new(vec![RealPoint::new(0.0, f64::NEG_INFINITY)]).is_err()
    );
}

#[test]
fn function_plot_is_visible_only() {
    let mut object = ChartObject::FunctionPlot(FunctionPlot::new(f64::sin));

    assert!(!object.is_selectable());
    assert!(!object.is_movable());
    assert!(object.bounds(10.0).is_none());
    assert!(object.center().is_none());

    let err = object
        .move_to(RealPoint::new(1.0, 1.0))
        .expect_err("function plots cannot move");
    assert!(matches!(err, ChartError::CapabilityRejected { .. }));
}

#[test]
fn visibility_is_a_runtime_flag_on_every_variant() {
    let mut object =
        ChartObject::Point(ChartPoint::new(RealPoint::new(0.0, 0.0)).expect("valid point"));
    assert!(object.is_visible());
    object.set_visible(false);
    assert!(!object.is_visible());

    // An invisible object still reports bounds: visibility and
    // selectability are independent capabilities.
    assert!(object.bounds(10.0).is_some());
}
