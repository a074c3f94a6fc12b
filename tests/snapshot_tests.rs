use chart_surface::api::SurfaceSnapshot;
use chart_surface::core::{RealPoint, Viewport};
use chart_surface::object::{ChartObject, ChartPoint, FunctionPlot, ObjectKind};
use chart_surface::{ChartSurface, SurfaceConfig};

fn build_surface() -> ChartSurface {
    let config =
        SurfaceConfig::new(Viewport::new(200, 200)).with_view(RealPoint::new(0.0, 0.0), 10.0);
    ChartSurface::new(config).expect("surface init")
}

#[test]
fn config_round_trips_through_json() {
    let config = SurfaceConfig::new(Viewport::new(800, 600)).with_snap_step(0.25);

    let json = serde_json::to_string(&config).expect("serialize");
    let restored: SurfaceConfig = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(restored, config);
}

#[test]
fn minimal_config_json_fills_in_defaults() {
    let json = r#"{"viewport":{"width":320,"height":240}}"#;
    let config: SurfaceConfig = serde_json::from_str(json).expect("deserialize");

    assert_eq!(config.viewport, Viewport::new(320, 240));
    assert_eq!(config.scale, 10.0);
    assert_eq!(config.snap_step, 1.0);
    assert!(config.display_grid);
    assert!(config.behavior.pan_enabled);
    assert_eq!(config.wheel_zoom.min_scale, 2.5);
    assert_eq!(config.wheel_zoom.max_scale, 700_000.0);
    assert!(config.initial_visible_rect.is_none());

    ChartSurface::new(config).expect("surface init from minimal config");
}

#[test]
fn snapshot_reflects_surface_state() {
    let mut surface = build_surface();
    let marker = surface.add_object(ChartObject::Point(
        ChartPoint::new(RealPoint::new(1.0, 2.0)).expect("valid point"),
    ));
    surface.add_object(ChartObject::FunctionPlot(FunctionPlot::new(f64::sin)));
    surface.select(marker).expect("member object");

    let snapshot = surface.snapshot();

    assert_eq!(snapshot.viewport, Viewport::new(200, 200));
    assert_eq!(snapshot.scale, 10.0);
    assert_eq!(snapshot.selected, Some(marker));
    assert_eq!(snapshot.pinned, None);
    assert_eq!(snapshot.objects.len(), 2);

    let point_summary = &snapshot.objects[0];
    assert_eq!(point_summary.id, marker);
    assert_eq!(point_summary.kind, ObjectKind::Point);
    assert_eq!(point_summary.center, Some(RealPoint::new(1.0, 2.0)));
    assert!(point_summary.bounds.is_some());

    let plot_summary = &snapshot.objects[1];
    assert_eq!(plot_summary.kind, ObjectKind::FunctionPlot);
    assert_eq!(plot_summary.center, None);
    assert_eq!(plot_summary.bounds, None);
}

#[test]
fn snapshot_lists_objects_in_draw_order() {
    let mut surface = build_surface();
    let first = surface.add_object(ChartObject::Point(
        ChartPoint::new(RealPoint::new(0.0, 0.0)).expect("valid point"),
    ));
    let second = surface.add_object(ChartObject::Point(
        ChartPoint::new(RealPoint::new(1.0, 0.0)).expect("valid point"),
    ));
    surface.set_z_index(first, 7).expect("member object");

    let ids: Vec<_> = surface.snapshot().objects.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![second, first]);
}

#[test]
fn snapshot_json_round_trips() {
    let mut surface = build_surface();
    surface.add_object(ChartObject::Point(
        ChartPoint::new(RealPoint::new(1.0, 2.0)).expect("valid point"),
    ));

    let json = surface.snapshot_json_pretty().expect("snapshot json");
    let restored: SurfaceSnapshot = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(restored, surface.snapshot());
}
