use chart_surface::core::{RealPoint, Viewport};
use chart_surface::object::{ChartObject, ChartPoint};
use chart_surface::{ChartError, ChartSurface, ObjectId, SurfaceConfig};

fn build_surface() -> ChartSurface {
    let config =
        SurfaceConfig::new(Viewport::new(200, 200)).with_view(RealPoint::new(0.0, 0.0), 10.0);
    ChartSurface::new(config).expect("surface init")
}

fn add_point(surface: &mut ChartSurface, x: f64) -> ObjectId {
    let point = ChartPoint::new(RealPoint::new(x, 0.0)).expect("valid point");
    surface.add_object(ChartObject::Point(point))
}

fn draw_order(surface: &ChartSurface) -> Vec<ObjectId> {
    surface.objects().map(|(id, _)| id).collect()
}

#[test]
fn equal_z_indices_keep_insertion_order() {
    let mut surface = build_surface();
    let a = add_point(&mut surface, -1.0);
    let b = add_point(&mut surface, 0.0);
    let c = add_point(&mut surface, 1.0);

    assert_eq!(draw_order(&surface), vec![a, b, c]);
}

#[test]
fn lowering_a_z_index_moves_the_object_to_the_back() {
    let mut surface = build_surface();
    let a = add_point(&mut surface, -1.0);
    let b = add_point(&mut surface, 0.0);
    let c = add_point(&mut surface, 1.0);

    surface.set_z_index(b, -1).expect("member object");
    assert_eq!(draw_order(&surface), vec![b, a, c]);
    assert_eq!(surface.z_index(b), Some(-1));
}

#[test]
fn restoring_the_z_index_restores_insertion_order() {
    let mut surface = build_surface();
    let a = add_point(&mut surface, -1.0);
    let b = add_point(&mut surface, 0.0);
    let c = add_point(&mut surface, 1.0);

    surface.set_z_index(b, -1).expect("member object");
    surface.set_z_index(b, 0).expect("member object");
    assert_eq!(draw_order(&surface), vec![a, b, c]);
}

#[test]
fn raising_a_z_index_moves_the_object_to_the_front() {
    let mut surface = build_surface();
    let a = add_point(&mut surface, -1.0);
    let b = add_point(&mut surface, 0.0);
    let c = add_point(&mut surface, 1.0);

    surface.set_z_index(a, 5).expect("member object");
    assert_eq!(draw_order(&surface), vec![b, c, a]);
}

#[test]
fn objects_added_after_a_resort_still_interleave_by_z() {
    let mut surface = build_surface();
    let a = add_point(&mut surface, -1.0);
    surface.set_z_index(a, 10).expect("member object");
    let b = add_point(&mut surface, 0.0);

    // b has the default z of 0 and draws below a despite later insertion.
    assert_eq!(draw_order(&surface), vec![b, a]);
}

#[test]
fn set_z_index_on_a_non_member_is_rejected() {
    let mut surface = build_surface();
    let a = add_point(&mut surface, 0.0);
    surface.remove_object(a);

    let err = surface.set_z_index(a, 1).expect_err("unknown object");
    assert!(matches!(err, ChartError::UnknownObject { .. }));
}

#[test]
fn removal_preserves_the_order_of_the_rest() {
    let mut surface = build_surface();
    let a = add_point(&mut surface, -1.0);
    let b = add_point(&mut surface, 0.0);
    let c = add_point(&mut surface, 1.0);

    surface.set_z_index(a, 3).expect("member object");
    assert!(surface.remove_object(b));
    assert_eq!(draw_order(&surface), vec![c, a]);
}
