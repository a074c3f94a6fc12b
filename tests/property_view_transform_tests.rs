use chart_surface::core::{RealPoint, ViewTransform, Viewport, VisibleRect, fit_visible_rect};
use proptest::prelude::*;

proptest! {
    #[test]
    fn screen_real_round_trip_property(
        center_x in -1_000.0f64..1_000.0,
        center_y in -1_000.0f64..1_000.0,
        scale in 0.1f64..10_000.0,
        point_x in -1_000.0f64..1_000.0,
        point_y in -1_000.0f64..1_000.0
    ) {
        let transform = ViewTransform::new(
            RealPoint::new(center_x, center_y),
            scale,
            Viewport::new(1920, 1080),
        )
        .expect("valid transform");

        let original = RealPoint::new(point_x, point_y);
        let recovered = transform.to_real(transform.to_screen(original));

        prop_assert!((recovered.x - original.x).abs() <= 1e-6);
        prop_assert!((recovered.y - original.y).abs() <= 1e-6);
    }

    #[test]
    fn aspect_fit_property(
        left in -1_000.0f64..1_000.0,
        bottom in -1_000.0f64..1_000.0,
        width in 0.001f64..1_000.0,
        height in 0.001f64..1_000.0
    ) {
        let viewport = Viewport::new(800, 600);
        let rect = VisibleRect::new(left, bottom + height, left + width, bottom);

        let (center, scale) = fit_visible_rect(viewport, rect).expect("fit");

        let expected_scale = (800.0 / width).min(600.0 / height);
        prop_assert!((scale - expected_scale).abs() <= 1e-9 * expected_scale.abs());
        prop_assert!((center.x - (left + width / 2.0)).abs() <= 1e-9);
        prop_assert!((center.y - (bottom + height / 2.0)).abs() <= 1e-9);

        // The fitted view keeps the whole rect on screen.
        let transform = ViewTransform::new(center, scale, viewport).expect("valid transform");
        let top_left = transform.to_screen(RealPoint::new(rect.left, rect.top));
        let bottom_right = transform.to_screen(RealPoint::new(rect.right, rect.bottom));
        prop_assert!(top_left.x >= -1e-6 && bottom_right.x <= 800.0 + 1e-6);
        prop_assert!(top_left.y >= -1e-6 && bottom_right.y <= 600.0 + 1e-6);
    }
}
