// Host-side tests for presentation presets, container sizing and heart fitting.

use glam::DVec2;
use heart_core::{
    compute_heart_layout, container_size, presentation_config, FitTransform, LayoutDensity, Size,
    BREAKPOINTS,
};

#[test]
fn compact_preset_for_narrow_viewport() {
    let config = presentation_config(500.0, 800.0);
    assert_eq!(config.tile_count, 120);
    assert_eq!(config.base_delay_ms, 140);
    assert_eq!(config.step_delay_ms, 34);
    assert_eq!(config.density, LayoutDensity::Compact);
    assert_eq!(config.density.to_string(), "compact");
}

#[test]
fn presets_follow_shortest_side_breakpoints() {
    assert_eq!(presentation_config(520.0, 1200.0).density, LayoutDensity::Compact);
    assert_eq!(presentation_config(1200.0, 521.0).density, LayoutDensity::Balanced);
    assert_eq!(presentation_config(720.0, 720.0).density, LayoutDensity::Balanced);
    assert_eq!(presentation_config(721.0, 1000.0).density, LayoutDensity::Airy);

    let airy = presentation_config(1920.0, 1080.0);
    assert_eq!(airy.tile_count, 180);
    assert_eq!(airy.base_delay_ms, 220);
    assert_eq!(airy.step_delay_ms, 45);

    let balanced = presentation_config(600.0, 1000.0);
    assert_eq!(balanced.tile_count, 150);
    assert_eq!(balanced.base_delay_ms, 180);
    assert_eq!(balanced.step_delay_ms, 40);
}

#[test]
fn breakpoint_table_is_ordered_and_sane() {
    let mut prev = 0.0;
    for (i, bp) in BREAKPOINTS.iter().enumerate() {
        match bp.max_shortest {
            Some(max) => {
                assert!(max > prev);
                prev = max;
            }
            None => assert_eq!(i, BREAKPOINTS.len() - 1, "catch-all must be last"),
        }
        let c = bp.config;
        assert!(c.tile_count > 0);
        assert!(c.min_width <= c.max_width);
        assert!(c.min_height <= c.max_height);
        assert!(c.width_ratio > 0.0 && c.width_ratio <= 1.0);
        assert!(c.height_ratio > 0.0 && c.height_ratio <= 1.0);
    }
}

#[test]
fn density_labels_parse_back() {
    for d in [LayoutDensity::Compact, LayoutDensity::Balanced, LayoutDensity::Airy] {
        assert_eq!(d.as_str().parse::<LayoutDensity>(), Ok(d));
    }
    let err = "dense".parse::<LayoutDensity>().unwrap_err();
    assert_eq!(err.to_string(), "unknown layout density `dense`");
}

#[test]
fn container_size_clamps_each_axis_independently() {
    let config = presentation_config(500.0, 800.0);
    let size = container_size(Size::new(500.0, 800.0), &config);
    assert!((size.width - 450.0).abs() < 1e-9); // 0.9 * 500 within bounds
    assert_eq!(size.height, 540.0); // 0.78 * 800 = 624 clamped to max

    let tiny = container_size(Size::new(200.0, 200.0), &config);
    assert_eq!(tiny.width, 320.0);
    assert_eq!(tiny.height, 320.0);

    let airy = presentation_config(4000.0, 3000.0);
    let huge = container_size(Size::new(4000.0, 3000.0), &airy);
    assert_eq!(huge.width, 760.0);
    assert_eq!(huge.height, 640.0);
}

#[test]
fn smaller_ratio_wins_when_fitting() {
    let fit = FitTransform::fit(Size::new(400.0, 300.0), 32.0, 26.0);
    let expected = (300.0 * 0.9) / 26.0;
    assert!((fit.scale - expected).abs() < 1e-12);
    assert!(fit.scale < (400.0 * 0.9) / 32.0);
    assert!((fit.scale - 10.3846).abs() < 1e-3);
}

#[test]
fn degenerate_span_keeps_unit_scale() {
    assert_eq!(FitTransform::fit(Size::new(400.0, 300.0), 0.0, 26.0).scale, 1.0);
    assert_eq!(FitTransform::fit(Size::new(400.0, 300.0), 32.0, 0.0).scale, 1.0);

    let single = compute_heart_layout(1);
    let fit = FitTransform::fit(Size::new(400.0, 300.0), single.span_x, single.span_y);
    let p = fit.to_pixel(single.points[0]);
    assert!(p.x.is_finite() && p.y.is_finite());
    assert_eq!(p, DVec2::new(200.0, 150.0));
}

#[test]
fn to_pixel_flips_vertical_axis() {
    let fit = FitTransform::fit(Size::new(400.0, 300.0), 32.0, 26.0);
    let up = fit.to_pixel(DVec2::new(0.0, 1.0));
    let right = fit.to_pixel(DVec2::new(1.0, 0.0));
    assert!(up.y < 150.0);
    assert_eq!(up.x, 200.0);
    assert!(right.x > 200.0);
    assert_eq!(right.y, 150.0);
}

#[test]
fn fitted_heart_stays_inside_container() {
    for (w, h) in [(640.0, 540.0), (420.0, 640.0), (760.0, 420.0)] {
        let container = Size::new(w, h);
        let layout = compute_heart_layout(180);
        let fit = FitTransform::fit(container, layout.span_x, layout.span_y);
        for p in &layout.points {
            let px = fit.to_pixel(*p);
            assert!(px.x >= w * 0.05 - 1e-9 && px.x <= w * 0.95 + 1e-9);
            assert!(px.y >= h * 0.05 - 1e-9 && px.y <= h * 0.95 + 1e-9);
        }
    }
}
