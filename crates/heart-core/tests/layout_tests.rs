// Host-side tests for heart sampling and angular reordering.

use heart_core::{compute_heart_layout, heart_point, sample_heart, CurveLayout, CurveSamples};
use glam::DVec2;

fn is_permutation(order: &[usize]) -> bool {
    let mut seen = vec![false; order.len()];
    for &i in order {
        if i >= order.len() || seen[i] {
            return false;
        }
        seen[i] = true;
    }
    true
}

#[test]
fn heart_point_matches_curve_at_known_parameters() {
    let top = heart_point(0.0);
    assert!(top.x.abs() < 1e-12);
    assert!((top.y - 5.0).abs() < 1e-12);

    let bottom = heart_point(std::f64::consts::PI);
    assert!(bottom.x.abs() < 1e-9);
    assert!((bottom.y + 17.0).abs() < 1e-12);

    let side = heart_point(std::f64::consts::FRAC_PI_2);
    assert!((side.x - 16.0).abs() < 1e-12);
}

#[test]
fn sample_count_and_first_point() {
    let samples = sample_heart(120);
    assert_eq!(samples.points.len(), 120);
    // i = 0 starts the sweep at t = pi, the bottom tip
    assert!((samples.points[0].y + 17.0).abs() < 1e-9);
    assert!((samples.bounds.min_y + 17.0).abs() < 1e-9);
}

#[test]
fn sampling_zero_is_empty() {
    let samples = sample_heart(0);
    assert!(samples.points.is_empty());
    let layout = compute_heart_layout(0);
    assert!(layout.is_empty());
    assert!(layout.order.is_empty());
    assert_eq!(layout.span_x, 0.0);
    assert_eq!(layout.span_y, 0.0);
}

#[test]
fn layout_lengths_and_permutation_for_many_counts() {
    for count in [1usize, 2, 3, 7, 60, 120, 150, 180, 333] {
        let layout = compute_heart_layout(count);
        assert_eq!(layout.points.len(), count, "points for count {count}");
        assert_eq!(layout.order.len(), count, "order for count {count}");
        assert!(is_permutation(&layout.order), "order not a permutation for {count}");
    }
}

#[test]
fn layout_is_deterministic() {
    let a = compute_heart_layout(150);
    let b = compute_heart_layout(150);
    assert_eq!(a, b);
}

#[test]
fn points_are_sorted_by_descending_angle() {
    let layout = compute_heart_layout(180);
    let angles: Vec<f64> = layout.points.iter().map(|p| p.y.atan2(p.x)).collect();
    for w in angles.windows(2) {
        assert!(w[0] >= w[1], "angles not descending: {} then {}", w[0], w[1]);
    }
}

#[test]
fn points_are_centered_on_bounding_box() {
    let layout = compute_heart_layout(120);
    let (mut min, mut max) = (DVec2::splat(f64::MAX), DVec2::splat(f64::MIN));
    for p in &layout.points {
        min = min.min(*p);
        max = max.max(*p);
    }
    assert!((min.x + max.x).abs() < 1e-9);
    assert!((min.y + max.y).abs() < 1e-9);
    assert!((layout.span_x - (max.x - min.x)).abs() < 1e-9);
    assert!((layout.span_y - (max.y - min.y)).abs() < 1e-9);
}

#[test]
fn spans_cover_full_width_when_quarter_turns_are_sampled() {
    // 120 samples include t = +-pi/2, where sin^3 reaches +-1
    let layout = compute_heart_layout(120);
    assert!((layout.span_x - 32.0).abs() < 1e-9);
    assert!(layout.span_y > 20.0 && layout.span_y < 30.0);
}

#[test]
fn order_maps_back_to_original_samples() {
    let samples = sample_heart(90);
    let layout = CurveLayout::from_samples(&samples);
    let center = samples.bounds.center();
    for (pos, &orig) in layout.order.iter().enumerate() {
        let expected = samples.points[orig] - center;
        assert!((layout.points[pos] - expected).length() < 1e-12);
    }
}

#[test]
fn equal_angles_keep_sampling_order() {
    let samples = CurveSamples {
        points: vec![
            DVec2::new(2.0, 2.0),
            DVec2::new(-1.0, -1.0),
            DVec2::new(1.0, 1.0),
            DVec2::new(-2.0, -2.0),
        ],
        bounds: heart_core::Bounds {
            min_x: -2.0,
            max_x: 2.0,
            min_y: -2.0,
            max_y: 2.0,
        },
    };
    let layout = CurveLayout::from_samples(&samples);
    // (2,2) and (1,1) share angle pi/4; (-1,-1) and (-2,-2) share -3pi/4
    assert_eq!(layout.order, vec![0, 2, 1, 3]);
}

#[test]
fn signed_zero_angles_tie() {
    let samples = CurveSamples {
        points: vec![
            DVec2::new(1.0, -0.0),
            DVec2::new(2.0, 0.0),
            DVec2::new(0.0, 1.0),
        ],
        bounds: heart_core::Bounds {
            min_x: -2.0,
            max_x: 2.0,
            min_y: -1.0,
            max_y: 1.0,
        },
    };
    let layout = CurveLayout::from_samples(&samples);
    // atan2 gives -0.0 and 0.0 for the first two; they compare equal
    assert_eq!(layout.order, vec![2, 0, 1]);
}

#[test]
fn arrange_permutes_per_sample_data() {
    let layout = compute_heart_layout(12);
    let labels: Vec<usize> = (0..12).collect();
    assert_eq!(layout.arrange(&labels), layout.order);

    let fills = heart_core::content::tile_fills(12);
    let arranged = layout.arrange(&fills);
    assert_eq!(arranged.len(), 12);
    assert_eq!(arranged[0], fills[layout.order[0]]);
}
