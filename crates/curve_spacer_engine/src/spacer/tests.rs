use super::*;
use approx::assert_relative_eq;

fn straight(length: f32) -> Polyline {
    Polyline::from_positions(&[Vec2::ZERO, Vec2::new(length, 0.0)])
}

fn xs(dots: &[EvenlySpacedDot]) -> Vec<f32> {
    dots.iter().map(|d| d.point.x).collect()
}

// ── SpacingPlan ──

#[test]
fn test_plan_without_cap_uses_honest_spacing() {
    let plan = SpacingPlan::new(100.0, 4, f32::INFINITY);
    assert_relative_eq!(plan.effective_spacing, 25.0);
    assert_relative_eq!(plan.initial_offset, 12.5);
}

#[test]
fn test_plan_cap_acts_as_ceiling() {
    let plan = SpacingPlan::new(100.0, 4, 10.0);
    assert_relative_eq!(plan.effective_spacing, 10.0);
    // 50 - 10·3/2
    assert_relative_eq!(plan.initial_offset, 35.0);
}

#[test]
fn test_plan_cap_above_honest_spacing_does_not_bind() {
    let plan = SpacingPlan::new(100.0, 4, 40.0);
    assert_relative_eq!(plan.effective_spacing, 25.0);
}

#[test]
fn test_plan_negative_cap_counts_as_zero() {
    let plan = SpacingPlan::new(100.0, 5, -3.0);
    assert_relative_eq!(plan.effective_spacing, 0.0);
    assert_relative_eq!(plan.initial_offset, 50.0);
}

#[test]
fn test_plan_single_item_is_centered() {
    let plan = SpacingPlan::new(80.0, 1, f32::INFINITY);
    assert_relative_eq!(plan.effective_spacing, 80.0);
    assert_relative_eq!(plan.initial_offset, 40.0);
}

// ── Durchlauf ──

#[test]
fn test_zero_count_gives_empty_result() {
    assert!(distribute(&straight(10.0), 0, 5.0).is_empty());
}

#[test]
fn test_straight_line_is_centered_and_even() {
    let dots = distribute(&straight(100.0), 4, f32::INFINITY);
    let expected = [12.5, 37.5, 62.5, 87.5];
    assert_eq!(dots.len(), 4);
    for (x, e) in xs(&dots).into_iter().zip(expected) {
        assert_relative_eq!(x, e, epsilon = 1e-4);
    }
    for dot in &dots {
        assert_relative_eq!(dot.point.y, 0.0);
        assert_relative_eq!(dot.normal.x, 0.0);
        assert_relative_eq!(dot.normal.y, 1.0);
    }
}

#[test]
fn test_walk_crosses_polyline_corner() {
    // L-Form, Länge 20: Punkte bei Bogenlänge 5 und 15
    let polyline = Polyline::from_positions(&[
        Vec2::ZERO,
        Vec2::new(10.0, 0.0),
        Vec2::new(10.0, 10.0),
    ]);
    let dots = distribute(&polyline, 2, f32::INFINITY);
    assert_eq!(dots.len(), 2);

    assert_relative_eq!(dots[0].point.x, 5.0, epsilon = 1e-5);
    assert_relative_eq!(dots[0].point.y, 0.0, epsilon = 1e-5);
    assert_relative_eq!(dots[0].normal.y, 1.0);

    assert_relative_eq!(dots[1].point.x, 10.0, epsilon = 1e-5);
    assert_relative_eq!(dots[1].point.y, 5.0, epsilon = 1e-5);
    // Normale des zweiten Segments (nach oben laufend) → zeigt nach -x
    assert_relative_eq!(dots[1].normal.x, -1.0);
    assert_relative_eq!(dots[1].normal.y, 0.0);
}

#[test]
fn test_several_dots_within_one_segment() {
    let polyline = Polyline::from_positions(&[
        Vec2::ZERO,
        Vec2::new(90.0, 0.0),
        Vec2::new(100.0, 0.0),
    ]);
    let dots = distribute(&polyline, 5, 10.0);
    // Abstand 10, Versatz 50 - 20 = 30
    let expected = [30.0, 40.0, 50.0, 60.0, 70.0];
    for (x, e) in xs(&dots).into_iter().zip(expected) {
        assert_relative_eq!(x, e, epsilon = 1e-4);
    }
}

#[test]
fn test_zero_cap_collapses_on_midpoint() {
    let dots = distribute(&straight(100.0), 3, 0.0);
    assert_eq!(dots.len(), 3);
    for dot in &dots {
        assert_relative_eq!(dot.point.x, 50.0, epsilon = 1e-5);
        assert_eq!(dot.normal, dots[0].normal);
    }
}

#[test]
fn test_dot_on_vertex_keeps_segment_normal() {
    // Mittelpunkt liegt exakt auf dem Knick bei (10, 0)
    let polyline = Polyline::from_positions(&[
        Vec2::ZERO,
        Vec2::new(10.0, 0.0),
        Vec2::new(10.0, 10.0),
    ]);
    let dots = distribute(&polyline, 2, 0.0);
    for dot in &dots {
        assert_relative_eq!(dot.point.x, 10.0, epsilon = 1e-5);
        assert_relative_eq!(dot.point.y, 0.0, epsilon = 1e-5);
        assert_relative_eq!(dot.normal.y, 1.0);
        assert!(dot.is_finite());
    }
}

#[test]
fn test_degenerate_polyline_yields_finite_duplicates() {
    let polyline = Polyline::from_positions(&[Vec2::new(3.0, 4.0); 3]);
    let dots = distribute(&polyline, 4, f32::INFINITY);
    assert_eq!(dots.len(), 4);
    for dot in &dots {
        assert!(dot.is_finite());
        assert_eq!(dot.point, Vec2::new(3.0, 4.0));
        assert_eq!(dot.normal, Vec2::ZERO);
    }
}

#[test]
fn test_normals_are_unit_length_on_curved_polyline() {
    let positions: Vec<Vec2> = (0..=50)
        .map(|i| {
            let x = i as f32 / 50.0;
            Vec2::new(x * 40.0, (x * std::f32::consts::TAU).sin() * 10.0)
        })
        .collect();
    let dots = distribute(&Polyline::from_positions(&positions), 7, f32::INFINITY);
    assert_eq!(dots.len(), 7);
    for dot in &dots {
        assert_relative_eq!(dot.normal.length(), 1.0, epsilon = 1e-5);
    }
}

// ── Auffüllen ──

#[test]
fn test_padding_repeats_last_dot() {
    let polyline = straight(10.0);
    let dot = EvenlySpacedDot {
        point: Vec2::new(7.0, 0.0),
        normal: Vec2::Y,
    };
    let mut dots = vec![dot];
    pad_to_count(&mut dots, &polyline, 3);
    assert_eq!(dots, vec![dot; 3]);
}

#[test]
fn test_padding_without_dots_uses_first_sample() {
    let polyline = Polyline::from_positions(&[Vec2::new(1.0, 1.0), Vec2::new(1.0, 5.0)]);
    let mut dots = Vec::new();
    pad_to_count(&mut dots, &polyline, 2);
    assert_eq!(dots.len(), 2);
    assert_eq!(dots[0].point, Vec2::new(1.0, 1.0));
    assert_relative_eq!(dots[0].normal.x, -1.0);
    assert_eq!(dots[0], dots[1]);
}

#[test]
fn test_padding_is_noop_when_full() {
    let mut dots = distribute(&straight(10.0), 2, f32::INFINITY);
    let before = dots.clone();
    pad_to_count(&mut dots, &straight(10.0), 2);
    assert_eq!(dots, before);
}

#[test]
fn test_empty_polyline_pads_with_origin() {
    let polyline = Polyline::from_positions(&[]);
    assert!(polyline.is_empty());
    assert_relative_eq!(polyline.total_length(), 0.0);

    let dots = distribute(&polyline, 3, f32::INFINITY);
    assert_eq!(dots.len(), 3);
    assert!(dots.iter().all(|d| d.point == Vec2::ZERO && d.normal == Vec2::ZERO));
}
