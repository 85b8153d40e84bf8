//! Cross-module tests for gradient materials on the demo sphere

use crate::gradient::segment;
use crate::scene::sphere_mesh;
use crate::{GradientStyle, GradientVariant, MAX_GRADIENT_COLORS, Rgb, build_gradient_material};

fn purple_colors() -> Vec<Rgb> {
    vec![
        Rgb::from_hex(0x4d2695),
        Rgb::from_hex(0xb699e9),
        Rgb::from_hex(0x925df2),
    ]
}

/// Surface points of the demo sphere
fn sphere_points() -> Vec<[f32; 3]> {
    sphere_mesh(1.0, 16, 12)
        .vertices
        .into_iter()
        .map(|v| v.position)
        .collect()
}

fn max_channel_diff(a: Rgb, b: Rgb) -> f32 {
    (a.r - b.r).abs().max((a.g - b.g).abs()).max((a.b - b.b).abs())
}

#[test]
fn test_build_is_deterministic() {
    let style = GradientStyle::default()
        .with_angle(12.5)
        .with_smooth(true)
        .with_distortion(0.35);

    let first = build_gradient_material(&purple_colors(), &style).unwrap();
    let second = build_gradient_material(&purple_colors(), &style).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        bytemuck::bytes_of(&first.uniforms().to_gpu()),
        bytemuck::bytes_of(&second.uniforms().to_gpu())
    );

    for p in sphere_points() {
        let a = first.shade(p);
        let b = second.shade(p);
        assert_eq!(
            (a.r.to_bits(), a.g.to_bits(), a.b.to_bits()),
            (b.r.to_bits(), b.g.to_bits(), b.b.to_bits())
        );
    }
}

#[test]
fn test_angle_period_360() {
    for smooth in [false, true] {
        let base = GradientStyle::default().with_smooth(smooth).with_distortion(0.2);
        let a = build_gradient_material(&purple_colors(), &base.with_angle(30.0)).unwrap();
        let b = build_gradient_material(&purple_colors(), &base.with_angle(390.0)).unwrap();
        let c = build_gradient_material(&purple_colors(), &base.with_angle(-330.0)).unwrap();

        for p in sphere_points() {
            assert!(max_channel_diff(a.shade(p), b.shade(p)) < 1e-3);
            assert!(max_channel_diff(a.shade(p), c.shade(p)) < 1e-3);
        }
    }
}

#[test]
fn test_angle_sets_gradient_axis() {
    let colors = purple_colors();

    // angle 0: color depends only on x
    let along_x = build_gradient_material(&colors, &GradientStyle::default().with_angle(0.0)).unwrap();
    assert_eq!(along_x.shade([0.3, -0.8, 0.1]), along_x.shade([0.3, 0.6, -0.4]));
    assert_ne!(along_x.shade([-0.6, 0.0, 0.0]), along_x.shade([0.6, 0.0, 0.0]));

    // angle 90: color depends only on y
    let along_y = build_gradient_material(&colors, &GradientStyle::default().with_angle(90.0)).unwrap();
    assert!(max_channel_diff(along_y.shade([-0.7, 0.3, 0.0]), along_y.shade([0.7, 0.3, 0.0])) < 1e-4);
    assert!(max_channel_diff(along_y.shade([0.0, -0.6, 0.0]), along_y.shade([0.0, 0.6, 0.0])) > 0.05);
}

#[test]
fn test_rotation_moves_boundary_continuously() {
    // At a fixed point, small angle steps give small color steps
    let colors = purple_colors();
    let p = [0.5, 0.5, 0.7];
    let mut previous = None;
    for step in 0..=90 {
        let style = GradientStyle::default().with_angle(step as f32);
        let color = build_gradient_material(&colors, &style).unwrap().shade(p);
        if let Some(prev) = previous {
            assert!(max_channel_diff(prev, color) < 0.05, "jump at {} degrees", step);
        }
        previous = Some(color);
    }
}

#[test]
fn test_zero_strength_distortion_is_noop() {
    for smooth in [false, true] {
        let plain = GradientStyle::default().with_angle(20.0).with_smooth(smooth);
        let zero = plain.with_distortion(0.0);
        let a = build_gradient_material(&purple_colors(), &plain).unwrap();
        let b = build_gradient_material(&purple_colors(), &zero).unwrap();

        for p in sphere_points() {
            assert_eq!(a.shade(p), b.shade(p));
            // Distortion evaluated with zero strength leaves t untouched
            let t = p[0] * 0.3;
            assert_eq!(a.variant().distort(p, t, 0.0), t);
        }
    }
}

#[test]
fn test_noise_distortion_perturbs_gradient() {
    let base = GradientStyle::default().with_angle(0.0).with_smooth(true);
    let plain = build_gradient_material(&purple_colors(), &base).unwrap();
    let noisy = build_gradient_material(&purple_colors(), &base.with_distortion(0.2)).unwrap();
    assert_eq!(noisy.variant(), GradientVariant::Noise);

    let changed = sphere_points()
        .into_iter()
        .filter(|&p| plain.shade(p) != noisy.shade(p))
        .count();
    assert!(changed > 0);
}

#[test]
fn test_wave_distortion_vanishes_at_equator() {
    // sin(0 * 10) = 0, so points with y = 0 are unaffected
    let base = GradientStyle::default().with_angle(35.0);
    let plain = build_gradient_material(&purple_colors(), &base).unwrap();
    let wavy = build_gradient_material(&purple_colors(), &base.with_distortion(0.5)).unwrap();
    assert_eq!(wavy.variant(), GradientVariant::Wave);

    for x in [-0.9f32, -0.4, 0.0, 0.4, 0.9] {
        let p = [x, 0.0, (1.0 - x * x).sqrt()];
        assert_eq!(plain.shade(p), wavy.shade(p));
    }
    assert_ne!(plain.gradient_position([0.2, 0.15, 0.0]), wavy.gradient_position([0.2, 0.15, 0.0]));
}

#[test]
fn test_gradient_extremes_never_overflow() {
    for count in 2..=MAX_GRADIENT_COLORS {
        let colors: Vec<Rgb> = (0..count)
            .map(|i| {
                let v = i as f32 / (count - 1) as f32;
                Rgb::new(v, 1.0 - v, 0.5)
            })
            .collect();
        let style = GradientStyle::default().with_angle(0.0);
        let program = build_gradient_material(&colors, &style).unwrap();

        // t' = 1 exactly at x = 1
        assert_eq!(program.gradient_position([1.0, 0.0, 0.0]), 1.0);
        assert_eq!(segment(1.0, count).0, count - 2);
        let end = program.shade([1.0, 0.0, 0.0]);
        assert!(max_channel_diff(end, colors[count - 1]) < 1e-4);

        // Beyond unit scale the gradient saturates at the end stops
        assert!(max_channel_diff(program.shade([3.0, 0.0, 0.0]), colors[count - 1]) < 1e-4);
        assert_eq!(program.shade([-3.0, 0.0, 0.0]), colors[0]);
    }
}

#[test]
fn test_stop_order_is_preserved() {
    let colors = purple_colors();
    let reversed: Vec<Rgb> = colors.iter().rev().copied().collect();
    let style = GradientStyle::default().with_angle(0.0);

    let forward = build_gradient_material(&colors, &style).unwrap();
    let backward = build_gradient_material(&reversed, &style).unwrap();

    assert_eq!(forward.uniforms().color(0), colors[0]);
    assert_eq!(backward.uniforms().color(0), colors[2]);
    // Reversing the stops mirrors the gradient
    assert_eq!(forward.shade([-1.0, 0.0, 0.0]), colors[0]);
    assert!(max_channel_diff(backward.shade([1.0, 0.0, 0.0]), colors[0]) < 1e-6);
    assert!(max_channel_diff(forward.shade([0.4, 0.0, 0.0]), backward.shade([-0.4, 0.0, 0.0])) < 1e-5);
}
