//! Scalar helpers shared by the CPU evaluator. Each mirrors a WGSL builtin or
//! a function in the generated fragment program, in `f32`.

/// Hermite step between `edge0` and `edge1`, clamped (WGSL `smoothstep`)
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// WGSL `mix` for scalars
#[inline]
pub fn mix(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// WGSL `fract`: `x - floor(x)`
#[inline]
fn fract(x: f32) -> f32 {
    x - x.floor()
}

/// Single-frequency wave along the surface's local Y axis
#[inline]
pub fn wave_distortion(y: f32, strength: f32) -> f32 {
    (y * 10.0).sin() * strength
}

/// Lattice value noise in [-1, 1].
///
/// Corner values are `sin(n + offset)` with `n = i.x + 57 i.y + 131 i.z`,
/// blended trilinearly with the cubic fade `f * f * (3 - 2f)`.
pub fn value_noise(p: [f32; 3]) -> f32 {
    let i = [p[0].floor(), p[1].floor(), p[2].floor()];
    let f = [fract(p[0]), fract(p[1]), fract(p[2])];
    let f = [
        f[0] * f[0] * (3.0 - 2.0 * f[0]),
        f[1] * f[1] * (3.0 - 2.0 * f[1]),
        f[2] * f[2] * (3.0 - 2.0 * f[2]),
    ];
    let n = i[0] + i[1] * 57.0 + i[2] * 131.0;

    let near = mix(
        mix(n.sin(), (n + 1.0).sin(), f[0]),
        mix((n + 57.0).sin(), (n + 58.0).sin(), f[0]),
        f[1],
    );
    let far = mix(
        mix((n + 131.0).sin(), (n + 132.0).sin(), f[0]),
        mix((n + 188.0).sin(), (n + 189.0).sin(), f[0]),
        f[1],
    );
    mix(near, far, f[2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smoothstep_shape() {
        assert_eq!(smoothstep(0.0, 1.0, -0.5), 0.0);
        assert_eq!(smoothstep(0.0, 1.0, 0.0), 0.0);
        assert_eq!(smoothstep(0.0, 1.0, 0.5), 0.5);
        assert_eq!(smoothstep(0.0, 1.0, 1.0), 1.0);
        assert_eq!(smoothstep(0.0, 1.0, 3.0), 1.0);
        // Eases in: slower than linear near the start
        assert!(smoothstep(0.0, 1.0, 0.1) < 0.1);
    }

    #[test]
    fn test_noise_at_lattice_points() {
        // On a lattice point every fade weight is zero, so the value is sin(n)
        assert_eq!(value_noise([0.0, 0.0, 0.0]), 0.0);
        let n: f32 = 2.0 + 3.0 * 57.0 + 1.0 * 131.0;
        assert_eq!(value_noise([2.0, 3.0, 1.0]), n.sin());
    }

    #[test]
    fn test_noise_deterministic_and_bounded() {
        for x in -20..20 {
            for y in -5..5 {
                let p = [x as f32 * 0.37, y as f32 * 1.13, 0.61 * x as f32 - y as f32];
                let a = value_noise(p);
                let b = value_noise(p);
                assert_eq!(a.to_bits(), b.to_bits());
                assert!((-1.0..=1.0).contains(&a), "noise {} out of range at {:?}", a, p);
            }
        }
    }

    #[test]
    fn test_noise_is_continuous_across_cells() {
        let eps = 1e-3;
        let left = value_noise([0.999 - eps, 0.25, 0.5]);
        let right = value_noise([1.0 + eps, 0.25, 0.5]);
        assert!((left - right).abs() < 0.05);
    }

    #[test]
    fn test_wave_zero_strength() {
        for y in [-1.0f32, -0.3, 0.0, 0.42, 1.0] {
            assert_eq!(wave_distortion(y, 0.0), 0.0);
        }
    }
}
