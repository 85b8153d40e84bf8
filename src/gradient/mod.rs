//! Procedural gradient materials
//!
//! `build_gradient_material` turns an ordered list of color stops and a
//! `GradientStyle` into a `ShaderProgram`: WGSL vertex/fragment sources plus the
//! uniform table the fragment stage reads. The same math is available on the
//! CPU through `ShaderProgram::shade` for software previews and tests.

pub mod noise;
pub mod uniforms;
pub mod wgsl;

pub use uniforms::GradientUniforms;

use crate::color::{ColorStop, Rgb};
use noise::{smoothstep, value_noise, wave_distortion};

/// Capacity of the fragment stage's `colors` uniform array
pub const MAX_GRADIENT_COLORS: usize = 10;

/// Fewest stops that still describe a gradient
pub const MIN_GRADIENT_COLORS: usize = 2;

/// Gradient angle (degrees) used when a style leaves it unset
pub const DEFAULT_ANGLE: f32 = -45.0;

/// Scale applied to surface positions before distortion sampling
pub const DISTORTION_FREQUENCY: f32 = 10.0;

/// Rejected gradient inputs. Every variant is an invalid-input condition.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GradientError {
    #[error("gradient requires at least 2 colors, got {count}")]
    TooFewColors { count: usize },

    #[error("gradient supports at most {max} colors, got {count}")]
    TooManyColors { count: usize, max: usize },

    #[error("color stop {index} has channel value {value} outside [0, 1]")]
    ChannelOutOfRange { index: usize, value: f32 },
}

impl GradientError {
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            GradientError::TooFewColors { .. }
                | GradientError::TooManyColors { .. }
                | GradientError::ChannelOutOfRange { .. }
        )
    }
}

/// Which fragment program a style selects.
///
/// Both blend adjacent stops with smoothstep; they differ only in how the
/// scalar gradient position is perturbed before the color lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientVariant {
    /// `sin(y * 10) * strength`: a single-frequency wavy boundary
    Wave,
    /// 3D value noise at `position * 10`: an organic, non-periodic boundary
    Noise,
}

impl GradientVariant {
    /// Perturb the raw gradient position `t` for a surface point.
    pub fn distort(self, position: [f32; 3], t: f32, strength: f32) -> f32 {
        match self {
            GradientVariant::Wave => t + wave_distortion(position[1], strength),
            GradientVariant::Noise => {
                if strength > 0.0 {
                    let p = [
                        position[0] * DISTORTION_FREQUENCY,
                        position[1] * DISTORTION_FREQUENCY,
                        position[2] * DISTORTION_FREQUENCY,
                    ];
                    t + value_noise(p) * strength
                } else {
                    t
                }
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            GradientVariant::Wave => "wave",
            GradientVariant::Noise => "noise",
        }
    }
}

/// Style options for a gradient material
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GradientStyle {
    /// Direction in degrees within the surface's local XY plane (`None` = -45)
    pub angle: Option<f32>,
    /// `true` selects the noise-distorted program, `false` the wave program
    pub smooth: bool,
    /// Enables distortion; when off the effective strength is zero
    pub distortion: bool,
    pub distortion_strength: f32,
}

impl GradientStyle {
    pub fn with_angle(mut self, degrees: f32) -> Self {
        self.angle = Some(degrees);
        self
    }

    pub fn with_smooth(mut self, smooth: bool) -> Self {
        self.smooth = smooth;
        self
    }

    pub fn with_distortion(mut self, strength: f32) -> Self {
        self.distortion = true;
        self.distortion_strength = strength;
        self
    }

    pub fn angle_degrees(&self) -> f32 {
        self.angle.unwrap_or(DEFAULT_ANGLE)
    }

    pub fn variant(&self) -> GradientVariant {
        if self.smooth {
            GradientVariant::Noise
        } else {
            GradientVariant::Wave
        }
    }

    /// Strength the shader actually receives
    pub fn effective_strength(&self) -> f32 {
        if self.distortion {
            self.distortion_strength
        } else {
            0.0
        }
    }
}

/// Compiled-ready description of a gradient material.
///
/// Immutable once built. The renderer that consumes it owns any GPU
/// resources created from the sources and uniforms.
#[derive(Debug, Clone, PartialEq)]
pub struct ShaderProgram {
    variant: GradientVariant,
    vertex_source: String,
    fragment_source: String,
    uniforms: GradientUniforms,
}

impl ShaderProgram {
    pub fn variant(&self) -> GradientVariant {
        self.variant
    }

    pub fn vertex_source(&self) -> &str {
        &self.vertex_source
    }

    pub fn fragment_source(&self) -> &str {
        &self.fragment_source
    }

    pub fn uniforms(&self) -> &GradientUniforms {
        &self.uniforms
    }

    /// Normalized gradient position `t'` for a surface point (nominally 0..1).
    pub fn gradient_position(&self, position: [f32; 3]) -> f32 {
        let rad = self.uniforms.angle.to_radians();
        let t = position[0] * rad.cos() + position[1] * rad.sin();
        let t = self
            .variant
            .distort(position, t, self.uniforms.distortion_strength);
        (t + 1.0) * 0.5
    }

    /// Evaluate the fragment program on the CPU for a point in the surface's local space.
    pub fn shade(&self, position: [f32; 3]) -> Rgb {
        let t = self.gradient_position(position);
        let (index, local_t) = segment(t, self.uniforms.color_count as usize);
        let from = self.uniforms.color(index);
        let to = self.uniforms.color(index + 1);
        from.mix(to, smoothstep(0.0, 1.0, local_t))
    }
}

/// Locate `t` among `color_count - 1` equal segments.
///
/// Returns the lower stop index, clamped to `[0, color_count - 2]`, and the
/// position within that segment. Counts below 2 are treated as 2, as the
/// fragment program does.
pub(crate) fn segment(t: f32, color_count: usize) -> (usize, f32) {
    let count = color_count.max(MIN_GRADIENT_COLORS);
    let step_size = 1.0 / (count - 1) as f32;
    let max_index = (count - 2) as f32;
    let index = (t / step_size).floor().clamp(0.0, max_index);
    let local_t = (t - index * step_size) / step_size;
    (index as usize, local_t)
}

/// Build a gradient material from ordered color stops.
///
/// Stops are interpolated in the order given. Fails when fewer than
/// `MIN_GRADIENT_COLORS` or more than `MAX_GRADIENT_COLORS` stops are supplied,
/// or when a channel is outside [0, 1].
pub fn build_gradient_material(
    colors: &[ColorStop],
    style: &GradientStyle,
) -> Result<ShaderProgram, GradientError> {
    let count = colors.len();
    if count < MIN_GRADIENT_COLORS {
        return Err(GradientError::TooFewColors { count });
    }
    if count > MAX_GRADIENT_COLORS {
        return Err(GradientError::TooManyColors {
            count,
            max: MAX_GRADIENT_COLORS,
        });
    }
    for (index, color) in colors.iter().enumerate() {
        for value in color.to_array() {
            if !(0.0..=1.0).contains(&value) {
                return Err(GradientError::ChannelOutOfRange { index, value });
            }
        }
    }

    let variant = style.variant();
    let uniforms = GradientUniforms::new(colors, style.angle_degrees(), style.effective_strength());

    log::debug!(
        "Built {} gradient: {} colors, angle {:.1}, distortion {:.3}",
        variant.name(),
        uniforms.color_count,
        uniforms.angle,
        uniforms.distortion_strength
    );

    Ok(ShaderProgram {
        variant,
        vertex_source: wgsl::vertex_source(),
        fragment_source: wgsl::fragment_source(variant),
        uniforms,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_colors() -> Vec<Rgb> {
        vec![
            Rgb::from_hex(0x4d2695),
            Rgb::from_hex(0xb699e9),
            Rgb::from_hex(0x925df2),
        ]
    }

    #[test]
    fn test_scenario_noise_program() {
        let colors = demo_colors();
        let style = GradientStyle::default()
            .with_angle(0.0)
            .with_smooth(true)
            .with_distortion(0.2);

        let program = build_gradient_material(&colors, &style).unwrap();
        let uniforms = program.uniforms();

        assert_eq!(uniforms.color_count, 3);
        assert_eq!(uniforms.angle, 0.0);
        assert_eq!(uniforms.distortion_strength, 0.2);

        let expected: Vec<f32> = colors.iter().flat_map(|c| c.to_array()).collect();
        assert_eq!(uniforms.colors.len(), 9);
        assert_eq!(uniforms.colors, expected);

        // smooth = true selects the noise-distorted program
        assert_eq!(program.variant(), GradientVariant::Noise);
        assert!(program.fragment_source().contains("fn value_noise"));
    }

    #[test]
    fn test_default_style_selects_wave() {
        let program = build_gradient_material(&demo_colors(), &GradientStyle::default()).unwrap();
        assert_eq!(program.variant(), GradientVariant::Wave);
        assert_eq!(program.uniforms().angle, DEFAULT_ANGLE);
        assert_eq!(program.uniforms().distortion_strength, 0.0);
        assert!(!program.fragment_source().contains("fn value_noise"));
    }

    #[test]
    fn test_color_count_bounds() {
        let style = GradientStyle::default();

        let err = build_gradient_material(&[], &style).unwrap_err();
        assert_eq!(err, GradientError::TooFewColors { count: 0 });

        let err = build_gradient_material(&[Rgb::black()], &style).unwrap_err();
        assert_eq!(err, GradientError::TooFewColors { count: 1 });
        assert!(err.is_invalid_input());

        let eleven = vec![Rgb::new(0.5, 0.5, 0.5); 11];
        let err = build_gradient_material(&eleven, &style).unwrap_err();
        assert_eq!(err, GradientError::TooManyColors { count: 11, max: 10 });

        let ten = vec![Rgb::new(0.5, 0.5, 0.5); 10];
        assert!(build_gradient_material(&ten, &style).is_ok());
    }

    #[test]
    fn test_channel_out_of_range() {
        let colors = [Rgb::new(0.0, 0.0, 0.0), Rgb::new(0.2, 1.5, 0.0)];
        let err = build_gradient_material(&colors, &GradientStyle::default()).unwrap_err();
        assert_eq!(err, GradientError::ChannelOutOfRange { index: 1, value: 1.5 });

        let colors = [Rgb::new(f32::NAN, 0.0, 0.0), Rgb::black()];
        let err = build_gradient_material(&colors, &GradientStyle::default()).unwrap_err();
        assert!(matches!(err, GradientError::ChannelOutOfRange { index: 0, .. }));
    }

    #[test]
    fn test_disabled_distortion_matches_zero_strength() {
        for smooth in [false, true] {
            let disabled = GradientStyle {
                angle: Some(30.0),
                smooth,
                distortion: false,
                distortion_strength: 0.7,
            };
            let zero = GradientStyle {
                distortion: true,
                distortion_strength: 0.0,
                ..disabled
            };
            let a = build_gradient_material(&demo_colors(), &disabled).unwrap();
            let b = build_gradient_material(&demo_colors(), &zero).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_segment_two_colors() {
        // With two stops every t lands in segment 0 and local_t follows t
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            let (index, local_t) = segment(t, 2);
            assert_eq!(index, 0);
            assert!((local_t - t).abs() < 1e-6);
        }
    }

    #[test]
    fn test_segment_clamps_at_end() {
        for count in 2..=MAX_GRADIENT_COLORS {
            let (index, local_t) = segment(1.0, count);
            assert_eq!(index, count - 2, "count {}", count);
            assert!((local_t - 1.0).abs() < 1e-4);
        }
        // Points behind the gradient start clamp to the first segment
        assert_eq!(segment(-0.3, 4).0, 0);
    }

    #[test]
    fn test_segment_degenerate_counts() {
        for count in [0, 1] {
            assert_eq!(segment(0.25, count), segment(0.25, 2));
            assert_eq!(segment(1.0, count).0, 0);
        }
    }

    #[test]
    fn test_shade_hits_end_stops() {
        let colors = demo_colors();
        let style = GradientStyle::default().with_angle(0.0);
        let program = build_gradient_material(&colors, &style).unwrap();

        // angle 0: t' = (x + 1) / 2, so x = -1 and x = 1 are the gradient ends
        assert_eq!(program.shade([-1.0, 0.0, 0.0]), colors[0]);
        assert_eq!(program.shade([0.0, 0.0, 0.0]), colors[1]);

        let end = program.shade([1.0, 0.0, 0.0]);
        for (got, want) in end.to_array().iter().zip(colors[2].to_array()) {
            assert!((got - want).abs() < 1e-6);
        }
    }
}
