//! Uniform table for gradient materials

use super::MAX_GRADIENT_COLORS;
use crate::color::{ColorStop, Rgb};

/// Uniform values read by the gradient fragment program
#[derive(Debug, Clone, PartialEq)]
pub struct GradientUniforms {
    /// Flattened RGB triples, in stop order
    pub colors: Vec<f32>,
    pub color_count: u32,
    /// Gradient direction in degrees
    pub angle: f32,
    /// Zero whenever distortion is disabled
    pub distortion_strength: f32,
}

impl GradientUniforms {
    pub(crate) fn new(colors: &[ColorStop], angle: f32, distortion_strength: f32) -> Self {
        Self {
            colors: colors.iter().flat_map(|c| c.to_array()).collect(),
            color_count: colors.len() as u32,
            angle,
            distortion_strength,
        }
    }

    /// Stop `index` as a color
    pub fn color(&self, index: usize) -> Rgb {
        let base = index * 3;
        Rgb::new(self.colors[base], self.colors[base + 1], self.colors[base + 2])
    }

    /// Uniform-buffer layout of this table
    pub fn to_gpu(&self) -> GpuGradientUniforms {
        let mut colors = [[0.0f32; 4]; MAX_GRADIENT_COLORS];
        for (slot, rgb) in colors.iter_mut().zip(self.colors.chunks_exact(3)) {
            *slot = [rgb[0], rgb[1], rgb[2], 1.0];
        }
        GpuGradientUniforms {
            colors,
            color_count: self.color_count,
            angle: self.angle,
            distortion_strength: self.distortion_strength,
            _padding: 0.0,
        }
    }
}

/// Uniform data sent to the gradient fragment shader
///
/// Matches `GradientUniforms` in `shaders/gradient.wgsl`: array elements are
/// padded to vec4 for uniform address space alignment.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuGradientUniforms {
    pub colors: [[f32; 4]; MAX_GRADIENT_COLORS],
    pub color_count: u32,
    pub angle: f32,
    pub distortion_strength: f32,
    pub _padding: f32,
}
