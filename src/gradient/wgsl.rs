//! WGSL source assembly for gradient materials

use super::{GradientVariant, MAX_GRADIENT_COLORS};

const VERTEX: &str = include_str!("shaders/vertex.wgsl");
const FRAGMENT: &str = include_str!("shaders/gradient.wgsl");
const WAVE_DISTORTION: &str = include_str!("shaders/wave.wgsl");
const NOISE_DISTORTION: &str = include_str!("shaders/noise.wgsl");

/// Entry point of the vertex program
pub const VERTEX_ENTRY: &str = "vs_main";
/// Entry point of the fragment program
pub const FRAGMENT_ENTRY: &str = "fs_main";

pub fn vertex_source() -> String {
    VERTEX.to_string()
}

/// Fragment program for `variant`: capacity constant, the variant's `distort`, then the shared body.
pub fn fragment_source(variant: GradientVariant) -> String {
    let distortion = match variant {
        GradientVariant::Wave => WAVE_DISTORTION,
        GradientVariant::Noise => NOISE_DISTORTION,
    };
    format!("const MAX_COLORS: u32 = {MAX_GRADIENT_COLORS}u;\n\n{distortion}\n{FRAGMENT}")
}
