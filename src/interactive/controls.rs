//! Keyboard-driven edits to the gradient style, shared by both viewers

use crate::gradient::GradientStyle;

/// Angle change per key press (degrees)
pub const ANGLE_STEP: f32 = 15.0;
/// Distortion strength change per key press
pub const STRENGTH_STEP: f32 = 0.05;
pub const MAX_STRENGTH: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StyleCommand {
    ToggleSmooth,
    ToggleDistortion,
    RotateAngle(f32),
    AdjustStrength(f32),
}

impl StyleCommand {
    /// Apply to `style`, keeping the angle in [-180, 180) and strength in [0, MAX_STRENGTH]
    pub fn apply(self, style: &mut GradientStyle) {
        match self {
            StyleCommand::ToggleSmooth => style.smooth = !style.smooth,
            StyleCommand::ToggleDistortion => style.distortion = !style.distortion,
            StyleCommand::RotateAngle(delta) => {
                let angle = style.angle_degrees() + delta;
                style.angle = Some((angle + 180.0).rem_euclid(360.0) - 180.0);
            }
            StyleCommand::AdjustStrength(delta) => {
                style.distortion_strength =
                    (style.distortion_strength + delta).clamp(0.0, MAX_STRENGTH);
            }
        }
    }
}

/// One-line status for console feedback
pub fn describe(style: &GradientStyle) -> String {
    format!(
        "Gradient: {} | angle {:.0} | distortion {} ({:.2})",
        style.variant().name(),
        style.angle_degrees(),
        if style.distortion { "ON" } else { "OFF" },
        style.distortion_strength
    )
}

pub fn print_controls(title: &str, click_toggle: bool) {
    println!("=== {} ===", title);
    println!("Controls:");
    if click_toggle {
        println!("  Left Click - Toggle left sphere color (click outside resets)");
    }
    println!("  S          - Toggle smooth (noise) / wave gradient");
    println!("  D          - Toggle distortion ON/OFF");
    println!("  [ / ]      - Rotate gradient angle");
    println!("  +/-        - Adjust distortion strength");
    println!("  ESC        - Exit");
    println!();
}
