//! Software viewer - both demo spheres side by side in a minifb window

use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

use super::controls::{ANGLE_STEP, STRENGTH_STEP, StyleCommand, describe, print_controls};
use crate::gradient::ShaderProgram;
use crate::render::render_side_by_side;
use crate::scene::{SceneConfig, ToggleSceneConfig, ToggleSphere, pixel_to_ndc};

/// Configuration for the software viewer
#[derive(Clone)]
pub struct ViewerConfig {
    /// Size of each of the two views (width x height in pixels)
    pub view_size: (usize, usize),
    pub title: String,
    pub toggle_scene: ToggleSceneConfig,
    pub gradient_scene: SceneConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            view_size: (480, 480),
            title: "Gradient Sphere - Software Viewer (ESC to exit)".to_string(),
            toggle_scene: ToggleSceneConfig::default(),
            gradient_scene: SceneConfig::default(),
        }
    }
}

/// Interactive viewer rendering both scenes on the CPU
pub struct InteractiveViewer {
    config: ViewerConfig,
    toggle: ToggleSphere,
    program: ShaderProgram,
    window: Window,
    buffer: Vec<u32>,
}

impl InteractiveViewer {
    /// Create a new interactive viewer with the given configuration
    pub fn new(config: ViewerConfig) -> Result<Self, String> {
        let (view_w, view_h) = config.view_size;

        let program = config.gradient_scene.build_material().map_err(|e| e.to_string())?;
        let toggle = ToggleSphere::new(config.toggle_scene.clone());

        let window = Window::new(
            &config.title,
            view_w * 2,
            view_h,
            WindowOptions {
                resize: false,
                ..WindowOptions::default()
            },
        )
        .map_err(|e| e.to_string())?;

        Ok(Self {
            config,
            toggle,
            program,
            window,
            buffer: Vec::with_capacity(view_w * 2 * view_h),
        })
    }

    /// Run the interactive viewer loop
    pub fn run(&mut self) -> Result<(), String> {
        let (view_w, view_h) = self.config.view_size;

        // Limit to ~60fps
        self.window.set_target_fps(60);

        log::info!("Starting software viewer ({}x{} per view)", view_w, view_h);
        print_controls("Software Gradient Viewer", true);
        println!("{}", describe(&self.config.gradient_scene.style));

        let mut dirty = true;
        let mut was_down = false;

        while self.window.is_open() && !self.window.is_key_down(Key::Escape) {
            if let Some(command) = self.pressed_command() {
                self.apply(command);
                dirty = true;
            }

            // Act on the press edge only
            let down = self.window.get_mouse_down(MouseButton::Left);
            if down && !was_down {
                if let Some((mx, my)) = self.window.get_mouse_pos(MouseMode::Discard) {
                    if (mx as usize) < view_w {
                        let (ndc_x, ndc_y) = pixel_to_ndc(mx, my, view_w as f32, view_h as f32);
                        let hit = self.toggle.click(ndc_x, ndc_y);
                        log::debug!("Click at ({:.2}, {:.2}) hit={}", ndc_x, ndc_y, hit);
                        dirty = true;
                    }
                }
            }
            was_down = down;

            if dirty {
                let frame = render_side_by_side(
                    &self.toggle,
                    &self.program,
                    &self.config.gradient_scene.camera,
                    self.config.gradient_scene.sphere.radius,
                    view_w * 2,
                    view_h,
                );
                frame.to_u32_buffer(&mut self.buffer);
                dirty = false;
            }

            self.window
                .update_with_buffer(&self.buffer, view_w * 2, view_h)
                .map_err(|e| e.to_string())?;
        }

        Ok(())
    }

    fn pressed_command(&self) -> Option<StyleCommand> {
        let pressed = |key| self.window.is_key_pressed(key, KeyRepeat::No);
        let repeated = |key| self.window.is_key_pressed(key, KeyRepeat::Yes);

        if pressed(Key::S) {
            Some(StyleCommand::ToggleSmooth)
        } else if pressed(Key::D) {
            Some(StyleCommand::ToggleDistortion)
        } else if repeated(Key::LeftBracket) {
            Some(StyleCommand::RotateAngle(-ANGLE_STEP))
        } else if repeated(Key::RightBracket) {
            Some(StyleCommand::RotateAngle(ANGLE_STEP))
        } else if repeated(Key::Equal) || repeated(Key::NumPadPlus) {
            Some(StyleCommand::AdjustStrength(STRENGTH_STEP))
        } else if repeated(Key::Minus) || repeated(Key::NumPadMinus) {
            Some(StyleCommand::AdjustStrength(-STRENGTH_STEP))
        } else {
            None
        }
    }

    /// Apply a style edit and rebuild the material; a rejected build keeps the old one
    fn apply(&mut self, command: StyleCommand) {
        let mut style = self.config.gradient_scene.style;
        command.apply(&mut style);

        let scene = SceneConfig {
            style,
            ..self.config.gradient_scene.clone()
        };
        match scene.build_material() {
            Ok(program) => {
                self.program = program;
                self.config.gradient_scene = scene;
                println!("{}", describe(&style));
            }
            Err(e) => log::warn!("Rejected gradient edit: {}", e),
        }
    }
}
