//! GPU gradient viewer using wgpu + winit

use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use super::controls::{ANGLE_STEP, STRENGTH_STEP, StyleCommand, describe, print_controls};
use crate::gpu::{GpuContext, GradientPipeline};
use crate::scene::{SceneConfig, sphere_mesh};

/// Configuration for the GPU viewer
#[derive(Clone)]
pub struct GpuViewerConfig {
    /// Initial window size in logical pixels
    pub window_size: (u32, u32),
    pub title: String,
    pub scene: SceneConfig,
}

impl Default for GpuViewerConfig {
    fn default() -> Self {
        Self {
            window_size: (800, 800),
            title: "Gradient Sphere - GPU Viewer (ESC to exit)".to_string(),
            scene: SceneConfig::default(),
        }
    }
}

/// GPU-accelerated viewer state
struct ViewerState {
    scene: SceneConfig,
    gpu_ctx: GpuContext,
    pipeline: GradientPipeline,
}

impl ViewerState {
    fn new(window: Arc<Window>, scene: SceneConfig) -> Result<Self, String> {
        let program = scene.build_material().map_err(|e| e.to_string())?;
        let gpu_ctx = GpuContext::new(window).map_err(|e| e.to_string())?;

        let sphere = &scene.sphere;
        let mesh = sphere_mesh(sphere.radius, sphere.width_segments, sphere.height_segments);
        let pipeline = GradientPipeline::new(&gpu_ctx, program, &mesh);

        let mut state = Self {
            scene,
            gpu_ctx,
            pipeline,
        };
        state.sync_camera();
        Ok(state)
    }

    fn sync_camera(&mut self) {
        let (width, height) = self.gpu_ctx.size;
        self.scene.camera.resize(width, height);
        self.pipeline
            .update_camera(&self.gpu_ctx, self.scene.camera.view_proj());
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.gpu_ctx.resize((width, height));
        self.sync_camera();
    }

    fn apply(&mut self, command: StyleCommand) {
        let mut style = self.scene.style;
        command.apply(&mut style);

        let scene = SceneConfig {
            style,
            ..self.scene.clone()
        };
        match scene.build_material() {
            Ok(program) => {
                self.pipeline.set_program(&self.gpu_ctx, program);
                self.scene = scene;
                println!("{}", describe(&style));
            }
            Err(e) => log::warn!("Rejected gradient edit: {}", e),
        }
    }

    fn render(&mut self) {
        match self.pipeline.render(&self.gpu_ctx) {
            Ok(()) => {}
            // Surface went stale (e.g. minimized/moved between monitors); reconfigure
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let (width, height) = self.gpu_ctx.size;
                self.resize(width, height);
            }
            Err(e) => log::error!("Render error: {:?}", e),
        }
    }
}

fn key_command(key: KeyCode) -> Option<StyleCommand> {
    match key {
        KeyCode::KeyS => Some(StyleCommand::ToggleSmooth),
        KeyCode::KeyD => Some(StyleCommand::ToggleDistortion),
        KeyCode::BracketLeft => Some(StyleCommand::RotateAngle(-ANGLE_STEP)),
        KeyCode::BracketRight => Some(StyleCommand::RotateAngle(ANGLE_STEP)),
        KeyCode::Equal | KeyCode::NumpadAdd => Some(StyleCommand::AdjustStrength(STRENGTH_STEP)),
        KeyCode::Minus | KeyCode::NumpadSubtract => {
            Some(StyleCommand::AdjustStrength(-STRENGTH_STEP))
        }
        _ => None,
    }
}

/// Application handler for winit event loop
struct GpuViewerApp {
    config: GpuViewerConfig,
    state: Option<ViewerState>,
    error: Option<String>,
}

impl GpuViewerApp {
    fn new(config: GpuViewerConfig) -> Self {
        Self {
            config,
            state: None,
            error: None,
        }
    }
}

impl ApplicationHandler for GpuViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        let (width, height) = self.config.window_size;
        let window_attrs = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(winit::dpi::LogicalSize::new(width as f64, height as f64));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                self.error = Some(format!("Failed to create window: {}", e));
                event_loop.exit();
                return;
            }
        };

        match ViewerState::new(window, self.config.scene.clone()) {
            Ok(state) => {
                log::info!("Starting GPU viewer ({}x{})", state.gpu_ctx.size.0, state.gpu_ctx.size.1);
                print_controls("GPU Gradient Viewer", false);
                println!("{}", describe(&state.scene.style));
                self.state = Some(state);
            }
            Err(e) => {
                log::error!("Failed to create viewer state: {}", e);
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let state = match &mut self.state {
            Some(s) => s,
            None => return,
        };

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                state.resize(size.width, size.height);
            }

            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                if key == KeyCode::Escape {
                    event_loop.exit();
                } else if let Some(command) = key_command(key) {
                    state.apply(command);
                }
            }

            WindowEvent::RedrawRequested => {
                state.render();
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = &self.state {
            // Request continuous redraw for smooth updates
            state.gpu_ctx.request_redraw();
        }
    }
}

/// Run the GPU viewer; GPU resources are released when the event loop returns
pub fn run_gpu_viewer(config: GpuViewerConfig) -> Result<(), String> {
    let event_loop = EventLoop::new().map_err(|e| format!("Failed to create event loop: {}", e))?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = GpuViewerApp::new(config);
    event_loop
        .run_app(&mut app)
        .map_err(|e| format!("Event loop error: {}", e))?;

    match app.error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(key_command(KeyCode::KeyS), Some(StyleCommand::ToggleSmooth));
        assert_eq!(
            key_command(KeyCode::BracketRight),
            Some(StyleCommand::RotateAngle(ANGLE_STEP))
        );
        assert_eq!(
            key_command(KeyCode::NumpadSubtract),
            Some(StyleCommand::AdjustStrength(-STRENGTH_STEP))
        );
        assert_eq!(key_command(KeyCode::KeyQ), None);
    }
}
