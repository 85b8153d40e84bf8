//! Demo scenes: a click-to-toggle lit sphere and a gradient-material sphere
//!
//! Both share the same camera setup and unit sphere at the origin.

pub mod camera;
pub mod mesh;

pub use camera::{PerspectiveCamera, Ray, pixel_to_ndc};
pub use mesh::{SphereMesh, Vertex, intersect_sphere, sphere_mesh};

use glam::Vec3;

use crate::color::{ColorStop, Rgb};
use crate::gradient::{GradientError, GradientStyle, ShaderProgram, build_gradient_material};

/// Uniform light applied equally to every surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientLight {
    pub color: Rgb,
    pub intensity: f32,
}

/// Light arriving from `position` towards the origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub color: Rgb,
    pub intensity: f32,
    pub position: Vec3,
}

/// Diffuse shading: `base * (ambient + max(n·l, 0) * directional)`, clamped to [0, 1]
pub fn lambert(base: Rgb, normal: Vec3, ambient: &AmbientLight, light: &DirectionalLight) -> Rgb {
    let n_dot_l = normal
        .normalize_or_zero()
        .dot(light.position.normalize_or_zero())
        .max(0.0);
    let ambient_term = ambient.color.scale(ambient.intensity);
    let diffuse_term = light.color.scale(light.intensity * n_dot_l);
    Rgb::new(
        base.r * (ambient_term.r + diffuse_term.r),
        base.g * (ambient_term.g + diffuse_term.g),
        base.b * (ambient_term.b + diffuse_term.b),
    )
    .clamped()
}

/// Sphere placement shared by both scenes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereConfig {
    pub radius: f32,
    pub width_segments: u32,
    pub height_segments: u32,
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            radius: 1.0,
            width_segments: 32,
            height_segments: 32,
        }
    }
}

/// Gradient-material sphere scene
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub camera: PerspectiveCamera,
    pub sphere: SphereConfig,
    pub colors: Vec<ColorStop>,
    pub style: GradientStyle,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            camera: PerspectiveCamera::default(),
            sphere: SphereConfig::default(),
            colors: vec![
                Rgb::from_hex(0x4d2695),
                Rgb::from_hex(0xb699e9),
                Rgb::from_hex(0x925df2),
            ],
            style: GradientStyle::default()
                .with_angle(0.0)
                .with_smooth(true)
                .with_distortion(0.2),
        }
    }
}

impl SceneConfig {
    pub fn build_material(&self) -> Result<ShaderProgram, GradientError> {
        build_gradient_material(&self.colors, &self.style)
    }
}

/// Click-to-toggle sphere scene
#[derive(Debug, Clone, PartialEq)]
pub struct ToggleSceneConfig {
    pub camera: PerspectiveCamera,
    pub sphere: SphereConfig,
    pub idle_color: Rgb,
    pub active_color: Rgb,
    pub ambient: AmbientLight,
    pub light: DirectionalLight,
}

impl Default for ToggleSceneConfig {
    fn default() -> Self {
        Self {
            camera: PerspectiveCamera::default(),
            sphere: SphereConfig::default(),
            idle_color: Rgb::from_hex(0xffa500),   // orange
            active_color: Rgb::from_hex(0x008000), // green
            ambient: AmbientLight {
                color: Rgb::new(1.0, 1.0, 1.0),
                intensity: 0.5,
            },
            light: DirectionalLight {
                color: Rgb::new(1.0, 1.0, 1.0),
                intensity: 1.0,
                position: Vec3::new(10.0, 10.0, 5.0),
            },
        }
    }
}

/// Sphere whose material color flips when clicked
#[derive(Debug, Clone)]
pub struct ToggleSphere {
    pub config: ToggleSceneConfig,
    clicked: bool,
}

impl ToggleSphere {
    pub fn new(config: ToggleSceneConfig) -> Self {
        Self {
            config,
            clicked: false,
        }
    }

    pub fn is_clicked(&self) -> bool {
        self.clicked
    }

    pub fn color(&self) -> Rgb {
        if self.clicked {
            self.config.active_color
        } else {
            self.config.idle_color
        }
    }

    /// Handle a click at `ndc`. A hit flips the state; a miss resets it.
    /// Returns whether the sphere was hit.
    pub fn click(&mut self, ndc_x: f32, ndc_y: f32) -> bool {
        let ray = self.config.camera.ray_from_ndc(ndc_x, ndc_y);
        let hit = intersect_sphere(&ray, Vec3::ZERO, self.config.sphere.radius).is_some();
        self.clicked = hit && !self.clicked;
        hit
    }

    /// Lit color where `ray` meets the sphere
    pub fn shade_ray(&self, ray: &Ray) -> Option<Rgb> {
        let t = intersect_sphere(ray, Vec3::ZERO, self.config.sphere.radius)?;
        let normal = ray.at(t);
        Some(lambert(self.color(), normal, &self.config.ambient, &self.config.light))
    }
}
