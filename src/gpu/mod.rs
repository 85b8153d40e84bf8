//! GPU rendering module using wgpu
//!
//! Consumes gradient `ShaderProgram`s: compiles their WGSL stages, binds the
//! uniform table and draws the sphere mesh.

pub mod context;
pub mod pipelines;

pub use context::GpuContext;
pub use pipelines::GradientPipeline;
