//! Interactive viewers for the demo scenes

pub mod controls;
pub mod gpu_viewer;
mod viewer;

pub use gpu_viewer::{GpuViewerConfig, run_gpu_viewer};
pub use viewer::{InteractiveViewer, ViewerConfig};
