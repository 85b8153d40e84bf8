mod color;
mod gpu;
mod gradient;
mod interactive;
mod render;
mod scene;

#[cfg(test)]
mod tests;

use std::path::PathBuf;

use clap::Parser;

// Re-export public API
pub use color::{ColorStop, Rgb};
pub use gradient::{
    GradientError, GradientStyle, GradientVariant, MAX_GRADIENT_COLORS, ShaderProgram,
    build_gradient_material,
};
pub use interactive::{GpuViewerConfig, InteractiveViewer, ViewerConfig, run_gpu_viewer};
pub use render::{Frame, render_side_by_side, save_ppm};
pub use scene::{SceneConfig, ToggleSceneConfig, ToggleSphere};

/// Gradient sphere demo: procedural gradient materials on a sphere
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Open the software (minifb) viewer with both spheres side by side
    #[arg(long)]
    interactive: bool,

    /// Open the wgpu viewer for the gradient sphere
    #[arg(long)]
    gpu: bool,

    /// Time CPU shading of the gradient sphere
    #[arg(long)]
    benchmark: bool,

    /// Render one side-by-side frame to a PPM file
    #[arg(long, value_name = "FILE")]
    ppm: Option<PathBuf>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let result = if args.interactive {
        run_interactive()
    } else if args.gpu {
        run_gpu_viewer(GpuViewerConfig::default())
    } else if args.benchmark {
        run_benchmark()
    } else if let Some(path) = args.ppm {
        export_ppm(&path)
    } else {
        println!("Gradient Sphere");
        println!("Run with --interactive for the software viewer");
        println!("Run with --gpu for the wgpu viewer");
        println!("Run with --benchmark to test shading performance");
        println!("Run with --ppm <FILE> to export a frame");
        Ok(())
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_interactive() -> Result<(), String> {
    let mut viewer = InteractiveViewer::new(ViewerConfig::default())?;
    viewer.run()
}

fn export_ppm(path: &std::path::Path) -> Result<(), String> {
    let scene = SceneConfig::default();
    let program = scene.build_material().map_err(|e| e.to_string())?;
    let toggle = ToggleSphere::new(ToggleSceneConfig::default());

    let frame = render_side_by_side(&toggle, &program, &scene.camera, scene.sphere.radius, 960, 480);
    save_ppm(&frame, path).map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
    log::info!("Wrote {}x{} frame to {}", frame.width, frame.height, path.display());
    Ok(())
}

fn run_benchmark() -> Result<(), String> {
    use std::time::Instant;

    use render::{render_view, render_view_sequential, shade_gradient_sphere};

    println!("=== Gradient Shading Benchmark ===\n");

    let sizes = [(128, 128), (256, 256), (512, 512)];
    let iterations = 10;
    let scene = SceneConfig::default();

    for smooth in [false, true] {
        let style = scene.style.with_smooth(smooth);
        let program = build_gradient_material(&scene.colors, &style).map_err(|e| e.to_string())?;
        println!("Variant: {}", program.variant().name());
        println!("-----------------------");

        for (width, height) in sizes {
            let mut camera = scene.camera;
            camera.resize(width as u32, height as u32);
            let shade = |ray: &scene::Ray| shade_gradient_sphere(&program, scene.sphere.radius, ray);

            let start = Instant::now();
            for _ in 0..iterations {
                let _ = render_view_sequential(&camera, width, height, shade);
            }
            let avg_sequential_ms = start.elapsed().as_secs_f64() * 1000.0 / iterations as f64;

            let start = Instant::now();
            for _ in 0..iterations {
                let _ = render_view(&camera, width, height, shade);
            }
            let avg_parallel_ms = start.elapsed().as_secs_f64() * 1000.0 / iterations as f64;

            println!("  {}x{}", width, height);
            println!("    Sequential:       {:.3} ms/frame", avg_sequential_ms);
            println!("    Parallel (rayon): {:.3} ms/frame", avg_parallel_ms);
            println!("    Speedup: {:.2}x", avg_sequential_ms / avg_parallel_ms);
        }
        println!();
    }

    Ok(())
}
