//! Software rendering of the demo scenes and PPM export

use glam::Vec3;
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::color::{Rgb, to_byte};
use crate::gradient::ShaderProgram;
use crate::scene::{PerspectiveCamera, Ray, ToggleSphere, intersect_sphere, pixel_to_ndc};

/// Color behind the spheres
pub const BACKGROUND: Rgb = Rgb::black();

/// Row-major RGB image
#[derive(Debug, Clone)]
pub struct Frame {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<Rgb>,
}

impl Frame {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![BACKGROUND; width * height],
        }
    }

    /// Pixel at (x, y), or `None` outside the frame
    pub fn get(&self, x: usize, y: usize) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y * self.width + x).copied()
    }

    /// Copy `view` (of the given width) into this frame starting at column `x_offset`
    fn blit(&mut self, view: &[Rgb], view_width: usize, x_offset: usize) {
        for (y, row) in view.chunks_exact(view_width).enumerate() {
            let start = y * self.width + x_offset;
            self.pixels[start..start + view_width].copy_from_slice(row);
        }
    }

    /// Pack into 0x00RRGGBB words for minifb
    pub fn to_u32_buffer(&self, buffer: &mut Vec<u32>) {
        buffer.clear();
        buffer.extend(self.pixels.iter().map(|c| c.to_u32()));
    }
}

/// Camera ray through the center of pixel (x, y)
#[inline]
fn pixel_ray(camera: &PerspectiveCamera, x: usize, y: usize, width: usize, height: usize) -> Ray {
    let (ndc_x, ndc_y) = pixel_to_ndc(x as f32 + 0.5, y as f32 + 0.5, width as f32, height as f32);
    camera.ray_from_ndc(ndc_x, ndc_y)
}

/// Shade every pixel of a `width x height` view, rows in parallel
pub fn render_view<F>(camera: &PerspectiveCamera, width: usize, height: usize, shade: F) -> Vec<Rgb>
where
    F: Fn(&Ray) -> Option<Rgb> + Sync,
{
    let mut pixels = vec![BACKGROUND; width * height];
    pixels
        .par_chunks_mut(width.max(1))
        .enumerate()
        .for_each(|(y, row)| {
            for (x, pixel) in row.iter_mut().enumerate() {
                let ray = pixel_ray(camera, x, y, width, height);
                *pixel = shade(&ray).unwrap_or(BACKGROUND);
            }
        });
    pixels
}

/// Single-threaded `render_view` (benchmark baseline)
pub fn render_view_sequential<F>(camera: &PerspectiveCamera, width: usize, height: usize, shade: F) -> Vec<Rgb>
where
    F: Fn(&Ray) -> Option<Rgb>,
{
    let mut pixels = vec![BACKGROUND; width * height];
    for y in 0..height {
        for x in 0..width {
            let ray = pixel_ray(camera, x, y, width, height);
            pixels[y * width + x] = shade(&ray).unwrap_or(BACKGROUND);
        }
    }
    pixels
}

/// Gradient color where `ray` meets a sphere of `radius` at the origin
pub fn shade_gradient_sphere(program: &ShaderProgram, radius: f32, ray: &Ray) -> Option<Rgb> {
    let t = intersect_sphere(ray, Vec3::ZERO, radius)?;
    Some(program.shade(ray.at(t).to_array()))
}

/// Both demo views side by side: toggle sphere on the left, gradient sphere on the right
pub fn render_side_by_side(
    toggle: &ToggleSphere,
    program: &ShaderProgram,
    gradient_camera: &PerspectiveCamera,
    gradient_radius: f32,
    width: usize,
    height: usize,
) -> Frame {
    let left_w = width / 2;
    let right_w = width - left_w;
    let mut frame = Frame::new(width, height);

    let mut left_camera = toggle.config.camera;
    left_camera.resize(left_w as u32, height as u32);
    let left = render_view(&left_camera, left_w, height, |ray| toggle.shade_ray(ray));

    let mut right_camera = *gradient_camera;
    right_camera.resize(right_w as u32, height as u32);
    let right = render_view(&right_camera, right_w, height, |ray| {
        shade_gradient_sphere(program, gradient_radius, ray)
    });

    if left_w > 0 {
        frame.blit(&left, left_w, 0);
    }
    if right_w > 0 {
        frame.blit(&right, right_w, left_w);
    }
    frame
}

/// Save a frame as an ASCII PPM (P3) file
pub fn save_ppm(frame: &Frame, path: &Path) -> io::Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    writeln!(file, "P3")?;
    writeln!(file, "{} {}", frame.width, frame.height)?;
    writeln!(file, "255")?;

    for row in frame.pixels.chunks(frame.width.max(1)) {
        for pixel in row {
            write!(file, "{} {} {} ", to_byte(pixel.r), to_byte(pixel.g), to_byte(pixel.b))?;
        }
        writeln!(file)?;
    }

    file.flush()
}
