//! UV sphere geometry

use std::f32::consts::PI;

use glam::Vec3;

use super::camera::Ray;

/// Vertex layout uploaded to the GPU (see `gpu::pipelines::VERTEX_LAYOUT`)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

#[derive(Debug, Clone)]
pub struct SphereMesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

/// Build a UV sphere centered at the origin.
///
/// Produces `(width_segments + 1) * (height_segments + 1)` vertices; the seam
/// column is duplicated and the poles are degenerate rows. Pole rows emit one
/// triangle per quad, so there are `width_segments * (2 * height_segments - 2)`
/// triangles.
pub fn sphere_mesh(radius: f32, width_segments: u32, height_segments: u32) -> SphereMesh {
    let width_segments = width_segments.max(3);
    let height_segments = height_segments.max(2);
    let row_len = width_segments + 1;

    let mut vertices = Vec::with_capacity((row_len * (height_segments + 1)) as usize);
    for iy in 0..=height_segments {
        let v = iy as f32 / height_segments as f32;
        for ix in 0..=width_segments {
            let u = ix as f32 / width_segments as f32;
            let normal = [
                -(u * 2.0 * PI).cos() * (v * PI).sin(),
                (v * PI).cos(),
                (u * 2.0 * PI).sin() * (v * PI).sin(),
            ];
            vertices.push(Vertex {
                position: [normal[0] * radius, normal[1] * radius, normal[2] * radius],
                normal,
            });
        }
    }

    let mut indices = Vec::new();
    for iy in 0..height_segments {
        for ix in 0..width_segments {
            let a = iy * row_len + ix + 1;
            let b = iy * row_len + ix;
            let c = (iy + 1) * row_len + ix;
            let d = (iy + 1) * row_len + ix + 1;

            if iy != 0 {
                indices.extend_from_slice(&[a, b, d]);
            }
            if iy != height_segments - 1 {
                indices.extend_from_slice(&[b, c, d]);
            }
        }
    }

    SphereMesh { vertices, indices }
}

/// Distance along `ray` to the first hit on a sphere, if any
pub fn intersect_sphere(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    const EPSILON: f32 = 1e-5;

    let oc = ray.origin - center;
    let b = oc.dot(ray.direction);
    let c = oc.length_squared() - radius * radius;
    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }

    let root = discriminant.sqrt();
    let near = -b - root;
    let far = -b + root;
    if near > EPSILON {
        Some(near)
    } else if far > EPSILON {
        Some(far)
    } else {
        None
    }
}
