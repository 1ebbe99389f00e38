//! Mesh generation for 3D primitives
//!
//! Free functions returning flat triangle lists in model space. Everything
//! is flat-shaded; normals are per-face.

use glam::Vec3;
use std::f32::consts::PI;

use super::vertex::Vertex;

fn push_triangle(out: &mut Vec<Vertex>, a: Vec3, b: Vec3, c: Vec3, normal: Vec3, color: [f32; 4]) {
    for p in [a, b, c] {
        out.push(Vertex::new(p.to_array(), normal.to_array(), color));
    }
}

/// Axis-aligned cube centered at the origin
pub fn cube(size: f32, color: [f32; 4]) -> Vec<Vertex> {
    let h = size / 2.0;
    let mut vertices = Vec::with_capacity(36);

    // (normal, four corners counter-clockwise when viewed from outside)
    let faces: [(Vec3, [Vec3; 4]); 6] = [
        (
            Vec3::X,
            [
                Vec3::new(h, -h, -h),
                Vec3::new(h, h, -h),
                Vec3::new(h, h, h),
                Vec3::new(h, -h, h),
            ],
        ),
        (
            Vec3::NEG_X,
            [
                Vec3::new(-h, -h, h),
                Vec3::new(-h, h, h),
                Vec3::new(-h, h, -h),
                Vec3::new(-h, -h, -h),
            ],
        ),
        (
            Vec3::Y,
            [
                Vec3::new(-h, h, -h),
                Vec3::new(-h, h, h),
                Vec3::new(h, h, h),
                Vec3::new(h, h, -h),
            ],
        ),
        (
            Vec3::NEG_Y,
            [
                Vec3::new(-h, -h, h),
                Vec3::new(-h, -h, -h),
                Vec3::new(h, -h, -h),
                Vec3::new(h, -h, h),
            ],
        ),
        (
            Vec3::Z,
            [
                Vec3::new(-h, -h, h),
                Vec3::new(h, -h, h),
                Vec3::new(h, h, h),
                Vec3::new(-h, h, h),
            ],
        ),
        (
            Vec3::NEG_Z,
            [
                Vec3::new(h, -h, -h),
                Vec3::new(-h, -h, -h),
                Vec3::new(-h, h, -h),
                Vec3::new(h, h, -h),
            ],
        ),
    ];

    for (normal, [a, b, c, d]) in faces {
        push_triangle(&mut vertices, a, b, c, normal, color);
        push_triangle(&mut vertices, a, c, d, normal, color);
    }

    vertices
}

/// Regular icosahedron circumscribed by a sphere of `radius`
pub fn icosahedron(radius: f32, color: [f32; 4]) -> Vec<Vertex> {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;

    let corners: [Vec3; 12] = [
        Vec3::new(-1.0, t, 0.0),
        Vec3::new(1.0, t, 0.0),
        Vec3::new(-1.0, -t, 0.0),
        Vec3::new(1.0, -t, 0.0),
        Vec3::new(0.0, -1.0, t),
        Vec3::new(0.0, 1.0, t),
        Vec3::new(0.0, -1.0, -t),
        Vec3::new(0.0, 1.0, -t),
        Vec3::new(t, 0.0, -1.0),
        Vec3::new(t, 0.0, 1.0),
        Vec3::new(-t, 0.0, -1.0),
        Vec3::new(-t, 0.0, 1.0),
    ]
    .map(|v| v.normalize() * radius);

    const FACES: [[usize; 3]; 20] = [
        [0, 11, 5],
        [0, 5, 1],
        [0, 1, 7],
        [0, 7, 10],
        [0, 10, 11],
        [1, 5, 9],
        [5, 11, 4],
        [11, 10, 2],
        [10, 7, 6],
        [7, 1, 8],
        [3, 9, 4],
        [3, 4, 2],
        [3, 2, 6],
        [3, 6, 8],
        [3, 8, 9],
        [4, 9, 5],
        [2, 4, 11],
        [6, 2, 10],
        [8, 6, 7],
        [9, 8, 1],
    ];

    let mut vertices = Vec::with_capacity(60);
    for [a, b, c] in FACES {
        let (a, b, c) = (corners[a], corners[b], corners[c]);
        // Faces of an origin-centered icosahedron point along their centroid
        let normal = (a + b + c).normalize();
        push_triangle(&mut vertices, a, b, c, normal, color);
    }
    vertices
}

/// Horizontal plane centered at the origin, facing up
pub fn plane(width: f32, depth: f32, color: [f32; 4]) -> Vec<Vertex> {
    let (hw, hd) = (width / 2.0, depth / 2.0);
    let mut vertices = Vec::with_capacity(6);
    let a = Vec3::new(-hw, 0.0, -hd);
    let b = Vec3::new(-hw, 0.0, hd);
    let c = Vec3::new(hw, 0.0, hd);
    let d = Vec3::new(hw, 0.0, -hd);
    push_triangle(&mut vertices, a, b, c, Vec3::Y, color);
    push_triangle(&mut vertices, a, c, d, Vec3::Y, color);
    vertices
}

/// Inward-facing UV sphere shell, unlit (zero normals)
///
/// Winding is inverted so the inside is the visible face.
pub fn sky_shell(radius: f32, width_segments: u32, height_segments: u32, color: [f32; 4]) -> Vec<Vertex> {
    let point = |iw: u32, ih: u32| -> Vec3 {
        let u = iw as f32 / width_segments as f32;
        let v = ih as f32 / height_segments as f32;
        let theta = u * 2.0 * PI;
        let phi = v * PI;
        Vec3::new(
            radius * phi.sin() * theta.cos(),
            radius * phi.cos(),
            radius * phi.sin() * theta.sin(),
        )
    };

    let unlit = [0.0; 3];
    let mut vertices = Vec::with_capacity((width_segments * height_segments * 6) as usize);
    for ih in 0..height_segments {
        for iw in 0..width_segments {
            let p00 = point(iw, ih);
            let p10 = point(iw + 1, ih);
            let p01 = point(iw, ih + 1);
            let p11 = point(iw + 1, ih + 1);

            for p in [p00, p01, p10, p10, p01, p11] {
                vertices.push(Vertex::new(p.to_array(), unlit, color));
            }
        }
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_has_six_faces_of_two_triangles() {
        let mesh = cube(1.0, [1.0; 4]);
        assert_eq!(mesh.len(), 36);
        // All corners at half the edge length
        for v in &mesh {
            for c in v.position {
                assert!((c.abs() - 0.5).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn icosahedron_vertices_lie_on_the_sphere() {
        let mesh = icosahedron(0.5, [1.0; 4]);
        assert_eq!(mesh.len(), 60);
        for v in &mesh {
            let r = Vec3::from_array(v.position).length();
            assert!((r - 0.5).abs() < 1e-5);
        }
    }

    #[test]
    fn icosahedron_normals_point_outward() {
        for v in icosahedron(1.0, [1.0; 4]) {
            let p = Vec3::from_array(v.position);
            let n = Vec3::from_array(v.normal);
            assert!(n.dot(p) > 0.0);
        }
    }

    #[test]
    fn sky_shell_is_unlit() {
        let mesh = sky_shell(64.0, 8, 6, [1.0; 4]);
        assert_eq!(mesh.len(), 8 * 6 * 6);
        for v in &mesh {
            assert_eq!(v.normal, [0.0; 3]);
            let r = Vec3::from_array(v.position).length();
            assert!((r - 64.0).abs() < 1e-3);
        }
    }
}
