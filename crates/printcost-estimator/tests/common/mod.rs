#![allow(dead_code)]

use printcost_core::{Mesh, Point3D, Triangle};

/// Closed, outward-wound cube with its minimum corner at the origin
pub fn cube(edge: f64) -> Mesh {
    let s = edge;
    let p = |x: f64, y: f64, z: f64| Point3D::new(x, y, z);
    let t = Triangle::new;

    Mesh::new(vec![
        // bottom (-z)
        t(p(0.0, 0.0, 0.0), p(0.0, s, 0.0), p(s, s, 0.0)),
        t(p(0.0, 0.0, 0.0), p(s, s, 0.0), p(s, 0.0, 0.0)),
        // top (+z)
        t(p(0.0, 0.0, s), p(s, 0.0, s), p(s, s, s)),
        t(p(0.0, 0.0, s), p(s, s, s), p(0.0, s, s)),
        // front (-y)
        t(p(0.0, 0.0, 0.0), p(s, 0.0, 0.0), p(s, 0.0, s)),
        t(p(0.0, 0.0, 0.0), p(s, 0.0, s), p(0.0, 0.0, s)),
        // back (+y)
        t(p(0.0, s, 0.0), p(0.0, s, s), p(s, s, s)),
        t(p(0.0, s, 0.0), p(s, s, s), p(s, s, 0.0)),
        // left (-x)
        t(p(0.0, 0.0, 0.0), p(0.0, 0.0, s), p(0.0, s, s)),
        t(p(0.0, 0.0, 0.0), p(0.0, s, s), p(0.0, s, 0.0)),
        // right (+x)
        t(p(s, 0.0, 0.0), p(s, s, 0.0), p(s, s, s)),
        t(p(s, 0.0, 0.0), p(s, s, s), p(s, 0.0, s)),
    ])
}

/// Closed tetrahedron with consistent winding
pub fn tetrahedron(a: Point3D, b: Point3D, c: Point3D, d: Point3D) -> Mesh {
    Mesh::new(vec![
        Triangle::new(a, b, c),
        Triangle::new(a, c, d),
        Triangle::new(a, d, b),
        Triangle::new(b, d, c),
    ])
}

/// Encode a mesh as binary STL
pub fn binary_stl(mesh: &Mesh) -> Vec<u8> {
    let mut bytes = vec![0u8; 80];
    bytes.extend_from_slice(&(mesh.triangle_count() as u32).to_le_bytes());

    for triangle in mesh.triangles() {
        for _ in 0..3 {
            bytes.extend_from_slice(&0f32.to_le_bytes());
        }
        for vertex in &triangle.vertices {
            for coord in [vertex.x, vertex.y, vertex.z] {
                bytes.extend_from_slice(&(coord as f32).to_le_bytes());
            }
        }
        bytes.extend_from_slice(&0u16.to_le_bytes());
    }

    bytes
}

pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {} to be within {} of {}",
        actual,
        tolerance,
        expected
    );
}
