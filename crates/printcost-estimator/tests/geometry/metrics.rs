use crate::common::{assert_close, cube, tetrahedron};
use printcost_core::{Mesh, Point3D, Triangle, Vector3D};
use printcost_estimator::{signed_volume, surface_area, volume, MeshMetrics};

#[test]
fn test_cube_ground_truth() {
    let mesh = cube(10.0);
    assert_eq!(mesh.triangle_count(), 12);

    let v = volume(&mesh);
    let a = surface_area(&mesh);
    assert!(((v - 1000.0) / 1000.0).abs() < 1e-6);
    assert!(((a - 600.0) / 600.0).abs() < 1e-6);
}

#[test]
fn test_cube_metrics_report() {
    let metrics = MeshMetrics::analyze(&cube(10.0)).unwrap();
    assert!(!metrics.inside_out);
    assert_close(metrics.volume_cm3(), 1.0, 1e-12);
    assert_eq!(metrics.dimensions(), Some(Vector3D::new(10.0, 10.0, 10.0)));
}

#[test]
fn test_origin_inside_or_outside() {
    let mesh = cube(10.0);
    let inside = mesh.translated(&Vector3D::new(-5.0, -5.0, -5.0));
    let outside = mesh.translated(&Vector3D::new(250.0, -40.0, 13.0));

    assert_close(volume(&inside), 1000.0, 1e-9);
    assert_close(volume(&outside), 1000.0, 1e-6);
}

#[test]
fn test_inward_winding_keeps_volume_positive() {
    let mesh = cube(10.0).flipped();
    assert!(signed_volume(&mesh) < 0.0);
    assert_close(volume(&mesh), 1000.0, 1e-9);
    assert_close(surface_area(&mesh), 600.0, 1e-9);
    assert!(MeshMetrics::compute(&mesh).inside_out);
}

#[test]
fn test_degenerate_faces_are_harmless() {
    let mut triangles = cube(10.0).triangles().to_vec();
    let p = Point3D::new(3.0, 3.0, 3.0);
    triangles.push(Triangle::new(p, p, p));
    let mesh = Mesh::new(triangles);

    assert_close(volume(&mesh), 1000.0, 1e-9);
    assert_close(surface_area(&mesh), 600.0, 1e-9);
}

#[test]
fn test_tetrahedron_volume() {
    let mesh = tetrahedron(
        Point3D::new(0.0, 0.0, 0.0),
        Point3D::new(6.0, 0.0, 0.0),
        Point3D::new(0.0, 6.0, 0.0),
        Point3D::new(0.0, 0.0, 6.0),
    );
    assert_close(volume(&mesh), 36.0, 1e-9);
}
