use crate::common::{assert_close, binary_stl, cube};
use printcost_core::MeshError;
use printcost_estimator::{surface_area, volume, MeshImporter};
use std::io::Write;

#[test]
fn test_binary_stl_import() {
    let original = cube(10.0);
    let mesh = MeshImporter::new()
        .import_bytes(&binary_stl(&original))
        .unwrap();

    assert_eq!(mesh.triangle_count(), 12);
    assert_eq!(mesh.triangles(), original.triangles());
    assert_close(volume(&mesh), 1000.0, 1e-9);
    assert_close(surface_area(&mesh), 600.0, 1e-9);
}

#[test]
fn test_centered_import_keeps_volume() {
    let mesh = MeshImporter::centered()
        .import_bytes(&binary_stl(&cube(10.0)))
        .unwrap();

    let bounds = mesh.bounds().unwrap();
    assert_eq!(bounds.min.x, -5.0);
    assert_eq!(bounds.max.z, 5.0);
    assert_close(volume(&mesh), 1000.0, 1e-9);
}

#[test]
fn test_ascii_stl_import() {
    let ascii = "solid tetra
facet normal 0 0 -1
  outer loop
    vertex 0 0 0
    vertex 0 6 0
    vertex 6 0 0
  endloop
endfacet
facet normal 0 -1 0
  outer loop
    vertex 0 0 0
    vertex 6 0 0
    vertex 0 0 6
  endloop
endfacet
facet normal -1 0 0
  outer loop
    vertex 0 0 0
    vertex 0 0 6
    vertex 0 6 0
  endloop
endfacet
facet normal 1 1 1
  outer loop
    vertex 6 0 0
    vertex 0 6 0
    vertex 0 0 6
  endloop
endfacet
endsolid tetra
";
    let mesh = MeshImporter::new().import_bytes(ascii.as_bytes()).unwrap();
    assert_eq!(mesh.triangle_count(), 4);
    assert_close(volume(&mesh), 36.0, 1e-9);
}

#[test]
fn test_import_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&binary_stl(&cube(4.0))).unwrap();
    file.flush().unwrap();

    let mesh = MeshImporter::new().import_file(file.path()).unwrap();
    assert_close(volume(&mesh), 64.0, 1e-9);
}

#[test]
fn test_garbage_is_rejected() {
    let err = MeshImporter::new().import_bytes(&[1, 2, 3]).unwrap_err();
    assert!(matches!(err, MeshError::Decode { .. }));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = MeshImporter::new()
        .import_file("/nonexistent/part.stl")
        .unwrap_err();
    assert!(matches!(err, printcost_core::Error::Io(_)));
}
