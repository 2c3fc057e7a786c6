//! # Mesh Import
//!
//! Decodes STL (binary or ASCII) into an unindexed [`Mesh`]. Face order
//! is preserved so reductions over the mesh stay reproducible.
//!
//! Decoding is a convenience for the file-loading collaborator; the
//! estimators only ever see the resulting [`Mesh`].

use crate::mesh_metrics;
use printcost_core::event_bus::{AppEvent, MeshEvent};
use printcost_core::{emit, Mesh, MeshError, Point3D, Result, Triangle};
use std::fs::File;
use std::io::Cursor;
use std::path::Path;
use tracing::{debug, warn};

/// STL importer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshImporter {
    /// Uniform scale applied after decoding
    pub scale: f64,
    /// Move the bounding-box center to the origin
    pub center_model: bool,
}

impl MeshImporter {
    pub fn new() -> Self {
        Self {
            scale: 1.0,
            center_model: false,
        }
    }

    pub fn centered() -> Self {
        Self {
            center_model: true,
            ..Self::new()
        }
    }

    /// Import an STL file from disk
    pub fn import_file(&self, path: impl AsRef<Path>) -> Result<Mesh> {
        let path = path.as_ref();
        debug!("Importing STL file: {}", path.display());

        let mut file = File::open(path)?;
        let stl = stl_io::read_stl(&mut file).map_err(|e| self.rejected(e))?;

        self.finish(&stl).map_err(Into::into)
    }

    /// Import STL from an in-memory buffer
    pub fn import_bytes(&self, data: &[u8]) -> std::result::Result<Mesh, MeshError> {
        debug!("Importing STL from binary data ({} bytes)", data.len());

        let mut cursor = Cursor::new(data);
        let stl = stl_io::read_stl(&mut cursor).map_err(|e| self.rejected(e))?;

        self.finish(&stl)
    }

    fn rejected(&self, e: std::io::Error) -> MeshError {
        let err = MeshError::Decode {
            reason: e.to_string(),
        };
        warn!("{}", err);
        emit!(AppEvent::Mesh(MeshEvent::Rejected {
            reason: err.to_string(),
        }));
        err
    }

    fn finish(&self, stl: &stl_io::IndexedMesh) -> std::result::Result<Mesh, MeshError> {
        debug!("STL contains {} faces", stl.faces.len());

        let mut mesh = from_indexed(stl).map_err(|e| {
            emit!(AppEvent::Mesh(MeshEvent::Rejected {
                reason: e.to_string(),
            }));
            e
        })?;

        if self.scale != 1.0 {
            debug!("Scaling mesh by factor {}", self.scale);
            mesh = mesh.scaled(self.scale);
        }

        if self.center_model {
            debug!("Centering mesh at origin");
            mesh = mesh.centered();
        }

        emit!(AppEvent::Mesh(MeshEvent::Loaded {
            triangles: mesh.triangle_count(),
            volume_mm3: mesh_metrics::volume(&mesh),
        }));

        Ok(mesh)
    }
}

impl Default for MeshImporter {
    fn default() -> Self {
        Self::new()
    }
}

fn from_indexed(stl: &stl_io::IndexedMesh) -> std::result::Result<Mesh, MeshError> {
    let vertex = |index: usize| -> std::result::Result<Point3D, MeshError> {
        let v = stl.vertices.get(index).ok_or_else(|| MeshError::Decode {
            reason: format!("face references missing vertex {}", index),
        })?;
        Ok(Point3D::new(
            f64::from(v[0]),
            f64::from(v[1]),
            f64::from(v[2]),
        ))
    };

    let triangles = stl
        .faces
        .iter()
        .map(|face| {
            Ok(Triangle::new(
                vertex(face.vertices[0])?,
                vertex(face.vertices[1])?,
                vertex(face.vertices[2])?,
            ))
        })
        .collect::<std::result::Result<Vec<_>, MeshError>>()?;

    Ok(Mesh::new(triangles))
}
