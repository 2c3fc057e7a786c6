//! Mesh metrics
//!
//! Enclosed volume and surface area of a closed triangle mesh.
//!
//! Volume uses the signed-tetrahedron (divergence) method: every face forms a
//! tetrahedron with the origin, and the signed volumes of those tetrahedra
//! cancel outside the solid. The absolute value of the sum is reported so an
//! inward-wound export still yields a positive volume. Both reductions run
//! sequentially in face order, which keeps results bit-for-bit reproducible.

use printcost_core::units;
use printcost_core::{BoundingBox, Mesh, MeshError, Triangle, Vector3D};
use serde::{Deserialize, Serialize};

/// Signed enclosed volume in mm³; negative for inward winding
pub fn signed_volume(mesh: &Mesh) -> f64 {
    let six_times: f64 = mesh
        .triangles()
        .iter()
        .map(Triangle::scalar_triple_product)
        .sum();
    six_times / 6.0
}

/// Enclosed volume in mm³
pub fn volume(mesh: &Mesh) -> f64 {
    signed_volume(mesh).abs()
}

/// Total surface area in mm²
pub fn surface_area(mesh: &Mesh) -> f64 {
    mesh.triangles().iter().map(Triangle::area).sum()
}

/// Geometric summary of a mesh
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeshMetrics {
    pub triangle_count: usize,
    pub volume_mm3: f64,
    pub signed_volume_mm3: f64,
    pub surface_area_mm2: f64,
    /// Faces are wound inward (negative signed volume)
    pub inside_out: bool,
    pub bounds: Option<BoundingBox>,
}

impl MeshMetrics {
    /// Compute metrics without validating the mesh
    pub fn compute(mesh: &Mesh) -> Self {
        let signed = signed_volume(mesh);

        Self {
            triangle_count: mesh.triangle_count(),
            volume_mm3: signed.abs(),
            signed_volume_mm3: signed,
            surface_area_mm2: surface_area(mesh),
            inside_out: signed < 0.0,
            bounds: mesh.bounds(),
        }
    }

    /// Validate the mesh, compute its metrics and reject meshes that
    /// enclose no volume
    pub fn analyze(mesh: &Mesh) -> Result<Self, MeshError> {
        mesh.validate()?;

        let metrics = Self::compute(mesh);
        if !metrics.encloses_volume() {
            return Err(MeshError::ZeroVolume {
                triangles: metrics.triangle_count,
            });
        }

        Ok(metrics)
    }

    /// True when the volume is positive and finite
    pub fn encloses_volume(&self) -> bool {
        self.volume_mm3.is_finite() && self.volume_mm3 > 0.0
    }

    pub fn volume_cm3(&self) -> f64 {
        units::mm3_to_cm3(self.volume_mm3)
    }

    /// Length, width and height of the bounding box
    pub fn dimensions(&self) -> Option<Vector3D> {
        self.bounds.map(|b| b.size())
    }
}
