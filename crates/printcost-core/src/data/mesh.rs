//! Triangle mesh model
//!
//! Meshes are read as an unindexed stream of three-vertex faces. Each face
//! contributes exactly once to any reduction, in the order it was supplied.

use crate::error::MeshError;
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// 3D point in millimeters
pub type Point3D = Point3<f64>;

/// 3D vector in millimeters
pub type Vector3D = Vector3<f64>;

/// A triangle made up of three vertices
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub vertices: [Point3D; 3],
}

impl Triangle {
    pub fn new(v1: Point3D, v2: Point3D, v3: Point3D) -> Self {
        Self {
            vertices: [v1, v2, v3],
        }
    }

    /// `p1 · (p2 × p3)`, six times the signed volume of the tetrahedron
    /// spanned by the origin and this face.
    pub fn scalar_triple_product(&self) -> f64 {
        let [p1, p2, p3] = &self.vertices;
        p1.coords.dot(&p2.coords.cross(&p3.coords))
    }

    /// Signed volume of the tetrahedron (origin, p1, p2, p3)
    pub fn signed_volume(&self) -> f64 {
        self.scalar_triple_product() / 6.0
    }

    /// Unnormalized face normal `(p2 - p1) × (p3 - p1)`
    pub fn area_vector(&self) -> Vector3D {
        let [p1, p2, p3] = &self.vertices;
        (p2 - p1).cross(&(p3 - p1))
    }

    pub fn area(&self) -> f64 {
        self.area_vector().norm() / 2.0
    }

    pub fn is_finite(&self) -> bool {
        self.vertices
            .iter()
            .all(|v| v.x.is_finite() && v.y.is_finite() && v.z.is_finite())
    }

    fn map(&self, f: impl Fn(&Point3D) -> Point3D) -> Self {
        Self {
            vertices: [
                f(&self.vertices[0]),
                f(&self.vertices[1]),
                f(&self.vertices[2]),
            ],
        }
    }
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Point3D,
    pub max: Point3D,
}

impl BoundingBox {
    /// Extent along each axis (length, width, height)
    pub fn size(&self) -> Vector3D {
        self.max - self.min
    }

    pub fn center(&self) -> Point3D {
        nalgebra::center(&self.min, &self.max)
    }
}

/// Immutable triangle mesh
///
/// Built once per loaded file and replaced wholesale when a new file arrives.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn new(triangles: Vec<Triangle>) -> Self {
        Self { triangles }
    }

    /// Group a flat vertex stream into faces, three vertices at a time
    pub fn from_flat_vertices(vertices: &[Point3D]) -> Result<Self, MeshError> {
        if vertices.len() % 3 != 0 {
            return Err(MeshError::VertexCountNotMultipleOfThree {
                count: vertices.len(),
            });
        }

        let triangles = vertices
            .chunks_exact(3)
            .map(|face| Triangle::new(face[0], face[1], face[2]))
            .collect();

        Ok(Self { triangles })
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn vertex_count(&self) -> usize {
        self.triangles.len() * 3
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Check the structural preconditions of the volume and area reductions.
    ///
    /// Watertightness and winding are not verified.
    pub fn validate(&self) -> Result<(), MeshError> {
        if self.triangles.is_empty() {
            return Err(MeshError::Empty);
        }

        if let Some(index) = self.triangles.iter().position(|t| !t.is_finite()) {
            return Err(MeshError::NonFiniteVertex { triangle: index });
        }

        Ok(())
    }

    /// Bounding box of all vertices, `None` for an empty mesh
    pub fn bounds(&self) -> Option<BoundingBox> {
        let mut vertices = self.triangles.iter().flat_map(|t| t.vertices.iter());
        let first = *vertices.next()?;

        let (min, max) = vertices.fold((first, first), |(min, max), v| {
            (min.inf(v), max.sup(v))
        });

        Some(BoundingBox { min, max })
    }

    /// Copy of the mesh moved by `offset`
    pub fn translated(&self, offset: &Vector3D) -> Self {
        Self {
            triangles: self.triangles.iter().map(|t| t.map(|v| v + offset)).collect(),
        }
    }

    /// Copy of the mesh scaled uniformly about the origin
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            triangles: self
                .triangles
                .iter()
                .map(|t| t.map(|v| Point3D::from(v.coords * factor)))
                .collect(),
        }
    }

    /// Copy of the mesh with its bounding-box center at the origin
    pub fn centered(&self) -> Self {
        match self.bounds() {
            Some(bounds) => self.translated(&-bounds.center().coords),
            None => self.clone(),
        }
    }

    /// Copy of the mesh with every face's winding reversed
    pub fn flipped(&self) -> Self {
        Self {
            triangles: self
                .triangles
                .iter()
                .map(|t| Triangle::new(t.vertices[0], t.vertices[2], t.vertices[1]))
                .collect(),
        }
    }
}

impl From<Vec<Triangle>> for Mesh {
    fn from(triangles: Vec<Triangle>) -> Self {
        Self::new(triangles)
    }
}
