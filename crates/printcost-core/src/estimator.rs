//! Weight estimator interface
//!
//! Defines the capability trait implemented by the geometric estimator and
//! by the slicer-backed estimator. Callers depend only on this trait and
//! never learn which path produced the answer.

use crate::data::estimate::WeightEstimate;
use crate::data::infill::InfillFraction;
use crate::data::materials::MaterialSpec;
use crate::data::mesh::Mesh;
use crate::data::profiles::PrintProfile;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Immutable snapshot of everything one estimate needs
///
/// The surrounding application owns mesh storage and hands a shared,
/// read-only snapshot in for each computation.
#[derive(Debug, Clone)]
pub struct EstimateRequest {
    /// Parsed triangle mesh
    pub mesh: Arc<Mesh>,
    /// Original file bytes, forwarded to an external slicer when present
    pub mesh_bytes: Option<Arc<[u8]>>,
    pub profile: PrintProfile,
    pub material: MaterialSpec,
    pub infill: InfillFraction,
}

impl EstimateRequest {
    pub fn new(
        mesh: Arc<Mesh>,
        profile: PrintProfile,
        material: MaterialSpec,
        infill: InfillFraction,
    ) -> Self {
        Self {
            mesh,
            mesh_bytes: None,
            profile,
            material,
            infill,
        }
    }

    /// Attach the raw mesh file for the slicing path
    pub fn with_mesh_bytes(mut self, bytes: impl Into<Arc<[u8]>>) -> Self {
        self.mesh_bytes = Some(bytes.into());
        self
    }

    /// Validate profile and material parameters
    pub fn validate(&self) -> Result<()> {
        self.profile.validate()?;
        self.material.validate()?;
        Ok(())
    }
}

/// Produces a material weight for a request
#[async_trait]
pub trait WeightEstimator: Send + Sync {
    /// Short identifier for logs
    fn name(&self) -> &str;

    /// Estimate the printed weight in grams
    async fn estimate_weight(&self, request: &EstimateRequest) -> Result<WeightEstimate>;
}
