//! Geometric weight estimation
//!
//! Mesh metrics, shell split and material conversion chained into one
//! [`WeightEstimator`]. An empty, non-finite or zero-volume mesh never
//! produces NaN: it short-circuits to a zero-material estimate.

use crate::material::MaterialEstimator;
use crate::mesh_metrics::MeshMetrics;
use crate::shell::ShellModel;
use async_trait::async_trait;
use printcost_core::{
    EstimateRequest, EstimateSource, InfillFraction, MaterialSpec, Mesh, PrintProfile, Result,
    ShellBlend, WeightEstimate, WeightEstimator,
};
use tracing::{debug, warn};

/// Estimator using only the mesh geometry and print parameters
#[derive(Debug, Clone, Copy, Default)]
pub struct GeometricEstimator {
    shell: ShellModel,
    material: MaterialEstimator,
}

impl GeometricEstimator {
    pub fn new(blend: ShellBlend) -> Self {
        Self {
            shell: ShellModel::new(blend),
            material: MaterialEstimator::new(),
        }
    }

    pub fn shell_model(&self) -> &ShellModel {
        &self.shell
    }

    /// Synchronous estimate for explicit inputs
    pub fn estimate(
        &self,
        mesh: &Mesh,
        profile: &PrintProfile,
        material: &MaterialSpec,
        infill: InfillFraction,
    ) -> Result<WeightEstimate> {
        profile.validate()?;
        material.validate()?;

        let metrics = match MeshMetrics::analyze(mesh) {
            Ok(metrics) => metrics,
            Err(e) => {
                warn!("Reporting zero material for unusable mesh: {}", e);
                return Ok(WeightEstimate::zero(EstimateSource::Geometric));
            }
        };

        let split = self
            .shell
            .split(metrics.volume_mm3, metrics.surface_area_mm2, profile);
        let usage = self.material.estimate(&split, infill, material);

        debug!(
            "Geometric estimate: {} triangles, {:.3} mm³ enclosed, {:.3} mm³ deposited, {:.4} g",
            metrics.triangle_count, metrics.volume_mm3, usage.volume_mm3, usage.weight_grams
        );

        Ok(WeightEstimate {
            weight_grams: usage.weight_grams,
            material_volume_mm3: Some(usage.volume_mm3),
            split: Some(split),
            source: EstimateSource::Geometric,
        })
    }

    /// Synchronous estimate for a request snapshot
    pub fn estimate_request(&self, request: &EstimateRequest) -> Result<WeightEstimate> {
        self.estimate(
            &request.mesh,
            &request.profile,
            &request.material,
            request.infill,
        )
    }
}

#[async_trait]
impl WeightEstimator for GeometricEstimator {
    fn name(&self) -> &str {
        "geometric"
    }

    async fn estimate_weight(&self, request: &EstimateRequest) -> Result<WeightEstimate> {
        self.estimate_request(request)
    }
}
