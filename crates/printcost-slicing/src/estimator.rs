//! Slicer-backed weight estimation
//!
//! [`ExternalSlicingEstimator`] asks a slicing engine for the filament
//! weight and falls back to the geometric pipeline whenever that fails.
//! Slicing failures are logged and announced on the event bus, never
//! returned to the caller.

use crate::adapter::SlicingAdapter;
use crate::backend::SlicerBackend;
use crate::protocol::{
    SlicerSettings, SlicingRequest, DEFAULT_INFILL_PATTERN, DEFAULT_PRINT_SPEED,
};
use async_trait::async_trait;
use printcost_core::event_bus::{AppEvent, SlicingEvent};
use printcost_core::{
    emit, EstimateRequest, EstimateSource, Result, SlicingError, WeightEstimate, WeightEstimator,
};
use printcost_estimator::GeometricEstimator;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// How long a slicer may take before the geometric estimate is used
pub const DEFAULT_SLICING_TIMEOUT: Duration = Duration::from_secs(30);

/// Slicing behavior
#[derive(Debug, Clone, PartialEq)]
pub struct SlicingOptions {
    pub enabled: bool,
    pub timeout: Duration,
    pub infill_pattern: String,
    /// mm/s
    pub print_speed: f64,
}

impl Default for SlicingOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            timeout: DEFAULT_SLICING_TIMEOUT,
            infill_pattern: DEFAULT_INFILL_PATTERN.to_string(),
            print_speed: DEFAULT_PRINT_SPEED,
        }
    }
}

pub struct ExternalSlicingEstimator {
    backend: Arc<dyn SlicerBackend>,
    fallback: GeometricEstimator,
    options: SlicingOptions,
}

impl ExternalSlicingEstimator {
    pub fn new(
        backend: Arc<dyn SlicerBackend>,
        fallback: GeometricEstimator,
        options: SlicingOptions,
    ) -> Self {
        Self {
            backend,
            fallback,
            options,
        }
    }

    pub fn options(&self) -> &SlicingOptions {
        &self.options
    }

    async fn try_slice(
        &self,
        request: &EstimateRequest,
        mesh_bytes: Arc<[u8]>,
    ) -> std::result::Result<WeightEstimate, SlicingError> {
        let slicing_request = SlicingRequest {
            mesh_bytes,
            settings: SlicerSettings::new(
                &request.profile,
                &request.material,
                request.infill,
                &self.options.infill_pattern,
                self.options.print_speed,
            ),
        };

        emit!(AppEvent::Slicing(SlicingEvent::Started {
            backend: self.backend.name().to_string(),
        }));

        let adapter = SlicingAdapter::new(self.backend.clone(), self.options.timeout);
        let usage = adapter.slice(&slicing_request).await?;

        let density = request.material.density;
        let weight_grams = usage.grams(density);
        if !(weight_grams.is_finite() && weight_grams >= 0.0) {
            return Err(SlicingError::MalformedMetadata {
                reason: format!("weight {} g is not usable", weight_grams),
            });
        }

        Ok(WeightEstimate {
            weight_grams,
            material_volume_mm3: usage.volume_mm3(density),
            split: None,
            source: EstimateSource::Slicer,
        })
    }
}

#[async_trait]
impl WeightEstimator for ExternalSlicingEstimator {
    fn name(&self) -> &str {
        "slicer"
    }

    async fn estimate_weight(&self, request: &EstimateRequest) -> Result<WeightEstimate> {
        request.validate()?;

        if !self.options.enabled {
            debug!("Slicing disabled, using geometric estimate");
            return self.fallback.estimate_request(request);
        }
        let Some(mesh_bytes) = request.mesh_bytes.clone() else {
            debug!("No mesh file to slice, using geometric estimate");
            return self.fallback.estimate_request(request);
        };

        match self.try_slice(request, mesh_bytes).await {
            Ok(estimate) => {
                info!(
                    "Slicer {} reported {:.3} g",
                    self.backend.name(),
                    estimate.weight_grams
                );
                emit!(AppEvent::Slicing(SlicingEvent::Succeeded {
                    backend: self.backend.name().to_string(),
                    weight_grams: estimate.weight_grams,
                }));
                Ok(estimate)
            }
            Err(e) => {
                warn!("Falling back to geometric estimate after slicer failure: {}", e);
                emit!(AppEvent::Slicing(SlicingEvent::FellBack {
                    backend: self.backend.name().to_string(),
                    reason: e.to_string(),
                }));
                self.fallback.estimate_request(request)
            }
        }
    }
}

impl std::fmt::Debug for ExternalSlicingEstimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExternalSlicingEstimator")
            .field("backend", &self.backend.name())
            .field("fallback", &self.fallback)
            .field("options", &self.options)
            .finish()
    }
}
