//! Wiring from configuration to estimators

use printcost_core::{EstimateRequest, Mesh, WeightEstimator};
use printcost_estimator::{CostCalculator, GeometricEstimator, PricingEngine};
use printcost_settings::{Config, SettingsResult};
use printcost_slicing::{
    ExternalSlicingEstimator, RecalcCoordinator, SlicerBackend, SlicingOptions,
};
use std::sync::Arc;
use tracing::debug;

/// Slicer options from the `[slicing]` section
pub fn slicing_options(config: &Config) -> SlicingOptions {
    SlicingOptions {
        enabled: config.slicing.enabled,
        timeout: config.slicing_timeout(),
        infill_pattern: config.slicing.infill_pattern.clone(),
        print_speed: config.slicing.print_speed,
    }
}

/// Calculator for `config`. The slicer is consulted only when one is given
/// and slicing is enabled; otherwise pricing is purely geometric.
pub fn build_calculator(
    config: &Config,
    slicer: Option<Arc<dyn SlicerBackend>>,
) -> CostCalculator {
    let geometric = GeometricEstimator::new(config.estimation.shell_blend);

    let estimator: Arc<dyn WeightEstimator> = match slicer {
        Some(backend) if config.slicing.enabled => {
            debug!("Using slicer {} with geometric fallback", backend.name());
            Arc::new(ExternalSlicingEstimator::new(
                backend,
                geometric,
                slicing_options(config),
            ))
        }
        _ => Arc::new(geometric),
    };

    CostCalculator::new(
        estimator,
        PricingEngine::with_policy(config.estimation.labor.clone()),
    )
}

/// Debounced coordinator around [`build_calculator`]
pub fn build_coordinator(
    config: &Config,
    slicer: Option<Arc<dyn SlicerBackend>>,
) -> RecalcCoordinator {
    RecalcCoordinator::with_debounce(Arc::new(build_calculator(config, slicer)), config.debounce())
}

/// Request for `mesh` using the configured default material, quality and
/// infill
pub fn estimate_request(config: &Config, mesh: Mesh) -> SettingsResult<EstimateRequest> {
    Ok(EstimateRequest::new(
        Arc::new(mesh),
        config.default_profile(),
        config.default_material()?,
        config.default_infill()?,
    ))
}
