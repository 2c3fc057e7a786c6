//! Cost calculation
//!
//! Prices the weight produced by any [`WeightEstimator`]. [`estimate_cost`]
//! is the synchronous geometric path; [`CostCalculator`] drives an
//! arbitrary estimator, including one that consults an external slicer.

use crate::pipeline::GeometricEstimator;
use crate::pricing::PricingEngine;
use printcost_core::units;
use printcost_core::{
    Error, EstimateRequest, LaborPolicy, Quote, Result, ShellBlend, WeightEstimate,
    WeightEstimator,
};
use std::sync::Arc;
use tracing::{error, info};

fn quote_from(
    request: &EstimateRequest,
    estimate: WeightEstimate,
    pricing: &PricingEngine,
) -> Quote {
    let breakdown = pricing.price(estimate.weight_grams, &request.material, &request.profile);
    let filament_length_mm = estimate
        .material_volume_mm3
        .map(|v| units::filament_length_mm(v, request.material.filament_diameter_mm));

    Quote {
        breakdown,
        source: estimate.source,
        split: estimate.split,
        material_volume_mm3: estimate.material_volume_mm3,
        filament_length_mm,
        material: request.material.id.clone(),
        profile: request.profile.name.clone(),
        infill: request.infill,
    }
}

/// Price a request using the geometric path only
pub fn estimate_cost(
    request: &EstimateRequest,
    labor: Arc<dyn LaborPolicy>,
    blend: ShellBlend,
) -> Result<Quote> {
    let estimate = GeometricEstimator::new(blend).estimate_request(request)?;
    Ok(quote_from(request, estimate, &PricingEngine::new(labor)))
}

/// Estimator plus pricing
#[derive(Clone)]
pub struct CostCalculator {
    estimator: Arc<dyn WeightEstimator>,
    pricing: PricingEngine,
}

impl CostCalculator {
    pub fn new(estimator: Arc<dyn WeightEstimator>, pricing: PricingEngine) -> Self {
        Self { estimator, pricing }
    }

    /// Geometric estimation with the default shell blend and labor policy
    pub fn geometric() -> Self {
        Self::new(Arc::new(GeometricEstimator::default()), PricingEngine::default())
    }

    pub fn estimator_name(&self) -> &str {
        self.estimator.name()
    }

    pub fn pricing(&self) -> &PricingEngine {
        &self.pricing
    }

    /// Estimate and price one request.
    ///
    /// Invalid parameters are reported as such; any other failure becomes
    /// [`Error::Computation`] for this request only.
    pub async fn calculate(&self, request: &EstimateRequest) -> Result<Quote> {
        request.validate()?;

        let estimate = match self.estimator.estimate_weight(request).await {
            Ok(estimate) => estimate,
            Err(e @ Error::Parameter(_)) => return Err(e),
            Err(e) => {
                error!("{} estimator failed: {}", self.estimator.name(), e);
                return Err(Error::computation(e.to_string()));
            }
        };

        let quote = quote_from(request, estimate, &self.pricing);
        info!("Quote ({}): {}", quote.source, quote.breakdown.rounded());
        Ok(quote)
    }
}

impl std::fmt::Debug for CostCalculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CostCalculator")
            .field("estimator", &self.estimator.name())
            .field("pricing", &self.pricing)
            .finish()
    }
}
