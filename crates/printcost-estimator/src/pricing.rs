//! Pricing engine
//!
//! Turns a material weight into a cost breakdown. The labor component is
//! delegated to a [`LaborPolicy`] strategy; the material component is
//! `weight × price_per_kg / 1000`.

use printcost_core::{CostBreakdown, LaborCostPolicy, LaborPolicy, MaterialSpec, PrintProfile};
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct PricingEngine {
    labor: Arc<dyn LaborPolicy>,
}

impl PricingEngine {
    pub fn new(labor: Arc<dyn LaborPolicy>) -> Self {
        Self { labor }
    }

    pub fn with_policy(policy: LaborCostPolicy) -> Self {
        Self::new(Arc::new(policy))
    }

    pub fn labor_policy(&self) -> &dyn LaborPolicy {
        self.labor.as_ref()
    }

    /// Price `weight_grams` of `material` printed with `profile`.
    ///
    /// A non-positive or non-finite weight is priced as zero material, so
    /// the total falls back to the labor charge alone.
    pub fn price(
        &self,
        weight_grams: f64,
        material: &MaterialSpec,
        profile: &PrintProfile,
    ) -> CostBreakdown {
        let weight_grams = if weight_grams.is_finite() && weight_grams > 0.0 {
            weight_grams
        } else {
            0.0
        };

        let material_cost = weight_grams * material.price_per_gram();
        let labor_cost = self.labor.labor_cost(profile);

        debug!(
            "Priced {:.3} g of {} with {} labor: material {:.4}, labor {:.2}",
            weight_grams,
            material.name,
            self.labor.name(),
            material_cost,
            labor_cost
        );

        CostBreakdown {
            weight_grams,
            material_cost,
            labor_cost,
            total_cost: material_cost + labor_cost,
        }
    }
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self::with_policy(LaborCostPolicy::default())
    }
}
