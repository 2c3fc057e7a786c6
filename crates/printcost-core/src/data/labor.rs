//! Labor cost policies
//!
//! The labor component of a quote is a configuration choice. Each policy is
//! a named strategy behind the [`LaborPolicy`] trait so callers can swap it
//! without touching the pricing code.

use crate::data::profiles::PrintProfile;
use crate::error::ParameterError;
use serde::{Deserialize, Serialize};

/// Flat labor charge used when nothing else is configured
pub const DEFAULT_LABOR_COST: f64 = 50.0;

/// Strategy computing the labor cost of a print
pub trait LaborPolicy: Send + Sync + std::fmt::Debug {
    /// Short identifier for logs and settings
    fn name(&self) -> &'static str;

    /// Labor cost for printing with `profile`
    fn labor_cost(&self, profile: &PrintProfile) -> f64;
}

/// Built-in labor policies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LaborCostPolicy {
    /// Same charge for every print
    Flat {
        /// Charge in currency units
        amount: f64,
    },
    /// Charge taken from the selected profile's `labor_cost`
    Tiered,
    /// `round(base_cost × base_layer_height / layer_height)`; thinner layers
    /// take more passes and cost more
    LayerHeightScaled {
        /// Charge at the reference layer height
        base_cost: f64,
        /// Reference layer height in mm
        base_layer_height: f64,
    },
}

impl LaborCostPolicy {
    pub fn validate(&self) -> Result<(), ParameterError> {
        match *self {
            Self::Flat { amount } => check_cost(amount),
            Self::Tiered => Ok(()),
            Self::LayerHeightScaled {
                base_cost,
                base_layer_height,
            } => {
                check_cost(base_cost)?;
                if base_layer_height.is_finite() && base_layer_height > 0.0 {
                    Ok(())
                } else {
                    Err(ParameterError::InvalidLayerHeight {
                        value: base_layer_height,
                    })
                }
            }
        }
    }
}

fn check_cost(value: f64) -> Result<(), ParameterError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ParameterError::InvalidLaborCost { value })
    }
}

impl Default for LaborCostPolicy {
    fn default() -> Self {
        Self::Flat {
            amount: DEFAULT_LABOR_COST,
        }
    }
}

impl LaborPolicy for LaborCostPolicy {
    fn name(&self) -> &'static str {
        match self {
            Self::Flat { .. } => "flat",
            Self::Tiered => "tiered",
            Self::LayerHeightScaled { .. } => "layer_height_scaled",
        }
    }

    fn labor_cost(&self, profile: &PrintProfile) -> f64 {
        match *self {
            Self::Flat { amount } => amount,
            Self::Tiered => profile.labor_cost,
            Self::LayerHeightScaled {
                base_cost,
                base_layer_height,
            } => {
                if profile.layer_height > 0.0 {
                    (base_cost * (base_layer_height / profile.layer_height)).round()
                } else {
                    base_cost
                }
            }
        }
    }
}
