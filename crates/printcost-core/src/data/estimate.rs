//! Estimate records
//!
//! Intermediate and final values of a cost estimate. Every record is built
//! from scratch for each request and never mutated afterwards.

use crate::data::infill::InfillFraction;
use crate::data::materials::MaterialId;
use crate::units;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Split of a mesh's enclosed volume into dense shell and sparse interior
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct VolumeSplit {
    pub total_volume_mm3: f64,
    pub surface_area_mm2: f64,
    pub shell_volume_mm3: f64,
    pub interior_volume_mm3: f64,
}

impl VolumeSplit {
    /// Split used for empty or degenerate meshes
    pub fn zero() -> Self {
        Self::default()
    }

    /// True when the shell consumed the whole part
    pub fn is_solid(&self) -> bool {
        self.interior_volume_mm3 == 0.0
    }
}

/// Which path produced a weight figure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstimateSource {
    /// Mesh metrics, shell model and infill
    Geometric,
    /// External slicing engine
    Slicer,
}

impl fmt::Display for EstimateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Geometric => write!(f, "geometric"),
            Self::Slicer => write!(f, "slicer"),
        }
    }
}

/// Material weight produced by a [`crate::WeightEstimator`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightEstimate {
    pub weight_grams: f64,
    /// Deposited material volume, when the producing path knows it
    pub material_volume_mm3: Option<f64>,
    /// Shell/interior split, geometric path only
    pub split: Option<VolumeSplit>,
    pub source: EstimateSource,
}

impl WeightEstimate {
    pub fn zero(source: EstimateSource) -> Self {
        Self {
            weight_grams: 0.0,
            material_volume_mm3: Some(0.0),
            split: Some(VolumeSplit::zero()),
            source,
        }
    }
}

/// Final output record of a pricing run
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub weight_grams: f64,
    pub material_cost: f64,
    pub labor_cost: f64,
    pub total_cost: f64,
}

impl CostBreakdown {
    /// Copy with every figure rounded to display precision (2 decimals)
    pub fn rounded(&self) -> Self {
        Self {
            weight_grams: units::round_display(self.weight_grams),
            material_cost: units::round_display(self.material_cost),
            labor_cost: units::round_display(self.labor_cost),
            total_cost: units::round_display(self.total_cost),
        }
    }
}

impl fmt::Display for CostBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} g, material {}, labor {}, total {}",
            units::format_grams(self.weight_grams),
            units::format_currency(self.material_cost),
            units::format_currency(self.labor_cost),
            units::format_currency(self.total_cost)
        )
    }
}

/// A priced estimate together with the inputs that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub breakdown: CostBreakdown,
    pub source: EstimateSource,
    pub split: Option<VolumeSplit>,
    pub material_volume_mm3: Option<f64>,
    /// Filament length for the deposited volume, when known
    pub filament_length_mm: Option<f64>,
    pub material: MaterialId,
    pub profile: String,
    pub infill: InfillFraction,
}
