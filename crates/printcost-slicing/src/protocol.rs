//! Slicer protocol
//!
//! The request sent to an external slicing engine and the interpretation
//! of the metadata it returns. Metadata is a JSON object carrying either a
//! filament weight in grams (`filament_weight`) or a filament volume in
//! mm³ (`filament_amount`).

use printcost_core::{InfillFraction, MaterialSpec, PrintProfile, SlicingError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Infill pattern requested when nothing else is configured
pub const DEFAULT_INFILL_PATTERN: &str = "grid";

/// Print speed requested when nothing else is configured (mm/s)
pub const DEFAULT_PRINT_SPEED: f64 = 60.0;

/// Settings record handed to the slicer, keyed the way slicing engines
/// name them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlicerSettings {
    pub layer_height: f64,
    pub wall_line_count: u32,
    pub top_layers: u32,
    pub bottom_layers: u32,
    /// Infill in whole percent (0–100)
    pub infill_sparse_density: u8,
    pub infill_pattern: String,
    pub gradual_infill_steps: u32,
    pub minimum_infill_area: f64,
    pub support_enable: bool,
    pub support_infill_rate: u32,
    pub infill_overlap: u32,
    /// g/cm³
    pub material_density: f64,
    /// mm/s
    pub speed_print: f64,
}

impl SlicerSettings {
    /// Settings for one estimate. Support, gradual infill and minimum infill
    /// area are disabled so material use tracks infill linearly.
    pub fn new(
        profile: &PrintProfile,
        material: &MaterialSpec,
        infill: InfillFraction,
        infill_pattern: &str,
        print_speed: f64,
    ) -> Self {
        Self {
            layer_height: profile.layer_height,
            wall_line_count: profile.wall_count,
            top_layers: profile.top_layers,
            bottom_layers: profile.bottom_layers,
            infill_sparse_density: infill.as_percent(),
            infill_pattern: infill_pattern.to_string(),
            gradual_infill_steps: 0,
            minimum_infill_area: 0.0,
            support_enable: false,
            support_infill_rate: 0,
            infill_overlap: 5,
            material_density: material.density,
            speed_print: print_speed,
        }
    }
}

/// Mesh bytes plus settings
#[derive(Debug, Clone)]
pub struct SlicingRequest {
    pub mesh_bytes: Arc<[u8]>,
    pub settings: SlicerSettings,
}

/// Material figure reported by a slicer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FilamentUsage {
    /// Filament weight in grams
    Weight(f64),
    /// Filament volume in mm³
    Volume(f64),
}

impl FilamentUsage {
    /// Interpret slicer metadata.
    ///
    /// A positive `filament_weight` wins. Otherwise `filament_amount` is
    /// used. A zero weight with no volume is accepted as an empty print.
    pub fn from_metadata(metadata: &Value) -> Result<Self, SlicingError> {
        let object = metadata
            .as_object()
            .ok_or_else(|| malformed("metadata is not an object"))?;

        let weight = object
            .get("filament_weight")
            .filter(|v| !v.is_null())
            .map(|v| non_negative(v, "filament_weight"))
            .transpose()?;

        if let Some(grams) = weight.filter(|g| *g > 0.0) {
            return Ok(Self::Weight(grams));
        }

        let amount = object
            .get("filament_amount")
            .filter(|v| !v.is_null())
            .map(|v| non_negative(v, "filament_amount"))
            .transpose()?;

        match (weight, amount) {
            (_, Some(mm3)) => Ok(Self::Volume(mm3)),
            (Some(grams), None) => Ok(Self::Weight(grams)),
            (None, None) => Err(SlicingError::MissingFields),
        }
    }

    /// Weight in grams, converting a volume with `density` (g/cm³)
    pub fn grams(&self, density: f64) -> f64 {
        match *self {
            Self::Weight(grams) => grams,
            Self::Volume(mm3) => printcost_core::units::grams_from_volume(mm3, density),
        }
    }

    /// Volume in mm³, converting a weight with `density` (g/cm³)
    pub fn volume_mm3(&self, density: f64) -> Option<f64> {
        match *self {
            Self::Volume(mm3) => Some(mm3),
            Self::Weight(grams) if density > 0.0 => {
                Some(grams / density * printcost_core::units::MM3_PER_CM3)
            }
            Self::Weight(_) => None,
        }
    }
}

fn malformed(reason: impl Into<String>) -> SlicingError {
    SlicingError::MalformedMetadata {
        reason: reason.into(),
    }
}

fn non_negative(value: &Value, field: &str) -> Result<f64, SlicingError> {
    let number = value
        .as_f64()
        .ok_or_else(|| malformed(format!("{} is not a number", field)))?;

    if number.is_finite() && number >= 0.0 {
        Ok(number)
    } else {
        Err(malformed(format!("{} is negative: {}", field, number)))
    }
}
