//! Material estimation
//!
//! Combines the shell/interior split with the infill fraction into a
//! deposited volume and converts it to grams of filament. The shell is
//! always printed solid; only the interior honors infill.

use printcost_core::units;
use printcost_core::{InfillFraction, MaterialSpec, VolumeSplit};
use serde::{Deserialize, Serialize};

/// Material consumed by a print
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialUsage {
    pub volume_mm3: f64,
    pub weight_grams: f64,
    pub filament_length_mm: f64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialEstimator;

impl MaterialEstimator {
    pub fn new() -> Self {
        Self
    }

    /// `shell + interior × infill`
    pub fn deposited_volume(&self, split: &VolumeSplit, infill: InfillFraction) -> f64 {
        split.shell_volume_mm3 + split.interior_volume_mm3 * infill.value()
    }

    /// Grams of `material` needed for `volume_mm3`; zero for a non-positive
    /// or non-finite volume
    pub fn weight_grams(&self, volume_mm3: f64, material: &MaterialSpec) -> f64 {
        if volume_mm3.is_finite() && volume_mm3 > 0.0 {
            units::grams_from_volume(volume_mm3, material.density)
        } else {
            0.0
        }
    }

    pub fn estimate(
        &self,
        split: &VolumeSplit,
        infill: InfillFraction,
        material: &MaterialSpec,
    ) -> MaterialUsage {
        let volume_mm3 = self.deposited_volume(split, infill);
        let weight_grams = self.weight_grams(volume_mm3, material);
        let filament_length_mm = if weight_grams > 0.0 {
            units::filament_length_mm(volume_mm3, material.filament_diameter_mm)
        } else {
            0.0
        };

        MaterialUsage {
            volume_mm3,
            weight_grams,
            filament_length_mm,
        }
    }
}
