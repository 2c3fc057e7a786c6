//! Shell model
//!
//! Splits a part's volume into a fully dense shell (perimeter walls plus
//! top and bottom skins) and a sparse interior.
//!
//! The average shell thickness is an empirical blend of wall and skin
//! thicknesses, not a physical derivation. The blend is selected through
//! [`ShellBlend`] so it can be retuned without touching the pipeline.

use printcost_core::{PrintProfile, ShellBlend, VolumeSplit};
use tracing::debug;

/// `(wall + top + bottom) / divisor` for the chosen blend
pub fn average_shell_thickness(profile: &PrintProfile, blend: ShellBlend) -> f64 {
    let sum = profile.wall_thickness() + profile.top_thickness() + profile.bottom_thickness();
    sum / blend.divisor()
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ShellModel {
    blend: ShellBlend,
}

impl ShellModel {
    pub fn new(blend: ShellBlend) -> Self {
        Self { blend }
    }

    pub fn blend(&self) -> ShellBlend {
        self.blend
    }

    pub fn average_thickness(&self, profile: &PrintProfile) -> f64 {
        average_shell_thickness(profile, self.blend)
    }

    /// Split `total_volume_mm3` into shell and interior.
    ///
    /// The shell never exceeds the part: a model whose estimated shell is
    /// larger than its volume is treated as fully solid. A zero or invalid
    /// volume yields an all-zero split.
    pub fn split(
        &self,
        total_volume_mm3: f64,
        surface_area_mm2: f64,
        profile: &PrintProfile,
    ) -> VolumeSplit {
        if !(total_volume_mm3.is_finite() && total_volume_mm3 > 0.0) {
            return VolumeSplit::zero();
        }

        let area = if surface_area_mm2.is_finite() {
            surface_area_mm2.max(0.0)
        } else {
            0.0
        };

        let thickness = self.average_thickness(profile);
        let shell = (area * thickness).max(0.0).min(total_volume_mm3);
        let interior = (total_volume_mm3 - shell).max(0.0);

        debug!(
            "Shell split: thickness {:.3} mm, shell {:.3} mm³, interior {:.3} mm³",
            thickness, shell, interior
        );

        VolumeSplit {
            total_volume_mm3,
            surface_area_mm2: area,
            shell_volume_mm3: shell,
            interior_volume_mm3: interior,
        }
    }
}
