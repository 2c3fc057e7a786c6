//! Print profiles
//!
//! Quality tiers fixing layer height, wall count, line width and top/bottom
//! layer counts. Profiles are constant tables selected by the user; nothing
//! here is derived from the mesh.

use crate::error::ParameterError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Print quality tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityTier {
    /// 0.28 mm layers, fastest
    Low,
    /// 0.20 mm layers
    Standard,
    /// 0.16 mm layers
    Dynamic,
    /// 0.12 mm layers, finest
    Super,
}

impl QualityTier {
    pub const ALL: [QualityTier; 4] = [
        QualityTier::Low,
        QualityTier::Standard,
        QualityTier::Dynamic,
        QualityTier::Super,
    ];

    /// Built-in profile for this tier
    pub fn profile(self) -> PrintProfile {
        match self {
            Self::Low => PrintProfile::new("low", 0.28, 2, 0.4, 3, 3, 40.0),
            Self::Standard => PrintProfile::new("standard", 0.20, 2, 0.4, 4, 4, 50.0),
            Self::Dynamic => PrintProfile::new("dynamic", 0.16, 2, 0.4, 5, 5, 65.0),
            Self::Super => PrintProfile::new("super", 0.12, 2, 0.4, 7, 7, 80.0),
        }
    }
}

impl Default for QualityTier {
    fn default() -> Self {
        Self::Standard
    }
}

impl fmt::Display for QualityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Standard => write!(f, "standard"),
            Self::Dynamic => write!(f, "dynamic"),
            Self::Super => write!(f, "super"),
        }
    }
}

impl FromStr for QualityTier {
    type Err = ParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "standard" | "normal" => Ok(Self::Standard),
            "dynamic" => Ok(Self::Dynamic),
            "super" | "fine" => Ok(Self::Super),
            _ => Err(ParameterError::UnknownProfile {
                name: s.to_string(),
            }),
        }
    }
}

/// Named print parameter set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrintProfile {
    /// Profile name
    pub name: String,
    /// Layer height in mm
    pub layer_height: f64,
    /// Number of perimeter walls
    pub wall_count: u32,
    /// Nozzle or extrusion line width in mm
    pub line_width: f64,
    /// Solid layers on top
    pub top_layers: u32,
    /// Solid layers on the bottom
    pub bottom_layers: u32,
    /// Labor cost attached to this profile (used by the tiered policy)
    pub labor_cost: f64,
}

impl PrintProfile {
    pub fn new(
        name: &str,
        layer_height: f64,
        wall_count: u32,
        line_width: f64,
        top_layers: u32,
        bottom_layers: u32,
        labor_cost: f64,
    ) -> Self {
        Self {
            name: name.to_string(),
            layer_height,
            wall_count,
            line_width,
            top_layers,
            bottom_layers,
            labor_cost,
        }
    }

    pub fn validate(&self) -> Result<(), ParameterError> {
        if !(self.layer_height.is_finite() && self.layer_height > 0.0) {
            return Err(ParameterError::InvalidLayerHeight {
                value: self.layer_height,
            });
        }

        if self.wall_count == 0 {
            return Err(ParameterError::ZeroWallCount);
        }

        if !(self.line_width.is_finite() && self.line_width > 0.0) {
            return Err(ParameterError::InvalidLineWidth {
                value: self.line_width,
            });
        }

        if !(self.labor_cost.is_finite() && self.labor_cost >= 0.0) {
            return Err(ParameterError::InvalidLaborCost {
                value: self.labor_cost,
            });
        }

        Ok(())
    }

    /// Combined perimeter thickness: walls × line width
    pub fn wall_thickness(&self) -> f64 {
        f64::from(self.wall_count) * self.line_width
    }

    pub fn top_thickness(&self) -> f64 {
        f64::from(self.top_layers) * self.layer_height
    }

    pub fn bottom_thickness(&self) -> f64 {
        f64::from(self.bottom_layers) * self.layer_height
    }
}

impl Default for PrintProfile {
    fn default() -> Self {
        QualityTier::default().profile()
    }
}

/// How wall and top/bottom thicknesses are blended into one average shell
/// thickness. This is a tunable heuristic, not a physical law.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShellBlend {
    /// `(wall + top + bottom) / 2`
    #[default]
    HalfSum,
    /// `(wall + top + bottom) / 3`
    ThirdSum,
}

impl ShellBlend {
    pub fn divisor(self) -> f64 {
        match self {
            Self::HalfSum => 2.0,
            Self::ThirdSum => 3.0,
        }
    }
}

/// Collection of print profiles keyed by tier
#[derive(Debug, Clone)]
pub struct ProfileLibrary {
    profiles: Vec<(QualityTier, PrintProfile)>,
}

impl ProfileLibrary {
    /// Library holding the four built-in tiers
    pub fn standard() -> Self {
        Self {
            profiles: QualityTier::ALL.iter().map(|t| (*t, t.profile())).collect(),
        }
    }

    pub fn get(&self, tier: QualityTier) -> Option<&PrintProfile> {
        self.profiles
            .iter()
            .find(|(t, _)| *t == tier)
            .map(|(_, p)| p)
    }

    /// Look a profile up by tier name
    pub fn find(&self, name: &str) -> Result<&PrintProfile, ParameterError> {
        let tier: QualityTier = name.parse()?;
        self.get(tier).ok_or_else(|| ParameterError::UnknownProfile {
            name: name.to_string(),
        })
    }

    /// Replace the profile of a tier
    pub fn set(&mut self, tier: QualityTier, profile: PrintProfile) {
        match self.profiles.iter_mut().find(|(t, _)| *t == tier) {
            Some(entry) => entry.1 = profile,
            None => self.profiles.push((tier, profile)),
        }
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl Default for ProfileLibrary {
    fn default() -> Self {
        Self::standard()
    }
}
