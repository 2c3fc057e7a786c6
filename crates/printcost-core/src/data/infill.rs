//! Infill fraction
//!
//! Interior fill density as a fraction in `[0, 1]`. User interfaces speak in
//! whole percentages, so conversions to and from 0–100 are provided.

use crate::error::ParameterError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Common infill presets in percent
pub const INFILL_PRESETS: [u8; 5] = [0, 10, 20, 50, 100];

/// Fractional density of the interior fill
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct InfillFraction(f64);

impl InfillFraction {
    /// Hollow interior
    pub const EMPTY: InfillFraction = InfillFraction(0.0);
    /// Fully solid interior
    pub const SOLID: InfillFraction = InfillFraction(1.0);

    pub fn new(value: f64) -> Result<Self, ParameterError> {
        if value.is_finite() && (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ParameterError::InfillOutOfRange { value })
        }
    }

    /// Build from a whole percentage (0–100)
    pub fn from_percent(percent: u8) -> Result<Self, ParameterError> {
        Self::new(f64::from(percent) / 100.0)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Nearest whole percentage
    pub fn as_percent(self) -> u8 {
        (self.0 * 100.0).round() as u8
    }
}

impl Default for InfillFraction {
    fn default() -> Self {
        Self(0.2)
    }
}

impl TryFrom<f64> for InfillFraction {
    type Error = ParameterError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<InfillFraction> for f64 {
    fn from(infill: InfillFraction) -> Self {
        infill.0
    }
}

impl fmt::Display for InfillFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percent())
    }
}
