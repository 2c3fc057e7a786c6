//! Materials Database module
//!
//! This module provides:
//! - Filament material specifications (density, price per kilogram)
//! - Material library management
//! - Custom material support

use crate::error::ParameterError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Filament diameter assumed when a material does not specify one (mm)
pub const DEFAULT_FILAMENT_DIAMETER_MM: f64 = 1.75;

/// Shared price per kilogram of the standard filaments
pub const STANDARD_PRICE_PER_KG: f64 = 700.0;

/// Material identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct MaterialId(pub String);

impl std::fmt::Display for MaterialId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn default_filament_diameter() -> f64 {
    DEFAULT_FILAMENT_DIAMETER_MM
}

/// Printing material definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialSpec {
    /// Unique material identifier
    pub id: MaterialId,
    /// Display name
    pub name: String,
    /// Density in g/cm³
    pub density: f64,
    /// Price per kilogram in the configured currency
    pub price_per_kg: f64,
    /// Filament diameter in mm
    #[serde(default = "default_filament_diameter")]
    pub filament_diameter_mm: f64,
    /// Whether this is a user-defined custom material
    #[serde(default)]
    pub custom: bool,
}

impl MaterialSpec {
    /// Create a new material with the standard filament diameter
    pub fn new(id: &str, name: &str, density: f64, price_per_kg: f64) -> Self {
        Self {
            id: MaterialId(id.to_string()),
            name: name.to_string(),
            density,
            price_per_kg,
            filament_diameter_mm: DEFAULT_FILAMENT_DIAMETER_MM,
            custom: false,
        }
    }

    /// Check density, price and filament diameter
    pub fn validate(&self) -> Result<(), ParameterError> {
        if !(self.density.is_finite() && self.density > 0.0) {
            return Err(ParameterError::InvalidDensity {
                material: self.name.clone(),
                value: self.density,
            });
        }

        if !(self.price_per_kg.is_finite() && self.price_per_kg >= 0.0) {
            return Err(ParameterError::InvalidPrice {
                material: self.name.clone(),
                value: self.price_per_kg,
            });
        }

        if !(self.filament_diameter_mm.is_finite() && self.filament_diameter_mm > 0.0) {
            return Err(ParameterError::InvalidFilamentDiameter {
                material: self.name.clone(),
                value: self.filament_diameter_mm,
            });
        }

        Ok(())
    }

    /// Price of one gram
    pub fn price_per_gram(&self) -> f64 {
        self.price_per_kg / 1000.0
    }
}

/// Materials library - manages collection of materials
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialLibrary {
    /// Collection of materials by ID
    materials: HashMap<MaterialId, MaterialSpec>,
}

impl MaterialLibrary {
    /// Create a new empty library
    pub fn new() -> Self {
        Self {
            materials: HashMap::new(),
        }
    }

    /// Add a material to the library, replacing any material with the same ID
    pub fn add_material(&mut self, material: MaterialSpec) {
        self.materials.insert(material.id.clone(), material);
    }

    /// Get a material by ID
    pub fn get_material(&self, id: &MaterialId) -> Option<&MaterialSpec> {
        self.materials.get(id)
    }

    /// Look a material up by ID or display name, ignoring case
    ///
    /// An exact ID wins, then a case-insensitive ID, then a display name.
    /// When several materials share a name the smallest ID is returned.
    pub fn find(&self, name: &str) -> Result<&MaterialSpec, ParameterError> {
        let trimmed = name.trim();
        if let Some(material) = self.materials.get(&MaterialId(trimmed.to_string())) {
            return Ok(material);
        }

        let query = trimmed.to_lowercase();
        self.first_by_id(|m| m.id.0.to_lowercase() == query)
            .or_else(|| self.first_by_id(|m| m.name.to_lowercase() == query))
            .ok_or_else(|| ParameterError::UnknownMaterial {
                name: name.to_string(),
            })
    }

    fn first_by_id(&self, predicate: impl Fn(&MaterialSpec) -> bool) -> Option<&MaterialSpec> {
        self.materials
            .values()
            .filter(|m| predicate(*m))
            .min_by(|a, b| a.id.0.cmp(&b.id.0))
    }

    /// Remove a material from the library
    pub fn remove_material(&mut self, id: &MaterialId) -> Option<MaterialSpec> {
        self.materials.remove(id)
    }

    /// Get all materials, sorted by name
    pub fn get_all_materials(&self) -> Vec<&MaterialSpec> {
        let mut all: Vec<&MaterialSpec> = self.materials.values().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        all
    }

    /// Get the number of materials in the library
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// Check if library is empty
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

impl Default for MaterialLibrary {
    fn default() -> Self {
        Self::new()
    }
}

/// Initialize the standard materials library (PLA, ABS, PETG)
pub fn init_standard_library() -> MaterialLibrary {
    let mut library = MaterialLibrary::new();

    library.add_material(MaterialSpec::new("pla", "PLA", 1.24, STANDARD_PRICE_PER_KG));
    library.add_material(MaterialSpec::new("abs", "ABS", 1.04, STANDARD_PRICE_PER_KG));
    library.add_material(MaterialSpec::new("petg", "PETG", 1.27, STANDARD_PRICE_PER_KG));

    library
}
