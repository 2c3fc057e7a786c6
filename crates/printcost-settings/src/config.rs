//! Configuration
//!
//! Settings are loaded from `.toml` or `.json` files. Every section has
//! defaults, so a file only needs the values it changes. Nothing computed
//! is ever written here; results are recomputed from these inputs.

use crate::error::{ConfigError, SettingsError, SettingsResult};
use printcost_core::data::infill::INFILL_PRESETS;
use printcost_core::data::materials::init_standard_library;
use printcost_core::units;
use printcost_core::{
    InfillFraction, LaborCostPolicy, MaterialLibrary, MaterialSpec, PrintProfile, QualityTier,
    ShellBlend,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Upper bound accepted for the debounce delay
const MAX_DEBOUNCE_MS: u64 = 10_000;

/// Estimation defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimationSettings {
    /// Material selected at startup (id or name)
    pub default_material: String,
    /// Quality tier selected at startup
    pub default_quality: QualityTier,
    /// Infill percentage selected at startup
    pub default_infill_percent: u8,
    /// Blend used for the average shell thickness
    pub shell_blend: ShellBlend,
    /// Labor cost strategy
    pub labor: LaborCostPolicy,
}

impl Default for EstimationSettings {
    fn default() -> Self {
        Self {
            default_material: "PLA".to_string(),
            default_quality: QualityTier::Standard,
            default_infill_percent: 20,
            shell_blend: ShellBlend::HalfSum,
            labor: LaborCostPolicy::default(),
        }
    }
}

/// External slicer options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlicingSettings {
    /// Consult the slicer when one is available
    pub enabled: bool,
    /// Give up on the slicer after this many milliseconds
    pub timeout_ms: u64,
    pub infill_pattern: String,
    /// Print speed in mm/s
    pub print_speed: f64,
}

impl Default for SlicingSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            timeout_ms: 30_000,
            infill_pattern: "grid".to_string(),
            print_speed: 60.0,
        }
    }
}

/// Recalculation timing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecalculationSettings {
    /// Quiet period after the last input change, in milliseconds
    pub debounce_ms: u64,
}

impl Default for RecalculationSettings {
    fn default() -> Self {
        Self { debounce_ms: 300 }
    }
}

/// Display preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub currency_symbol: String,
    /// Put the symbol after the amount
    pub symbol_after_amount: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            currency_symbol: "₺".to_string(),
            symbol_after_amount: true,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub estimation: EstimationSettings,
    #[serde(default)]
    pub slicing: SlicingSettings,
    #[serde(default)]
    pub recalculation: RecalculationSettings,
    #[serde(default)]
    pub display: DisplaySettings,
    /// Materials added to or overriding the standard library
    #[serde(default)]
    pub custom_materials: Vec<MaterialSpec>,
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> SettingsResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(ConfigError::UnsupportedFormat(other.unwrap_or("").to_string()).into()),
    }
}

impl Config {
    /// Create default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }

    /// Validate config
    pub fn validate(&self) -> SettingsResult<()> {
        if self.estimation.default_infill_percent > 100 {
            return Err(ConfigError::ValueOutOfRange {
                key: "estimation.default_infill_percent".to_string(),
                value: self.estimation.default_infill_percent.to_string(),
            }
            .into());
        }

        self.estimation
            .labor
            .validate()
            .map_err(|e| SettingsError::invalid("estimation.labor", e))?;

        if self.slicing.timeout_ms == 0 {
            return Err(SettingsError::invalid("slicing.timeout_ms", "must be > 0"));
        }

        if !(self.slicing.print_speed.is_finite() && self.slicing.print_speed > 0.0) {
            return Err(SettingsError::invalid("slicing.print_speed", "must be > 0"));
        }

        if self.recalculation.debounce_ms > MAX_DEBOUNCE_MS {
            return Err(ConfigError::ValueOutOfRange {
                key: "recalculation.debounce_ms".to_string(),
                value: self.recalculation.debounce_ms.to_string(),
            }
            .into());
        }

        for material in &self.custom_materials {
            material
                .validate()
                .map_err(|e| SettingsError::invalid("custom_materials", e))?;
        }

        self.default_material()?;

        Ok(())
    }

    /// Standard materials plus the configured custom ones
    pub fn material_library(&self) -> MaterialLibrary {
        let mut library = init_standard_library();
        for material in &self.custom_materials {
            let mut material = material.clone();
            material.custom = true;
            library.add_material(material);
        }
        library
    }

    /// The configured default material
    pub fn default_material(&self) -> SettingsResult<MaterialSpec> {
        self.material_library()
            .find(&self.estimation.default_material)
            .cloned()
            .map_err(|_| {
                ConfigError::UnknownMaterial(self.estimation.default_material.clone()).into()
            })
    }

    pub fn default_profile(&self) -> PrintProfile {
        self.estimation.default_quality.profile()
    }

    pub fn default_infill(&self) -> SettingsResult<InfillFraction> {
        InfillFraction::from_percent(self.estimation.default_infill_percent)
            .map_err(|e| SettingsError::invalid("estimation.default_infill_percent", e))
    }

    /// Infill choices offered to the user, in percent
    pub fn infill_presets(&self) -> &'static [u8] {
        &INFILL_PRESETS
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.recalculation.debounce_ms)
    }

    pub fn slicing_timeout(&self) -> Duration {
        Duration::from_millis(self.slicing.timeout_ms)
    }

    /// Format a currency amount with the configured symbol
    pub fn format_price(&self, amount: f64) -> String {
        let amount = units::format_currency(amount);
        if self.display.symbol_after_amount {
            format!("{} {}", amount, self.display.currency_symbol)
        } else {
            format!("{}{}", self.display.currency_symbol, amount)
        }
    }
}
