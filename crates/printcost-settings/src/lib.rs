//! PrintCost Settings Crate
//!
//! Handles application configuration: estimation defaults, slicer options,
//! recalculation timing, display preferences and custom materials.

pub mod config;
pub mod error;
pub mod manager;

pub use config::{
    Config, DisplaySettings, EstimationSettings, RecalculationSettings, SlicingSettings,
};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
pub use manager::SettingsManager;
