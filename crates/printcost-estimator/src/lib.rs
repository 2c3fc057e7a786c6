//! # PrintCost Estimator
//!
//! Geometric estimation of printed material and price.
//!
//! Data flows one way:
//! mesh → [`MeshMetrics`] → [`ShellModel`] → [`MaterialEstimator`] → [`PricingEngine`].
//! [`GeometricEstimator`] bundles the first three behind the
//! [`printcost_core::WeightEstimator`] trait and [`CostCalculator`] prices
//! whatever weight an estimator returns.

pub mod calculator;
pub mod import;
pub mod material;
pub mod mesh_metrics;
pub mod pipeline;
pub mod pricing;
pub mod shell;

pub use calculator::{estimate_cost, CostCalculator};
pub use import::MeshImporter;
pub use material::{MaterialEstimator, MaterialUsage};
pub use mesh_metrics::{signed_volume, surface_area, volume, MeshMetrics};
pub use pipeline::GeometricEstimator;
pub use pricing::PricingEngine;
pub use shell::{average_shell_thickness, ShellModel};
