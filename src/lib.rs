//! # PrintCost
//!
//! Material weight and price estimation for 3D prints from triangle meshes.
//!
//! ## Architecture
//!
//! PrintCost is organized as a workspace with multiple crates:
//!
//! 1. **printcost-core** - Mesh and print-parameter data model, errors, events
//! 2. **printcost-estimator** - Mesh metrics, shell model, material and pricing
//! 3. **printcost-slicing** - External slicer seam with geometric fallback,
//!    debounced recalculation
//! 4. **printcost-settings** - Configuration files and validation
//! 5. **printcost** - This facade, which wires the crates together
//!
//! ## Example
//!
//! ```no_run
//! use printcost::{build_calculator, estimate_request, Config, MeshImporter};
//!
//! # async fn run(stl: Vec<u8>) -> anyhow::Result<()> {
//! let config = Config::default();
//! let mesh = MeshImporter::new().import_bytes(&stl)?;
//! let request = estimate_request(&config, mesh)?.with_mesh_bytes(stl);
//! let quote = build_calculator(&config, None).calculate(&request).await?;
//! println!("{}", config.format_price(quote.breakdown.total_cost));
//! # Ok(())
//! # }
//! ```

mod builder;

pub use builder::{build_calculator, build_coordinator, estimate_request, slicing_options};

pub use printcost_core::data;
pub use printcost_core::event_bus;
pub use printcost_core::units;

pub use printcost_core::{
    CostBreakdown, Error, EstimateRequest, EstimateSource, InfillFraction, LaborCostPolicy,
    LaborPolicy, MaterialId, MaterialLibrary, MaterialSpec, Mesh, MeshError, ParameterError,
    PrintProfile, ProfileLibrary, QualityTier, Quote, Result, ShellBlend, SlicingError,
    VolumeSplit, WeightEstimate, WeightEstimator,
};

pub use printcost_estimator::{
    estimate_cost, CostCalculator, GeometricEstimator, MaterialEstimator, MeshImporter,
    MeshMetrics, PricingEngine, ShellModel,
};

pub use printcost_slicing::{
    ExternalSlicingEstimator, NoOpSlicer, RecalcCoordinator, RecalcSnapshot, RecalcStatus,
    SlicerBackend, SlicerSettings, SlicingAdapter, SlicingOptions, SlicingRequest, SlicingState,
};

pub use printcost_settings::{Config, SettingsError, SettingsManager};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Pretty console output on stderr
/// - RUST_LOG environment variable support (INFO by default)
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}

/// Initialize logging as one JSON object per line, for log collectors
pub fn init_json_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().json().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}

fn env_filter() -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
}
