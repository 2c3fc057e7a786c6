//! # PrintCost Core
//!
//! Core types, traits, and utilities for PrintCost.
//! Provides the mesh and print-parameter data model, the error taxonomy,
//! the weight-estimation capability trait, and the application event bus.

pub mod data;
pub mod error;
pub mod estimator;
pub mod event_bus;
pub mod units;

pub use data::{
    estimate::{CostBreakdown, EstimateSource, Quote, VolumeSplit, WeightEstimate},
    infill::InfillFraction,
    labor::{LaborCostPolicy, LaborPolicy},
    materials::{MaterialId, MaterialLibrary, MaterialSpec},
    mesh::{BoundingBox, Mesh, Point3D, Triangle, Vector3D},
    profiles::{PrintProfile, ProfileLibrary, QualityTier, ShellBlend},
};

pub use error::{Error, MeshError, ParameterError, Result, SlicingError};

pub use estimator::{EstimateRequest, WeightEstimator};

// Re-export event bus for convenience
pub use event_bus::{
    event_bus, AppEvent, EstimateEvent, EventBus, EventBusConfig, EventCategory, EventFilter,
    MeshEvent, SlicingEvent, SubscriptionId,
};
