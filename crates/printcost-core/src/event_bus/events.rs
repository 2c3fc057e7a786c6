//! Event type definitions for the event bus.
//!
//! Events are cloneable and serializable for logging/replay.

use serde::{Deserialize, Serialize};

use crate::data::estimate::EstimateSource;

/// Root event enum for all application events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AppEvent {
    /// Mesh load events
    Mesh(MeshEvent),
    /// Estimate lifecycle events
    Estimate(EstimateEvent),
    /// External slicer events
    Slicing(SlicingEvent),
}

impl AppEvent {
    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            AppEvent::Mesh(_) => EventCategory::Mesh,
            AppEvent::Estimate(_) => EventCategory::Estimate,
            AppEvent::Slicing(_) => EventCategory::Slicing,
        }
    }

    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            AppEvent::Mesh(e) => e.description(),
            AppEvent::Estimate(e) => e.description(),
            AppEvent::Slicing(e) => e.description(),
        }
    }
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// Mesh load events.
    Mesh,
    /// Estimate lifecycle events.
    Estimate,
    /// External slicer events.
    Slicing,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::Mesh => write!(f, "Mesh"),
            EventCategory::Estimate => write!(f, "Estimate"),
            EventCategory::Slicing => write!(f, "Slicing"),
        }
    }
}

/// Mesh-related events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum MeshEvent {
    /// A new mesh replaced the current one.
    Loaded {
        /// Number of triangles decoded.
        triangles: usize,
        /// Enclosed volume in mm³.
        volume_mm3: f64,
    },
    /// Decoding a mesh failed.
    Rejected {
        /// Why the mesh was rejected.
        reason: String,
    },
}

impl MeshEvent {
    /// Get a short description of this event
    pub fn description(&self) -> String {
        match self {
            MeshEvent::Loaded {
                triangles,
                volume_mm3,
            } => format!("Mesh loaded: {triangles} triangles, {volume_mm3:.2} mm³"),
            MeshEvent::Rejected { reason } => format!("Mesh rejected: {reason}"),
        }
    }
}

/// Estimate lifecycle events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EstimateEvent {
    /// A recalculation was scheduled.
    Scheduled {
        /// Generation number of the request.
        generation: u64,
    },
    /// A newer request replaced this one before its result was published.
    Superseded {
        /// Generation number of the discarded request.
        generation: u64,
    },
    /// A result was published.
    Completed {
        /// Generation number of the request.
        generation: u64,
        /// Path that produced the weight.
        source: EstimateSource,
        /// Unrounded total cost.
        total_cost: f64,
    },
    /// The calculation failed; previously published results stand.
    Failed {
        /// Generation number of the request.
        generation: u64,
        /// What went wrong.
        reason: String,
    },
}

impl EstimateEvent {
    /// Get a short description of this event
    pub fn description(&self) -> String {
        match self {
            EstimateEvent::Scheduled { generation } => {
                format!("Estimate #{generation} scheduled")
            }
            EstimateEvent::Superseded { generation } => {
                format!("Estimate #{generation} superseded")
            }
            EstimateEvent::Completed {
                generation,
                source,
                total_cost,
            } => format!("Estimate #{generation} completed ({source}): {total_cost:.2}"),
            EstimateEvent::Failed { generation, reason } => {
                format!("Estimate #{generation} failed: {reason}")
            }
        }
    }
}

/// External slicer events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SlicingEvent {
    /// Mesh submitted to the slicer.
    Started {
        /// Backend name.
        backend: String,
    },
    /// Slicer returned a usable weight.
    Succeeded {
        /// Backend name.
        backend: String,
        /// Reported weight in grams.
        weight_grams: f64,
    },
    /// Slicer failed; the geometric estimate was used instead.
    FellBack {
        /// Backend name.
        backend: String,
        /// Why slicing failed.
        reason: String,
    },
}

impl SlicingEvent {
    /// Get a short description of this event
    pub fn description(&self) -> String {
        match self {
            SlicingEvent::Started { backend } => format!("Slicing started on {backend}"),
            SlicingEvent::Succeeded {
                backend,
                weight_grams,
            } => format!("Slicing on {backend} succeeded: {weight_grams:.2} g"),
            SlicingEvent::FellBack { backend, reason } => {
                format!("Slicing on {backend} failed, using geometric estimate: {reason}")
            }
        }
    }
}
