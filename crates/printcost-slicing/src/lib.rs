//! # PrintCost Slicing
//!
//! Optional higher-fidelity weight from an external slicing engine, and
//! the coordinator that debounces recalculation requests.
//!
//! - [`protocol`]: settings sent to the slicer and metadata parsing
//! - [`backend`]: the [`SlicerBackend`] collaborator seam
//! - [`adapter`]: single-attempt slicing with a timeout
//! - [`estimator`]: [`ExternalSlicingEstimator`], which always falls back
//!   to the geometric estimate when slicing fails
//! - [`coordinator`]: [`RecalcCoordinator`], debounce plus stale-result
//!   suppression

pub mod adapter;
pub mod backend;
pub mod coordinator;
pub mod estimator;
pub mod protocol;

pub use adapter::{SlicingAdapter, SlicingState};
pub use backend::{NoOpSlicer, SlicerBackend};
pub use coordinator::{RecalcCoordinator, RecalcSnapshot, RecalcStatus, DEFAULT_DEBOUNCE};
pub use estimator::{ExternalSlicingEstimator, SlicingOptions, DEFAULT_SLICING_TIMEOUT};
pub use protocol::{FilamentUsage, SlicerSettings, SlicingRequest};
