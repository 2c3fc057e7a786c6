//! Slicer backend seam
//!
//! The slicing engine itself is an external collaborator. Implementations
//! of [`SlicerBackend`] wrap whatever transport reaches it and return the
//! engine's raw metadata.

use crate::protocol::SlicingRequest;
use async_trait::async_trait;
use printcost_core::SlicingError;
use serde_json::Value;

/// External slicing engine
#[async_trait]
pub trait SlicerBackend: Send + Sync {
    /// Backend name for logs and events
    fn name(&self) -> &str;

    /// Slice the mesh and return the engine's metadata object
    async fn slice(&self, request: &SlicingRequest) -> Result<Value, SlicingError>;
}

/// Backend used when no slicer is configured; every call fails with
/// [`SlicingError::Unavailable`]
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpSlicer;

impl NoOpSlicer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SlicerBackend for NoOpSlicer {
    fn name(&self) -> &str {
        "none"
    }

    async fn slice(&self, _request: &SlicingRequest) -> Result<Value, SlicingError> {
        Err(SlicingError::Unavailable)
    }
}
