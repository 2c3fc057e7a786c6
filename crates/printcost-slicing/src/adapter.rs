//! Slicing adapter
//!
//! One slicing attempt against a [`SlicerBackend`], bounded by a timeout.
//! The adapter moves `Idle → Slicing → Success | Failed` and never
//! retries; callers fall back to the geometric estimate on failure.

use crate::backend::SlicerBackend;
use crate::protocol::{FilamentUsage, SlicingRequest};
use parking_lot::RwLock;
use printcost_core::SlicingError;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Adapter state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlicingState {
    Idle,
    Slicing,
    Success,
    Failed,
}

impl SlicingState {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Success | Self::Failed)
    }
}

/// Marks the attempt failed if it is dropped mid-flight (e.g. aborted)
struct AttemptGuard<'a> {
    state: &'a RwLock<SlicingState>,
}

impl Drop for AttemptGuard<'_> {
    fn drop(&mut self) {
        let mut state = self.state.write();
        if *state == SlicingState::Slicing {
            *state = SlicingState::Failed;
        }
    }
}

pub struct SlicingAdapter {
    backend: Arc<dyn SlicerBackend>,
    timeout: Duration,
    state: RwLock<SlicingState>,
}

impl SlicingAdapter {
    pub fn new(backend: Arc<dyn SlicerBackend>, timeout: Duration) -> Self {
        Self {
            backend,
            timeout,
            state: RwLock::new(SlicingState::Idle),
        }
    }

    pub fn state(&self) -> SlicingState {
        *self.state.read()
    }

    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    /// Return a finished adapter to `Idle`
    pub fn reset(&self) {
        let mut state = self.state.write();
        if state.is_terminal() {
            *state = SlicingState::Idle;
        }
    }

    /// Make exactly one slicing attempt
    pub async fn slice(&self, request: &SlicingRequest) -> Result<FilamentUsage, SlicingError> {
        {
            let mut state = self.state.write();
            if *state == SlicingState::Slicing {
                return Err(SlicingError::Busy);
            }
            *state = SlicingState::Slicing;
        }
        let _guard = AttemptGuard { state: &self.state };

        debug!(
            "Slicing {} bytes on {} (timeout {:?})",
            request.mesh_bytes.len(),
            self.backend.name(),
            self.timeout
        );

        let outcome = match tokio::time::timeout(self.timeout, self.backend.slice(request)).await {
            Ok(Ok(metadata)) => FilamentUsage::from_metadata(&metadata),
            Ok(Err(e)) => Err(e),
            Err(_) => Err(SlicingError::Timeout {
                timeout_ms: self.timeout.as_millis() as u64,
            }),
        };

        let next = match &outcome {
            Ok(usage) => {
                debug!("Slicer reported {:?}", usage);
                SlicingState::Success
            }
            Err(e) => {
                warn!("Slicing on {} failed: {}", self.backend.name(), e);
                SlicingState::Failed
            }
        };
        *self.state.write() = next;

        outcome
    }
}

impl std::fmt::Debug for SlicingAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlicingAdapter")
            .field("backend", &self.backend.name())
            .field("timeout", &self.timeout)
            .field("state", &self.state())
            .finish()
    }
}
