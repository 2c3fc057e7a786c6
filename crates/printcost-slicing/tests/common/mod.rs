#![allow(dead_code)]

use async_trait::async_trait;
use printcost_core::{
    EstimateRequest, InfillFraction, MaterialSpec, Mesh, Point3D, QualityTier, SlicingError,
    Triangle,
};
use printcost_slicing::{SlicerBackend, SlicingRequest};
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

pub fn cube(s: f64) -> Mesh {
    let p = Point3D::new;
    let t = Triangle::new;
    Mesh::new(vec![
        t(p(0.0, 0.0, 0.0), p(0.0, s, 0.0), p(s, s, 0.0)),
        t(p(0.0, 0.0, 0.0), p(s, s, 0.0), p(s, 0.0, 0.0)),
        t(p(0.0, 0.0, s), p(s, 0.0, s), p(s, s, s)),
        t(p(0.0, 0.0, s), p(s, s, s), p(0.0, s, s)),
        t(p(0.0, 0.0, 0.0), p(s, 0.0, 0.0), p(s, 0.0, s)),
        t(p(0.0, 0.0, 0.0), p(s, 0.0, s), p(0.0, 0.0, s)),
        t(p(0.0, s, 0.0), p(0.0, s, s), p(s, s, s)),
        t(p(0.0, s, 0.0), p(s, s, s), p(s, s, 0.0)),
        t(p(0.0, 0.0, 0.0), p(0.0, 0.0, s), p(0.0, s, s)),
        t(p(0.0, 0.0, 0.0), p(0.0, s, s), p(0.0, s, 0.0)),
        t(p(s, 0.0, 0.0), p(s, s, 0.0), p(s, s, s)),
        t(p(s, 0.0, 0.0), p(s, s, s), p(s, 0.0, s)),
    ])
}

/// Baseline request: 10 mm cube, PLA, standard profile, given infill
pub fn cube_request(infill_percent: u8) -> EstimateRequest {
    EstimateRequest::new(
        Arc::new(cube(10.0)),
        QualityTier::Standard.profile(),
        MaterialSpec::new("pla", "PLA", 1.24, 700.0),
        InfillFraction::from_percent(infill_percent).unwrap(),
    )
    .with_mesh_bytes(vec![0u8; 84])
}

/// What a [`MockSlicer`] does when called
#[derive(Clone)]
pub enum Reply {
    Metadata(Value),
    Error(SlicingError),
    Hang,
}

pub struct MockSlicer {
    name: String,
    reply: Reply,
    pub calls: AtomicUsize,
}

impl MockSlicer {
    pub fn new(reply: Reply) -> Arc<Self> {
        Self::named("mock", reply)
    }

    /// Mock with its own backend name, for telling its events apart
    pub fn named(name: &str, reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            reply,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SlicerBackend for MockSlicer {
    fn name(&self) -> &str {
        &self.name
    }

    async fn slice(&self, _request: &SlicingRequest) -> Result<Value, SlicingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            Reply::Metadata(value) => Ok(value.clone()),
            Reply::Error(e) => Err(e.clone()),
            Reply::Hang => {
                tokio::time::sleep(Duration::from_secs(60)).await;
                Err(SlicingError::Unavailable)
            }
        }
    }
}
