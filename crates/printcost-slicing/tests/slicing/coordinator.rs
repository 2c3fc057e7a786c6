use crate::common::cube_request;
use async_trait::async_trait;
use printcost_core::{
    Error, EstimateRequest, EstimateSource, Result, WeightEstimate, WeightEstimator,
};
use printcost_estimator::{CostCalculator, PricingEngine};
use printcost_slicing::{RecalcCoordinator, RecalcStatus, DEFAULT_DEBOUNCE};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Reports the infill percentage as the weight so results are traceable.
/// 10% infill is slow, 99% infill fails.
struct Scripted {
    calls: AtomicUsize,
}

#[async_trait]
impl WeightEstimator for Scripted {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn estimate_weight(&self, request: &EstimateRequest) -> Result<WeightEstimate> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let percent = request.infill.as_percent();

        if percent == 10 {
            tokio::time::sleep(Duration::from_millis(300)).await;
        }
        if percent == 99 {
            return Err(Error::other("estimator crashed"));
        }

        Ok(WeightEstimate {
            weight_grams: f64::from(percent),
            material_volume_mm3: None,
            split: None,
            source: EstimateSource::Geometric,
        })
    }
}

fn coordinator(debounce: Duration) -> (RecalcCoordinator, Arc<Scripted>) {
    let estimator = Arc::new(Scripted {
        calls: AtomicUsize::new(0),
    });
    let calculator = CostCalculator::new(estimator.clone(), PricingEngine::default());
    (
        RecalcCoordinator::with_debounce(Arc::new(calculator), debounce),
        estimator,
    )
}

fn shown_weight(coordinator: &RecalcCoordinator) -> Option<f64> {
    coordinator
        .snapshot()
        .quote
        .map(|q| q.breakdown.weight_grams)
}

// All timing tests run on a paused clock: sleeps complete in virtual time,
// so debounce windows are exact regardless of machine load.

#[tokio::test(start_paused = true)]
async fn test_default_debounce() {
    let (coordinator, _) = coordinator(DEFAULT_DEBOUNCE);
    assert_eq!(coordinator.debounce(), Duration::from_millis(300));
    assert_eq!(coordinator.snapshot().status, RecalcStatus::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_burst_collapses_into_one_computation() {
    let (coordinator, estimator) = coordinator(Duration::from_millis(50));

    for percent in [0, 20, 30, 40, 50] {
        coordinator.trigger(cube_request(percent));
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    assert_eq!(coordinator.snapshot().status, RecalcStatus::Pending);
    assert_eq!(estimator.calls.load(Ordering::SeqCst), 0);

    tokio::time::sleep(Duration::from_millis(300)).await;

    assert_eq!(estimator.calls.load(Ordering::SeqCst), 1);
    let snapshot = coordinator.snapshot();
    assert_eq!(snapshot.generation, 5);
    assert_eq!(snapshot.status, RecalcStatus::Ready);
    assert_eq!(shown_weight(&coordinator), Some(50.0));
}

#[tokio::test(start_paused = true)]
async fn test_quiet_period_is_respected() {
    let (coordinator, estimator) = coordinator(Duration::from_millis(50));

    coordinator.trigger(cube_request(20));
    tokio::time::sleep(Duration::from_millis(49)).await;
    assert_eq!(estimator.calls.load(Ordering::SeqCst), 0);

    tokio::time::sleep(Duration::from_millis(10)).await;
    assert_eq!(estimator.calls.load(Ordering::SeqCst), 1);
    assert_eq!(shown_weight(&coordinator), Some(20.0));
}

#[tokio::test(start_paused = true)]
async fn test_stale_result_never_overwrites_newer() {
    let (coordinator, _) = coordinator(Duration::from_millis(0));
    let mut receiver = coordinator.subscribe();

    // Slow request is in flight when the fast one arrives
    coordinator.trigger(cube_request(10));
    tokio::time::sleep(Duration::from_millis(50)).await;
    let latest = coordinator.trigger(cube_request(20));

    tokio::time::sleep(Duration::from_millis(600)).await;

    assert_eq!(coordinator.current_generation(), latest);
    assert_eq!(shown_weight(&coordinator), Some(20.0));
    assert_eq!(receiver.borrow_and_update().generation, latest);
}

#[tokio::test(start_paused = true)]
async fn test_failure_keeps_last_good_quote() {
    let (coordinator, _) = coordinator(Duration::from_millis(10));

    coordinator.trigger(cube_request(20));
    tokio::time::sleep(Duration::from_millis(150)).await;
    assert_eq!(shown_weight(&coordinator), Some(20.0));

    coordinator.trigger(cube_request(99));
    tokio::time::sleep(Duration::from_millis(150)).await;

    let snapshot = coordinator.snapshot();
    match &snapshot.status {
        RecalcStatus::Failed { reason } => assert!(reason.contains("Calculation failed")),
        other => panic!("expected failure, got {:?}", other),
    }
    assert_eq!(shown_weight(&coordinator), Some(20.0));

    // Next input change recovers
    coordinator.trigger(cube_request(50));
    tokio::time::sleep(Duration::from_millis(150)).await;
    assert_eq!(coordinator.snapshot().status, RecalcStatus::Ready);
    assert_eq!(shown_weight(&coordinator), Some(50.0));
}

#[tokio::test(start_paused = true)]
async fn test_cancel_discards_pending() {
    let (coordinator, estimator) = coordinator(Duration::from_millis(50));
    let mut receiver = coordinator.subscribe();

    let cancelled = coordinator.trigger(cube_request(20));
    assert_eq!(receiver.borrow_and_update().status, RecalcStatus::Pending);

    coordinator.cancel();
    assert!(receiver.has_changed().unwrap());
    tokio::time::sleep(Duration::from_millis(150)).await;

    assert_eq!(estimator.calls.load(Ordering::SeqCst), 0);
    assert_eq!(shown_weight(&coordinator), None);

    let snapshot = coordinator.snapshot();
    assert_eq!(snapshot.status, RecalcStatus::Idle);
    assert!(snapshot.generation > cancelled);
    assert_eq!(snapshot.generation, coordinator.current_generation());
}

#[tokio::test(start_paused = true)]
async fn test_cancel_restores_last_quote() {
    let (coordinator, estimator) = coordinator(Duration::from_millis(50));

    coordinator.trigger(cube_request(20));
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(coordinator.snapshot().status, RecalcStatus::Ready);

    // Slow computation already running when cancelled
    coordinator.trigger(cube_request(10));
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(coordinator.snapshot().status, RecalcStatus::Pending);
    coordinator.cancel();

    tokio::time::sleep(Duration::from_millis(500)).await;

    assert_eq!(estimator.calls.load(Ordering::SeqCst), 2);
    assert_eq!(coordinator.snapshot().status, RecalcStatus::Ready);
    assert_eq!(shown_weight(&coordinator), Some(20.0));

    // Cancelling with nothing pending leaves the snapshot alone
    let before = coordinator.snapshot();
    coordinator.cancel();
    assert_eq!(coordinator.snapshot(), before);
}
