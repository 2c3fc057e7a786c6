//! Recalculation coordinator
//!
//! Collapses bursts of input changes into one computation and makes sure a
//! stale computation never overwrites a newer one.
//!
//! Every [`RecalcCoordinator::trigger`] bumps a generation counter, aborts
//! the pending computation and schedules a new one after the debounce
//! delay. Results are published on a `watch` channel only while their
//! generation is still current. A failed computation keeps the last good
//! quote visible.

use parking_lot::Mutex;
use printcost_core::event_bus::{AppEvent, EstimateEvent};
use printcost_core::{emit, EstimateRequest, Quote};
use printcost_estimator::CostCalculator;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Quiet period before a recalculation starts
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Status of the most recent request
#[derive(Debug, Clone, PartialEq)]
pub enum RecalcStatus {
    /// Nothing requested yet
    Idle,
    /// Waiting out the debounce delay or computing
    Pending,
    Ready,
    /// Computation failed; the previous quote, if any, is still shown
    Failed { reason: String },
}

/// Published state
#[derive(Debug, Clone, PartialEq)]
pub struct RecalcSnapshot {
    pub generation: u64,
    pub status: RecalcStatus,
    /// Last successfully computed quote
    pub quote: Option<Quote>,
}

impl RecalcSnapshot {
    fn idle() -> Self {
        Self {
            generation: 0,
            status: RecalcStatus::Idle,
            quote: None,
        }
    }
}

pub struct RecalcCoordinator {
    calculator: Arc<CostCalculator>,
    debounce: Duration,
    generation: Arc<AtomicU64>,
    pending: Mutex<Option<(u64, JoinHandle<()>)>>,
    state: Arc<watch::Sender<RecalcSnapshot>>,
}

impl RecalcCoordinator {
    pub fn new(calculator: Arc<CostCalculator>) -> Self {
        Self::with_debounce(calculator, DEFAULT_DEBOUNCE)
    }

    pub fn with_debounce(calculator: Arc<CostCalculator>, debounce: Duration) -> Self {
        let (state, _) = watch::channel(RecalcSnapshot::idle());
        Self {
            calculator,
            debounce,
            generation: Arc::new(AtomicU64::new(0)),
            pending: Mutex::new(None),
            state: Arc::new(state),
        }
    }

    pub fn debounce(&self) -> Duration {
        self.debounce
    }

    /// Generation of the newest request
    pub fn current_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    pub fn subscribe(&self) -> watch::Receiver<RecalcSnapshot> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> RecalcSnapshot {
        self.state.borrow().clone()
    }

    /// Schedule a recalculation for `request`, superseding any pending one.
    ///
    /// Must be called from within a Tokio runtime. Returns the generation
    /// assigned to this request.
    pub fn trigger(&self, request: EstimateRequest) -> u64 {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let mut pending = self.pending.lock();
        if let Some((previous, handle)) = pending.take() {
            if !handle.is_finished() {
                handle.abort();
                debug!("Estimate #{} superseded by #{}", previous, generation);
                emit!(AppEvent::Estimate(EstimateEvent::Superseded {
                    generation: previous,
                }));
            }
        }

        self.state.send_modify(|snapshot| {
            snapshot.generation = generation;
            snapshot.status = RecalcStatus::Pending;
        });
        emit!(AppEvent::Estimate(EstimateEvent::Scheduled { generation }));

        let calculator = self.calculator.clone();
        let current = self.generation.clone();
        let state = self.state.clone();
        let debounce = self.debounce;

        let handle = tokio::spawn(async move {
            tokio::time::sleep(debounce).await;
            if current.load(Ordering::SeqCst) != generation {
                return;
            }

            let outcome = calculator.calculate(&request).await;

            let published = state.send_if_modified(|snapshot| {
                if current.load(Ordering::SeqCst) != generation {
                    return false;
                }
                match &outcome {
                    Ok(quote) => {
                        snapshot.status = RecalcStatus::Ready;
                        snapshot.quote = Some(quote.clone());
                    }
                    Err(e) => {
                        snapshot.status = RecalcStatus::Failed {
                            reason: e.to_string(),
                        };
                    }
                }
                true
            });

            if !published {
                debug!("Discarding stale estimate #{}", generation);
                emit!(AppEvent::Estimate(EstimateEvent::Superseded { generation }));
                return;
            }

            match outcome {
                Ok(quote) => emit!(AppEvent::Estimate(EstimateEvent::Completed {
                    generation,
                    source: quote.source,
                    total_cost: quote.breakdown.total_cost,
                })),
                Err(e) => {
                    warn!("Estimate #{} failed: {}", generation, e);
                    emit!(AppEvent::Estimate(EstimateEvent::Failed {
                        generation,
                        reason: e.to_string(),
                    }));
                }
            }
        });

        *pending = Some((generation, handle));
        generation
    }

    /// Abort the pending computation, if any
    ///
    /// The snapshot leaves `Pending`: it shows the last quote as `Ready`, or
    /// `Idle` when nothing has been computed yet.
    pub fn cancel(&self) {
        let mut pending = self.pending.lock();
        let Some((cancelled, handle)) = pending.take() else {
            return;
        };
        if handle.is_finished() {
            return;
        }
        handle.abort();

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.send_if_modified(|snapshot| {
            if snapshot.status != RecalcStatus::Pending {
                return false;
            }
            snapshot.generation = generation;
            snapshot.status = if snapshot.quote.is_some() {
                RecalcStatus::Ready
            } else {
                RecalcStatus::Idle
            };
            true
        });

        debug!("Estimate #{} cancelled", cancelled);
        emit!(AppEvent::Estimate(EstimateEvent::Superseded {
            generation: cancelled,
        }));
    }
}

impl Drop for RecalcCoordinator {
    fn drop(&mut self) {
        if let Some((_, handle)) = self.pending.get_mut().take() {
            handle.abort();
        }
    }
}

impl std::fmt::Debug for RecalcCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecalcCoordinator")
            .field("calculator", &self.calculator)
            .field("debounce", &self.debounce)
            .field("generation", &self.current_generation())
            .finish()
    }
}
