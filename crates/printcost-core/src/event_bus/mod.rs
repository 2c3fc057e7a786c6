//! # Event Bus Module
//!
//! Provides an in-process event bus for decoupled communication between the
//! estimation pipeline and whatever layer presents its results.
//!
//! ## Overview
//!
//! - Publishers emit typed events without knowing subscribers
//! - Subscribers filter and receive events of interest
//! - Supports both sync handlers and async broadcast receivers
//!
//! ## Usage
//!
//! ```rust,ignore
//! use printcost_core::event_bus::{event_bus, AppEvent, EstimateEvent, EventCategory, EventFilter};
//!
//! let subscription = event_bus().subscribe(
//!     EventFilter::Categories(vec![EventCategory::Estimate]),
//!     |event| {
//!         if let AppEvent::Estimate(EstimateEvent::Completed { total_cost, .. }) = event {
//!             println!("New total: {total_cost}");
//!         }
//!     },
//! );
//!
//! event_bus().unsubscribe(subscription);
//! ```

mod bus;
mod events;

pub use bus::*;
pub use events::*;
