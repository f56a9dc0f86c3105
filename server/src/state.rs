//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! sample records are built once at startup and never mutated, so handlers
//! share them through `Arc` without locking.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::sync::Arc;

use shop::{Customer, RepairJob, sample};

#[derive(Clone)]
pub struct AppState {
    pub jobs: Arc<[RepairJob]>,
    pub customers: Arc<[Customer]>,
}

impl AppState {
    #[must_use]
    pub fn new(jobs: Vec<RepairJob>, customers: Vec<Customer>) -> Self {
        Self { jobs: jobs.into(), customers: customers.into() }
    }

    /// State seeded with the shop's sample jobs and customers.
    #[must_use]
    pub fn from_samples() -> Self {
        Self::new(sample::jobs(), sample::customers())
    }
}
