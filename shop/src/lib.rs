//! Repair-shop domain model for ScooterPro.
//!
//! This crate is UI-framework agnostic: it owns the customer and job records,
//! the hardcoded sample data, search/filter helpers, the diagnostic wizard
//! state machine, dashboard content, and the navigation table. Both `client`
//! (Leptos pages) and `server` (JSON API) consume it directly.

pub mod customer;
pub mod dashboard;
pub mod diagnostics;
pub mod format;
pub mod job;
pub mod navigation;
pub mod sample;

pub use customer::{Customer, Scooter, ValueTier, search_customers};
pub use diagnostics::{DiagnosticResult, DiagnosticWizard, WizardError, WizardStep};
pub use job::{JobStatus, Priority, RepairJob, StatusFilter, filter_jobs};

/// Error returned when parsing one of the domain's string enums.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The string is not one of the seven job statuses.
    #[error("unknown job status: {0}")]
    UnknownStatus(String),
    /// The string is not one of the four priorities.
    #[error("unknown job priority: {0}")]
    UnknownPriority(String),
}

/// Case-insensitive substring test used by every list search.
///
/// `needle` must already be lowercased; callers lowercase the query once per
/// search instead of once per field.
pub(crate) fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
