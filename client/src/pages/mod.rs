//! Routed pages.

pub mod coming_soon;
pub mod customers;
pub mod dashboard;
pub mod diagnostics;
pub mod jobs;
