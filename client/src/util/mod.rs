//! Browser-facing helpers shared by pages and components.

pub mod delay;
pub mod preferences;
