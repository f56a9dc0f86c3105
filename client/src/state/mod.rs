//! Page and layout state.
//!
//! DESIGN
//! ======
//! Each page owns its own state in an `RwSignal` created when the page
//! mounts, so navigating away discards it. Only the layout state in `ui` is
//! shared through context.

pub mod customers;
pub mod jobs;
pub mod ui;
