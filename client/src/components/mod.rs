//! Reusable view components.

pub mod customer_card;
pub mod empty_state;
pub mod header;
pub mod icons;
pub mod job_card;
pub mod placeholder_modal;
pub mod sidebar;
pub mod skeleton;
pub mod stat_card;
pub mod step_progress;
