//! Repair jobs: status lifecycle, priority, and the Jobs page filter.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::Date;

use crate::{ParseError, contains_folded, format};

/// Lifecycle tag of a repair job.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Received,
    Diagnosed,
    InProgress,
    WaitingParts,
    Completed,
    PickedUp,
    OnHold,
}

impl JobStatus {
    /// Every status in lifecycle order, as offered by the status filter.
    pub const ALL: [Self; 7] = [
        Self::Received,
        Self::Diagnosed,
        Self::InProgress,
        Self::WaitingParts,
        Self::Completed,
        Self::PickedUp,
        Self::OnHold,
    ];

    /// Canonical snake_case tag.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Received => "received",
            Self::Diagnosed => "diagnosed",
            Self::InProgress => "in_progress",
            Self::WaitingParts => "waiting_parts",
            Self::Completed => "completed",
            Self::PickedUp => "picked_up",
            Self::OnHold => "on_hold",
        }
    }

    /// Human label, e.g. "Waiting Parts".
    #[must_use]
    pub fn label(self) -> String {
        format::title_case(self.as_str())
    }

    #[must_use]
    pub fn icon(self) -> StatusIcon {
        match self {
            Self::Received => StatusIcon::Clock,
            Self::Diagnosed | Self::WaitingParts | Self::OnHold => StatusIcon::Alert,
            Self::InProgress => StatusIcon::Wrench,
            Self::Completed | Self::PickedUp => StatusIcon::Check,
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobStatus {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ParseError::UnknownStatus(s.to_owned()))
    }
}

/// Icon shown next to a status badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusIcon {
    Clock,
    Alert,
    Wrench,
    Check,
}

/// Job urgency.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Normal,
    High,
    Urgent,
}

impl Priority {
    pub const ALL: [Self; 4] = [Self::Low, Self::Normal, Self::High, Self::Urgent];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Normal => "normal",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }

    /// Badge text, always uppercase.
    #[must_use]
    pub fn badge(self) -> String {
        self.as_str().to_uppercase()
    }
}

impl FromStr for Priority {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|priority| priority.as_str() == s)
            .ok_or_else(|| ParseError::UnknownPriority(s.to_owned()))
    }
}

/// A single repair work order.
///
/// `customer_id` and `customer_name` are denormalized copies; nothing checks
/// them against the customer list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepairJob {
    pub id: String,
    pub customer_id: String,
    pub customer_name: String,
    pub scooter_model: String,
    pub issue_description: String,
    pub status: JobStatus,
    pub priority: Priority,
    pub technician: String,
    pub received_date: Date,
    pub estimated_time_minutes: u32,
    pub actual_time_minutes: u32,
    pub labor_cost_cents: u32,
    pub parts_cost_cents: u32,
    pub total_cost_cents: u32,
    pub location: String,
    pub special_notes: String,
}

impl RepairJob {
    /// True when the lowercased `needle` appears in the customer name, the
    /// scooter model, or the issue text.
    #[must_use]
    pub fn matches_query(&self, needle: &str) -> bool {
        contains_folded(&self.customer_name, needle)
            || contains_folded(&self.scooter_model, needle)
            || contains_folded(&self.issue_description, needle)
    }

    /// Actual time once work has been logged, otherwise the estimate.
    #[must_use]
    pub fn time_display(&self) -> String {
        if self.actual_time_minutes > 0 {
            format::duration(self.actual_time_minutes)
        } else {
            format::duration(self.estimated_time_minutes)
        }
    }

    #[must_use]
    pub fn total_display(&self) -> String {
        if self.total_cost_cents > 0 {
            format::dollars(self.total_cost_cents)
        } else {
            "Pending".to_owned()
        }
    }

    #[must_use]
    pub fn has_notes(&self) -> bool {
        !self.special_notes.is_empty()
    }
}

/// Status selector on the Jobs page: everything, or exactly one status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(JobStatus),
}

impl StatusFilter {
    #[must_use]
    pub fn admits(self, status: JobStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }

    /// Value used by the `<select>` and the `status` query parameter.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(status) => status.as_str(),
        }
    }

    /// Option label, e.g. "All Status" or "In Progress".
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::All => "All Status".to_owned(),
            Self::Only(status) => status.label(),
        }
    }

    /// "All" followed by each status in lifecycle order.
    #[must_use]
    pub fn options() -> Vec<Self> {
        std::iter::once(Self::All)
            .chain(JobStatus::ALL.into_iter().map(Self::Only))
            .collect()
    }
}

impl FromStr for StatusFilter {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}

/// Jobs whose text fields contain `query` (case-insensitive) and whose status
/// passes `filter`, in input order.
#[must_use]
pub fn filter_jobs<'a>(jobs: &'a [RepairJob], query: &str, filter: StatusFilter) -> Vec<&'a RepairJob> {
    let needle = query.to_lowercase();
    jobs.iter()
        .filter(|job| job.matches_query(&needle) && filter.admits(job.status))
        .collect()
}

#[cfg(test)]
#[path = "job_test.rs"]
mod tests;
