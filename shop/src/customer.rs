//! Customers, their scooters, the value tier badge, and the Customers page search.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::contains_folded;
use crate::job::RepairJob;

/// A scooter owned by a customer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scooter {
    pub model: String,
    pub last_service: Date,
}

/// A shop customer.
///
/// `total_jobs` and `total_spent_cents` are stored sample values; they are
/// never recomputed from job records. See [`aggregate_drift`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub total_jobs: u32,
    pub total_spent_cents: u32,
    pub last_visit: Date,
    #[serde(default)]
    pub scooters: Vec<Scooter>,
}

impl Customer {
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Two-letter avatar initials.
    #[must_use]
    pub fn initials(&self) -> String {
        self.first_name
            .chars()
            .take(1)
            .chain(self.last_name.chars().take(1))
            .collect()
    }

    /// True when the lowercased `needle` appears in the full name, the
    /// location, or any owned scooter model.
    #[must_use]
    pub fn matches_query(&self, needle: &str) -> bool {
        contains_folded(&self.full_name(), needle)
            || contains_folded(&self.location, needle)
            || self
                .scooters
                .iter()
                .any(|scooter| contains_folded(&scooter.model, needle))
    }

    #[must_use]
    pub fn value_tier(&self) -> ValueTier {
        ValueTier::from_spent(self.total_spent_cents)
    }
}

/// Spend bracket shown as a badge on each customer card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueTier {
    New,
    Low,
    Medium,
    High,
}

impl ValueTier {
    /// Bracket for a lifetime spend: nothing spent is new, under $100 is low,
    /// under $200 is medium, anything else is high.
    #[must_use]
    pub fn from_spent(cents: u32) -> Self {
        match cents {
            0 => Self::New,
            1..10_000 => Self::Low,
            10_000..20_000 => Self::Medium,
            _ => Self::High,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::New => "New Customer",
            Self::Low => "Low Value",
            Self::Medium => "Medium Value",
            Self::High => "High Value",
        }
    }

    /// CSS modifier suffix for the badge.
    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Customers matching `query` (case-insensitive), in input order.
#[must_use]
pub fn search_customers<'a>(customers: &'a [Customer], query: &str) -> Vec<&'a Customer> {
    let needle = query.to_lowercase();
    customers
        .iter()
        .filter(|customer| customer.matches_query(&needle))
        .collect()
}

/// A customer whose stored aggregates disagree with its job records.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AggregateDrift {
    pub customer_id: String,
    pub stored_jobs: u32,
    pub derived_jobs: u32,
    pub stored_spent_cents: u32,
    pub derived_spent_cents: u32,
}

/// Compare each customer's stored `total_jobs`/`total_spent_cents` with the
/// values recomputed from `jobs` sharing its `customer_id`.
///
/// Only customers with a mismatch are returned. Stored values are left alone.
#[must_use]
pub fn aggregate_drift(customers: &[Customer], jobs: &[RepairJob]) -> Vec<AggregateDrift> {
    customers
        .iter()
        .filter_map(|customer| {
            let owned = jobs.iter().filter(|job| job.customer_id == customer.id);
            let (derived_jobs, derived_spent_cents) = owned.fold((0_u32, 0_u32), |(count, spent), job| {
                (count.saturating_add(1), spent.saturating_add(job.total_cost_cents))
            });
            let drifted = derived_jobs != customer.total_jobs || derived_spent_cents != customer.total_spent_cents;
            drifted.then(|| AggregateDrift {
                customer_id: customer.id.clone(),
                stored_jobs: customer.total_jobs,
                derived_jobs,
                stored_spent_cents: customer.total_spent_cents,
                derived_spent_cents,
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "customer_test.rs"]
mod tests;
