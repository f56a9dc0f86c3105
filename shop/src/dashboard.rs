//! Dashboard content: headline stats, recent jobs, low-stock parts, quick actions.
//!
//! Everything here is precomputed sample content; nothing is derived from the
//! job or customer lists.

use serde::Serialize;

use crate::job::StatusIcon;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatIcon {
    Revenue,
    Jobs,
    Customers,
    Clock,
}

/// A headline number with its change against the previous period.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub trend: Trend,
    pub icon: StatIcon,
    pub description: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat {
        title: "Total Revenue",
        value: "$1,130",
        change: "+18.2%",
        trend: Trend::Up,
        icon: StatIcon::Revenue,
        description: "This month",
    },
    Stat {
        title: "Active Jobs",
        value: "8",
        change: "+2",
        trend: Trend::Up,
        icon: StatIcon::Jobs,
        description: "In progress",
    },
    Stat {
        title: "Customers",
        value: "12",
        change: "+4",
        trend: Trend::Up,
        icon: StatIcon::Customers,
        description: "Total registered",
    },
    Stat {
        title: "Avg Repair Time",
        value: "1.2 hrs",
        change: "-20min",
        trend: Trend::Down,
        icon: StatIcon::Clock,
        description: "Per job",
    },
];

/// Coarse progress state used by the dashboard's recent-jobs card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecentStatus {
    InProgress,
    Pending,
    Completed,
}

impl RecentStatus {
    /// Check when done, clock while being worked, alert while waiting.
    #[must_use]
    pub fn icon(self) -> StatusIcon {
        match self {
            Self::InProgress => StatusIcon::Clock,
            Self::Pending => StatusIcon::Alert,
            Self::Completed => StatusIcon::Check,
        }
    }
}

/// Dashboard urgency scale; coarser than the job board's.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecentPriority {
    High,
    Medium,
    Normal,
}

impl RecentPriority {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Normal => "normal",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RecentJob {
    pub id: &'static str,
    pub customer: &'static str,
    pub scooter: &'static str,
    pub issue: &'static str,
    pub status: RecentStatus,
    pub priority: RecentPriority,
    pub estimated_time: &'static str,
    /// Percent complete, 0..=100.
    pub progress: u8,
}

impl RecentJob {
    /// Line under the progress bar, e.g. `45% • Est. TBD`.
    #[must_use]
    pub fn progress_caption(&self) -> String {
        format!("{}% \u{2022} Est. {}", self.progress, self.estimated_time)
    }
}

pub const RECENT_JOBS: [RecentJob; 3] = [
    RecentJob {
        id: "JOB-001",
        customer: "Michelle Blackcloud",
        scooter: "Sondors Fold X",
        issue: "Battery not charging, can't remove battery without key",
        status: RecentStatus::InProgress,
        priority: RecentPriority::High,
        estimated_time: "TBD",
        progress: 45,
    },
    RecentJob {
        id: "JOB-002",
        customer: "Michael Lokowich",
        scooter: "Segway Ninebot MAX G30LP",
        issue: "Scooter charges and turns on but will not move",
        status: RecentStatus::Pending,
        priority: RecentPriority::Medium,
        estimated_time: "1 hour",
        progress: 25,
    },
    RecentJob {
        id: "JOB-003",
        customer: "Mason Welken",
        scooter: "F Series 9 Bot",
        issue: "Error code 14",
        status: RecentStatus::Completed,
        priority: RecentPriority::Normal,
        estimated_time: "57 minutes",
        progress: 100,
    },
];

/// A part whose stock is below its restock threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct LowStockPart {
    pub name: &'static str,
    pub stock: u32,
    pub min_stock: u32,
}

impl LowStockPart {
    #[must_use]
    pub fn is_out(&self) -> bool {
        self.stock == 0
    }

    #[must_use]
    pub fn shortfall(&self) -> u32 {
        self.min_stock.saturating_sub(self.stock)
    }

    /// e.g. `2 left (min: 5)`.
    #[must_use]
    pub fn caption(&self) -> String {
        format!("{} left (min: {})", self.stock, self.min_stock)
    }
}

pub const LOW_STOCK_PARTS: [LowStockPart; 4] = [
    LowStockPart { name: "Throttle (Universal)", stock: 2, min_stock: 5 },
    LowStockPart { name: "Brake Pads (Disc)", stock: 3, min_stock: 8 },
    LowStockPart { name: "Tire 8.5\" Pneumatic", stock: 1, min_stock: 4 },
    LowStockPart { name: "Hall Sensors", stock: 0, min_stock: 3 },
];

/// A shortcut tile linking to another page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct QuickAction {
    pub label: &'static str,
    pub href: &'static str,
}

pub const QUICK_ACTIONS: [QuickAction; 4] = [
    QuickAction { label: "New Repair", href: "/jobs" },
    QuickAction { label: "Add Customer", href: "/customers" },
    QuickAction { label: "Check Inventory", href: "/parts" },
    QuickAction { label: "View Schedule", href: "/scheduling" },
];

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod tests;
