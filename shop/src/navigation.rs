//! Sidebar route table and active-item matching.

use serde::Serialize;

pub const APP_NAME: &str = "ScooterPro";
pub const APP_TAGLINE: &str = "Repair Management";
pub const ACCOUNT_NAME: &str = "Repair Shop";
pub const ACCOUNT_EMAIL: &str = "admin@scooterpro.com";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavIcon {
    Dashboard,
    Stethoscope,
    Book,
    Package,
    Users,
    Briefcase,
    FileText,
    Calendar,
    Chart,
    Settings,
}

/// One sidebar entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
    pub icon: NavIcon,
    /// Routed to a "Coming soon..." page rather than a real one.
    pub placeholder: bool,
}

impl NavItem {
    /// Active iff the current path is exactly this item's href.
    #[must_use]
    pub fn is_active(&self, path: &str) -> bool {
        self.href == path
    }
}

pub const NAV_ITEMS: [NavItem; 10] = [
    NavItem { name: "Dashboard", href: "/", icon: NavIcon::Dashboard, placeholder: false },
    NavItem { name: "AI Diagnostics", href: "/diagnostics", icon: NavIcon::Stethoscope, placeholder: false },
    NavItem { name: "Repair Guides", href: "/guides", icon: NavIcon::Book, placeholder: true },
    NavItem { name: "Parts Sourcing", href: "/parts", icon: NavIcon::Package, placeholder: true },
    NavItem { name: "Customers", href: "/customers", icon: NavIcon::Users, placeholder: false },
    NavItem { name: "Jobs", href: "/jobs", icon: NavIcon::Briefcase, placeholder: false },
    NavItem { name: "Invoicing", href: "/invoicing", icon: NavIcon::FileText, placeholder: true },
    NavItem { name: "Scheduling", href: "/scheduling", icon: NavIcon::Calendar, placeholder: true },
    NavItem { name: "Analytics", href: "/analytics", icon: NavIcon::Chart, placeholder: true },
    NavItem { name: "Settings", href: "/settings", icon: NavIcon::Settings, placeholder: true },
];

/// The item to highlight for `path`, if any.
#[must_use]
pub fn find(path: &str) -> Option<&'static NavItem> {
    NAV_ITEMS.iter().find(|item| item.is_active(path))
}

/// Header title for `path`; unknown paths get "Page not found".
#[must_use]
pub fn title_for(path: &str) -> &'static str {
    find(path).map_or("Page not found", |item| item.name)
}

/// Items that have no real page yet.
pub fn placeholders() -> impl Iterator<Item = &'static NavItem> {
    NAV_ITEMS.iter().filter(|item| item.placeholder)
}

#[cfg(test)]
#[path = "navigation_test.rs"]
mod tests;
