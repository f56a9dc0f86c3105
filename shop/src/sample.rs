//! Hardcoded shop records standing in for a backend.
//!
//! The records mirror the shop's intake spreadsheet. Aggregates on customers
//! are copied as recorded, not derived.

use time::Date;
use time::macros::date;

use crate::customer::{Customer, Scooter};
use crate::job::{JobStatus, Priority, RepairJob};

/// Simulated latency before a list page shows its records.
pub const LOAD_DELAY_MS: u64 = 1_000;

struct JobRow {
    id: &'static str,
    customer_id: &'static str,
    customer_name: &'static str,
    scooter_model: &'static str,
    issue: &'static str,
    status: JobStatus,
    technician: &'static str,
    received: Date,
    estimated: u32,
    actual: u32,
    labor: u32,
    parts: u32,
    /// Stored as quoted; not recomputed from labor and parts.
    total: u32,
    location: &'static str,
    notes: &'static str,
}

const JOB_ROWS: [JobRow; 6] = [
    JobRow {
        id: "job_001",
        customer_id: "cust_001",
        customer_name: "Michelle Blackcloud",
        scooter_model: "Sondors Fold X",
        issue: "It's not catching a charge and I can't get the battery out cause there's a key and my cousin didn't have any keys with the bike",
        status: JobStatus::Diagnosed,
        technician: "Mak",
        received: date!(2024 - 08 - 23),
        estimated: 0,
        actual: 0,
        labor: 0,
        parts: 0,
        total: 0,
        location: "Warespace",
        notes: "Battery initially measured ~2V, likely shorted. Need to dremel frame to remove battery.",
    },
    JobRow {
        id: "job_002",
        customer_id: "cust_002",
        customer_name: "Michael Lokowich",
        scooter_model: "Segway Ninebot MAX G30LP",
        issue: "Scooter charges and will turn on but for some reason will not move",
        status: JobStatus::Diagnosed,
        technician: "Mak",
        received: date!(2024 - 09 - 11),
        estimated: 60,
        actual: 0,
        labor: 0,
        parts: 0,
        total: 0,
        location: "Mak",
        notes: "Green hall sensor issue in motor. Solution: replace motor.",
    },
    JobRow {
        id: "job_003",
        customer_id: "cust_003",
        customer_name: "Tiffany Langeslay",
        scooter_model: "Evercross",
        issue: "The power button on the right side broke off",
        status: JobStatus::Completed,
        technician: "Mak",
        received: date!(2024 - 10 - 10),
        estimated: 60,
        actual: 70,
        labor: 8_500,
        parts: 2_500,
        total: 11_000,
        location: "F15",
        notes: "Throttle sourced and replaced. Spliced correct connector.",
    },
    JobRow {
        id: "job_004",
        customer_id: "cust_004",
        customer_name: "Mason Welken",
        scooter_model: "F Series 9 Bot",
        issue: "Error code 14",
        status: JobStatus::Completed,
        technician: "Bryce",
        received: date!(2024 - 11 - 09),
        estimated: 60,
        actual: 57,
        labor: 9_500,
        parts: 3_500,
        total: 13_000,
        location: "F15",
        notes: "Replaced throttle. Adjusted rear brakes. Added missing headunit screws.",
    },
    JobRow {
        id: "job_005",
        customer_id: "cust_005",
        customer_name: "Mike Fitzpatrick",
        scooter_model: "HiBoy S2",
        issue: "The bolt in the back wheel keeps coming out/wheel is loose",
        status: JobStatus::PickedUp,
        technician: "Hans",
        received: date!(2024 - 11 - 23),
        estimated: 40,
        actual: 45,
        labor: 12_000,
        parts: 8_000,
        total: 20_000,
        location: "Warespace",
        notes: "Replaced rear rim and tire (used). Replaced rear rotor. Adjusted disc brake.",
    },
    JobRow {
        id: "job_006",
        customer_id: "cust_006",
        customer_name: "Thomas Williams",
        scooter_model: "OKAI - NEON",
        issue: "Handle bars are loose, and it stopped charging",
        status: JobStatus::PickedUp,
        technician: "Mak",
        received: date!(2024 - 11 - 25),
        estimated: 60,
        actual: 120,
        labor: 18_000,
        parts: 4_500,
        total: 22_500,
        location: "Warespace",
        notes: "Updated quote after original was accepted. Need to check OKAI order from last year.",
    },
];

/// The six sample repair jobs, in intake order.
#[must_use]
pub fn jobs() -> Vec<RepairJob> {
    JOB_ROWS
        .iter()
        .map(|row| RepairJob {
            id: row.id.to_owned(),
            customer_id: row.customer_id.to_owned(),
            customer_name: row.customer_name.to_owned(),
            scooter_model: row.scooter_model.to_owned(),
            issue_description: row.issue.to_owned(),
            status: row.status,
            priority: Priority::Normal,
            technician: row.technician.to_owned(),
            received_date: row.received,
            estimated_time_minutes: row.estimated,
            actual_time_minutes: row.actual,
            labor_cost_cents: row.labor,
            parts_cost_cents: row.parts,
            total_cost_cents: row.total,
            location: row.location.to_owned(),
            special_notes: row.notes.to_owned(),
        })
        .collect()
}

struct CustomerRow {
    id: &'static str,
    first: &'static str,
    last: &'static str,
    location: &'static str,
    phone: &'static str,
    spent: u32,
    visit: Date,
    model: &'static str,
}

const CUSTOMER_ROWS: [CustomerRow; 8] = [
    CustomerRow {
        id: "cust_001",
        first: "Michelle",
        last: "Blackcloud",
        location: "Warespace",
        phone: "(555) 123-4567",
        spent: 0,
        visit: date!(2024 - 08 - 23),
        model: "Sondors Fold X",
    },
    CustomerRow {
        id: "cust_002",
        first: "Michael",
        last: "Lokowich",
        location: "Mak",
        phone: "(555) 234-5678",
        spent: 0,
        visit: date!(2024 - 09 - 11),
        model: "Segway Ninebot MAX G30LP",
    },
    CustomerRow {
        id: "cust_003",
        first: "Tiffany",
        last: "Langeslay",
        location: "F15",
        phone: "(555) 345-6789",
        spent: 11_000,
        visit: date!(2024 - 10 - 10),
        model: "Evercross",
    },
    CustomerRow {
        id: "cust_004",
        first: "Mason",
        last: "Welken",
        location: "F15",
        phone: "(555) 456-7890",
        spent: 13_000,
        visit: date!(2024 - 11 - 09),
        model: "F Series 9 Bot",
    },
    CustomerRow {
        id: "cust_005",
        first: "Mike",
        last: "Fitzpatrick",
        location: "Warespace",
        phone: "(555) 567-8901",
        spent: 20_000,
        visit: date!(2024 - 11 - 23),
        model: "HiBoy S2",
    },
    CustomerRow {
        id: "cust_006",
        first: "Thomas",
        last: "Williams",
        location: "Warespace",
        phone: "(555) 678-9012",
        spent: 22_500,
        visit: date!(2024 - 11 - 25),
        model: "OKAI - NEON",
    },
    CustomerRow {
        id: "cust_007",
        first: "Jeffrey",
        last: "Paul",
        location: "801 Transfer Road, Saint Paul, MN",
        phone: "(555) 789-0123",
        spent: 22_000,
        visit: date!(2024 - 04 - 27),
        model: "Kaabo Mantis GT",
    },
    CustomerRow {
        id: "cust_008",
        first: "Erick",
        last: "Watts",
        location: "801 Transfer Road, Saint Paul, MN",
        phone: "(555) 890-1234",
        spent: 5_000,
        visit: date!(2024 - 04 - 27),
        model: "Philco",
    },
];

/// The eight sample customers. Each owns one scooter serviced on its last visit.
#[must_use]
pub fn customers() -> Vec<Customer> {
    CUSTOMER_ROWS
        .iter()
        .map(|row| Customer {
            id: row.id.to_owned(),
            first_name: row.first.to_owned(),
            last_name: row.last.to_owned(),
            location: row.location.to_owned(),
            phone: Some(row.phone.to_owned()),
            email: Some(format!("{}.{}@email.com", row.first, row.last).to_lowercase()),
            total_jobs: 1,
            total_spent_cents: row.spent,
            last_visit: row.visit,
            scooters: vec![Scooter {
                model: row.model.to_owned(),
                last_service: row.visit,
            }],
        })
        .collect()
}

#[cfg(test)]
#[path = "sample_test.rs"]
mod tests;
