//! Display formatting shared by the pages and the API.

use time::Date;

/// Render integer cents as a dollar amount with two decimals, e.g. `$110.00`.
#[must_use]
pub fn dollars(cents: u32) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

/// Render a duration in minutes as `1h 10m`, `45m`, or `Not set` for zero.
#[must_use]
pub fn duration(minutes: u32) -> String {
    if minutes == 0 {
        return "Not set".to_owned();
    }
    let hours = minutes / 60;
    let mins = minutes % 60;
    if hours > 0 {
        format!("{hours}h {mins}m")
    } else {
        format!("{mins}m")
    }
}

/// Render a calendar date as `M/D/YYYY`.
#[must_use]
pub fn short_date(date: Date) -> String {
    format!("{}/{}/{}", u8::from(date.month()), date.day(), date.year())
}

/// Turn a snake_case tag into space-separated capitalized words.
#[must_use]
pub fn title_case(tag: &str) -> String {
    tag.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[path = "format_test.rs"]
mod tests;
