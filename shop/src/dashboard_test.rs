use super::*;
use crate::navigation;

#[test]
fn only_average_repair_time_trends_down() {
    let down: Vec<&str> = STATS.iter().filter(|s| s.trend == Trend::Down).map(|s| s.title).collect();
    assert_eq!(down, vec!["Avg Repair Time"]);
}

#[test]
fn recent_job_progress_is_a_percentage() {
    assert!(RECENT_JOBS.iter().all(|job| job.progress <= 100));
    let completed = RECENT_JOBS
        .iter()
        .find(|job| job.status == RecentStatus::Completed)
        .expect("one completed job");
    assert_eq!(completed.progress, 100);
}

#[test]
fn progress_caption_includes_estimate() {
    assert_eq!(RECENT_JOBS[0].progress_caption(), "45% \u{2022} Est. TBD");
}

#[test]
fn low_stock_parts_are_below_minimum() {
    for part in LOW_STOCK_PARTS {
        assert!(part.stock < part.min_stock, "{}", part.name);
        assert!(part.shortfall() > 0);
    }
}

#[test]
fn hall_sensors_are_out_of_stock() {
    let out: Vec<&str> = LOW_STOCK_PARTS.iter().filter(|p| p.is_out()).map(|p| p.name).collect();
    assert_eq!(out, vec!["Hall Sensors"]);
    assert_eq!(LOW_STOCK_PARTS[3].caption(), "0 left (min: 3)");
}

#[test]
fn quick_actions_point_at_navigable_pages() {
    for action in QUICK_ACTIONS {
        assert!(navigation::find(action.href).is_some(), "{}", action.href);
    }
}

#[test]
fn recent_status_icons_follow_progress() {
    let icons: Vec<StatusIcon> = RECENT_JOBS.iter().map(|job| job.status.icon()).collect();
    assert_eq!(icons, vec![StatusIcon::Clock, StatusIcon::Alert, StatusIcon::Check]);
}
