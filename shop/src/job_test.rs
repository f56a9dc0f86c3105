use super::*;
use crate::sample;

// =============================================================
// JobStatus
// =============================================================

#[test]
fn job_status_tags_round_trip_through_from_str() {
    for status in JobStatus::ALL {
        assert_eq!(status.as_str().parse::<JobStatus>(), Ok(status));
    }
}

#[test]
fn job_status_rejects_unknown_tag() {
    let err = "in-progress".parse::<JobStatus>().expect_err("dash form is not canonical");
    assert_eq!(err, ParseError::UnknownStatus("in-progress".to_owned()));
}

#[test]
fn job_status_labels_are_title_cased() {
    assert_eq!(JobStatus::InProgress.label(), "In Progress");
    assert_eq!(JobStatus::PickedUp.label(), "Picked Up");
    assert_eq!(JobStatus::OnHold.label(), "On Hold");
}

#[test]
fn job_status_icons_follow_lifecycle_groups() {
    assert_eq!(JobStatus::Received.icon(), StatusIcon::Clock);
    assert_eq!(JobStatus::Diagnosed.icon(), StatusIcon::Alert);
    assert_eq!(JobStatus::WaitingParts.icon(), StatusIcon::Alert);
    assert_eq!(JobStatus::OnHold.icon(), StatusIcon::Alert);
    assert_eq!(JobStatus::InProgress.icon(), StatusIcon::Wrench);
    assert_eq!(JobStatus::Completed.icon(), StatusIcon::Check);
    assert_eq!(JobStatus::PickedUp.icon(), StatusIcon::Check);
}

#[test]
fn job_status_serializes_as_snake_case() {
    let json = serde_json::to_string(&JobStatus::WaitingParts).expect("serialize");
    assert_eq!(json, "\"waiting_parts\"");
}

// =============================================================
// Priority
// =============================================================

#[test]
fn priority_badge_is_uppercase() {
    assert_eq!(Priority::Normal.badge(), "NORMAL");
    assert_eq!(Priority::Urgent.badge(), "URGENT");
}

#[test]
fn priority_parses_known_values_only() {
    assert_eq!("high".parse::<Priority>(), Ok(Priority::High));
    assert!(matches!("medium".parse::<Priority>(), Err(ParseError::UnknownPriority(_))));
}

// =============================================================
// RepairJob display
// =============================================================

#[test]
fn time_display_prefers_actual_minutes() {
    let jobs = sample::jobs();
    let evercross = &jobs[2];
    assert_eq!(evercross.actual_time_minutes, 70);
    assert_eq!(evercross.time_display(), "1h 10m");
}

#[test]
fn time_display_falls_back_to_estimate() {
    let jobs = sample::jobs();
    let segway = &jobs[1];
    assert_eq!(segway.actual_time_minutes, 0);
    assert_eq!(segway.time_display(), "1h 0m");
}

#[test]
fn time_display_not_set_when_nothing_recorded() {
    let jobs = sample::jobs();
    assert_eq!(jobs[0].time_display(), "Not set");
}

#[test]
fn total_display_pending_for_zero() {
    let jobs = sample::jobs();
    assert_eq!(jobs[0].total_display(), "Pending");
    assert_eq!(jobs[2].total_display(), "$110.00");
}

// =============================================================
// StatusFilter
// =============================================================

#[test]
fn status_filter_parses_all_and_each_status() {
    assert_eq!("all".parse::<StatusFilter>(), Ok(StatusFilter::All));
    assert_eq!(
        "on_hold".parse::<StatusFilter>(),
        Ok(StatusFilter::Only(JobStatus::OnHold))
    );
}

#[test]
fn status_filter_rejects_unknown_value() {
    assert_eq!(
        "ALL".parse::<StatusFilter>(),
        Err(ParseError::UnknownStatus("ALL".to_owned()))
    );
}

#[test]
fn status_filter_options_start_with_all_then_lifecycle_order() {
    let options = StatusFilter::options();
    assert_eq!(options.len(), 8);
    assert_eq!(options[0], StatusFilter::All);
    assert_eq!(options[0].label(), "All Status");
    assert_eq!(options[3], StatusFilter::Only(JobStatus::InProgress));
    assert_eq!(options[7], StatusFilter::Only(JobStatus::OnHold));
    for option in options {
        assert_eq!(option.as_str().parse::<StatusFilter>(), Ok(option));
    }
}

// =============================================================
// filter_jobs
// =============================================================

#[test]
fn filter_all_with_empty_query_returns_every_job() {
    let jobs = sample::jobs();
    let visible = filter_jobs(&jobs, "", StatusFilter::All);
    assert_eq!(visible.len(), jobs.len());
}

#[test]
fn filter_specific_status_returns_exact_subset() {
    let jobs = sample::jobs();
    for status in JobStatus::ALL {
        let visible = filter_jobs(&jobs, "", StatusFilter::Only(status));
        let expected = jobs.iter().filter(|job| job.status == status).count();
        assert_eq!(visible.len(), expected, "status {status}");
        assert!(visible.iter().all(|job| job.status == status));
    }
}

#[test]
fn filter_matches_customer_model_and_issue_case_insensitively() {
    let jobs = sample::jobs();
    let by_name = filter_jobs(&jobs, "BLACKCLOUD", StatusFilter::All);
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].id, "job_001");

    let by_model = filter_jobs(&jobs, "ninebot", StatusFilter::All);
    assert_eq!(by_model.len(), 1);
    assert_eq!(by_model[0].id, "job_002");

    let by_issue = filter_jobs(&jobs, "error code", StatusFilter::All);
    assert_eq!(by_issue.len(), 1);
    assert_eq!(by_issue[0].id, "job_004");
}

#[test]
fn filter_combines_query_and_status() {
    let jobs = sample::jobs();
    let visible = filter_jobs(&jobs, "mak", StatusFilter::Only(JobStatus::Completed));
    // "mak" does not appear in searchable fields; technician is not searched.
    assert!(visible.is_empty());

    let visible = filter_jobs(&jobs, "charg", StatusFilter::Only(JobStatus::PickedUp));
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, "job_006");
}

#[test]
fn filter_unknown_text_yields_empty_list() {
    let jobs = sample::jobs();
    assert!(filter_jobs(&jobs, "zzz-not-a-scooter", StatusFilter::All).is_empty());
}

#[test]
fn filter_preserves_input_order() {
    let jobs = sample::jobs();
    let visible = filter_jobs(&jobs, "", StatusFilter::Only(JobStatus::Completed));
    let ids: Vec<&str> = visible.iter().map(|job| job.id.as_str()).collect();
    assert_eq!(ids, vec!["job_003", "job_004"]);
}
