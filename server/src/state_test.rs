use super::*;

#[test]
fn from_samples_loads_both_lists() {
    let state = AppState::from_samples();
    assert_eq!(state.jobs.len(), 6);
    assert_eq!(state.customers.len(), 8);
}

#[test]
fn clones_share_storage() {
    let state = AppState::from_samples();
    let copy = state.clone();
    assert!(Arc::ptr_eq(&state.jobs, &copy.jobs));
    assert!(Arc::ptr_eq(&state.customers, &copy.customers));
}
