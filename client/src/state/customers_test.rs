use super::*;
use shop::sample;

fn loaded() -> CustomersState {
    let mut state = CustomersState::default();
    state.finish_loading(sample::customers());
    state
}

#[test]
fn starts_loading_and_empty() {
    let state = CustomersState::default();
    assert!(state.loading);
    assert_eq!(state.total(), 0);
    assert!(!state.shows_empty_state());
}

#[test]
fn search_matches_shared_address() {
    let mut state = loaded();
    state.search = "saint paul".into();
    let names: Vec<String> = state.visible().iter().map(Customer::full_name).collect();
    assert_eq!(names, vec!["Jeffrey Paul", "Erick Watts"]);
}

#[test]
fn total_ignores_search() {
    let mut state = loaded();
    state.search = "Blackcloud".into();
    assert_eq!(state.visible().len(), 1);
    assert_eq!(state.total(), 8);
}

#[test]
fn unmatched_search_shows_empty_state() {
    let mut state = loaded();
    state.search = "zzz".into();
    assert!(state.shows_empty_state());
}
