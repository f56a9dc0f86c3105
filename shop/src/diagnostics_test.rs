use super::*;

fn at_symptoms() -> DiagnosticWizard {
    let mut wizard = DiagnosticWizard::new();
    wizard.continue_to_symptoms().expect("continue from model step");
    wizard
}

fn at_results() -> DiagnosticWizard {
    let mut wizard = at_symptoms();
    wizard.toggle_symptom("no-power").expect("toggle");
    let ticket = wizard.start_analysis().expect("start");
    assert_eq!(wizard.complete_analysis(ticket), Ok(true));
    wizard
}

// =============================================================
// Catalogs
// =============================================================

#[test]
fn every_symptom_belongs_to_a_listed_category() {
    let grouped: usize = SymptomCategory::ALL.into_iter().map(|c| symptoms_in(c).count()).sum();
    assert_eq!(grouped, SYMPTOMS.len());
}

#[test]
fn symptom_groups_keep_catalog_order() {
    let electrical: Vec<&str> = symptoms_in(SymptomCategory::Electrical).map(|s| s.id).collect();
    assert_eq!(electrical, vec!["no-power", "display-error", "throttle-unresponsive"]);
    assert_eq!(symptoms_in(SymptomCategory::Performance).count(), 1);
}

#[test]
fn symptom_ids_are_unique() {
    for (i, a) in SYMPTOMS.iter().enumerate() {
        for b in &SYMPTOMS[i + 1..] {
            assert_ne!(a.id, b.id);
        }
    }
}

#[test]
fn three_models_are_marked_popular() {
    assert_eq!(SCOOTER_MODELS.iter().filter(|m| m.popular).count(), 3);
}

// =============================================================
// Steps and markers
// =============================================================

#[test]
fn steps_are_indexed_in_order() {
    for (i, step) in WizardStep::ALL.into_iter().enumerate() {
        assert_eq!(step.index(), i);
    }
    assert_eq!(WizardStep::Analyzing.title(), "AI Analysis");
}

#[test]
fn markers_split_around_current_step() {
    let wizard = at_symptoms();
    assert_eq!(wizard.marker(WizardStep::SelectModel), StepMarker::Complete);
    assert_eq!(wizard.marker(WizardStep::DescribeSymptoms), StepMarker::Current);
    assert_eq!(wizard.marker(WizardStep::Analyzing), StepMarker::Upcoming);
    assert_eq!(wizard.marker(WizardStep::Results), StepMarker::Upcoming);
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn new_wizard_starts_on_model_step_empty() {
    let wizard = DiagnosticWizard::new();
    assert_eq!(wizard.step(), WizardStep::SelectModel);
    assert!(wizard.selected_model().is_none());
    assert!(wizard.selected_symptoms().is_empty());
    assert!(wizard.result().is_none());
}

#[test]
fn continue_is_not_gated_on_model_selection() {
    let wizard = at_symptoms();
    assert_eq!(wizard.step(), WizardStep::DescribeSymptoms);
    assert!(wizard.selected_model().is_none());
}

#[test]
fn selecting_model_is_remembered_across_back() {
    let mut wizard = DiagnosticWizard::new();
    wizard.select_model("Razor E300").expect("select");
    wizard.continue_to_symptoms().expect("continue");
    wizard.toggle_symptom("tire-wear").expect("toggle");
    wizard.back().expect("back");
    assert_eq!(wizard.step(), WizardStep::SelectModel);
    assert_eq!(wizard.selected_model(), Some("Razor E300"));
    assert_eq!(wizard.selected_symptoms(), ["tire-wear".to_owned()]);
}

#[test]
fn zero_symptoms_blocks_analysis() {
    let mut wizard = at_symptoms();
    assert!(!wizard.can_run_analysis());
    assert_eq!(wizard.start_analysis(), Err(WizardError::NoSymptomsSelected));
    assert_eq!(wizard.step(), WizardStep::DescribeSymptoms);
}

#[test]
fn one_symptom_enables_analysis() {
    let mut wizard = at_symptoms();
    assert_eq!(wizard.toggle_symptom("brake-issues"), Ok(true));
    assert!(wizard.can_run_analysis());
    assert!(wizard.start_analysis().is_ok());
    assert_eq!(wizard.step(), WizardStep::Analyzing);
}

#[test]
fn toggling_twice_deselects() {
    let mut wizard = at_symptoms();
    assert_eq!(wizard.toggle_symptom("battery-drain"), Ok(true));
    assert!(wizard.is_symptom_selected("battery-drain"));
    assert_eq!(wizard.toggle_symptom("battery-drain"), Ok(false));
    assert!(!wizard.is_symptom_selected("battery-drain"));
    assert!(!wizard.can_run_analysis());
}

#[test]
fn symptoms_keep_selection_order() {
    let mut wizard = at_symptoms();
    for id in ["tire-wear", "no-power", "slow-charging"] {
        wizard.toggle_symptom(id).expect("toggle");
    }
    wizard.toggle_symptom("no-power").expect("toggle");
    assert_eq!(wizard.selected_symptoms(), ["tire-wear".to_owned(), "slow-charging".to_owned()]);
}

#[test]
fn unknown_symptom_is_rejected() {
    let mut wizard = at_symptoms();
    assert_eq!(
        wizard.toggle_symptom("flux-capacitor"),
        Err(WizardError::UnknownSymptom("flux-capacitor".to_owned()))
    );
    assert!(wizard.selected_symptoms().is_empty());
}

#[test]
fn out_of_order_actions_leave_state_unchanged() {
    let mut wizard = DiagnosticWizard::new();
    let err = wizard.toggle_symptom("no-power").expect_err("not on symptom step");
    assert_eq!(
        err,
        WizardError::InvalidTransition { from: WizardStep::SelectModel, action: "change symptoms" }
    );
    assert!(wizard.back().is_err());
    assert!(wizard.start_analysis().is_err());
    assert_eq!(wizard, DiagnosticWizard::new());
}

#[test]
fn invalid_transition_message_names_step() {
    let err = WizardError::InvalidTransition { from: WizardStep::Analyzing, action: "go back" };
    assert_eq!(err.to_string(), "cannot go back while on step 'AI Analysis'");
}

// =============================================================
// Analysis completion
// =============================================================

#[test]
fn completion_always_yields_fixed_result() {
    let mut a = at_symptoms();
    a.toggle_symptom("no-power").expect("toggle");
    let ticket_a = a.start_analysis().expect("start");
    a.complete_analysis(ticket_a).expect("complete");

    let mut b = at_symptoms();
    for symptom in SYMPTOMS {
        b.toggle_symptom(symptom.id).expect("toggle");
    }
    let ticket_b = b.start_analysis().expect("start");
    b.complete_analysis(ticket_b).expect("complete");

    assert_eq!(a.step(), WizardStep::Results);
    assert_eq!(a.result(), Some(&fixed_result()));
    assert_eq!(a.result(), b.result());
}

#[test]
fn fixed_result_payload() {
    let result = fixed_result();
    assert_eq!(result.primary_issue, "Battery Management System Failure");
    assert_eq!(result.confidence, 92);
    assert_eq!(result.severity, Severity::Medium);
    assert_eq!(result.parts.len(), 2);
    assert!(result.parts.iter().all(|p| p.availability == Availability::InStock));
    assert_eq!(result.steps.len(), 5);
}

#[test]
fn completion_after_reset_is_ignored() {
    let mut wizard = at_symptoms();
    wizard.toggle_symptom("no-power").expect("toggle");
    let stale = wizard.start_analysis().expect("start");
    wizard.reset();

    assert_eq!(wizard.complete_analysis(stale), Ok(false));
    assert_eq!(wizard.step(), WizardStep::SelectModel);
    assert!(wizard.result().is_none());
}

#[test]
fn stale_ticket_cannot_finish_a_newer_run() {
    let mut wizard = at_symptoms();
    wizard.toggle_symptom("no-power").expect("toggle");
    let stale = wizard.start_analysis().expect("start");
    wizard.reset();
    wizard.continue_to_symptoms().expect("continue");
    wizard.toggle_symptom("tire-wear").expect("toggle");
    let fresh = wizard.start_analysis().expect("start");

    assert_eq!(wizard.complete_analysis(stale), Ok(false));
    assert_eq!(wizard.step(), WizardStep::Analyzing);
    assert_eq!(wizard.complete_analysis(fresh), Ok(true));
    assert_eq!(wizard.step(), WizardStep::Results);
}

#[test]
fn completing_twice_is_an_invalid_transition() {
    let mut wizard = at_symptoms();
    wizard.toggle_symptom("no-power").expect("toggle");
    let ticket = wizard.start_analysis().expect("start");
    assert_eq!(wizard.complete_analysis(ticket), Ok(true));
    assert!(matches!(
        wizard.complete_analysis(ticket),
        Err(WizardError::InvalidTransition { from: WizardStep::Results, .. })
    ));
}

// =============================================================
// Reset
// =============================================================

#[test]
fn reset_from_every_step_returns_to_start_with_nothing_selected() {
    let mut from_model = DiagnosticWizard::new();
    from_model.select_model("Hiboy S2").expect("select");

    let mut from_symptoms = at_symptoms();
    from_symptoms.toggle_symptom("strange-noise").expect("toggle");

    let mut from_analyzing = at_symptoms();
    from_analyzing.toggle_symptom("strange-noise").expect("toggle");
    from_analyzing.start_analysis().expect("start");

    let from_results = at_results();

    for mut wizard in [from_model, from_symptoms, from_analyzing, from_results] {
        wizard.reset();
        assert_eq!(wizard.step(), WizardStep::SelectModel);
        assert!(wizard.selected_symptoms().is_empty());
        assert!(wizard.selected_model().is_none());
        assert!(wizard.result().is_none());
    }
}

#[test]
fn css_names_match_serialized_names() {
    assert_eq!(Severity::Medium.as_str(), "medium");
    assert_eq!(
        serde_json::to_value(Severity::High).expect("serialize"),
        serde_json::json!(Severity::High.as_str())
    );
    assert_eq!(
        serde_json::to_value(Availability::InStock).expect("serialize"),
        serde_json::json!(Availability::InStock.as_str())
    );
}

#[test]
fn step_caption_is_one_based() {
    assert_eq!(WizardStep::SelectModel.caption(), "Step 1: Select Scooter Model");
    assert_eq!(WizardStep::Results.caption(), "Step 4: Diagnostic Results");
}
