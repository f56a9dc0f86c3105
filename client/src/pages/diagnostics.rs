//! AI diagnostics page: a four-step wizard over the shop's diagnostic session.
//!
//! The wizard itself lives in `shop::diagnostics`; this page renders the
//! current step and schedules the simulated analysis. Each run carries a
//! ticket, so a run cancelled before its delay elapses cannot overwrite a
//! newer session.

use leptos::prelude::*;
use shop::diagnostics::{
    ANALYSIS_DELAY_MS, DiagnosticResult, SCOOTER_MODELS, SymptomCategory, symptoms_in,
};
use shop::{DiagnosticWizard, WizardError, WizardStep};

use crate::components::step_progress::StepProgress;
use crate::util::delay::ScopeAlive;

#[cfg(test)]
#[path = "diagnostics_test.rs"]
mod diagnostics_test;

#[component]
pub fn DiagnosticsPage() -> impl IntoView {
    let wizard = RwSignal::new(DiagnosticWizard::new());
    let step = Memo::new(move |_| wizard.with(DiagnosticWizard::step));
    let alive = ScopeAlive::register();

    let run_analysis = Callback::new(move |()| match wizard.try_update(DiagnosticWizard::start_analysis) {
        Some(Ok(ticket)) => alive.after(ANALYSIS_DELAY_MS, move || {
            match wizard.try_update(|w| w.complete_analysis(ticket)) {
                Some(Ok(true)) | None => {}
                Some(Ok(false)) => log::debug!("discarded result of a cancelled analysis"),
                Some(Err(err)) => log::warn!("analysis result rejected: {err}"),
            }
        }),
        Some(Err(err)) => log::warn!("analysis not started: {err}"),
        None => {}
    });

    view! {
        <div class="page diagnostics">
            <div class="page__header">
                <div>
                    <h1>"AI Diagnostics"</h1>
                    <p class="page__subtitle">"Let AI help diagnose scooter issues quickly and accurately"</p>
                </div>
                <button class="btn btn--secondary" on:click=move |_| start_over(wizard)>
                    "\u{21BA} Start New Diagnosis"
                </button>
            </div>

            <StepProgress wizard/>

            <section class="panel diagnostics__body">
                {move || match step.get() {
                    WizardStep::SelectModel => view! { <ModelStep wizard/> }.into_any(),
                    WizardStep::DescribeSymptoms => {
                        view! { <SymptomStep wizard run_analysis/> }.into_any()
                    }
                    WizardStep::Analyzing => view! { <AnalyzingStep wizard/> }.into_any(),
                    WizardStep::Results => view! { <ResultsStep wizard/> }.into_any(),
                }}
            </section>
        </div>
    }
}

/// Back to model selection with every selection cleared, from any step.
/// A pending analysis from before the reset is ignored when it lands.
pub(crate) fn start_over(wizard: RwSignal<DiagnosticWizard>) {
    wizard.update(DiagnosticWizard::reset);
}

/// Apply a wizard transition, logging a rejected one.
fn apply(wizard: RwSignal<DiagnosticWizard>, action: impl FnOnce(&mut DiagnosticWizard) -> Result<(), WizardError>) {
    if let Some(Err(err)) = wizard.try_update(action) {
        log::warn!("diagnostics: {err}");
    }
}

#[component]
fn ModelStep(wizard: RwSignal<DiagnosticWizard>) -> impl IntoView {
    let cards = SCOOTER_MODELS
        .into_iter()
        .map(|model| {
            let selected = move || wizard.with(|w| w.selected_model() == Some(model.name));
            view! {
                <button
                    class="model-card"
                    class:model-card--selected=selected
                    on:click=move |_| apply(wizard, |w| w.select_model(model.name))
                >
                    <span class="model-card__name">{model.name}</span>
                    <span class="model-card__brand">{model.brand}</span>
                    {model.popular.then(|| view! { <span class="badge badge--popular">"Popular"</span> })}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <h2 class="diagnostics__title">"Select Scooter Model"</h2>
        <div class="model-grid">{cards}</div>
        <div class="diagnostics__actions">
            <button class="btn btn--primary" on:click=move |_| apply(wizard, DiagnosticWizard::continue_to_symptoms)>
                "Continue"
            </button>
        </div>
    }
}

#[component]
fn SymptomStep(wizard: RwSignal<DiagnosticWizard>, run_analysis: Callback<()>) -> impl IntoView {
    let groups = SymptomCategory::ALL
        .into_iter()
        .map(|category| {
            let boxes = symptoms_in(category)
                .map(|symptom| {
                    let checked = move || wizard.with(|w| w.is_symptom_selected(symptom.id));
                    view! {
                        <label class="symptom">
                            <input
                                type="checkbox"
                                prop:checked=checked
                                on:change=move |_| apply(wizard, |w| w.toggle_symptom(symptom.id).map(drop))
                            />
                            <span>{symptom.label}</span>
                        </label>
                    }
                })
                .collect::<Vec<_>>();
            view! {
                <fieldset class="symptom-group">
                    <legend>{category.heading()}</legend>
                    {boxes}
                </fieldset>
            }
        })
        .collect::<Vec<_>>();

    let model_line = move || {
        wizard.with(|w| w.selected_model().map(|model| format!("Diagnosing: {model}")))
    };

    view! {
        <h2 class="diagnostics__title">"Describe Symptoms"</h2>
        <p class="diagnostics__model">{model_line}</p>
        <div class="symptom-groups">{groups}</div>
        <div class="diagnostics__actions">
            <button class="btn btn--secondary" on:click=move |_| apply(wizard, DiagnosticWizard::back)>
                "Back"
            </button>
            <button
                class="btn btn--primary"
                disabled=move || !wizard.with(DiagnosticWizard::can_run_analysis)
                on:click=move |_| run_analysis.run(())
            >
                "Run AI Diagnosis"
            </button>
        </div>
    }
}

#[component]
fn AnalyzingStep(wizard: RwSignal<DiagnosticWizard>) -> impl IntoView {
    let count = wizard.with_untracked(|w| w.selected_symptoms().len());
    let noun = if count == 1 { "symptom" } else { "symptoms" };

    view! {
        <div class="analyzing">
            <div class="analyzing__spinner" aria-busy="true"></div>
            <h2 class="diagnostics__title">"Analyzing..."</h2>
            <p>{format!("Processing {count} {noun} with AI diagnostic engine")}</p>
            <button class="btn btn--secondary" on:click=move |_| start_over(wizard)>
                "Cancel"
            </button>
        </div>
    }
}

#[component]
fn ResultsStep(wizard: RwSignal<DiagnosticWizard>) -> impl IntoView {
    let Some(result) = wizard.with_untracked(|w| w.result().cloned()) else {
        return view! { <p class="diagnostics__missing">"No diagnosis available."</p> }.into_any();
    };

    view! {
        <ResultSummary result/>
        <div class="diagnostics__actions">
            <button class="btn btn--secondary" on:click=move |_| start_over(wizard)>
                "New Diagnosis"
            </button>
            <a class="btn btn--primary" href="/jobs">"Start Repair Job"</a>
        </div>
    }
    .into_any()
}

#[component]
fn ResultSummary(result: DiagnosticResult) -> impl IntoView {
    let severity_class = format!("badge badge--severity badge--{}", result.severity.as_str());
    let confidence = format!("{}% confidence", result.confidence);
    let parts = result
        .parts
        .into_iter()
        .map(|part| {
            let class = format!("badge badge--{}", part.availability.as_str());
            view! {
                <li class="required-part">
                    <span class="required-part__name">{part.name}</span>
                    <span class="required-part__cost">{part.cost}</span>
                    <span class=class>{part.availability.as_str()}</span>
                </li>
            }
        })
        .collect::<Vec<_>>();
    let steps = result
        .steps
        .into_iter()
        .map(|step| view! { <li>{step}</li> })
        .collect::<Vec<_>>();

    view! {
        <div class="result">
            <div class="result__header">
                <h2 class="diagnostics__title">{result.primary_issue}</h2>
                <span class=severity_class>{result.severity.as_str()}</span>
            </div>
            <p class="result__confidence">{confidence}</p>
            <dl class="result__estimates">
                <div><dt>"Estimated time"</dt><dd>{result.estimated_time}</dd></div>
                <div><dt>"Estimated cost"</dt><dd>{result.estimated_cost}</dd></div>
            </dl>
            <h3>"Required Parts"</h3>
            <ul class="required-parts">{parts}</ul>
            <h3>"Repair Steps"</h3>
            <ol class="repair-steps">{steps}</ol>
        </div>
    }
}
