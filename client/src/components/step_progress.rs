//! Four-step indicator across the top of the diagnostics wizard.

use leptos::prelude::*;
use shop::DiagnosticWizard;
use shop::diagnostics::{StepMarker, WizardStep};

#[component]
pub fn StepProgress(wizard: RwSignal<DiagnosticWizard>) -> impl IntoView {
    let steps = WizardStep::ALL
        .into_iter()
        .map(|step| {
            let marker = move || wizard.with(|w| w.marker(step));
            let class = move || match marker() {
                StepMarker::Complete => "steps__item steps__item--complete",
                StepMarker::Current => "steps__item steps__item--current",
                StepMarker::Upcoming => "steps__item",
            };
            let badge = move || match marker() {
                StepMarker::Complete => "\u{2714}".to_owned(),
                StepMarker::Current | StepMarker::Upcoming => (step.index() + 1).to_string(),
            };
            view! {
                <li class=class>
                    <span class="steps__badge">{badge}</span>
                    <span class="steps__title">{step.title()}</span>
                </li>
            }
        })
        .collect::<Vec<_>>();

    let caption = move || wizard.with(|w| w.step().caption());

    view! {
        <ol class="steps">{steps}</ol>
        <p class="steps__caption">{caption}</p>
    }
}
