//! The checklist screen: intro overlay, question stage, completion panel.

#[cfg(test)]
#[path = "checklist_test.rs"]
mod checklist_test;

use leptos::prelude::*;
use survey::{Phase, Questionnaire};

use crate::components::completion_panel::CompletionPanel;
use crate::components::intro_modal::IntroModal;
use crate::components::progress_bar::ProgressBar;
use crate::components::radial_selector::RadialSelector;
use crate::components::undo_button::UndoButton;

#[component]
pub fn ChecklistPage() -> impl IntoView {
    let questionnaire = expect_context::<RwSignal<Questionnaire>>();
    let phase = move || questionnaire.with(Questionnaire::phase);

    view! {
        <div class="checklist">
            <Show when=move || phase() == Phase::NotStarted>
                <IntroModal/>
            </Show>
            <main class=move || stage_class(phase())>
                <ProgressBar/>
                <Show
                    when=move || phase() == Phase::Finished
                    fallback=|| view! {
                        <div class="question-stage">
                            <RadialSelector/>
                            <UndoButton/>
                        </div>
                    }
                >
                    <CompletionPanel/>
                </Show>
                <footer class="checklist__footer">
                    "Answers stay in this browser tab. Nothing is uploaded."
                </footer>
            </main>
        </div>
    }
}

/// The stage is blurred and inert until the intro modal is dismissed.
fn stage_class(phase: Phase) -> &'static str {
    match phase {
        Phase::NotStarted => "checklist__stage checklist__stage--inert",
        Phase::InProgress | Phase::Finished => "checklist__stage",
    }
}
