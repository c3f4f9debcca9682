//! Step back to the previous item.

use leptos::prelude::*;
use survey::Questionnaire;

#[component]
pub fn UndoButton() -> impl IntoView {
    let questionnaire = expect_context::<RwSignal<Questionnaire>>();
    let visible = move || questionnaire.with(Questionnaire::shows_undo);
    let enabled = move || questionnaire.with(Questionnaire::can_undo);

    let on_undo = move |_| {
        questionnaire.update(|q| {
            if let Err(err) = q.undo() {
                leptos::logging::warn!("undo rejected: {err}");
            }
        });
    };

    view! {
        <Show when=visible>
            <button class="undo-button" type="button" disabled=move || !enabled() on:click=on_undo>
                "↶ Undo"
            </button>
        </Show>
    }
}
