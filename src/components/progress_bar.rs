//! Progress bar and ordinal badge above the selector.

#[cfg(test)]
#[path = "progress_bar_test.rs"]
mod progress_bar_test;

use leptos::prelude::*;
use survey::Questionnaire;

#[component]
pub fn ProgressBar() -> impl IntoView {
    let questionnaire = expect_context::<RwSignal<Questionnaire>>();
    let fill_style = move || fill_width(questionnaire.with(Questionnaire::progress_percent));
    let ordinal = move || questionnaire.with(Questionnaire::ordinal_label);

    view! {
        <header class="progress">
            <div
                class="progress__track"
                role="progressbar"
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow=move || questionnaire.with(Questionnaire::progress_percent)
            >
                <div class="progress__fill" style=fill_style></div>
            </div>
            <span class="progress__ordinal">{ordinal}</span>
        </header>
    }
}

fn fill_width(percent: u8) -> String {
    format!("width: {}%;", percent.min(100))
}
