//! Entry modal collecting the optional identity fields.

#[cfg(test)]
#[path = "intro_modal_test.rs"]
mod intro_modal_test;

use leptos::prelude::*;
use survey::Questionnaire;

#[component]
pub fn IntroModal() -> impl IntoView {
    let questionnaire = expect_context::<RwSignal<Questionnaire>>();
    let name = RwSignal::new(questionnaire.with_untracked(|q| q.session().identity_a.clone()));
    let partner = RwSignal::new(questionnaire.with_untracked(|q| q.session().identity_b.clone()));
    let count = move || question_count_label(questionnaire.with(Questionnaire::item_count));

    let on_start = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        questionnaire.update(|q| {
            q.set_identity_a(name.get_untracked());
            q.set_identity_b(partner.get_untracked());
            q.start();
        });
    };

    view! {
        <div class="intro-backdrop">
            <form class="intro-card" on:submit=on_start>
                <h1 class="intro-card__title">"BDSM Check List"</h1>
                <p class="intro-card__subtitle">"Before we begin"</p>
                <label class="intro-field">
                    <span>"Your Name / 昵称"</span>
                    <input
                        class="intro-input"
                        type="text"
                        placeholder="Optional"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="intro-field">
                    <span>"Partner / 伴侣"</span>
                    <input
                        class="intro-input"
                        type="text"
                        placeholder="Optional"
                        prop:value=move || partner.get()
                        on:input=move |ev| partner.set(event_target_value(&ev))
                    />
                </label>
                <button class="intro-start" type="submit">"Start"</button>
                <p class="intro-card__count">{count}</p>
            </form>
        </div>
    }
}

fn question_count_label(count: usize) -> String {
    if count == 1 { "1 Question".to_owned() } else { format!("{count} Questions") }
}
