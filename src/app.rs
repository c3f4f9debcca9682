//! Root component: builds the questionnaire and provides shared state.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_meta::{Title, provide_meta_context};
use survey::{Catalog, Questionnaire};

use crate::pages::checklist::ChecklistPage;
use crate::state::export::ExportState;
use crate::util::date::today_iso;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    match Catalog::builtin() {
        Ok(catalog) => {
            let questionnaire = RwSignal::new(Questionnaire::new(Arc::new(catalog), today_iso()));
            provide_context(questionnaire);
            provide_context(RwSignal::new(ExportState::default()));
            view! {
                <Title text="BDSM Check List"/>
                <ChecklistPage/>
            }
            .into_any()
        }
        Err(err) => {
            leptos::logging::error!("checklist catalog failed to load: {err}");
            view! {
                <Title text="BDSM Check List"/>
                <p class="load-error">{format!("The checklist could not be loaded: {err}")}</p>
            }
            .into_any()
        }
    }
}
