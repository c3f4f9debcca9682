//! Completion panel: export the report or review the answers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shown once every item is answered. The export button claims the
//! questionnaire's export slot, yields so the busy label paints, renders the
//! report with the browser font fetcher, and saves it as a download. The slot
//! is released on every path, so the button re-enables after a failure.

use leptos::prelude::*;
use survey::Questionnaire;

use crate::state::export::{ExportState, export_button_label, saved_line};

#[component]
pub fn CompletionPanel() -> impl IntoView {
    let questionnaire = expect_context::<RwSignal<Questionnaire>>();
    let export = expect_context::<RwSignal<ExportState>>();
    let busy = move || questionnaire.with(Questionnaire::is_exporting);
    let notice = move || export.with(|s| s.notice.clone());
    let last_file = move || export.with(|s| s.last_file.clone());

    let on_export = move |_| start_export(questionnaire, export);
    let on_review = move |_| {
        questionnaire.maybe_update(Questionnaire::restart_review);
    };

    view! {
        <section class="completion">
            <div class="completion__badge">"✓"</div>
            <h2 class="completion__title">"Assessment Complete"</h2>
            <p class="completion__text">"Your answers are ready to export."</p>
            <button
                class="completion__export"
                type="button"
                disabled=busy
                on:click=on_export
            >
                {move || export_button_label(busy())}
            </button>
            <Show when=move || last_file().is_some()>
                <p class="completion__saved">{move || last_file().map(|f| saved_line(&f)).unwrap_or_default()}</p>
            </Show>
            <Show when=move || notice().is_some()>
                <div class="completion__notice" role="status">
                    <span>{move || notice().unwrap_or_default()}</span>
                    <button
                        class="completion__dismiss"
                        type="button"
                        aria-label="Dismiss"
                        on:click=move |_| export.update(ExportState::dismiss_notice)
                    >
                        "×"
                    </button>
                </div>
            </Show>
            <button class="completion__review" type="button" on:click=on_review>
                "Review / Start Over"
            </button>
        </section>
    }
}

/// Claim the export slot and run the export in the background.
///
/// A second click while an export is pending finds the slot taken and
/// returns without doing anything.
fn start_export(questionnaire: RwSignal<Questionnaire>, export: RwSignal<ExportState>) {
    let Some(ticket) = questionnaire.try_update(Questionnaire::begin_export).flatten() else {
        return;
    };

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(run_export(ticket, questionnaire, export));

    #[cfg(not(feature = "csr"))]
    {
        drop(ticket);
        export.update(ExportState::record_failure);
        questionnaire.update(Questionnaire::finish_export);
    }
}

#[cfg(feature = "csr")]
async fn run_export(
    ticket: survey::ExportTicket,
    questionnaire: RwSignal<Questionnaire>,
    export: RwSignal<ExportState>,
) {
    use std::time::Duration;

    use crate::state::export::EXPORT_YIELD_MS;
    use crate::util::download::{PDF_MIME, save_bytes};
    use crate::util::font_fetch::GlooFontFetcher;
    use crate::util::notify::{EXPORT_FAILED_ALERT, alert};

    gloo_timers::future::sleep(Duration::from_millis(EXPORT_YIELD_MS)).await;

    let config = report::ReportConfig::default();
    let rendered = report::render_report(&GlooFontFetcher, &config, &ticket.catalog, &ticket.session).await;
    match rendered {
        Ok(rendered) => match save_bytes(&rendered.file_name, &rendered.bytes, PDF_MIME) {
            Ok(()) => {
                leptos::logging::log!("report saved as {}", rendered.file_name);
                export.update(|s| s.record_success(rendered.file_name, rendered.font_warning));
            }
            Err(err) => {
                leptos::logging::error!("saving report failed: {err}");
                export.update(ExportState::record_failure);
                alert(EXPORT_FAILED_ALERT);
            }
        },
        Err(err) => {
            leptos::logging::error!("report generation failed: {err}");
            export.update(ExportState::record_failure);
            alert(EXPORT_FAILED_ALERT);
        }
    }

    questionnaire.update(Questionnaire::finish_export);
}
