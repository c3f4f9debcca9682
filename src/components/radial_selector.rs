//! SVG radial selector bound to the current checklist item.
//!
//! SYSTEM CONTEXT
//! ==============
//! Ten donut slices surround a centre card showing the displayed item; the
//! card is an HTML overlay centred on the SVG by the stylesheet. The
//! wrapper `div` receives pointer events; each event is mapped to view-box
//! units and handed to `Questionnaire`, which owns hover and commit state.
//!
//! DESIGN
//! ======
//! Slices are purely visual: hit-testing is angular over the full tiling
//! spans, so the gaps between drawn slices still select their neighbour.
//! After a commit the slices animate for `COMMIT_TRANSITION_MS`, then a
//! timeout finishes the transition by token.

#[cfg(test)]
#[path = "radial_selector_test.rs"]
mod radial_selector_test;

use leptos::prelude::*;
use survey::consts::{CENTER, RADIUS_OUTER};
use survey::{Questionnaire, REGIONS, Region, SectorVisual};

/// Stroke applied to every slice outline.
const SLICE_STROKE: &str = "#ffffff";

/// Vertical offsets of icon, label and sub-label around the label anchor.
const ICON_DY: f64 = -14.0;
const LABEL_DY: f64 = 8.0;
const SUB_LABEL_DY: f64 = 24.0;

#[component]
pub fn RadialSelector() -> impl IntoView {
    let questionnaire = expect_context::<RwSignal<Questionnaire>>();
    let dial_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg_attr(not(feature = "csr"), allow(unused_variables))]
    let on_pointer_move = move |ev: leptos::ev::PointerEvent| {
        #[cfg(feature = "csr")]
        {
            let Some(dial) = dial_ref.get_untracked() else {
                return;
            };
            if let Some(point) = crate::util::pointer::viewbox_point(&ev, &dial) {
                questionnaire.maybe_update(|q| q.hover_at(point));
            }
        }
    };

    let on_pointer_leave = move |_ev: leptos::ev::PointerEvent| {
        questionnaire.maybe_update(Questionnaire::leave);
    };

    #[cfg_attr(not(feature = "csr"), allow(unused_variables))]
    let on_click = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "csr")]
        {
            let Some(dial) = dial_ref.get_untracked() else {
                return;
            };
            let Some(point) = crate::util::pointer::viewbox_point(&ev, &dial) else {
                return;
            };
            match questionnaire.try_update(|q| q.select_at(point)) {
                Some(Ok(Some(transition))) => schedule_finish(questionnaire, transition.token),
                Some(Err(err)) => leptos::logging::error!("select rejected: {err}"),
                Some(Ok(None)) | None => {}
            }
        }
    };

    let sectors = REGIONS
        .iter()
        .map(|region| {
            let key = region.key;
            let visual = move || questionnaire.with(|q| q.visual(key));
            let anchor = region.label_anchor();
            view! {
                <g
                    class="dial__sector"
                    data-region=key.as_str()
                    style=move || sector_style(visual())
                >
                    <path
                        d=region.sector_path()
                        fill=move || sector_fill(region, visual())
                        fill-opacity=move || sector_fill_opacity(visual())
                        stroke=SLICE_STROKE
                        stroke-width="2"
                    />
                    <text
                        class="dial__icon"
                        x=anchor.x
                        y={anchor.y + ICON_DY}
                        text-anchor="middle"
                        fill=move || text_fill(region, visual())
                    >
                        {region.icon}
                    </text>
                    <text
                        class="dial__label"
                        x=anchor.x
                        y={anchor.y + LABEL_DY}
                        text-anchor="middle"
                        fill=move || text_fill(region, visual())
                    >
                        {region.label}
                    </text>
                    <text
                        class="dial__sublabel"
                        x=anchor.x
                        y={anchor.y + SUB_LABEL_DY}
                        text-anchor="middle"
                        fill=move || text_fill(region, visual())
                    >
                        {region.sub_label}
                    </text>
                </g>
            }
        })
        .collect_view();

    let category = move || {
        questionnaire.with(|q| q.displayed_item().map(|item| item.category.clone()).unwrap_or_default())
    };
    let label = move || {
        questionnaire.with(|q| q.displayed_item().map(|item| item.label.clone()).unwrap_or_default())
    };
    let card_classes = move || card_class(questionnaire.with(|q| q.selector().is_committing()));

    view! {
        <div
            class="dial"
            node_ref=dial_ref
            on:pointermove=on_pointer_move
            on:pointerleave=on_pointer_leave
            on:click=on_click
        >
            <svg class="dial__svg" viewBox=viewbox() role="img" aria-label="Response selector">
                <circle class="dial__ring" cx=CENTER cy=CENTER r=RADIUS_OUTER fill="none"/>
                {sectors}
            </svg>
            <div class=card_classes>
                <span class="dial__category">{category}</span>
                <span class="dial__item">{label}</span>
            </div>
        </div>
    }
}

/// Finish the pending transition once the exit animation has played.
#[cfg(feature = "csr")]
fn schedule_finish(questionnaire: RwSignal<Questionnaire>, token: u64) {
    gloo_timers::callback::Timeout::new(survey::consts::COMMIT_TRANSITION_MS, move || {
        questionnaire.maybe_update(|q| q.finish_transition(token));
    })
    .forget();
}

fn viewbox() -> String {
    let size = survey::consts::VIEWBOX_SIZE;
    format!("0 0 {size} {size}")
}

/// Inline style scaling a slice around the dial centre.
fn sector_style(visual: SectorVisual) -> String {
    format!(
        "transform-origin: {CENTER}px {CENTER}px; transform: scale({}); opacity: {}; transition: transform {}ms ease, opacity {}ms ease;",
        visual.scale(),
        visual.opacity(),
        survey::consts::COMMIT_TRANSITION_MS,
        survey::consts::COMMIT_TRANSITION_MS,
    )
}

/// Slice fill: the region colour when hovered or chosen, white otherwise.
fn sector_fill(region: &Region, visual: SectorVisual) -> &'static str {
    if visual.is_filled() { region.color } else { "#ffffff" }
}

fn sector_fill_opacity(visual: SectorVisual) -> &'static str {
    if visual.is_filled() { "1" } else { "0.92" }
}

/// Text colour: white on a filled slice, the region colour on a plain one.
fn text_fill(region: &Region, visual: SectorVisual) -> &'static str {
    if visual.is_filled() { "#ffffff" } else { region.color }
}

fn card_class(committing: bool) -> &'static str {
    if committing { "dial__card dial__card--leaving" } else { "dial__card" }
}
