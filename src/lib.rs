//! Browser shell for the checklist questionnaire.
//!
//! SYSTEM CONTEXT
//! ==============
//! A client-side-rendered Leptos app. All answer state lives in
//! `survey::Questionnaire`, provided as a signal; components render it and
//! forward pointer events back into it. At the end the `report` crate turns
//! the session into a PDF that is saved locally. Nothing is sent to a server.
//!
//! | Module | Role |
//! |--------|------|
//! | [`app`] | Root component and context providers |
//! | [`pages`] | The checklist screen |
//! | [`components`] | Intro modal, progress bar, selector, undo, completion |
//! | [`state`] | Shell-only state (export notices) |
//! | [`util`] | Browser helpers: fetch, download, alerts, date, pointer math |

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger already installed: {err}");
    }
    leptos::mount::mount_to_body(app::App);
}
