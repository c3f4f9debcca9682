//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the questionnaire while reading and writing the shared
//! `RwSignal<Questionnaire>` and `RwSignal<ExportState>` from Leptos context.

pub mod completion_panel;
pub mod intro_modal;
pub mod progress_bar;
pub mod radial_selector;
pub mod undo_button;
