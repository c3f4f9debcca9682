//! Shell state shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! The questionnaire itself lives in the survey crate and is provided as
//! `RwSignal<survey::Questionnaire>`. Modules here hold the UI-only state
//! that has no place in the core: export notices and the like.

pub mod export;
