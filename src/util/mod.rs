//! Browser helpers used by the checklist shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser APIs (fetch, Blob download, alerts, the
//! clock, pointer geometry) from components so the pure parts stay testable
//! on the host.

pub mod date;
pub mod download;
pub mod font_fetch;
pub mod notify;
pub mod pointer;
