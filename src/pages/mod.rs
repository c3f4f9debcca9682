//! Page modules for top-level screens.
//!
//! ARCHITECTURE
//! ============
//! The app has a single screen; the page owns phase-level orchestration and
//! delegates rendering details to `components`.

pub mod checklist;
