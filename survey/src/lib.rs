//! Questionnaire core for the checklist app.
//!
//! This crate is UI-framework agnostic. It owns everything with an invariant
//! worth testing: the ordered item catalog, the answer store, the linear
//! session walk with undo, the radial region geometry, the selector's
//! hover/commit state machine, and the top-level flow that ties them to the
//! export guard. The Leptos shell only renders what [`flow::Questionnaire`]
//! reports and forwards pointer events back into it.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`item`] | Checklist items and the embedded catalog |
//! | [`response`] | Response record, interest and role enums |
//! | [`store`] | Answer store keyed by item id |
//! | [`walker`] | Session record and the linear walker with undo |
//! | [`region`] | Angular regions, tiling check, hit-testing, SVG paths |
//! | [`selector`] | Hover/commit state machine over the regions |
//! | [`flow`] | Shell flow: start, select, transition, undo, review, export guard |
//! | [`consts`] | Shared geometry and timing constants |

pub mod consts;
pub mod flow;
pub mod item;
pub mod region;
pub mod response;
pub mod selector;
pub mod store;
pub mod walker;

pub use flow::{ExportTicket, Phase, Questionnaire, Transition};
pub use item::{Catalog, CatalogError, ChecklistItem};
pub use region::{Point, Region, RegionChoice, RegionKey, Stance, TilingError, REGIONS};
pub use response::{InterestLevel, Response, RolePreference};
pub use selector::{Commit, RadialSelector, SectorVisual, SelectorState};
pub use store::AnswerStore;
pub use walker::{Session, SessionWalker, WalkError};
