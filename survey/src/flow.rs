//! Top-level questionnaire flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! The shell keeps one [`Questionnaire`] in a signal and forwards every
//! pointer and button event into it. Everything the view shows (phase,
//! current card, progress, which sector is lit) is read back out of it.
//!
//! DESIGN
//! ======
//! A selection writes the answer store and advances the walker immediately.
//! The returned [`Transition`] token only delays what the view shows: while
//! it is pending the displayed card is still the committed one and all input
//! is dropped. The shell schedules `finish_transition(token)` after the exit
//! animation; tokens from an earlier item are ignored.
//!
//! TRADE-OFFS
//! ==========
//! Guards return `None`/`false` instead of errors for events the view can
//! legitimately fire while disabled (clicks during a transition, a second
//! export click). Walker errors still propagate since they mean the guards
//! themselves are wrong.

#[cfg(test)]
#[path = "flow_test.rs"]
mod flow_test;

use std::sync::Arc;

use tracing::{debug, info};

use crate::item::{Catalog, ChecklistItem};
use crate::region::{Point, RegionKey};
use crate::selector::{Commit, RadialSelector, SectorVisual};
use crate::walker::{Session, SessionWalker, WalkError};

/// Coarse shell state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Intro overlay is up; the selector is inert.
    NotStarted,
    InProgress,
    /// Every item answered and no transition pending.
    Finished,
}

/// A committed selection whose exit animation has not finished yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub token: u64,
    pub key: RegionKey,
    /// Position of the item that was just answered.
    pub shown_position: usize,
}

/// Snapshot handed to the report renderer.
#[derive(Clone, Debug)]
pub struct ExportTicket {
    pub catalog: Arc<Catalog>,
    pub session: Session,
}

#[derive(Clone, Debug)]
pub struct Questionnaire {
    walker: SessionWalker,
    selector: RadialSelector,
    started: bool,
    pending: Option<Transition>,
    next_token: u64,
    exporting: bool,
}

impl Questionnaire {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, date: impl Into<String>) -> Self {
        Self {
            walker: SessionWalker::new(catalog, date),
            selector: RadialSelector::new(),
            started: false,
            pending: None,
            next_token: 0,
            exporting: false,
        }
    }

    // --- Read side ---

    #[must_use]
    pub fn phase(&self) -> Phase {
        if !self.started {
            Phase::NotStarted
        } else if self.walker.is_finished() && self.pending.is_none() {
            Phase::Finished
        } else {
            Phase::InProgress
        }
    }

    #[must_use]
    pub fn walker(&self) -> &SessionWalker {
        &self.walker
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        self.walker.session()
    }

    #[must_use]
    pub fn selector(&self) -> &RadialSelector {
        &self.selector
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.walker.item_count()
    }

    #[must_use]
    pub fn pending_transition(&self) -> Option<Transition> {
        self.pending
    }

    #[must_use]
    pub fn is_exporting(&self) -> bool {
        self.exporting
    }

    /// Whether pointer input reaches the selector.
    #[must_use]
    pub fn accepts_input(&self) -> bool {
        self.phase() == Phase::InProgress && self.pending.is_none() && !self.walker.is_finished()
    }

    /// Position of the card on screen; lags the walker during a transition.
    #[must_use]
    pub fn displayed_position(&self) -> usize {
        self.pending.map_or(self.walker.position(), |t| t.shown_position)
    }

    #[must_use]
    pub fn displayed_item(&self) -> Option<&ChecklistItem> {
        self.walker.catalog().get(self.displayed_position())
    }

    /// `"k / n"` with `k` one-based and capped at `n`.
    #[must_use]
    pub fn ordinal_label(&self) -> String {
        let count = self.item_count();
        let shown = (self.displayed_position() + 1).min(count);
        format!("{shown} / {count}")
    }

    /// Rounded share of items behind the displayed card, in `0..=100`.
    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        let count = self.item_count();
        if count == 0 {
            return 100;
        }
        let done = self.displayed_position().min(count);
        let percent = (done * 100 + count / 2) / count;
        u8::try_from(percent.min(100)).unwrap_or(100)
    }

    /// Whether the undo control is on screen. Follows the displayed card, so
    /// it stays hidden while the first card plays its exit transition.
    #[must_use]
    pub fn shows_undo(&self) -> bool {
        self.phase() == Phase::InProgress && self.displayed_position() > 0
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.accepts_input() && self.walker.position() > 0
    }

    #[must_use]
    pub fn visual(&self, key: RegionKey) -> SectorVisual {
        self.selector.visual(key)
    }

    // --- Intro ---

    pub fn set_identity_a(&mut self, value: impl Into<String>) {
        self.walker.set_identity_a(value);
    }

    pub fn set_identity_b(&mut self, value: impl Into<String>) {
        self.walker.set_identity_b(value);
    }

    /// Leave the intro overlay. Returns `false` if already started.
    pub fn start(&mut self) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        info!(items = self.item_count(), "questionnaire started");
        true
    }

    // --- Selector input ---

    pub fn hover(&mut self, key: RegionKey) -> bool {
        self.accepts_input() && self.selector.hover(key)
    }

    pub fn unhover(&mut self, key: RegionKey) -> bool {
        self.accepts_input() && self.selector.unhover(key)
    }

    pub fn hover_at(&mut self, point: Point) -> bool {
        self.accepts_input() && self.selector.pointer_move(point)
    }

    /// Pointer left the dial.
    pub fn leave(&mut self) -> bool {
        self.accepts_input() && self.selector.pointer_exit()
    }

    /// Commit `key` for the current item.
    ///
    /// Returns `Ok(None)` when input is not accepted right now.
    ///
    /// # Errors
    ///
    /// Propagates [`WalkError`] if the walker rejects the submission.
    pub fn select(&mut self, key: RegionKey) -> Result<Option<Transition>, WalkError> {
        if !self.accepts_input() {
            return Ok(None);
        }
        match self.selector.commit(key) {
            Some(commit) => self.apply(commit).map(Some),
            None => Ok(None),
        }
    }

    /// Commit whatever region lies under `point`.
    ///
    /// # Errors
    ///
    /// Propagates [`WalkError`] if the walker rejects the submission.
    pub fn select_at(&mut self, point: Point) -> Result<Option<Transition>, WalkError> {
        if !self.accepts_input() {
            return Ok(None);
        }
        match self.selector.confirm_at(point) {
            Some(commit) => self.apply(commit).map(Some),
            None => Ok(None),
        }
    }

    fn apply(&mut self, commit: Commit) -> Result<Transition, WalkError> {
        let shown_position = self.walker.position();
        if let Err(err) = self.walker.submit(commit.response) {
            self.selector.reset();
            return Err(err);
        }
        self.next_token += 1;
        let transition = Transition { token: self.next_token, key: commit.key, shown_position };
        self.pending = Some(transition);
        Ok(transition)
    }

    /// End the exit animation for `token` and show the next card.
    /// Returns `false` for stale or unknown tokens.
    pub fn finish_transition(&mut self, token: u64) -> bool {
        match self.pending {
            Some(t) if t.token == token => {
                self.pending = None;
                self.selector.reset();
                debug!(token, position = self.walker.position(), "transition finished");
                if self.walker.is_finished() {
                    info!("questionnaire finished");
                }
                true
            }
            _ => false,
        }
    }

    // --- Navigation ---

    /// Step back one item.
    ///
    /// Returns `Ok(false)` when undo is not available.
    ///
    /// # Errors
    ///
    /// Propagates [`WalkError`] from the walker.
    pub fn undo(&mut self) -> Result<bool, WalkError> {
        if !self.can_undo() {
            return Ok(false);
        }
        self.walker.undo()?;
        self.selector.reset();
        Ok(true)
    }

    /// Rewind to the first card keeping every answer. Only from `Finished`.
    pub fn restart_review(&mut self) -> bool {
        if self.phase() != Phase::Finished {
            return false;
        }
        self.walker.restart_review();
        self.selector.reset();
        true
    }

    // --- Export guard ---

    /// Claim the export slot. `None` unless finished and idle.
    pub fn begin_export(&mut self) -> Option<ExportTicket> {
        if self.phase() != Phase::Finished || self.exporting {
            return None;
        }
        self.exporting = true;
        info!("export started");
        Some(ExportTicket {
            catalog: self.walker.shared_catalog(),
            session: self.walker.session().clone(),
        })
    }

    pub fn finish_export(&mut self) {
        self.exporting = false;
    }
}
