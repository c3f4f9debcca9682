//! Session record and the linear walker over the catalog.
//!
//! The walker owns the only cursor into the item sequence. `position` ranges
//! over `0..=len`; `position == len` means finished. Precondition violations
//! come back as [`WalkError`] instead of being clamped so integration bugs in
//! the shell surface in tests.

#[cfg(test)]
#[path = "walker_test.rs"]
mod walker_test;

use std::sync::Arc;

use tracing::debug;

use crate::item::{Catalog, ChecklistItem};
use crate::response::Response;
use crate::store::AnswerStore;

/// Error returned by walker operations called outside their preconditions.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WalkError {
    /// There is no current item because every item has been answered.
    #[error("session finished at position {position}; no current item")]
    Finished { position: usize },
    /// Undo was requested at the first item.
    #[error("cannot undo before the first item")]
    AtStart,
    /// The current item id is missing from the answer store.
    #[error("item {id} is not in the answer store")]
    UnknownItem { id: String },
}

/// In-memory aggregate of one pass through the checklist.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    answers: AnswerStore,
    pub identity_a: String,
    pub identity_b: String,
    pub date: String,
    position: usize,
}

impl Session {
    #[must_use]
    pub fn new(catalog: &Catalog, date: impl Into<String>) -> Self {
        Self {
            answers: AnswerStore::new(catalog),
            identity_a: String::new(),
            identity_b: String::new(),
            date: date.into(),
            position: 0,
        }
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerStore {
        &self.answers
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }
}

/// Linear traversal of the catalog with single-step undo.
#[derive(Clone, Debug)]
pub struct SessionWalker {
    catalog: Arc<Catalog>,
    session: Session,
}

impl SessionWalker {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, date: impl Into<String>) -> Self {
        let session = Session::new(&catalog, date);
        Self { catalog, session }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Shared handle to the catalog for snapshots that outlive a borrow.
    #[must_use]
    pub fn shared_catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.session.position
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.catalog.len()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.session.position >= self.catalog.len()
    }

    /// The item at the current position.
    ///
    /// # Errors
    ///
    /// Returns [`WalkError::Finished`] once every item has been answered.
    pub fn current_item(&self) -> Result<&ChecklistItem, WalkError> {
        self.catalog
            .get(self.session.position)
            .ok_or(WalkError::Finished { position: self.session.position })
    }

    /// Store `response` for the current item and advance by one.
    ///
    /// Returns the new position.
    ///
    /// # Errors
    ///
    /// Returns [`WalkError::Finished`] when there is no current item.
    pub fn submit(&mut self, response: Response) -> Result<usize, WalkError> {
        let id = self.current_item()?.id.clone();
        if !self.session.answers.overwrite(&id, response) {
            return Err(WalkError::UnknownItem { id });
        }
        self.session.position += 1;
        debug!(item = %id, position = self.session.position, "response recorded");
        Ok(self.session.position)
    }

    /// Step back one item, keeping whatever was stored for it.
    ///
    /// Returns the new position.
    ///
    /// # Errors
    ///
    /// Returns [`WalkError::AtStart`] at position 0.
    pub fn undo(&mut self) -> Result<usize, WalkError> {
        if self.session.position == 0 {
            return Err(WalkError::AtStart);
        }
        self.session.position -= 1;
        debug!(position = self.session.position, "stepped back");
        Ok(self.session.position)
    }

    /// Rewind to the first item without clearing any answers.
    pub fn restart_review(&mut self) {
        self.session.position = 0;
        debug!("review restarted");
    }

    pub fn set_identity_a(&mut self, value: impl Into<String>) {
        self.session.identity_a = value.into();
    }

    pub fn set_identity_b(&mut self, value: impl Into<String>) {
        self.session.identity_b = value.into();
    }
}
