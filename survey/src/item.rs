//! Checklist items and the ordered catalog they are walked in.
//!
//! The catalog ships embedded in the binary as JSON and is loaded once when
//! the shell initializes. Items are never mutated afterwards.

#[cfg(test)]
#[path = "item_test.rs"]
mod item_test;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

const BUILTIN_CATALOG: &str = include_str!("../data/checklist.json");

/// Error returned while loading a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The document is not a JSON array of items.
    #[error("malformed catalog: {0}")]
    Malformed(#[from] serde_json::Error),
    /// An item has an empty id.
    #[error("item at index {index} has an empty id")]
    EmptyId { index: usize },
    /// Two items share one id.
    #[error("duplicate item id: {id}")]
    DuplicateId { id: String },
}

/// One fixed checklist entry to be classified.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: String,
    pub category: String,
    pub label: String,
}

impl ChecklistItem {
    #[must_use]
    pub fn new(id: impl Into<String>, category: impl Into<String>, label: impl Into<String>) -> Self {
        Self { id: id.into(), category: category.into(), label: label.into() }
    }
}

/// Ordered, id-unique list of checklist items.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<ChecklistItem>,
}

impl Catalog {
    /// Build a catalog, rejecting empty and duplicate ids.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::EmptyId`] or [`CatalogError::DuplicateId`].
    pub fn new(items: Vec<ChecklistItem>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            if item.id.trim().is_empty() {
                return Err(CatalogError::EmptyId { index });
            }
            if !seen.insert(item.id.as_str()) {
                return Err(CatalogError::DuplicateId { id: item.id.clone() });
            }
        }
        Ok(Self { items })
    }

    /// Parse a JSON array of `{ id, category, label }` objects.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Malformed`] for invalid JSON, otherwise the
    /// same errors as [`Catalog::new`].
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let items: Vec<ChecklistItem> = serde_json::from_str(raw)?;
        Self::new(items)
    }

    /// The catalog embedded at build time.
    ///
    /// # Errors
    ///
    /// Fails only if the embedded document is invalid.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ChecklistItem> {
        self.items.get(index)
    }

    #[must_use]
    pub fn items(&self) -> &[ChecklistItem] {
        &self.items
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.id.as_str())
    }
}
