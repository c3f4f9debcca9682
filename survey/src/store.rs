//! Answer store: one [`Response`] per catalog item id.
//!
//! The domain is fixed when the store is created from a catalog. Entries are
//! overwritten, never inserted or removed, and only the session walker writes
//! them.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashMap;

use crate::item::{Catalog, ChecklistItem};
use crate::response::{InterestLevel, Response};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnswerStore {
    entries: HashMap<String, Response>,
}

impl AnswerStore {
    /// Pre-populate every catalog id with the unanswered placeholder.
    #[must_use]
    pub fn new(catalog: &Catalog) -> Self {
        let entries = catalog
            .ids()
            .map(|id| (id.to_owned(), Response::unanswered()))
            .collect();
        Self { entries }
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Response> {
        self.entries.get(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Overwrite the entry for `id`. Returns `false` when `id` is outside
    /// the domain, leaving the store untouched.
    pub(crate) fn overwrite(&mut self, id: &str, response: Response) -> bool {
        match self.entries.get_mut(id) {
            Some(slot) => {
                *slot = response;
                true
            }
            None => false,
        }
    }

    /// Number of entries whose interest equals `level`.
    #[must_use]
    pub fn count_interest(&self, level: InterestLevel) -> usize {
        self.entries
            .values()
            .filter(|r| r.interest == Some(level))
            .count()
    }

    /// Iterate entries in catalog order.
    pub fn in_catalog_order<'a>(
        &'a self,
        catalog: &'a Catalog,
    ) -> impl Iterator<Item = (&'a ChecklistItem, Response)> + 'a {
        catalog
            .items()
            .iter()
            .map(|item| (item, self.entries.get(&item.id).copied().unwrap_or_default()))
    }
}
