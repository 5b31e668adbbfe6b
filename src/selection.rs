//! Selection state that survives page navigation.
//!
//! The table only ever knows about the page it is showing, while the user's
//! selection spans every page visited so far. `SelectionSet` is the global
//! side of that; the two operations below translate between it and the
//! page-local view.

use std::collections::HashSet;

use crate::model::{ArtworkId, ArtworkRecord};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: HashSet<ArtworkId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: ArtworkId) -> bool {
        self.ids.contains(&id)
    }

    /// Selected ids in ascending order.
    pub fn sorted_ids(&self) -> Vec<ArtworkId> {
        let mut ids: Vec<_> = self.ids.iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Rows of a freshly loaded page that should render as selected.
    ///
    /// Whatever the table thought was selected before is irrelevant: a row is
    /// checked iff its id is in the set.
    pub fn selected_on_page(&self, records: &[ArtworkRecord]) -> Vec<ArtworkRecord> {
        records
            .iter()
            .filter(|r| self.contains(r.id))
            .cloned()
            .collect()
    }

    /// Folds the table's complete selection for the visible page back into the
    /// global set.
    ///
    /// Ids belonging to `current_page` are dropped and replaced by the ids of
    /// `page_selection`; ids from other pages are kept as they are. This covers
    /// select and deselect alike and applying it twice changes nothing.
    pub fn apply_page_selection(
        self,
        current_page: &[ArtworkRecord],
        page_selection: &[ArtworkRecord],
    ) -> Self {
        let current_page_ids: HashSet<ArtworkId> = current_page.iter().map(|r| r.id).collect();

        let ids = self
            .ids
            .into_iter()
            .filter(|id| !current_page_ids.contains(id))
            .chain(page_selection.iter().map(|r| r.id))
            .collect();

        Self { ids }
    }
}

impl FromIterator<ArtworkId> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = ArtworkId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}
