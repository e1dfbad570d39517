//! Expanded-detail selection, owned by the display layer

use crate::types::{Catalog, Character};

/// Single-select toggle for the expanded detail row.
///
/// Selecting the already-selected character collapses it again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetailSelection {
    selected: Option<u64>,
}

impl DetailSelection {
    pub fn toggle(&mut self, id: u64) {
        self.selected = if self.selected == Some(id) { None } else { Some(id) };
    }

    pub fn selected(&self) -> Option<u64> {
        self.selected
    }

    pub fn is_selected(&self, id: u64) -> bool {
        self.selected == Some(id)
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// The selected character, if it is in `catalog`
    pub fn resolve<'a>(&self, catalog: &'a Catalog) -> Option<&'a Character> {
        self.selected.and_then(|id| catalog.get(id))
    }
}
