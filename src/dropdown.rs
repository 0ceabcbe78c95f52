//! Filtered, capped checklist over the catalog.
//!
//! Always built from the full catalog: chosen symptoms stay listed and
//! render unchecked, because every render produces fresh controls.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::config::MAX_VISIBLE_MATCHES;

/// One checklist row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownEntry {
    pub symptom: String,
    pub checked: bool,
}

/// What the dropdown currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DropdownList {
    Hidden,
    Shown { entries: Vec<DropdownEntry> },
}

impl DropdownList {
    /// Filters `catalog` by `query`; an empty match set hides the list.
    pub fn build(catalog: &Catalog, query: &str) -> Self {
        let matches = catalog.filter(query, MAX_VISIBLE_MATCHES);
        if matches.is_empty() {
            return Self::Hidden;
        }
        Self::Shown {
            entries: matches
                .into_iter()
                .map(|symptom| DropdownEntry {
                    symptom: symptom.to_string(),
                    checked: false,
                })
                .collect(),
        }
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Shown { .. })
    }

    /// Visible rows; empty while hidden.
    pub fn entries(&self) -> &[DropdownEntry] {
        match self {
            Self::Hidden => &[],
            Self::Shown { entries } => entries,
        }
    }

    /// Row at a 1-based position, as the user sees it.
    pub fn entry_at(&self, position: usize) -> Option<&DropdownEntry> {
        position
            .checked_sub(1)
            .and_then(|index| self.entries().get(index))
    }
}

impl Default for DropdownList {
    fn default() -> Self {
        Self::Hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_shows_first_sixty() {
        let catalog = Catalog::new((0..100).map(|i| format!("S{i}")));
        let list = DropdownList::build(&catalog, "");
        assert!(list.is_visible());
        assert_eq!(list.entries().len(), 60);
    }

    #[test]
    fn no_match_hides() {
        let list = DropdownList::build(&Catalog::default(), "qqqq");
        assert_eq!(list, DropdownList::Hidden);
        assert!(list.entries().is_empty());
    }

    #[test]
    fn entries_render_unchecked() {
        let list = DropdownList::build(&Catalog::default(), "cough");
        assert_eq!(
            list.entries(),
            [DropdownEntry {
                symptom: "Cough".into(),
                checked: false,
            }]
        );
    }

    #[test]
    fn entry_at_is_one_based() {
        let catalog = Catalog::new(["Alpha", "Beta"]);
        let list = DropdownList::build(&catalog, "");
        assert_eq!(list.entry_at(1).unwrap().symptom, "Alpha");
        assert_eq!(list.entry_at(2).unwrap().symptom, "Beta");
        assert!(list.entry_at(0).is_none());
        assert!(list.entry_at(3).is_none());
    }

    #[test]
    fn serializes_with_state_tag() {
        let json = serde_json::to_value(DropdownList::Hidden).unwrap();
        assert_eq!(json["state"], "hidden");
    }
}
