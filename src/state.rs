//! Widget state, owned by the controller.
//!
//! Single-threaded and event-driven: every handler runs to completion on
//! the caller's thread, so there is no locking here.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::dropdown::DropdownList;
use crate::models::DemographicForm;
use crate::result_panel::ResultPanel;
use crate::selection::ChosenSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WidgetState {
    /// Read-only after construction.
    pub catalog: Catalog,
    pub chosen: ChosenSet,
    /// Current text of the search / direct-entry input.
    pub query: String,
    pub form: DemographicForm,
    /// What the dropdown last rendered.
    pub dropdown: DropdownList,
    pub result: ResultPanel,
}

impl WidgetState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            chosen: ChosenSet::new(),
            query: String::new(),
            form: DemographicForm::default(),
            dropdown: DropdownList::Hidden,
            result: ResultPanel::initial(),
        }
    }
}

impl Default for WidgetState {
    fn default() -> Self {
        Self::new(Catalog::default())
    }
}
