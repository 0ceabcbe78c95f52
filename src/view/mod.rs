//! View layer: the seam between widget state and whatever draws it.
//!
//! Selection, filtering and analysis never touch a view directly; the
//! controller pushes fresh display models through this trait after each
//! event.

pub mod json;
pub mod terminal;

pub use json::JsonView;
pub use terminal::TerminalView;

use crate::dropdown::DropdownList;
use crate::error::WidgetError;
use crate::result_panel::ResultPanel;

pub trait WidgetView {
    /// Redraw the dropdown checklist (or hide it).
    fn render_list(&mut self, list: &DropdownList) -> Result<(), WidgetError>;

    /// Redraw the chips, one per chosen symptom, in selection order.
    fn render_chips(&mut self, chips: &[String]) -> Result<(), WidgetError>;

    /// Redraw the result area.
    fn render_result(&mut self, panel: &ResultPanel) -> Result<(), WidgetError>;

    /// Show a transient message that is not part of widget state.
    fn notice(&mut self, _message: &str) -> Result<(), WidgetError> {
        Ok(())
    }
}
