//! Application controller: owns the widget state and a view, and applies
//! one user event at a time.

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::analyzer;
use crate::catalog::Catalog;
use crate::dropdown::DropdownList;
use crate::error::WidgetError;
use crate::models::FormField;
use crate::result_panel::ResultPanel;
use crate::state::WidgetState;
use crate::view::WidgetView;

/// A discrete user interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    /// The search input text changed.
    QueryInput { text: String },
    /// The search input gained focus.
    QueryFocus,
    /// The commit key was pressed in the search input.
    QueryCommit,
    /// A dropdown checkbox changed.
    Toggle { symptom: String, checked: bool },
    /// A chip's remove button was pressed.
    RemoveChip { symptom: String },
    /// Interaction happened outside the dropdown and the search input.
    ClickOutside,
    SetField { field: FormField, text: String },
    Analyze,
    Reset,
}

pub struct Controller<V: WidgetView> {
    state: WidgetState,
    view: V,
}

impl<V: WidgetView> Controller<V> {
    /// Builds the controller and draws the initial screen: the unfiltered
    /// list, no chips and the placeholder result.
    pub fn new(catalog: Catalog, view: V) -> Result<Self, WidgetError> {
        let mut controller = Self {
            state: WidgetState::new(catalog),
            view,
        };
        controller.render_list()?;
        controller.render_chips()?;
        controller.render_result()?;
        Ok(controller)
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    pub fn handle(&mut self, event: Event) -> Result<(), WidgetError> {
        tracing::debug!(?event, "Handling event");
        match event {
            Event::QueryInput { text } => {
                self.state.query = text;
                self.render_list()
            }
            Event::QueryFocus => self.render_list(),
            Event::QueryCommit => self.commit_query(),
            Event::Toggle { symptom, checked } => {
                if checked {
                    self.add_symptom(&symptom)
                } else {
                    self.remove_symptom(&symptom)
                }
            }
            Event::RemoveChip { symptom } => self.remove_symptom(&symptom),
            Event::ClickOutside => {
                self.state.dropdown = DropdownList::Hidden;
                self.view.render_list(&self.state.dropdown)
            }
            Event::SetField { field, text } => {
                self.state.form.set(field, text);
                Ok(())
            }
            Event::Analyze => self.analyze(),
            Event::Reset => self.reset(),
        }
    }

    fn add_symptom(&mut self, symptom: &str) -> Result<(), WidgetError> {
        if self.state.chosen.add(symptom) {
            tracing::debug!(symptom, count = self.state.chosen.len(), "Symptom added");
            self.render_chips()?;
            self.render_list()?;
        }
        Ok(())
    }

    fn remove_symptom(&mut self, symptom: &str) -> Result<(), WidgetError> {
        if self.state.chosen.remove(symptom) {
            tracing::debug!(symptom, count = self.state.chosen.len(), "Symptom removed");
        }
        self.render_chips()?;
        self.render_list()
    }

    /// Direct entry: resolve the typed text, add it, then clear the input
    /// and show the unfiltered list. Blank input does nothing.
    fn commit_query(&mut self) -> Result<(), WidgetError> {
        let Some(symptom) = self.state.catalog.resolve(&self.state.query) else {
            return Ok(());
        };
        self.add_symptom(&symptom)?;
        self.state.query.clear();
        self.render_list()
    }

    fn analyze(&mut self) -> Result<(), WidgetError> {
        let demographics = self.state.form.parse();
        let result = analyzer::analyze(&self.state.chosen, &demographics);
        tracing::info!(
            outcome = %result.outcome,
            symptoms = self.state.chosen.len(),
            emergency = result.is_emergency,
            "Analysis complete"
        );
        self.state.result = ResultPanel::from_result(&result, Local::now());
        self.render_result()
    }

    fn reset(&mut self) -> Result<(), WidgetError> {
        self.state.chosen.reset();
        self.render_chips()?;
        self.state.query.clear();
        self.state.form.clear();
        self.state.result = ResultPanel::initial();
        self.render_result()?;
        self.render_list()?;
        tracing::info!("Widget reset");
        Ok(())
    }

    fn render_list(&mut self) -> Result<(), WidgetError> {
        self.state.dropdown = DropdownList::build(&self.state.catalog, &self.state.query);
        self.view.render_list(&self.state.dropdown)
    }

    fn render_chips(&mut self) -> Result<(), WidgetError> {
        self.view.render_chips(self.state.chosen.as_slice())
    }

    fn render_result(&mut self) -> Result<(), WidgetError> {
        self.view.render_result(&self.state.result)
    }
}
