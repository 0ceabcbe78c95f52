use std::io::Write;

use serde::Serialize;

use crate::dropdown::DropdownList;
use crate::error::WidgetError;
use crate::result_panel::ResultPanel;

use super::WidgetView;

/// One render, as written to the output stream.
#[derive(Debug, Serialize)]
#[serde(tag = "view", content = "data", rename_all = "snake_case")]
pub enum RenderFrame<'a> {
    List(&'a DropdownList),
    Chips(&'a [String]),
    Result(&'a ResultPanel),
    Notice(&'a str),
}

/// Writes each render as a single JSON object per line, for a frontend
/// or test harness driving the widget over a pipe.
pub struct JsonView<W: Write> {
    out: W,
}

impl<W: Write> JsonView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, frame: RenderFrame<'_>) -> Result<(), WidgetError> {
        serde_json::to_writer(&mut self.out, &frame)?;
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> WidgetView for JsonView<W> {
    fn render_list(&mut self, list: &DropdownList) -> Result<(), WidgetError> {
        self.emit(RenderFrame::List(list))
    }

    fn render_chips(&mut self, chips: &[String]) -> Result<(), WidgetError> {
        self.emit(RenderFrame::Chips(chips))
    }

    fn render_result(&mut self, panel: &ResultPanel) -> Result<(), WidgetError> {
        self.emit(RenderFrame::Result(panel))
    }

    fn notice(&mut self, message: &str) -> Result<(), WidgetError> {
        self.emit(RenderFrame::Notice(message))
    }
}
