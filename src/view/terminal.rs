use std::io::Write;

use crate::config::APP_NAME;
use crate::dropdown::DropdownList;
use crate::error::WidgetError;
use crate::result_panel::ResultPanel;

use super::WidgetView;

/// Plain-text renderer for interactive terminal use.
pub struct TerminalView<W: Write> {
    out: W,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> WidgetView for TerminalView<W> {
    fn render_list(&mut self, list: &DropdownList) -> Result<(), WidgetError> {
        match list {
            DropdownList::Hidden => writeln!(self.out, "Symptoms: (list hidden)")?,
            DropdownList::Shown { entries } => {
                writeln!(self.out, "Symptoms ({} shown):", entries.len())?;
                for (i, entry) in entries.iter().enumerate() {
                    let mark = if entry.checked { "x" } else { " " };
                    writeln!(self.out, "  [{mark}] {:>2}. {}", i + 1, entry.symptom)?;
                }
            }
        }
        self.out.flush()?;
        Ok(())
    }

    fn render_chips(&mut self, chips: &[String]) -> Result<(), WidgetError> {
        if chips.is_empty() {
            writeln!(self.out, "Selected: (none)")?;
        } else {
            let line = chips
                .iter()
                .enumerate()
                .map(|(i, chip)| format!("[{}: {chip} ✕]", i + 1))
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(self.out, "Selected: {line}")?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn render_result(&mut self, panel: &ResultPanel) -> Result<(), WidgetError> {
        writeln!(self.out, "── {APP_NAME} ──")?;
        if panel.banner_visible {
            writeln!(self.out, "!! EMERGENCY !!")?;
            if let Some(message) = &panel.banner_message {
                writeln!(self.out, "!! {message}")?;
            }
        }
        writeln!(self.out, "Diagnosis:      {}", panel.diagnosis)?;
        writeln!(self.out, "Recommendation: {}", panel.recommendation)?;
        writeln!(self.out, "Confidence:     {}", panel.confidence)?;
        writeln!(self.out, "Emergency:      {}", panel.emergency_indicator)?;
        writeln!(self.out, "Last updated:   {}", panel.last_updated)?;
        self.out.flush()?;
        Ok(())
    }

    fn notice(&mut self, message: &str) -> Result<(), WidgetError> {
        writeln!(self.out, "» {message}")?;
        self.out.flush()?;
        Ok(())
    }
}
