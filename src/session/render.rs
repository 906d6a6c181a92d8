use super::state::SessionState;
use crate::domain::{PropertyEntry, PropertyRecord};
use std::io::{self, Write};

pub const NOT_AVAILABLE: &str = "N/A";
const LABEL_WIDTH: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResultView<'a> {
    Loading,
    Error(&'a str),
    Properties(&'a PropertyRecord),
    Empty,
}

impl<'a> ResultView<'a> {
    pub fn select(state: &'a SessionState) -> Self {
        if state.is_loading() {
            ResultView::Loading
        } else if let Some(message) = state.error() {
            ResultView::Error(message)
        } else if let Some(record) = state.record() {
            ResultView::Properties(record)
        } else {
            ResultView::Empty
        }
    }
}

pub fn render_view(view: &ResultView<'_>, out: &mut impl Write) -> io::Result<()> {
    match view {
        ResultView::Loading => {
            writeln!(out, "Analyzing structure...")?;
            writeln!(out, "This may take a few moments.")
        }
        ResultView::Error(message) => writeln!(out, "Error: {}", message),
        ResultView::Properties(record) => render_record(record, out),
        ResultView::Empty => {
            writeln!(out, "Enter a SMILES string to unveil its chemical secrets.")?;
            writeln!(out, "Predicted properties will be displayed here once calculated.")
        }
    }
}

pub fn render_record(record: &PropertyRecord, out: &mut impl Write) -> io::Result<()> {
    let title = "Predicted Molecular Properties";
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", "-".repeat(title.len()))?;
    for entry in record.entries() {
        writeln!(out, "{:<width$} {}", entry.label, format_entry(&entry), width = LABEL_WIDTH)?;
    }
    Ok(())
}

fn format_entry(entry: &PropertyEntry<'_>) -> String {
    if entry.value.is_missing() {
        return NOT_AVAILABLE.to_string();
    }
    match entry.unit {
        Some(unit) => format!("{} {}", entry.value, unit),
        None => entry.value.to_string(),
    }
}
