//! Export status shown on the completion panel.
//!
//! The busy flag itself lives on `Questionnaire` (its export guard); this
//! state only keeps what the user should be told about the last attempt.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

/// Delay before rendering starts so the busy label can paint, in milliseconds.
pub const EXPORT_YIELD_MS: u64 = 100;

/// Button label while idle.
pub const EXPORT_LABEL: &str = "Export Report (PDF)";

/// Button label while a report is being generated.
pub const EXPORT_BUSY_LABEL: &str = "Generating PDF...";

/// Outcome of the most recent export.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExportState {
    /// Non-blocking notice for the completion panel (font fallback).
    pub notice: Option<String>,
    /// File name of the last successful export, shown under the button.
    pub last_file: Option<String>,
}

impl ExportState {
    pub fn record_success(&mut self, file_name: impl Into<String>, font_warning: Option<String>) {
        self.last_file = Some(file_name.into());
        self.notice = font_warning;
    }

    pub fn record_failure(&mut self) {
        self.notice = None;
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

/// Confirmation line for the last saved file.
pub fn saved_line(file_name: &str) -> String {
    format!("Saved as {file_name}")
}

pub fn export_button_label(busy: bool) -> &'static str {
    if busy { EXPORT_BUSY_LABEL } else { EXPORT_LABEL }
}
