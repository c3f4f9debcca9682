use super::*;

// =============================================================
// ExportState
// =============================================================

#[test]
fn default_state_is_quiet() {
    let state = ExportState::default();
    assert!(state.notice.is_none());
    assert!(state.last_file.is_none());
}

#[test]
fn success_records_file_and_font_warning() {
    let mut state = ExportState::default();
    state.record_success("report.pdf", Some("font fallback".to_owned()));
    assert_eq!(state.last_file.as_deref(), Some("report.pdf"));
    assert_eq!(state.notice.as_deref(), Some("font fallback"));
}

#[test]
fn clean_success_clears_an_old_notice() {
    let mut state = ExportState::default();
    state.record_success("a.pdf", Some("warn".to_owned()));
    state.record_success("b.pdf", None);
    assert!(state.notice.is_none());
    assert_eq!(state.last_file.as_deref(), Some("b.pdf"));
}

#[test]
fn failure_clears_notice_and_keeps_last_file() {
    let mut state = ExportState::default();
    state.record_success("a.pdf", Some("warn".to_owned()));
    state.record_failure();
    assert!(state.notice.is_none());
    assert_eq!(state.last_file.as_deref(), Some("a.pdf"));
}

#[test]
fn dismiss_clears_notice_only() {
    let mut state = ExportState::default();
    state.record_success("a.pdf", Some("warn".to_owned()));
    state.dismiss_notice();
    assert!(state.notice.is_none());
    assert_eq!(state.last_file.as_deref(), Some("a.pdf"));
}

// =============================================================
// Labels
// =============================================================

#[test]
fn saved_line_names_the_file() {
    assert_eq!(saved_line("bdsm-checklist-report.pdf"), "Saved as bdsm-checklist-report.pdf");
}

#[test]
fn button_label_follows_busy_flag() {
    assert_eq!(export_button_label(false), EXPORT_LABEL);
    assert_eq!(export_button_label(true), "Generating PDF...");
}
