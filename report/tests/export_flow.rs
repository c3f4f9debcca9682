//! End-to-end: answer the built-in catalog, claim the export slot, render.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use report::{FetchError, FontFetcher, ReportConfig, ReportModel, render_report};
use survey::{Catalog, InterestLevel, Phase, Questionnaire, REGIONS};

struct Offline;

#[async_trait(?Send)]
impl FontFetcher for Offline {
    async fn fetch(&self, _url: &str, _timeout: Duration) -> Result<Vec<u8>, FetchError> {
        Err(FetchError::Transport("offline".into()))
    }
}

/// A real TrueType font served from disk.
const FIXTURE_FONT: &[u8] = include_bytes!("fixtures/DejaVuSansMono.ttf");

/// Serves the fixture font for the first source only.
struct FirstSourceServes;

#[async_trait(?Send)]
impl FontFetcher for FirstSourceServes {
    async fn fetch(&self, url: &str, _timeout: Duration) -> Result<Vec<u8>, FetchError> {
        let first = &ReportConfig::default().font_sources[0].url;
        if url == first { Ok(FIXTURE_FONT.to_vec()) } else { Err(FetchError::Status { status: 404 }) }
    }
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

fn answered_builtin() -> Questionnaire {
    let catalog = Arc::new(Catalog::builtin().unwrap());
    let mut q = Questionnaire::new(catalog, "2024-05-01");
    q.set_identity_a("Ann");
    q.set_identity_b("Bo");
    q.start();
    let mut i = 0;
    while q.phase() == Phase::InProgress {
        let key = REGIONS[i % REGIONS.len()].key;
        let t = q.select(key).unwrap().unwrap();
        q.finish_transition(t.token);
        i += 1;
    }
    q
}

#[tokio::test]
async fn builtin_catalog_renders_after_full_walk() {
    let mut q = answered_builtin();
    assert_eq!(q.phase(), Phase::Finished);

    let ticket = q.begin_export().unwrap();
    assert!(q.begin_export().is_none());
    let report = render_report(&Offline, &ReportConfig::default(), &ticket.catalog, &ticket.session)
        .await
        .unwrap();
    q.finish_export();

    assert!(report.bytes.starts_with(b"%PDF"));
    assert!(report.font_warning.is_some());
    assert!(!q.is_exporting());
}

#[test]
fn model_summary_matches_store_counts() {
    let q = answered_builtin();
    let model = ReportModel::build("T", q.walker().catalog(), q.session());
    let answers = q.session().answers();
    assert_eq!(model.rows.len(), q.item_count());
    assert_eq!(model.summary.hard_limits, answers.count_interest(InterestLevel::HardLimit));
    assert_eq!(model.summary.enthusiastic, answers.count_interest(InterestLevel::Enthusiastic));
    assert!(model.summary.hard_limits > 0);
    assert!(model.summary.enthusiastic > 0);
}

#[tokio::test]
async fn downloaded_font_is_embedded_in_the_report() {
    let mut q = answered_builtin();
    let ticket = q.begin_export().unwrap();
    let report = render_report(&FirstSourceServes, &ReportConfig::default(), &ticket.catalog, &ticket.session)
        .await
        .unwrap();
    q.finish_export();

    assert!(report.bytes.starts_with(b"%PDF"));
    assert!(report.font_warning.is_none());
    assert!(contains(&report.bytes, b"/FontFile2"));
}
