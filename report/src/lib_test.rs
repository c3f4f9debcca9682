use std::time::Duration;

use async_trait::async_trait;

use super::*;
use survey::ChecklistItem;

struct Offline;

#[async_trait(?Send)]
impl FontFetcher for Offline {
    async fn fetch(&self, _url: &str, timeout: Duration) -> Result<Vec<u8>, FetchError> {
        Err(FetchError::TimedOut { millis: u64::try_from(timeout.as_millis()).unwrap() })
    }
}

/// Serves a payload that passes the size check but is not a font.
struct Junk;

#[async_trait(?Send)]
impl FontFetcher for Junk {
    async fn fetch(&self, _url: &str, _timeout: Duration) -> Result<Vec<u8>, FetchError> {
        Ok(vec![0xAB; 12_000])
    }
}

fn catalog() -> Catalog {
    Catalog::new(vec![ChecklistItem::new("a", "Cat", "A"), ChecklistItem::new("b", "Cat", "B")]).unwrap()
}

#[tokio::test]
async fn offline_render_falls_back_with_warning() {
    let catalog = catalog();
    let session = Session::new(&catalog, "2024-05-01");
    let report = render_report(&Offline, &ReportConfig::default(), &catalog, &session).await.unwrap();
    assert_eq!(report.file_name, "bdsm-checklist-report.pdf");
    assert!(report.bytes.starts_with(b"%PDF"));
    assert_eq!(report.font_warning.as_deref(), Some(FONT_WARNING));
}

#[tokio::test]
async fn unusable_font_fails_the_export() {
    let catalog = catalog();
    let session = Session::new(&catalog, "d");
    let err = render_report(&Junk, &ReportConfig::default(), &catalog, &session).await.unwrap_err();
    assert!(matches!(err, ReportError::FontEmbed { .. }));
}

#[tokio::test]
async fn custom_file_name_is_used() {
    let catalog = catalog();
    let session = Session::new(&catalog, "d");
    let config = ReportConfig { file_name: "ours.pdf".into(), font_sources: Vec::new(), ..ReportConfig::default() };
    let report = render_report(&Offline, &config, &catalog, &session).await.unwrap();
    assert_eq!(report.file_name, "ours.pdf");
}
