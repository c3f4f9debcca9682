use super::*;
use crate::layout::{TABLE_TOP_MM, rows_fitting};
use survey::{Catalog, ChecklistItem, Session};

fn model(items: usize) -> ReportModel {
    let catalog = Catalog::new(
        (0..items)
            .map(|i| ChecklistItem::new(format!("i{i}"), "感官 Sensation", format!("项目 {i}")))
            .collect(),
    )
    .unwrap();
    let session = Session::new(&catalog, "2024-05-01");
    ReportModel::build("BDSM check list 报告", &catalog, &session)
}

#[test]
fn fallback_font_produces_a_pdf() {
    let bytes = write_pdf(&model(3), &ReportFont::Fallback, &ReportConfig::default()).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn long_tables_add_pages() {
    let cfg = ReportConfig::default();
    let one_page = rows_fitting(&cfg.page, TABLE_TOP_MM) - 5;
    let short = write_pdf(&model(one_page), &ReportFont::Fallback, &cfg).unwrap();
    let long = write_pdf(&model(one_page * 3), &ReportFont::Fallback, &cfg).unwrap();
    assert!(long.len() > short.len());
}

#[test]
fn empty_catalog_still_renders() {
    let bytes = write_pdf(&model(0), &ReportFont::Fallback, &ReportConfig::default()).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn truetype_font_is_embedded() {
    let font = ReportFont::Embedded {
        family: "DejaVu Sans Mono".into(),
        bytes: include_bytes!("../tests/fixtures/DejaVuSansMono.ttf").to_vec(),
    };
    let bytes = write_pdf(&model(4), &font, &ReportConfig::default()).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
    assert!(bytes.windows(10).any(|w| w == b"/FontFile2"));
}

#[test]
fn garbage_font_bytes_fail_to_embed() {
    let font = ReportFont::Embedded { family: "Broken".into(), bytes: vec![0; 20_000] };
    let err = write_pdf(&model(1), &font, &ReportConfig::default()).unwrap_err();
    assert!(matches!(err, ReportError::FontEmbed { ref family, .. } if family == "Broken"));
}
