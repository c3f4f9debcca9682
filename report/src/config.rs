//! Report configuration with built-in defaults.

use std::time::Duration;

pub const DEFAULT_FILE_NAME: &str = "bdsm-checklist-report.pdf";
pub const DEFAULT_TITLE: &str = "BDSM check list 报告";
/// Payloads smaller than this are error pages, not fonts.
pub const DEFAULT_MIN_FONT_BYTES: usize = 10_000;
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 15;

/// One downloadable CJK font, tried in list order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontSource {
    pub family: String,
    pub url: String,
}

impl FontSource {
    #[must_use]
    pub fn new(family: impl Into<String>, url: impl Into<String>) -> Self {
        Self { family: family.into(), url: url.into() }
    }
}

/// Page size and margins in millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width_mm: f32,
    pub height_mm: f32,
    pub margin_mm: f32,
}

impl PageGeometry {
    pub const A4: Self = Self { width_mm: 210.0, height_mm: 297.0, margin_mm: 14.0 };

    #[must_use]
    pub fn content_width_mm(&self) -> f32 {
        self.width_mm - 2.0 * self.margin_mm
    }

    /// Lowest y (top-down) that content may reach.
    #[must_use]
    pub fn bottom_mm(&self) -> f32 {
        self.height_mm - self.margin_mm
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    pub file_name: String,
    pub title: String,
    pub font_sources: Vec<FontSource>,
    pub min_font_bytes: usize,
    /// Applied by the fetcher to each source independently.
    pub fetch_timeout: Duration,
    pub page: PageGeometry,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            file_name: DEFAULT_FILE_NAME.to_owned(),
            title: DEFAULT_TITLE.to_owned(),
            font_sources: default_font_sources(),
            min_font_bytes: DEFAULT_MIN_FONT_BYTES,
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
            page: PageGeometry::A4,
        }
    }
}

fn default_font_sources() -> Vec<FontSource> {
    const MIRROR: &str = "https://cdn.jsdelivr.net/gh/google/fonts@main/ofl";
    vec![
        FontSource::new("ZCOOLXiaoWei", format!("{MIRROR}/zcoolxiaowei/ZCOOLXiaoWei-Regular.ttf")),
        FontSource::new("MaShanZheng", format!("{MIRROR}/mashanzheng/MaShanZheng-Regular.ttf")),
        FontSource::new("NotoSerifSC", format!("{MIRROR}/notoserifsc/NotoSerifSC-Regular.ttf")),
    ]
}
