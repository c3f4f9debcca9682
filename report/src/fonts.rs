//! CJK font acquisition with ordered sources and a default-font fallback.
//!
//! DESIGN
//! ======
//! Network access sits behind [`FontFetcher`] so the browser shell can plug
//! in `gloo-net` while tests script failures in memory. Each source is tried
//! once, in order. A source that fails for any reason is logged and skipped;
//! only when every source has failed does the caller get the bilingual
//! warning, exactly once.

#[cfg(test)]
#[path = "fonts_test.rs"]
mod fonts_test;

use std::time::Duration;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::config::ReportConfig;
use crate::error::FetchError;

/// Shown once when no CJK font could be downloaded.
pub const FONT_WARNING: &str = "Warning: Could not download any Chinese fonts (Network/CDN Error).\n\
The PDF will likely contain garbled text.\n\n\
无法下载中文字体，生成的 PDF 可能会显示乱码。请检查网络。";

/// Downloads raw font bytes.
#[async_trait(?Send)]
pub trait FontFetcher {
    /// Fetch `url`, giving up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] on non-success status, transport failure or
    /// timeout.
    async fn fetch(&self, url: &str, timeout: Duration) -> Result<Vec<u8>, FetchError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportFont {
    /// A downloaded TrueType font.
    Embedded { family: String, bytes: Vec<u8> },
    /// The PDF writer's built-in Latin font.
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontOutcome {
    pub font: ReportFont,
    pub warning: Option<String>,
}

/// Try every configured source in order.
pub async fn acquire_font<F>(fetcher: &F, config: &ReportConfig) -> FontOutcome
where
    F: FontFetcher + ?Sized,
{
    for source in &config.font_sources {
        match fetch_checked(fetcher, &source.url, config).await {
            Ok(bytes) => {
                info!(family = %source.family, bytes = bytes.len(), "font loaded");
                return FontOutcome {
                    font: ReportFont::Embedded { family: source.family.clone(), bytes },
                    warning: None,
                };
            }
            Err(err) => warn!(family = %source.family, error = %err, "font source failed"),
        }
    }
    warn!(sources = config.font_sources.len(), "no font source succeeded; using default font");
    FontOutcome { font: ReportFont::Fallback, warning: Some(FONT_WARNING.to_owned()) }
}

async fn fetch_checked<F>(fetcher: &F, url: &str, config: &ReportConfig) -> Result<Vec<u8>, FetchError>
where
    F: FontFetcher + ?Sized,
{
    let bytes = fetcher.fetch(url, config.fetch_timeout).await?;
    if bytes.len() < config.min_font_bytes {
        return Err(FetchError::Undersized { len: bytes.len(), min: config.min_font_bytes });
    }
    Ok(bytes)
}
