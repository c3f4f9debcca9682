//! Report renderer for a finished checklist session.
//!
//! This crate is browser-agnostic: the only network access (CJK font
//! download) goes through [`fonts::FontFetcher`], which the shell implements
//! with `gloo-net`. The output is the PDF bytes plus an optional font
//! warning; saving the file is the caller's job.
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | File name, title, font sources, timeout, page geometry |
//! | [`model`] | Row texts, highlight tones, summary counts |
//! | [`fonts`] | Ordered font acquisition with fallback |
//! | [`layout`] | Column widths, text fitting, pagination |
//! | [`pdf`] | Drawing with `printpdf` |
//! | [`error`] | `FetchError`, `ReportError` |

pub mod config;
pub mod error;
pub mod fonts;
pub mod layout;
pub mod model;
pub mod pdf;

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

use survey::{Catalog, Session};
use tracing::{error, info};

pub use config::{FontSource, PageGeometry, ReportConfig};
pub use error::{FetchError, ReportError};
pub use fonts::{FONT_WARNING, FontFetcher, FontOutcome, ReportFont, acquire_font};
pub use model::ReportModel;

/// A finished document ready to be saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedReport {
    pub file_name: String,
    pub bytes: Vec<u8>,
    /// Set when every font source failed and the default font was used.
    pub font_warning: Option<String>,
}

/// Build the report for `session`: fetch a font, lay out the table, write
/// the PDF.
///
/// # Errors
///
/// Font download failures are not errors; they degrade to the default font
/// and set [`RenderedReport::font_warning`]. Embedding or writing failures
/// return [`ReportError`].
pub async fn render_report<F>(
    fetcher: &F,
    config: &ReportConfig,
    catalog: &Catalog,
    session: &Session,
) -> Result<RenderedReport, ReportError>
where
    F: FontFetcher + ?Sized,
{
    let FontOutcome { font, warning } = acquire_font(fetcher, config).await;
    let model = ReportModel::build(&config.title, catalog, session);
    match pdf::write_pdf(&model, &font, config) {
        Ok(bytes) => {
            info!(rows = model.rows.len(), bytes = bytes.len(), file = %config.file_name, "report rendered");
            Ok(RenderedReport { file_name: config.file_name.clone(), bytes, font_warning: warning })
        }
        Err(err) => {
            error!(error = %err, "report rendering failed");
            Err(err)
        }
    }
}
