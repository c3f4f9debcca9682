//! Table geometry, text fitting and pagination, in top-down millimetres.
//!
//! Everything here is pure so the page plan can be checked without parsing
//! PDF output. [`crate::pdf`] flips y when it draws.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use std::ops::Range;

use crate::config::PageGeometry;

pub const PT_TO_MM: f32 = 0.352_778;

pub const TITLE_SIZE_PT: f32 = 22.0;
pub const TITLE_BASELINE_MM: f32 = 20.0;
pub const META_SIZE_PT: f32 = 10.0;
pub const META_BASELINE_MM: f32 = 30.0;
/// Left edge of each identity field, matching a 182 mm content width.
pub const META_COLUMNS_MM: [f32; 3] = [14.0, 80.0, 150.0];
pub const TABLE_TOP_MM: f32 = 40.0;

pub const CELL_SIZE_PT: f32 = 9.0;
pub const CELL_PADDING_MM: f32 = 2.0;
pub const HEADER_HEIGHT_MM: f32 = 9.0;
pub const ROW_HEIGHT_MM: f32 = 8.0;

pub const SUMMARY_GAP_MM: f32 = 10.0;
pub const SUMMARY_LINE_MM: f32 = 6.0;

/// Column widths; they sum to the A4 content width.
pub const COLUMN_WIDTHS_MM: [f32; 6] = [40.0, 52.0, 16.0, 14.0, 24.0, 36.0];

const ELLIPSIS: char = '…';

/// Rough advance of one character in ems: CJK and full-width glyphs are
/// square, everything else averages a bit over half.
fn char_em(c: char) -> f32 {
    if c >= '\u{2E80}' { 1.0 } else { 0.55 }
}

#[must_use]
pub fn text_width_mm(text: &str, size_pt: f32) -> f32 {
    text.chars().map(char_em).sum::<f32>() * size_pt * PT_TO_MM
}

/// Truncate `text` with an ellipsis so it fits in `max_mm`.
#[must_use]
pub fn fit_text(text: &str, size_pt: f32, max_mm: f32) -> String {
    if text_width_mm(text, size_pt) <= max_mm {
        return text.to_owned();
    }
    let budget = max_mm - char_em(ELLIPSIS) * size_pt * PT_TO_MM;
    let mut used = 0.0;
    let mut out = String::new();
    for c in text.chars() {
        let w = char_em(c) * size_pt * PT_TO_MM;
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push(ELLIPSIS);
    out
}

/// Left edge of each column, starting at the page margin.
#[must_use]
pub fn column_lefts(page: &PageGeometry) -> [f32; 6] {
    let mut lefts = [0.0; 6];
    let mut x = page.margin_mm;
    for (left, width) in lefts.iter_mut().zip(COLUMN_WIDTHS_MM) {
        *left = x;
        x += width;
    }
    lefts
}

/// Table width actually used by the columns.
#[must_use]
pub fn table_width_mm() -> f32 {
    COLUMN_WIDTHS_MM.iter().sum()
}

/// Baseline for text vertically centred in a band starting at `top`.
#[must_use]
pub fn baseline_in(top: f32, height: f32, size_pt: f32) -> f32 {
    top + height / 2.0 + size_pt * PT_TO_MM * 0.35
}

/// Rows that fit below a header starting at `table_top`.
#[must_use]
pub fn rows_fitting(page: &PageGeometry, table_top: f32) -> usize {
    let room = page.bottom_mm() - table_top - HEADER_HEIGHT_MM;
    if room < ROW_HEIGHT_MM { 0 } else { (room / ROW_HEIGHT_MM).floor() as usize }
}

/// One page of the table.
#[derive(Debug, Clone, PartialEq)]
pub struct TablePage {
    /// y of the repeated header band.
    pub table_top: f32,
    pub rows: Range<usize>,
}

/// Split `row_count` rows across pages; the first page starts below the
/// title block, later ones at the top margin.
#[must_use]
pub fn paginate(row_count: usize, page: &PageGeometry) -> Vec<TablePage> {
    let first = rows_fitting(page, TABLE_TOP_MM).max(1);
    let rest = rows_fitting(page, page.margin_mm).max(1);
    let mut pages = vec![TablePage { table_top: TABLE_TOP_MM, rows: 0..row_count.min(first) }];
    let mut start = row_count.min(first);
    while start < row_count {
        let end = (start + rest).min(row_count);
        pages.push(TablePage { table_top: page.margin_mm, rows: start..end });
        start = end;
    }
    pages
}

/// Where the summary block goes after the last table page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryPlacement {
    pub new_page: bool,
    /// Baseline of the first summary line.
    pub top: f32,
}

#[must_use]
pub fn place_summary(last: &TablePage, page: &PageGeometry, lines: usize) -> SummaryPlacement {
    let table_bottom = last.table_top + HEADER_HEIGHT_MM + ROW_HEIGHT_MM * last.rows.len() as f32;
    let top = table_bottom + SUMMARY_GAP_MM;
    let needed = SUMMARY_LINE_MM * lines.saturating_sub(1) as f32;
    if top + needed <= page.bottom_mm() {
        SummaryPlacement { new_page: false, top }
    } else {
        SummaryPlacement { new_page: true, top: page.margin_mm + SUMMARY_GAP_MM }
    }
}
