//! PDF drawing on top of `printpdf`.
//!
//! Coordinates coming from [`crate::layout`] are top-down; `printpdf`
//! measures from the bottom-left, so [`Painter`] flips every y.

#[cfg(test)]
#[path = "pdf_test.rs"]
mod pdf_test;

use std::io::Cursor;

use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference, Point, Rect,
    Rgb,
};

use crate::config::{PageGeometry, ReportConfig};
use crate::error::ReportError;
use crate::fonts::ReportFont;
use crate::layout::{
    CELL_PADDING_MM, CELL_SIZE_PT, COLUMN_WIDTHS_MM, HEADER_HEIGHT_MM, META_BASELINE_MM, META_COLUMNS_MM,
    META_SIZE_PT, ROW_HEIGHT_MM, SUMMARY_LINE_MM, TITLE_BASELINE_MM, TITLE_SIZE_PT, baseline_in, column_lefts,
    fit_text, paginate, place_summary, table_width_mm,
};
use crate::model::{COLUMN_HEADINGS, Cell, ReportModel};

const LAYER: &str = "Layer 1";
const DARK: (u8, u8, u8) = (40, 40, 40);
const MUTED: (u8, u8, u8) = (100, 100, 100);
const HEADER_FILL: (u8, u8, u8) = (30, 41, 59);
const HEADER_TEXT: (u8, u8, u8) = (255, 255, 255);
const STRIPE_FILL: (u8, u8, u8) = (248, 250, 252);
const GRID: (u8, u8, u8) = (200, 200, 200);
const GRID_THICKNESS: f32 = 0.1;
/// Horizontal offset of the second pass that fakes a bold weight.
const BOLD_OFFSET_MM: f32 = 0.12;

/// Lay out `model` and serialize the document.
///
/// # Errors
///
/// Returns [`ReportError::FontEmbed`] if the downloaded font is rejected and
/// [`ReportError::Pdf`] if the writer fails.
pub fn write_pdf(model: &ReportModel, font: &ReportFont, config: &ReportConfig) -> Result<Vec<u8>, ReportError> {
    let page = config.page;
    let (doc, page_index, layer_index) =
        PdfDocument::new(model.title.as_str(), Mm(page.width_mm), Mm(page.height_mm), LAYER);
    let font_ref = load_font(&doc, font)?;
    let mut painter = Painter { layer: doc.get_page(page_index).get_layer(layer_index), font: &font_ref, page };

    painter.text(page.margin_mm, TITLE_BASELINE_MM, TITLE_SIZE_PT, DARK, false, &model.title);
    for ((label, value), x) in model.identity.iter().zip(META_COLUMNS_MM) {
        painter.text(x, META_BASELINE_MM, META_SIZE_PT, MUTED, false, &format!("{label}: {value}"));
    }

    let pages = paginate(model.rows.len(), &page);
    for (index, table_page) in pages.iter().enumerate() {
        if index > 0 {
            painter.layer = add_page(&doc, &page);
        }
        painter.header(table_page.table_top);
        for (offset, row_index) in table_page.rows.clone().enumerate() {
            let top = table_page.table_top + HEADER_HEIGHT_MM + ROW_HEIGHT_MM * offset as f32;
            if let Some(row) = model.rows.get(row_index) {
                painter.row(top, row_index % 2 == 1, &row.cells);
            }
        }
    }

    if let Some(last) = pages.last() {
        let lines = model.summary.lines();
        let placement = place_summary(last, &page, lines.len());
        if placement.new_page {
            painter.layer = add_page(&doc, &page);
        }
        for (i, line) in lines.iter().enumerate() {
            let y = placement.top + SUMMARY_LINE_MM * i as f32;
            painter.text(page.margin_mm, y, META_SIZE_PT, DARK, false, line);
        }
    }

    drop(painter);
    doc.save_to_bytes().map_err(|e| ReportError::Pdf(e.to_string()))
}

fn load_font(doc: &PdfDocumentReference, font: &ReportFont) -> Result<IndirectFontRef, ReportError> {
    match font {
        ReportFont::Embedded { family, bytes } => doc
            .add_external_font(Cursor::new(bytes.as_slice()))
            .map_err(|e| ReportError::FontEmbed { family: family.clone(), message: e.to_string() }),
        ReportFont::Fallback => doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| ReportError::Pdf(e.to_string())),
    }
}

fn add_page(doc: &PdfDocumentReference, page: &PageGeometry) -> PdfLayerReference {
    let (page_index, layer_index) = doc.add_page(Mm(page.width_mm), Mm(page.height_mm), LAYER);
    doc.get_page(page_index).get_layer(layer_index)
}

fn color((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(Rgb::new(f32::from(r) / 255.0, f32::from(g) / 255.0, f32::from(b) / 255.0, None))
}

struct Painter<'a> {
    layer: PdfLayerReference,
    font: &'a IndirectFontRef,
    page: PageGeometry,
}

impl Painter<'_> {
    fn flip(&self, y: f32) -> Mm {
        Mm(self.page.height_mm - y)
    }

    fn text(&self, x: f32, baseline: f32, size_pt: f32, rgb: (u8, u8, u8), bold: bool, text: &str) {
        self.layer.set_fill_color(color(rgb));
        self.layer.use_text(text, size_pt, Mm(x), self.flip(baseline), self.font);
        if bold {
            self.layer.use_text(text, size_pt, Mm(x + BOLD_OFFSET_MM), self.flip(baseline), self.font);
        }
    }

    fn fill_band(&self, top: f32, height: f32, rgb: (u8, u8, u8)) {
        let left = self.page.margin_mm;
        let right = left + table_width_mm();
        self.layer.set_fill_color(color(rgb));
        self.layer.add_rect(
            Rect::new(Mm(left), self.flip(top + height), Mm(right), self.flip(top)).with_mode(PaintMode::Fill),
        );
    }

    fn grid(&self, top: f32, height: f32) {
        self.layer.set_outline_color(color(GRID));
        self.layer.set_outline_thickness(GRID_THICKNESS);
        let left = self.page.margin_mm;
        let right = left + table_width_mm();
        for y in [top, top + height] {
            self.segment((left, y), (right, y));
        }
        let mut x = left;
        self.segment((x, top), (x, top + height));
        for width in COLUMN_WIDTHS_MM {
            x += width;
            self.segment((x, top), (x, top + height));
        }
    }

    fn segment(&self, from: (f32, f32), to: (f32, f32)) {
        self.layer.add_line(Line {
            points: vec![
                (Point::new(Mm(from.0), self.flip(from.1)), false),
                (Point::new(Mm(to.0), self.flip(to.1)), false),
            ],
            is_closed: false,
        });
    }

    fn header(&self, top: f32) {
        self.fill_band(top, HEADER_HEIGHT_MM, HEADER_FILL);
        let baseline = baseline_in(top, HEADER_HEIGHT_MM, CELL_SIZE_PT);
        for ((heading, left), width) in COLUMN_HEADINGS.iter().zip(column_lefts(&self.page)).zip(COLUMN_WIDTHS_MM) {
            let fitted = fit_text(heading, CELL_SIZE_PT, width - 2.0 * CELL_PADDING_MM);
            self.text(left + CELL_PADDING_MM, baseline, CELL_SIZE_PT, HEADER_TEXT, true, &fitted);
        }
        self.grid(top, HEADER_HEIGHT_MM);
    }

    fn row(&self, top: f32, striped: bool, cells: &[Cell; 6]) {
        if striped {
            self.fill_band(top, ROW_HEIGHT_MM, STRIPE_FILL);
        }
        let baseline = baseline_in(top, ROW_HEIGHT_MM, CELL_SIZE_PT);
        for ((cell, left), width) in cells.iter().zip(column_lefts(&self.page)).zip(COLUMN_WIDTHS_MM) {
            let fitted = fit_text(&cell.text, CELL_SIZE_PT, width - 2.0 * CELL_PADDING_MM);
            self.text(left + CELL_PADDING_MM, baseline, CELL_SIZE_PT, cell.tone.rgb(), cell.bold, &fitted);
        }
        self.grid(top, ROW_HEIGHT_MM);
    }
}
