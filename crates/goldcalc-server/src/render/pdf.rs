//! HTML-to-PDF conversion.
//!
//! `PdfRenderer` is the seam the receipt handler depends on. `TextLayoutPdf`
//! flattens the markup (see [`super::markup`]) and lays the lines out on A4
//! pages with builtin fonts, so no system fonts or external binaries are needed.

use async_trait::async_trait;
use bytes::Bytes;
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument};

use goldcalc_core::error::{GoldCalcError, Result};

use super::markup::{flatten, Line, LineStyle};

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_LEFT_MM: f32 = 20.0;
const TOP_MM: f32 = 277.0;
const BOTTOM_MM: f32 = 20.0;
const COLUMN_STEP_MM: f32 = 95.0;
const COLUMN_GAP_MM: f32 = 3.0;
const PT_TO_MM: f32 = 0.3528;
/// Average Helvetica advance, in em. Wide glyphs may still run slightly over.
const AVG_GLYPH_EM: f32 = 0.55;
const LAYER_NAME: &str = "receipt";

#[async_trait]
pub trait PdfRenderer: Send + Sync {
    async fn render_pdf(&self, markup: &str) -> Result<Bytes>;
}

#[derive(Debug, Clone)]
pub struct TextLayoutPdf {
    title: String,
}

impl Default for TextLayoutPdf {
    fn default() -> Self {
        Self::new("Jewellery Receipt")
    }
}

impl TextLayoutPdf {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    /// Lay out pre-flattened lines. CPU-bound; call off the async executor.
    pub fn layout(&self, lines: &[Line]) -> Result<Vec<u8>> {
        let (doc, page, layer) = PdfDocument::new(
            self.title.clone(),
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            LAYER_NAME,
        );
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(pdf_err)?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(pdf_err)?;

        let mut current = doc.get_page(page).get_layer(layer);
        let mut y = TOP_MM;

        for line in lines {
            let (font, size, advance): (&IndirectFontRef, f32, f32) = match line.style {
                LineStyle::Heading => (&bold, 16.0, 10.0),
                LineStyle::Body => (&regular, 11.0, 6.5),
            };

            if y - advance < BOTTOM_MM {
                let (p, l) = doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), LAYER_NAME);
                current = doc.get_page(p).get_layer(l);
                y = TOP_MM;
            }
            y -= advance;

            let last = line.cells.len().saturating_sub(1);
            for (i, cell) in line.cells.iter().enumerate() {
                let x = MARGIN_LEFT_MM + COLUMN_STEP_MM * i as f32;
                let width = if i == last {
                    PAGE_WIDTH_MM - MARGIN_LEFT_MM - x
                } else {
                    COLUMN_STEP_MM - COLUMN_GAP_MM
                };
                let text = fit_to_width(&latin1(cell), width, size);
                current.use_text(text, size, Mm(x), Mm(y), font);
            }
        }

        doc.save_to_bytes().map_err(pdf_err)
    }
}

#[async_trait]
impl PdfRenderer for TextLayoutPdf {
    async fn render_pdf(&self, markup: &str) -> Result<Bytes> {
        let lines = flatten(markup);
        let this = self.clone();
        let bytes = tokio::task::spawn_blocking(move || this.layout(&lines))
            .await
            .map_err(|e| GoldCalcError::Internal(format!("pdf layout task failed: {e}")))??;
        Ok(Bytes::from(bytes))
    }
}

/// Truncate `text` with `...` so it fits in `width_mm` at `font_size` points.
pub fn fit_to_width(text: &str, width_mm: f32, font_size: f32) -> String {
    let glyph_mm = font_size * AVG_GLYPH_EM * PT_TO_MM;
    if glyph_mm <= 0.0 || width_mm <= 0.0 {
        return String::new();
    }
    let max_chars = (width_mm / glyph_mm).floor() as usize;
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars <= 3 {
        return ".".repeat(max_chars);
    }
    let mut out: String = text.chars().take(max_chars - 3).collect();
    out.push_str("...");
    out
}

/// Builtin fonts only cover Latin-1.
fn latin1(s: &str) -> String {
    s.chars()
        .map(|c| if (c as u32) <= 0xFF { c } else { '?' })
        .collect()
}

fn pdf_err<E: std::fmt::Debug>(e: E) -> GoldCalcError {
    GoldCalcError::Render(format!("pdf: {e:?}"))
}
