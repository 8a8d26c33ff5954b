//! Thin canvas over printpdf: point-addressed text and rules, page breaks,
//! and final save. Keeps the printpdf types out of the block-drawing code.

use printpdf::{
    IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference, Point, Pt,
};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::errors::RenderError;
use crate::file_utils::FileManager;
use crate::font::FontResource;

/// printpdf wants millimetres; the layout thinks in points.
fn mm(pt: f32) -> Mm {
    Mm::from(Pt(pt))
}

/// One open PDF document with a current page layer.
pub struct PageCanvas {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    font: IndirectFontRef,
    width_pt: f32,
    height_pt: f32,
    pages: usize,
}

impl PageCanvas {
    /// Creates the document with its first page and embeds the font.
    pub fn new(
        title: &str,
        width_pt: f32,
        height_pt: f32,
        font: &FontResource,
    ) -> Result<Self, RenderError> {
        let (doc, page, layer) = PdfDocument::new(title, mm(width_pt), mm(height_pt), "Layer 1");
        let font_ref = doc
            .add_external_font(font.data())
            .map_err(|e| RenderError::Pdf(e.to_string()))?;
        let layer = doc.get_page(page).get_layer(layer);

        Ok(PageCanvas {
            doc,
            layer,
            font: font_ref,
            width_pt,
            height_pt,
            pages: 1,
        })
    }

    /// Starts a new page; subsequent drawing lands on it.
    pub fn new_page(&mut self) {
        let (page, layer) = self
            .doc
            .add_page(mm(self.width_pt), mm(self.height_pt), "Layer 1");
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.pages += 1;
    }

    /// Pages emitted so far.
    pub fn pages(&self) -> usize {
        self.pages
    }

    /// Draws text with its baseline origin at (x, y) in points.
    pub fn text(&self, x_pt: f32, y_pt: f32, size_pt: f32, text: &str) {
        self.layer
            .use_text(text, size_pt, mm(x_pt), mm(y_pt), &self.font);
    }

    /// Draws text right-aligned against `right_pt`, measured with the
    /// loaded font's metrics.
    pub fn text_right(
        &self,
        right_pt: f32,
        y_pt: f32,
        size_pt: f32,
        text: &str,
        metrics: &FontResource,
    ) {
        let width = metrics.measure(text, size_pt);
        self.text(right_pt - width, y_pt, size_pt, text);
    }

    /// Draws a straight rule between two points.
    pub fn rule(&self, x0_pt: f32, y0_pt: f32, x1_pt: f32, y1_pt: f32, width_pt: f32) {
        self.layer.set_outline_thickness(width_pt);
        let line = Line {
            points: vec![
                (Point::new(mm(x0_pt), mm(y0_pt)), false),
                (Point::new(mm(x1_pt), mm(y1_pt)), false),
            ],
            is_closed: false,
        };
        self.layer.add_line(line);
    }

    /// Writes the document to `dest`, creating parent directories.
    ///
    /// Consumes the canvas; the font data and page tree are released
    /// whether or not the write succeeds.
    pub fn save(self, dest: &Path) -> Result<(), RenderError> {
        if let Some(parent) = dest.parent() {
            if !parent.as_os_str().is_empty() {
                FileManager::ensure_dir(parent).map_err(|e| RenderError::Io {
                    path: dest.to_path_buf(),
                    source: std::io::Error::other(e.to_string()),
                })?;
            }
        }

        let file = File::create(dest).map_err(|e| RenderError::Io {
            path: dest.to_path_buf(),
            source: e,
        })?;
        let mut writer = BufWriter::new(file);
        self.doc
            .save(&mut writer)
            .map_err(|e| RenderError::Pdf(e.to_string()))
    }
}
