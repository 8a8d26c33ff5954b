/*!
 * Worksheet rendering.
 *
 * Turns themes + a loaded font into one paginated PDF. Two styles:
 * - `workbook`: one page per sentence with breakdown, syllable practice,
 *   cloze drills and vocab.
 * - `practice`: a compact grid of sentence blocks with ruled writing lines,
 *   several per page.
 */

use log::{debug, info};
use std::path::Path;

use crate::app_config::{ClozeConfig, Config, PageConfig, SheetStyle};
use crate::errors::RenderError;
use crate::font::FontResource;
use crate::sentence::{self, Theme};

pub mod blocks;
pub mod layout;
pub mod page;

use layout::PageGeometry;
use page::PageCanvas;

/// Title embedded in the PDF metadata
const DOCUMENT_TITLE: &str = "Hangul Practice Workbook";

/// What one render call produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSummary {
    /// Pages in the output document, including any duplex padding
    pub pages: usize,
    /// Sentences rendered
    pub sentences: usize,
}

/// Renders a sequence of themes to a single PDF.
pub struct WorkbookRenderer {
    page: PageConfig,
    cloze: ClozeConfig,
    style: SheetStyle,
    duplex_pad: bool,
}

impl WorkbookRenderer {
    pub fn new(config: &Config) -> Self {
        Self {
            page: config.page.clone(),
            cloze: config.cloze.clone(),
            style: config.style,
            duplex_pad: config.duplex_pad,
        }
    }

    /// Renders `themes` with `font` and writes exactly one PDF to `dest`.
    ///
    /// An empty sentence sequence is a hard failure
    /// (`RenderError::EmptyInput`); a zero-page PDF is not representable,
    /// and a blank workbook is never intended. On failure after the
    /// destination was opened, a truncated file may remain.
    pub fn render(
        &self,
        themes: &[Theme],
        font: &FontResource,
        dest: &Path,
    ) -> Result<RenderSummary, RenderError> {
        let total = sentence::total_sentences(themes);
        if total == 0 {
            return Err(RenderError::EmptyInput);
        }

        let geometry = PageGeometry::from_config(&self.page);
        let mut canvas = PageCanvas::new(
            DOCUMENT_TITLE,
            geometry.width_pt,
            geometry.height_pt,
            font,
        )?;

        match self.style {
            SheetStyle::Workbook => self.render_workbook(&mut canvas, &geometry, font, themes),
            SheetStyle::Practice => self.render_practice(&mut canvas, &geometry, font, themes),
        }

        if self.duplex_pad && canvas.pages() % 2 == 1 {
            debug!("Odd page count {}, appending one blank page", canvas.pages());
            canvas.new_page();
        }

        let summary = RenderSummary {
            pages: canvas.pages(),
            sentences: total,
        };
        canvas.save(dest)?;
        info!(
            "Rendered {} sentences over {} pages ({} style)",
            summary.sentences,
            summary.pages,
            self.style.display_name()
        );
        Ok(summary)
    }

    /// One page per sentence, the full drill layout.
    fn render_workbook(
        &self,
        canvas: &mut PageCanvas,
        geometry: &PageGeometry,
        font: &FontResource,
        themes: &[Theme],
    ) {
        let mut page_no = 0usize;
        for theme in themes {
            for sentence in theme.sentences() {
                if page_no > 0 {
                    canvas.new_page();
                }
                page_no += 1;

                blocks::draw_header(canvas, geometry, font, theme.name(), page_no);

                let mut y = geometry.content_top();
                y = blocks::sentence_block(canvas, geometry, &self.page, y, sentence);
                y = blocks::breakdown_and_practice(
                    canvas,
                    geometry,
                    &self.page,
                    y,
                    sentence.hangul(),
                );
                y = blocks::cloze_block(
                    canvas,
                    geometry,
                    &self.page,
                    &self.cloze,
                    y,
                    sentence.hangul(),
                );

                // Push vocab towards the page bottom when the drills left
                // plenty of room; never above where the drills ended.
                let min_vocab_y = geometry.bottom_limit() + 8.0 * geometry.line_gap_pt;
                if y > min_vocab_y + 3.0 * geometry.line_gap_pt {
                    y = min_vocab_y;
                }
                let vocab_y = y.max(geometry.bottom_limit() + 4.0 * geometry.line_gap_pt);
                blocks::vocab_block(canvas, geometry, &self.page, vocab_y, sentence.vocab());
            }
        }
    }

    /// Fixed-capacity grid of compact practice blocks.
    fn render_practice(
        &self,
        canvas: &mut PageCanvas,
        geometry: &PageGeometry,
        font: &FontResource,
        themes: &[Theme],
    ) {
        let capacity = layout::practice_capacity(geometry, self.page.lines_per_sentence);
        debug!("Practice capacity: {} sentences per page", capacity);

        let mut page_no = 1usize;
        let mut on_page = 0usize;
        let mut y = geometry.content_top();

        for theme in themes {
            for sentence in theme.sentences() {
                if on_page == capacity {
                    canvas.new_page();
                    page_no += 1;
                    on_page = 0;
                    y = geometry.content_top();
                }
                if on_page == 0 {
                    blocks::draw_header(canvas, geometry, font, theme.name(), page_no);
                }

                y = blocks::practice_block(canvas, geometry, &self.page, y, sentence);
                on_page += 1;
            }
        }
    }
}
