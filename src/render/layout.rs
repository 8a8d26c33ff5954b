//! Page geometry and pagination math.
//!
//! All lengths are PostScript points (72pt = 1 inch) with the PDF origin at
//! the bottom-left corner, so the layout cursor moves down by subtracting.

use crate::app_config::PageConfig;

/// Line-gap multiplier under the large-print Hangul line
pub const HANGUL_LINE_MULT: f32 = 1.35;

/// Line-gap multiplier under an annotation line
pub const ANNOTATION_LINE_MULT: f32 = 0.95;

/// Line-gap multiplier between ruled writing lines
pub const RULE_LINE_MULT: f32 = 1.4;

/// Vertical allowance between the header and the first content line
const HEADER_ALLOWANCE_PT: f32 = 20.0;

/// Header baseline offset above the top margin
const HEADER_RISE_PT: f32 = 18.0;

/// Resolved page geometry for one render call.
#[derive(Debug, Clone)]
pub struct PageGeometry {
    pub width_pt: f32,
    pub height_pt: f32,
    pub margin_x_pt: f32,
    pub margin_y_pt: f32,
    pub line_gap_pt: f32,
    pub section_gap_pt: f32,
}

impl PageGeometry {
    pub fn from_config(page: &PageConfig) -> Self {
        let (width_pt, height_pt) = page.page_size.dimensions_pt();
        Self {
            width_pt,
            height_pt,
            margin_x_pt: page.margin_x_pt,
            margin_y_pt: page.margin_y_pt,
            line_gap_pt: page.line_gap_pt,
            section_gap_pt: page.section_gap_pt,
        }
    }

    /// Usable text width between the horizontal margins.
    pub fn usable_width(&self) -> f32 {
        self.width_pt - 2.0 * self.margin_x_pt
    }

    /// Baseline of the page header, slightly above the top margin.
    pub fn header_y(&self) -> f32 {
        self.height_pt - self.margin_y_pt + HEADER_RISE_PT
    }

    /// First content baseline under the header.
    pub fn content_top(&self) -> f32 {
        self.height_pt - self.margin_y_pt - HEADER_ALLOWANCE_PT
    }

    /// Lowest baseline content may occupy.
    pub fn bottom_limit(&self) -> f32 {
        self.margin_y_pt
    }
}

/// Height of one practice-style sentence block.
///
/// The annotation line is always reserved, even for bare sentences, so the
/// block height is constant and pagination is a plain capacity split.
pub fn practice_block_height(geometry: &PageGeometry, lines_per_sentence: usize) -> f32 {
    geometry.line_gap_pt * HANGUL_LINE_MULT
        + geometry.line_gap_pt * ANNOTATION_LINE_MULT
        + lines_per_sentence as f32 * geometry.line_gap_pt * RULE_LINE_MULT
        + geometry.section_gap_pt
}

/// Sentences that fit on one practice-style page, at least 1.
pub fn practice_capacity(geometry: &PageGeometry, lines_per_sentence: usize) -> usize {
    let usable = geometry.content_top() - geometry.bottom_limit();
    let capacity = (usable / practice_block_height(geometry, lines_per_sentence)) as usize;
    capacity.max(1)
}

/// Content pages needed for `sentences` blocks at `capacity` per page.
pub fn content_page_count(sentences: usize, capacity: usize) -> usize {
    sentences.div_ceil(capacity.max(1))
}

/// Final page count after optional duplex padding to an even total.
pub fn padded_page_count(content_pages: usize, duplex_pad: bool) -> usize {
    if duplex_pad && content_pages % 2 == 1 {
        content_pages + 1
    } else {
        content_pages
    }
}
