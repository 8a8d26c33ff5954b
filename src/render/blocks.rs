//! Worksheet building blocks.
//!
//! Each function draws one section at the given baseline and returns the
//! baseline below it. Sections clip themselves against the bottom limit
//! rather than overflowing into the margin.

use crate::app_config::{ClozeConfig, PageConfig};
use crate::cloze;
use crate::font::FontResource;
use crate::hangul;
use crate::sentence::{Sentence, VocabEntry};

use super::layout::{ANNOTATION_LINE_MULT, HANGUL_LINE_MULT, PageGeometry, RULE_LINE_MULT};
use super::page::PageCanvas;

/// Point size of the header line
const HEADER_SIZE_PT: f32 = 10.0;

/// Point size of the syllable labels on practice rules
const SYLLABLE_LABEL_SIZE_PT: f32 = 12.0;

/// Horizontal inset of a syllable practice rule after its label
const SYLLABLE_RULE_INSET_PT: f32 = 22.0;

/// Gap kept at the right edge of a syllable practice column
const SYLLABLE_RULE_TRAIL_PT: f32 = 6.0;

/// Theme name on the left, page number on the right.
pub fn draw_header(
    canvas: &PageCanvas,
    geometry: &PageGeometry,
    font: &FontResource,
    theme_name: &str,
    page_no: usize,
) {
    let y = geometry.header_y();
    canvas.text(
        geometry.margin_x_pt,
        y,
        HEADER_SIZE_PT,
        &format!("Theme: {}", theme_name),
    );
    canvas.text_right(
        geometry.width_pt - geometry.margin_x_pt,
        y,
        HEADER_SIZE_PT,
        &format!("Page {}", page_no),
        font,
    );
}

/// Large-print Hangul, romanization, and gloss + interlinear gloss
/// side-by-side (workbook style).
pub fn sentence_block(
    canvas: &PageCanvas,
    geometry: &PageGeometry,
    page: &PageConfig,
    mut y: f32,
    sentence: &Sentence,
) -> f32 {
    let x = geometry.margin_x_pt;
    let gap = geometry.line_gap_pt;

    canvas.text(x, y, page.hangul_size_pt, sentence.hangul());
    y -= gap * HANGUL_LINE_MULT;

    if let Some(romanized) = sentence.romanized() {
        if !romanized.trim().is_empty() {
            canvas.text(x, y, page.romanized_size_pt, romanized);
            y -= gap * ANNOTATION_LINE_MULT;
        }
    }

    let col_w = geometry.usable_width() / 2.0;
    if let Some(gloss) = sentence.gloss() {
        canvas.text(x, y, page.gloss_size_pt, &format!("Gloss: {}", gloss));
    }
    if let Some(interlinear) = sentence.interlinear_gloss() {
        canvas.text(x + col_w, y, page.gloss_size_pt, &format!("IG: {}", interlinear));
    }
    y -= gap;

    y - geometry.section_gap_pt
}

/// Compact syllable breakdown plus one repetition rule per syllable,
/// arranged in columns (workbook style).
pub fn breakdown_and_practice(
    canvas: &PageCanvas,
    geometry: &PageGeometry,
    page: &PageConfig,
    mut y: f32,
    text: &str,
) -> f32 {
    let x = geometry.margin_x_pt;
    let gap = geometry.line_gap_pt;
    let syllables = hangul::unique_syllables_in_order(text);

    canvas.text(x, y, page.section_size_pt, "Breakdown (syllable = parts)");
    y -= gap * ANNOTATION_LINE_MULT;

    for syllable in &syllables {
        if let Some(line) = hangul::breakdown_line(*syllable) {
            canvas.text(x, y, page.body_size_pt, &line);
            y -= gap * 0.9;
        }
        if y < geometry.bottom_limit() + 12.0 * gap {
            break;
        }
    }

    y -= geometry.section_gap_pt * 0.8;

    canvas.text(
        x,
        y,
        page.section_size_pt,
        "Write each syllable (repeat on the line)",
    );
    y -= gap;

    let cols = page.syllable_columns.max(1);
    let col_w = geometry.usable_width() / cols as f32;
    let row_h = gap * 1.2;

    let mut rows_used = 0;
    for (i, syllable) in syllables.iter().enumerate() {
        let row = i / cols;
        let col = i % cols;
        rows_used = rows_used.max(row + 1);

        let cx = x + col as f32 * col_w;
        let cy = y - row as f32 * row_h;
        if cy < geometry.bottom_limit() + 9.0 * gap {
            break;
        }

        canvas.text(cx, cy, SYLLABLE_LABEL_SIZE_PT, &format!("{}:", syllable));
        let rule_x0 = cx + SYLLABLE_RULE_INSET_PT;
        let rule_x1 = cx + col_w - SYLLABLE_RULE_TRAIL_PT;
        if rule_x1 > rule_x0 + 20.0 {
            canvas.rule(rule_x0, cy - 4.0, rule_x1, cy - 4.0, page.rule_width_pt);
        }
    }

    y -= rows_used as f32 * row_h;
    y - geometry.section_gap_pt
}

/// Fill-in-the-blank drills in columns (workbook style).
pub fn cloze_block(
    canvas: &PageCanvas,
    geometry: &PageGeometry,
    page: &PageConfig,
    cloze_config: &ClozeConfig,
    mut y: f32,
    text: &str,
) -> f32 {
    let x = geometry.margin_x_pt;
    let gap = geometry.line_gap_pt;
    let items = cloze::select_cloze_items(text, cloze_config);

    canvas.text(
        x,
        y,
        page.section_size_pt,
        &format!("Fill in the blank ({} selected)", items.len()),
    );
    y -= gap;

    let cols = cloze_config.columns.max(1);
    let col_w = geometry.usable_width() / cols as f32;
    let row_h = gap * 1.5;
    let rows = items.len().div_ceil(cols);

    // Column-major so drills read down each column
    for (idx, item) in items.iter().enumerate() {
        let col = idx / rows.max(1);
        let row = idx % rows.max(1);
        let cx = x + col as f32 * col_w;
        let cy = y - row as f32 * row_h;
        if cy < geometry.bottom_limit() + 8.0 * gap {
            break;
        }
        canvas.text(cx, cy, page.cloze_size_pt, item);
    }

    y -= rows as f32 * row_h;
    y - geometry.section_gap_pt * 0.8
}

/// Per-sentence vocabulary in columns (workbook style).
pub fn vocab_block(
    canvas: &PageCanvas,
    geometry: &PageGeometry,
    page: &PageConfig,
    mut y: f32,
    vocab: &[VocabEntry],
) -> f32 {
    let x = geometry.margin_x_pt;
    let gap = geometry.line_gap_pt;

    canvas.text(x, y, page.section_size_pt, "Vocab");
    y -= gap * 0.9;

    if vocab.is_empty() {
        canvas.text(x, y, page.vocab_size_pt, "(none)");
        return y - geometry.section_gap_pt;
    }

    let cols = page.vocab_columns.max(1);
    let col_w = geometry.usable_width() / cols as f32;
    let rows = vocab.len().div_ceil(cols);

    // Column-major to keep scanning simple
    for (i, entry) in vocab.iter().enumerate() {
        let col = i / rows.max(1);
        let row = i % rows.max(1);
        let cx = x + col as f32 * col_w;
        let cy = y - row as f32 * (gap * 0.9);
        if cy < geometry.bottom_limit() + gap {
            break;
        }
        canvas.text(
            cx,
            cy,
            page.vocab_size_pt,
            &format!("{}: {}", entry.word, entry.definition),
        );
    }

    y -= rows as f32 * (gap * 0.9);
    y - geometry.section_gap_pt * 0.5
}

/// Compact practice block: the sentence, one annotation line, and a fixed
/// number of ruled writing lines (practice style).
///
/// The annotation line is reserved even when empty so every block has the
/// same height as `layout::practice_block_height`.
pub fn practice_block(
    canvas: &PageCanvas,
    geometry: &PageGeometry,
    page: &PageConfig,
    mut y: f32,
    sentence: &Sentence,
) -> f32 {
    let x = geometry.margin_x_pt;
    let gap = geometry.line_gap_pt;

    canvas.text(x, y, page.hangul_size_pt, sentence.hangul());
    y -= gap * HANGUL_LINE_MULT;

    let annotation = match (sentence.romanized(), sentence.gloss()) {
        (Some(romanized), Some(gloss)) => format!("{}  ({})", romanized, gloss),
        (Some(romanized), None) => romanized.to_string(),
        (None, Some(gloss)) => gloss.to_string(),
        (None, None) => String::new(),
    };
    if !annotation.is_empty() {
        canvas.text(x, y, page.gloss_size_pt, &annotation);
    }
    y -= gap * ANNOTATION_LINE_MULT;

    let rule_x1 = geometry.width_pt - geometry.margin_x_pt;
    for _ in 0..page.lines_per_sentence {
        y -= gap * RULE_LINE_MULT;
        canvas.rule(x, y, rule_x1, y, page.rule_width_pt);
    }

    y - geometry.section_gap_pt
}
