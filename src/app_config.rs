use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::default::Default;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Path to a Hangul-capable TrueType font, or a directory to scan for one
    #[serde(default)]
    pub font_path: String,

    /// Destination path of the generated PDF
    #[serde(default = "default_output_path")]
    pub output_path: String,

    /// Sheet style to render
    #[serde(default)]
    pub style: SheetStyle,

    /// Pad the document to an even page count for duplex printing
    #[serde(default = "default_true")]
    pub duplex_pad: bool,

    /// Page geometry and typography
    #[serde(default)]
    pub page: PageConfig,

    /// Fill-in-the-blank drill settings
    #[serde(default)]
    pub cloze: ClozeConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Worksheet layout style
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SheetStyle {
    // @style: One page per sentence with breakdown, drills and vocab
    #[default]
    Workbook,
    // @style: Compact grid of sentence + ruled writing lines
    Practice,
}

impl SheetStyle {
    // @returns: Capitalized style name
    pub fn display_name(&self) -> &str {
        match self {
            Self::Workbook => "Workbook",
            Self::Practice => "Practice",
        }
    }

    // @returns: Lowercase style identifier
    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::Workbook => "workbook".to_string(),
            Self::Practice => "practice".to_string(),
        }
    }
}

// Implement Display trait for SheetStyle
impl std::fmt::Display for SheetStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

// Implement FromStr trait for SheetStyle
impl std::str::FromStr for SheetStyle {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "workbook" => Ok(Self::Workbook),
            "practice" => Ok(Self::Practice),
            _ => Err(anyhow!("Invalid sheet style: {}", s)),
        }
    }
}

/// Page size of the output document
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PageSize {
    #[default]
    Letter,
    A4,
}

impl PageSize {
    /// Width and height in PostScript points (72pt = 1 inch).
    pub fn dimensions_pt(&self) -> (f32, f32) {
        match self {
            Self::Letter => (612.0, 792.0),
            Self::A4 => (595.276, 841.89),
        }
    }
}

/// Page geometry and typography constants
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PageConfig {
    /// Paper size
    #[serde(default)]
    pub page_size: PageSize,

    /// Horizontal margin in points
    #[serde(default = "default_margin_x_pt")]
    pub margin_x_pt: f32,

    /// Vertical margin in points
    #[serde(default = "default_margin_y_pt")]
    pub margin_y_pt: f32,

    /// Point size of the large-print Hangul line
    #[serde(default = "default_hangul_size_pt")]
    pub hangul_size_pt: f32,

    /// Point size of the romanization line
    #[serde(default = "default_romanized_size_pt")]
    pub romanized_size_pt: f32,

    /// Point size of gloss lines
    #[serde(default = "default_gloss_size_pt")]
    pub gloss_size_pt: f32,

    /// Point size of section headings
    #[serde(default = "default_section_size_pt")]
    pub section_size_pt: f32,

    /// Point size of body text (breakdown lines)
    #[serde(default = "default_body_size_pt")]
    pub body_size_pt: f32,

    /// Point size of cloze drill lines
    #[serde(default = "default_cloze_size_pt")]
    pub cloze_size_pt: f32,

    /// Point size of vocab entries
    #[serde(default = "default_vocab_size_pt")]
    pub vocab_size_pt: f32,

    /// Baseline-to-baseline gap in points
    #[serde(default = "default_line_gap_pt")]
    pub line_gap_pt: f32,

    /// Gap between sections in points
    #[serde(default = "default_section_gap_pt")]
    pub section_gap_pt: f32,

    /// Stroke width of ruled writing lines (thin, for ink efficiency)
    #[serde(default = "default_rule_width_pt")]
    pub rule_width_pt: f32,

    /// Blank ruled writing lines under each sentence (practice style)
    #[serde(default = "default_lines_per_sentence")]
    pub lines_per_sentence: usize,

    /// Columns of per-syllable practice lines (workbook style)
    #[serde(default = "default_syllable_columns")]
    pub syllable_columns: usize,

    /// Columns in the vocab section (workbook style)
    #[serde(default = "default_vocab_columns")]
    pub vocab_columns: usize,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            page_size: PageSize::default(),
            margin_x_pt: default_margin_x_pt(),
            margin_y_pt: default_margin_y_pt(),
            hangul_size_pt: default_hangul_size_pt(),
            romanized_size_pt: default_romanized_size_pt(),
            gloss_size_pt: default_gloss_size_pt(),
            section_size_pt: default_section_size_pt(),
            body_size_pt: default_body_size_pt(),
            cloze_size_pt: default_cloze_size_pt(),
            vocab_size_pt: default_vocab_size_pt(),
            line_gap_pt: default_line_gap_pt(),
            section_gap_pt: default_section_gap_pt(),
            rule_width_pt: default_rule_width_pt(),
            lines_per_sentence: default_lines_per_sentence(),
            syllable_columns: default_syllable_columns(),
            vocab_columns: default_vocab_columns(),
        }
    }
}

/// Fill-in-the-blank drill settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ClozeConfig {
    /// Pool size cap before sampling
    #[serde(default = "default_cloze_max_pool")]
    pub max_pool: usize,

    /// Drills selected per sentence
    #[serde(default = "default_cloze_sample_count")]
    pub sample_count: usize,

    /// Longest blanked span in syllables
    #[serde(default = "default_cloze_max_span_len")]
    pub max_span_len: usize,

    /// Generate whole-word blanks
    #[serde(default = "default_true")]
    pub include_word_level: bool,

    /// Generate syllable-span blanks
    #[serde(default = "default_true")]
    pub include_span_level: bool,

    /// Columns in the cloze section
    #[serde(default = "default_cloze_columns")]
    pub columns: usize,

    /// Blank characters drawn per blanked syllable
    #[serde(default = "default_blanks_per_syllable")]
    pub blanks_per_syllable: usize,
}

impl Default for ClozeConfig {
    fn default() -> Self {
        Self {
            max_pool: default_cloze_max_pool(),
            sample_count: default_cloze_sample_count(),
            max_span_len: default_cloze_max_span_len(),
            include_word_level: true,
            include_span_level: true,
            columns: default_cloze_columns(),
            blanks_per_syllable: default_blanks_per_syllable(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_output_path() -> String {
    "out/hangul_workbook.pdf".to_string()
}

fn default_margin_x_pt() -> f32 {
    48.0
}

fn default_margin_y_pt() -> f32 {
    54.0
}

fn default_hangul_size_pt() -> f32 {
    20.0
}

fn default_romanized_size_pt() -> f32 {
    11.0
}

fn default_gloss_size_pt() -> f32 {
    10.0
}

fn default_section_size_pt() -> f32 {
    12.0
}

fn default_body_size_pt() -> f32 {
    11.0
}

fn default_cloze_size_pt() -> f32 {
    12.0
}

fn default_vocab_size_pt() -> f32 {
    10.0
}

fn default_line_gap_pt() -> f32 {
    16.0
}

fn default_section_gap_pt() -> f32 {
    18.0
}

fn default_rule_width_pt() -> f32 {
    0.25
}

fn default_lines_per_sentence() -> usize {
    3
}

fn default_syllable_columns() -> usize {
    4
}

fn default_vocab_columns() -> usize {
    2
}

fn default_cloze_max_pool() -> usize {
    60 // generate a pool then sample from it
}

fn default_cloze_sample_count() -> usize {
    10
}

fn default_cloze_max_span_len() -> usize {
    6
}

fn default_cloze_columns() -> usize {
    2
}

fn default_blanks_per_syllable() -> usize {
    3
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.font_path.trim().is_empty() {
            return Err(anyhow!(
                "A font path is required (set font_path, --font, or HANGUL_FONT_PATH)"
            ));
        }

        if self.output_path.trim().is_empty() {
            return Err(anyhow!("Output path must not be empty"));
        }

        let (width, height) = self.page.page_size.dimensions_pt();
        if self.page.margin_x_pt * 2.0 >= width || self.page.margin_y_pt * 2.0 >= height {
            return Err(anyhow!("Margins leave no usable page area"));
        }

        if self.page.hangul_size_pt <= 0.0 || self.page.line_gap_pt <= 0.0 {
            return Err(anyhow!("Font sizes and line gap must be positive"));
        }

        if self.page.lines_per_sentence == 0 {
            return Err(anyhow!("lines_per_sentence must be at least 1"));
        }

        if self.page.syllable_columns == 0 || self.page.vocab_columns == 0 || self.cloze.columns == 0
        {
            return Err(anyhow!("Column counts must be at least 1"));
        }

        if self.cloze.sample_count > self.cloze.max_pool {
            return Err(anyhow!(
                "cloze.sample_count ({}) exceeds cloze.max_pool ({})",
                self.cloze.sample_count,
                self.cloze.max_pool
            ));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            font_path: String::new(),
            output_path: default_output_path(),
            style: SheetStyle::default(),
            duplex_pad: true,
            page: PageConfig::default(),
            cloze: ClozeConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
