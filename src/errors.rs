/*!
 * Error types for the hangulbook application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when validating sentence data
#[derive(Error, Debug)]
pub enum SentenceError {
    /// A sentence with empty (or whitespace-only) Hangul text
    #[error("Sentence {index} has empty Hangul text")]
    EmptyText {
        /// Position of the sentence in its theme
        index: usize,
    },

    /// A theme that contains no sentences
    #[error("Theme '{0}' contains no sentences")]
    EmptyTheme(String),

    /// Error reading a sentence data file
    #[error("Failed to read data file {path:?}: {source}")]
    Io {
        /// Path of the data file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Error parsing a sentence data file
    #[error("Failed to parse data file {path:?}: {reason}")]
    Parse {
        /// Path of the data file
        path: PathBuf,
        /// Parser message
        reason: String,
    },
}

/// Errors that can occur when loading a font resource
#[derive(Error, Debug)]
pub enum FontError {
    /// The font file does not exist
    #[error("Font file not found: {0:?}")]
    NotFound(PathBuf),

    /// Error reading the font file
    #[error("Failed to read font file {path:?}: {source}")]
    Io {
        /// Path of the font file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The font file could not be parsed as a TrueType/OpenType face
    #[error("Failed to parse font file {path:?}: {reason}")]
    Parse {
        /// Path of the font file
        path: PathBuf,
        /// Parser message
        reason: String,
    },

    /// The face parses but does not cover the Hangul Syllables block
    #[error("Font {path:?} has no glyphs for Hangul syllables (missing {missing:?})")]
    MissingGlyphs {
        /// Path of the font file
        path: PathBuf,
        /// Probe characters that had no glyph
        missing: Vec<char>,
    },

    /// A directory was given but no face in it covers Hangul
    #[error("No font with Hangul coverage found under {0:?}")]
    NoneResolved(PathBuf),
}

/// Errors that can occur while rendering the workbook
#[derive(Error, Debug)]
pub enum RenderError {
    /// The flattened sentence sequence is empty
    #[error("No sentences to render")]
    EmptyInput,

    /// Error from the font resource
    #[error("Font error: {0}")]
    Font(#[from] FontError),

    /// Error writing the output document
    #[error("Failed to write output {path:?}: {source}")]
    Io {
        /// Destination path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Error from the PDF backend
    #[error("PDF emission failed: {0}")]
    Pdf(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from sentence validation
    #[error("Sentence error: {0}")]
    Sentence(#[from] SentenceError),

    /// Error from the font resource
    #[error("Font error: {0}")]
    Font(#[from] FontError),

    /// Error from rendering
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
