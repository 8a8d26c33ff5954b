/*!
 * # hangulbook - Hangul Practice Workbook Generator
 *
 * A Rust library for generating printable Hangul practice worksheets as PDF.
 *
 * ## Features
 *
 * - Sentence/theme data model with validation, loadable from JSON
 * - Syllable decomposition into labeled compatibility jamo
 * - Deterministic fill-in-the-blank drill generation
 * - TrueType font loading with Hangul coverage checks
 * - Paginated PDF output with ruled writing lines and duplex padding
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `sentence`: Sentence and theme model, data-file loading
 * - `hangul`: Syllable inspection and jamo decomposition
 * - `cloze`: Fill-in-the-blank drill generation
 * - `font`: Font resource loading and text metrics
 * - `render`: Worksheet layout and PDF emission:
 *   - `render::layout`: Page geometry and pagination math
 *   - `render::page`: Canvas over the PDF backend
 *   - `render::blocks`: Worksheet section drawing
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod cloze;
pub mod errors;
pub mod file_utils;
pub mod font;
pub mod hangul;
pub mod render;
pub mod sentence;

// Re-export main types for easier usage
pub use app_config::{Config, SheetStyle};
pub use app_controller::Controller;
pub use errors::{AppError, FontError, RenderError, SentenceError};
pub use font::FontResource;
pub use render::{RenderSummary, WorkbookRenderer};
pub use sentence::{Sentence, Theme, VocabEntry};
