use anyhow::{Context, Result};
use log::{info, warn};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::file_utils::FileManager;
use crate::font::FontResource;
use crate::render::WorkbookRenderer;
use crate::sentence::{self, Theme};

// @module: Application controller for workbook generation

/// Main application controller for workbook generation
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self { config })
    }

    /// Check if the controller is properly initialized with configuration
    pub fn is_initialized(&self) -> bool {
        !self.config.font_path.is_empty() && !self.config.output_path.is_empty()
    }

    /// Run the main workflow: load sentences, load the font, render one PDF.
    ///
    /// `data_path` selects a JSON themes file; without one the built-in
    /// sample theme is used. An existing output is kept unless
    /// `force_overwrite` is set (the run warns and exits cleanly).
    pub fn run(&self, data_path: Option<&Path>, force_overwrite: bool) -> Result<()> {
        let start_time = std::time::Instant::now();

        let themes = self.load_themes(data_path)?;
        let total = sentence::total_sentences(&themes);
        info!(
            "Loaded {} sentences across {} theme(s)",
            total,
            themes.len()
        );
        sentence::check_duplex_advisory(&themes);

        let output = PathBuf::from(&self.config.output_path);
        if FileManager::file_exists(&output) && !force_overwrite {
            warn!(
                "Output file already exists: {:?}. Use -f to force overwrite.",
                output
            );
            return Ok(());
        }

        // Load the font before touching the destination so a bad font path
        // never leaves an output file behind.
        let font = FontResource::resolve(Path::new(&self.config.font_path))
            .context("Failed to load font resource")?;
        info!("Using font: {:?}", font.path());

        let renderer = WorkbookRenderer::new(&self.config);
        let summary = renderer
            .render(&themes, &font, &output)
            .context("Failed to render workbook")?;

        info!(
            "Success: {:?} ({} pages, {} sentences) in {:.2}s",
            output,
            summary.pages,
            summary.sentences,
            start_time.elapsed().as_secs_f64()
        );
        Ok(())
    }

    // @loads: Themes from the data file, or the built-in sample theme
    fn load_themes(&self, data_path: Option<&Path>) -> Result<Vec<Theme>> {
        match data_path {
            Some(path) => {
                let themes = sentence::load_themes(path)
                    .with_context(|| format!("Failed to load themes from {:?}", path))?;
                Ok(themes)
            }
            None => {
                info!("No themes file given, using the built-in sample theme");
                Ok(vec![sentence::builtin_theme()])
            }
        }
    }
}
