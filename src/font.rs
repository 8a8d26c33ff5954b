use log::debug;
use std::path::{Path, PathBuf};
use ttf_parser::Face;

use crate::errors::FontError;
use crate::file_utils::FileManager;

// @module: Font resource loading and text metrics

/// Representative syllables probed for Hangul coverage.
/// 가 and 힣 bound the Hangul Syllables block.
const COVERAGE_PROBE: [char; 5] = ['가', '힣', '한', '글', '요'];

/// Fallback advance for characters without a glyph, in em units
const AVERAGE_ADVANCE_EM: f32 = 0.5;

/// A loaded TrueType font, held for the duration of one render call.
///
/// The file is read once into owned bytes; metric queries parse the face
/// on demand and borrow those bytes. Dropping the resource releases the
/// only copy of the data.
pub struct FontResource {
    path: PathBuf,
    data: Vec<u8>,
    units_per_em: f32,
}

impl FontResource {
    /// Loads and validates a font file.
    ///
    /// Fails when the file is missing, is not a TrueType (glyf outline)
    /// face, or has no glyphs for the Hangul probe syllables. PDF embedding
    /// needs glyf outlines, so CFF-flavoured OTF files are rejected here
    /// rather than at emission time.
    pub fn load(path: &Path) -> Result<Self, FontError> {
        if !FileManager::file_exists(path) {
            return Err(FontError::NotFound(path.to_path_buf()));
        }

        let data = std::fs::read(path).map_err(|e| FontError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let face = Face::parse(&data, 0).map_err(|e| FontError::Parse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        if face.tables().glyf.is_none() {
            return Err(FontError::Parse {
                path: path.to_path_buf(),
                reason: "no glyf table (CFF outlines are not supported)".to_string(),
            });
        }

        let missing: Vec<char> = COVERAGE_PROBE
            .iter()
            .copied()
            .filter(|c| face.glyph_index(*c).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(FontError::MissingGlyphs {
                path: path.to_path_buf(),
                missing,
            });
        }

        let units_per_em = f32::from(face.units_per_em());
        debug!(
            "Loaded font {:?}: {} glyphs, {} units/em",
            path,
            face.number_of_glyphs(),
            units_per_em
        );

        Ok(FontResource {
            path: path.to_path_buf(),
            data,
            units_per_em,
        })
    }

    /// Resolves a font from a file path or a directory.
    ///
    /// Directories are scanned for `.ttf` files in path order; the first
    /// face with Hangul coverage wins.
    pub fn resolve(path: &Path) -> Result<Self, FontError> {
        if !FileManager::dir_exists(path) {
            return Self::load(path);
        }

        let mut candidates = FileManager::find_files(path, "ttf")
            .map_err(|e| FontError::Io {
                path: path.to_path_buf(),
                source: std::io::Error::other(e.to_string()),
            })?;
        candidates.sort();

        for candidate in candidates {
            match Self::load(&candidate) {
                Ok(font) => return Ok(font),
                Err(e) => debug!("Skipping font candidate {:?}: {}", candidate, e),
            }
        }

        Err(FontError::NoneResolved(path.to_path_buf()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw font bytes, for embedding into the output document.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Whether the face maps this character to a glyph.
    pub fn has_glyph(&self, ch: char) -> bool {
        match Face::parse(&self.data, 0) {
            Ok(face) => face.glyph_index(ch).is_some(),
            Err(_) => false,
        }
    }

    /// Rendered width of `text` in points at the given font size.
    ///
    /// Characters without a glyph fall back to an average advance, the
    /// same tolerance the layout applies everywhere.
    pub fn measure(&self, text: &str, font_size_pt: f32) -> f32 {
        let fallback = self.units_per_em * AVERAGE_ADVANCE_EM;
        let units: f32 = match Face::parse(&self.data, 0) {
            Ok(face) => text
                .chars()
                .map(|c| {
                    face.glyph_index(c)
                        .and_then(|gid| face.glyph_hor_advance(gid))
                        .map(f32::from)
                        .unwrap_or(fallback)
                })
                .sum(),
            Err(_) => fallback * text.chars().count() as f32,
        };
        units / self.units_per_em * font_size_pt
    }
}
