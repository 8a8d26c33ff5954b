use log::debug;
use serde::Deserialize;
use std::path::Path;

use crate::errors::SentenceError;

// @module: Practice sentence and theme model

/// A vocabulary item attached to a sentence
#[derive(Debug, Clone, Deserialize)]
pub struct VocabEntry {
    // @field: The Korean word or particle
    pub word: String,

    // @field: English definition
    pub definition: String,
}

/// A single workbook item.
///
/// Immutable once constructed; the renderer only ever borrows a read-only
/// view. An even number of sentences per workbook suits double-sided
/// printing, but this is advisory only and never enforced.
#[derive(Debug, Clone, Deserialize)]
pub struct Sentence {
    /// The Hangul text to practice (required, non-empty)
    hangul: String,

    /// Romanization, e.g. "goyang-ineun itda."
    #[serde(default)]
    romanized: Option<String>,

    /// English gloss
    #[serde(default)]
    gloss: Option<String>,

    /// ASCII interlinear gloss, e.g. "cat-TOP exist-DECL"
    #[serde(default)]
    interlinear_gloss: Option<String>,

    /// Per-sentence vocabulary
    #[serde(default)]
    vocab: Vec<VocabEntry>,
}

impl Sentence {
    // @creates: Validated sentence
    // @validates: Non-empty Hangul text
    pub fn new(hangul: impl Into<String>) -> Result<Self, SentenceError> {
        let hangul = hangul.into();
        let trimmed = hangul.trim();
        if trimmed.is_empty() {
            return Err(SentenceError::EmptyText { index: 0 });
        }

        Ok(Sentence {
            hangul: trimmed.to_string(),
            romanized: None,
            gloss: None,
            interlinear_gloss: None,
            vocab: Vec::new(),
        })
    }

    pub fn with_romanized(mut self, romanized: impl Into<String>) -> Self {
        self.romanized = Some(romanized.into());
        self
    }

    pub fn with_gloss(mut self, gloss: impl Into<String>) -> Self {
        self.gloss = Some(gloss.into());
        self
    }

    pub fn with_interlinear_gloss(mut self, interlinear_gloss: impl Into<String>) -> Self {
        self.interlinear_gloss = Some(interlinear_gloss.into());
        self
    }

    pub fn with_vocab(mut self, vocab: Vec<VocabEntry>) -> Self {
        self.vocab = vocab;
        self
    }

    pub fn hangul(&self) -> &str {
        &self.hangul
    }

    pub fn romanized(&self) -> Option<&str> {
        self.romanized.as_deref()
    }

    pub fn gloss(&self) -> Option<&str> {
        self.gloss.as_deref()
    }

    pub fn interlinear_gloss(&self) -> Option<&str> {
        self.interlinear_gloss.as_deref()
    }

    pub fn vocab(&self) -> &[VocabEntry] {
        &self.vocab
    }

    /// Re-checks the invariants after deserialization.
    fn validate(&self, index: usize) -> Result<(), SentenceError> {
        if self.hangul.trim().is_empty() {
            return Err(SentenceError::EmptyText { index });
        }
        Ok(())
    }
}

/// A themed collection of sentences.
#[derive(Debug, Clone, Deserialize)]
pub struct Theme {
    /// Theme title shown in the page header
    name: String,

    /// The sentences, in workbook order
    sentences: Vec<Sentence>,
}

impl Theme {
    pub fn new(name: impl Into<String>, sentences: Vec<Sentence>) -> Result<Self, SentenceError> {
        let name = name.into();
        if sentences.is_empty() {
            return Err(SentenceError::EmptyTheme(name));
        }
        Ok(Theme { name, sentences })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    fn validate(&self) -> Result<(), SentenceError> {
        if self.sentences.is_empty() {
            return Err(SentenceError::EmptyTheme(self.name.clone()));
        }
        for (index, sentence) in self.sentences.iter().enumerate() {
            sentence.validate(index)?;
        }
        Ok(())
    }
}

/// A data file holds either one theme object or a list of themes.
#[derive(Deserialize)]
#[serde(untagged)]
enum ThemeFile {
    One(Theme),
    Many(Vec<Theme>),
}

/// Loads and validates themes from a JSON data file.
pub fn load_themes(path: &Path) -> Result<Vec<Theme>, SentenceError> {
    let content = std::fs::read_to_string(path).map_err(|e| SentenceError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let parsed: ThemeFile =
        serde_json::from_str(&content).map_err(|e| SentenceError::Parse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    let themes = match parsed {
        ThemeFile::One(theme) => vec![theme],
        ThemeFile::Many(themes) => themes,
    };

    for theme in &themes {
        theme.validate()?;
        debug!("Loaded theme '{}' with {} sentences", theme.name(), theme.sentences().len());
    }

    Ok(themes)
}

/// The built-in sample theme, used when no data file is given.
pub fn builtin_theme() -> Theme {
    let vocab = |pairs: &[(&str, &str)]| -> Vec<VocabEntry> {
        pairs
            .iter()
            .map(|(word, definition)| VocabEntry {
                word: word.to_string(),
                definition: definition.to_string(),
            })
            .collect()
    };

    let sentences = vec![
        Sentence {
            hangul: "고양이는 있다.".to_string(),
            romanized: Some("goyang-ineun itda.".to_string()),
            gloss: Some("There is a cat.".to_string()),
            interlinear_gloss: Some("cat-TOP exist-DECL".to_string()),
            vocab: vocab(&[
                ("고양이", "cat"),
                ("-는/-은", "TOPIC marker"),
                ("있다", "to exist; to have"),
            ]),
        },
        Sentence {
            hangul: "고양이는 잔다.".to_string(),
            romanized: Some("goyang-ineun janda.".to_string()),
            gloss: Some("The cat sleeps.".to_string()),
            interlinear_gloss: Some("cat-TOP sleep-DECL".to_string()),
            vocab: vocab(&[
                ("고양이", "cat"),
                ("-는/-은", "TOPIC marker"),
                ("자다", "to sleep"),
            ]),
        },
        Sentence {
            hangul: "작은 고양이는 검다.".to_string(),
            romanized: Some("jageun goyang-ineun geomda.".to_string()),
            gloss: Some("The small cat is black.".to_string()),
            interlinear_gloss: Some("small cat-TOP black-DECL".to_string()),
            vocab: vocab(&[
                ("작다", "to be small"),
                ("-은", "attributive (adj)"),
                ("고양이", "cat"),
                ("검다", "to be black"),
            ]),
        },
        Sentence {
            hangul: "고양이는 의자 위에 있다.".to_string(),
            romanized: Some("goyang-ineun uija wie itda.".to_string()),
            gloss: Some("The cat is on the chair.".to_string()),
            interlinear_gloss: Some("cat-TOP chair top-LOC exist-DECL".to_string()),
            vocab: vocab(&[
                ("고양이", "cat"),
                ("의자", "chair"),
                ("위", "top; above"),
                ("-에", "location/time particle"),
                ("있다", "to exist; to be located"),
            ]),
        },
    ];

    Theme {
        name: "Cats".to_string(),
        sentences,
    }
}

/// Total sentence count across themes.
pub fn total_sentences(themes: &[Theme]) -> usize {
    themes.iter().map(|t| t.sentences().len()).sum()
}

/// Logs a hint when the sentence count does not suit duplex printing.
pub fn check_duplex_advisory(themes: &[Theme]) -> bool {
    let total = total_sentences(themes);
    let even = total % 2 == 0;
    if !even {
        debug!(
            "{} sentences; an even count prints best double-sided",
            total
        );
    }
    even
}
