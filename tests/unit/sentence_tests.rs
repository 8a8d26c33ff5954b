/*!
 * Tests for the sentence and theme model
 */

use anyhow::Result;
use hangulbook::sentence::{self, Sentence, Theme};

use crate::common;

/// Test that construction rejects empty Hangul text
#[test]
fn test_new_withEmptyText_shouldFail() {
    assert!(Sentence::new("").is_err());
    assert!(Sentence::new(" \t ").is_err());
}

/// Test that construction keeps annotations optional
#[test]
fn test_new_withTextOnly_shouldHaveNoAnnotations() -> Result<()> {
    let sentence = Sentence::new("안녕하세요")?;
    assert_eq!(sentence.hangul(), "안녕하세요");
    assert!(sentence.romanized().is_none());
    assert!(sentence.gloss().is_none());
    assert!(sentence.interlinear_gloss().is_none());
    assert!(sentence.vocab().is_empty());
    Ok(())
}

/// Test loading a single-theme JSON file
#[test]
fn test_load_themes_withSingleTheme_shouldParse() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let themes_file =
        common::create_test_themes_file(&temp_dir.path().to_path_buf(), "themes.json")?;

    let themes = sentence::load_themes(&themes_file)?;
    assert_eq!(themes.len(), 1);
    assert_eq!(themes[0].name(), "Cats");
    assert_eq!(themes[0].sentences().len(), 2);
    assert_eq!(themes[0].sentences()[0].hangul(), "고양이는 있다.");
    assert_eq!(themes[0].sentences()[0].vocab()[0].word, "고양이");
    Ok(())
}

/// Test loading a theme-list JSON file
#[test]
fn test_load_themes_withThemeList_shouldParseAll() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let content = r#"[
  { "name": "One", "sentences": [ { "hangul": "하나" } ] },
  { "name": "Two", "sentences": [ { "hangul": "둘" } ] }
]"#;
    let themes_file =
        common::create_test_file(&temp_dir.path().to_path_buf(), "list.json", content)?;

    let themes = sentence::load_themes(&themes_file)?;
    assert_eq!(themes.len(), 2);
    assert_eq!(themes[1].name(), "Two");
    Ok(())
}

/// Test that a data file with an empty sentence is rejected
#[test]
fn test_load_themes_withEmptySentence_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let content = r#"{ "name": "Bad", "sentences": [ { "hangul": "   " } ] }"#;
    let themes_file =
        common::create_test_file(&temp_dir.path().to_path_buf(), "bad.json", content)?;

    assert!(sentence::load_themes(&themes_file).is_err());
    Ok(())
}

/// Test that a data file with no sentences is rejected
#[test]
fn test_load_themes_withEmptyTheme_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let content = r#"{ "name": "Hollow", "sentences": [] }"#;
    let themes_file =
        common::create_test_file(&temp_dir.path().to_path_buf(), "hollow.json", content)?;

    assert!(sentence::load_themes(&themes_file).is_err());
    Ok(())
}

/// Test that malformed JSON is reported as a parse failure
#[test]
fn test_load_themes_withMalformedJson_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let themes_file =
        common::create_test_file(&temp_dir.path().to_path_buf(), "broken.json", "{ not json")?;

    assert!(sentence::load_themes(&themes_file).is_err());
    Ok(())
}

/// Test that a missing data file is reported as an I/O failure
#[test]
fn test_load_themes_withMissingFile_shouldFail() {
    let missing = std::path::Path::new("./does_not_exist_12345.json");
    assert!(sentence::load_themes(missing).is_err());
}

/// Test the built-in sample theme
#[test]
fn test_builtin_theme_shouldHaveEvenSentenceCount() {
    let theme = sentence::builtin_theme();
    assert!(!theme.sentences().is_empty());
    // The sample ships an even count so duplex printing works out of the box
    assert_eq!(theme.sentences().len() % 2, 0);
}

/// Test theme construction validation
#[test]
fn test_theme_new_withSentences_shouldSucceed() -> Result<()> {
    let theme = Theme::new("Test", vec![Sentence::new("안녕")?])?;
    assert_eq!(theme.name(), "Test");
    assert_eq!(theme.sentences().len(), 1);
    Ok(())
}
