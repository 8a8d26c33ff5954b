/*!
 * Tests for application configuration
 */

use anyhow::Result;
use hangulbook::app_config::{Config, PageSize, SheetStyle};
use std::str::FromStr;

/// Test that the default config fails validation without a font path
#[test]
fn test_validate_withDefaultConfig_shouldRequireFontPath() {
    let config = Config::default();
    assert!(config.validate().is_err());
}

/// Test that a config with a font path validates
#[test]
fn test_validate_withFontPath_shouldSucceed() {
    let mut config = Config::default();
    config.font_path = "/tmp/some-font.ttf".to_string();
    assert!(config.validate().is_ok());
}

/// Test that oversized margins are rejected
#[test]
fn test_validate_withOversizedMargins_shouldFail() {
    let mut config = Config::default();
    config.font_path = "/tmp/some-font.ttf".to_string();
    config.page.margin_x_pt = 400.0;
    assert!(config.validate().is_err());
}

/// Test that zero ruled lines are rejected
#[test]
fn test_validate_withZeroLinesPerSentence_shouldFail() {
    let mut config = Config::default();
    config.font_path = "/tmp/some-font.ttf".to_string();
    config.page.lines_per_sentence = 0;
    assert!(config.validate().is_err());
}

/// Test that a sample count above the pool cap is rejected
#[test]
fn test_validate_withSampleAbovePool_shouldFail() {
    let mut config = Config::default();
    config.font_path = "/tmp/some-font.ttf".to_string();
    config.cloze.sample_count = 100;
    config.cloze.max_pool = 10;
    assert!(config.validate().is_err());
}

/// Test that an empty JSON object deserializes to full defaults
#[test]
fn test_deserialize_withEmptyObject_shouldUseDefaults() -> Result<()> {
    let config: Config = serde_json::from_str("{}")?;
    assert_eq!(config.output_path, "out/hangul_workbook.pdf");
    assert_eq!(config.style, SheetStyle::Workbook);
    assert!(config.duplex_pad);
    assert_eq!(config.page.page_size, PageSize::Letter);
    assert_eq!(config.page.lines_per_sentence, 3);
    assert_eq!(config.cloze.sample_count, 10);
    Ok(())
}

/// Test that partial page settings merge with defaults
#[test]
fn test_deserialize_withPartialPageConfig_shouldMergeDefaults() -> Result<()> {
    let config: Config = serde_json::from_str(
        r#"{ "font_path": "f.ttf", "page": { "page_size": "a4", "lines_per_sentence": 5 } }"#,
    )?;
    assert_eq!(config.page.page_size, PageSize::A4);
    assert_eq!(config.page.lines_per_sentence, 5);
    assert!((config.page.hangul_size_pt - 20.0).abs() < 1e-6);
    Ok(())
}

/// Test that the config round-trips through serde_json
#[test]
fn test_serialize_withDefaults_shouldRoundTrip() -> Result<()> {
    let mut config = Config::default();
    config.font_path = "fonts/NotoSansKR-Regular.ttf".to_string();
    let json = serde_json::to_string_pretty(&config)?;
    let parsed: Config = serde_json::from_str(&json)?;
    assert_eq!(parsed.font_path, config.font_path);
    assert_eq!(parsed.style, config.style);
    assert_eq!(parsed.page.lines_per_sentence, config.page.lines_per_sentence);
    Ok(())
}

/// Test SheetStyle string conversions
#[test]
fn test_sheet_style_conversions_shouldBeConsistent() {
    assert_eq!(SheetStyle::Workbook.to_lowercase_string(), "workbook");
    assert_eq!(SheetStyle::Practice.display_name(), "Practice");
    assert_eq!(SheetStyle::from_str("practice").unwrap(), SheetStyle::Practice);
    assert!(SheetStyle::from_str("fancy").is_err());
}

/// Test PageSize dimensions
#[test]
fn test_page_size_dimensions_shouldMatchStandards() {
    let (w, h) = PageSize::Letter.dimensions_pt();
    assert_eq!((w, h), (612.0, 792.0));
    let (w, h) = PageSize::A4.dimensions_pt();
    assert!((w - 595.276).abs() < 1e-3);
    assert!((h - 841.89).abs() < 1e-3);
}
