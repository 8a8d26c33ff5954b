/*!
 * Tests for Hangul syllable inspection and decomposition
 */

use hangulbook::hangul;

/// Test decomposition across the whole syllable block boundaries
#[test]
fn test_decompose_syllable_withBlockBoundaries_shouldDecompose() {
    // 가 is the first syllable, 힣 the last
    assert_eq!(hangul::decompose_syllable('가'), vec!['ㄱ', 'ㅏ']);
    assert_eq!(hangul::decompose_syllable('힣'), vec!['ㅎ', 'ㅣ', 'ㅎ']);
}

/// Test decomposition of a greeting syllable by syllable
#[test]
fn test_decompose_syllable_withGreeting_shouldMatchJamo() {
    assert_eq!(hangul::decompose_syllable('안'), vec!['ㅇ', 'ㅏ', 'ㄴ']);
    assert_eq!(hangul::decompose_syllable('녕'), vec!['ㄴ', 'ㅕ', 'ㅇ']);
    assert_eq!(hangul::decompose_syllable('하'), vec!['ㅎ', 'ㅏ']);
    assert_eq!(hangul::decompose_syllable('세'), vec!['ㅅ', 'ㅔ']);
    assert_eq!(hangul::decompose_syllable('요'), vec!['ㅇ', 'ㅛ']);
}

/// Test that every syllable decomposes into 2 or 3 parts
#[test]
fn test_decompose_syllable_withSampledBlock_shouldAlwaysSplit() {
    for codepoint in (0xAC00u32..=0xD7A3).step_by(997) {
        let ch = char::from_u32(codepoint).unwrap();
        let parts = hangul::decompose_syllable(ch);
        assert!(
            parts.len() == 2 || parts.len() == 3,
            "{} decomposed into {} parts",
            ch,
            parts.len()
        );
    }
}

/// Test unique syllable extraction ignores punctuation and Latin text
#[test]
fn test_unique_syllables_in_order_withMixedText_shouldKeepHangulOnly() {
    let syllables = hangul::unique_syllables_in_order("cat: 고양이, dog: 개!");
    assert_eq!(syllables, vec!['고', '양', '이', '개']);
}

/// Test breakdown line formatting for an open syllable
#[test]
fn test_breakdown_line_withOpenSyllable_shouldListTwoParts() {
    let line = hangul::breakdown_line('가').unwrap();
    assert_eq!(line, "가 = ㄱ(g/k) + ㅏ(a)");
}

/// Test breakdown lines always name the syllable they explain
#[test]
fn test_breakdown_line_withAnySyllable_shouldStartWithSyllable() {
    for ch in ['값', '닭', '뷁'] {
        let line = hangul::breakdown_line(ch).unwrap();
        assert!(line.starts_with(&format!("{} = ", ch)));
    }
}
