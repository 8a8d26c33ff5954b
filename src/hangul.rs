use once_cell::sync::Lazy;
use std::collections::HashMap;

// @module: Hangul syllable inspection and jamo decomposition

/// First codepoint of the Hangul Syllables block (가)
const SYLLABLE_BASE: u32 = 0xAC00;

/// Last codepoint of the Hangul Syllables block (힣)
const SYLLABLE_LAST: u32 = 0xD7A3;

/// Number of jungseong * jongseong combinations per choseong
const PER_CHOSEONG: u32 = 21 * 28;

/// Number of jongseong slots per jungseong (including "none")
const PER_JUNGSEONG: u32 = 28;

/// Compatibility jamo for the 19 leading consonants, in codepoint order
const CHOSEONG: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ',
    'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// Compatibility jamo for the 21 vowels, in codepoint order
const JUNGSEONG: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ', 'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ',
    'ㅞ', 'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// Compatibility jamo for the 27 trailing consonants (index 0 = no jongseong).
/// Consonant clusters stay as their single compatibility form (ㄳ, ㄵ, ...).
const JONGSEONG: [char; 27] = [
    'ㄱ', 'ㄲ', 'ㄳ', 'ㄴ', 'ㄵ', 'ㄶ', 'ㄷ', 'ㄹ', 'ㄺ', 'ㄻ', 'ㄼ', 'ㄽ', 'ㄾ', 'ㄿ', 'ㅀ',
    'ㅁ', 'ㅂ', 'ㅄ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

// @const: English pronunciation labels for single jamo
static JAMO_LABEL: Lazy<HashMap<char, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // consonants
        ('ㄱ', "g/k"),
        ('ㄲ', "kk"),
        ('ㄴ', "n"),
        ('ㄷ', "d/t"),
        ('ㄸ', "tt"),
        ('ㄹ', "r/l"),
        ('ㅁ', "m"),
        ('ㅂ', "b/p"),
        ('ㅃ', "pp"),
        ('ㅅ', "s"),
        ('ㅆ', "ss"),
        ('ㅇ', "silent/ng"),
        ('ㅈ', "j"),
        ('ㅉ', "jj"),
        ('ㅊ', "ch"),
        ('ㅋ', "k"),
        ('ㅌ', "t"),
        ('ㅍ', "p"),
        ('ㅎ', "h"),
        // vowels
        ('ㅏ', "a"),
        ('ㅐ', "ae"),
        ('ㅑ', "ya"),
        ('ㅒ', "yae"),
        ('ㅓ', "eo"),
        ('ㅔ', "e"),
        ('ㅕ', "yeo"),
        ('ㅖ', "ye"),
        ('ㅗ', "o"),
        ('ㅘ', "wa"),
        ('ㅙ', "wae"),
        ('ㅚ', "oe"),
        ('ㅛ', "yo"),
        ('ㅜ', "u"),
        ('ㅝ', "wo"),
        ('ㅞ', "we"),
        ('ㅟ', "wi"),
        ('ㅠ', "yu"),
        ('ㅡ', "eu"),
        ('ㅢ', "ui"),
        ('ㅣ', "i"),
    ])
});

/// Returns true for characters in the Hangul Syllables block (가..힣).
pub fn is_hangul_syllable(ch: char) -> bool {
    (SYLLABLE_BASE..=SYLLABLE_LAST).contains(&(ch as u32))
}

/// Decomposes a precomposed syllable into compatibility jamo.
///
/// Returns choseong + jungseong, plus the jongseong when present.
/// Non-syllable input yields an empty vector.
pub fn decompose_syllable(ch: char) -> Vec<char> {
    if !is_hangul_syllable(ch) {
        return Vec::new();
    }

    let index = ch as u32 - SYLLABLE_BASE;
    let cho = (index / PER_CHOSEONG) as usize;
    let jung = ((index % PER_CHOSEONG) / PER_JUNGSEONG) as usize;
    let jong = (index % PER_JUNGSEONG) as usize;

    let mut parts = vec![CHOSEONG[cho], JUNGSEONG[jung]];
    if jong > 0 {
        parts.push(JONGSEONG[jong - 1]);
    }
    parts
}

/// Unique Hangul syllables in first-seen order.
pub fn unique_syllables_in_order(text: &str) -> Vec<char> {
    let mut seen = std::collections::HashSet::new();
    text.chars()
        .filter(|c| is_hangul_syllable(*c) && seen.insert(*c))
        .collect()
}

/// Formats one breakdown line, e.g. `양 = ㅇ(silent/ng) + ㅑ(ya) + ㅇ(silent/ng)`.
///
/// Jamo without a label (consonant clusters) are printed bare.
pub fn breakdown_line(syllable: char) -> Option<String> {
    let parts = decompose_syllable(syllable);
    if parts.is_empty() {
        return None;
    }

    let labeled: Vec<String> = parts
        .iter()
        .map(|j| match JAMO_LABEL.get(j) {
            Some(label) => format!("{}({})", j, label),
            None => j.to_string(),
        })
        .collect();
    Some(format!("{} = {}", syllable, labeled.join(" + ")))
}

/// Returns true when the text contains at least one Hangul syllable.
pub fn contains_hangul(text: &str) -> bool {
    text.chars().any(is_hangul_syllable)
}
