/*!
 * Tests for language tag utilities
 */

use std::str::FromStr;
use sbvgen::language_utils::LanguageTag;

/// The four tags keep script line order
#[test]
fn test_ordered_tags_shouldMatchScriptLineOrder() {
    assert_eq!(
        LanguageTag::ORDERED,
        [
            LanguageTag::Ko,
            LanguageTag::Ja,
            LanguageTag::JaHiragana,
            LanguageTag::En
        ]
    );
}

/// Wire codes round-trip through FromStr
#[test]
fn test_from_str_withWireCodes_shouldRoundTrip() {
    for tag in LanguageTag::ORDERED {
        let parsed = LanguageTag::from_str(tag.code()).unwrap();
        assert_eq!(parsed, tag);
    }
}

/// Parsing is case-insensitive and accepts the hyphenated hiragana alias
#[test]
fn test_from_str_withAliases_shouldParse() {
    assert_eq!(LanguageTag::from_str("KO").unwrap(), LanguageTag::Ko);
    assert_eq!(
        LanguageTag::from_str("ja-hiragana").unwrap(),
        LanguageTag::JaHiragana
    );
}

/// Unknown tags are rejected
#[test]
fn test_from_str_withUnknownTag_shouldFail() {
    assert!(LanguageTag::from_str("fr").is_err());
}

/// Display uses the wire code
#[test]
fn test_display_shouldUseWireCode() {
    assert_eq!(LanguageTag::JaHiragana.to_string(), "ja_hiragana");
    assert_eq!(LanguageTag::En.to_string(), "en");
}
