use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Language tag utilities.
///
/// The dialogue script format carries exactly four language variants per
/// record, in a fixed line order: Korean, Japanese, Japanese phonetic
/// (hiragana reading), English. The Japanese variant doubles as the source
/// language for timeline alignment, since editor exports carry the spoken
/// Japanese line.

/// One of the four fixed language tags of a dialogue record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LanguageTag {
    /// Korean
    #[serde(rename = "ko")]
    Ko,
    /// Japanese
    #[serde(rename = "ja")]
    Ja,
    /// Japanese phonetic reading (hiragana)
    #[serde(rename = "ja_hiragana")]
    JaHiragana,
    /// English
    #[serde(rename = "en")]
    En,
}

impl LanguageTag {
    /// The four tags in script line order. Line index 0..3 of a dialogue
    /// group maps positionally onto this array.
    pub const ORDERED: [LanguageTag; 4] = [
        LanguageTag::Ko,
        LanguageTag::Ja,
        LanguageTag::JaHiragana,
        LanguageTag::En,
    ];

    /// Lowercase wire identifier, as used in the dialogue JSON document and
    /// in output filenames.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Ko => "ko",
            Self::Ja => "ja",
            Self::JaHiragana => "ja_hiragana",
            Self::En => "en",
        }
    }

    /// Human readable name for log output.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Ko => "Korean",
            Self::Ja => "Japanese",
            Self::JaHiragana => "Japanese (hiragana)",
            Self::En => "English",
        }
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for LanguageTag {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "ko" => Ok(Self::Ko),
            "ja" => Ok(Self::Ja),
            "ja_hiragana" | "ja-hiragana" => Ok(Self::JaHiragana),
            "en" => Ok(Self::En),
            _ => Err(anyhow!("Unknown language tag: {}", s)),
        }
    }
}
