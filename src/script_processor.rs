use std::collections::BTreeMap;
use std::fmt;
use anyhow::{Result, Context};
use log::{warn, debug};
use serde::{Deserialize, Serialize};
use crate::language_utils::LanguageTag;

// @module: Dialogue script parsing and the dialogue record document

/// Token separating the speaker name from the spoken text on a script line.
const SPEAKER_SEPARATOR: &str = " : ";

/// Number of consecutive script lines that make up one dialogue group, one
/// line per language variant.
const GROUP_LINES: usize = 4;

// @struct: One spoken line across the four language variants
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueRecord {
    // @field: Speaker identifier, taken from the first line of the group
    #[serde(rename = "character")]
    pub speaker: String,

    // @field: Language tag to text mapping, all four tags always present
    #[serde(rename = "lines")]
    pub variants: BTreeMap<LanguageTag, String>,
}

impl DialogueRecord {
    /// Text of the given language variant, if present.
    pub fn variant(&self, tag: LanguageTag) -> Option<&str> {
        self.variants.get(&tag).map(|s| s.as_str())
    }
}

impl fmt::Display for DialogueRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.speaker)?;
        for tag in LanguageTag::ORDERED {
            if let Some(text) = self.variant(tag) {
                writeln!(f, "  [{}] {}", tag, text)?;
            }
        }
        Ok(())
    }
}

/// The serialized dialogue record set: a count plus the ordered records.
/// This is the intermediate artifact written by the `script` step and read
/// back by the `align` step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogueDocument {
    /// Number of records in `dialogues`
    pub total_dialogues: usize,

    /// Parsed records, in script order
    pub dialogues: Vec<DialogueRecord>,
}

impl DialogueDocument {
    /// Wrap an ordered record sequence into a document.
    pub fn from_records(records: Vec<DialogueRecord>) -> Self {
        DialogueDocument {
            total_dialogues: records.len(),
            dialogues: records,
        }
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .context("Failed to serialize dialogue document to JSON")
    }

    /// Deserialize a document from JSON text.
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .context("Failed to parse dialogue document JSON")
    }

    /// Records per speaker, sorted by speaker name. Used for the post-parse
    /// summary.
    pub fn speaker_tally(&self) -> BTreeMap<&str, usize> {
        let mut tally: BTreeMap<&str, usize> = BTreeMap::new();
        for record in &self.dialogues {
            *tally.entry(record.speaker.as_str()).or_insert(0) += 1;
        }
        tally
    }
}

// @struct: Parser for the flat-text dialogue script format
pub struct DialogueScriptParser;

impl DialogueScriptParser {
    /// Parse raw dialogue script text into an ordered record sequence.
    ///
    /// The script is a sequence of 4-line groups separated by blank lines.
    /// A line containing `" : "` opens a group; the next four raw lines
    /// (including that one) are consumed as one group. Groups that do not
    /// yield a speaker and all four variants are dropped silently, and the
    /// cursor advances by a single line so a later well-formed group can
    /// still be picked up. Parsing is best-effort by design: a malformed or
    /// short trailing group never aborts the run.
    pub fn parse(raw_text: &str) -> Vec<DialogueRecord> {
        let lines: Vec<&str> = raw_text.lines().collect();
        let mut records = Vec::new();

        let mut i = 0;
        while i < lines.len() {
            let trimmed = lines[i].trim();

            // Blank lines are skip markers between groups
            if trimmed.is_empty() {
                i += 1;
                continue;
            }

            if trimmed.contains(SPEAKER_SEPARATOR) {
                let end = (i + GROUP_LINES).min(lines.len());
                match Self::parse_group(&lines[i..end]) {
                    Some(record) => {
                        records.push(record);
                        i += GROUP_LINES;
                    }
                    None => {
                        debug!("Dropping malformed dialogue group at line {}", i + 1);
                        i += 1;
                    }
                }
            } else {
                i += 1;
            }
        }

        if records.is_empty() {
            warn!("No valid dialogue groups found in script text");
        }

        records
    }

    /// Parse one 4-line group into a record.
    ///
    /// Line index 0..3 maps positionally onto the fixed language tag order.
    /// Lines carrying the speaker separator contribute the text after it;
    /// lines without one contribute their whole trimmed content, which keeps
    /// continuation lines without a repeated speaker prefix working. The
    /// speaker is taken only from line 0. Returns `None` unless all four
    /// variants are populated and the speaker is non-empty.
    fn parse_group(lines: &[&str]) -> Option<DialogueRecord> {
        if lines.len() < GROUP_LINES {
            return None;
        }

        let mut speaker: Option<String> = None;
        let mut variants: BTreeMap<LanguageTag, String> = BTreeMap::new();

        for (idx, raw_line) in lines.iter().take(GROUP_LINES).enumerate() {
            let line = raw_line.trim();
            if line.is_empty() {
                continue;
            }

            let tag = LanguageTag::ORDERED[idx];
            match line.split_once(SPEAKER_SEPARATOR) {
                Some((name, text)) => {
                    if idx == 0 {
                        speaker = Some(name.trim().to_string());
                    }
                    variants.insert(tag, text.trim().to_string());
                }
                None => {
                    // Continuation line without a speaker prefix
                    variants.insert(tag, line.to_string());
                }
            }
        }

        match speaker {
            Some(name) if !name.is_empty() && variants.len() == GROUP_LINES => {
                Some(DialogueRecord { speaker: name, variants })
            }
            _ => None,
        }
    }
}
