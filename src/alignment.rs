use std::collections::BTreeMap;
use once_cell::sync::Lazy;
use regex::Regex;
use log::{warn, debug};
use crate::language_utils::LanguageTag;
use crate::script_processor::DialogueRecord;
use crate::timeline_processor::TimelineCue;

// @module: Dialogue indexing, cue-to-record matching and SBV rendering

// @const: Whitespace run regex used for text normalization
static WHITESPACE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s+").unwrap()
});

/// Number of leading normalized characters of a query used by the fallback
/// substring match.
const FALLBACK_PREFIX_CHARS: usize = 50;

/// Number of characters of unmatched source text carried in the placeholder
/// marker.
const PLACEHOLDER_SNIPPET_CHARS: usize = 30;

/// Strip all whitespace from a text. Applied to both index keys and queries
/// before any equality or substring comparison; idempotent.
pub fn normalize(text: &str) -> String {
    WHITESPACE_REGEX.replace_all(text, "").into_owned()
}

/// Read-only lookup structure from normalized source-language text to the
/// matching dialogue record.
///
/// Built once from the full record sequence, which it borrows and never
/// mutates. Records whose normalized source text collides overwrite earlier
/// entries (last-write-wins, no error raised).
pub struct DialogueIndex<'a> {
    records: &'a [DialogueRecord],
    source_language: LanguageTag,
    index: BTreeMap<String, usize>,
}

impl<'a> DialogueIndex<'a> {
    /// Build the index over the source-language variant of every record.
    pub fn build(records: &'a [DialogueRecord], source_language: LanguageTag) -> Self {
        let mut index = BTreeMap::new();
        for (pos, record) in records.iter().enumerate() {
            if let Some(text) = record.variant(source_language) {
                let key = normalize(text);
                if index.insert(key, pos).is_some() {
                    debug!("Duplicate normalized source text at record {}, keeping the later one", pos);
                }
            }
        }
        DialogueIndex {
            records,
            source_language,
            index,
        }
    }

    /// Source language the index keys were taken from.
    pub fn source_language(&self) -> LanguageTag {
        self.source_language
    }

    /// Number of distinct normalized keys.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Locate the dialogue record matching a cue's source-language text.
    ///
    /// Tries an exact lookup on the normalized text first. Failing that,
    /// falls back to a substring scan: a key is a candidate when it contains
    /// the first 50 normalized characters of the query, or the query
    /// contains the key. Among candidates the one sharing the longest
    /// common prefix with the query wins, with remaining ties broken by
    /// lexicographic key order, so the result is deterministic.
    ///
    /// Returns `None` when nothing matches; absence is not an error.
    pub fn find_match(&self, source_text: &str) -> Option<&'a DialogueRecord> {
        let normalized = normalize(source_text);

        if let Some(&pos) = self.index.get(&normalized) {
            return Some(&self.records[pos]);
        }

        let prefix: String = normalized.chars().take(FALLBACK_PREFIX_CHARS).collect();

        let mut best: Option<(usize, &str, usize)> = None;
        for (key, &pos) in &self.index {
            if !key.contains(prefix.as_str()) && !normalized.contains(key.as_str()) {
                continue;
            }
            let shared = common_prefix_chars(&normalized, key);
            // BTreeMap iterates keys in lexicographic order, so a strictly
            // greater score is required to displace an earlier candidate.
            let displaces = match best {
                Some((best_shared, _, _)) => shared > best_shared,
                None => true,
            };
            if displaces {
                best = Some((shared, key, pos));
            }
        }

        best.map(|(_, _, pos)| &self.records[pos])
    }
}

/// Length in characters of the common prefix of two strings.
fn common_prefix_chars(a: &str, b: &str) -> usize {
    a.chars()
        .zip(b.chars())
        .take_while(|(x, y)| x == y)
        .count()
}

/// Per-language outcome counters for one rendering pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderStats {
    /// Language the pass rendered
    pub language: LanguageTag,

    /// Cue text entries that resolved to a dialogue record
    pub matched: usize,

    /// Cue text entries with no matching record
    pub missed: usize,
}

/// Render the SBV text block for one target language.
///
/// Every cue contributes its `start,end` timecode line, one caption line
/// per text entry, and a blank separator line. A text entry that matches a
/// dialogue record emits that record's requested language variant (or
/// nothing if the tag is unexpectedly absent). An unmatched entry falls
/// back to the raw source text when the requested language is the index's
/// source language, and to a placeholder marker with a truncated snippet
/// otherwise; either way the miss counter increments. Rendering never
/// aborts the run.
pub fn render_language(
    cues: &[TimelineCue],
    index: &DialogueIndex,
    language: LanguageTag,
) -> (String, RenderStats) {
    let mut stats = RenderStats {
        language,
        matched: 0,
        missed: 0,
    };
    let mut sbv_lines: Vec<String> = Vec::new();

    for cue in cues {
        sbv_lines.push(format!("{},{}", cue.start, cue.end));

        let mut caption_texts: Vec<String> = Vec::new();
        for entry in &cue.texts {
            match index.find_match(&entry.text) {
                Some(record) => {
                    stats.matched += 1;
                    if let Some(text) = record.variant(language) {
                        caption_texts.push(text.to_string());
                    }
                }
                None => {
                    stats.missed += 1;
                    if language == index.source_language() {
                        caption_texts.push(entry.text.clone());
                    } else {
                        let snippet: String =
                            entry.text.chars().take(PLACEHOLDER_SNIPPET_CHARS).collect();
                        caption_texts.push(format!("[no translation: {}...]", snippet));
                    }
                }
            }
        }

        sbv_lines.push(caption_texts.join("\n"));
        sbv_lines.push(String::new());
    }

    if stats.missed > 0 {
        warn!(
            "{} cue text entries had no matching dialogue for {}",
            stats.missed,
            language.display_name()
        );
    }

    (sbv_lines.join("\n"), stats)
}
