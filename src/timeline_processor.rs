use std::fmt;
use log::{warn, debug};
use serde::{Deserialize, Serialize};

// @module: Timeline export parsing and editor timecode conversion

/// Separator between the start and end tokens of a timecode marker line.
const TIME_RANGE_SEPARATOR: &str = " - ";

/// Frames per second assumed for the editor timecode's frame field.
///
/// The editor export carries `HH;MM;SS;FF` with `FF` a frame number; the
/// original pipeline hardcoded 30 fps, which stays the default here but can
/// be overridden through the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrameRate(pub u32);

impl FrameRate {
    pub const DEFAULT: FrameRate = FrameRate(30);

    pub fn fps(&self) -> u32 {
        self.0
    }
}

impl Default for FrameRate {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for FrameRate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} fps", self.0)
    }
}

/// Convert an editor timecode (`HH;MM;SS;FF`) to a subtitle timecode
/// (`H:MM:SS.mmm`), with milliseconds computed as `floor(frames / fps * 1000)`.
///
/// Malformed input (wrong field count or a non-integer field) is returned
/// unchanged rather than failing; callers must tolerate the pass-through.
pub fn convert_timecode(editor_timecode: &str, frame_rate: FrameRate) -> String {
    let parts: Vec<&str> = editor_timecode.split(';').collect();
    if parts.len() != 4 {
        return editor_timecode.to_string();
    }

    let fields: Option<Vec<u64>> = parts
        .iter()
        .map(|p| p.trim().parse::<u64>().ok())
        .collect();

    let Some(fields) = fields else {
        return editor_timecode.to_string();
    };

    let (hours, minutes, seconds, frames) = (fields[0], fields[1], fields[2], fields[3]);
    let milliseconds = frames * 1000 / u64::from(frame_rate.fps().max(1));

    format!("{}:{:02}:{:02}.{:03}", hours, minutes, seconds, milliseconds)
}

// @struct: One speaker text entry within a cue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CueText {
    // @field: Composite speaker identifier (track type + track number)
    pub speaker: String,

    // @field: Source-language text, consecutive lines joined with a space
    pub text: String,
}

// @struct: A timed span of the timeline with its spoken text entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineCue {
    // @field: Converted start timecode (subtitle format)
    pub start: String,

    // @field: Converted end timecode (subtitle format)
    pub end: String,

    // @field: Text entries between this marker and the next, in track order
    pub texts: Vec<CueText>,
}

/// Parser for the non-linear-editor timeline export format.
pub struct TimelineParser;

impl TimelineParser {
    /// Parse raw timeline export text into an ordered cue sequence.
    ///
    /// Lines are scanned with a single cursor. A timecode marker finalizes
    /// the in-progress cue (kept only if it collected text) and opens a new
    /// one. A speaker-tag line pulls in all following non-blank lines as one
    /// text entry, stopping at a blank line, another speaker tag, or another
    /// marker; the cursor jumps past the consumed lines. Everything else is
    /// inert.
    pub fn parse(raw_text: &str, frame_rate: FrameRate) -> Vec<TimelineCue> {
        let lines: Vec<&str> = raw_text.lines().collect();
        let mut cues: Vec<TimelineCue> = Vec::new();
        let mut current: Option<TimelineCue> = None;

        let mut i = 0;
        while i < lines.len() {
            let line = lines[i].trim();

            if let Some((start_token, end_token)) = Self::split_timecode_marker(line) {
                if let Some(cue) = current.take() {
                    if !cue.texts.is_empty() {
                        cues.push(cue);
                    } else {
                        debug!("Dropping cue without text entries ending at line {}", i + 1);
                    }
                }
                current = Some(TimelineCue {
                    start: convert_timecode(start_token, frame_rate),
                    end: convert_timecode(end_token, frame_rate),
                    texts: Vec::new(),
                });
                i += 1;
                continue;
            }

            if let Some(speaker) = Self::parse_speaker_tag(line) {
                // Collect the speaker's text block with local lookahead
                let mut text_lines: Vec<&str> = Vec::new();
                let mut j = i + 1;
                while j < lines.len() {
                    let next = lines[j].trim();
                    if next.is_empty()
                        || Self::parse_speaker_tag(next).is_some()
                        || Self::split_timecode_marker(next).is_some()
                    {
                        break;
                    }
                    text_lines.push(next);
                    j += 1;
                }

                if !text_lines.is_empty() {
                    match current.as_mut() {
                        Some(cue) => cue.texts.push(CueText {
                            speaker,
                            text: text_lines.join(" "),
                        }),
                        None => {
                            warn!("Ignoring text before the first timecode marker (line {})", i + 1)
                        }
                    }
                }

                i = j;
                continue;
            }

            i += 1;
        }

        // Finalize the trailing cue
        if let Some(cue) = current {
            if !cue.texts.is_empty() {
                cues.push(cue);
            }
        }

        cues
    }

    /// Recognize a timecode marker line and split it into its two time
    /// tokens. A marker must contain both the range separator and a `;`,
    /// and split into exactly two tokens.
    fn split_timecode_marker(line: &str) -> Option<(&str, &str)> {
        if !line.contains(TIME_RANGE_SEPARATOR) || !line.contains(';') {
            return None;
        }
        let mut tokens = line.split(TIME_RANGE_SEPARATOR);
        match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(start), Some(end), None) => Some((start.trim(), end.trim())),
            _ => None,
        }
    }

    /// Recognize a speaker-tag line (`V<type>, <number>`) and build the
    /// composite speaker identifier. The number defaults to `"1"` when
    /// absent.
    fn parse_speaker_tag(line: &str) -> Option<String> {
        if !line.starts_with('V') || !line.contains(',') {
            return None;
        }
        let (speaker_type, speaker_num) = match line.split_once(',') {
            Some((kind, num)) => {
                let num = num.trim();
                (kind.trim(), if num.is_empty() { "1" } else { num })
            }
            None => (line.trim(), "1"),
        };
        Some(format!("{}_{}", speaker_type, speaker_num))
    }
}
