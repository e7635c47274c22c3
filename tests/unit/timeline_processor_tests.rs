/*!
 * Tests for timeline export parsing and timecode conversion
 */

use sbvgen::timeline_processor::{FrameRate, TimelineParser, convert_timecode};
use crate::common;

/// Editor timecodes convert to SBV format at the default 30 fps
#[test]
fn test_convert_timecode_withValidTimecode_shouldConvert() {
    let fps = FrameRate::default();

    // floor(17 / 30 * 1000) = 566
    assert_eq!(convert_timecode("00;00;24;17", fps), "0:00:24.566");
    // floor(15 / 30 * 1000) = 500
    assert_eq!(convert_timecode("00;01;05;15", fps), "0:01:05.500");
    assert_eq!(convert_timecode("01;02;03;00", fps), "1:02:03.000");
    // Hours are unpadded, minutes/seconds zero-padded
    assert_eq!(convert_timecode("12;00;09;29", fps), "12:00:09.966");
}

/// Malformed timecodes pass through unchanged
#[test]
fn test_convert_timecode_withMalformedInput_shouldPassThrough() {
    let fps = FrameRate::default();

    assert_eq!(convert_timecode("00;00;24", fps), "00;00;24");
    assert_eq!(convert_timecode("00;00;24;17;01", fps), "00;00;24;17;01");
    assert_eq!(convert_timecode("aa;bb;cc;dd", fps), "aa;bb;cc;dd");
    assert_eq!(convert_timecode("", fps), "");
}

/// The frame field scales with the configured frame rate
#[test]
fn test_convert_timecode_withCustomFrameRate_shouldScaleFrames() {
    assert_eq!(convert_timecode("00;00;01;05", FrameRate(25)), "0:00:01.200");
    assert_eq!(convert_timecode("00;00;01;12", FrameRate(24)), "0:00:01.500");
}

/// Markers and speaker tags build cues in scan order
#[test]
fn test_parse_withMarkersAndSpeakerTags_shouldBuildCues() {
    let cues = TimelineParser::parse(common::sample_timeline(), FrameRate::default());

    assert_eq!(cues.len(), 1);
    assert_eq!(cues[0].start, "0:00:24.566");
    assert_eq!(cues[0].end, "0:00:29.500");
    assert_eq!(cues[0].texts.len(), 2);
    assert_eq!(cues[0].texts[0].speaker, "V5_1");
    assert_eq!(
        cues[0].texts[0].text,
        "こんにちは。今回、m9devの代理を務めるアロナです。"
    );
    assert_eq!(cues[0].texts[1].speaker, "V5_2");
}

/// Consecutive text lines under one speaker tag join with a single space
#[test]
fn test_parse_withMultilineText_shouldJoinWithSpace() {
    let timeline = "00;00;00;00 - 00;00;05;00\n\
                    V5, 1\n\
                    first half\n\
                    second half\n";

    let cues = TimelineParser::parse(timeline, FrameRate::default());

    assert_eq!(cues.len(), 1);
    assert_eq!(cues[0].texts[0].text, "first half second half");
}

/// A new marker finalizes the in-progress cue; cues without any text are
/// dropped
#[test]
fn test_parse_withCueWithoutTexts_shouldDropCue() {
    let timeline = "00;00;00;00 - 00;00;05;00\n\
                    \n\
                    00;00;05;00 - 00;00;10;00\n\
                    V5, 1\n\
                    spoken text\n";

    let cues = TimelineParser::parse(timeline, FrameRate::default());

    assert_eq!(cues.len(), 1);
    assert_eq!(cues[0].start, "0:00:05.000");
}

/// Text before the first timecode marker is ignored
#[test]
fn test_parse_withTextBeforeFirstMarker_shouldIgnoreIt() {
    let timeline = "V5, 1\n\
                    orphan text\n\
                    \n\
                    00;00;00;00 - 00;00;05;00\n\
                    V5, 1\n\
                    kept text\n";

    let cues = TimelineParser::parse(timeline, FrameRate::default());

    assert_eq!(cues.len(), 1);
    assert_eq!(cues[0].texts.len(), 1);
    assert_eq!(cues[0].texts[0].text, "kept text");
}

/// A missing speaker number defaults to "1"
#[test]
fn test_parse_withMissingSpeakerNumber_shouldDefaultToOne() {
    let timeline = "00;00;00;00 - 00;00;05;00\n\
                    V7,\n\
                    ver 0.7.0 out!\n";

    let cues = TimelineParser::parse(timeline, FrameRate::default());

    assert_eq!(cues.len(), 1);
    assert_eq!(cues[0].texts[0].speaker, "V7_1");
}

/// Lines matching neither pattern are inert and do not disturb the scan
#[test]
fn test_parse_withInertLines_shouldAdvancePastThem() {
    let timeline = "Sequence: episode 1\n\
                    00;00;00;00 - 00;00;05;00\n\
                    (note to editor)\n\
                    V5, 1\n\
                    actual line\n";

    let cues = TimelineParser::parse(timeline, FrameRate::default());

    assert_eq!(cues.len(), 1);
    assert_eq!(cues[0].texts.len(), 1);
    assert_eq!(cues[0].texts[0].text, "actual line");
}

/// The trailing in-progress cue is finalized at end of input
#[test]
fn test_parse_withTrailingCue_shouldFinalizeAtEof() {
    let timeline = "00;00;00;00 - 00;00;05;00\n\
                    V5, 1\n\
                    first cue\n\
                    \n\
                    00;00;05;00 - 00;00;10;00\n\
                    V5, 2\n\
                    last cue without trailing blank";

    let cues = TimelineParser::parse(timeline, FrameRate::default());

    assert_eq!(cues.len(), 2);
    assert_eq!(cues[1].texts[0].text, "last cue without trailing blank");
}
