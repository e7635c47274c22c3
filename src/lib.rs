/*!
 * # sbvgen - dialogue script and timeline export to SBV subtitles
 *
 * A Rust library for converting authored multilingual dialogue scripts and
 * video-editor timeline exports into per-language SBV subtitle files.
 *
 * ## Features
 *
 * - Parse flat-text dialogue scripts with four language variants per line
 *   into a structured, serializable record set
 * - Parse non-linear-editor timeline exports into timed cues
 * - Convert editor timecodes (`HH;MM;SS;FF`) to SBV timecodes
 * - Align cue text to dialogue records with normalized exact and substring
 *   matching
 * - Render one SBV subtitle document per target language
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `script_processor`: Dialogue script parsing and the record document
 * - `timeline_processor`: Timeline export parsing and timecode conversion
 * - `alignment`: Dialogue indexing, matching and SBV rendering
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `language_utils`: The four fixed language tags
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod file_utils;
pub mod script_processor;
pub mod timeline_processor;
pub mod alignment;
pub mod app_controller;
pub mod language_utils;
pub mod errors;

// Re-export main types for easier usage
pub use app_config::Config;
pub use script_processor::{DialogueDocument, DialogueRecord, DialogueScriptParser};
pub use timeline_processor::{FrameRate, TimelineCue, TimelineParser, convert_timecode};
pub use alignment::{DialogueIndex, RenderStats, normalize, render_language};
pub use language_utils::LanguageTag;
pub use errors::{AppError, AlignmentError, ScriptError};
