/*!
 * Error types for the sbvgen application.
 *
 * This module contains custom error types for different parts of the
 * application, using the thiserror crate for ergonomic error definitions.
 *
 * The general policy follows the pipeline design: malformed items inside a
 * parse (bad dialogue group, odd timecode) degrade gracefully and never show
 * up here; these types cover the failures that abort a run, such as missing
 * input files or unreadable documents.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur while processing a dialogue script
#[derive(Error, Debug)]
pub enum ScriptError {
    /// The script text yielded no valid dialogue groups at all
    #[error("No valid dialogue groups found in script: {0}")]
    EmptyScript(String),

    /// The dialogue JSON document could not be deserialized
    #[error("Failed to parse dialogue document: {0}")]
    InvalidDocument(String),
}

/// Errors that can occur during timeline alignment
#[derive(Error, Debug)]
pub enum AlignmentError {
    /// The timeline export yielded no cues
    #[error("No timed cues found in timeline export: {0}")]
    EmptyTimeline(String),

    /// Error with the dialogue script side of the alignment
    #[error("Script error: {0}")]
    Script(#[from] ScriptError),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from dialogue script processing
    #[error("Script error: {0}")]
    Script(#[from] ScriptError),

    /// Error from timeline alignment
    #[error("Alignment error: {0}")]
    Alignment(#[from] AlignmentError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
