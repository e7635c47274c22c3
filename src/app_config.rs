use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use crate::language_utils::LanguageTag;
use crate::timeline_processor::FrameRate;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Language the timeline export's spoken text is written in; alignment
    /// keys are taken from this variant of each dialogue record
    #[serde(default = "default_source_language")]
    pub source_language: LanguageTag,

    /// Languages to render subtitle files for, one output file per tag
    #[serde(default = "default_output_languages")]
    pub output_languages: Vec<LanguageTag>,

    /// Frames per second assumed for the editor timecode frame field
    #[serde(default)]
    pub frame_rate: FrameRate,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log level for the application
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_source_language() -> LanguageTag {
    LanguageTag::Ja
}

fn default_output_languages() -> Vec<LanguageTag> {
    vec![LanguageTag::Ko, LanguageTag::En, LanguageTag::Ja]
}

impl Config {
    /// Validate the configuration after loading and CLI overrides.
    pub fn validate(&self) -> Result<()> {
        if self.frame_rate.fps() == 0 {
            return Err(anyhow!("Frame rate must be greater than zero"));
        }

        if self.output_languages.is_empty() {
            return Err(anyhow!("At least one output language is required"));
        }

        let mut seen = Vec::with_capacity(self.output_languages.len());
        for tag in &self.output_languages {
            if seen.contains(tag) {
                return Err(anyhow!("Duplicate output language: {}", tag));
            }
            seen.push(*tag);
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Self {
            source_language: default_source_language(),
            output_languages: default_output_languages(),
            frame_rate: FrameRate::default(),
            log_level: LogLevel::default(),
        }
    }
}
