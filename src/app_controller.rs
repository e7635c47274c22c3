use anyhow::{Result, Context, anyhow};
use log::{warn, info, debug};
use std::path::{Path, PathBuf};
use std::time::Duration;
use indicatif::{ProgressBar, ProgressStyle};
use crate::alignment::{self, DialogueIndex, RenderStats};
use crate::app_config::Config;
use crate::errors::{ScriptError, AlignmentError};
use crate::file_utils::FileManager;
use crate::script_processor::{DialogueDocument, DialogueRecord, DialogueScriptParser};
use crate::timeline_processor::{TimelineCue, TimelineParser};

// @module: Application controller for the script-to-subtitle pipeline

/// Main application controller.
///
/// Wires the two core components together: the dialogue script parser
/// producing the record set, and the timeline aligner consuming it plus a
/// timeline export to emit per-language SBV files. All path handling lives
/// here; the core components only see text in and text out.
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Parse a dialogue script file and write the dialogue JSON document.
    ///
    /// Returns the path of the written document.
    pub fn run_script(&self, script_file: &Path, output_dir: &Path) -> Result<PathBuf> {
        let start_time = std::time::Instant::now();

        let raw_text = FileManager::read_to_string(script_file)?;
        let records = DialogueScriptParser::parse(&raw_text);

        if records.is_empty() {
            return Err(ScriptError::EmptyScript(script_file.display().to_string()).into());
        }

        let document = DialogueDocument::from_records(records);

        FileManager::ensure_dir(output_dir)?;
        let output_path = FileManager::dialogue_document_path(script_file, output_dir);
        FileManager::write_to_file(&output_path, &document.to_json_pretty()?)?;

        info!(
            "Parsed {} dialogue groups from {:?} in {}",
            document.total_dialogues,
            script_file,
            Self::format_duration(start_time.elapsed())
        );
        for (speaker, count) in document.speaker_tally() {
            debug!("  {}: {} groups", speaker, count);
        }
        info!("Dialogue document written to {:?}", output_path);

        Ok(output_path)
    }

    /// Align a timeline export against a previously written dialogue
    /// document and write one SBV file per configured output language.
    ///
    /// `dialogue_path` may be the document file itself or a directory to
    /// search for one. Returns the written subtitle paths.
    pub fn run_align(
        &self,
        timeline_file: &Path,
        dialogue_path: &Path,
        output_dir: &Path,
    ) -> Result<Vec<PathBuf>> {
        let document = self.load_dialogue_document(dialogue_path)?;
        info!("Loaded {} dialogue records", document.total_dialogues);

        self.align_records(timeline_file, &document.dialogues, output_dir)
    }

    /// Run the whole pipeline: parse the script, write the dialogue
    /// document, then align the timeline export and write the subtitle
    /// files.
    pub fn run_all(
        &self,
        script_file: &Path,
        timeline_file: &Path,
        output_dir: &Path,
    ) -> Result<Vec<PathBuf>> {
        let document_path = self.run_script(script_file, output_dir)?;

        // Reload through the document to keep the two steps decoupled; the
        // align step must work from the serialized artifact alone.
        let document = self.load_dialogue_document(&document_path)?;
        self.align_records(timeline_file, &document.dialogues, output_dir)
    }

    /// Shared alignment path: parse the timeline, build the index, render
    /// and write every configured language.
    fn align_records(
        &self,
        timeline_file: &Path,
        records: &[DialogueRecord],
        output_dir: &Path,
    ) -> Result<Vec<PathBuf>> {
        let start_time = std::time::Instant::now();

        let raw_text = FileManager::read_to_string(timeline_file)?;
        let cues = TimelineParser::parse(&raw_text, self.config.frame_rate);

        if cues.is_empty() {
            return Err(AlignmentError::EmptyTimeline(timeline_file.display().to_string()).into());
        }
        info!("Parsed {} timed cues at {}", cues.len(), self.config.frame_rate);

        let index = DialogueIndex::build(records, self.config.source_language);
        if index.is_empty() {
            warn!(
                "Dialogue index is empty: no record carries a {} variant",
                self.config.source_language.display_name()
            );
        }

        FileManager::ensure_dir(output_dir)?;

        let progress = ProgressBar::new(self.config.output_languages.len() as u64);
        progress.set_style(
            ProgressStyle::with_template("{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );

        let mut written = Vec::new();
        let mut all_stats: Vec<RenderStats> = Vec::new();

        for language in &self.config.output_languages {
            progress.set_message(language.display_name());
            let (content, stats) = alignment::render_language(&cues, &index, *language);

            let output_path =
                FileManager::subtitle_output_path(timeline_file, output_dir, *language);
            FileManager::write_to_file(&output_path, &content)?;

            debug!("Subtitle file written to {:?}", output_path);
            written.push(output_path);
            all_stats.push(stats);
            progress.inc(1);
        }
        progress.finish_and_clear();

        self.log_summary(&cues, &all_stats, start_time.elapsed());

        Ok(written)
    }

    /// Load a dialogue document from a file, or locate one under a
    /// directory (`*_dialogues.json`, first in path order).
    fn load_dialogue_document(&self, dialogue_path: &Path) -> Result<DialogueDocument> {
        let document_file = if dialogue_path.is_dir() {
            FileManager::find_dialogue_documents(dialogue_path)?
                .into_iter()
                .next()
                .ok_or_else(|| {
                    anyhow!("No dialogue document (*_dialogues.json) found in {:?}", dialogue_path)
                })?
        } else {
            dialogue_path.to_path_buf()
        };

        let content = FileManager::read_to_string(&document_file)?;
        let document = DialogueDocument::from_json_str(&content)
            .with_context(|| format!("Invalid dialogue document: {:?}", document_file))?;

        Ok(document)
    }

    /// Log the per-language match/miss summary after rendering.
    fn log_summary(&self, cues: &[TimelineCue], stats: &[RenderStats], elapsed: Duration) {
        let text_entries: usize = cues.iter().map(|c| c.texts.len()).sum();
        info!(
            "Rendered {} cues ({} text entries) for {} language(s) in {}",
            cues.len(),
            text_entries,
            stats.len(),
            Self::format_duration(elapsed)
        );
        for s in stats {
            if s.missed > 0 {
                warn!(
                    "  {}: {} matched, {} missed",
                    s.language.display_name(),
                    s.matched,
                    s.missed
                );
            } else {
                info!("  {}: {} matched", s.language.display_name(), s.matched);
            }
        }
    }

    /// Format a duration for log output.
    fn format_duration(duration: Duration) -> String {
        let total_ms = duration.as_millis();
        if total_ms < 1000 {
            format!("{}ms", total_ms)
        } else {
            format!("{:.2}s", duration.as_secs_f64())
        }
    }
}
