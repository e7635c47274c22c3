use anyhow::{Result, Context};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use crate::language_utils::LanguageTag;

// @module: File and directory utilities

/// Filename suffix of serialized dialogue documents.
const DIALOGUE_DOCUMENT_SUFFIX: &str = "_dialogues.json";

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    /// Read a file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))
    }

    /// Write a string to a file
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;

        Ok(())
    }

    // @generates: Output path for the dialogue JSON document
    // @params: script_file, output_dir
    pub fn dialogue_document_path<P1: AsRef<Path>, P2: AsRef<Path>>(
        script_file: P1,
        output_dir: P2,
    ) -> PathBuf {
        let stem = script_file.as_ref().file_stem().unwrap_or_default();
        let filename = format!("{}{}", stem.to_string_lossy(), DIALOGUE_DOCUMENT_SUFFIX);
        output_dir.as_ref().join(filename)
    }

    // @generates: Output path for one language's subtitle file
    // @params: timeline_file, output_dir, language
    pub fn subtitle_output_path<P1: AsRef<Path>, P2: AsRef<Path>>(
        timeline_file: P1,
        output_dir: P2,
        language: LanguageTag,
    ) -> PathBuf {
        let stem = timeline_file.as_ref().file_stem().unwrap_or_default();
        let filename = format!("{}_captions_{}.sbv", stem.to_string_lossy(), language.code());
        output_dir.as_ref().join(filename)
    }

    /// Find files with a specific extension in a directory
    pub fn find_files<P: AsRef<Path>>(dir: P, extension: &str) -> Result<Vec<PathBuf>> {
        let mut result = Vec::new();
        let normalized_ext = extension.trim_start_matches('.');

        for entry in WalkDir::new(dir.as_ref()).follow_links(true) {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            if path.is_file() {
                if let Some(ext) = path.extension() {
                    if ext.to_string_lossy().eq_ignore_ascii_case(normalized_ext) {
                        result.push(path.to_path_buf());
                    }
                }
            }
        }

        Ok(result)
    }

    /// Find serialized dialogue documents (`*_dialogues.json`) under a
    /// directory, sorted by path for a deterministic pick.
    pub fn find_dialogue_documents<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
        let mut result: Vec<PathBuf> = Self::find_files(dir, "json")?
            .into_iter()
            .filter(|p| {
                p.file_name()
                    .map(|n| n.to_string_lossy().ends_with(DIALOGUE_DOCUMENT_SUFFIX))
                    .unwrap_or(false)
            })
            .collect();
        result.sort();
        Ok(result)
    }
}
