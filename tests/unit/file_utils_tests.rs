/*!
 * Tests for file system utilities
 */

use std::path::PathBuf;
use anyhow::Result;
use sbvgen::file_utils::FileManager;
use sbvgen::language_utils::LanguageTag;
use crate::common;

/// Dialogue document paths derive from the script file stem
#[test]
fn test_dialogue_document_path_withScriptFile_shouldAppendSuffix() {
    let path = FileManager::dialogue_document_path(
        PathBuf::from("input/episode1.txt"),
        PathBuf::from("output"),
    );

    assert_eq!(path, PathBuf::from("output/episode1_dialogues.json"));
}

/// Subtitle output paths carry the timeline stem and the language code
#[test]
fn test_subtitle_output_path_withTimelineFile_shouldEmbedLanguage() {
    let path = FileManager::subtitle_output_path(
        PathBuf::from("input/ep1_sequence.txt"),
        PathBuf::from("output"),
        LanguageTag::Ko,
    );

    assert_eq!(path, PathBuf::from("output/ep1_sequence_captions_ko.sbv"));

    let path = FileManager::subtitle_output_path(
        PathBuf::from("ep1_sequence.txt"),
        PathBuf::from("output"),
        LanguageTag::JaHiragana,
    );

    assert_eq!(
        path,
        PathBuf::from("output/ep1_sequence_captions_ja_hiragana.sbv")
    );
}

/// Write then read round-trips through the file system
#[test]
fn test_write_and_read_withNestedPath_shouldRoundTrip() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("nested/dir/test.txt");

    FileManager::write_to_file(&path, "대사 텍스트\n")?;
    assert!(FileManager::file_exists(&path));

    let content = FileManager::read_to_string(&path)?;
    assert_eq!(content, "대사 텍스트\n");

    Ok(())
}

/// Reading a missing file is an error, not a silent fallback
#[test]
fn test_read_to_string_withMissingFile_shouldFail() {
    let result = FileManager::read_to_string("does/not/exist.txt");
    assert!(result.is_err());
}

/// Dialogue document discovery only picks up the `*_dialogues.json` suffix
#[test]
fn test_find_dialogue_documents_withMixedFiles_shouldFilterBySuffix() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();

    common::create_test_file(&dir, "ep2_dialogues.json", "{}")?;
    common::create_test_file(&dir, "ep1_dialogues.json", "{}")?;
    common::create_test_file(&dir, "other.json", "{}")?;
    common::create_test_file(&dir, "notes.txt", "")?;

    let found = FileManager::find_dialogue_documents(&dir)?;

    assert_eq!(found.len(), 2);
    // Sorted by path for a deterministic pick
    assert!(found[0].ends_with("ep1_dialogues.json"));
    assert!(found[1].ends_with("ep2_dialogues.json"));

    Ok(())
}

/// ensure_dir creates missing directory chains and tolerates existing ones
#[test]
fn test_ensure_dir_withMissingChain_shouldCreate() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().join("a/b/c");

    FileManager::ensure_dir(&dir)?;
    assert!(FileManager::dir_exists(&dir));

    // Second call is a no-op
    FileManager::ensure_dir(&dir)?;

    Ok(())
}
