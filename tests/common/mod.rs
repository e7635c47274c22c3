/*!
 * Common test utilities for the sbvgen test suite
 */

use std::path::PathBuf;
use std::fs;
use anyhow::Result;
use tempfile::TempDir;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &PathBuf, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// A well-formed dialogue script with two 4-line groups for two speakers
pub fn sample_script() -> &'static str {
    "arona : 안녕하세요. 이번에 m9dev의 대리를 맡은 아로나입니다.\n\
     arona : こんにちは。今回、m9devの代理を務めるアロナです。\n\
     arona : こんにちは。こんかい、えむきゅうでぶのだいりをつとめるあろなです。\n\
     arona : Hello. I'm Arona, representing m9dev this time.\n\
     \n\
     plana : 안녕하십니까. 아로나 선배의 파트너 역할을 맡은 AI 프라나입니다.\n\
     plana : はじめまして。アロナ先輩のパートナーを担当するAI、プラナです。\n\
     plana : はじめまして。あろなせんぱいのぱーとなーをたんとうするえーあい、ぷらなです。\n\
     plana : Nice to meet you. I'm Plana, the AI partner working with Arona-senpai.\n"
}

/// A timeline export with one timecode marker and two speaker-tag blocks
/// whose Japanese text matches the two records of `sample_script`
pub fn sample_timeline() -> &'static str {
    "00;00;24;17 - 00;00;29;15\n\
     V5, 1\n\
     こんにちは。今回、m9devの代理を務めるアロナです。\n\
     V5, 2\n\
     はじめまして。アロナ先輩のパートナーを担当するAI、プラナです。\n"
}

/// Creates a sample dialogue script file for testing
pub fn create_test_script(dir: &PathBuf, filename: &str) -> Result<PathBuf> {
    create_test_file(dir, filename, sample_script())
}

/// Creates a sample timeline export file for testing
pub fn create_test_timeline(dir: &PathBuf, filename: &str) -> Result<PathBuf> {
    create_test_file(dir, filename, sample_timeline())
}
