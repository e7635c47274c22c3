// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, Context};
use log::{warn, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::path::{Path, PathBuf};
use std::io::Write;
use std::fs::File;
use std::io::BufReader;
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use crate::app_config::Config;
use crate::language_utils::LanguageTag;
use crate::timeline_processor::FrameRate;
use app_controller::Controller;

mod app_config;
mod script_processor;
mod timeline_processor;
mod alignment;
mod file_utils;
mod app_controller;
mod language_utils;
mod errors;

/// CLI Wrapper for LanguageTag to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLanguage {
    Ko,
    Ja,
    JaHiragana,
    En,
}

impl From<CliLanguage> for LanguageTag {
    fn from(cli_language: CliLanguage) -> Self {
        match cli_language {
            CliLanguage::Ko => LanguageTag::Ko,
            CliLanguage::Ja => LanguageTag::Ja,
            CliLanguage::JaHiragana => LanguageTag::JaHiragana,
            CliLanguage::En => LanguageTag::En,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse a dialogue script into a dialogue JSON document
    Script {
        /// Dialogue script text file
        #[arg(value_name = "SCRIPT_FILE")]
        script_file: PathBuf,
    },

    /// Align a timeline export against a dialogue document and write SBV files
    Align {
        /// Timeline export text file
        #[arg(value_name = "TIMELINE_FILE")]
        timeline_file: PathBuf,

        /// Dialogue JSON document, or a directory to search for one
        #[arg(short, long, default_value = "output")]
        dialogues: PathBuf,
    },

    /// Run the whole pipeline: script parsing, alignment, SBV output
    Run {
        /// Dialogue script text file
        #[arg(value_name = "SCRIPT_FILE")]
        script_file: PathBuf,

        /// Timeline export text file
        #[arg(value_name = "TIMELINE_FILE")]
        timeline_file: PathBuf,
    },

    /// Generate shell completions for sbvgen
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// sbvgen - multilingual dialogue scripts + editor timelines to SBV subtitles
///
/// Parses a dialogue script carrying four language variants per spoken line,
/// aligns a video editor's timecoded cue list against it, and writes one SBV
/// subtitle file per target language.
#[derive(Parser, Debug)]
#[command(name = "sbvgen")]
#[command(version = "1.0.0")]
#[command(about = "Dialogue script and timeline to SBV subtitle converter")]
#[command(long_about = "sbvgen converts authored multilingual dialogue scripts and video-editor
timeline exports into per-language SBV subtitle files.

EXAMPLES:
    sbvgen script dialogue.txt                  # Parse script to output/dialogue_dialogues.json
    sbvgen align sequence.txt                   # Align using a document found under output/
    sbvgen align -d out/ep1_dialogues.json sequence.txt
    sbvgen run dialogue.txt sequence.txt        # Whole pipeline in one go
    sbvgen -L ko -L en run dialogue.txt sequence.txt
    sbvgen --frame-rate 24 align sequence.txt   # Non-default editor frame rate
    sbvgen completions bash > sbvgen.bash       # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a
    different config file with --config. If the config file doesn't exist, a
    default one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Output directory for generated files
    #[arg(short, long, default_value = "output")]
    output_dir: PathBuf,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Source language of the timeline export's spoken text
    #[arg(short, long, value_enum)]
    source_language: Option<CliLanguage>,

    /// Output language (repeatable), overrides the configured set
    #[arg(short = 'L', long = "language", value_enum)]
    languages: Vec<CliLanguage>,

    /// Editor timecode frame rate
    #[arg(long)]
    frame_rate: Option<u32>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:5} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "sbvgen", &mut std::io::stdout());
        return Ok(());
    }

    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &cli.log_level {
        log::set_max_level(level_filter_for(&cmd_log_level.clone().into()));
    }

    let config = load_config(&cli)?;

    // If log level was not set via command line, update it from config now
    if cli.log_level.is_none() {
        log::set_max_level(level_filter_for(&config.log_level));
    }

    let controller = Controller::with_config(config)?;

    match &cli.command {
        Commands::Script { script_file } => {
            controller.run_script(script_file, &cli.output_dir)?;
        }
        Commands::Align { timeline_file, dialogues } => {
            controller.run_align(timeline_file, dialogues, &cli.output_dir)?;
        }
        Commands::Run { script_file, timeline_file } => {
            controller.run_all(script_file, timeline_file, &cli.output_dir)?;
        }
        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}

/// Load the configuration file, creating a default one when absent, and
/// apply command line overrides.
fn load_config(cli: &CommandLineOptions) -> Result<Config> {
    let config_path = &cli.config_path;
    let mut config = if Path::new(config_path).exists() {
        // Load existing configuration
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?
    } else {
        // Create default configuration if not exists
        warn!("Config file not found at '{}', creating default config.", config_path);

        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    // Override config with CLI options if provided
    if let Some(source_language) = &cli.source_language {
        config.source_language = source_language.clone().into();
    }

    if !cli.languages.is_empty() {
        config.output_languages = cli.languages.iter().map(|l| l.clone().into()).collect();
    }

    if let Some(fps) = cli.frame_rate {
        config.frame_rate = FrameRate(fps);
    }

    if let Some(log_level) = &cli.log_level {
        config.log_level = log_level.clone().into();
    }

    Ok(config)
}

fn level_filter_for(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}
