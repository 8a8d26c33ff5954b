// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, warn};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::app_config::{Config, SheetStyle};
use app_controller::Controller;

mod app_config;
mod app_controller;
mod cloze;
mod errors;
mod file_utils;
mod font;
mod hangul;
mod render;
mod sentence;

/// CLI Wrapper for SheetStyle to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliSheetStyle {
    Workbook,
    Practice,
}

impl From<CliSheetStyle> for SheetStyle {
    fn from(cli_style: CliSheetStyle) -> Self {
        match cli_style {
            CliSheetStyle::Workbook => SheetStyle::Workbook,
            CliSheetStyle::Practice => SheetStyle::Practice,
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
    /// Generate a practice workbook PDF (default command)
    #[command(alias = "gen")]
    Generate(GenerateArgs),

    /// Generate shell completions for hangulbook
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// JSON themes file (defaults to the built-in sample theme)
    #[arg(value_name = "THEMES_FILE")]
    themes_file: Option<PathBuf>,

    /// Force overwrite of an existing output file
    #[arg(short, long)]
    force_overwrite: bool,

    /// Path to a Hangul-capable TrueType font (or a directory to scan)
    #[arg(long, env = "HANGUL_FONT_PATH")]
    font: Option<PathBuf>,

    /// Output PDF path
    #[arg(short, long)]
    output: Option<String>,

    /// Sheet style to render
    #[arg(short, long, value_enum)]
    style: Option<CliSheetStyle>,

    /// Configuration file path
    #[arg(short, long, default_value = "workbook.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// hangulbook - Hangul Practice Workbook Generator
///
/// Generates printable Hangul practice worksheets as a paginated PDF,
/// rendering glyphs with a user-supplied TrueType font.
#[derive(Parser, Debug)]
#[command(name = "hangulbook")]
#[command(version = "0.1.0")]
#[command(about = "Hangul practice workbook generator")]
#[command(long_about = "hangulbook lays out Hangul practice sentences on ruled worksheet pages
and writes a single print-ready PDF.

EXAMPLES:
    hangulbook                                  # Built-in sample theme, default config
    hangulbook themes.json                      # Render themes from a JSON file
    hangulbook -f themes.json                   # Force overwrite the existing output
    hangulbook -s practice themes.json          # Compact ruled-line sheet style
    hangulbook --font fonts/NotoSansKR.ttf      # Explicit font file
    hangulbook -o out/week3.pdf themes.json     # Custom output path
    hangulbook --log-level debug themes.json    # Verbose layout logging
    hangulbook completions bash > hangulbook.bash

FONTS:
    The font must be a TrueType file (glyf outlines) covering the Hangul
    Syllables block, e.g. Noto Sans KR (hinted TTF) or Malgun Gothic.
    Set it with --font, the HANGUL_FONT_PATH environment variable, or the
    font_path config value. A directory is scanned for the first usable
    .ttf file.

CONFIGURATION:
    Configuration is stored in workbook.json by default. You can specify a
    different config file with --config-path. If the config file doesn't
    exist, a default one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// JSON themes file (defaults to the built-in sample theme)
    #[arg(value_name = "THEMES_FILE")]
    themes_file: Option<PathBuf>,

    /// Force overwrite of an existing output file
    #[arg(short, long)]
    force_overwrite: bool,

    /// Path to a Hangul-capable TrueType font (or a directory to scan)
    #[arg(long, env = "HANGUL_FONT_PATH")]
    font: Option<PathBuf>,

    /// Output PDF path
    #[arg(short, long)]
    output: Option<String>,

    /// Sheet style to render
    #[arg(short, long, value_enum)]
    style: Option<CliSheetStyle>,

    /// Configuration file path
    #[arg(short, long, default_value = "workbook.json")]
    config_path: String,

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

    // @returns: Emoji for log level
    fn get_emoji_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "❌ ",
            Level::Warn => "🚧 ",
            Level::Info => " ",
            Level::Debug => "🔍 ",
            Level::Trace => "📋 ",
        }
    }

    // @returns: ANSI color code for log level
    fn get_color_for_level(level: Level) -> &'static str {
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
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let emoji = Self::get_emoji_for_level(record.level());
            let color = Self::get_color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {} {}\x1B[0m",
                color,
                now,
                emoji,
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

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "hangulbook", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Generate(args)) => run_generate(args),
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let generate_args = GenerateArgs {
                themes_file: cli.themes_file,
                force_overwrite: cli.force_overwrite,
                font: cli.font,
                output: cli.output,
                style: cli.style,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_generate(generate_args)
        }
    }
}

fn run_generate(options: GenerateArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(to_level_filter(&config_log_level));
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let config = if Path::new(config_path).exists() {
        // Load existing configuration
        let content = file_utils::FileManager::read_to_string(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let mut config: Config = serde_json::from_str(&content)
            .context(format!("Failed to parse config file: {}", config_path))?;

        // Override config with CLI options if provided
        if let Some(font) = &options.font {
            config.font_path = font.to_string_lossy().to_string();
        }

        if let Some(output) = &options.output {
            config.output_path = output.clone();
        }

        if let Some(style) = &options.style {
            config.style = style.clone().into();
        }

        // Update log level in config if specified via command line
        if let Some(log_level) = &options.log_level {
            config.log_level = log_level.clone().into();
        }

        config
    } else {
        // Create default configuration if not exists
        warn!(
            "Config file not found at '{}', creating default config.",
            config_path
        );

        let mut config = Config::default();

        if let Some(font) = &options.font {
            config.font_path = font.to_string_lossy().to_string();
        }

        if let Some(output) = &options.output {
            config.output_path = output.clone();
        }

        if let Some(style) = &options.style {
            config.style = style.clone().into();
        }

        if let Some(log_level) = &options.log_level {
            config.log_level = log_level.clone().into();
        }

        // Save default config
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        file_utils::FileManager::write_to_file(config_path, &config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    // Validate the configuration after loading and overriding
    config
        .validate()
        .context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(to_level_filter(&config.log_level));
    }

    if let Some(themes_file) = &options.themes_file {
        if !themes_file.exists() {
            return Err(anyhow!("Themes file does not exist: {:?}", themes_file));
        }
    }

    // Create controller and run the generation
    let controller = Controller::with_config(config)?;
    controller.run(options.themes_file.as_deref(), options.force_overwrite)
}

fn to_level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}
