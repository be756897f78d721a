use anyhow::{Context, Result, anyhow};
use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::config::AnalysisConfig;
use crate::correction::HoleEdit;

#[derive(Debug, Clone, Copy, Deserialize, ValueEnum, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Report,
    Serve,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, ValueEnum, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Prompt,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportOptions {
    pub round_json: PathBuf,
    pub edits: Vec<HoleEdit>,
    pub format: OutputFormat,
    pub instruction_file: Option<PathBuf>,
    pub past_summaries_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppMode {
    Report(Box<ReportOptions>),
    Serve { bind: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub mode: AppMode,
    pub analysis: AnalysisConfig,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Scorecard statistics for one golf round", long_about = None)]
pub struct Cli {
    #[arg(long, value_enum)]
    pub mode: Option<Mode>,
    /// TOML file with defaults for any flag below, plus an [analysis] table.
    #[arg(long)]
    pub config_toml: Option<PathBuf>,
    /// Extraction-service JSON for the round.
    #[arg(long)]
    pub round_json: Option<PathBuf>,
    /// Correction applied before commit, e.g. `7:score=5` or `12:putts=` to clear.
    #[arg(long = "edit", value_name = "PLAY_ORDER:FIELD=VALUE")]
    pub edits: Vec<String>,
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
    #[arg(long)]
    pub instruction_file: Option<PathBuf>,
    #[arg(long)]
    pub past_summaries_file: Option<PathBuf>,
    #[arg(long)]
    pub bind: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    mode: Option<Mode>,
    round_json: Option<PathBuf>,
    edits: Option<Vec<String>>,
    format: Option<OutputFormat>,
    instruction_file: Option<PathBuf>,
    past_summaries_file: Option<PathBuf>,
    bind: Option<String>,
    analysis: Option<AnalysisConfig>,
}

/// Load config from CLI and optional TOML file. CLI values win.
///
/// # Errors
/// Returns an error if required values are missing, the config file is
/// unreadable or invalid, or an edit is malformed.
pub fn load_config(cli: Cli) -> Result<AppConfig> {
    let file_config = match cli.config_toml.as_ref() {
        Some(path) => {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("read config toml {}", path.display()))?;
            toml::from_str::<FileConfig>(&contents)
                .with_context(|| format!("parse config toml {}", path.display()))?
        }
        None => FileConfig::default(),
    };

    let analysis = file_config.analysis.unwrap_or_default();
    analysis
        .check()
        .context("invalid [analysis] table in config toml")?;

    let mode = cli.mode.or(file_config.mode).unwrap_or(Mode::Report);
    let mode = match mode {
        Mode::Report => {
            let round_json = cli
                .round_json
                .or(file_config.round_json)
                .ok_or_else(|| anyhow!("missing --round-json"))?;
            let raw_edits = if cli.edits.is_empty() {
                file_config.edits.unwrap_or_default()
            } else {
                cli.edits
            };
            let edits = raw_edits
                .iter()
                .map(|e| HoleEdit::parse(e).with_context(|| format!("bad --edit '{e}'")))
                .collect::<Result<Vec<_>>>()?;

            AppMode::Report(Box::new(ReportOptions {
                round_json,
                edits,
                format: cli.format.or(file_config.format).unwrap_or_default(),
                instruction_file: cli.instruction_file.or(file_config.instruction_file),
                past_summaries_file: cli.past_summaries_file.or(file_config.past_summaries_file),
            }))
        }
        Mode::Serve => AppMode::Serve {
            bind: cli
                .bind
                .or(file_config.bind)
                .unwrap_or_else(|| "0.0.0.0:8081".to_string()),
        },
    };

    Ok(AppConfig { mode, analysis })
}
