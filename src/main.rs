use anyhow::{Context, Result};
use clap::Parser;
use log::error;
use std::fs;
use std::path::Path;

use rusty_scorecard::args::{AppMode, Cli, load_config};
use rusty_scorecard::controller;
use rusty_scorecard::parse_extraction;
use rusty_scorecard::report::{ReportOutcome, build_report};

fn read_optional(path: Option<&Path>) -> Result<Option<String>> {
    path.map(|p| fs::read_to_string(p).with_context(|| format!("read {}", p.display())))
        .transpose()
}

#[actix_web::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config(Cli::parse())?;

    match config.mode {
        AppMode::Serve { bind } => {
            controller::serve(&bind, config.analysis).await?;
        }
        AppMode::Report(opts) => {
            let contents = fs::read_to_string(&opts.round_json)
                .with_context(|| format!("read round json {}", opts.round_json.display()))?;
            let round = parse_extraction(&contents)
                .with_context(|| format!("parse round json {}", opts.round_json.display()))?;
            let instruction = read_optional(opts.instruction_file.as_deref())?;
            let past_summaries = read_optional(opts.past_summaries_file.as_deref())?;

            match build_report(
                round,
                &opts.edits,
                opts.format,
                instruction.as_deref(),
                past_summaries.as_deref(),
                config.analysis,
            )? {
                ReportOutcome::Rendered(output) => print!("{output}"),
                ReportOutcome::Blocked(issues) => {
                    for issue in &issues {
                        error!("{issue}");
                    }
                    eprintln!("round is not ready to commit ({} issue(s))", issues.len());
                    std::process::exit(2);
                }
            }
        }
    }
    Ok(())
}
