use log::warn;

use crate::args::OutputFormat;
use crate::config::AnalysisConfig;
use crate::correction::{HoleEdit, ValidationIssue};
use crate::error::ScorecardError;
use crate::model::Round;
use crate::mvu::{CorrectionModel, Msg, run_session};
use crate::view::{GroundingPayload, compose_prompt};

pub const DEFAULT_INSTRUCTION: &str = "You are a golf coach. Write an analysis of the round below for the player who played it.";

#[derive(Debug, Clone, PartialEq)]
pub enum ReportOutcome {
    Rendered(String),
    /// The corrected round still fails validation; nothing was analyzed.
    Blocked(Vec<ValidationIssue>),
}

/// Apply corrections, commit, and render the requested output for one round.
///
/// # Errors
///
/// Returns an error only when JSON output cannot be serialized.
pub fn build_report(
    round: Round,
    edits: &[HoleEdit],
    format: OutputFormat,
    instruction: Option<&str>,
    past_summaries: Option<&str>,
    config: AnalysisConfig,
) -> Result<ReportOutcome, ScorecardError> {
    let mut model = CorrectionModel::new(round, config);
    let msgs = edits
        .iter()
        .cloned()
        .map(Msg::from)
        .chain(std::iter::once(Msg::Commit));

    if !run_session(&mut model, msgs) {
        warn!("round not committed: {} issue(s)", model.issues.len());
        return Ok(ReportOutcome::Blocked(model.issues));
    }

    let (Some(stats), Some(narrative)) = (model.stats, model.narrative) else {
        return Err(ScorecardError::Other(
            "round committed without analysis".to_string(),
        ));
    };

    let output = match format {
        OutputFormat::Text => narrative,
        OutputFormat::Json => serde_json::to_string_pretty(&stats)?,
        OutputFormat::Prompt => compose_prompt(
            instruction.unwrap_or(DEFAULT_INSTRUCTION),
            &GroundingPayload::Narrative(narrative),
            past_summaries,
        )?,
    };
    Ok(ReportOutcome::Rendered(output))
}
