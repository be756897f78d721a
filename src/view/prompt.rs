use crate::error::ScorecardError;
use crate::model::Round;

const RULE: &str = "=========================================";
pub const NO_PRIOR_ROUNDS: &str = "No prior rounds on record.";

/// What the report generator gets as the round's grounding data.
#[derive(Debug, Clone)]
pub enum GroundingPayload<'a> {
    Narrative(String),
    RoundJson(&'a Round),
}

/// Build the instruction string handed to the text-generation service.
///
/// `past_summaries` is passed through untouched; blank counts as absent.
///
/// # Errors
///
/// Returns `ScorecardError::Parse` if the round cannot be serialized.
pub fn compose_prompt(
    instruction: &str,
    payload: &GroundingPayload<'_>,
    past_summaries: Option<&str>,
) -> Result<String, ScorecardError> {
    let body = match payload {
        GroundingPayload::Narrative(text) => text.trim_end().to_string(),
        GroundingPayload::RoundJson(round) => serde_json::to_string_pretty(round)?,
    };
    let past = past_summaries
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(NO_PRIOR_ROUNDS);

    Ok(format!(
        "{}\n\n{RULE}\n[This round]\n{body}\n\n{past}\n{RULE}\n\nUsing the data above, write the report in Markdown.\n",
        instruction.trim()
    ))
}
