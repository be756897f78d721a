use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use log::{info, warn};
use serde::Deserialize;
use serde_json::json;

use crate::config::AnalysisConfig;
use crate::correction::validation_issues;
use crate::extraction::ExtractedRound;
use crate::model::Round;
use crate::stats::compute;
use crate::view::{GroundingPayload, compose_prompt, render};

#[derive(Deserialize, Debug)]
pub struct AnalyzeRequest {
    pub score_data: serde_json::Value,
    pub instruction: Option<String>,
    pub past_summaries: Option<String>,
}

/// Stats, narrative and (when an instruction is given) the composed prompt for one round.
pub async fn stats(body: web::Json<AnalyzeRequest>, config: Data<AnalysisConfig>) -> impl Responder {
    let request = body.into_inner();

    let round = match serde_json::from_value::<ExtractedRound>(request.score_data)
        .map_err(crate::error::ScorecardError::from)
        .and_then(Round::try_from)
    {
        Ok(round) => round,
        Err(e) => {
            warn!("/api/stats: rejected score_data: {e}");
            return HttpResponse::BadRequest().json(json!({ "error": e.to_string() }));
        }
    };

    let issues = validation_issues(&round, &config.bounds);
    if !issues.is_empty() {
        return HttpResponse::UnprocessableEntity().json(json!({
            "error": "round failed validation",
            "issues": issues,
        }));
    }

    let stats = compute(&round, config.get_ref());
    let narrative = render(&stats);
    let prompt = match request.instruction.as_deref() {
        Some(instruction) => match compose_prompt(
            instruction,
            &GroundingPayload::Narrative(narrative.clone()),
            request.past_summaries.as_deref(),
        ) {
            Ok(p) => Some(p),
            Err(e) => {
                return HttpResponse::InternalServerError().json(json!({ "error": e.to_string() }));
            }
        },
        None => None,
    };

    info!(
        "/api/stats: '{}' {} ({:+})",
        round.course_name, stats.total_score, stats.total_relative_score
    );
    HttpResponse::Ok().json(json!({
        "stats": stats,
        "narrative": narrative,
        "prompt": prompt,
    }))
}
