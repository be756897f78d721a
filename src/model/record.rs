use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::types::Round;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    Registered,
    Analyzed,
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RecordStatus::Registered => "registered",
            RecordStatus::Analyzed => "analyzed",
        };
        write!(f, "{s}")
    }
}

/// What a storage collaborator persists for one round. Built here, stored elsewhere.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ScoreRecord {
    #[serde(flatten)]
    pub round: Round,
    pub analysis_result: Option<String>,
    pub status: RecordStatus,
    pub created_at: NaiveDateTime,
    pub analyzed_at: Option<NaiveDateTime>,
}

impl ScoreRecord {
    #[must_use]
    pub fn new(round: Round, created_at: NaiveDateTime) -> Self {
        Self {
            round,
            analysis_result: None,
            status: RecordStatus::Registered,
            created_at,
            analyzed_at: None,
        }
    }

    /// Attach the generated report text. The text is opaque and kept verbatim.
    pub fn mark_analyzed(&mut self, analysis_result: impl Into<String>, at: NaiveDateTime) {
        self.analysis_result = Some(analysis_result.into());
        self.status = RecordStatus::Analyzed;
        self.analyzed_at = Some(at);
    }
}
