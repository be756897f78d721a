use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::ValidationBounds;
use crate::model::Round;

/// One reason a round cannot be committed yet. Always fixable by further edits.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationIssue {
    MissingDate,
    MissingCourseName,
    ScoreOutOfRange { play_order: u8, value: Option<i32> },
    PuttsOutOfRange { play_order: u8, value: Option<i32> },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::MissingDate => write!(f, "date is missing"),
            ValidationIssue::MissingCourseName => write!(f, "course name is missing"),
            ValidationIssue::ScoreOutOfRange { play_order, value } => match value {
                Some(v) => write!(f, "hole {play_order}: score {v} is out of range"),
                None => write!(f, "hole {play_order}: score is missing"),
            },
            ValidationIssue::PuttsOutOfRange { play_order, value } => match value {
                Some(v) => write!(f, "hole {play_order}: putts {v} is out of range"),
                None => write!(f, "hole {play_order}: putts are missing"),
            },
        }
    }
}

fn within(value: Option<i32>, min: i32, max: i32) -> bool {
    value.is_some_and(|v| (min..=max).contains(&v))
}

#[must_use]
pub fn validation_issues(round: &Round, bounds: &ValidationBounds) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    if round.date.is_empty() {
        issues.push(ValidationIssue::MissingDate);
    }
    if round.course_name.is_empty() {
        issues.push(ValidationIssue::MissingCourseName);
    }
    for hole in round.holes() {
        if !within(hole.score, bounds.score_min, bounds.score_max) {
            issues.push(ValidationIssue::ScoreOutOfRange {
                play_order: hole.play_order,
                value: hole.score,
            });
        }
        if !within(hole.putts, bounds.putts_min, bounds.putts_max) {
            issues.push(ValidationIssue::PuttsOutOfRange {
                play_order: hole.play_order,
                value: hole.putts,
            });
        }
    }
    issues
}

/// Whether the round may be committed. Has no side effects.
#[must_use]
pub fn is_valid(round: &Round, bounds: &ValidationBounds) -> bool {
    validation_issues(round, bounds).is_empty()
}
