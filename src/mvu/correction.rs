use log::{info, warn};

use crate::config::AnalysisConfig;
use crate::correction::{EditOutcome, HoleEdit, ValidationIssue, validation_issues};
use crate::model::{HoleField, Round};
use crate::stats::{AnalysisStats, compute};
use crate::view::render;

/// State of one interactive correction session over an extracted round.
#[derive(Debug, Clone)]
pub struct CorrectionModel {
    pub draft: Round,
    pub config: AnalysisConfig,
    pub issues: Vec<ValidationIssue>,
    pub commit_blocked: bool,
    pub committed: Option<Round>,
    pub stats: Option<AnalysisStats>,
    pub narrative: Option<String>,
}

impl CorrectionModel {
    #[must_use]
    pub fn new(draft: Round, config: AnalysisConfig) -> Self {
        let issues = validation_issues(&draft, &config.bounds);
        Self {
            draft,
            config,
            issues,
            commit_blocked: false,
            committed: None,
            stats: None,
            narrative: None,
        }
    }

    /// Mirrors the commit button: enabled only while the draft passes validation.
    #[must_use]
    pub fn can_commit(&self) -> bool {
        self.issues.is_empty()
    }

    fn replace_draft(&mut self, draft: Round) {
        self.draft = draft;
        self.issues = validation_issues(&self.draft, &self.config.bounds);
        self.commit_blocked = false;
        self.committed = None;
        self.stats = None;
        self.narrative = None;
    }
}

#[derive(Debug, Clone)]
pub enum Msg {
    EditHole {
        index: usize,
        field: HoleField,
        raw: String,
    },
    SetCourseName(String),
    SetDate(String),
    SetWeather(Option<String>),
    SetMemo(Option<String>),
    /// Throw the draft away and start over from another extraction.
    Discard(Box<Round>),
    Commit,
    Analyzed {
        stats: Box<AnalysisStats>,
        narrative: String,
    },
}

impl From<HoleEdit> for Msg {
    fn from(edit: HoleEdit) -> Self {
        Msg::EditHole {
            index: edit.index,
            field: edit.field,
            raw: edit.raw,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Analyze,
}

pub fn update(model: &mut CorrectionModel, msg: Msg) -> Vec<Effect> {
    match msg {
        Msg::EditHole { index, field, raw } => {
            let mut next = model.draft.clone();
            // an ignored keystroke leaves the draft and any commit as they were
            if next.set_hole_field(index, field, &raw) != EditOutcome::Ignored {
                model.replace_draft(next);
            }
            vec![]
        }
        Msg::SetCourseName(name) => {
            let mut next = model.draft.clone();
            next.course_name = name;
            model.replace_draft(next);
            vec![]
        }
        Msg::SetDate(date) => {
            let mut next = model.draft.clone();
            next.date = date;
            model.replace_draft(next);
            vec![]
        }
        Msg::SetWeather(weather) => {
            let next = model.draft.clone().with_weather(weather);
            model.replace_draft(next);
            vec![]
        }
        Msg::SetMemo(memo) => {
            let next = model.draft.clone().with_memo(memo);
            model.replace_draft(next);
            vec![]
        }
        Msg::Discard(round) => {
            model.replace_draft(*round);
            vec![]
        }
        Msg::Commit => {
            if model.can_commit() {
                info!(
                    "committing round at '{}' on {}",
                    model.draft.course_name, model.draft.date
                );
                model.commit_blocked = false;
                model.committed = Some(model.draft.clone());
                vec![Effect::Analyze]
            } else {
                warn!(
                    "commit blocked: {} validation issue(s)",
                    model.issues.len()
                );
                model.commit_blocked = true;
                vec![]
            }
        }
        Msg::Analyzed { stats, narrative } => {
            model.stats = Some(*stats);
            model.narrative = Some(narrative);
            vec![]
        }
    }
}

/// Runs one effect against the current model and reports back as a message.
#[must_use]
pub fn run_effect(effect: Effect, model: &CorrectionModel) -> Option<Msg> {
    match effect {
        Effect::Analyze => {
            let round = model.committed.as_ref()?;
            let stats = compute(round, &model.config);
            let narrative = render(&stats);
            info!(
                "analysis ready: {} ({:+}) at '{}'",
                stats.total_score, stats.total_relative_score, round.course_name
            );
            Some(Msg::Analyzed {
                stats: Box::new(stats),
                narrative,
            })
        }
    }
}
