use rusty_scorecard::args::OutputFormat;
use rusty_scorecard::config::AnalysisConfig;
use rusty_scorecard::correction::{HoleEdit, ValidationIssue};
use rusty_scorecard::model::HoleField;
use rusty_scorecard::mvu::{CorrectionModel, Effect, Msg, dispatch, run_session, update};
use rusty_scorecard::report::{ReportOutcome, build_report};

mod common;
use common::{sample_round, uniform_round};

fn edit(index: usize, field: HoleField, raw: &str) -> Msg {
    Msg::EditHole {
        index,
        field,
        raw: raw.to_string(),
    }
}

#[test]
fn test_commit_valid_round_produces_analysis() {
    common::init_logger();
    let mut model = CorrectionModel::new(sample_round(), AnalysisConfig::default());
    assert!(model.can_commit());

    let effects = update(&mut model, Msg::Commit);
    assert_eq!(effects, vec![Effect::Analyze]);
    assert!(model.committed.is_some());
    assert!(model.stats.is_none());

    let mut model = CorrectionModel::new(sample_round(), AnalysisConfig::default());
    dispatch(&mut model, Msg::Commit);
    let stats = model.stats.as_ref().expect("analysis ran");
    assert_eq!(stats.total_score, 85);
    assert!(
        model
            .narrative
            .as_deref()
            .is_some_and(|n| n.contains("Total: 85 (Par 72, +13)"))
    );
}

#[test]
fn test_commit_blocked_until_fixed() {
    let round = sample_round();
    let mut model = CorrectionModel::new(round, AnalysisConfig::default());

    let committed = run_session(
        &mut model,
        [edit(2, HoleField::Score, ""), edit(3, HoleField::Putts, "9"), Msg::Commit],
    );
    assert!(!committed);
    assert!(model.commit_blocked);
    assert!(model.stats.is_none());
    assert_eq!(
        model.issues,
        vec![
            ValidationIssue::ScoreOutOfRange {
                play_order: 3,
                value: None
            },
            ValidationIssue::PuttsOutOfRange {
                play_order: 4,
                value: Some(9)
            },
        ]
    );
    // clearing the score still recomputed the total
    assert_eq!(model.draft.total_score(), 82);

    let committed = run_session(
        &mut model,
        [edit(2, HoleField::Score, "4"), edit(3, HoleField::Putts, "2"), Msg::Commit],
    );
    assert!(committed);
    assert!(!model.commit_blocked);
    assert_eq!(model.stats.as_ref().map(|s| s.total_score), Some(86));
}

#[test]
fn test_edit_after_commit_discards_analysis() {
    let mut model = CorrectionModel::new(sample_round(), AnalysisConfig::default());
    assert!(run_session(&mut model, [Msg::Commit]));

    dispatch(&mut model, edit(0, HoleField::Score, "4"));
    assert!(model.committed.is_none());
    assert!(model.stats.is_none());
    assert_eq!(model.draft.total_score(), 84);
}

#[test]
fn test_ignored_edit_after_commit_keeps_analysis() {
    let mut model = CorrectionModel::new(uniform_round(4, 4, Some(2)), AnalysisConfig::default());
    assert!(run_session(&mut model, [Msg::Commit]));
    let committed = model.committed.clone();
    let narrative = model.narrative.clone();

    for msg in [
        edit(0, HoleField::Score, "abc"),
        edit(3, HoleField::Putts, "2.5"),
        edit(18, HoleField::Score, "4"),
        edit(5, HoleField::Score, "-2147483648"),
    ] {
        assert_eq!(update(&mut model, msg), vec![]);
    }
    assert_eq!(model.committed, committed);
    assert_eq!(model.narrative, narrative);
    assert_eq!(model.stats.as_ref().map(|s| s.total_score), Some(72));
    assert!(model.can_commit());
}

#[test]
fn test_metadata_messages() {
    let mut model = CorrectionModel::new(sample_round(), AnalysisConfig::default());
    dispatch(&mut model, Msg::SetCourseName(String::new()));
    assert_eq!(model.issues, vec![ValidationIssue::MissingCourseName]);

    run_session(
        &mut model,
        [
            Msg::SetCourseName("Sakura Hills".into()),
            Msg::SetWeather(Some("rain".into())),
            Msg::SetMemo(Some("new driver".into())),
            Msg::SetDate("2026-09-15".into()),
        ],
    );
    assert!(model.can_commit());
    assert_eq!(model.draft.weather.as_deref(), Some("rain"));
    assert_eq!(model.draft.memo.as_deref(), Some("new driver"));
    assert_eq!(model.draft.date, "2026-09-15");

    dispatch(&mut model, Msg::Discard(Box::new(uniform_round(3, 3, Some(1)))));
    assert_eq!(model.draft.total_score(), 54);
}

#[test]
fn test_build_report_formats() -> Result<(), Box<dyn std::error::Error>> {
    let edits = [HoleEdit::parse("14:score=5")?];

    let text = build_report(
        sample_round(),
        &edits,
        OutputFormat::Text,
        None,
        None,
        AnalysisConfig::default(),
    )?;
    let ReportOutcome::Rendered(text) = text else {
        panic!("expected rendered text");
    };
    assert!(text.contains("   - Total: 83 (Par 72, +11)\n"));
    assert!(text.contains("   - H13-15: +2 (standard)\n"));

    let json = build_report(
        sample_round(),
        &edits,
        OutputFormat::Json,
        None,
        None,
        AnalysisConfig::default(),
    )?;
    let ReportOutcome::Rendered(json) = json else {
        panic!("expected rendered json");
    };
    let value: serde_json::Value = serde_json::from_str(&json)?;
    assert_eq!(value["total_score"], 83);
    assert_eq!(value["zones"].as_array().map(Vec::len), Some(6));

    let prompt = build_report(
        sample_round(),
        &[],
        OutputFormat::Prompt,
        Some("Coach me."),
        Some("last time: 88"),
        AnalysisConfig::default(),
    )?;
    let ReportOutcome::Rendered(prompt) = prompt else {
        panic!("expected rendered prompt");
    };
    assert!(prompt.starts_with("Coach me.\n"));
    assert!(prompt.contains("last time: 88"));
    Ok(())
}

#[test]
fn test_build_report_blocked() -> Result<(), Box<dyn std::error::Error>> {
    let outcome = build_report(
        sample_round(),
        &[HoleEdit::parse("1:score=abc")?, HoleEdit::parse("1:putts=")?],
        OutputFormat::Text,
        None,
        None,
        AnalysisConfig::default(),
    )?;
    assert_eq!(
        outcome,
        ReportOutcome::Blocked(vec![ValidationIssue::PuttsOutOfRange {
            play_order: 1,
            value: None
        }])
    );
    Ok(())
}
