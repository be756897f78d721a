use rusty_scorecard::config::ValidationBounds;
use rusty_scorecard::correction::{
    EditOutcome, HoleEdit, ValidationIssue, apply_edit, is_valid, section_name,
    validation_issues,
};
use rusty_scorecard::model::{Hole, HoleField, Round};

mod common;
use common::{sample_round, sum_of_scores, uniform_round};

#[test]
fn test_edit_recomputes_total_and_relative() {
    common::init_logger();
    let mut round = sample_round();
    assert_eq!(round.total_score(), 85);

    let outcome = round.set_hole_field(13, HoleField::Score, "5");
    assert_eq!(outcome, EditOutcome::Set(5));
    assert_eq!(round.total_score(), 83);
    assert_eq!(round.total_score(), sum_of_scores(&round));
    assert_eq!(round.holes()[13].relative_score, Some(1));

    let halves = round.half_scores().expect("sample has section names");
    assert_eq!(halves.second_half.total_score, 41);
    assert_eq!(halves.second_half.relative_score, 5);
    assert_eq!(
        halves.first_half.total_score + halves.second_half.total_score,
        round.total_score()
    );
}

#[test]
fn test_non_numeric_input_keeps_prior_value() {
    let mut round = sample_round();
    let before = round.clone();

    for raw in ["x", "4a", "5.5", "--"] {
        assert_eq!(
            round.set_hole_field(0, HoleField::Score, raw),
            EditOutcome::Ignored,
            "'{raw}' should be ignored"
        );
    }
    assert_eq!(round, before);
}

#[test]
fn test_out_of_range_index_is_ignored() {
    let mut round = sample_round();
    let before = round.clone();
    assert_eq!(
        round.set_hole_field(18, HoleField::Putts, "2"),
        EditOutcome::Ignored
    );
    assert_eq!(round, before);
}

#[test]
fn test_clearing_score_counts_as_zero_and_blocks_commit() {
    let bounds = ValidationBounds::default();
    let round = uniform_round(4, 5, Some(2));
    assert!(is_valid(&round, &bounds));

    let cleared = apply_edit(&round, &HoleEdit::new(6, HoleField::Score, ""));
    assert_eq!(cleared.holes()[6].score, None);
    assert_eq!(cleared.holes()[6].relative_score, None);
    assert_eq!(cleared.total_score(), 85);
    assert_eq!(cleared.total_score(), sum_of_scores(&cleared));

    assert!(!is_valid(&cleared, &bounds));
    assert_eq!(
        validation_issues(&cleared, &bounds),
        vec![ValidationIssue::ScoreOutOfRange {
            play_order: 7,
            value: None
        }]
    );
    // the source snapshot is untouched
    assert_eq!(round.total_score(), 90);
}

#[test]
fn test_total_invariant_over_edit_sequence() {
    let mut round = sample_round();
    let edits = [
        (0, HoleField::Score, "7"),
        (1, HoleField::Putts, ""),
        (2, HoleField::Score, "abc"),
        (17, HoleField::Score, ""),
        (9, HoleField::Score, " 3 "),
        (4, HoleField::Putts, "9"),
        (17, HoleField::Score, "12"),
    ];
    for (index, field, raw) in edits {
        round = apply_edit(&round, &HoleEdit::new(index, field, raw));
        assert_eq!(round.total_score(), sum_of_scores(&round));
        for hole in round.holes() {
            assert_eq!(hole.relative_score, hole.score.map(|s| s - hole.par));
        }
    }
    assert_eq!(round.holes()[9].score, Some(3));
    assert_eq!(round.holes()[17].score, Some(12));
}

#[test]
fn test_validation_bounds() {
    let bounds = ValidationBounds::default();
    let base = uniform_round(4, 4, Some(2));

    let cases = [
        (HoleField::Score, "1", true),
        (HoleField::Score, "15", true),
        (HoleField::Score, "0", false),
        (HoleField::Score, "16", false),
        (HoleField::Putts, "0", true),
        (HoleField::Putts, "7", true),
        (HoleField::Putts, "8", false),
        (HoleField::Putts, "-1", false),
        (HoleField::Putts, "", false),
    ];
    for (field, raw, expected) in cases {
        let edited = apply_edit(&base, &HoleEdit::new(3, field, raw));
        assert_eq!(
            is_valid(&edited, &bounds),
            expected,
            "{field}='{raw}' should be valid={expected}"
        );
    }
}

#[test]
fn test_missing_metadata_blocks_commit() {
    let bounds = ValidationBounds::default();
    let mut round = uniform_round(4, 4, Some(2));
    round.course_name = String::new();
    round.date = String::new();
    assert_eq!(
        validation_issues(&round, &bounds),
        vec![
            ValidationIssue::MissingDate,
            ValidationIssue::MissingCourseName
        ]
    );

    // only emptiness is checked, not content
    round.course_name = " ".to_string();
    round.date = " ".to_string();
    assert!(is_valid(&round, &bounds));
}

#[test]
fn test_extreme_edit_values_are_ignored() {
    let mut round = sample_round();
    let before = round.clone();

    for raw in ["-2147483648", "2147483647", "99999999999", "32768", "-32769"] {
        assert_eq!(
            round.set_hole_field(0, HoleField::Score, raw),
            EditOutcome::Ignored,
            "'{raw}' should be ignored"
        );
        assert_eq!(
            round.set_hole_field(5, HoleField::Putts, raw),
            EditOutcome::Ignored,
            "'{raw}' should be ignored"
        );
    }
    assert_eq!(round, before);
}

#[test]
fn test_largest_accepted_edits_keep_totals_consistent() {
    let bounds = ValidationBounds::default();
    let mut round = uniform_round(4, 4, Some(2));
    for index in 0..18 {
        assert_eq!(
            round.set_hole_field(index, HoleField::Score, "32767"),
            EditOutcome::Set(32767)
        );
        assert_eq!(
            round.set_hole_field(index, HoleField::Putts, "-32768"),
            EditOutcome::Set(-32768)
        );
    }
    assert_eq!(round.total_score(), 18 * 32767);
    assert_eq!(round.total_score(), sum_of_scores(&round));
    assert_eq!(round.total_putts(), 18 * -32768);
    assert_eq!(round.holes()[0].relative_score, Some(32763));
    assert!(!is_valid(&round, &bounds));

    let stats = rusty_scorecard::compute(&round, &rusty_scorecard::AnalysisConfig::default());
    assert_eq!(stats.total_relative_score, 18 * 32763);
    assert_eq!(stats.distribution.triple_bogey_or_worse, 18);
}

#[test]
fn test_extreme_hand_built_values_saturate() {
    let holes = (1..=18)
        .map(|po| Hole::new(po, po, 4, Some(i32::MAX)).with_putts(Some(i32::MIN)))
        .collect();
    let mut round = Round::new("c", "2026-01-01", holes).expect("valid holes");
    assert_eq!(round.total_score(), i32::MAX);
    assert_eq!(round.total_putts(), i32::MIN);
    assert_eq!(round.holes()[0].relative_score, Some(i32::MAX - 4));

    round.set_hole_field(0, HoleField::Score, "-32768");
    assert_eq!(round.total_score(), i32::MAX);
    assert_eq!(round.holes()[0].relative_score, Some(-32772));

    let stats = rusty_scorecard::compute(&round, &rusty_scorecard::AnalysisConfig::default());
    assert_eq!(stats.total_score, i32::MAX);
    assert_eq!(stats.first_half.score, i32::MAX);
    assert_eq!(stats.zones[5].total_score, i32::MAX);
}

#[test]
fn test_custom_bounds_are_respected() {
    let strict = ValidationBounds {
        score_max: 8,
        ..ValidationBounds::default()
    };
    let round = uniform_round(4, 9, Some(2));
    assert!(is_valid(&round, &ValidationBounds::default()));
    assert!(!is_valid(&round, &strict));
}

#[test]
fn test_section_names_follow_play_order() {
    let round = sample_round();
    // play order 1 was printed as hole 10 on the card
    assert_eq!(round.holes()[0].display_number, 10);
    assert_eq!(section_name(&round, 1), "West");
    assert_eq!(section_name(&round, 9), "West");
    assert_eq!(section_name(&round, 10), "East");
    assert_eq!(section_name(&round, 18), "East");
}

#[test]
fn test_section_names_fall_back_without_half_data() {
    let round = uniform_round(4, 4, None);
    assert!(round.half_scores().is_none());
    assert_eq!(section_name(&round, 3), "OUT");
    assert_eq!(section_name(&round, 12), "IN");
}

#[test]
fn test_hole_edit_parse() {
    let edit = HoleEdit::parse("7:score=5").expect("valid edit");
    assert_eq!(edit, HoleEdit::new(6, HoleField::Score, "5"));

    let clear = HoleEdit::parse("12:putts=").expect("valid clearing edit");
    assert_eq!(clear, HoleEdit::new(11, HoleField::Putts, ""));

    assert!(HoleEdit::parse("score=5").is_err());
    assert!(HoleEdit::parse("0:score=5").is_err());
    assert!(HoleEdit::parse("3:yardage=400").is_err());
}

#[test]
fn test_round_rejects_malformed_play_orders() {
    let mut holes: Vec<Hole> = (1..=18).map(|po| Hole::new(po, po, 4, Some(4))).collect();
    holes[17].play_order = 3;
    assert!(Round::new("c", "d", holes.clone()).is_err());

    holes[17].play_order = 19;
    assert!(Round::new("c", "d", holes.clone()).is_err());

    holes.pop();
    assert!(Round::new("c", "d", holes).is_err());
}
