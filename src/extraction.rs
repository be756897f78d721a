//! Intake of the extraction service's JSON payload.
//!
//! The service reads a photographed scorecard and answers with the shape below,
//! using `null` for anything it could not read. Derived numbers it sends
//! (`relative_score`, totals, half sums) are discarded and recomputed.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::ScorecardError;
use crate::model::{Flag, HOLES_PER_ROUND, Half, Hole, Round};

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ExtractedRound {
    pub course_name: Option<String>,
    pub date: Option<String>,
    pub weather: Option<String>,
    pub memo: Option<String>,
    pub total_score: Option<i64>,
    pub total_putts: Option<i64>,
    pub total_par: Option<i64>,
    pub half_scores: Option<ExtractedHalves>,
    #[serde(default)]
    pub holes: Vec<ExtractedHole>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ExtractedHalves {
    pub first_half: Option<ExtractedHalf>,
    pub second_half: Option<ExtractedHalf>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ExtractedHalf {
    pub section_name: Option<String>,
    pub total_score: Option<i64>,
    pub total_par: Option<i64>,
    pub total_putts: Option<i64>,
    pub relative_score: Option<i64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ExtractedHole {
    pub play_order: Option<i64>,
    pub display_number: Option<i64>,
    /// Card values are small; anything wider than `i16` is rejected as unparseable.
    pub par: Option<i16>,
    pub score: Option<i16>,
    pub putts: Option<i16>,
    pub relative_score: Option<i32>,
    pub yardage: Option<u32>,
    pub handicap: Option<u8>,
    pub is_fairway_keep: Option<bool>,
    pub is_par_on: Option<bool>,
}

fn play_order_of(raw: Option<i64>) -> Result<u8, ScorecardError> {
    let raw = raw.ok_or(ScorecardError::MissingPlayOrder)?;
    match u8::try_from(raw) {
        Ok(order) if (1..=HOLES_PER_ROUND as u8).contains(&order) => Ok(order),
        _ => Err(ScorecardError::PlayOrderOutOfRange(raw)),
    }
}

impl TryFrom<ExtractedHole> for Hole {
    type Error = ScorecardError;

    fn try_from(raw: ExtractedHole) -> Result<Self, Self::Error> {
        let play_order = play_order_of(raw.play_order)?;
        let display_number = raw
            .display_number
            .and_then(|n| u8::try_from(n).ok())
            .unwrap_or(play_order);
        let par = raw.par.ok_or(ScorecardError::MissingPar(play_order))?;

        let mut hole = Hole::new(
            play_order,
            display_number,
            i32::from(par),
            raw.score.map(i32::from),
        )
        .with_putts(raw.putts.map(i32::from))
        .with_accuracy(Flag::from(raw.is_fairway_keep), Flag::from(raw.is_par_on));
        hole.yardage = raw.yardage;
        hole.handicap = raw.handicap;
        Ok(hole)
    }
}

fn section_name_of(half: Option<&ExtractedHalf>, which: Half) -> String {
    half.and_then(|h| h.section_name.as_deref())
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(which.default_section_name())
        .to_string()
}

impl TryFrom<ExtractedRound> for Round {
    type Error = ScorecardError;

    fn try_from(raw: ExtractedRound) -> Result<Self, Self::Error> {
        let holes = raw
            .holes
            .into_iter()
            .map(Hole::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let round = Round::new(
            raw.course_name.unwrap_or_default(),
            raw.date.unwrap_or_default(),
            holes,
        )?
        .with_weather(raw.weather)
        .with_memo(raw.memo);

        if let Some(stated) = raw
            .total_score
            .filter(|stated| *stated != i64::from(round.total_score()))
        {
            warn!(
                "extracted total_score {stated} disagrees with hole sum {}; using hole sum",
                round.total_score()
            );
        }

        Ok(match raw.half_scores {
            Some(halves) => {
                let first = section_name_of(halves.first_half.as_ref(), Half::First);
                let second = section_name_of(halves.second_half.as_ref(), Half::Second);
                round.with_section_names(first, second)
            }
            None => round,
        })
    }
}

/// Parse an extraction payload into a round ready for correction.
///
/// # Errors
///
/// Returns `ScorecardError::Parse` for invalid JSON, or a malformed-input
/// error when the holes do not describe play orders 1 through 18.
pub fn parse_extraction(json: &str) -> Result<Round, ScorecardError> {
    let raw: ExtractedRound = serde_json::from_str(json)?;
    Round::try_from(raw).inspect_err(|e| warn!("rejected extraction payload: {e}"))
}
