use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ScorecardError;
use crate::extraction::ExtractedRound;

pub const HOLES_PER_ROUND: usize = 18;
pub const HOLES_PER_HALF: u8 = 9;
pub const DEFAULT_FIRST_SECTION: &str = "OUT";
pub const DEFAULT_SECOND_SECTION: &str = "IN";

/// Sum that pins at the `i32` limits instead of overflowing.
pub(crate) fn saturating_sum(values: impl Iterator<Item = i32>) -> i32 {
    values.fold(0, i32::saturating_add)
}

/// A yes/no mark on the card that may also be unreadable or absent.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum Flag {
    Yes,
    No,
    #[default]
    Unknown,
}

impl Flag {
    #[must_use]
    pub fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl From<Option<bool>> for Flag {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => Self::Yes,
            Some(false) => Self::No,
            None => Self::Unknown,
        }
    }
}

impl From<Flag> for Option<bool> {
    fn from(value: Flag) -> Self {
        match value {
            Flag::Yes => Some(true),
            Flag::No => Some(false),
            Flag::Unknown => None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Hole {
    pub play_order: u8,
    pub display_number: u8,
    pub par: i32,
    pub score: Option<i32>,
    pub putts: Option<i32>,
    /// Always `score - par`, unknown while the score is; rewritten by every recompute.
    pub relative_score: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yardage: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handicap: Option<u8>,
    #[serde(default, rename = "is_fairway_keep")]
    pub fairway_kept: Flag,
    #[serde(default, rename = "is_par_on")]
    pub hit_green_in_regulation: Flag,
}

impl Hole {
    #[must_use]
    pub fn new(play_order: u8, display_number: u8, par: i32, score: Option<i32>) -> Self {
        let mut hole = Self {
            play_order,
            display_number,
            par,
            score,
            putts: None,
            relative_score: None,
            yardage: None,
            handicap: None,
            fairway_kept: Flag::Unknown,
            hit_green_in_regulation: Flag::Unknown,
        };
        hole.recompute();
        hole
    }

    #[must_use]
    pub fn with_putts(mut self, putts: Option<i32>) -> Self {
        self.putts = putts;
        self
    }

    #[must_use]
    pub fn with_accuracy(mut self, fairway_kept: Flag, hit_green_in_regulation: Flag) -> Self {
        self.fairway_kept = fairway_kept;
        self.hit_green_in_regulation = hit_green_in_regulation;
        self
    }

    /// Strokes counted toward sums; an unknown score contributes nothing.
    #[must_use]
    pub fn strokes(&self) -> i32 {
        self.score.unwrap_or(0)
    }

    #[must_use]
    pub fn putts_or_zero(&self) -> i32 {
        self.putts.unwrap_or(0)
    }

    #[must_use]
    pub fn half(&self) -> Half {
        Half::of(self.play_order)
    }

    pub(crate) fn recompute(&mut self) {
        self.relative_score = self.score.map(|score| score.saturating_sub(self.par));
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Half {
    First,
    Second,
}

impl Half {
    /// Halves follow play order, never the number printed on the card.
    #[must_use]
    pub fn of(play_order: u8) -> Self {
        if play_order <= HOLES_PER_HALF {
            Self::First
        } else {
            Self::Second
        }
    }

    #[must_use]
    pub fn default_section_name(self) -> &'static str {
        match self {
            Self::First => DEFAULT_FIRST_SECTION,
            Self::Second => DEFAULT_SECOND_SECTION,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct HalfData {
    pub section_name: String,
    pub total_score: i32,
    pub total_par: i32,
    pub total_putts: i32,
    pub relative_score: i32,
}

impl HalfData {
    #[must_use]
    pub fn labelled(section_name: impl Into<String>) -> Self {
        Self {
            section_name: section_name.into(),
            total_score: 0,
            total_par: 0,
            total_putts: 0,
            relative_score: 0,
        }
    }

    fn aggregate<'a>(&mut self, holes: impl Iterator<Item = &'a Hole>) {
        let (mut score, mut par, mut putts) = (0i32, 0i32, 0i32);
        for hole in holes {
            score = score.saturating_add(hole.strokes());
            par = par.saturating_add(hole.par);
            putts = putts.saturating_add(hole.putts_or_zero());
        }
        self.total_score = score;
        self.total_par = par;
        self.total_putts = putts;
        self.relative_score = score.saturating_sub(par);
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct HalfScores {
    pub first_half: HalfData,
    pub second_half: HalfData,
}

impl HalfScores {
    #[must_use]
    pub fn get(&self, half: Half) -> &HalfData {
        match half {
            Half::First => &self.first_half,
            Half::Second => &self.second_half,
        }
    }
}

/// One played round: metadata plus exactly 18 holes sorted by play order.
///
/// Totals and half aggregates are derived. They are rewritten whenever a hole
/// changes, so they always agree with `holes`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(try_from = "ExtractedRound")]
pub struct Round {
    pub course_name: String,
    pub date: String,
    total_score: i32,
    total_putts: i32,
    total_par: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    half_scores: Option<HalfScores>,
    pub(crate) holes: Vec<Hole>,
}

impl Round {
    /// Build a round from 18 holes in any order.
    ///
    /// # Errors
    ///
    /// Returns a malformed-input error when the hole count is not 18 or the
    /// play orders are not exactly 1 through 18.
    pub fn new(
        course_name: impl Into<String>,
        date: impl Into<String>,
        mut holes: Vec<Hole>,
    ) -> Result<Self, ScorecardError> {
        if holes.len() != HOLES_PER_ROUND {
            return Err(ScorecardError::WrongHoleCount(holes.len()));
        }
        let mut seen = [false; HOLES_PER_ROUND];
        for hole in &holes {
            let order = hole.play_order;
            if !(1..=HOLES_PER_ROUND as u8).contains(&order) {
                return Err(ScorecardError::PlayOrderOutOfRange(i64::from(order)));
            }
            let slot = &mut seen[usize::from(order) - 1];
            if *slot {
                return Err(ScorecardError::DuplicatePlayOrder(order));
            }
            *slot = true;
        }
        holes.sort_by_key(|h| h.play_order);

        let mut round = Self {
            course_name: course_name.into(),
            date: date.into(),
            total_score: 0,
            total_putts: 0,
            total_par: 0,
            weather: None,
            memo: None,
            half_scores: None,
            holes,
        };
        round.recompute();
        Ok(round)
    }

    /// Attach section labels (e.g. "OUT"/"IN" or regional names) to the two halves.
    #[must_use]
    pub fn with_section_names(
        mut self,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        self.half_scores = Some(HalfScores {
            first_half: HalfData::labelled(first),
            second_half: HalfData::labelled(second),
        });
        self.recompute();
        self
    }

    #[must_use]
    pub fn with_weather(mut self, weather: Option<String>) -> Self {
        self.weather = weather;
        self
    }

    #[must_use]
    pub fn with_memo(mut self, memo: Option<String>) -> Self {
        self.memo = memo;
        self
    }

    #[must_use]
    pub fn holes(&self) -> &[Hole] {
        &self.holes
    }

    #[must_use]
    pub fn total_score(&self) -> i32 {
        self.total_score
    }

    #[must_use]
    pub fn total_putts(&self) -> i32 {
        self.total_putts
    }

    #[must_use]
    pub fn total_par(&self) -> i32 {
        self.total_par
    }

    #[must_use]
    pub fn half_scores(&self) -> Option<&HalfScores> {
        self.half_scores.as_ref()
    }

    /// The round date as a calendar date, when it is written as `YYYY-MM-DD`.
    #[must_use]
    pub fn played_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").ok()
    }

    /// Rewrite every derived field from the holes.
    pub(crate) fn recompute(&mut self) {
        for hole in &mut self.holes {
            hole.recompute();
        }
        self.total_score = saturating_sum(self.holes.iter().map(Hole::strokes));
        self.total_putts = saturating_sum(self.holes.iter().map(Hole::putts_or_zero));
        self.total_par = saturating_sum(self.holes.iter().map(|h| h.par));
        if let Some(halves) = self.half_scores.as_mut() {
            halves
                .first_half
                .aggregate(self.holes.iter().filter(|h| h.half() == Half::First));
            halves
                .second_half
                .aggregate(self.holes.iter().filter(|h| h.half() == Half::Second));
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum HoleField {
    Score,
    Putts,
}

impl fmt::Display for HoleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HoleField::Score => "score",
            HoleField::Putts => "putts",
        };
        write!(f, "{s}")
    }
}

impl FromStr for HoleField {
    type Err = ScorecardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "score" => Ok(Self::Score),
            "putts" | "putt" => Ok(Self::Putts),
            other => Err(ScorecardError::Parse(format!(
                "unknown hole field '{other}', expected score or putts"
            ))),
        }
    }
}
