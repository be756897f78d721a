use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::error::ScorecardError;
use crate::model::{HoleField, Round};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EditOutcome {
    Set(i32),
    Cleared,
    /// Input was not an integer, or the index does not name a hole. Nothing changed.
    Ignored,
}

/// One keystroke-level change to a hole's score or putts.
///
/// `index` is the position in play order (0 for the first hole played).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct HoleEdit {
    pub index: usize,
    pub field: HoleField,
    pub raw: String,
}

impl HoleEdit {
    #[must_use]
    pub fn new(index: usize, field: HoleField, raw: impl Into<String>) -> Self {
        Self {
            index,
            field,
            raw: raw.into(),
        }
    }

    /// Parse `<play_order>:<score|putts>=<value>`, e.g. `7:score=5` or `12:putts=`.
    ///
    /// # Errors
    ///
    /// Returns `ScorecardError::Parse` when the text does not have that shape.
    ///
    /// # Panics
    ///
    /// Will panic if the regex is invalid
    pub fn parse(input: &str) -> Result<Self, ScorecardError> {
        static REGEX: OnceLock<Regex> = OnceLock::new();
        let re = REGEX.get_or_init(|| {
            Regex::new(r"^\s*(\d{1,2})\s*:\s*([A-Za-z]+)\s*=(.*)$")
                .expect("Invalid regex pattern - this is a programming error")
        });

        let caps = re.captures(input).ok_or_else(|| {
            ScorecardError::Parse(format!(
                "edit '{input}' should look like <play_order>:<score|putts>=<value>"
            ))
        })?;
        let play_order: usize = caps[1]
            .parse()
            .map_err(|_| ScorecardError::Parse(format!("bad play order in '{input}'")))?;
        if play_order == 0 {
            return Err(ScorecardError::PlayOrderOutOfRange(0));
        }
        let field = caps[2].parse()?;
        Ok(Self::new(play_order - 1, field, caps[3].to_string()))
    }
}

impl TryFrom<&str> for HoleEdit {
    type Error = ScorecardError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl Round {
    /// Set a hole's score or putts from raw form input.
    ///
    /// Empty input clears the value to unknown. Anything that does not parse as
    /// an `i16` leaves the prior value in place. After any change the whole
    /// round is recomputed, so `total_score` always equals the hole sum.
    pub fn set_hole_field(&mut self, index: usize, field: HoleField, raw: &str) -> EditOutcome {
        let Some(hole) = self.holes.get_mut(index) else {
            debug!("edit ignored: no hole at index {index}");
            return EditOutcome::Ignored;
        };

        let trimmed = raw.trim();
        let (value, outcome) = if trimmed.is_empty() {
            (None, EditOutcome::Cleared)
        } else {
            match trimmed.parse::<i16>().map(i32::from) {
                Ok(v) => (Some(v), EditOutcome::Set(v)),
                Err(_) => {
                    debug!("edit ignored: '{raw}' is not a card-sized integer ({field} at index {index})");
                    return EditOutcome::Ignored;
                }
            }
        };

        match field {
            HoleField::Score => hole.score = value,
            HoleField::Putts => hole.putts = value,
        }
        self.recompute();
        debug!(
            "hole {} {field} -> {value:?}; total_score now {}",
            index + 1,
            self.total_score()
        );
        outcome
    }
}

/// Apply an edit to a snapshot and return the next snapshot.
#[must_use]
pub fn apply_edit(round: &Round, edit: &HoleEdit) -> Round {
    let mut next = round.clone();
    next.set_hole_field(edit.index, edit.field, &edit.raw);
    next
}
