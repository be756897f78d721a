use serde::{Deserialize, Serialize};
use std::fmt;

use super::rounding::percent;
use crate::model::{Flag, Hole};

pub const NO_DATA: &str = "no data";

/// A percentage, or an explicit marker that no hole carried the data.
///
/// Serializes as a number or `null`. "No data" never collapses to 0.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(from = "Option<f64>", into = "Option<f64>")]
pub enum Rate {
    Percent(f64),
    NoData,
}

impl Rate {
    fn of(hits: usize, eligible: usize) -> Self {
        percent(hits, eligible).map_or(Self::NoData, Self::Percent)
    }

    #[must_use]
    pub fn value(self) -> Option<f64> {
        match self {
            Self::Percent(v) => Some(v),
            Self::NoData => None,
        }
    }
}

impl From<Option<f64>> for Rate {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::NoData, Self::Percent)
    }
}

impl From<Rate> for Option<f64> {
    fn from(value: Rate) -> Self {
        value.value()
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rate::Percent(v) => write!(f, "{v}%"),
            Rate::NoData => write!(f, "{NO_DATA}"),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct AccuracyRates {
    pub fairway_keep_rate: Rate,
    pub par_on_rate: Rate,
}

fn rate_over(flags: impl Iterator<Item = Flag>) -> Rate {
    let (mut hits, mut eligible) = (0, 0);
    for flag in flags.filter(|f| f.is_known()) {
        eligible += 1;
        if flag == Flag::Yes {
            hits += 1;
        }
    }
    Rate::of(hits, eligible)
}

impl AccuracyRates {
    /// Fairways count on par 4 and longer only; greens in regulation count on every par.
    #[must_use]
    pub fn from_holes(holes: &[&Hole]) -> Self {
        Self {
            fairway_keep_rate: rate_over(
                holes
                    .iter()
                    .filter(|h| h.par >= 4)
                    .map(|h| h.fairway_kept),
            ),
            par_on_rate: rate_over(holes.iter().map(|h| h.hit_green_in_regulation)),
        }
    }
}
