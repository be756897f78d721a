use ahash::RandomState;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use super::rounding::round_ratio;
use super::{HOLES_PER_ZONE, ZONE_COUNT};
use crate::config::ZoneThresholds;
use crate::correction::section_name;
use crate::model::types::saturating_sum;
use crate::model::{Half, Hole, Round};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct HalfSummary {
    pub section_name: String,
    pub score: i32,
    pub par: i32,
    pub putts: i32,
    pub relative: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ParStats {
    pub par: i32,
    pub count: usize,
    pub avg_score: f64,
    pub avg_relative: f64,
    pub avg_putts: f64,
}

impl ParStats {
    /// Stats for a par with no holes on this course.
    #[must_use]
    pub fn empty(par: i32) -> Self {
        Self {
            par,
            count: 0,
            avg_score: 0.0,
            avg_relative: 0.0,
            avg_putts: 0.0,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ZoneTrend {
    Steady,
    Standard,
    Collapsed,
}

impl ZoneTrend {
    #[must_use]
    pub fn classify(relative: i32, thresholds: &ZoneThresholds) -> Self {
        if relative <= thresholds.steady_max {
            Self::Steady
        } else if relative <= thresholds.standard_max {
            Self::Standard
        } else {
            Self::Collapsed
        }
    }
}

impl fmt::Display for ZoneTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ZoneTrend::Steady => "steady",
            ZoneTrend::Standard => "standard",
            ZoneTrend::Collapsed => "collapsed",
        };
        write!(f, "{s}")
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ZoneStats {
    pub id: u8,
    pub label: String,
    pub total_score: i32,
    pub relative_score: i32,
    pub trend: ZoneTrend,
}

fn summarize(section_name: &str, holes: &[&Hole]) -> HalfSummary {
    let score = saturating_sum(holes.iter().map(|h| h.strokes()));
    let par = saturating_sum(holes.iter().map(|h| h.par));
    let putts = saturating_sum(holes.iter().map(|h| h.putts_or_zero()));
    HalfSummary {
        section_name: section_name.to_string(),
        score,
        par,
        putts,
        relative: score.saturating_sub(par),
    }
}

/// First and second half by play order, labelled from the round's half data.
#[must_use]
pub fn halves(round: &Round, holes: &[&Hole]) -> (HalfSummary, HalfSummary) {
    let (first, second): (Vec<&Hole>, Vec<&Hole>) =
        holes.iter().copied().partition(|h| h.half() == Half::First);
    (
        summarize(section_name(round, 1), &first),
        summarize(section_name(round, 10), &second),
    )
}

#[must_use]
pub fn group_by_par<'a>(holes: &[&'a Hole]) -> Vec<(i32, Vec<&'a Hole>)> {
    let mut grouped: HashMap<i32, Vec<&'a Hole>, RandomState> = HashMap::default();
    for &hole in holes {
        grouped.entry(hole.par).or_default().push(hole);
    }

    let mut sorted: Vec<(i32, Vec<&'a Hole>)> = grouped.into_iter().collect();
    sorted.sort_by_key(|(par, _)| *par);
    sorted
}

/// Only called for a non-empty group, so the averages always exist.
fn par_stats(par: i32, holes: &[&Hole]) -> ParStats {
    debug_assert!(!holes.is_empty(), "par {par} group is empty");
    let count = holes.len() as i64;
    let score: i64 = holes.iter().map(|h| i64::from(h.strokes())).sum();
    let par_sum: i64 = holes.iter().map(|h| i64::from(h.par)).sum();
    let putts: i64 = holes.iter().map(|h| i64::from(h.putts_or_zero())).sum();
    let avg = |sum: i64| round_ratio(sum, count, 2).unwrap_or_default();

    ParStats {
        par,
        count: holes.len(),
        avg_score: avg(score),
        avg_relative: avg(score - par_sum),
        avg_putts: avg(putts),
    }
}

/// Stats for par 3, 4 and 5, in that order. Missing pars get a zero-count entry.
#[must_use]
pub fn par_types(holes: &[&Hole]) -> [ParStats; 3] {
    let grouped = group_by_par(holes);
    [3, 4, 5].map(|par| {
        grouped
            .iter()
            .find(|(p, _)| *p == par)
            .map_or_else(|| ParStats::empty(par), |(_, hs)| par_stats(par, hs))
    })
}

/// Six fixed three-hole zones by position in play order.
#[must_use]
pub fn zones(holes: &[&Hole], thresholds: &ZoneThresholds) -> Vec<ZoneStats> {
    (0..ZONE_COUNT)
        .map(|i| {
            let start = i * HOLES_PER_ZONE;
            let end = (start + HOLES_PER_ZONE).min(holes.len());
            let slice = holes.get(start..end).unwrap_or(&[]);
            let total_score = saturating_sum(slice.iter().map(|h| h.strokes()));
            let par = saturating_sum(slice.iter().map(|h| h.par));
            let relative_score = total_score.saturating_sub(par);
            ZoneStats {
                id: (i + 1) as u8,
                label: format!("H{}-{}", start + 1, start + HOLES_PER_ZONE),
                total_score,
                relative_score,
                trend: ZoneTrend::classify(relative_score, thresholds),
            }
        })
        .collect()
}
