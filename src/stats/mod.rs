//! Statistics engine: a pure function from a round to an analysis snapshot.

pub mod accuracy;
pub mod aggregators;
pub mod distribution;
pub(crate) mod rounding;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::AnalysisConfig;
use crate::model::types::saturating_sum;
use crate::model::{Hole, Round};

pub use accuracy::{AccuracyRates, Rate};
pub use aggregators::{HalfSummary, ParStats, ZoneStats, ZoneTrend};
pub use distribution::Distribution;

pub const ZONE_COUNT: usize = 6;
pub const HOLES_PER_ZONE: usize = 3;

/// Read-only statistics for one round. Never mutated after `compute` returns it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AnalysisStats {
    pub total_score: i32,
    pub total_par: i32,
    pub total_relative_score: i32,
    pub total_putts: i32,
    pub first_half: HalfSummary,
    pub second_half: HalfSummary,
    /// Second half strokes minus first half strokes; positive means the back half was worse.
    pub second_half_delta: i32,
    pub par3: ParStats,
    pub par4: ParStats,
    pub par5: ParStats,
    pub zones: Vec<ZoneStats>,
    pub distribution: Distribution,
    pub stats_accuracy: AccuracyRates,
}

/// Derive the full statistics snapshot. Deterministic and total.
#[must_use]
pub fn compute(round: &Round, config: &AnalysisConfig) -> AnalysisStats {
    let mut holes: Vec<&Hole> = round.holes().iter().collect();
    holes.sort_by_key(|h| h.play_order);

    let total_score = saturating_sum(holes.iter().map(|h| h.strokes()));
    let total_par = saturating_sum(holes.iter().map(|h| h.par));
    let total_putts = saturating_sum(holes.iter().map(|h| h.putts_or_zero()));

    let (first_half, second_half) = aggregators::halves(round, &holes);
    let second_half_delta = second_half.score.saturating_sub(first_half.score);
    let [par3, par4, par5] = aggregators::par_types(&holes);

    let stats = AnalysisStats {
        total_score,
        total_par,
        total_relative_score: total_score.saturating_sub(total_par),
        total_putts,
        first_half,
        second_half,
        second_half_delta,
        par3,
        par4,
        par5,
        zones: aggregators::zones(&holes, &config.zones),
        distribution: Distribution::from_holes(&holes),
        stats_accuracy: AccuracyRates::from_holes(&holes),
    };
    debug!(
        "computed stats for '{}': {} ({:+})",
        round.course_name, stats.total_score, stats.total_relative_score
    );
    stats
}
