use std::fmt;

use super::Signed;
use crate::stats::{AnalysisStats, HalfSummary, ParStats};

pub const NARRATIVE_HEADER: &str = "[Verified round statistics (pre-computed)]";

/// Fixed five-section text block. The report generator is told to treat these
/// numbers as ground truth, so section order and field order never change.
pub struct Narrative<'a>(pub &'a AnalysisStats);

fn write_half(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    holes: &str,
    half: &HalfSummary,
) -> fmt::Result {
    writeln!(
        f,
        "   - {label} [{}] ({holes}): {} ({})",
        half.section_name,
        half.score,
        Signed(half.relative)
    )
}

fn write_par(f: &mut fmt::Formatter<'_>, stats: &ParStats) -> fmt::Result {
    writeln!(
        f,
        "   - Par {} ({} holes): avg {} ({}) / avg putts {}",
        stats.par,
        stats.count,
        stats.avg_score,
        Signed(stats.avg_relative),
        stats.avg_putts
    )
}

impl fmt::Display for Narrative<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = self.0;
        writeln!(f, "{NARRATIVE_HEADER}")?;
        writeln!(
            f,
            "The figures below were computed by the program. Treat them as ground truth in the analysis."
        )?;
        writeln!(f)?;

        writeln!(f, "1. Totals")?;
        writeln!(
            f,
            "   - Total: {} (Par {}, {})",
            stats.total_score,
            stats.total_par,
            Signed(stats.total_relative_score)
        )?;
        writeln!(f, "   - Putts: {}", stats.total_putts)?;
        write_half(f, "First half", "H1-9", &stats.first_half)?;
        write_half(f, "Second half", "H10-18", &stats.second_half)?;
        let delta = stats.second_half_delta;
        match delta {
            d if d > 0 => writeln!(f, "   - Second half vs first: {} strokes worse", Signed(d))?,
            d if d < 0 => writeln!(f, "   - Second half vs first: {} strokes better", d.abs())?,
            _ => writeln!(f, "   - Second half vs first: no change")?,
        }
        writeln!(f)?;

        writeln!(f, "2. Par-type performance")?;
        for par in [&stats.par3, &stats.par4, &stats.par5] {
            write_par(f, par)?;
        }
        writeln!(f)?;

        writeln!(f, "3. Three-hole rhythm")?;
        for zone in &stats.zones {
            writeln!(
                f,
                "   - {}: {} ({})",
                zone.label,
                Signed(zone.relative_score),
                zone.trend
            )?;
        }
        writeln!(f)?;

        let dist = &stats.distribution;
        writeln!(f, "4. Score composition")?;
        writeln!(
            f,
            "   - Par keep rate: {}% (Eagle or better {}, Birdie {}, Par {})",
            dist.par_keep_rate, dist.eagle_or_better, dist.birdie, dist.par
        )?;
        writeln!(f, "   - Bogey rate: {}%", dist.bogey_rate)?;
        writeln!(
            f,
            "   - Big numbers (double bogey or worse): {}",
            dist.big_numbers()
        )?;
        writeln!(f)?;

        let accuracy = &stats.stats_accuracy;
        writeln!(f, "5. Shot accuracy (recorded holes only)")?;
        writeln!(f, "   - Fairway keep rate: {}", accuracy.fairway_keep_rate)?;
        writeln!(f, "   - Green in regulation rate: {}", accuracy.par_on_rate)
    }
}

#[must_use]
pub fn render(stats: &AnalysisStats) -> String {
    Narrative(stats).to_string()
}
