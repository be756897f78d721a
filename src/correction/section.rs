use crate::model::{Half, Round};

/// Section label for the half containing `play_order`.
///
/// Uses the stored half data when present, otherwise "OUT" for the first half
/// and "IN" for the second. Display numbers play no part.
#[must_use]
pub fn section_name(round: &Round, play_order: u8) -> &str {
    let half = Half::of(play_order);
    match round.half_scores() {
        Some(halves) => &halves.get(half).section_name,
        None => half.default_section_name(),
    }
}
