/// `num / den` rounded half away from zero to `places` decimals.
///
/// Works on the exact fraction so values like 2.675 round the way they read in
/// decimal, not the way their nearest `f64` does. `None` when `den` is zero.
pub(crate) fn round_ratio(num: i64, den: i64, places: u32) -> Option<f64> {
    if den == 0 {
        return None;
    }
    let scale = 10_i64.pow(places);
    let negative = (num < 0) != (den < 0);
    let (num, den) = (num.abs() * scale, den.abs());
    let rounded = (2 * num + den) / (2 * den);
    if rounded == 0 {
        return Some(0.0);
    }
    let signed = if negative { -rounded } else { rounded };
    Some(signed as f64 / scale as f64)
}

/// `part / whole` as a percentage with one decimal.
pub(crate) fn percent(part: usize, whole: usize) -> Option<f64> {
    round_ratio(part as i64 * 100, whole as i64, 1)
}
