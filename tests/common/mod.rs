#![allow(dead_code)]

use rusty_scorecard::model::{Flag, Hole, Round};

pub const SAMPLE_PARS: [i32; 18] = [4, 5, 3, 4, 4, 3, 4, 5, 4, 4, 4, 3, 5, 4, 4, 3, 4, 5];
pub const SAMPLE_SCORES: [i32; 18] = [5, 6, 3, 4, 4, 4, 6, 5, 5, 5, 4, 4, 5, 7, 5, 2, 6, 5];
pub const SAMPLE_PUTTS: [i32; 18] = [2, 2, 1, 2, 2, 2, 3, 2, 2, 2, 1, 2, 2, 3, 2, 1, 2, 2];

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// 18 holes of the same par and score, display numbers matching play order.
pub fn uniform_round(par: i32, score: i32, putts: Option<i32>) -> Round {
    let holes = (1..=18)
        .map(|po| Hole::new(po, po, par, Some(score)).with_putts(putts))
        .collect();
    Round::new("Uniform Links", "2026-05-01", holes).expect("18 distinct play orders")
}

/// A back-nine start at Sakura Hills: played 10-18 first, then 1-9, sections West/East.
///
/// 85 strokes on par 72 with 35 putts, 42 out and 43 back.
pub fn sample_round() -> Round {
    let holes = (0..18)
        .map(|i| {
            let play_order = (i + 1) as u8;
            let display_number = if play_order <= 9 {
                play_order + 9
            } else {
                play_order - 9
            };
            let fairway = match play_order {
                1 | 3 | 4 | 5 | 9 => Flag::Yes,
                2 | 7 => Flag::No,
                _ => Flag::Unknown,
            };
            let gir = match play_order {
                3 | 4 | 16 => Flag::Yes,
                5 => Flag::No,
                _ => Flag::Unknown,
            };
            Hole::new(play_order, display_number, SAMPLE_PARS[i], Some(SAMPLE_SCORES[i]))
                .with_putts(Some(SAMPLE_PUTTS[i]))
                .with_accuracy(fairway, gir)
        })
        .collect();
    Round::new("Sakura Hills Country Club", "2026-09-14", holes)
        .expect("18 distinct play orders")
        .with_section_names("West", "East")
}

pub fn sum_of_scores(round: &Round) -> i32 {
    round.holes().iter().map(|h| h.score.unwrap_or(0)).sum()
}
