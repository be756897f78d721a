use serde::{Deserialize, Serialize};

use super::rounding::percent;
use crate::model::{HOLES_PER_ROUND, Hole, ScoreBucket};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Distribution {
    pub eagle_or_better: usize,
    pub birdie: usize,
    pub par: usize,
    pub bogey: usize,
    pub double_bogey: usize,
    pub triple_bogey_or_worse: usize,
    pub par_keep_rate: f64,
    pub bogey_rate: f64,
}

impl Distribution {
    /// Rates always divide by 18, so holes missing data count against par keeping.
    #[must_use]
    pub fn from_holes(holes: &[&Hole]) -> Self {
        let mut dist = Self {
            eagle_or_better: 0,
            birdie: 0,
            par: 0,
            bogey: 0,
            double_bogey: 0,
            triple_bogey_or_worse: 0,
            par_keep_rate: 0.0,
            bogey_rate: 0.0,
        };
        for hole in holes {
            *dist.count_mut(ScoreBucket::of_hole(hole)) += 1;
        }

        let kept = dist.eagle_or_better + dist.birdie + dist.par;
        dist.par_keep_rate = percent(kept, HOLES_PER_ROUND).unwrap_or(0.0);
        dist.bogey_rate = percent(dist.bogey, HOLES_PER_ROUND).unwrap_or(0.0);
        dist
    }

    #[must_use]
    pub fn count(&self, bucket: ScoreBucket) -> usize {
        match bucket {
            ScoreBucket::EagleOrBetter => self.eagle_or_better,
            ScoreBucket::Birdie => self.birdie,
            ScoreBucket::Par => self.par,
            ScoreBucket::Bogey => self.bogey,
            ScoreBucket::DoubleBogey => self.double_bogey,
            ScoreBucket::TripleOrWorse => self.triple_bogey_or_worse,
        }
    }

    fn count_mut(&mut self, bucket: ScoreBucket) -> &mut usize {
        match bucket {
            ScoreBucket::EagleOrBetter => &mut self.eagle_or_better,
            ScoreBucket::Birdie => &mut self.birdie,
            ScoreBucket::Par => &mut self.par,
            ScoreBucket::Bogey => &mut self.bogey,
            ScoreBucket::DoubleBogey => &mut self.double_bogey,
            ScoreBucket::TripleOrWorse => &mut self.triple_bogey_or_worse,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        ScoreBucket::ALL.iter().map(|b| self.count(*b)).sum()
    }

    /// Double bogey or worse.
    #[must_use]
    pub fn big_numbers(&self) -> usize {
        self.double_bogey + self.triple_bogey_or_worse
    }
}
