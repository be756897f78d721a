use serde::{Deserialize, Serialize};
use std::fmt;

use super::types::Hole;

/// Outcome class of a single hole, by strokes relative to par.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "PascalCase")]
pub enum ScoreBucket {
    EagleOrBetter,
    Birdie,
    Par,
    Bogey,
    DoubleBogey,
    TripleOrWorse,
}

impl ScoreBucket {
    pub const ALL: [ScoreBucket; 6] = [
        Self::EagleOrBetter,
        Self::Birdie,
        Self::Par,
        Self::Bogey,
        Self::DoubleBogey,
        Self::TripleOrWorse,
    ];

    #[must_use]
    pub fn from_relative(relative: i32) -> Self {
        match relative {
            i32::MIN..=-2 => Self::EagleOrBetter,
            -1 => Self::Birdie,
            0 => Self::Par,
            1 => Self::Bogey,
            2 => Self::DoubleBogey,
            _ => Self::TripleOrWorse,
        }
    }

    /// A hole with no score lands in the worst bucket.
    #[must_use]
    pub fn of_hole(hole: &Hole) -> Self {
        hole.relative_score
            .map_or(Self::TripleOrWorse, Self::from_relative)
    }

    /// Par or better.
    #[must_use]
    pub fn keeps_par(self) -> bool {
        matches!(self, Self::EagleOrBetter | Self::Birdie | Self::Par)
    }
}

impl From<i32> for ScoreBucket {
    fn from(value: i32) -> Self {
        Self::from_relative(value)
    }
}

impl fmt::Display for ScoreBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ScoreBucket::EagleOrBetter => "eagle or better",
            ScoreBucket::Birdie => "birdie",
            ScoreBucket::Par => "par",
            ScoreBucket::Bogey => "bogey",
            ScoreBucket::DoubleBogey => "double bogey",
            ScoreBucket::TripleOrWorse => "triple bogey or worse",
        };
        write!(f, "{s}")
    }
}
