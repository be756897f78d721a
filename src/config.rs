use serde::{Deserialize, Serialize};

use crate::error::ScorecardError;

/// Plausibility limits a hole must satisfy before a round can be committed.
///
/// These are not golf rules. A value outside them is most likely a misread card.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct ValidationBounds {
    pub score_min: i32,
    pub score_max: i32,
    pub putts_min: i32,
    pub putts_max: i32,
}

impl Default for ValidationBounds {
    fn default() -> Self {
        Self {
            score_min: 1,
            score_max: 15,
            putts_min: 0,
            putts_max: 7,
        }
    }
}

/// Relative-score cutoffs for the three-hole trend labels.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct ZoneThresholds {
    pub steady_max: i32,
    pub standard_max: i32,
}

impl Default for ZoneThresholds {
    fn default() -> Self {
        Self {
            steady_max: 1,
            standard_max: 3,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AnalysisConfig {
    pub bounds: ValidationBounds,
    pub zones: ZoneThresholds,
}

impl AnalysisConfig {
    /// Parse an `[analysis]`-style TOML table body.
    ///
    /// # Errors
    ///
    /// Returns `ScorecardError::Config` when the TOML is invalid or the
    /// resulting limits are inverted.
    pub fn from_toml_str(contents: &str) -> Result<Self, ScorecardError> {
        let config: Self = toml::from_str(contents)?;
        config.check()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns `ScorecardError::Config` if a minimum exceeds its maximum.
    pub fn check(&self) -> Result<(), ScorecardError> {
        if self.bounds.score_min > self.bounds.score_max {
            return Err(ScorecardError::Config(format!(
                "score_min {} is greater than score_max {}",
                self.bounds.score_min, self.bounds.score_max
            )));
        }
        if self.bounds.putts_min > self.bounds.putts_max {
            return Err(ScorecardError::Config(format!(
                "putts_min {} is greater than putts_max {}",
                self.bounds.putts_min, self.bounds.putts_max
            )));
        }
        if self.zones.steady_max > self.zones.standard_max {
            return Err(ScorecardError::Config(format!(
                "steady_max {} is greater than standard_max {}",
                self.zones.steady_max, self.zones.standard_max
            )));
        }
        Ok(())
    }
}
