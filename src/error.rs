use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScorecardError {
    #[error("expected 18 holes, found {0}")]
    WrongHoleCount(usize),
    #[error("hole has no play_order")]
    MissingPlayOrder,
    #[error("play_order {0} is outside 1-18")]
    PlayOrderOutOfRange(i64),
    #[error("play_order {0} appears more than once")]
    DuplicatePlayOrder(u8),
    #[error("hole at play_order {0} has no par")]
    MissingPar(u8),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("config error: {0}")]
    Config(String),
    #[error("{0}")]
    Other(String),
}

impl ScorecardError {
    /// True for errors caused by an extraction payload that does not describe a full round.
    #[must_use]
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            Self::WrongHoleCount(_)
                | Self::MissingPlayOrder
                | Self::PlayOrderOutOfRange(_)
                | Self::DuplicatePlayOrder(_)
                | Self::MissingPar(_)
        )
    }
}

impl From<serde_json::Error> for ScorecardError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<toml::de::Error> for ScorecardError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<std::io::Error> for ScorecardError {
    fn from(err: std::io::Error) -> Self {
        Self::Other(err.to_string())
    }
}

impl From<String> for ScorecardError {
    fn from(err: String) -> Self {
        Self::Other(err)
    }
}

impl From<&str> for ScorecardError {
    fn from(err: &str) -> Self {
        Self::Other(err.to_string())
    }
}
