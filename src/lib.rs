pub mod args;
pub mod config;
pub mod controller;
pub mod correction;
pub mod error;
pub mod extraction;
pub mod model;
pub mod mvu;
pub mod report;
pub mod stats;
pub mod view;

pub use config::AnalysisConfig;
pub use error::ScorecardError;
pub use extraction::parse_extraction;
pub use model::{Flag, HalfData, HalfScores, Hole, HoleField, Round};
pub use stats::{AnalysisStats, compute};
pub use view::render;
