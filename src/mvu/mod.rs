pub mod correction;
pub mod runtime;

pub use correction::{CorrectionModel, Effect, Msg, run_effect, update};
pub use runtime::{dispatch, run_session};
