pub mod narrative;
pub mod prompt;

use std::fmt;

pub use narrative::render;
pub use prompt::{GroundingPayload, compose_prompt};

/// `+3`, `0`, `-2`: positive values carry an explicit sign.
pub(crate) struct Signed<T>(pub T);

impl<T: fmt::Display + PartialOrd + Default> fmt::Display for Signed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 > T::default() {
            write!(f, "+{}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}
