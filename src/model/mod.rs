pub mod record;
pub mod score;
pub mod types;

pub use record::*;
pub use score::*;
pub use types::*;
