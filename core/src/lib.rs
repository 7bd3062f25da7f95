pub mod util;
pub mod app;

pub mod error;
pub mod attempt;
pub mod maybe;
pub mod outcome;
pub mod chain;

#[cfg(feature = "serde")]
mod serde_impls;

pub use attempt::{Attempt, Failure};
pub use chain::Chain;
pub use error::UnwrapError;
pub use maybe::Maybe;
pub use outcome::Outcome;
