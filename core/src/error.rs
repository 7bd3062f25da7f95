/// Raised when a value is unwrapped out of a container that does not hold one.
///
/// This is a programmer error: [`Maybe::unwrap`](crate::Maybe::unwrap) and
/// [`Outcome::unwrap`](crate::Outcome::unwrap) panic with this error as the message. Use
/// [`Maybe::try_unwrap`](crate::Maybe::try_unwrap) to get it as a value instead.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum UnwrapError {
  #[error("called `unwrap` on an absent value")]
  None,
  #[error("called `unwrap` on a failed outcome: {0}")]
  Err(String),
}
