use std::fmt::{Debug, Display};

use crate::maybe::Maybe;
use crate::outcome::Outcome;

/// Why an [`Attempt`] did not produce a value. Only kept around for diagnostics; callers of
/// [`Outcome::from_fn`] and friends only ever see their own fallback error.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum Failure {
  #[error("no value was produced")]
  Absent,
  #[error("{0}")]
  Error(String),
}

/// Something a wrapped fallible function may return: a value, nothing, or an error.
pub trait Attempt {
  type Value;

  fn attempt(self) -> Result<Self::Value, Failure>;
}

impl<T> Attempt for Option<T> {
  type Value = T;

  #[inline]
  fn attempt(self) -> Result<T, Failure> {
    self.ok_or(Failure::Absent)
  }
}

impl<T> Attempt for Maybe<T> {
  type Value = T;

  #[inline]
  fn attempt(self) -> Result<T, Failure> {
    self.into_option().attempt()
  }
}

impl<T, E: Display> Attempt for Result<T, E> {
  type Value = T;

  #[inline]
  fn attempt(self) -> Result<T, Failure> {
    self.map_err(|e| Failure::Error(e.to_string()))
  }
}

impl<T, E: Debug> Attempt for Outcome<T, E> {
  type Value = T;

  #[inline]
  fn attempt(self) -> Result<T, Failure> {
    match self {
      Outcome::Ok(value) => Ok(value),
      Outcome::Err(error) => Err(Failure::Error(format!("{:?}", error))),
    }
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn option_and_maybe_become_absent() {
    assert_eq!(None::<u8>.attempt(), Err(Failure::Absent));
    assert_eq!(Maybe::<u8>::none().attempt(), Err(Failure::Absent));
    assert_eq!(Some(1).attempt(), Ok(1));
  }

  #[test]
  fn errors_keep_their_description() {
    let result: Result<u8, std::num::ParseIntError> = "x".parse::<u8>();
    let Err(Failure::Error(description)) = result.attempt() else { panic!("expected an error failure") };
    assert_eq!(description, "invalid digit found in string");

    let outcome: Outcome<u8, &str> = Outcome::err("nope");
    assert_eq!(outcome.attempt(), Err(Failure::Error("\"nope\"".to_string())));
  }
}
