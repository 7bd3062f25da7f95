use crate::error::UnwrapError;
use crate::outcome::Outcome;

/// A value or nothing.
///
/// Every combinator consumes `self` and returns a new `Maybe`; a `Maybe` held by one owner is never changed by
/// another owner's combinator calls.
#[derive(Default, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
pub enum Maybe<T> {
  Some(T),
  #[default]
  None,
}

impl<T> Maybe<T> {
  #[inline]
  pub const fn some(value: T) -> Self { Self::Some(value) }
  #[inline]
  pub const fn none() -> Self { Self::None }


  #[inline]
  pub const fn is_some(&self) -> bool { matches!(self, Self::Some(_)) }
  #[inline]
  pub const fn is_none(&self) -> bool { !self.is_some() }

  #[inline]
  pub const fn as_ref(&self) -> Maybe<&T> {
    match self {
      Self::Some(value) => Maybe::Some(value),
      Self::None => Maybe::None,
    }
  }


  /// Maps the value with `f` if present. `f` is not invoked when absent.
  #[inline]
  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Maybe<U> {
    match self {
      Self::Some(value) => Maybe::Some(f(value)),
      Self::None => Maybe::None,
    }
  }

  /// Maps the value with `f` if present, becoming absent when `f` returns `None`. `f` is not invoked when absent.
  #[inline]
  pub fn map_nullable<U>(self, f: impl FnOnce(T) -> Option<U>) -> Maybe<U> {
    self.and_then(|value| f(value).into())
  }

  #[inline]
  pub fn and_then<U>(self, f: impl FnOnce(T) -> Maybe<U>) -> Maybe<U> {
    match self {
      Self::Some(value) => f(value),
      Self::None => Maybe::None,
    }
  }

  /// Keeps the value only if `predicate` holds for it. `predicate` is not invoked when absent.
  #[inline]
  pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
    match self {
      Self::Some(value) => if predicate(&value) { Self::Some(value) } else { Self::None },
      Self::None => Self::None,
    }
  }

  /// Returns `self` if present, `fallback` otherwise.
  #[inline]
  pub fn or(self, fallback: Self) -> Self {
    match self {
      v @ Self::Some(_) => v,
      Self::None => fallback,
    }
  }
  #[inline]
  pub fn or_else(self, f: impl FnOnce() -> Self) -> Self {
    match self {
      v @ Self::Some(_) => v,
      Self::None => f(),
    }
  }


  /// Returns the contained value.
  ///
  /// # Panics
  ///
  /// Panics with [`UnwrapError::None`] when absent.
  #[inline]
  #[track_caller]
  pub fn unwrap(self) -> T {
    match self.try_unwrap() {
      Ok(value) => value,
      Err(e) => panic!("{}", e),
    }
  }
  #[inline]
  pub fn try_unwrap(self) -> Result<T, UnwrapError> {
    match self {
      Self::Some(value) => Ok(value),
      Self::None => Err(UnwrapError::None),
    }
  }

  #[inline]
  pub fn unwrap_or(self, default: T) -> T {
    match self {
      Self::Some(value) => value,
      Self::None => default,
    }
  }
  #[inline]
  pub fn unwrap_or_else(self, f: impl FnOnce() -> T) -> T {
    match self {
      Self::Some(value) => value,
      Self::None => f(),
    }
  }
  #[inline]
  pub fn unwrap_or_default(self) -> T where T: Default {
    self.unwrap_or_else(T::default)
  }


  #[inline]
  pub fn ok_or<E>(self, error: E) -> Outcome<T, E> {
    match self {
      Self::Some(value) => Outcome::Ok(value),
      Self::None => Outcome::Err(error),
    }
  }

  #[inline]
  pub fn into_option(self) -> Option<T> { self.into() }
}

impl<T> From<Option<T>> for Maybe<T> {
  #[inline]
  fn from(value: Option<T>) -> Self {
    match value {
      Some(value) => Self::Some(value),
      None => Self::None,
    }
  }
}
impl<T> From<Maybe<T>> for Option<T> {
  #[inline]
  fn from(maybe: Maybe<T>) -> Self {
    match maybe {
      Maybe::Some(value) => Some(value),
      Maybe::None => None,
    }
  }
}
