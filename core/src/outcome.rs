use std::fmt::Debug;
use std::future::Future;

use tracing::debug;

use crate::attempt::Attempt;
use crate::chain::Chain;
use crate::error::UnwrapError;
use crate::maybe::Maybe;
use crate::util::maybe_send::MaybeSend;

/// A success value or a caller-supplied error value.
///
/// Construct directly with [`ok`](Self::ok) and [`err`](Self::err), or wrap a fallible operation with
/// [`from_fn`](Self::from_fn) or [`from_async_fn`](Self::from_async_fn). Combinators consume `self` and return a new
/// `Outcome`.
#[derive(Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
pub enum Outcome<T, E> {
  Ok(T),
  Err(E),
}

impl<T, E> Outcome<T, E> {
  #[inline]
  pub const fn ok(value: T) -> Self { Self::Ok(value) }
  #[inline]
  pub const fn err(error: E) -> Self { Self::Err(error) }

  /// Invokes `f` once. Becomes `Ok` with its value, or `Err(fallback)` when `f` produced nothing or failed.
  ///
  /// The discarded failure is logged at debug level; it is not part of the returned value.
  pub fn from_fn<A: Attempt<Value=T>>(f: impl FnOnce() -> A, fallback: E) -> Self {
    Self::from_attempt(f(), fallback)
  }

  /// Like [`from_fn`](Self::from_fn), but awaits the future that `f` returns.
  pub async fn from_async_fn<A, F>(f: impl FnOnce() -> F, fallback: E) -> Self where
    F: Future<Output=A>,
    A: Attempt<Value=T>,
  {
    Self::from_attempt(f().await, fallback)
  }

  fn from_attempt(attempt: impl Attempt<Value=T>, fallback: E) -> Self {
    match attempt.attempt() {
      Ok(value) => Self::Ok(value),
      Err(cause) => {
        debug!(%cause, "wrapped operation did not produce a value; substituting fallback error");
        Self::Err(fallback)
      }
    }
  }


  #[inline]
  pub const fn is_ok(&self) -> bool { matches!(self, Self::Ok(_)) }
  #[inline]
  pub const fn is_err(&self) -> bool { !self.is_ok() }

  #[inline]
  pub const fn value(&self) -> Option<&T> {
    match self {
      Self::Ok(value) => Some(value),
      Self::Err(_) => None,
    }
  }
  #[inline]
  pub const fn error(&self) -> Option<&E> {
    match self {
      Self::Ok(_) => None,
      Self::Err(error) => Some(error),
    }
  }

  #[inline]
  pub const fn as_ref(&self) -> Outcome<&T, &E> {
    match self {
      Self::Ok(value) => Outcome::Ok(value),
      Self::Err(error) => Outcome::Err(error),
    }
  }


  /// Returns the success value.
  ///
  /// # Panics
  ///
  /// Panics with [`UnwrapError::Err`] describing the contained error if this is an `Err`.
  #[inline]
  #[track_caller]
  pub fn unwrap(self) -> T where E: Debug {
    match self {
      Self::Ok(value) => value,
      Self::Err(error) => panic!("{}", UnwrapError::Err(format!("{:?}", error))),
    }
  }
  #[inline]
  #[track_caller]
  pub fn expect(self, message: &str) -> T where E: Debug {
    match self {
      Self::Ok(value) => value,
      Self::Err(error) => panic!("{}: {:?}", message, error),
    }
  }
  #[inline]
  #[track_caller]
  pub fn unwrap_err(self) -> E where T: Debug {
    match self {
      Self::Ok(value) => panic!("called `unwrap_err` on a successful outcome: {:?}", value),
      Self::Err(error) => error,
    }
  }

  #[inline]
  pub fn unwrap_or(self, default: T) -> T {
    match self {
      Self::Ok(value) => value,
      Self::Err(_) => default,
    }
  }
  #[inline]
  pub fn unwrap_or_else(self, f: impl FnOnce(E) -> T) -> T {
    match self {
      Self::Ok(value) => value,
      Self::Err(error) => f(error),
    }
  }
  #[inline]
  pub fn unwrap_or_default(self) -> T where T: Default {
    self.unwrap_or_else(|_| T::default())
  }


  /// Maps the success value with `f`. `f` is not invoked on an `Err`, which is passed through unchanged.
  #[inline]
  pub fn map<T2>(self, f: impl FnOnce(T) -> T2) -> Outcome<T2, E> {
    match self {
      Self::Ok(value) => Outcome::Ok(f(value)),
      Self::Err(error) => Outcome::Err(error),
    }
  }

  /// Replaces the error with `new_error`, dropping the old one. An `Ok` is passed through unchanged.
  #[inline]
  pub fn map_error<E2>(self, new_error: E2) -> Outcome<T, E2> {
    match self {
      Self::Ok(value) => Outcome::Ok(value),
      Self::Err(_) => Outcome::Err(new_error),
    }
  }
  #[inline]
  pub fn map_err<E2>(self, f: impl FnOnce(E) -> E2) -> Outcome<T, E2> {
    match self {
      Self::Ok(value) => Outcome::Ok(value),
      Self::Err(error) => Outcome::Err(f(error)),
    }
  }

  #[inline]
  pub fn and_then<T2>(self, f: impl FnOnce(T) -> Outcome<T2, E>) -> Outcome<T2, E> {
    match self {
      Self::Ok(value) => f(value),
      Self::Err(error) => Outcome::Err(error),
    }
  }


  #[inline]
  pub fn ok_value(self) -> Maybe<T> {
    match self {
      Self::Ok(value) => Maybe::Some(value),
      Self::Err(_) => Maybe::None,
    }
  }

  #[inline]
  pub fn into_result(self) -> Result<T, E> { self.into() }
}

impl<T: MaybeSend + 'static, E> Outcome<T, E> {
  /// Starts a deferred [`Chain`] with an asynchronous first step. Nothing runs until the chain is
  /// [collected](Chain::collect).
  #[inline]
  pub fn map_async<T2, A, F>(self, f: impl FnOnce(T) -> F + MaybeSend + 'static) -> Chain<T2, E> where
    T2: MaybeSend + 'static,
    A: Attempt<Value=T2> + MaybeSend + 'static,
    F: Future<Output=A> + MaybeSend + 'static,
  {
    Chain::new(self).map_async(f)
  }

  /// Starts a deferred [`Chain`] with a synchronous first step.
  #[inline]
  pub fn map_sync<T2, A>(self, f: impl FnOnce(T) -> A + MaybeSend + 'static) -> Chain<T2, E> where
    T2: MaybeSend + 'static,
    A: Attempt<Value=T2>,
  {
    Chain::new(self).map_sync(f)
  }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
  #[inline]
  fn from(result: Result<T, E>) -> Self {
    match result {
      Ok(value) => Self::Ok(value),
      Err(error) => Self::Err(error),
    }
  }
}
impl<T, E> From<Outcome<T, E>> for Result<T, E> {
  #[inline]
  fn from(outcome: Outcome<T, E>) -> Self {
    match outcome {
      Outcome::Ok(value) => Ok(value),
      Outcome::Err(error) => Err(error),
    }
  }
}
