use std::any::type_name;
use std::fmt;
use std::future::Future;
use std::marker::PhantomData;

use futures::future::ready;
use tracing::{debug, error, trace};

use crate::attempt::{Attempt, Failure};
use crate::outcome::Outcome;
use crate::util::maybe_send::{BoxAny, BoxFnOnce, BoxFuture, MaybeSend, MaybeSendFuture};

type Step = BoxFnOnce<'static, BoxAny, BoxFuture<'static, Result<BoxAny, Failure>>>;

/// A deferred pipeline of steps over the value of an [`Outcome`].
///
/// Steps are queued with [`map_async`](Self::map_async) and [`map_sync`](Self::map_sync), but nothing runs until
/// [`collect`](Self::collect) is awaited. Steps then run one after the other in the order they were queued, each
/// one completing before the next starts. The first step that produces nothing or fails stops the chain; later
/// steps are never invoked.
///
/// Steps of different types are stored type-erased. Each step owns the conversion of its input from, and its
/// output into, the erased representation, so the types at every call site are checked statically.
pub struct Chain<T, E> {
  seed: Outcome<BoxAny, E>,
  steps: Vec<Step>,
  _output: PhantomData<fn() -> T>,
}

impl<T: MaybeSend + 'static, E> Chain<T, E> {
  /// Creates a chain without steps, seeded with `seed`.
  pub fn new(seed: Outcome<T, E>) -> Self {
    Self { seed: seed.map(erase), steps: Vec::new(), _output: PhantomData }
  }

  /// Queues asynchronous step `f`. When run, its output is awaited; an absent or failed output stops the chain.
  pub fn map_async<T2, A, F>(mut self, f: impl FnOnce(T) -> F + MaybeSend + 'static) -> Chain<T2, E> where
    T2: MaybeSend + 'static,
    A: Attempt<Value=T2> + MaybeSend + 'static,
    F: Future<Output=A> + MaybeSend + 'static,
  {
    self.steps.push(Box::new(move |input: BoxAny| {
      async move {
        let input = restore::<T>(input)?;
        f(input).await.attempt().map(erase)
      }.boxed_maybe_send()
    }));
    self.retype()
  }

  /// Queues synchronous step `f`. When run, it is treated as an asynchronous step that is already complete.
  pub fn map_sync<T2, A>(mut self, f: impl FnOnce(T) -> A + MaybeSend + 'static) -> Chain<T2, E> where
    T2: MaybeSend + 'static,
    A: Attempt<Value=T2>,
  {
    self.steps.push(Box::new(move |input: BoxAny| {
      let output = restore::<T>(input).and_then(|input| f(input).attempt().map(erase));
      ready(output).boxed_maybe_send()
    }));
    self.retype()
  }

  /// Runs all queued steps in order and returns the final value, or `Err(fallback)` if the seed was an error or any
  /// step produced nothing or failed.
  ///
  /// `fallback` replaces every error the chain could have seen, including the seed's. Discarded failures are logged
  /// at debug level.
  pub async fn collect<E2>(self, fallback: E2) -> Outcome<T, E2> {
    let Self { seed, steps, .. } = self;
    let total = steps.len();

    let mut current = match seed {
      Outcome::Ok(value) => value,
      Outcome::Err(_seed_error) => {
        for index in 0..total {
          trace!(index, total, "skipping chain step; chain was seeded with an error");
        }
        return Outcome::Err(fallback);
      }
    };

    for (index, step) in steps.into_iter().enumerate() {
      trace!(index, total, "running chain step");
      match step(current).await {
        Ok(output) => current = output,
        Err(cause) => {
          debug!(index, total, %cause, "chain step failed; skipping remaining steps and substituting fallback error");
          return Outcome::Err(fallback);
        }
      }
    }

    match restore::<T>(current) {
      Ok(value) => Outcome::Ok(value),
      Err(cause) => {
        error!(%cause, "chain produced a value of an unexpected type; substituting fallback error");
        Outcome::Err(fallback)
      }
    }
  }
}

impl<T, E> Chain<T, E> {
  /// Number of queued steps.
  #[inline]
  pub fn len(&self) -> usize { self.steps.len() }

  #[inline]
  pub fn is_empty(&self) -> bool { self.steps.is_empty() }

  #[inline]
  fn retype<T2>(self) -> Chain<T2, E> {
    Chain { seed: self.seed, steps: self.steps, _output: PhantomData }
  }
}

impl<T, E: fmt::Debug> fmt::Debug for Chain<T, E> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Chain")
      .field("seed", &self.seed.as_ref().map(|_| type_name::<T>()))
      .field("steps", &self.steps.len())
      .finish()
  }
}

impl<T: MaybeSend + 'static, E> From<Outcome<T, E>> for Chain<T, E> {
  #[inline]
  fn from(seed: Outcome<T, E>) -> Self { Self::new(seed) }
}

#[inline]
fn erase<T: MaybeSend + 'static>(value: T) -> BoxAny {
  Box::new(value)
}

#[inline]
fn restore<T: 'static>(value: BoxAny) -> Result<T, Failure> {
  value.downcast::<T>()
    .map(|value| *value)
    .map_err(|_| Failure::Error(format!("expected chain value of type `{}`", type_name::<T>())))
}


#[cfg(test)]
mod tests {
  use std::sync::{Arc, Mutex};
  use std::sync::atomic::{AtomicUsize, Ordering};
  use std::time::Duration;

  use super::*;

  #[derive(Clone, Eq, PartialEq, Debug)]
  struct ApiFailed;

  async fn wait(millis: u64) {
    tokio::time::sleep(Duration::from_millis(millis)).await;
  }

  #[tokio::test]
  async fn runs_async_steps() {
    let outcome = Outcome::<_, ()>::ok(123)
      .map_async(|_| async { Some(true) })
      .map_async(|v| async move {
        wait(20).await;
        Some(v.to_string())
      })
      .map_async(|s| async move {
        wait(5).await;
        Some(s.len())
      })
      .collect(ApiFailed)
      .await;
    assert_eq!(outcome, Outcome::Ok(4));
  }

  #[tokio::test]
  async fn mixes_sync_and_async_steps() {
    let chain = Outcome::<_, ()>::ok("which string?")
      .map_async(|v| async move {
        wait(5).await;
        Some(v.len())
      })
      .map_sync(|n| u8::try_from(n))
      .map_sync(|n| Some(n * 2));
    assert_eq!(chain.len(), 3);
    assert_eq!(chain.collect(ApiFailed).await, Outcome::Ok(26));
  }

  #[tokio::test]
  async fn short_circuits_on_first_failure() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let (c1, c2, c3) = (calls.clone(), calls.clone(), calls.clone());
    let outcome = Outcome::<_, ()>::ok(1)
      .map_async(move |v| async move {
        c1.lock().unwrap().push(1);
        Some(v + 1)
      })
      .map_async(move |_| async move {
        c2.lock().unwrap().push(2);
        Err::<i32, _>("step failed")
      })
      .map_async(move |v| async move {
        c3.lock().unwrap().push(3);
        Some(v + 1)
      })
      .collect(ApiFailed)
      .await;
    assert_eq!(outcome, Outcome::Err(ApiFailed));
    assert_eq!(*calls.lock().unwrap(), vec![1, 2]);
  }

  #[tokio::test]
  async fn absent_step_output_becomes_fallback() {
    let outcome = Outcome::<_, ()>::ok(3)
      .map_sync(|v| if v > 2 { None } else { Some(v) })
      .collect("too large")
      .await;
    assert_eq!(outcome, Outcome::Err("too large"));
  }

  #[tokio::test]
  async fn runs_steps_in_order_without_racing() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let (l1, l2, l3) = (log.clone(), log.clone(), log.clone());
    let outcome = Outcome::<_, ()>::ok(())
      .map_async(move |_| async move {
        wait(30).await;
        l1.lock().unwrap().push("slow");
        Some(1)
      })
      .map_async(move |n| async move {
        l2.lock().unwrap().push("fast");
        Some(n + 1)
      })
      .map_async(move |n| async move {
        wait(10).await;
        l3.lock().unwrap().push("medium");
        Some(n + 1)
      })
      .collect(ApiFailed)
      .await;
    assert_eq!(outcome, Outcome::Ok(3));
    assert_eq!(*log.lock().unwrap(), vec!["slow", "fast", "medium"]);
  }

  #[tokio::test]
  async fn seeded_error_skips_every_step() {
    let calls = Arc::new(AtomicUsize::new(0));
    let (c1, c2) = (calls.clone(), calls.clone());
    let outcome = Outcome::<i32, _>::err("seed failed")
      .map_async(move |v| async move {
        c1.fetch_add(1, Ordering::SeqCst);
        Some(v + 1)
      })
      .map_sync(move |v| {
        c2.fetch_add(1, Ordering::SeqCst);
        Some(v + 1)
      })
      .collect(ApiFailed)
      .await;
    assert_eq!(outcome, Outcome::Err(ApiFailed));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
  }

  #[tokio::test]
  async fn nothing_runs_until_collected() {
    let calls = Arc::new(AtomicUsize::new(0));
    let c1 = calls.clone();
    let chain = Outcome::<_, ()>::ok(1).map_sync(move |v| {
      c1.fetch_add(1, Ordering::SeqCst);
      Some(v)
    });
    wait(5).await;
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(chain.collect(ApiFailed).await, Outcome::Ok(1));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
  }

  #[tokio::test]
  async fn empty_chain_returns_seed_value() {
    let chain = Chain::<_, ()>::new(Outcome::ok(5));
    assert!(chain.is_empty());
    assert_eq!(chain.collect(ApiFailed).await, Outcome::Ok(5));
  }

  #[test]
  fn chain_is_send_on_native() {
    fn assert_send<S: Send>(_: &S) {}
    let chain = Outcome::<_, ()>::ok(1).map_async(|v| async move { Some(v + 1) });
    assert_send(&chain);
    assert_send(&chain.collect(ApiFailed));
  }
}
