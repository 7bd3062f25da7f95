use std::future::Future;
use std::pin::pin;
use std::time::Duration;

use futures::future::{Either, select};

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
  tokio::time::sleep(duration).await;
}
#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
  gloo_timers::future::sleep(duration).await;
}

/// Races `future` against a timer of `duration`, returning `None` if the timer wins.
///
/// Returning `None` lets a chain step time out: an absent step output collapses into the chain's fallback error.
pub async fn timeout<F: Future>(duration: Duration, future: F) -> Option<F::Output> {
  let future = pin!(future);
  let timer = pin!(sleep(duration));
  match select(future, timer).await {
    Either::Left((output, _)) => Some(output),
    Either::Right(_) => None,
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn completes_before_deadline() {
    let output = timeout(Duration::from_millis(200), async { 7 }).await;
    assert_eq!(output, Some(7));
  }

  #[tokio::test]
  async fn times_out_after_deadline() {
    let output = timeout(Duration::from_millis(5), async {
      sleep(Duration::from_millis(500)).await;
      7
    }).await;
    assert_eq!(output, None);
  }
}
