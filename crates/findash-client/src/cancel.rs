//! Per-request cancellation
//!
//! A [`CancelHandle`] and its [`CancelToken`]s share one flag. Requests made
//! with a token resolve to `Error::Cancelled` as soon as the handle fires,
//! dropping the in-flight HTTP exchange.

use std::sync::Arc;
use tokio::sync::watch;

/// Caller side: fires the cancellation
#[derive(Debug, Clone)]
pub struct CancelHandle {
  tx: Arc<watch::Sender<bool>>,
}

/// Request side: observed by the transport while a request is in flight
#[derive(Debug, Clone)]
pub struct CancelToken {
  rx: watch::Receiver<bool>,
}

impl CancelHandle {
  /// Cancel every request holding a token from this handle. Idempotent.
  pub fn cancel(&self) {
    self.tx.send_replace(true);
  }

  /// Whether `cancel` has been called
  pub fn is_cancelled(&self) -> bool {
    *self.tx.borrow()
  }

  /// Another token observing this handle
  pub fn token(&self) -> CancelToken {
    CancelToken { rx: self.tx.subscribe() }
  }
}

impl CancelToken {
  /// Create a linked handle/token pair
  pub fn new() -> (CancelHandle, CancelToken) {
    let (tx, rx) = watch::channel(false);
    (CancelHandle { tx: Arc::new(tx) }, CancelToken { rx })
  }

  /// Whether the linked handle has fired
  pub fn is_cancelled(&self) -> bool {
    *self.rx.borrow()
  }

  /// Resolves once the linked handle fires.
  ///
  /// Never resolves if every handle is dropped without cancelling.
  pub async fn cancelled(&self) {
    let mut rx = self.rx.clone();
    loop {
      if *rx.borrow_and_update() {
        return;
      }
      if rx.changed().await.is_err() {
        std::future::pending::<()>().await;
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::time::Duration;

  #[tokio::test]
  async fn test_cancel_resolves_waiters() {
    let (handle, token) = CancelToken::new();
    assert!(!token.is_cancelled());

    let waiter = tokio::spawn({
      let token = token.clone();
      async move { token.cancelled().await }
    });

    handle.cancel();
    tokio::time::timeout(Duration::from_secs(1), waiter)
      .await
      .expect("waiter should resolve")
      .expect("waiter task panicked");
    assert!(token.is_cancelled());
    assert!(handle.is_cancelled());
  }

  #[tokio::test]
  async fn test_token_created_after_cancel_is_cancelled() {
    let (handle, _token) = CancelToken::new();
    handle.cancel();
    handle.cancel();

    let late = handle.token();
    assert!(late.is_cancelled());
    tokio::time::timeout(Duration::from_millis(100), late.cancelled())
      .await
      .expect("already-cancelled token resolves immediately");
  }

  #[tokio::test]
  async fn test_dropped_handle_never_cancels() {
    let (handle, token) = CancelToken::new();
    drop(handle);

    let result = tokio::time::timeout(Duration::from_millis(50), token.cancelled()).await;
    assert!(result.is_err());
    assert!(!token.is_cancelled());
  }
}
