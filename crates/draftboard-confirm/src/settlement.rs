//! Single-use settlement handle and the eventual value it completes
//!
//! A [`Settlement`] and its [`Confirmation`] are created together. The
//! coordinator keeps the settlement; the caller awaits the confirmation.
//!
//! Settling is one-shot. A second `settle` does nothing and returns `false`.
//! Dropping a settlement without settling it orphans the confirmation, which
//! then stays pending forever instead of resolving to a made-up answer.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::sync::oneshot;

/// Create a linked settlement handle and eventual value
pub fn settlement() -> (Settlement, Confirmation) {
    let (tx, rx) = oneshot::channel();
    (
        Settlement { tx: Some(tx) },
        Confirmation {
            rx,
            outcome: None,
            orphaned: false,
        },
    )
}

/// Write side of a pending confirmation
#[derive(Debug)]
pub struct Settlement {
    tx: Option<oneshot::Sender<bool>>,
}

impl Settlement {
    /// Settle the linked confirmation.
    ///
    /// Returns `true` if this call performed the settlement. The caller may
    /// already have dropped its [`Confirmation`]; that still counts.
    pub fn settle(&mut self, confirmed: bool) -> bool {
        match self.tx.take() {
            Some(tx) => {
                // Receiver gone means nobody is waiting any more
                let _ = tx.send(confirmed);
                true
            }
            None => false,
        }
    }

    pub fn is_settled(&self) -> bool {
        self.tx.is_none()
    }
}

/// Eventual result of a confirmation request.
///
/// Resolves to `true` when the user confirms and `false` on cancel or
/// dismissal. A confirmation whose settlement was abandoned never resolves.
#[derive(Debug)]
pub struct Confirmation {
    rx: oneshot::Receiver<bool>,
    outcome: Option<bool>,
    orphaned: bool,
}

impl Confirmation {
    /// Non-blocking peek at the outcome.
    ///
    /// Returns `None` while the request is pending, including when it has
    /// been orphaned.
    pub fn try_outcome(&mut self) -> Option<bool> {
        if self.outcome.is_none() && !self.orphaned {
            match self.rx.try_recv() {
                Ok(confirmed) => self.outcome = Some(confirmed),
                Err(oneshot::error::TryRecvError::Closed) => self.orphaned = true,
                Err(oneshot::error::TryRecvError::Empty) => {}
            }
        }
        self.outcome
    }
}

impl Future for Confirmation {
    type Output = bool;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<bool> {
        if let Some(confirmed) = self.outcome {
            return Poll::Ready(confirmed);
        }
        if self.orphaned {
            return Poll::Pending;
        }

        match Pin::new(&mut self.rx).poll(cx) {
            Poll::Ready(Ok(confirmed)) => {
                self.outcome = Some(confirmed);
                Poll::Ready(confirmed)
            }
            Poll::Ready(Err(_)) => {
                // Settlement dropped unsettled: superseded by a newer request
                self.orphaned = true;
                Poll::Pending
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_settle_true() {
        let (mut settlement, confirmation) = settlement();
        assert!(settlement.settle(true));
        assert!(confirmation.await);
    }

    #[tokio::test]
    async fn test_second_settle_is_noop() {
        let (mut settlement, confirmation) = settlement();
        assert!(settlement.settle(false));
        assert!(!settlement.settle(true));
        assert!(settlement.is_settled());
        assert!(!confirmation.await);
    }

    #[test]
    fn test_settle_after_receiver_dropped() {
        let (mut settlement, confirmation) = settlement();
        drop(confirmation);
        assert!(settlement.settle(true));
    }

    #[test]
    fn test_try_outcome() {
        let (mut settlement, mut confirmation) = settlement();
        assert_eq!(confirmation.try_outcome(), None);
        settlement.settle(true);
        assert_eq!(confirmation.try_outcome(), Some(true));
        // Cached after the first read
        assert_eq!(confirmation.try_outcome(), Some(true));
    }

    #[tokio::test]
    async fn test_orphaned_never_resolves() {
        let (settlement, mut confirmation) = settlement();
        drop(settlement);

        assert_eq!(confirmation.try_outcome(), None);
        let waited = tokio::time::timeout(Duration::from_millis(50), confirmation).await;
        assert!(waited.is_err());
    }
}
