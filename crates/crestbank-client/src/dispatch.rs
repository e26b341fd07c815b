//! One-shot delivery of request outcomes.
//!
//! Every builder terminal that reaches the network returns a [`Dispatch`]:
//! a handle over exactly one outcome, produced by one spawned unit of work
//! performing one HTTP round trip. The caller never blocks at dispatch
//! time, only when awaiting [`Dispatch::outcome`].

use std::future::Future;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::error::{ApiError, Error, ErrorBatch};

/// The single delivered result: a payload or a non-empty error batch,
/// never both, never neither.
pub type Outcome<T> = Result<T, ErrorBatch>;

/// Handle to one in-flight request.
///
/// Independent dispatches share nothing and complete in any order; callers
/// needing ordering serialize themselves.
#[derive(Debug)]
pub struct Dispatch<T> {
    receiver: oneshot::Receiver<Outcome<T>>,
    task: Option<JoinHandle<()>>,
}

impl<T> Dispatch<T> {
    /// Spawn one unit of work and deliver whatever it produces.
    pub(crate) fn spawn<F>(work: F) -> Self
    where
        T: Send + 'static,
        F: Future<Output = Result<T, ApiError>> + Send + 'static,
    {
        let (sender, receiver) = oneshot::channel();
        let task = tokio::spawn(async move {
            let outcome = work.await.map_err(|err| vec![Error::Api(err)]);
            // the receiver may have been dropped; nothing left to deliver to
            let _ = sender.send(outcome);
        });

        Self {
            receiver,
            task: Some(task),
        }
    }

    /// An already-resolved dispatch, used when validation fails before any
    /// network work is spawned.
    pub(crate) fn ready(outcome: Outcome<T>) -> Self {
        let (sender, receiver) = oneshot::channel();
        let _ = sender.send(outcome);
        Self {
            receiver,
            task: None,
        }
    }

    pub(crate) fn failed(batch: ErrorBatch) -> Self {
        Self::ready(Err(batch))
    }

    /// Await the single outcome of this request.
    ///
    /// If the producing task was aborted (or otherwise dropped its sender),
    /// this resolves with [`ApiError::Aborted`] rather than hanging.
    pub async fn outcome(self) -> Outcome<T> {
        match self.receiver.await {
            Ok(outcome) => outcome,
            Err(_) => Err(vec![Error::Api(ApiError::Aborted)]),
        }
    }

    /// Abort the in-flight request. The outcome resolves with
    /// [`ApiError::Aborted`].
    pub fn abort(&self) {
        if let Some(task) = &self.task {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_spawned_work_delivers_success() {
        let dispatch = Dispatch::spawn(async { Ok(7u32) });
        assert_eq!(dispatch.outcome().await.unwrap(), 7);
    }

    #[tokio::test]
    async fn test_spawned_work_delivers_error_batch() {
        let dispatch: Dispatch<u32> = Dispatch::spawn(async { Err(ApiError::NotFound) });
        let batch = dispatch.outcome().await.unwrap_err();
        assert_eq!(batch.len(), 1);
        assert!(matches!(batch[0], Error::Api(ApiError::NotFound)));
    }

    #[tokio::test]
    async fn test_ready_outcome_resolves_immediately() {
        let dispatch = Dispatch::ready(Ok("payload"));
        assert_eq!(dispatch.outcome().await.unwrap(), "payload");
    }

    #[tokio::test]
    async fn test_aborted_dispatch_still_delivers_an_outcome() {
        let dispatch: Dispatch<u32> = Dispatch::spawn(async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(0)
        });
        dispatch.abort();
        let batch = dispatch.outcome().await.unwrap_err();
        assert!(matches!(batch[0], Error::Api(ApiError::Aborted)));
    }

    #[tokio::test]
    async fn test_concurrent_dispatches_are_independent() {
        let a = Dispatch::spawn(async {
            tokio::time::sleep(Duration::from_millis(20)).await;
            Ok(1u32)
        });
        let b = Dispatch::spawn(async { Ok(2u32) });

        let (ra, rb) = tokio::join!(a.outcome(), b.outcome());
        assert_eq!(ra.unwrap(), 1);
        assert_eq!(rb.unwrap(), 2);
    }
}
