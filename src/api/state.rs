use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::time::{sleep, timeout, Instant};
use tonic::Status;

use crate::api::error::ApiError;
use crate::api::respond::classify;
use crate::downstream::{CallTimeouts, CoreClient, CoreMethod};

/// Shared, read-only handler state plus the in-flight operation counter.
pub struct AppState<C> {
    pub core: Arc<C>,
    pub operations: OperationCounter,
    pub timeouts: CallTimeouts,
}

impl<C> Clone for AppState<C> {
    fn clone(&self) -> Self {
        Self {
            core: Arc::clone(&self.core),
            operations: self.operations.clone(),
            timeouts: self.timeouts,
        }
    }
}

impl<C: CoreClient> AppState<C> {
    pub fn new(core: C, timeouts: CallTimeouts) -> Self {
        Self {
            core: Arc::new(core),
            operations: OperationCounter::default(),
            timeouts,
        }
    }

    /// Perform the single downstream call of a request.
    ///
    /// The call is bounded by the method's budget and never retried. Dropping
    /// the returned future drops the in-flight RPC with it.
    pub async fn call<M: CoreMethod>(
        &self,
        operation: &'static str,
        request: M::Request,
    ) -> Result<M::Response, ApiError> {
        let budget = self.timeouts.budget(M::BUDGET);
        log::debug!("calling core {} (budget {:?})", M::NAME, budget);

        let status = match timeout(budget, self.core.unary::<M>(request, budget)).await {
            Ok(Ok(response)) => return Ok(response),
            Ok(Err(status)) => status,
            Err(_) => Status::deadline_exceeded(format!(
                "{} did not complete within {:?}",
                M::NAME,
                budget
            )),
        };

        if classify(status.code()).client_safe {
            log::warn!(
                "core {} rejected request: {:?}: {}",
                M::NAME,
                status.code(),
                status.message()
            );
        } else {
            log::error!(
                "core {} failed: {:?}: {}",
                M::NAME,
                status.code(),
                status.message()
            );
        }
        Err(ApiError::downstream(operation, status))
    }
}

/// Process-wide count of handler invocations in progress, drained on
/// shutdown.
#[derive(Debug, Clone, Default)]
pub struct OperationCounter {
    in_flight: Arc<AtomicUsize>,
}

impl OperationCounter {
    /// Count one operation until the returned guard is dropped.
    #[must_use = "the operation ends when the guard is dropped"]
    pub fn begin(&self) -> OperationGuard {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        OperationGuard {
            in_flight: Arc::clone(&self.in_flight),
        }
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Wait until no operation is in flight. Returns `false` if `limit`
    /// elapsed first.
    pub async fn drain(&self, limit: Duration) -> bool {
        let deadline = Instant::now() + limit;
        while self.in_flight() > 0 {
            if Instant::now() >= deadline {
                return false;
            }
            sleep(Duration::from_millis(25)).await;
        }
        true
    }
}

#[derive(Debug)]
pub struct OperationGuard {
    in_flight: Arc<AtomicUsize>,
}

impl Drop for OperationGuard {
    fn drop(&mut self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_releases_on_drop() {
        let counter = OperationCounter::default();
        let first = counter.begin();
        let second = counter.begin();
        assert_eq!(counter.in_flight(), 2);
        drop(first);
        assert_eq!(counter.in_flight(), 1);
        drop(second);
        assert_eq!(counter.in_flight(), 0);
    }

    #[test]
    fn test_guard_releases_on_early_return() {
        fn validate(counter: &OperationCounter, input: &str) -> Result<(), ApiError> {
            let _operation = counter.begin();
            if input.is_empty() {
                return Err(ApiError::missing_fields(&["input"]));
            }
            Ok(())
        }

        let counter = OperationCounter::default();
        assert!(validate(&counter, "").is_err());
        assert!(validate(&counter, "x").is_ok());
        assert_eq!(counter.in_flight(), 0);
    }

    #[tokio::test]
    async fn test_concurrent_guards_balance() {
        let counter = OperationCounter::default();
        let mut tasks = tokio::task::JoinSet::new();
        for i in 0..64u64 {
            let counter = counter.clone();
            tasks.spawn(async move {
                let _operation = counter.begin();
                sleep(Duration::from_millis(i % 5)).await;
            });
        }
        while tasks.join_next().await.is_some() {}
        assert_eq!(counter.in_flight(), 0);
    }

    #[tokio::test]
    async fn test_drain_times_out_while_busy() {
        let counter = OperationCounter::default();
        let guard = counter.begin();
        assert!(!counter.drain(Duration::from_millis(60)).await);
        drop(guard);
        assert!(counter.drain(Duration::from_millis(60)).await);
    }
}
