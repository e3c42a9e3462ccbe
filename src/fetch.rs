use crate::error::{Error, Result};
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Tracks the in-flight fetch of a single view. Starting a new fetch cancels
/// the previous one, so a superseded response can never overwrite state.
#[derive(Debug, Default)]
pub struct LatestFetch {
    current: Option<CancellationToken>,
}

impl LatestFetch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancels any in-flight fetch and hands out the token for the next one.
    pub fn begin(&mut self) -> CancellationToken {
        self.cancel();
        let token = CancellationToken::new();
        self.current = Some(token.clone());
        token
    }

    pub fn cancel(&mut self) {
        if let Some(previous) = self.current.take() {
            previous.cancel();
        }
    }
}

impl Drop for LatestFetch {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Races a fetch against its cancellation token. Cancellation drops the
/// future, aborting the underlying request, and yields `Error::Cancelled`;
/// callers decide whether to swallow it.
pub async fn abortable<T>(
    token: &CancellationToken,
    fut: impl Future<Output = Result<T>>,
) -> Result<T> {
    if token.is_cancelled() {
        return Err(Error::Cancelled);
    }
    tokio::select! {
        _ = token.cancelled() => Err(Error::Cancelled),
        result = fut => result,
    }
}

/// Coalesces rapid triggers (keystrokes) into one. `trigger` resolves to
/// `true` only for the latest call once the quiet interval has elapsed.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    generation: Arc<AtomicU64>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub async fn trigger(&self) -> bool {
        let mine = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::time::sleep(self.delay).await;
        self.generation.load(Ordering::SeqCst) == mine
    }
}
