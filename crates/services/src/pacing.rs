//! The wait capability behind every artificial delay.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

/// Suspends the caller for a fixed duration.
#[async_trait]
pub trait Pacer: Send + Sync {
    async fn wait(&self, duration: Duration);
}

/// Wall-clock pacing backed by `tokio::time::sleep`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioPacer;

#[async_trait]
impl Pacer for TokioPacer {
    async fn wait(&self, duration: Duration) {
        if duration.is_zero() {
            tokio::task::yield_now().await;
            return;
        }
        tokio::time::sleep(duration).await;
    }
}

/// Returns immediately and remembers every requested wait.
#[derive(Debug, Clone, Default)]
pub struct RecordingPacer {
    waits: Arc<Mutex<Vec<Duration>>>,
}

impl RecordingPacer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits requested so far, in order.
    #[must_use]
    pub fn waits(&self) -> Vec<Duration> {
        self.waits
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn total(&self) -> Duration {
        self.waits().into_iter().sum()
    }
}

#[async_trait]
impl Pacer for RecordingPacer {
    async fn wait(&self, duration: Duration) {
        if let Ok(mut guard) = self.waits.lock() {
            guard.push(duration);
        }
    }
}
