//! Simulated latency for the "AI" widgets.
//!
//! Nothing behind these widgets makes a remote call; the delay only models one.
//! It sits behind a trait so tests (and the service, when the delays are
//! configured to zero) can resolve immediately.

use std::time::Duration;

use async_trait::async_trait;

#[async_trait]
pub trait Latency: Send + Sync {
    /// Completes after the simulated delay. Never fails, never cancels.
    async fn wait(&self);
}

/// Sleeps on the tokio timer.
#[derive(Debug, Clone, Copy)]
pub struct SleepLatency(pub Duration);

impl SleepLatency {
    pub fn from_millis(ms: u64) -> Self {
        Self(Duration::from_millis(ms))
    }
}

#[async_trait]
impl Latency for SleepLatency {
    async fn wait(&self) {
        if !self.0.is_zero() {
            tokio::time::sleep(self.0).await;
        }
    }
}

/// Resolves immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLatency;

#[async_trait]
impl Latency for NoLatency {
    async fn wait(&self) {}
}
