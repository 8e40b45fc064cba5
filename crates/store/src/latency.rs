//! Artificial delay applied before store mutations.

use std::time::Duration;

/// Simulated backend latency.
///
/// Quote and invoice creation (and quote conversion) wait twice the base
/// delay; every other mutation waits the base delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SimulatedLatency {
    base: Duration,
}

impl SimulatedLatency {
    /// Latency with the given base delay in milliseconds.
    #[must_use]
    pub const fn from_millis(ms: u64) -> Self {
        Self {
            base: Duration::from_millis(ms),
        }
    }

    /// No delay.
    #[must_use]
    pub const fn none() -> Self {
        Self::from_millis(0)
    }

    /// Delay of ordinary mutations.
    #[must_use]
    pub const fn fast(&self) -> Duration {
        self.base
    }

    /// Delay of document creation.
    #[must_use]
    pub fn slow(&self) -> Duration {
        self.base.saturating_mul(2)
    }

    /// Waits the ordinary delay.
    pub async fn wait(&self) {
        sleep(self.fast()).await;
    }

    /// Waits the document creation delay.
    pub async fn wait_slow(&self) {
        sleep(self.slow()).await;
    }
}

async fn sleep(duration: Duration) {
    if !duration.is_zero() {
        tokio::time::sleep(duration).await;
    }
}
