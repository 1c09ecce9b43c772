use std::time::Duration;

use tokio::time::sleep;

/// Fixed delay in seconds between per-market chart passes.
pub const MARKET_PACE_SECS: u64 = 2;

/// Inter-market pacing strategy.
///
/// The extraction loop pauses through a `Pacer` after every per-market
/// pass. This is a conservative self-throttle, not a reaction to any
/// throttling signal from the API. Tests inject [`Pacer::none`] so runs
/// stay instant.
#[derive(Debug, Clone)]
pub struct Pacer {
    delay: Duration,
}

impl Pacer {
    pub fn fixed(seconds: u64) -> Self {
        Pacer {
            delay: Duration::from_secs(seconds),
        }
    }

    pub fn none() -> Self {
        Pacer {
            delay: Duration::ZERO,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub async fn pause(&self) {
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }
    }
}

impl Default for Pacer {
    fn default() -> Self {
        Pacer::fixed(MARKET_PACE_SECS)
    }
}

pub fn join_names(names: &[String]) -> String {
    names.join(", ")
}
