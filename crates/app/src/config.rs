//! Store Config

use std::time::Duration;

use clap::Args;

/// Default simulated persistence latency for store mutations.
pub const DEFAULT_SAVE_LATENCY_MS: u64 = 500;

/// Default simulated latency for the login check.
pub const DEFAULT_LOGIN_LATENCY_MS: u64 = 800;

/// In-memory store settings.
#[derive(Debug, Clone, Args)]
pub struct StoreConfig {
    /// Simulated save latency applied to every store mutation, in milliseconds
    #[arg(long, env = "ESTATES_SAVE_LATENCY_MS", default_value_t = DEFAULT_SAVE_LATENCY_MS)]
    pub save_latency_ms: u64,

    /// Simulated latency of the login check, in milliseconds
    #[arg(long, env = "ESTATES_LOGIN_LATENCY_MS", default_value_t = DEFAULT_LOGIN_LATENCY_MS)]
    pub login_latency_ms: u64,
}

impl StoreConfig {
    /// Configuration with every simulated delay disabled.
    #[must_use]
    pub const fn instant() -> Self {
        Self {
            save_latency_ms: 0,
            login_latency_ms: 0,
        }
    }

    /// Latency applied before a store mutation commits.
    #[must_use]
    pub const fn save_latency(&self) -> SimulatedLatency {
        SimulatedLatency::from_millis(self.save_latency_ms)
    }

    /// Latency applied before the login check answers.
    #[must_use]
    pub const fn login_latency(&self) -> SimulatedLatency {
        SimulatedLatency::from_millis(self.login_latency_ms)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            save_latency_ms: DEFAULT_SAVE_LATENCY_MS,
            login_latency_ms: DEFAULT_LOGIN_LATENCY_MS,
        }
    }
}

/// A fixed artificial delay standing in for persistence round trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SimulatedLatency(Duration);

impl SimulatedLatency {
    /// No delay at all.
    pub const NONE: Self = Self(Duration::ZERO);

    /// Delay of the given number of milliseconds.
    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self(Duration::from_millis(millis))
    }

    /// The configured delay.
    #[must_use]
    pub const fn duration(self) -> Duration {
        self.0
    }

    /// Wait out the delay. Returns immediately when the delay is zero.
    pub async fn wait(self) {
        if !self.0.is_zero() {
            tokio::time::sleep(self.0).await;
        }
    }
}
