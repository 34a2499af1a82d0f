use std::time::Duration;

/// Webhook delivery retry policy. `max_attempts` counts the first attempt, so the
/// default of 1 never retries.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    pub max_attempts: u32,
    pub initial_delay_ms: u64,
    pub max_delay_ms: u64,
    pub backoff_multiplier: u64,
}

impl RetryConfig {
    /// Pause after the given failed attempt (1-based), before jitter.
    pub fn backoff_delay(&self, failed_attempt: u32) -> Duration {
        let factor = self
            .backoff_multiplier
            .saturating_pow(failed_attempt.saturating_sub(1));
        let delay_ms = self
            .initial_delay_ms
            .saturating_mul(factor)
            .min(self.max_delay_ms);

        Duration::from_millis(delay_ms)
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 1,
            initial_delay_ms: 200,
            max_delay_ms: 2000,
            backoff_multiplier: 2,
        }
    }
}
