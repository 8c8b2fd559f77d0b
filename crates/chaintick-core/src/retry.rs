//! Retry policy for the write endpoint.

use std::time::Duration;

/// Backoff strategy between attempts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Backoff {
    /// Fixed delay between attempts.
    Fixed { delay: Duration },
    /// Exponential delay: `base * (factor ^ attempt)`, capped at `max`.
    Exponential {
        base: Duration,
        factor: f64,
        max: Duration,
        /// Apply +/- 50% random jitter to each delay.
        jitter: bool,
    },
}

impl Backoff {
    /// Delay before retry `attempt` (0-based: the delay slept after the
    /// first failure is `delay(0)`).
    pub fn delay(self, attempt: u32) -> Duration {
        match self {
            Self::Fixed { delay } => delay,
            Self::Exponential {
                base,
                factor,
                max,
                jitter,
            } => {
                let scaled = base.as_secs_f64() * factor.powi(attempt as i32);
                let mut delay = Duration::from_secs_f64(scaled.min(max.as_secs_f64()));

                if jitter {
                    let half = (delay.as_millis() as f64 * 0.5) as u64;
                    let offset = fastrand::u64(0..=half * 2) as i64 - half as i64;
                    let total = delay.as_millis() as i64 + offset;
                    delay = Duration::from_millis(total.max(0) as u64);
                }

                delay
            }
        }
    }
}

/// How many times an operation runs and how long it waits in between.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryConfig {
    /// Total attempts, including the first. Never zero.
    pub max_attempts: u32,
    pub backoff: Backoff,
}

impl RetryConfig {
    /// The write-endpoint policy: three total attempts, doubling delays
    /// starting at one second (so an exhausted write sleeps 1s then 2s).
    pub fn write_default() -> Self {
        Self {
            max_attempts: 3,
            backoff: Backoff::Exponential {
                base: Duration::from_secs(1),
                factor: 2.0,
                max: Duration::from_secs(4),
                jitter: false,
            },
        }
    }

    /// Single attempt, no waiting. Reads use this.
    pub fn no_retry() -> Self {
        Self {
            max_attempts: 1,
            backoff: Backoff::Fixed {
                delay: Duration::ZERO,
            },
        }
    }

    /// Fixed-delay policy, mostly for tests that cannot afford to sleep.
    pub fn fixed(delay: Duration, max_attempts: u32) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            backoff: Backoff::Fixed { delay },
        }
    }

    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        self.backoff.delay(attempt)
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::write_default()
    }
}
