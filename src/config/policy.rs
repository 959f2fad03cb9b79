//! Confirmation polling policy.

use std::time::Duration;

/// How the confirmation poller paces itself.
///
/// Delays grow exponentially from `base_interval` up to `max_interval`;
/// the whole wait is bounded by `timeout`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    /// Delay before the second status check.
    pub base_interval: Duration,
    /// Upper bound on any single delay.
    pub max_interval: Duration,
    /// Overall deadline for reaching a terminal status.
    pub timeout: Duration,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            base_interval: Duration::from_millis(1_500),
            max_interval: Duration::from_secs(10),
            timeout: Duration::from_secs(180),
        }
    }
}

impl PollPolicy {
    /// Build the policy from optional environment overrides.
    ///
    /// `POLL_INTERVAL_MS` and `POLL_TIMEOUT_SECS` are optional; anything
    /// unparseable falls back to the default silently.
    pub fn from_env() -> Self {
        let mut policy = Self::default();
        if let Some(ms) = read_u64("POLL_INTERVAL_MS") {
            policy.base_interval = Duration::from_millis(ms);
        }
        if let Some(secs) = read_u64("POLL_TIMEOUT_SECS") {
            policy.timeout = Duration::from_secs(secs);
        }
        policy
    }

    /// Fast policy for tests: short delays, short deadline.
    pub fn immediate() -> Self {
        Self {
            base_interval: Duration::from_millis(1),
            max_interval: Duration::from_millis(5),
            timeout: Duration::from_secs(5),
        }
    }
}

fn read_u64(name: &str) -> Option<u64> {
    std::env::var(name).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = PollPolicy::default();
        assert_eq!(policy.base_interval, Duration::from_millis(1_500));
        assert_eq!(policy.max_interval, Duration::from_secs(10));
        assert_eq!(policy.timeout, Duration::from_secs(180));
    }
}
