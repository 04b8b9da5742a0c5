use crate::shared::config::QueryConfig;

use super::error::QueryError;

/// Exponential back-off for failed queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub base_delay_ms: u32,
    pub max_delay_ms: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_config(&QueryConfig::default())
    }
}

impl RetryPolicy {
    pub fn from_config(config: &QueryConfig) -> Self {
        Self {
            max_retries: config.retry,
            base_delay_ms: config.retry_base_delay_ms,
            max_delay_ms: config.retry_max_delay_ms,
        }
    }

    pub fn never() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    /// Client errors (4xx) are final.
    pub fn is_retryable(error: &QueryError) -> bool {
        match error {
            QueryError::Network(_) => true,
            QueryError::Http { status, .. } => !(400..=499).contains(status),
            QueryError::InvalidRequest(_) | QueryError::Decode(_) => false,
        }
    }

    /// `failures` counts attempts that have already failed, starting at 1.
    pub fn should_retry(&self, failures: u32, error: &QueryError) -> bool {
        failures <= self.max_retries && Self::is_retryable(error)
    }

    /// Delay before retry number `retry` (0-based): `min(base * 2^retry, max)`.
    pub fn delay_ms(&self, retry: u32) -> u32 {
        let factor = 1u64.checked_shl(retry).unwrap_or(u64::MAX);
        let delay = u64::from(self.base_delay_ms).saturating_mul(factor);
        delay.min(u64::from(self.max_delay_ms)) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(status: u16) -> QueryError {
        QueryError::Http {
            status,
            message: String::new(),
        }
    }

    #[test]
    fn client_errors_are_not_retried() {
        assert!(!RetryPolicy::is_retryable(&http(400)));
        assert!(!RetryPolicy::is_retryable(&http(401)));
        assert!(!RetryPolicy::is_retryable(&http(404)));
        assert!(!RetryPolicy::is_retryable(&http(408)));
        assert!(!RetryPolicy::is_retryable(&http(429)));
        assert!(RetryPolicy::is_retryable(&http(500)));
        assert!(RetryPolicy::is_retryable(&http(503)));
        assert!(RetryPolicy::is_retryable(&QueryError::Network("offline".into())));
        assert!(!RetryPolicy::is_retryable(&QueryError::Decode("eof".into())));
    }

    #[test]
    fn retries_stop_after_max() {
        let policy = RetryPolicy::default();
        assert!(policy.should_retry(1, &http(500)));
        assert!(policy.should_retry(3, &http(500)));
        assert!(!policy.should_retry(4, &http(500)));
        assert!(!RetryPolicy::never().should_retry(1, &http(500)));
    }

    #[test]
    fn delay_doubles_up_to_cap() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.delay_ms(0), 1000);
        assert_eq!(policy.delay_ms(1), 2000);
        assert_eq!(policy.delay_ms(2), 4000);
        assert_eq!(policy.delay_ms(5), 30_000);
        assert_eq!(policy.delay_ms(80), 30_000);
    }
}
