use std::time::Duration;
use tracing::{error, warn};

/// Retry an async operation with exponential backoff.
///
/// The final error is returned unchanged once `max_retries` is exhausted.
pub async fn with_retry<F, Fut, T, E>(
    operation: F,
    retry_delay: u64,
    max_retries: u32,
    operation_name: &str,
) -> Result<T, E>
where
    F: Fn() -> Fut,
    Fut: std::future::Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let mut attempt = 0;

    loop {
        attempt += 1;
        match operation().await {
            Ok(result) => return Ok(result),
            Err(err) => {
                if attempt > max_retries {
                    error!(
                        "Operation '{}' failed after {} attempts: {}",
                        operation_name, max_retries, err
                    );
                    return Err(err);
                }

                let backoff = exponential_backoff(retry_delay, attempt);
                warn!(
                    "Operation '{}' failed (attempt {}/{}): {}. Retrying in {}ms",
                    operation_name, attempt, max_retries, err, backoff
                );

                tokio::time::sleep(Duration::from_millis(backoff)).await;
            }
        }
    }
}

/// Calculate exponential backoff with jitter, capped at 60 seconds
fn exponential_backoff(base_delay: u64, attempt: u32) -> u64 {
    let exponential = base_delay.saturating_mul(2_u64.pow(attempt.saturating_sub(1)));
    let capped = std::cmp::min(exponential, 60_000);

    // Add jitter (±20%)
    let jitter = (rand::random::<f64>() * 0.4 - 0.2) * capped as f64;
    (capped as f64 + jitter) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn backoff_stays_within_the_jitter_window() {
        for attempt in 1..=6 {
            let backoff = exponential_backoff(100, attempt);
            let base = std::cmp::min(100 * 2_u64.pow(attempt - 1), 60_000);
            assert!(backoff as f64 >= base as f64 * 0.8 - 1.0);
            assert!(backoff as f64 <= base as f64 * 1.2 + 1.0);
        }
    }

    #[tokio::test]
    async fn succeeds_after_transient_failures() {
        let calls = AtomicU32::new(0);

        let result: Result<u32, String> = with_retry(
            || async {
                let call = calls.fetch_add(1, Ordering::SeqCst);
                if call < 2 {
                    Err("transient".to_string())
                } else {
                    Ok(call)
                }
            },
            1,
            5,
            "test_operation",
        )
        .await;

        assert_eq!(result, Ok(2));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn gives_up_after_max_retries() {
        let result: Result<(), String> =
            with_retry(|| async { Err("always".to_string()) }, 1, 2, "test_operation").await;

        assert_eq!(result, Err("always".to_string()));
    }
}
