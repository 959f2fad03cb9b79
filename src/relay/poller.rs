//! Confirmation polling with bounded backoff.
//!
//! Replaces a naive fixed-interval forever-loop: delays grow exponentially
//! from the policy's base up to its cap (with jitter), and the whole wait
//! sits under an overall deadline.

use std::time::Duration;

use rand::Rng;
use tokio::time::{sleep, timeout};

use crate::config::PollPolicy;
use crate::relay::client::RelayClient;
use crate::relay::types::{OpHash, RelayError, RelayStatus};

/// Poll until the relayer reports a terminal status or the deadline passes.
///
/// Stops on the first `Confirmed` or `Failed` and never polls again after
/// that. A `Pending` run that outlives the policy timeout returns
/// [`RelayError::ConfirmationTimeout`].
pub async fn wait_for_receipt(
    client: &RelayClient,
    op_hash: &OpHash,
    chain_id: u64,
    policy: &PollPolicy,
) -> Result<RelayStatus, RelayError> {
    let deadline = policy.timeout;

    let result = timeout(deadline, async {
        let mut attempt: u32 = 0;
        loop {
            let status = client.status(op_hash, chain_id).await?;
            if status.is_terminal() {
                return Ok(status);
            }

            attempt += 1;
            let delay = backoff_delay(attempt, policy);
            tracing::debug!(op_hash = %op_hash, attempt, delay_ms = delay.as_millis() as u64, "Still pending");
            sleep(delay).await;
        }
    })
    .await;

    match result {
        Ok(outcome) => outcome,
        Err(_) => Err(RelayError::ConfirmationTimeout(deadline.as_secs())),
    }
}

/// Exponential backoff with up to 10% jitter, capped by the policy.
fn backoff_delay(attempt: u32, policy: &PollPolicy) -> Duration {
    if attempt == 0 {
        return Duration::from_millis(0);
    }

    let base_ms = policy.base_interval.as_millis() as u64;
    let max_ms = policy.max_interval.as_millis() as u64;

    let exponential = 2u64.saturating_pow(attempt - 1);
    let capped = base_ms.saturating_mul(exponential).min(max_ms);

    let jitter_range = capped / 10;
    let jitter = if jitter_range > 0 {
        rand::thread_rng().gen_range(0..jitter_range)
    } else {
        0
    };

    Duration::from_millis(capped + jitter)
}
