//! Relay submission handles and status.

use thiserror::Error;

/// Tracking handle returned immediately on submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpHash(pub String);

impl std::fmt::Display for OpHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Relayer-reported state of a submitted operation.
///
/// Created on submission as pending, mutated only by the remote relayer,
/// polled read-only here until terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayStatus {
    /// Not yet mined or indexed.
    Pending,
    /// Mined successfully.
    Confirmed { tx_hash: String },
    /// Rejected or reverted.
    Failed { reason: String },
}

impl RelayStatus {
    /// Whether polling can stop.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RelayStatus::Pending)
    }
}

/// Errors from the relayer service and confirmation polling.
#[derive(Debug, Error)]
pub enum RelayError {
    /// Transport-level failure reaching the relayer.
    #[error("relayer request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The relayer answered with a non-success HTTP status.
    #[error("relayer returned HTTP {status}: {body}")]
    Service { status: u16, body: String },

    /// The relayer's response did not match the expected shape.
    #[error("malformed relayer response: {0}")]
    Malformed(String),

    /// No terminal status observed within the polling deadline.
    #[error("no terminal relay status after {0} seconds")]
    ConfirmationTimeout(u64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states() {
        assert!(!RelayStatus::Pending.is_terminal());
        assert!(RelayStatus::Confirmed {
            tx_hash: "0xabc".into()
        }
        .is_terminal());
        assert!(RelayStatus::Failed {
            reason: "insufficient gas".into()
        }
        .is_terminal());
    }
}
