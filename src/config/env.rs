//! Required environment variables and their parsing.
//!
//! Every value the run needs is read up front so a missing variable fails
//! before any network activity, naming the variable that was absent.

use alloy::primitives::Address;
use thiserror::Error;

use crate::config::policy::PollPolicy;

/// Environment variable names, in the order they are read.
pub const PROJECT_ACCESS_KEY: &str = "PROJECT_ACCESS_KEY";
pub const PRIVATE_KEY: &str = "PRIVATE_KEY";
pub const TARGET_ADDRESS: &str = "TARGET_ADDRESS";
pub const CHAIN_ID: &str = "CHAIN_ID";
pub const NODE_URL: &str = "NODE_URL";
pub const RELAYER_URL: &str = "RELAYER_URL";
pub const EXPLORER_URL: &str = "EXPLORER_URL";

/// Errors raised while assembling the startup configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("missing configuration: environment variable {0} is not set")]
    Missing(&'static str),

    /// A variable was present but could not be parsed.
    #[error("invalid configuration: {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Startup configuration assembled from the environment.
#[derive(Debug, Clone)]
pub struct EnvConfig {
    /// Access key sent to the node and relayer services.
    pub access_key: String,
    /// Hex-encoded private key for the sole wallet signer.
    pub private_key: String,
    /// Destination address for the demo transaction.
    pub target: Address,
    /// Chain the wallet and relayer operate on.
    pub chain_id: u64,
    /// JSON-RPC node base URL (access key is appended as a path segment).
    pub node_url: String,
    /// Relayer service base URL.
    pub relayer_url: String,
    /// Block explorer base URL, used only for the final link.
    pub explorer_url: String,
    /// Confirmation polling policy (env-overridable, defaulted).
    pub poll: PollPolicy,
}

impl EnvConfig {
    /// Read all required variables, failing fast on the first missing one.
    pub fn from_env() -> Result<Self, ConfigError> {
        let access_key = require(PROJECT_ACCESS_KEY)?;
        let private_key = require(PRIVATE_KEY)?;

        let target_raw = require(TARGET_ADDRESS)?;
        let target: Address = target_raw.parse().map_err(|e| ConfigError::Invalid {
            name: TARGET_ADDRESS,
            reason: format!("{}", e),
        })?;

        let chain_raw = require(CHAIN_ID)?;
        let chain_id: u64 = chain_raw.parse().map_err(|e| ConfigError::Invalid {
            name: CHAIN_ID,
            reason: format!("{}", e),
        })?;

        let node_url = require(NODE_URL)?;
        let relayer_url = require(RELAYER_URL)?;
        let explorer_url = require(EXPLORER_URL)?;

        Ok(Self {
            access_key,
            private_key,
            target,
            chain_id,
            node_url,
            relayer_url,
            explorer_url,
            poll: PollPolicy::from_env(),
        })
    }

    /// Node URL with the access key appended as a path segment.
    pub fn node_url_with_key(&self) -> String {
        format!("{}/{}", self.node_url.trim_end_matches('/'), self.access_key)
    }

    /// Explorer link for a confirmed transaction hash.
    pub fn explorer_tx_url(&self, tx_hash: &str) -> String {
        format!("{}/tx/{}", self.explorer_url.trim_end_matches('/'), tx_hash)
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(v) if !v.is_empty() => Ok(v),
        _ => Err(ConfigError::Missing(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env-var tests mutate shared process state; run them on one value each
    // to avoid clobbering the variables other tests set.

    #[test]
    fn test_missing_variable_is_named() {
        std::env::remove_var("SWR_TEST_SENTINEL");
        let err = require("SWR_TEST_SENTINEL").unwrap_err();
        assert!(err.to_string().contains("SWR_TEST_SENTINEL"));
        assert!(err.to_string().contains("missing configuration"));
    }

    #[test]
    fn test_empty_variable_counts_as_missing() {
        std::env::set_var("SWR_TEST_EMPTY", "");
        assert!(require("SWR_TEST_EMPTY").is_err());
    }

    #[test]
    fn test_explorer_tx_url_joining() {
        let config = EnvConfig {
            access_key: "key".into(),
            private_key: "00".into(),
            target: Address::ZERO,
            chain_id: 421614,
            node_url: "https://node.example".into(),
            relayer_url: "https://relayer.example".into(),
            explorer_url: "https://sepolia.arbiscan.io/".into(),
            poll: PollPolicy::default(),
        };
        assert_eq!(
            config.explorer_tx_url("0xabc"),
            "https://sepolia.arbiscan.io/tx/0xabc"
        );
        assert_eq!(config.node_url_with_key(), "https://node.example/key");
    }
}
