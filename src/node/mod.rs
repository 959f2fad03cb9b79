//! Node provider boundary.
//!
//! # Responsibilities
//! - Define the one interface the orchestrator uses to read chain state
//! - Adapt the external RPC client to that interface in a single place
//! - Handle timeouts and network errors gracefully
//!
//! Everything above this module talks to `NodeProvider`; the concrete RPC
//! client never leaks past it.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, U256};
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::types::TransactionRequest;
use alloy::sol;
use alloy::sol_types::SolCall;
use thiserror::Error;
use tokio::time::timeout;

sol! {
    /// Wallet nonce read, per nonce space.
    function readNonce(uint256 space) external view returns (uint256);
}

/// Errors from node RPC access.
#[derive(Debug, Error)]
pub enum NodeError {
    /// RPC connection or request failed.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// RPC request timed out.
    #[error("RPC timeout after {0} seconds")]
    Timeout(u64),

    /// The node URL could not be parsed.
    #[error("invalid node URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// Chain-state reads the transaction flow needs.
pub trait NodeProvider {
    /// Chain id reported by the node.
    fn chain_id(&self) -> impl Future<Output = Result<u64, NodeError>> + Send;

    /// Current wallet nonce in the given nonce space.
    ///
    /// An undeployed (counterfactual) wallet reads as nonce zero.
    fn wallet_nonce(
        &self,
        wallet: Address,
        space: U256,
    ) -> impl Future<Output = Result<U256, NodeError>> + Send;
}

/// `NodeProvider` over an HTTP JSON-RPC endpoint.
#[derive(Clone)]
pub struct AlloyNodeProvider {
    provider: Arc<dyn Provider + Send + Sync>,
    timeout_duration: Duration,
    rpc_url: String,
}

impl AlloyNodeProvider {
    /// Default per-request timeout in seconds.
    pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

    /// Connect to an HTTP JSON-RPC endpoint.
    pub fn new(rpc_url: &str) -> Result<Self, NodeError> {
        let url: url::Url = rpc_url.parse().map_err(|e| NodeError::InvalidUrl {
            url: rpc_url.to_string(),
            reason: format!("{}", e),
        })?;

        let provider: Arc<dyn Provider + Send + Sync> =
            Arc::new(ProviderBuilder::new().connect_http(url));

        tracing::info!(rpc_url = %rpc_url, "Node provider initialized");

        Ok(Self {
            provider,
            timeout_duration: Duration::from_secs(Self::DEFAULT_TIMEOUT_SECS),
            rpc_url: rpc_url.to_string(),
        })
    }
}

impl NodeProvider for AlloyNodeProvider {
    async fn chain_id(&self) -> Result<u64, NodeError> {
        match timeout(self.timeout_duration, self.provider.get_chain_id()).await {
            Ok(Ok(id)) => Ok(id),
            Ok(Err(e)) => Err(NodeError::Rpc(format!("{}", e))),
            Err(_) => Err(NodeError::Timeout(self.timeout_duration.as_secs())),
        }
    }

    async fn wallet_nonce(&self, wallet: Address, space: U256) -> Result<U256, NodeError> {
        let call = readNonceCall { space };
        let request = TransactionRequest::default()
            .with_to(wallet)
            .with_input(call.abi_encode());

        let result = match timeout(self.timeout_duration, self.provider.call(request)).await {
            Ok(Ok(bytes)) => bytes,
            Ok(Err(e)) => return Err(NodeError::Rpc(format!("{}", e))),
            Err(_) => return Err(NodeError::Timeout(self.timeout_duration.as_secs())),
        };

        // An undeployed wallet has no code; the call returns empty bytes.
        if result.is_empty() {
            tracing::debug!(wallet = %wallet, "Wallet not deployed, nonce 0");
            return Ok(U256::ZERO);
        }

        readNonceCall::abi_decode_returns(&result)
            .map_err(|e| NodeError::Rpc(format!("malformed readNonce response: {}", e)))
    }
}

impl std::fmt::Debug for AlloyNodeProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlloyNodeProvider")
            .field("rpc_url", &self.rpc_url)
            .field("timeout", &self.timeout_duration)
            .finish()
    }
}
