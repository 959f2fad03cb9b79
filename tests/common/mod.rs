//! Shared fixtures for integration tests.

use alloy::primitives::{Address, U256};

use smart_wallet_relay::node::{NodeError, NodeProvider};
use smart_wallet_relay::wallet::SignerAdapter;

/// Well-known test private key (Anvil's first account).
pub const TEST_PRIVATE_KEY: &str =
    "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// Chain id used across the integration tests (Arbitrum Sepolia).
pub const TEST_CHAIN_ID: u64 = 421614;

/// Node provider stub: fixed chain id, fixed wallet nonce.
#[derive(Debug, Clone, Default)]
pub struct StubNode {
    pub nonce: u64,
}

impl NodeProvider for StubNode {
    async fn chain_id(&self) -> Result<u64, NodeError> {
        Ok(TEST_CHAIN_ID)
    }

    async fn wallet_nonce(&self, _wallet: Address, _space: U256) -> Result<U256, NodeError> {
        Ok(U256::from(self.nonce))
    }
}

/// Signer over the Anvil test key.
pub fn test_signer() -> SignerAdapter {
    SignerAdapter::from_private_key(TEST_PRIVATE_KEY).unwrap()
}

/// Target address used by the demo calls in tests.
pub fn target() -> Address {
    Address::repeat_byte(0x42)
}
