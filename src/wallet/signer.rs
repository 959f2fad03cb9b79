//! Signer adapter over a raw private key.
//!
//! # Security
//! - Private keys arrive only via configuration, never logged
//! - Signatures are bound to (wallet, chain id) to prevent replay

use alloy::primitives::{keccak256, Address, B256, U256};
use alloy::signers::local::PrivateKeySigner;
use alloy::signers::{Signature, Signer};
use alloy::sol_types::SolValue;

use crate::wallet::WalletError;

/// Wraps a private key as a signing capability with a derived address.
#[derive(Clone)]
pub struct SignerAdapter {
    signer: PrivateKeySigner,
}

impl SignerAdapter {
    /// Parse a hex private key (with or without 0x prefix).
    pub fn from_private_key(private_key_hex: &str) -> Result<Self, WalletError> {
        let key_hex = private_key_hex.strip_prefix("0x").unwrap_or(private_key_hex);

        let signer: PrivateKeySigner = key_hex
            .parse()
            .map_err(|e| WalletError::Key(format!("invalid private key format: {}", e)))?;

        tracing::info!(address = %signer.address(), "Signer initialized");

        Ok(Self { signer })
    }

    /// The signer's derived account address.
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// Sign `payload` for a specific wallet and chain.
    ///
    /// The digest commits to the wallet address and chain id so a signature
    /// produced here cannot be replayed against another wallet or chain.
    pub async fn sign(
        &self,
        wallet: Address,
        chain_id: u64,
        payload: &[u8],
    ) -> Result<Signature, WalletError> {
        let digest = payload_digest(wallet, chain_id, payload);
        self.signer
            .sign_hash(&digest)
            .await
            .map_err(|e| WalletError::Signing(format!("{}", e)))
    }
}

/// Digest binding a payload to one wallet on one chain.
pub fn payload_digest(wallet: Address, chain_id: u64, payload: &[u8]) -> B256 {
    keccak256((wallet, U256::from(chain_id), keccak256(payload)).abi_encode())
}

impl std::fmt::Debug for SignerAdapter {
    // Never expose key material, even via Debug.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignerAdapter")
            .field("address", &self.signer.address())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Well-known test private key (Anvil's first account)
    const TEST_PRIVATE_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    #[test]
    fn test_address_derivation() {
        let signer = SignerAdapter::from_private_key(TEST_PRIVATE_KEY).unwrap();
        assert_eq!(
            signer.address().to_string().to_lowercase(),
            "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"
        );
    }

    #[test]
    fn test_0x_prefix_accepted() {
        let signer =
            SignerAdapter::from_private_key(&format!("0x{}", TEST_PRIVATE_KEY)).unwrap();
        assert_eq!(
            signer.address().to_string().to_lowercase(),
            "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"
        );
    }

    #[test]
    fn test_invalid_key_rejected() {
        let result = SignerAdapter::from_private_key("not a key");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("invalid private key"));
    }

    #[tokio::test]
    async fn test_signature_binds_wallet_and_chain() {
        let signer = SignerAdapter::from_private_key(TEST_PRIVATE_KEY).unwrap();
        let wallet_a = Address::repeat_byte(0x11);
        let wallet_b = Address::repeat_byte(0x22);
        let payload = b"payload";

        let sig_a = signer.sign(wallet_a, 1, payload).await.unwrap();
        let sig_b = signer.sign(wallet_b, 1, payload).await.unwrap();
        let sig_c = signer.sign(wallet_a, 2, payload).await.unwrap();

        assert_ne!(sig_a.as_bytes(), sig_b.as_bytes());
        assert_ne!(sig_a.as_bytes(), sig_c.as_bytes());
        assert_eq!(sig_a.as_bytes().len(), 65);
    }
}
