//! One transaction attempt, from calls to relayable calldata.
//!
//! State flow: `prepare(calls) -> Envelope`, `attach_signatures` (in
//! [`crate::tx::envelope`]), `build(signed) -> BuiltCall`. A failed attempt
//! must go back through `prepare` for a fresh nonce.

use alloy::primitives::{Address, Bytes, U256};
use alloy::sol;
use alloy::sol_types::SolCall;

use crate::node::NodeProvider;
use crate::tx::envelope::{Call, Envelope, SignedEnvelope};
use crate::tx::TxError;
use crate::wallet::topology::WalletConfig;

sol! {
    /// Wallet entry point any relayer can submit to.
    function execute(bytes calldata payload, bytes calldata signature) external payable;
}

/// Concrete on-chain call produced from a signed envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltCall {
    /// The wallet address.
    pub to: Address,
    /// `execute` calldata; submittable by any relayer.
    pub data: Bytes,
}

/// Builds envelopes and relayable calldata for one wallet.
pub struct Orchestrator<P> {
    provider: P,
    wallet: Address,
    chain_id: u64,
}

impl<P: NodeProvider> Orchestrator<P> {
    /// Create an orchestrator for a wallet on a chain.
    pub fn new(provider: P, wallet: Address, chain_id: u64) -> Self {
        Self {
            provider,
            wallet,
            chain_id,
        }
    }

    /// Fetch the wallet's current nonce and wrap the calls in an envelope.
    ///
    /// Each attempt needs a fresh envelope; reusing one after a failed
    /// submission risks a nonce collision.
    pub async fn prepare(&self, calls: Vec<Call>) -> Result<Envelope, TxError> {
        let space = U256::ZERO;
        let nonce = self.provider.wallet_nonce(self.wallet, space).await?;

        tracing::debug!(wallet = %self.wallet, %nonce, calls = calls.len(), "Envelope prepared");

        Ok(Envelope {
            wallet: self.wallet,
            chain_id: self.chain_id,
            space,
            nonce,
            calls,
        })
    }

    /// Encode a signed envelope into relayable calldata.
    ///
    /// Rejects envelopes whose attached signer weight does not meet the
    /// wallet threshold rather than deferring that failure to the relayer.
    pub fn build(
        &self,
        config: &WalletConfig,
        signed: &SignedEnvelope,
    ) -> Result<BuiltCall, TxError> {
        let signers = signed.signer_addresses();
        let have = config.topology.weight_of(&signers);
        if have < u32::from(config.threshold) {
            return Err(TxError::ThresholdNotMet {
                have,
                need: config.threshold,
            });
        }

        let call = executeCall {
            payload: signed.envelope.payload().into(),
            signature: signed
                .signature_blob(config.threshold, config.checkpoint)
                .into(),
        };

        Ok(BuiltCall {
            to: signed.envelope.wallet,
            data: call.abi_encode().into(),
        })
    }

    /// The wallet this orchestrator serves.
    pub fn wallet(&self) -> Address {
        self.wallet
    }
}
