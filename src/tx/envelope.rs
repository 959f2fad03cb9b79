//! Call payloads and nonce-bound envelopes.
//!
//! An [`Envelope`] wraps one or more calls for a specific wallet, chain, and
//! nonce. Attaching signatures is a pure transform; nothing here validates
//! the wallet threshold (that happens at build time).

use alloy::primitives::{Address, Bytes, U256};
use alloy::sol;
use alloy::sol_types::SolValue;

sol! {
    /// On-chain shape of one call inside an execute payload.
    #[derive(Debug)]
    struct EncodedCall {
        address to;
        uint256 value;
        bytes data;
        uint256 gasLimit;
        bool delegateCall;
        bool onlyFallback;
        uint256 behaviorOnError;
    }

    /// On-chain shape of one attached signature.
    #[derive(Debug)]
    struct SignaturePart {
        address signer;
        bytes signature;
    }
}

/// What the wallet does when a call in the batch reverts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BehaviorOnError {
    /// Continue with the remaining calls.
    Ignore,
    /// Revert the whole batch.
    #[default]
    Revert,
    /// Stop executing but keep prior effects.
    Abort,
}

impl BehaviorOnError {
    fn as_u256(self) -> U256 {
        match self {
            BehaviorOnError::Ignore => U256::from(0u8),
            BehaviorOnError::Revert => U256::from(1u8),
            BehaviorOnError::Abort => U256::from(2u8),
        }
    }
}

/// One intended on-chain action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    /// Destination address.
    pub to: Address,
    /// Native value to send.
    pub value: U256,
    /// Calldata (empty for plain transfers).
    pub data: Bytes,
    /// Gas limit; zero lets the relayer estimate.
    pub gas_limit: U256,
    /// Execute via delegatecall.
    pub delegate_call: bool,
    /// Only run if nothing earlier in the batch matched.
    pub only_fallback: bool,
    /// Revert handling for this call.
    pub behavior_on_error: BehaviorOnError,
}

impl Call {
    /// A plain value transfer.
    pub fn transfer(to: Address, value: U256) -> Self {
        Self {
            to,
            value,
            data: Bytes::new(),
            gas_limit: U256::ZERO,
            delegate_call: false,
            only_fallback: false,
            behavior_on_error: BehaviorOnError::Revert,
        }
    }

    /// A contract call with calldata.
    pub fn contract_call(to: Address, data: Bytes) -> Self {
        Self {
            data,
            ..Self::transfer(to, U256::ZERO)
        }
    }

    fn encoded(&self) -> EncodedCall {
        EncodedCall {
            to: self.to,
            value: self.value,
            data: self.data.clone(),
            gasLimit: self.gas_limit,
            delegateCall: self.delegate_call,
            onlyFallback: self.only_fallback,
            behaviorOnError: self.behavior_on_error.as_u256(),
        }
    }
}

/// Unsigned, nonce-bound wrapper around a batch of calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    /// Wallet the calls execute through.
    pub wallet: Address,
    /// Chain the envelope is bound to.
    pub chain_id: u64,
    /// Nonce space (lane); the demo uses space zero.
    pub space: U256,
    /// Wallet nonce within the space at preparation time.
    pub nonce: U256,
    /// The calls, executed in order.
    pub calls: Vec<Call>,
}

impl Envelope {
    /// ABI payload the signer commits to and the wallet decodes.
    pub fn payload(&self) -> Vec<u8> {
        let calls: Vec<EncodedCall> = self.calls.iter().map(Call::encoded).collect();
        (self.space, self.nonce, calls).abi_encode()
    }
}

/// An envelope plus the signatures gathered for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedEnvelope {
    pub envelope: Envelope,
    /// (signer address, 65-byte signature) pairs.
    pub signatures: Vec<(Address, Bytes)>,
}

impl SignedEnvelope {
    /// Addresses of every attached signer.
    pub fn signer_addresses(&self) -> Vec<Address> {
        self.signatures.iter().map(|(addr, _)| *addr).collect()
    }

    /// ABI blob of the attached signatures under a threshold/checkpoint.
    pub fn signature_blob(&self, threshold: u16, checkpoint: u32) -> Vec<u8> {
        let parts: Vec<SignaturePart> = self
            .signatures
            .iter()
            .map(|(signer, signature)| SignaturePart {
                signer: *signer,
                signature: signature.clone(),
            })
            .collect();
        (U256::from(threshold), U256::from(checkpoint), parts).abi_encode()
    }
}

/// Attach signatures to an envelope.
///
/// Pure: no threshold validation, no chain access. The same inputs always
/// produce a structurally identical signed envelope.
pub fn attach_signatures(
    envelope: Envelope,
    signatures: Vec<(Address, Bytes)>,
) -> SignedEnvelope {
    SignedEnvelope {
        envelope,
        signatures,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_envelope() -> Envelope {
        Envelope {
            wallet: Address::repeat_byte(0xaa),
            chain_id: 421614,
            space: U256::ZERO,
            nonce: U256::from(7u8),
            calls: vec![Call::transfer(Address::repeat_byte(0xbb), U256::from(1u8))],
        }
    }

    #[test]
    fn test_payload_commits_to_nonce() {
        let a = sample_envelope();
        let mut b = sample_envelope();
        b.nonce = U256::from(8u8);
        assert_ne!(a.payload(), b.payload());
    }

    #[test]
    fn test_attach_signatures_is_pure() {
        let sigs = vec![(Address::repeat_byte(0x01), Bytes::from(vec![0x22; 65]))];
        let first = attach_signatures(sample_envelope(), sigs.clone());
        let second = attach_signatures(sample_envelope(), sigs);
        assert_eq!(first, second);
    }

    #[test]
    fn test_attach_does_not_validate_threshold() {
        // An empty signature set is accepted here; build rejects it later.
        let signed = attach_signatures(sample_envelope(), Vec::new());
        assert!(signed.signer_addresses().is_empty());
    }

    #[test]
    fn test_transfer_defaults() {
        let call = Call::transfer(Address::repeat_byte(0x01), U256::from(5u8));
        assert!(call.data.is_empty());
        assert_eq!(call.gas_limit, U256::ZERO);
        assert!(!call.delegate_call);
        assert_eq!(call.behavior_on_error, BehaviorOnError::Revert);
    }
}
