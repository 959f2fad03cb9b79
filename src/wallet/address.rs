//! Counterfactual wallet address derivation.
//!
//! The wallet address is a CREATE2 image of the configuration: the factory
//! deploys a minimal proxy whose init code commits to the main module, and
//! the configuration's image hash is the salt. Nothing here touches the
//! network; the address is valid before any deployment occurs.

use alloy::primitives::{address, fixed_bytes, keccak256, Address, FixedBytes, B256};

use crate::wallet::topology::WalletConfig;

/// Which factory and implementation version governs derivation.
///
/// Treated as an opaque constant: changing any field yields a different
/// address universe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeploymentContext {
    /// Factory contract performing the CREATE2 deployment.
    pub factory: Address,
    /// Wallet implementation the proxy delegates to.
    pub main_module: Address,
}

/// Minimal proxy creation code deployed by the factory. The main module
/// address is appended as a constructor argument before hashing.
const WALLET_CREATION_CODE: FixedBytes<40> = fixed_bytes!(
    "603a600e3d39601a805130553df3363d3d373d3d3d363d30545af43d82803e903d91601857fd5bf3"
);

/// The fixed context used by the demo.
pub const DEFAULT_CONTEXT: DeploymentContext = DeploymentContext {
    factory: address!("f9d09d634fb818b05149329c1dccfaea53639d96"),
    main_module: address!("8858eeb3dfffa017d4bce9801d340d36cf895ccf"),
};

impl DeploymentContext {
    /// Hash of the proxy init code for this context.
    pub fn init_code_hash(&self) -> B256 {
        let mut init_code = WALLET_CREATION_CODE.to_vec();
        init_code.extend_from_slice(self.main_module.into_word().as_slice());
        keccak256(&init_code)
    }
}

/// Compute the wallet address for a configuration under a context.
///
/// Deterministic: the same (configuration, context) pair always yields the
/// same address.
pub fn counterfactual_address(config: &WalletConfig, context: &DeploymentContext) -> Address {
    let salt = config.image_hash();
    context.factory.create2(salt, context.init_code_hash())
}
