//! Wallet identity: signer, topology, and counterfactual address.

pub mod address;
pub mod signer;
pub mod topology;

pub use address::{counterfactual_address, DeploymentContext, DEFAULT_CONTEXT};
pub use signer::SignerAdapter;
pub use topology::{Topology, WalletConfig};

use thiserror::Error;

/// Errors from key handling and signing.
#[derive(Debug, Error)]
pub enum WalletError {
    /// Invalid private key format or derivation error.
    #[error("wallet key error: {0}")]
    Key(String),

    /// The underlying signer failed to produce a signature.
    #[error("signing failed: {0}")]
    Signing(String),
}
