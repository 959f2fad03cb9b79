//! The sequential demo flow, factored out of `main` so tests can drive it
//! against mocked collaborators.
//!
//! Order: derive address, publish configuration (best effort), prepare an
//! envelope, sign it, build relayable calldata, submit, poll to a terminal
//! status. One outstanding network call at a time, no shared mutable state.

use alloy::primitives::{Address, Bytes};
use thiserror::Error;

use crate::config::PollPolicy;
use crate::directory::DirectoryClient;
use crate::node::NodeProvider;
use crate::relay::{wait_for_receipt, OpHash, RelayClient, RelayError, RelayStatus};
use crate::tx::{attach_signatures, Call, Orchestrator, TxError};
use crate::wallet::address::{counterfactual_address, DeploymentContext};
use crate::wallet::topology::WalletConfig;
use crate::wallet::{SignerAdapter, WalletError};

/// Everything a completed run produced.
#[derive(Debug, Clone)]
pub struct FlowOutcome {
    /// Derived counterfactual wallet address.
    pub wallet: Address,
    /// Relayer tracking handle.
    pub op_hash: OpHash,
    /// Terminal status reported by the relayer.
    pub status: RelayStatus,
}

/// Fatal errors along the signing/relay path.
///
/// Directory publish failures never appear here; they are warnings.
#[derive(Debug, Error)]
pub enum FlowError {
    #[error(transparent)]
    Wallet(#[from] WalletError),

    #[error(transparent)]
    Tx(#[from] TxError),

    #[error(transparent)]
    Relay(#[from] RelayError),
}

/// Run the whole flow once and return the terminal relay status.
#[allow(clippy::too_many_arguments)]
pub async fn send_and_confirm<P: NodeProvider>(
    provider: P,
    signer: &SignerAdapter,
    config: &WalletConfig,
    context: &DeploymentContext,
    directory: &DirectoryClient,
    relay: &RelayClient,
    chain_id: u64,
    calls: Vec<Call>,
    policy: &PollPolicy,
) -> Result<FlowOutcome, FlowError> {
    let wallet = counterfactual_address(config, context);
    tracing::info!(wallet = %wallet, "Wallet address derived");

    // Chain sanity check is advisory, like the publish below: a node that
    // cannot answer yet should not abort a run the relayer might complete.
    match provider.chain_id().await {
        Ok(reported) if reported != chain_id => {
            tracing::warn!(expected = chain_id, reported, "Node chain id mismatch");
        }
        Ok(_) => {}
        Err(e) => tracing::warn!(error = %e, "Chain id check failed"),
    }

    directory.publish_best_effort(wallet, config, context).await;

    let orchestrator = Orchestrator::new(provider, wallet, chain_id);
    let envelope = orchestrator.prepare(calls).await?;

    let signature = signer.sign(wallet, chain_id, &envelope.payload()).await?;
    let signed = attach_signatures(
        envelope,
        vec![(signer.address(), Bytes::from(signature.as_bytes().to_vec()))],
    );

    let built = orchestrator.build(config, &signed)?;

    let op_hash = relay.relay(built.to, &built.data, chain_id).await?;
    tracing::info!(op_hash = %op_hash, "Transaction Sent!");

    let status = wait_for_receipt(relay, &op_hash, chain_id, policy).await?;
    match &status {
        RelayStatus::Confirmed { tx_hash } => {
            tracing::info!(tx_hash = %tx_hash, "Transaction confirmed");
        }
        RelayStatus::Failed { reason } => {
            tracing::error!(reason = %reason, "Transaction failed");
        }
        RelayStatus::Pending => unreachable!("poller only returns terminal statuses"),
    }

    Ok(FlowOutcome {
        wallet,
        op_hash,
        status,
    })
}
