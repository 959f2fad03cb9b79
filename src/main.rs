//! Demo binary: send one transaction from a counterfactual smart wallet
//! through a relayer and wait for confirmation.

use std::time::Duration;

use alloy::primitives::{Bytes, U256};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use smart_wallet_relay::config::EnvConfig;
use smart_wallet_relay::directory::DirectoryClient;
use smart_wallet_relay::flow::send_and_confirm;
use smart_wallet_relay::node::AlloyNodeProvider;
use smart_wallet_relay::relay::{RelayClient, RelayStatus};
use smart_wallet_relay::tx::Call;
use smart_wallet_relay::wallet::{SignerAdapter, WalletConfig, DEFAULT_CONTEXT};

/// Send a transaction from a counterfactual smart wallet via a relayer.
#[derive(Debug, Parser)]
#[command(name = "smart-wallet-relay", version)]
struct Args {
    /// Native value to send, in wei (decimal or 0x-hex).
    #[arg(long, default_value = "0")]
    value: String,

    /// Optional hex calldata for the target.
    #[arg(long)]
    data: Option<String>,

    /// Override the base polling interval in milliseconds.
    #[arg(long)]
    poll_interval_ms: Option<u64>,

    /// Override the overall polling deadline in seconds.
    #[arg(long)]
    poll_timeout_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "smart_wallet_relay=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("smart-wallet-relay v0.1.0 starting");

    let args = Args::parse();
    let mut config = EnvConfig::from_env()?;
    if let Some(ms) = args.poll_interval_ms {
        config.poll.base_interval = Duration::from_millis(ms);
    }
    if let Some(secs) = args.poll_timeout_secs {
        config.poll.timeout = Duration::from_secs(secs);
    }

    let value: U256 = args.value.parse()?;
    let data: Bytes = match &args.data {
        Some(hex) => alloy::hex::decode(hex)?.into(),
        None => Bytes::new(),
    };

    tracing::info!(
        chain_id = config.chain_id,
        target = %config.target,
        %value,
        "Configuration loaded"
    );

    let signer = SignerAdapter::from_private_key(&config.private_key)?;
    let wallet_config = WalletConfig::single_signer(signer.address());

    let provider = AlloyNodeProvider::new(&config.node_url_with_key())?;
    let directory = DirectoryClient::new();
    let relay = RelayClient::new(&config.relayer_url, &config.access_key);

    let call = Call {
        value,
        ..Call::contract_call(config.target, data)
    };

    let outcome = send_and_confirm(
        provider,
        &signer,
        &wallet_config,
        &DEFAULT_CONTEXT,
        &directory,
        &relay,
        config.chain_id,
        vec![call],
        &config.poll,
    )
    .await?;

    match outcome.status {
        RelayStatus::Confirmed { tx_hash } => {
            tracing::info!(url = %config.explorer_tx_url(&tx_hash), "Explorer link");
            Ok(())
        }
        RelayStatus::Failed { reason } => {
            tracing::error!(op_hash = %outcome.op_hash, reason = %reason, "Run failed");
            std::process::exit(1);
        }
        RelayStatus::Pending => unreachable!("flow only returns terminal statuses"),
    }
}
