//! Best-effort wallet configuration publishing.
//!
//! Registers the wallet's configuration with a remote directory so third
//! parties can resolve it by address later. Publishing is an optimization,
//! not a correctness requirement: any failure (including an already-published
//! conflict) is logged and the transaction flow continues.

use alloy::primitives::Address;
use serde::Serialize;
use thiserror::Error;

use crate::wallet::address::DeploymentContext;
use crate::wallet::topology::WalletConfig;

/// Fixed directory service URL (not configurable per run).
pub const DIRECTORY_URL: &str = "https://sessions.swr-directory.dev";

/// Errors from a publish attempt. Callers treat these as warnings.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("directory request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("directory returned HTTP {status}: {body}")]
    Service { status: u16, body: String },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PublishRequest {
    wallet: String,
    image_hash: String,
    threshold: u16,
    checkpoint: u32,
    signers: Vec<PublishedSigner>,
    factory: String,
    main_module: String,
}

#[derive(Debug, Serialize)]
struct PublishedSigner {
    address: String,
    weight: u16,
}

/// Client for the configuration directory.
#[derive(Debug, Clone)]
pub struct DirectoryClient {
    http: reqwest::Client,
    base_url: String,
}

impl DirectoryClient {
    /// Client against the fixed directory service.
    pub fn new() -> Self {
        Self::with_base_url(DIRECTORY_URL)
    }

    /// Client against an explicit base URL (tests).
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Publish a configuration; idempotent on the service side.
    pub async fn publish(
        &self,
        wallet: Address,
        config: &WalletConfig,
        context: &DeploymentContext,
    ) -> Result<(), DirectoryError> {
        let request = PublishRequest {
            wallet: wallet.to_string(),
            image_hash: config.image_hash().to_string(),
            threshold: config.threshold,
            checkpoint: config.checkpoint,
            signers: config
                .topology
                .signers()
                .into_iter()
                .map(|(address, weight)| PublishedSigner {
                    address: address.to_string(),
                    weight,
                })
                .collect(),
            factory: context.factory.to_string(),
            main_module: context.main_module.to_string(),
        };

        let response = self
            .http
            .post(format!("{}/publish", self.base_url))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DirectoryError::Service {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }

    /// Publish, downgrading any failure to a warning.
    pub async fn publish_best_effort(
        &self,
        wallet: Address,
        config: &WalletConfig,
        context: &DeploymentContext,
    ) {
        match self.publish(wallet, config, context).await {
            Ok(()) => tracing::info!(wallet = %wallet, "Configuration published"),
            Err(e) => tracing::warn!(wallet = %wallet, error = %e, "Configuration publish failed, continuing"),
        }
    }
}

impl Default for DirectoryClient {
    fn default() -> Self {
        Self::new()
    }
}
