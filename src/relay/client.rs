//! HTTP client for the relayer service.
//!
//! # Responsibilities
//! - Submit built calldata for asynchronous broadcast (`relay`)
//! - Read current operation status (`status`)
//!
//! Gas estimation and payment happen inside the relayer; the caller only
//! holds the returned operation hash and polls.

use alloy::primitives::{Address, Bytes};
use serde::{Deserialize, Serialize};

use crate::relay::types::{OpHash, RelayError, RelayStatus};

/// Header carrying the project access key.
const ACCESS_KEY_HEADER: &str = "X-Access-Key";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RelayRequest<'a> {
    to: String,
    data: &'a str,
    chain_id: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RelayResponse {
    op_hash: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusRequest<'a> {
    op_hash: &'a str,
    chain_id: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StatusResponse {
    status: String,
    txn_hash: Option<String>,
    reason: Option<String>,
}

/// Client for one relayer endpoint, authenticated by access key.
#[derive(Debug, Clone)]
pub struct RelayClient {
    http: reqwest::Client,
    base_url: String,
    access_key: String,
}

impl RelayClient {
    /// Create a client for a relayer base URL.
    pub fn new(base_url: &str, access_key: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            access_key: access_key.to_string(),
        }
    }

    /// Submit calldata for broadcast; returns a tracking handle immediately.
    pub async fn relay(
        &self,
        to: Address,
        data: &Bytes,
        chain_id: u64,
    ) -> Result<OpHash, RelayError> {
        let data_hex = data.to_string();
        let request = RelayRequest {
            to: to.to_string(),
            data: &data_hex,
            chain_id,
        };

        let response = self
            .http
            .post(format!("{}/relay", self.base_url))
            .header(ACCESS_KEY_HEADER, &self.access_key)
            .json(&request)
            .send()
            .await?;

        let body: RelayResponse = check(response).await?.json().await?;

        tracing::debug!(op_hash = %body.op_hash, "Relay accepted");
        Ok(OpHash(body.op_hash))
    }

    /// Read the current status of a submitted operation.
    pub async fn status(&self, op_hash: &OpHash, chain_id: u64) -> Result<RelayStatus, RelayError> {
        let request = StatusRequest {
            op_hash: &op_hash.0,
            chain_id,
        };

        let response = self
            .http
            .post(format!("{}/status", self.base_url))
            .header(ACCESS_KEY_HEADER, &self.access_key)
            .json(&request)
            .send()
            .await?;

        let body: StatusResponse = check(response).await?.json().await?;
        parse_status(body)
    }
}

async fn check(response: reqwest::Response) -> Result<reqwest::Response, RelayError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(RelayError::Service {
        status: status.as_u16(),
        body,
    })
}

fn parse_status(body: StatusResponse) -> Result<RelayStatus, RelayError> {
    match body.status.as_str() {
        "pending" => Ok(RelayStatus::Pending),
        "confirmed" => {
            let tx_hash = body
                .txn_hash
                .ok_or_else(|| RelayError::Malformed("confirmed without txnHash".to_string()))?;
            Ok(RelayStatus::Confirmed { tx_hash })
        }
        "failed" => Ok(RelayStatus::Failed {
            reason: body
                .reason
                .unwrap_or_else(|| "unspecified relayer failure".to_string()),
        }),
        other => Err(RelayError::Malformed(format!("unknown status '{}'", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_confirmed() {
        let status = parse_status(StatusResponse {
            status: "confirmed".into(),
            txn_hash: Some("0xabc".into()),
            reason: None,
        })
        .unwrap();
        assert_eq!(
            status,
            RelayStatus::Confirmed {
                tx_hash: "0xabc".into()
            }
        );
    }

    #[test]
    fn test_parse_confirmed_without_hash_is_malformed() {
        let result = parse_status(StatusResponse {
            status: "confirmed".into(),
            txn_hash: None,
            reason: None,
        });
        assert!(matches!(result, Err(RelayError::Malformed(_))));
    }

    #[test]
    fn test_parse_failed_defaults_reason() {
        let status = parse_status(StatusResponse {
            status: "failed".into(),
            txn_hash: None,
            reason: None,
        })
        .unwrap();
        assert_eq!(
            status,
            RelayStatus::Failed {
                reason: "unspecified relayer failure".into()
            }
        );
    }

    #[test]
    fn test_parse_unknown_status() {
        let result = parse_status(StatusResponse {
            status: "queued".into(),
            txn_hash: None,
            reason: None,
        });
        assert!(matches!(result, Err(RelayError::Malformed(_))));
    }
}
