//! HTTP adapter implementing [`LedgerRpc`] against a Horizon endpoint.
//!
//! Reads `HORIZON_URL` from the environment at construction time
//! (default: the SDF testnet instance). Transport-only: address
//! validation happens in the caller before any request is issued.

use async_trait::async_trait;
use el_api_types::Address;
use el_chain_client::{AccountRecord, ChainError, LedgerRpc, SubmitResult};
use serde::Deserialize;
use std::collections::HashMap;
use tracing::debug;

pub const TESTNET_URL: &str = "https://horizon-testnet.stellar.org";
pub const TESTNET_PASSPHRASE: &str = "Test SDF Network ; September 2015";

pub struct HorizonClient {
    endpoint: String,
    http: reqwest::Client,
}

impl Default for HorizonClient {
    fn default() -> Self {
        Self::new(None)
    }
}

impl HorizonClient {
    pub fn new(endpoint: Option<String>) -> Self {
        let endpoint = endpoint
            .or_else(|| std::env::var("HORIZON_URL").ok())
            .unwrap_or_else(|| TESTNET_URL.to_owned());
        Self {
            endpoint: endpoint.trim_end_matches('/').to_owned(),
            http: reqwest::Client::new(),
        }
    }
}

// ── Horizon REST API types ─────────────────────────────────────

#[derive(Debug, Deserialize)]
struct AccountResponse {
    account_id: String,
    // Horizon serves the sequence as a JSON string.
    sequence: String,
    #[serde(default)]
    data: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct SubmitResponse {
    hash: String,
}

#[derive(Debug, Deserialize)]
struct HorizonProblem {
    title: String,
    #[serde(default)]
    detail: Option<String>,
}

impl HorizonProblem {
    fn describe(&self) -> String {
        match &self.detail {
            Some(detail) => format!("{}: {}", self.title, detail),
            None => self.title.clone(),
        }
    }
}

impl TryFrom<AccountResponse> for AccountRecord {
    type Error = ChainError;

    fn try_from(body: AccountResponse) -> Result<Self, ChainError> {
        let sequence = body
            .sequence
            .parse::<i64>()
            .map_err(|_| ChainError::Network(format!("non-numeric sequence '{}'", body.sequence)))?;
        Ok(AccountRecord {
            account_id: Address(body.account_id),
            sequence,
            data: body.data,
        })
    }
}

#[async_trait(?Send)]
impl LedgerRpc for HorizonClient {
    async fn load_account(&self, address: &Address) -> Result<AccountRecord, ChainError> {
        let url = format!("{}/accounts/{}", self.endpoint, address.0);
        debug!("loading account {}", address.0);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|err| ChainError::Network(format!("horizon load_account transport: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ChainError::Network(format!(
                "horizon load_account HTTP {status}: {text}"
            )));
        }

        let body: AccountResponse = response
            .json()
            .await
            .map_err(|err| ChainError::Network(format!("horizon load_account parse: {err}")))?;

        body.try_into()
    }

    async fn submit_transaction(
        &self,
        signed_envelope_b64: &str,
    ) -> Result<SubmitResult, ChainError> {
        let url = format!("{}/transactions", self.endpoint);

        let response = self
            .http
            .post(&url)
            .form(&[("tx", signed_envelope_b64)])
            .send()
            .await
            .map_err(|err| ChainError::Network(format!("horizon submit transport: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            if let Ok(problem) = serde_json::from_str::<HorizonProblem>(&text) {
                return Err(ChainError::Rejected(problem.describe()));
            }
            return Err(ChainError::Rejected(format!("HTTP {status}: {text}")));
        }

        let body: SubmitResponse = response
            .json()
            .await
            .map_err(|err| ChainError::Network(format!("horizon submit parse: {err}")))?;

        Ok(SubmitResult { hash: body.hash })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_response_parses_sequence_and_data() -> anyhow::Result<()> {
        let raw = r#"{
            "account_id": "GA7QYNF7SOWQ3GLR2BGMZEHXAVIRZA4KVWLTJJFC7MGXUA74P7UJVSGZ",
            "sequence": "129518969177312",
            "data": { "event_1_name": "TWVldHVw" }
        }"#;

        let body: AccountResponse = serde_json::from_str(raw)?;
        let record = AccountRecord::try_from(body)?;

        assert_eq!(record.sequence, 129_518_969_177_312);
        assert_eq!(
            record.data.get("event_1_name").map(String::as_str),
            Some("TWVldHVw")
        );
        Ok(())
    }

    #[test]
    fn account_response_tolerates_missing_data_map() -> anyhow::Result<()> {
        let raw = r#"{ "account_id": "GABC", "sequence": "7" }"#;
        let record = AccountRecord::try_from(serde_json::from_str::<AccountResponse>(raw)?)?;
        assert!(record.data.is_empty());
        Ok(())
    }

    #[test]
    fn non_numeric_sequence_is_a_network_error() -> anyhow::Result<()> {
        let raw = r#"{ "account_id": "GABC", "sequence": "not-a-number" }"#;
        let result = AccountRecord::try_from(serde_json::from_str::<AccountResponse>(raw)?);
        assert!(matches!(result, Err(ChainError::Network(_))));
        Ok(())
    }

    #[test]
    fn problem_json_describes_rejections() -> anyhow::Result<()> {
        let raw = r#"{ "title": "Transaction Failed", "detail": "tx_bad_seq" }"#;
        let problem: HorizonProblem = serde_json::from_str(raw)?;
        assert_eq!(problem.describe(), "Transaction Failed: tx_bad_seq");

        let bare: HorizonProblem = serde_json::from_str(r#"{ "title": "Timeout" }"#)?;
        assert_eq!(bare.describe(), "Timeout");
        Ok(())
    }
}
