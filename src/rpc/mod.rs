mod helper;
mod transport;
mod types;

pub use helper::*;
pub use transport::{HttpTransport, Transport};
pub use types::*;

use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::error::ExplorerError;
use crate::search::SearchQuery;

/// Client for the handful of `eth_*` calls the explorer makes
#[derive(Clone)]
pub struct RpcClient {
    transport: Arc<dyn Transport>,
}

impl RpcClient {
    pub fn new(rpc_url: &str) -> Result<Self, ExplorerError> {
        Ok(Self::with_transport(HttpTransport::new(rpc_url)?))
    }

    pub fn with_transport(transport: impl Transport) -> Self {
        Self {
            transport: Arc::new(transport),
        }
    }

    pub fn endpoint(&self) -> String {
        self.transport.endpoint()
    }

    /// Issue one call and decode a non-null result
    async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Value,
    ) -> Result<Option<T>, ExplorerError> {
        debug!(method, %params, "rpc call");

        let value = self
            .transport
            .request(method, params)
            .await
            .inspect_err(|e| warn!(method, error = %e, "rpc call failed"))?;

        if value.is_null() {
            debug!(method, "rpc returned null");
            return Ok(None);
        }

        serde_json::from_value(value)
            .map(Some)
            .map_err(|e| ExplorerError::Rpc(format!("{method}: unexpected response: {e}")))
    }

    pub async fn fetch_block(&self, number: u64) -> Result<BlockSummary, ExplorerError> {
        let raw: RawBlock = self
            .call(
                "eth_getBlockByNumber",
                json!([encode_quantity(number), true]),
            )
            .await?
            .ok_or_else(|| ExplorerError::NotFound(format!("Block #{number}")))?;

        BlockSummary::from_raw(raw)
    }

    pub async fn fetch_transaction(&self, hash: &str) -> Result<TransactionSummary, ExplorerError> {
        let raw: RawTransaction = self
            .call("eth_getTransactionByHash", json!([hash]))
            .await?
            .ok_or_else(|| ExplorerError::NotFound("Transaction".to_string()))?;

        TransactionSummary::from_raw(raw)
    }

    pub async fn fetch_account_balance(
        &self,
        address: &str,
    ) -> Result<AccountBalance, ExplorerError> {
        let balance: String = self
            .call("eth_getBalance", json!([address, "latest"]))
            .await?
            .ok_or_else(|| ExplorerError::NotFound("Account balance".to_string()))?;

        Ok(AccountBalance {
            address: address.to_string(),
            balance_wei: decode_quantity_u256(&balance)?,
        })
    }

    pub async fn fetch_block_number(&self) -> Result<u64, ExplorerError> {
        let number: String = self
            .call("eth_blockNumber", json!([]))
            .await?
            .ok_or_else(|| ExplorerError::Rpc("eth_blockNumber returned null".to_string()))?;

        decode_quantity_u64(&number)
    }

    /// Run a classified search against the node
    pub async fn execute(&self, query: &SearchQuery) -> Result<QueryResult, ExplorerError> {
        match query {
            SearchQuery::BlockNumber(number) => {
                self.fetch_block(*number).await.map(QueryResult::Block)
            }
            SearchQuery::TransactionHash(hash) => self
                .fetch_transaction(hash)
                .await
                .map(QueryResult::Transaction),
            SearchQuery::Address(address) => self
                .fetch_account_balance(address)
                .await
                .map(QueryResult::Account),
        }
    }
}
