use alloy::primitives::U256;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::helper::*;
use crate::error::ExplorerError;

// ============================================================================
// Wire Types
// ============================================================================

/// `eth_getBlockByNumber` result, reduced to the fields we display
#[derive(Debug, Deserialize)]
pub(crate) struct RawBlock {
    pub number: String,
    pub hash: Option<String>,
    pub timestamp: String,
    #[serde(default)]
    pub transactions: Vec<serde_json::Value>,
}

/// `eth_getTransactionByHash` result
#[derive(Debug, Deserialize)]
pub(crate) struct RawTransaction {
    pub hash: String,
    pub from: String,
    pub to: Option<String>,
    pub value: String,
    pub gas: String,
}

// ============================================================================
// Data Types
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct BlockSummary {
    pub number: u64,
    pub hash: String,
    pub transaction_count: usize,
    pub timestamp: DateTime<Utc>,
}

impl BlockSummary {
    pub(crate) fn from_raw(raw: RawBlock) -> Result<Self, ExplorerError> {
        let number = decode_quantity_u64(&raw.number)?;
        let timestamp = decode_timestamp(&raw.timestamp)?;

        Ok(Self {
            number,
            hash: raw.hash.unwrap_or_default(),
            transaction_count: raw.transactions.len(),
            timestamp,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransactionSummary {
    pub hash: String,
    pub from: String,
    /// None for contract creation
    pub to: Option<String>,
    pub value_wei: U256,
    /// Gas limit exactly as the node sent it (hex quantity)
    pub gas: String,
}

impl TransactionSummary {
    pub(crate) fn from_raw(raw: RawTransaction) -> Result<Self, ExplorerError> {
        Ok(Self {
            value_wei: decode_quantity_u256(&raw.value)?,
            hash: raw.hash,
            from: raw.from,
            to: raw.to,
            gas: raw.gas,
        })
    }

    /// Value in native units
    pub fn value(&self) -> String {
        wei_to_native(self.value_wei)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AccountBalance {
    pub address: String,
    pub balance_wei: U256,
}

impl AccountBalance {
    /// Balance in native units
    pub fn balance(&self) -> String {
        wei_to_native(self.balance_wei)
    }
}

/// Latest block as seen by the poller
#[derive(Debug, Clone, PartialEq)]
pub struct ChainHead {
    pub number: u64,
    pub timestamp: DateTime<Utc>,
    pub elapsed: String,
}

/// The one result the explorer is showing
#[derive(Debug, Clone, PartialEq)]
pub enum QueryResult {
    Block(BlockSummary),
    Transaction(TransactionSummary),
    Account(AccountBalance),
}

/// Hex seconds since the epoch to an absolute time
pub fn decode_timestamp(quantity: &str) -> Result<DateTime<Utc>, ExplorerError> {
    let secs = decode_quantity_u64(quantity)?;
    i64::try_from(secs)
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .ok_or_else(|| ExplorerError::Rpc(format!("timestamp {quantity:?} out of range")))
}
