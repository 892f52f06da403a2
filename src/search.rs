use crate::error::ExplorerError;

const ADDRESS_LEN: usize = 42;
const TX_HASH_LEN: usize = 66;

/// A classified search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// Decimal block number
    BlockNumber(u64),
    /// 0x + 64 chars, lowercased
    TransactionHash(String),
    /// 0x + 40 chars, lowercased
    Address(String),
}

impl SearchQuery {
    /// Classify free-text search input
    pub fn resolve(input: &str) -> Result<Self, ExplorerError> {
        let trimmed = input.trim();

        if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit()) {
            return trimmed.parse::<u64>().map(Self::BlockNumber).map_err(|_| {
                ExplorerError::InvalidInput(format!("Block number too large: {trimmed}"))
            });
        }

        // Identifiers are ASCII, so byte length is character length
        let normalized = trimmed.to_ascii_lowercase();
        if normalized.is_ascii() && normalized.starts_with("0x") {
            match normalized.len() {
                ADDRESS_LEN => return Ok(Self::Address(normalized)),
                TX_HASH_LEN => return Ok(Self::TransactionHash(normalized)),
                _ => {}
            }
        }

        Err(ExplorerError::InvalidInput(
            "please enter a valid block number, transaction hash, or address".to_string(),
        ))
    }

    /// Pick the query named by launch parameters, in precedence tx > block > address
    pub fn from_launch_params(
        tx: Option<&str>,
        block: Option<&str>,
        address: Option<&str>,
    ) -> Option<Result<Self, ExplorerError>> {
        if let Some(hash) = present(tx) {
            return Some(Self::resolve_as(hash, "tx", |q| {
                matches!(q, Self::TransactionHash(_))
            }));
        }
        if let Some(number) = present(block) {
            return Some(Self::resolve_as(number, "block", |q| {
                matches!(q, Self::BlockNumber(_))
            }));
        }
        present(address).map(|addr| {
            Self::resolve_as(addr, "address", |q| matches!(q, Self::Address(_)))
        })
    }

    fn resolve_as(
        value: &str,
        param: &str,
        expected: impl Fn(&Self) -> bool,
    ) -> Result<Self, ExplorerError> {
        match Self::resolve(value) {
            Ok(query) if expected(&query) => Ok(query),
            _ => Err(ExplorerError::InvalidInput(format!(
                "--{param} does not accept {:?}",
                value.trim()
            ))),
        }
    }

    /// Returns a human-readable description of the query type
    pub fn description(&self) -> String {
        match self {
            Self::BlockNumber(num) => format!("block {num}"),
            Self::TransactionHash(hash) => format!("transaction {hash}"),
            Self::Address(addr) => format!("balance of {addr}"),
        }
    }
}

/// Blank launch parameters count as absent
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
