//! akex - Alkebuleum block explorer
//!
//! A terminal block explorer for an EVM chain: classify a search, ask the node,
//! show one block, transaction or balance, and keep the chain head fresh.

pub mod app;
pub mod config;
pub mod error;
pub mod poller;
pub mod rpc;
pub mod search;
pub mod ui;

// Re-export commonly used types
pub use app::{App, Notice, RequestId};
pub use config::Config;
pub use error::ExplorerError;
pub use rpc::{QueryResult, RpcClient};
pub use search::SearchQuery;
