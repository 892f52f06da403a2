use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ExplorerError;

/// Every request carries the same id; calls are independent.
const REQUEST_ID: u64 = 1;

/// Something that can answer a JSON-RPC call with its `result` member
#[async_trait]
pub trait Transport: Send + Sync + 'static {
    /// Returns the `result` value, which is `Null` when the node found nothing
    async fn request(&self, method: &str, params: Value) -> Result<Value, ExplorerError>;

    /// Endpoint name for logs and the status line
    fn endpoint(&self) -> String;
}

#[derive(Debug, Serialize)]
struct JsonRpcRequest<'a> {
    jsonrpc: &'static str,
    method: &'a str,
    params: Value,
    id: u64,
}

#[derive(Debug, Deserialize)]
struct JsonRpcResponse {
    #[serde(default)]
    result: Value,
    error: Option<JsonRpcErrorObject>,
}

#[derive(Debug, Deserialize)]
struct JsonRpcErrorObject {
    code: i64,
    message: String,
}

/// JSON-RPC 2.0 over HTTP(S) POST
pub struct HttpTransport {
    client: reqwest::Client,
    url: reqwest::Url,
}

impl HttpTransport {
    pub fn new(rpc_url: &str) -> Result<Self, ExplorerError> {
        let url = reqwest::Url::parse(rpc_url)
            .map_err(|e| ExplorerError::Rpc(format!("Invalid RPC URL {rpc_url:?}: {e}")))?;

        Ok(Self {
            client: reqwest::Client::new(),
            url,
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn request(&self, method: &str, params: Value) -> Result<Value, ExplorerError> {
        let body = JsonRpcRequest {
            jsonrpc: "2.0",
            method,
            params,
            id: REQUEST_ID,
        };

        let bytes = self
            .client
            .post(self.url.clone())
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        let response: JsonRpcResponse = serde_json::from_slice(&bytes)?;

        if let Some(err) = response.error {
            return Err(ExplorerError::Rpc(format!(
                "{method} failed ({}): {}",
                err.code, err.message
            )));
        }

        Ok(response.result)
    }

    fn endpoint(&self) -> String {
        self.url.to_string()
    }
}
