use crate::config::Config;
use crate::error::ExplorerError;
use crate::poller::PolledHead;
use crate::rpc::{ChainHead, QueryResult, RpcClient};
use crate::search::SearchQuery;
use tracing::{debug, error, info};
use tui_input::Input;

/// Sequence number of a user query; only the latest one may update the display
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestId(u64);

/// Message shown under the search bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Invalid input or nothing found
    Info(String),
    /// The node could not be reached or answered garbage
    Error(String),
}

pub struct App {
    pub config: Config,
    pub search_input: Input,
    /// The single active result; None until the first successful query
    pub result: Option<QueryResult>,
    pub notice: Option<Notice>,
    pub loading: Option<String>,
    pub chain_head: Option<ChainHead>,
    pub should_quit: bool,
    pub rpc_client: Option<RpcClient>,
    next_request: u64,
    latest_request: Option<RequestId>,
    /// Request counter when the current notice was raised
    notice_raised: u64,
    last_head_tick: u64,
}

impl App {
    pub fn new(config: Config) -> Self {
        let (rpc_client, notice) = match RpcClient::new(&config.rpc_url) {
            Ok(client) => (Some(client), None),
            Err(e) => {
                error!(url = %config.rpc_url, error = %e, "unusable RPC endpoint");
                (None, Some(Notice::Error(e.to_string())))
            }
        };

        Self {
            config,
            search_input: Input::default(),
            result: None,
            notice,
            loading: None,
            chain_head: None,
            should_quit: false,
            rpc_client,
            next_request: 0,
            latest_request: None,
            notice_raised: 0,
            last_head_tick: 0,
        }
    }

    pub fn has_rpc(&self) -> bool {
        self.rpc_client.is_some()
    }

    pub fn native_symbol(&self) -> &str {
        &self.config.native_symbol
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_some()
    }

    /// Take the trimmed search text, clearing the field
    pub fn submit_search(&mut self) -> String {
        let query = self.search_input.value().trim().to_string();
        self.search_input.reset();
        query
    }

    /// Register a new query and make it the only one whose answer counts
    pub fn begin_query(&mut self, query: &SearchQuery) -> RequestId {
        self.next_request += 1;
        let id = RequestId(self.next_request);
        self.latest_request = Some(id);
        self.loading = Some(format!("Fetching {}...", query.description()));
        self.notice = None;
        debug!(?id, ?query, "query issued");
        id
    }

    /// Apply a query outcome. Returns false if a newer query superseded it.
    pub fn apply_query(
        &mut self,
        id: RequestId,
        outcome: Result<QueryResult, ExplorerError>,
    ) -> bool {
        if self.latest_request != Some(id) {
            debug!(?id, latest = ?self.latest_request, "discarding stale response");
            return false;
        }

        self.loading = None;
        match outcome {
            Ok(result) => {
                self.result = Some(result);
                // A notice raised while this query was in flight is newer than the result
                if self.notice_raised < id.0 {
                    self.notice = None;
                }
            }
            Err(e) => self.report(e),
        }
        true
    }

    /// Surface an error to the user; the current result stays on screen
    pub fn report(&mut self, err: ExplorerError) {
        self.notice_raised = self.next_request;
        if err.is_notice() {
            info!(%err, "query produced a notice");
            self.notice = Some(Notice::Info(err.to_string()));
        } else {
            error!(%err, "query failed");
            self.notice = Some(Notice::Error(err.to_string()));
        }
    }

    /// Apply a polled chain head unless a later tick already landed
    pub fn apply_chain_head(&mut self, update: PolledHead) -> bool {
        if update.tick <= self.last_head_tick {
            debug!(
                tick = update.tick,
                last = self.last_head_tick,
                "discarding stale chain head"
            );
            return false;
        }

        self.last_head_tick = update.tick;
        self.chain_head = Some(update.head);
        true
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}
