//! Latest-block poller.
//!
//! Fetches the chain head once at startup and then on a fixed interval until
//! stopped. Every tick runs as its own task, so a hung request never holds up
//! the schedule; completions are numbered so the consumer can drop late ones.

use chrono::{DateTime, Utc};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::error::ExplorerError;
use crate::rpc::{ChainHead, RpcClient};

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(15);

/// "45 secs ago" below a minute, whole minutes after that
pub fn format_elapsed(seconds: i64) -> String {
    let seconds = seconds.max(0);
    if seconds < 60 {
        format!("{seconds} secs ago")
    } else {
        format!("{} mins ago", seconds / 60)
    }
}

/// Build a chain head as observed at `now`
pub fn chain_head_at(number: u64, timestamp: DateTime<Utc>, now: DateTime<Utc>) -> ChainHead {
    let elapsed = (now - timestamp).num_seconds();
    ChainHead {
        number,
        timestamp,
        elapsed: format_elapsed(elapsed),
    }
}

/// One poll: head number, then that block's timestamp
pub async fn poll_once(client: &RpcClient) -> Result<ChainHead, ExplorerError> {
    let number = client.fetch_block_number().await?;
    let block = client.fetch_block(number).await?;
    Ok(chain_head_at(number, block.timestamp, Utc::now()))
}

/// A completed poll, tagged with the tick that started it
#[derive(Debug, Clone)]
pub struct PolledHead {
    pub tick: u64,
    pub head: ChainHead,
}

pub struct Poller;

impl Poller {
    /// Start polling. Updates go to `sink` until the handle is stopped or dropped.
    pub fn spawn<M>(client: RpcClient, interval: Duration, sink: mpsc::Sender<M>) -> PollerHandle
    where
        M: From<PolledHead> + Send + 'static,
    {
        info!(endpoint = %client.endpoint(), ?interval, "starting chain head poller");

        let task = tokio::spawn(async move {
            // First tick fires immediately
            let mut ticker = tokio::time::interval(interval);
            let mut tick = 0u64;

            loop {
                ticker.tick().await;
                if sink.is_closed() {
                    break;
                }
                tick += 1;

                let client = client.clone();
                let sink = sink.clone();
                tokio::spawn(async move {
                    match poll_once(&client).await {
                        Ok(head) => {
                            debug!(tick, number = head.number, "chain head polled");
                            let _ = sink.send(PolledHead { tick, head }.into()).await;
                        }
                        Err(e) => warn!(tick, error = %e, "chain head poll failed"),
                    }
                });
            }

            debug!("chain head poller finished");
        });

        PollerHandle { task }
    }
}

/// Owns the schedule; polling ends when this is stopped or dropped
pub struct PollerHandle {
    task: JoinHandle<()>,
}

impl PollerHandle {
    pub fn stop(&self) {
        if !self.task.is_finished() {
            info!("stopping chain head poller");
            self.task.abort();
        }
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
