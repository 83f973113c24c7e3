//! Fetch then store, in that order, exactly once

use crate::config::RelayConfig;
use crate::error::RelayError;
use crate::fetcher::fetch_messages;
use crate::writer::store_messages;
use std::fmt;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunResult {
    pub fetched: usize,
    pub stored: usize,
}

impl fmt::Display for RunResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Fetched: {}", self.fetched)?;
        write!(f, "Stored: {}", self.stored)
    }
}

/// Fetches from the broker and stores what came back.
pub async fn run(
    client: &reqwest::Client,
    config: &RelayConfig,
) -> Result<RunResult, RelayError> {
    let messages = fetch_messages(client, config).await?;
    let stored = store_messages(client, config, &messages).await?;
    info!(fetched = messages.len(), stored, "relay finished");
    Ok(RunResult {
        fetched: messages.len(),
        stored,
    })
}
