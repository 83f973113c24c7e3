//! Writes fetched messages into RavenDB as documents

use crate::Message;
use crate::config::RelayConfig;
use crate::error::RelayError;
use crate::urls::build_store_url;
use reqwest::StatusCode;
use tracing::{debug, error, warn};

pub const ENTITY_HEADER: &str = "Raven-Entity-name";

/// Posts each message in order and returns how many were accepted.
///
/// Stops at the first response that is not a 201; the remaining messages are
/// never sent and the error carries the count stored so far.
#[tracing::instrument(level = "info", skip_all, fields(entity = %config.store.entity, messages = messages.len()))]
pub async fn store_messages(
    client: &reqwest::Client,
    config: &RelayConfig,
    messages: &[Message],
) -> Result<usize, RelayError> {
    let url = build_store_url(&config.store, config.verbose);
    let mut stored = 0;

    for (index, message) in messages.iter().enumerate() {
        let document = serde_json::to_string(message).map_err(|e| {
            RelayError::from_serialization_error(e, "message").with_stored(stored)
        })?;

        let response = client
            .post(&url)
            .header(ENTITY_HEADER, config.store.entity.as_str())
            .body(document)
            .send()
            .await
            .map_err(|e| RelayError::from_reqwest_error(e, "store").with_stored(stored))?;

        let status = response.status();
        if status != StatusCode::CREATED {
            error!(index, status = status.as_u16(), "document store rejected message");
            let body = response.text().await.map_err(|e| {
                RelayError::from_reqwest_error(e, "store response body").with_stored(stored)
            })?;
            return Err(RelayError::StoreFailed {
                status: status.as_u16(),
                body,
                stored,
            });
        }

        // The status line alone means the document was accepted.
        stored += 1;
        debug!(index, "stored message");
        if config.verbose {
            match response.text().await {
                Ok(text) => println!("{text}"),
                Err(e) => warn!(index, "failed to read store response body: {e}"),
            }
        }
    }

    Ok(stored)
}
