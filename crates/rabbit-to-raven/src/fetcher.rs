//! Pulls messages from the RabbitMQ management API

use crate::Message;
use crate::config::RelayConfig;
use crate::error::RelayError;
use crate::urls::build_broker_url;
use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;
use tracing::{debug, error};

/// Body of `POST /api/queues/{vhost}/{queue}/get`.
#[derive(Debug, Serialize, PartialEq)]
pub struct GetMessagesRequest {
    pub count: u32,
    pub requeue: bool,
    pub encoding: String,
}

impl GetMessagesRequest {
    pub fn new(count: u32, requeue: bool) -> Self {
        Self {
            count,
            requeue,
            encoding: "auto".to_string(),
        }
    }
}

/// Issues the single get request and returns the broker's messages in order.
///
/// Anything but a 200 is a [`RelayError::FetchFailed`] carrying the status and
/// raw body.
#[tracing::instrument(level = "info", skip_all, fields(queue = %config.broker.queue, count = config.message_count))]
pub async fn fetch_messages(
    client: &reqwest::Client,
    config: &RelayConfig,
) -> Result<Vec<Message>, RelayError> {
    let url = build_broker_url(&config.broker, config.verbose);
    let request = GetMessagesRequest::new(config.message_count, config.requeue);
    let body = serde_json::to_string(&request)
        .map_err(|e| RelayError::from_serialization_error(e, "broker request"))?;

    let response = client
        .post(&url)
        .header(CONTENT_TYPE, "application/json")
        .header(AUTHORIZATION, config.broker.authorization.as_str())
        .body(body)
        .send()
        .await
        .map_err(|e| RelayError::from_reqwest_error(e, "fetch"))?;

    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| RelayError::from_reqwest_error(e, "fetch response body"))?;

    if status != StatusCode::OK {
        error!(status = status.as_u16(), "broker rejected get request");
        return Err(RelayError::FetchFailed {
            status: status.as_u16(),
            body: text,
        });
    }

    let messages: Vec<Message> = serde_json::from_str(&text)
        .map_err(|e| RelayError::from_serialization_error(e, "broker response"))?;
    debug!(fetched = messages.len(), "fetched messages");
    Ok(messages)
}
