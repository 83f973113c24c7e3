use super::test_utilities::{MockServer, RawReply, RawStore, relay_config, unused_port};
use axum::http::Method;
use rabbit_to_raven::{RelayError, store_messages};
use serde_json::json;

#[test_log::test(tokio::test)]
async fn test_store_posts_every_message_with_entity_header() {
    let store = MockServer::accepting_store().await;
    let mut config = relay_config(unused_port(), store.port, "orders", 3);
    config.store.entity = "Orders".to_string();
    let messages = vec![
        json!({"payload": "a", "routing_key": "orders"}),
        json!({"payload": "b", "properties": {"headers": {"x": 1}}}),
        json!("plain string message"),
    ];

    let stored = store_messages(&reqwest::Client::new(), &config, &messages)
        .await
        .unwrap();

    assert_eq!(stored, 3);
    let requests = store.requests();
    assert_eq!(requests.len(), 3);
    for (request, message) in requests.iter().zip(&messages) {
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.path, "/docs");
        assert_eq!(request.header("raven-entity-name"), Some("Orders"));
        assert_eq!(request.body, serde_json::to_string(message).unwrap());
    }
}

#[test_log::test(tokio::test)]
async fn test_store_stops_at_first_rejection() {
    let store = MockServer::start(vec![
        (201, "{}".to_string()),
        (201, "{}".to_string()),
        (500, "index is corrupted".to_string()),
        (201, "{}".to_string()),
    ])
    .await;
    let config = relay_config(unused_port(), store.port, "orders", 4);
    let messages = vec![
        json!({"id": "A"}),
        json!({"id": "B"}),
        json!({"id": "C"}),
        json!({"id": "D"}),
    ];

    let error = store_messages(&reqwest::Client::new(), &config, &messages)
        .await
        .unwrap_err();

    assert_eq!(
        error,
        RelayError::StoreFailed {
            status: 500,
            body: "index is corrupted".to_string(),
            stored: 2,
        }
    );
    let sent: Vec<_> = store.requests().iter().map(|r| r.json()).collect();
    assert_eq!(sent, messages[..3].to_vec());
}

#[tokio::test]
async fn test_store_requires_created_status() {
    // 200 is a success for most APIs but not for document creation
    let store = MockServer::start(vec![(200, "ok".to_string())]).await;
    let config = relay_config(unused_port(), store.port, "orders", 2);
    let messages = vec![json!({"id": 1}), json!({"id": 2})];

    let error = store_messages(&reqwest::Client::new(), &config, &messages)
        .await
        .unwrap_err();

    assert_eq!(error.status(), Some(200));
    assert_eq!(error.stored(), 0);
    assert_eq!(store.requests().len(), 1);
}

#[tokio::test]
async fn test_store_nothing_to_do() {
    let store = MockServer::accepting_store().await;
    let config = relay_config(unused_port(), store.port, "orders", 0);

    let stored = store_messages(&reqwest::Client::new(), &config, &[])
        .await
        .unwrap();

    assert_eq!(stored, 0);
    assert!(store.requests().is_empty());
}

#[test_log::test(tokio::test)]
async fn test_store_connection_lost_keeps_partial_count() {
    let store = RawStore::start(vec![RawReply::Created, RawReply::Created, RawReply::Hangup]).await;
    let config = relay_config(unused_port(), store.port, "orders", 4);
    let messages = vec![
        json!({"id": "A"}),
        json!({"id": "B"}),
        json!({"id": "C"}),
        json!({"id": "D"}),
    ];

    let error = store_messages(&reqwest::Client::new(), &config, &messages)
        .await
        .unwrap_err();

    match &error {
        RelayError::Transport { context, stored, .. } => {
            assert_eq!(context, "store");
            assert_eq!(*stored, 2);
        }
        other => panic!("Expected transport error, got {other:?}"),
    }
    assert_eq!(error.stored(), 2);
    assert_eq!(error.status(), None);
    assert_eq!(store.received(), 3);
}

#[test_log::test(tokio::test)]
async fn test_store_counts_created_even_if_body_is_cut_off() {
    let store = RawStore::start(vec![
        RawReply::Created,
        RawReply::CreatedTruncated,
        RawReply::Created,
    ])
    .await;
    let mut config = relay_config(unused_port(), store.port, "orders", 3);
    config.verbose = true;
    let messages = vec![json!({"id": "A"}), json!({"id": "B"}), json!({"id": "C"})];

    let stored = store_messages(&reqwest::Client::new(), &config, &messages)
        .await
        .unwrap();

    assert_eq!(stored, 3);
    assert_eq!(store.received(), 3);
}
