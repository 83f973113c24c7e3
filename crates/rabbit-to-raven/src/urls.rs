//! Endpoint URLs for the broker and the document store

use crate::config::{BrokerConfig, StoreConfig};

/// `<host>:<port>/api/queues/<vhost>/<queue>/get`
pub fn build_broker_url(broker: &BrokerConfig, verbose: bool) -> String {
    let url = format!(
        "{}:{}/api/queues/{}/{}/get",
        broker.host_url, broker.port, broker.vhost, broker.queue
    );
    if verbose {
        println!("{url}");
    }
    url
}

/// `<host>:<port>/docs`
pub fn build_store_url(store: &StoreConfig, verbose: bool) -> String {
    let url = format!("{}:{}/docs", store.host_url, store.port);
    if verbose {
        println!("{url}");
    }
    url
}
