//! Connection parameters for a single relay run

pub const DEFAULT_RABBIT_HOST_URL: &str = "http://localhost";
pub const DEFAULT_RABBIT_PORT: u16 = 15672;
pub const DEFAULT_RABBIT_VHOST: &str = "%2F";
/// guest/guest
pub const DEFAULT_RABBIT_AUTHORIZATION: &str = "Basic Z3Vlc3Q6Z3Vlc3Q=";
pub const DEFAULT_RAVEN_HOST_URL: &str = "http://localhost";
pub const DEFAULT_RAVEN_PORT: u16 = 8080;
pub const DEFAULT_RAVEN_ENTITY: &str = "CopiedMessages";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrokerConfig {
    pub host_url: String,
    pub port: u16,
    /// Already escaped for use as a path segment.
    pub vhost: String,
    pub queue: String,
    /// Sent verbatim as the `Authorization` header.
    pub authorization: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub host_url: String,
    pub port: u16,
    pub entity: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub broker: BrokerConfig,
    pub store: StoreConfig,
    pub message_count: u32,
    pub requeue: bool,
    pub verbose: bool,
}

impl BrokerConfig {
    pub fn new(queue: impl Into<String>) -> Self {
        Self {
            host_url: DEFAULT_RABBIT_HOST_URL.to_string(),
            port: DEFAULT_RABBIT_PORT,
            vhost: DEFAULT_RABBIT_VHOST.to_string(),
            queue: queue.into(),
            authorization: DEFAULT_RABBIT_AUTHORIZATION.to_string(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            host_url: DEFAULT_RAVEN_HOST_URL.to_string(),
            port: DEFAULT_RAVEN_PORT,
            entity: DEFAULT_RAVEN_ENTITY.to_string(),
        }
    }
}

impl RelayConfig {
    /// Defaults for everything except the queue and how many messages to take.
    pub fn new(queue: impl Into<String>, message_count: u32) -> Self {
        Self {
            broker: BrokerConfig::new(queue),
            store: StoreConfig::default(),
            message_count,
            requeue: true,
            verbose: false,
        }
    }
}
