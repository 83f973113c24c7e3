pub mod cli;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod relay;
pub mod telemetry;
pub mod urls;
pub mod writer;

pub use config::{BrokerConfig, RelayConfig, StoreConfig};
pub use error::RelayError;
pub use fetcher::fetch_messages;
pub use relay::{RunResult, run};
pub use writer::store_messages;

// Re-export logging macros for consistent usage across the crate
pub use log::{debug, error, info, trace, warn};

/// A broker message, passed through to the document store untouched.
pub type Message = serde_json::Value;
