//! Command-line interface

use crate::config::*;
use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(
    name = "rabbit-to-raven",
    version,
    about = "Gets messages from RabbitMQ and stores them in RavenDB."
)]
pub struct Cli {
    /// The RabbitMQ queue to get the messages from
    pub rabbit_queue: String,

    /// The number of messages to get
    pub message_count: u32,

    /// The RabbitMQ host URL
    #[arg(short = 'r', long, default_value = DEFAULT_RABBIT_HOST_URL)]
    pub rabbit_host_url: String,

    /// The RabbitMQ management port
    #[arg(short = 'p', long, default_value_t = DEFAULT_RABBIT_PORT)]
    pub rabbit_port: u16,

    /// The RabbitMQ vhost name, already URL-escaped
    #[arg(short = 's', long, default_value = DEFAULT_RABBIT_VHOST)]
    pub rabbit_vhost: String,

    /// The authorization string for the RabbitMQ request header
    #[arg(short = 'z', long, default_value = DEFAULT_RABBIT_AUTHORIZATION)]
    pub rabbit_authorization_string: String,

    /// The RavenDB host URL
    #[arg(short = 'u', long, default_value = DEFAULT_RAVEN_HOST_URL)]
    pub raven_host_url: String,

    /// The RavenDB port
    #[arg(short = 't', long, default_value_t = DEFAULT_RAVEN_PORT)]
    pub raven_port: u16,

    /// The name of the RavenDB entities
    #[arg(short = 'e', long, default_value = DEFAULT_RAVEN_ENTITY)]
    pub raven_entity: String,

    /// Whether or not to requeue messages (true/false)
    #[arg(short = 'q', long, default_value = "true", action = ArgAction::Set, value_parser = parse_requeue)]
    pub requeue: bool,

    #[arg(short = 'v', long)]
    pub verbose: bool,
}

fn parse_requeue(value: &str) -> Result<bool, String> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(format!("expected true or false, got '{value}'")),
    }
}

impl From<Cli> for RelayConfig {
    fn from(cli: Cli) -> Self {
        RelayConfig {
            broker: BrokerConfig {
                host_url: cli.rabbit_host_url,
                port: cli.rabbit_port,
                vhost: cli.rabbit_vhost,
                queue: cli.rabbit_queue,
                authorization: cli.rabbit_authorization_string,
            },
            store: StoreConfig {
                host_url: cli.raven_host_url,
                port: cli.raven_port,
                entity: cli.raven_entity,
            },
            message_count: cli.message_count,
            requeue: cli.requeue,
            verbose: cli.verbose,
        }
    }
}
