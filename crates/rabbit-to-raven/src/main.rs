//! RabbitToRaven binary

use clap::Parser;
use rabbit_to_raven::cli::Cli;
use rabbit_to_raven::{RelayConfig, run, telemetry, warn};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    telemetry::init();
    let config = RelayConfig::from(Cli::parse());
    let client = reqwest::Client::new();

    match run(&client, &config).await {
        Ok(result) => println!("{result}"),
        Err(e) => {
            if let Some(status) = e.status() {
                println!("{status}");
            }
            if e.stored() > 0 {
                warn!("Stopped after storing {} message(s)", e.stored());
            }
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
