// SPDX-License-Identifier: MPL-2.0

//! Power switch example.
//!
//! Reads an accessory configuration file and queries or changes the power
//! state of the configured server.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example power_switch -- <config.json> status
//! cargo run --example power_switch -- <config.json> on
//! cargo run --example power_switch -- <config.json> off
//! ```
//!
//! The configuration file holds the same object the host runtime passes to
//! the accessory:
//!
//! ```json
//! { "name": "Lab Server", "server": "ilo.example.lan", "user": "admin", "password": "secret" }
//! ```
//!
//! Set `RUST_LOG=ilo_switch=debug` to see each request.

use std::env;

use ilo_switch::{PowerIntent, PowerOutcome, SwitchAccessory, SwitchConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ilo_switch=info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        print_usage(args.first().map_or("power_switch", String::as_str));
        std::process::exit(1);
    }

    let config = SwitchConfig::from_file(&args[1])?;
    let switch = SwitchAccessory::from_config(&config)?;

    match args[2].as_str() {
        "status" => {
            let status = switch.controller().query_status().await?;
            println!(
                "{}: {} ({})",
                switch.name(),
                status.power_state(),
                status.as_str()
            );
        }
        other => {
            let intent: PowerIntent = other.parse()?;
            match switch.set_on(intent == PowerIntent::On).await? {
                PowerOutcome::Dispatched { previous, .. } => {
                    println!("Power button pressed (was {previous})");
                }
                PowerOutcome::AlreadyInState { status } => {
                    println!("Nothing to do, server is {}", status.power_state());
                }
                PowerOutcome::Coalesced { intent } => {
                    println!("Power {intent} already requested, waiting for the server");
                }
            }
        }
    }

    Ok(())
}

fn print_usage(program: &str) {
    eprintln!("Usage: {program} <config.json> <status|on|off>");
}
