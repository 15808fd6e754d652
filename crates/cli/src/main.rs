// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! linepulse: live terminal board for a single transit line.
//!
//! Connects to the backend's WebSocket feed and redraws the board on
//! every snapshot or connection status change.

mod display;
#[cfg(test)]
mod display_tests;

use std::io::stdout;
use std::time::Duration;

use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use lp_client::{FeedClient, FeedConfig};

/// linepulse: live train board
#[derive(Parser, Debug)]
#[command(name = "linepulse")]
#[command(about = "Live terminal board for a single transit line")]
struct Args {
    /// WebSocket feed endpoint
    #[arg(short, long, default_value = "ws://localhost:8080/ws")]
    url: String,

    /// Seconds to wait between reconnect attempts
    #[arg(long, default_value = "3")]
    retry_delay_secs: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting linepulse");
    info!("  Feed endpoint: {}", args.url);

    let mut client = FeedClient::new(FeedConfig {
        url: args.url,
        retry_delay: Duration::from_secs(args.retry_delay_secs),
    });
    let mut updates = client.projector().subscribe();
    client.start();

    let mut out = stdout();
    let initial = updates.borrow_and_update().clone();
    display::render(&mut out, &initial)?;

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let view = updates.borrow_and_update().clone();
                display::render(&mut out, &view)?;
            }
        }
    }

    client.shutdown().await;
    Ok(())
}
