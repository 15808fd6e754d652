// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Feed client configuration.

use std::time::Duration;

/// Configuration for the feed client.
///
/// The retry delay is flat: no backoff, no jitter, no attempt cap. The
/// feed is a single trusted internal endpoint; a deployment fronting a
/// public or high-fan-out source should raise the delay.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// WebSocket URL of the feed endpoint.
    pub url: String,
    /// Delay between a lost connection and the next connect attempt.
    pub retry_delay: Duration,
}

impl Default for FeedConfig {
    fn default() -> Self {
        FeedConfig {
            url: "ws://localhost:8080/ws".to_string(),
            retry_delay: Duration::from_secs(3),
        }
    }
}
