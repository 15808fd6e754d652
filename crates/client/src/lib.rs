// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! lp-client: live feed client for the linepulse status board.
//!
//! Maintains one logical connection to a server-push snapshot feed and
//! projects the latest state to presentation code.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ FeedClient  │◄────│  Transport  │◄────│    Feed     │
//! │ (task loop) │     │   (trait)   │     │  (server)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │  Projector  │────► consumers (current view + change notification)
//! │  (watch)    │
//! └─────────────┘
//! ```
//!
//! # Features
//!
//! - WebSocket connection to the whole-snapshot feed
//! - Automatic reconnect at a flat delay, retrying forever
//! - Malformed payloads dropped without disturbing published state
//! - Injectable transport trait for testing

mod client;
mod config;
mod event;
mod projector;
mod transport;

pub use client::FeedClient;
pub use config::FeedConfig;
pub use event::FeedEvent;
pub use projector::{Projector, TrainView};
pub use transport::{Transport, TransportError, TransportResult, WebSocketTransport};
