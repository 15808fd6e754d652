// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Feed connection events and the reconnect state machine.
//!
//! Transport outcomes are mapped to an explicit event type consumed
//! sequentially by the connection loop, so the state machine can be
//! exercised with synthetic events and no socket.

use lp_core::{parse_snapshot, ConnectionStatus};
use tracing::{debug, info, warn};

use crate::projector::Projector;

/// A transport-level event for the feed connection.
///
/// Events for one connection are delivered in order; no two are
/// processed concurrently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedEvent {
    /// The connection opened.
    Opened,
    /// A text payload arrived.
    Message(String),
    /// The connection closed, orderly or abrupt.
    Closed,
    /// A transport-level error occurred.
    Error(String),
}

/// What the connection loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    /// Keep consuming events from the current connection.
    Continue,
    /// The connection is gone; schedule a retry.
    Reconnect,
}

/// Applies one event to the published state.
///
/// Payloads never change connection status: a valid snapshot replaces
/// the view wholesale, a malformed one is dropped and logged. Close and
/// error both end the connection; error differs only in the status it
/// signals, not in retry behavior.
pub(crate) fn apply_event(projector: &Projector, event: FeedEvent) -> Flow {
    match event {
        FeedEvent::Opened => {
            projector.publish_status(ConnectionStatus::Connected);
            Flow::Continue
        }
        FeedEvent::Message(text) => {
            match parse_snapshot(&text) {
                Ok(snapshot) => {
                    debug!(trains = snapshot.len(), "applying snapshot");
                    projector.publish_snapshot(snapshot);
                }
                Err(err) => {
                    // Stale-but-valid beats cleared: the previous snapshot
                    // stays published.
                    warn!(%err, "dropping malformed feed message");
                }
            }
            Flow::Continue
        }
        FeedEvent::Closed => {
            info!("feed connection closed");
            projector.publish_status(ConnectionStatus::Reconnecting);
            Flow::Reconnect
        }
        FeedEvent::Error(detail) => {
            warn!(%detail, "feed transport error");
            projector.publish_status(ConnectionStatus::Error);
            Flow::Reconnect
        }
    }
}
