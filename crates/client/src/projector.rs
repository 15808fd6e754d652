// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Latest-state projection for presentation consumers.
//!
//! The projector holds the most recently published snapshot and
//! connection status and notifies consumers of either changing. It is
//! backed by a watch channel: publishes replace the held value
//! atomically, reads never block, and lagging consumers observe the
//! latest value rather than a backlog.

use std::sync::Arc;

use lp_core::{ConnectionStatus, TrainSnapshot};
use tokio::sync::watch;

/// The most recently published snapshot and connection status.
#[derive(Debug, Clone)]
pub struct TrainView {
    /// All active trains, keyed by train id. Immutable once published;
    /// consumers read, they never mutate.
    pub trains: Arc<TrainSnapshot>,
    /// Connection status at the time of the last publish.
    pub status: ConnectionStatus,
}

/// Holds the latest published view and notifies consumers of changes.
#[derive(Debug, Clone)]
pub struct Projector {
    tx: Arc<watch::Sender<TrainView>>,
}

impl Projector {
    /// Creates a projector holding an empty snapshot and `Connecting`
    /// status.
    pub fn new() -> Self {
        let initial = TrainView {
            trains: Arc::new(TrainSnapshot::new()),
            status: ConnectionStatus::Connecting,
        };
        let (tx, _) = watch::channel(initial);
        Projector { tx: Arc::new(tx) }
    }

    /// Replaces the held snapshot wholesale. Status is left unchanged.
    ///
    /// Consumers observing the current view after this call see the new
    /// snapshot in full; partial views are not possible.
    pub fn publish_snapshot(&self, snapshot: TrainSnapshot) {
        let trains = Arc::new(snapshot);
        self.tx.send_modify(|view| view.trains = trains);
    }

    /// Replaces the held status, independent of snapshot publication.
    ///
    /// Publishing the status already held does not notify consumers.
    pub fn publish_status(&self, status: ConnectionStatus) {
        self.tx.send_if_modified(|view| {
            if view.status == status {
                false
            } else {
                view.status = status;
                true
            }
        });
    }

    /// Returns the most recently published view. Never blocks.
    pub fn current_view(&self) -> TrainView {
        self.tx.borrow().clone()
    }

    /// Subscribes to view changes.
    ///
    /// Receivers always observe the latest value; intermediate publishes
    /// may be skipped by slow consumers.
    pub fn subscribe(&self) -> watch::Receiver<TrainView> {
        self.tx.subscribe()
    }
}

impl Default for Projector {
    fn default() -> Self {
        Self::new()
    }
}
