// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Feed client: owns the connection and the reconnect loop.

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::info;

use lp_core::ConnectionStatus;

use crate::config::FeedConfig;
use crate::event::{apply_event, FeedEvent, Flow};
use crate::projector::Projector;
use crate::transport::{Transport, WebSocketTransport};

/// Live feed client for a single streaming endpoint.
///
/// While started, the client maintains exactly one logical connection to
/// the feed and recovers from disconnects on its own: every lost
/// connection is retried forever at the configured flat delay. Consumers
/// never touch the transport; everything they observe flows through the
/// [`Projector`].
pub struct FeedClient<F = fn() -> WebSocketTransport> {
    /// Configuration.
    config: FeedConfig,
    /// Projection of the latest snapshot and status.
    projector: Projector,
    /// Cancels the connection task and any pending retry timer.
    cancel: CancellationToken,
    /// Handle of the spawned connection task, if started.
    task: Option<JoinHandle<()>>,
    /// Creates one transport per connect attempt.
    make_transport: F,
}

impl FeedClient {
    /// Create a new feed client with the default WebSocket transport.
    pub fn new(config: FeedConfig) -> Self {
        Self::with_transport_factory(config, WebSocketTransport::new)
    }
}

impl<T, F> FeedClient<F>
where
    T: Transport + 'static,
    F: Fn() -> T + Clone + Send + Sync + 'static,
{
    /// Create a feed client with a custom transport factory (for testing).
    ///
    /// A fresh transport is created for every connect attempt.
    pub fn with_transport_factory(config: FeedConfig, make_transport: F) -> Self {
        FeedClient {
            config,
            projector: Projector::new(),
            cancel: CancellationToken::new(),
            task: None,
            make_transport,
        }
    }

    /// The projector exposing the current view to consumers.
    pub fn projector(&self) -> &Projector {
        &self.projector
    }

    /// Whether the connection task is running.
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Begins connecting.
    ///
    /// Idempotent: calling while the connection task is live is a no-op,
    /// so a second concurrent connection is never spawned. After
    /// [`stop`](Self::stop) the client is terminal and `start` has no
    /// effect.
    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }

        let config = self.config.clone();
        let projector = self.projector.clone();
        let cancel = self.cancel.clone();
        let make_transport = self.make_transport.clone();
        self.task = Some(tokio::spawn(run_feed(
            config,
            projector,
            cancel,
            make_transport,
        )));
    }

    /// Releases the connection and cancels any pending reconnect.
    ///
    /// Whichever of an open connection, an in-flight connect attempt, or
    /// a pending retry timer is outstanding gets cancelled, and no
    /// further reconnection is scheduled. Safe to call repeatedly; a
    /// no-op after the first call.
    pub fn stop(&mut self) {
        self.cancel.cancel();
    }

    /// Stops the client and waits for the connection task to wind down.
    ///
    /// Guarantees the connection resource is released before returning,
    /// which keeps teardown deterministic in tests.
    pub async fn shutdown(&mut self) {
        self.cancel.cancel();
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }
}

impl<F> Drop for FeedClient<F> {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Connection loop: connect, consume events, publish, retry after the
/// flat delay. Runs until cancelled; every transport failure is a status
/// signal followed by a retry, never an exit.
pub(crate) async fn run_feed<T, F>(
    config: FeedConfig,
    projector: Projector,
    cancel: CancellationToken,
    make_transport: F,
) where
    T: Transport,
    F: Fn() -> T,
{
    loop {
        if cancel.is_cancelled() {
            return;
        }

        projector.publish_status(ConnectionStatus::Connecting);
        let mut transport = make_transport();

        let connect_result = tokio::select! {
            _ = cancel.cancelled() => return,
            result = transport.connect(&config.url) => result,
        };

        match connect_result {
            Ok(()) => {
                info!(url = %config.url, "feed connected");
                apply_event(&projector, FeedEvent::Opened);
                if drive_connection(&projector, &mut transport, &cancel).await {
                    // Shutdown mid-connection: release the socket before
                    // winding down.
                    let _ = transport.disconnect().await;
                    return;
                }
            }
            Err(err) => {
                apply_event(&projector, FeedEvent::Error(err.to_string()));
            }
        }

        projector.publish_status(ConnectionStatus::Reconnecting);
        tokio::select! {
            _ = cancel.cancelled() => return,
            _ = tokio::time::sleep(config.retry_delay) => {}
        }
    }
}

/// Consumes transport events until the connection drops or the client is
/// cancelled. Returns `true` when cancelled.
async fn drive_connection<T: Transport>(
    projector: &Projector,
    transport: &mut T,
    cancel: &CancellationToken,
) -> bool {
    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => return true,
            received = transport.recv() => match received {
                Ok(Some(text)) => FeedEvent::Message(text),
                Ok(None) => FeedEvent::Closed,
                Err(err) => FeedEvent::Error(err.to_string()),
            },
        };

        if apply_event(projector, event) == Flow::Reconnect {
            return false;
        }
    }
}
