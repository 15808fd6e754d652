// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Connection status of the feed client.

use serde::{Deserialize, Serialize};

/// Connection status as exposed to presentation code.
///
/// Drives presentation only; retry behavior never depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    /// A connect attempt is in progress.
    Connecting,
    /// The feed is live.
    Connected,
    /// The connection was lost; a retry is pending.
    Reconnecting,
    /// A transport-level error was observed; a retry is still scheduled.
    Error,
}

impl ConnectionStatus {
    /// The status string consumers see.
    pub fn as_str(self) -> &'static str {
        match self {
            ConnectionStatus::Connecting => "connecting",
            ConnectionStatus::Connected => "connected",
            ConnectionStatus::Reconnecting => "reconnecting",
            ConnectionStatus::Error => "error",
        }
    }
}

impl std::fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
