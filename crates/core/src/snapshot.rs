// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Whole-feed snapshots: the complete state of all active trains.

use std::collections::BTreeMap;

use crate::error::Result;
use crate::train::TrainRecord;

/// The complete state of all active trains at one instant, keyed by
/// train identifier.
///
/// Every feed message carries a full snapshot; there are no deltas. A
/// train absent from a newer snapshot is no longer active.
pub type TrainSnapshot = BTreeMap<String, TrainRecord>;

/// Parses a feed message body into a snapshot.
///
/// The body is a bare JSON object mapping train ids to records, with no
/// envelope. One record failing validation makes the whole message
/// malformed.
pub fn parse_snapshot(text: &str) -> Result<TrainSnapshot> {
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
