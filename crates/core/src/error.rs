// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for lp-core operations.

use thiserror::Error;

/// All possible errors that can occur in lp-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error(
        "invalid train state: '{0}'\n  hint: valid states are: AT_STATION, BETWEEN, APPROACHING"
    )]
    InvalidTrainState(String),

    #[error("inconsistent location: IsBetween={is_between} but State={state}")]
    InconsistentLocation { is_between: bool, state: String },

    #[error("train between stations is missing PrevStationID (next: {0})")]
    MissingPrevStation(String),

    #[error("malformed snapshot: {0}")]
    MalformedSnapshot(#[from] serde_json::Error),
}

/// Result type alias for lp-core operations.
pub type Result<T> = std::result::Result<T, Error>;
