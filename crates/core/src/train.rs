// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Train domain model and the feed wire format.
//!
//! The feed encodes the motion phase of a train twice: a boolean
//! `IsBetween` and a string `State`. In memory the pair is collapsed into
//! a single tagged [`Location`] variant; agreement between the two wire
//! fields is validated on ingest rather than trusted.

use serde::{Deserialize, Serialize};

use crate::error::Error;

const STATE_AT_STATION: &str = "AT_STATION";
const STATE_BETWEEN: &str = "BETWEEN";
const STATE_APPROACHING: &str = "APPROACHING";

/// Where a train is on the line.
///
/// `prev` carries the station most recently departed. The feed reports it
/// even when the train is not between stops (for directionality), so the
/// stopped and approaching variants keep it as an option; an empty
/// `PrevStationID` on the wire maps to `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WireLocation", into = "WireLocation")]
pub enum Location {
    /// Stopped at a station.
    AtStation {
        station: String,
        prev: Option<String>,
    },
    /// Physically between two stations.
    Between { prev: String, next: String },
    /// Approaching the next station.
    Approaching {
        station: String,
        prev: Option<String>,
    },
}

impl Location {
    /// The reference station: the current stop, or the next one when moving.
    pub fn station(&self) -> &str {
        match self {
            Location::AtStation { station, .. } | Location::Approaching { station, .. } => station,
            Location::Between { next, .. } => next,
        }
    }

    /// Human-readable description, matching the live board phrasing.
    pub fn describe(&self) -> String {
        match self {
            Location::AtStation { station, .. } => format!("At {station}"),
            Location::Approaching { station, .. } => format!("Approaching {station}"),
            Location::Between { prev, next } => format!("Between {prev} and {next}"),
        }
    }
}

/// Wire shape of a location, exactly as the feed sends it.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct WireLocation {
    #[serde(rename = "StationID")]
    station_id: String,
    #[serde(rename = "IsBetween")]
    is_between: bool,
    #[serde(rename = "PrevStationID")]
    prev_station_id: String,
    #[serde(rename = "State")]
    state: String,
}

impl TryFrom<WireLocation> for Location {
    type Error = Error;

    fn try_from(wire: WireLocation) -> Result<Self, Error> {
        // IsBetween duplicates State; a record where they disagree is
        // malformed, not a judgment call.
        if wire.is_between != (wire.state == STATE_BETWEEN) {
            return Err(Error::InconsistentLocation {
                is_between: wire.is_between,
                state: wire.state,
            });
        }

        let prev = if wire.prev_station_id.is_empty() {
            None
        } else {
            Some(wire.prev_station_id)
        };

        match wire.state.as_str() {
            STATE_AT_STATION => Ok(Location::AtStation {
                station: wire.station_id,
                prev,
            }),
            STATE_APPROACHING => Ok(Location::Approaching {
                station: wire.station_id,
                prev,
            }),
            STATE_BETWEEN => match prev {
                Some(prev) => Ok(Location::Between {
                    prev,
                    next: wire.station_id,
                }),
                None => Err(Error::MissingPrevStation(wire.station_id)),
            },
            other => Err(Error::InvalidTrainState(other.to_string())),
        }
    }
}

impl From<Location> for WireLocation {
    fn from(location: Location) -> Self {
        match location {
            Location::AtStation { station, prev } => WireLocation {
                station_id: station,
                is_between: false,
                prev_station_id: prev.unwrap_or_default(),
                state: STATE_AT_STATION.to_string(),
            },
            Location::Between { prev, next } => WireLocation {
                station_id: next,
                is_between: true,
                prev_station_id: prev,
                state: STATE_BETWEEN.to_string(),
            },
            Location::Approaching { station, prev } => WireLocation {
                station_id: station,
                is_between: false,
                prev_station_id: prev.unwrap_or_default(),
                state: STATE_APPROACHING.to_string(),
            },
        }
    }
}

/// A single train's full known state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainRecord {
    /// Where the train is on the line.
    #[serde(rename = "Location")]
    pub location: Location,
    /// Direction of travel, as the feed phrases it (e.g. terminus name).
    #[serde(rename = "Direction")]
    pub direction: String,
    /// Seconds until arrival at the next station.
    #[serde(rename = "TimeToNext")]
    pub time_to_next: u32,
}

/// Renders a next-arrival time in seconds as e.g. `"2m 5s"`.
pub fn format_eta(seconds: u32) -> String {
    format!("{}m {}s", seconds / 60, seconds % 60)
}

#[cfg(test)]
#[path = "train_tests.rs"]
mod tests;
