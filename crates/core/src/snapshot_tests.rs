// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for snapshot parsing.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use crate::train::Location;

#[test]
fn test_parse_snapshot_maps_train_ids() {
    let snapshot = parse_snapshot(
        r#"{
            "101": {
                "Location": {
                    "StationID": "A",
                    "IsBetween": false,
                    "PrevStationID": "",
                    "State": "AT_STATION"
                },
                "Direction": "Northbound",
                "TimeToNext": 125
            },
            "202": {
                "Location": {
                    "StationID": "C",
                    "IsBetween": true,
                    "PrevStationID": "B",
                    "State": "BETWEEN"
                },
                "Direction": "Southbound",
                "TimeToNext": 40
            }
        }"#,
    )
    .unwrap();

    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot["101"].time_to_next, 125);
    assert_eq!(
        snapshot["202"].location,
        Location::Between {
            prev: "B".to_string(),
            next: "C".to_string(),
        }
    );
}

#[test]
fn test_parse_empty_snapshot() {
    let snapshot = parse_snapshot("{}").unwrap();
    assert!(snapshot.is_empty());
}

#[test]
fn test_parse_rejects_invalid_json() {
    assert!(parse_snapshot("not json").is_err());
    assert!(parse_snapshot("[1, 2, 3]").is_err());
}

#[test]
fn test_one_bad_record_fails_the_snapshot() {
    // Train 202 carries an inconsistent location; the whole message is
    // malformed, not just that entry.
    let result = parse_snapshot(
        r#"{
            "101": {
                "Location": {
                    "StationID": "A",
                    "IsBetween": false,
                    "PrevStationID": "",
                    "State": "AT_STATION"
                },
                "Direction": "Northbound",
                "TimeToNext": 125
            },
            "202": {
                "Location": {
                    "StationID": "C",
                    "IsBetween": true,
                    "PrevStationID": "B",
                    "State": "APPROACHING"
                },
                "Direction": "Southbound",
                "TimeToNext": 40
            }
        }"#,
    );

    assert!(result.is_err());
}

#[test]
fn test_negative_time_to_next_rejected() {
    let result = parse_snapshot(
        r#"{
            "101": {
                "Location": {
                    "StationID": "A",
                    "IsBetween": false,
                    "PrevStationID": "",
                    "State": "AT_STATION"
                },
                "Direction": "Northbound",
                "TimeToNext": -5
            }
        }"#,
    );

    assert!(result.is_err());
}
