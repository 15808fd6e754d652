// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::sync::Arc;

use lp_client::TrainView;
use lp_core::{ConnectionStatus, Location, TrainRecord, TrainSnapshot};

use crate::display::render_lines;

fn view_with_trains(trains: TrainSnapshot) -> TrainView {
    TrainView {
        trains: Arc::new(trains),
        status: ConnectionStatus::Connected,
    }
}

fn record(location: Location, direction: &str, time_to_next: u32) -> TrainRecord {
    TrainRecord {
        location,
        direction: direction.to_string(),
        time_to_next,
    }
}

#[test]
fn test_empty_board() {
    let lines = render_lines(&view_with_trains(TrainSnapshot::new()));

    assert_eq!(lines[0], "Status: connected");
    assert!(lines[2].starts_with("TRAIN"));
    assert_eq!(lines.last().unwrap(), "Active trains: 0");
}

#[test]
fn test_rows_are_sorted_by_train_id() {
    let mut trains = TrainSnapshot::new();
    trains.insert(
        "202".to_string(),
        record(
            Location::Between {
                prev: "B".to_string(),
                next: "C".to_string(),
            },
            "Southbound",
            40,
        ),
    );
    trains.insert(
        "101".to_string(),
        record(
            Location::AtStation {
                station: "A".to_string(),
                prev: None,
            },
            "Northbound",
            125,
        ),
    );

    let lines = render_lines(&view_with_trains(trains));

    let row_101 = lines.iter().position(|l| l.starts_with("101")).unwrap();
    let row_202 = lines.iter().position(|l| l.starts_with("202")).unwrap();
    assert!(row_101 < row_202);
    assert!(lines[row_101].contains("At A"));
    assert!(lines[row_101].contains("Northbound"));
    assert!(lines[row_101].contains("2m 5s"));
    assert!(lines[row_202].contains("Between B and C"));
    assert_eq!(lines.last().unwrap(), "Active trains: 2");
}

#[test]
fn test_columns_align_under_headers() {
    let mut trains = TrainSnapshot::new();
    trains.insert(
        "7".to_string(),
        record(
            Location::Approaching {
                station: "Brixton".to_string(),
                prev: Some("Stockwell".to_string()),
            },
            "Southbound",
            5,
        ),
    );

    let lines = render_lines(&view_with_trains(trains));
    let header = &lines[2];
    let row = &lines[3];

    let direction_col = header.find("DIRECTION").unwrap();
    assert_eq!(row.find("Southbound").unwrap(), direction_col);
    assert!(row.contains("Approaching Brixton"));
}

#[test]
fn test_status_line_reflects_view_status() {
    let view = TrainView {
        trains: Arc::new(TrainSnapshot::new()),
        status: ConnectionStatus::Reconnecting,
    };

    assert_eq!(render_lines(&view)[0], "Status: reconnecting");
}
