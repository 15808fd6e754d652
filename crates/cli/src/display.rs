// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal rendering for the live train board.

use std::io::Write;

use crossterm::cursor::MoveTo;
use crossterm::terminal::{Clear, ClearType};
use crossterm::QueueableCommand;

use lp_client::TrainView;
use lp_core::format_eta;

const HEADERS: [&str; 4] = ["TRAIN", "LOCATION", "DIRECTION", "NEXT STATION IN"];

/// Render the view as board lines, top to bottom.
///
/// Pure formatting; the terminal plumbing lives in [`render`].
pub fn render_lines(view: &TrainView) -> Vec<String> {
    let rows: Vec<[String; 4]> = view
        .trains
        .iter()
        .map(|(id, train)| {
            [
                id.clone(),
                train.location.describe(),
                train.direction.clone(),
                format_eta(train.time_to_next),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    let format_row = |cells: [&str; 4]| -> String {
        let mut line = String::new();
        for (i, (cell, width)) in cells.iter().zip(widths.iter()).enumerate() {
            if i > 0 {
                line.push_str("  ");
            }
            line.push_str(cell);
            // No trailing padding on the last column.
            if i < cells.len() - 1 {
                for _ in cell.len()..*width {
                    line.push(' ');
                }
            }
        }
        line
    };

    let mut lines = vec![format!("Status: {}", view.status), String::new()];
    lines.push(format_row(HEADERS));
    for row in &rows {
        lines.push(format_row([
            row[0].as_str(),
            row[1].as_str(),
            row[2].as_str(),
            row[3].as_str(),
        ]));
    }
    lines.push(String::new());
    lines.push(format!("Active trains: {}", view.trains.len()));
    lines
}

/// Clear the terminal and draw the board.
pub fn render(out: &mut impl Write, view: &TrainView) -> std::io::Result<()> {
    out.queue(Clear(ClearType::All))?;
    out.queue(MoveTo(0, 0))?;
    for line in render_lines(view) {
        out.write_all(line.as_bytes())?;
        out.write_all(b"\r\n")?;
    }
    out.flush()
}
