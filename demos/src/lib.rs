// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Understory cell demos.
//!
//! Run the demos with:
//! - `cargo run -p understory_demos --example island_outlines`
//! - `cargo run -p understory_demos --example hex_fringe`

use kurbo::{BezPath, Point};
use understory_cell_grid::SquareCoord;

/// Parse an ASCII map into owned square cells.
///
/// Row `0` is the first line. Every character other than `.` or a space is a
/// cell owned by that character.
pub fn parse_map(rows: &[&str]) -> Vec<(SquareCoord, char)> {
    let mut cells = Vec::new();
    for (y, row) in rows.iter().enumerate() {
        for (x, ch) in row.chars().enumerate() {
            if ch == '.' || ch == ' ' {
                continue;
            }
            let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) else {
                continue;
            };
            cells.push((SquareCoord::new(x, y), ch));
        }
    }
    cells
}

/// Build a closed polygon path from outline points.
///
/// Returns an empty path for an empty slice.
pub fn polygon_path(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let mut iter = points.iter().copied();
    if let Some(first) = iter.next() {
        path.move_to(first);
        for p in iter {
            path.line_to(p);
        }
        path.close_path();
    }
    path
}
