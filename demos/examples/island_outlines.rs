// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Territory map: owned islands on a square grid, traced into polygons.
//!
//! This example shows how to combine:
//! - `understory_cell_grid` for square-cell adjacency and corner geometry,
//! - `understory_islands` to split a map into same-owner territories,
//! - `understory_outline` to trace each territory's border and find the
//!   cells just inside it.
//!
//! Run:
//! - `cargo run -p understory_demos --example island_outlines`

use std::collections::HashMap;

use kurbo::Shape;
use understory_cell_grid::{SquareCoord, SquareGrid};
use understory_demos::{parse_map, polygon_path};
use understory_islands::OwnedIslandDetector;
use understory_outline::{outline_band, trace_outline};

const MAP: &[&str] = &[
    "aaaa....bb",
    "aaaa...bbb",
    "aa.cc..bbb",
    "...cc.....",
    "bb...aaaaa",
    "bb...aaaaa",
];

fn main() {
    let grid = SquareGrid::new(10.0);
    let owners: HashMap<SquareCoord, char> = parse_map(MAP).into_iter().collect();

    let detector = OwnedIslandDetector::new(
        owners.keys().copied(),
        |c: &SquareCoord| grid.neighbors(*c),
        |c: &SquareCoord| owners.contains_key(c),
        |c: &SquareCoord| owners[c],
    );

    let mut islands = detector.find_islands();
    // Stable output: biggest territories first, then by owner.
    islands.sort_by(|a, b| b.len().cmp(&a.len()).then(a.owner().cmp(b.owner())));

    for island in &islands {
        let mut cells: Vec<SquareCoord> = island.iter().copied().collect();
        cells.sort();

        let outline = trace_outline(
            &cells,
            SquareGrid::NUM_CORNERS,
            |a, i, b| grid.touching_corner(*a, i, *b),
            |c, i| grid.corner_point(*c, i),
        );
        let path = polygon_path(&outline.points);
        let interior = outline_band(cells.iter().copied(), -1, |c: &SquareCoord, d| {
            grid.ring(*c, d)
        })
        .count();

        println!(
            "owner {:?}: {:>2} cells, outline {:?} with {:>2} corners, area {:>6.1}, {} cells one step inside",
            island.owner(),
            island.len(),
            outline.status,
            outline.len(),
            path.area().abs(),
            interior,
        );
    }
}
