// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Streaming margins around hex islands.
//!
//! A caller keeps a set of "loaded" hex cells. Islands of loaded cells are
//! found, and for each island the cells at signed ring distances `-1..=2`
//! from its border are reported, for example to decide what to prefetch
//! (outside) or what can stay at low detail (inside).
//!
//! Run:
//! - `cargo run -p understory_demos --example hex_fringe`

use std::collections::HashSet;

use understory_cell_grid::{HexCoord, HexGrid};
use understory_islands::IslandDetector;
use understory_outline::{ring_distances, trace_outline};

fn main() {
    let grid = HexGrid::new(1.0);

    // Two blobs: a radius-2 hexagon and a small 3-cell strip far away.
    let mut loaded: HashSet<HexCoord> = HashSet::new();
    let center = HexCoord::new(0, 0);
    for d in 0..=2 {
        loaded.extend(grid.ring(center, d));
    }
    loaded.extend([HexCoord::new(10, 0), HexCoord::new(11, 0), HexCoord::new(12, 0)]);

    let detector = IslandDetector::new(
        loaded.iter().copied(),
        |c: &HexCoord| grid.neighbors(*c),
        |c: &HexCoord| loaded.contains(c),
    );
    let mut islands = detector.find_islands();
    islands.sort_by_key(|island| std::cmp::Reverse(island.len()));

    for (n, island) in islands.iter().enumerate() {
        let cells: Vec<HexCoord> = island.iter().copied().collect();
        let outline = trace_outline(
            &cells,
            HexGrid::NUM_CORNERS,
            |a, i, b| grid.touching_corner(*a, i, *b),
            |c, i| grid.corner_point(*c, i),
        );
        println!(
            "island {n}: {} cells, outline {:?} with {} corners",
            island.len(),
            outline.status,
            outline.len()
        );

        let distances = ring_distances(cells.iter().copied(), 2, |c: &HexCoord, d| {
            grid.ring(*c, d)
        });
        for band in -1..=2 {
            let count = distances.values().filter(|&&d| d == band).count();
            println!("  band {band:>2}: {count} cells");
        }
    }
}
