// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounded signed ring distances from a region's boundary.

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::{HashMap, HashSet};

/// Signed topological distance from the boundary of `cells`, for every cell
/// within `radius` rings of it.
///
/// - `ring(cell, d)` returns every cell at exactly distance `d` from `cell`.
///   Its `d == 1` ring doubles as the adjacency used to find the boundary.
/// - Boundary cells (region cells with at least one ring-1 cell outside the
///   region) map to `0`.
/// - Region cells map to negative distances, outside cells to positive ones.
///   Each magnitude is the smallest ring distance to any boundary cell.
///
/// Only rings around boundary cells are expanded, so cost scales with the
/// boundary length and `radius` rather than with the size of the region or
/// the grid. Cells farther than `radius` (but at least 1) from the boundary
/// are absent from the result.
pub fn ring_distances<C, R, I>(
    cells: impl IntoIterator<Item = C>,
    radius: u32,
    ring: R,
) -> HashMap<C, i32>
where
    C: Eq + Hash + Clone,
    R: Fn(&C, u32) -> I,
    I: IntoIterator<Item = C>,
{
    let region: HashSet<C> = cells.into_iter().collect();
    let boundary: Vec<&C> = region
        .iter()
        .filter(|&c| ring(c, 1).into_iter().any(|n| !region.contains(&n)))
        .collect();

    let mut distances: HashMap<C, i32> = boundary.iter().map(|&c| (c.clone(), 0)).collect();
    let reach = radius.max(1);
    for b in boundary {
        for i in 1..=reach {
            let magnitude = i32::try_from(i).unwrap_or(i32::MAX);
            for r in ring(b, i) {
                let sign = if region.contains(&r) { -1 } else { 1 };
                distances
                    .entry(r)
                    .and_modify(|d| *d = sign * magnitude.min(d.abs()))
                    .or_insert(sign * magnitude);
            }
        }
    }
    distances
}

/// Cells whose signed boundary distance equals `outline_distance`.
///
/// `0` selects the boundary ring of the region itself, positive values select
/// bands outside it, and negative values bands inside it. See
/// [`ring_distances`] for the meaning of `ring` and the distance model.
///
/// The order of the returned cells is unspecified.
pub fn outline_band<C, R, I>(
    cells: impl IntoIterator<Item = C>,
    outline_distance: i32,
    ring: R,
) -> impl Iterator<Item = C>
where
    C: Eq + Hash + Clone,
    R: Fn(&C, u32) -> I,
    I: IntoIterator<Item = C>,
{
    ring_distances(cells, outline_distance.unsigned_abs(), ring)
        .into_iter()
        .filter_map(move |(cell, d)| (d == outline_distance).then_some(cell))
}
