// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Owner-constrained island detection.

use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::Hash;

use crate::island::{Island, OwnedIsland};
use crate::traversal::Traversal;

/// Finds connected components whose coordinates all share one owner.
///
/// Behaves like [`IslandDetector`](crate::IslandDetector), except that a
/// neighbor only joins an island when `owner(neighbor) == island.owner()`. The
/// seed's owner becomes the island's owner. Seeds are validated with `valid`
/// exactly as the unconstrained detector does.
///
/// A coordinate rejected for having a different owner is not claimed, so it
/// later seeds (or joins) an island of its own owner.
pub struct OwnedIslandDetector<C, A, V, W> {
    start_points: Vec<C>,
    adjacent: A,
    valid: V,
    owner: W,
}

impl<C, A, V, W> Debug for OwnedIslandDetector<C, A, V, W> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("OwnedIslandDetector")
            .field("start_points", &self.start_points.len())
            .finish_non_exhaustive()
    }
}

impl<C, A, V, W> OwnedIslandDetector<C, A, V, W> {
    /// Create a detector over `start_points` with the given strategies.
    pub fn new(
        start_points: impl IntoIterator<Item = C>,
        adjacent: A,
        valid: V,
        owner: W,
    ) -> Self {
        Self {
            start_points: start_points.into_iter().collect(),
            adjacent,
            valid,
            owner,
        }
    }

    /// The candidate coordinates islands are seeded from, in seed order.
    pub fn start_points(&self) -> &[C] {
        &self.start_points
    }
}

impl<C, A, V, W, O> OwnedIslandDetector<C, A, V, W>
where
    C: Eq + Hash + Clone,
    V: Fn(&C) -> bool,
    W: Fn(&C) -> O,
    O: PartialEq,
{
    /// Discover every same-owner island reachable from the start points.
    ///
    /// Two adjacent, valid coordinates end up in the same island exactly when
    /// their owners compare equal (given a symmetric adjacency and a
    /// consistent owner equality).
    pub fn find_islands<I>(&self) -> Vec<OwnedIsland<C, O>>
    where
        A: Fn(&C) -> I,
        I: IntoIterator<Item = C>,
    {
        let mut traversal = Traversal::new();
        let mut islands = Vec::new();
        for seed in &self.start_points {
            if traversal.is_visited(seed) || !(self.valid)(seed) {
                continue;
            }
            let owner = (self.owner)(seed);
            let points = traversal.fill(seed.clone(), &self.adjacent, |p| {
                (self.valid)(p) && (self.owner)(p) == owner
            });
            if !points.is_empty() {
                islands.push(OwnedIsland::new(Island::from_points(points), owner));
            }
        }
        islands
    }
}
