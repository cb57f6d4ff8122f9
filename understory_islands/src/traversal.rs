// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-call flood fill state shared by both detectors.

use alloc::vec;
use core::hash::Hash;

use hashbrown::HashSet;

/// Traversal bookkeeping for one `find_islands` call.
///
/// A fresh value is created for every call and never escapes it, so detectors
/// can be used concurrently or re-entered from their own callbacks.
pub(crate) struct Traversal<C> {
    visited: HashSet<C>,
}

impl<C: Eq + Hash + Clone> Traversal<C> {
    pub(crate) fn new() -> Self {
        Self {
            visited: HashSet::new(),
        }
    }

    /// Whether `point` has already been resolved into some island.
    #[inline]
    pub(crate) fn is_visited(&self, point: &C) -> bool {
        self.visited.contains(point)
    }

    /// Flood outward from `seed`, collecting every reachable point that
    /// `accept` admits and that no earlier fill has claimed.
    ///
    /// Rejected points are not marked visited; a later seed may still claim
    /// them. Uses an explicit stack, so region size is bounded by memory
    /// rather than call depth.
    pub(crate) fn fill<A, I>(
        &mut self,
        seed: C,
        adjacent: &A,
        mut accept: impl FnMut(&C) -> bool,
    ) -> HashSet<C>
    where
        A: Fn(&C) -> I,
        I: IntoIterator<Item = C>,
    {
        let mut points = HashSet::new();
        let mut stack = vec![seed];
        while let Some(point) = stack.pop() {
            if self.visited.contains(&point) || !accept(&point) {
                continue;
            }
            self.visited.insert(point.clone());
            let visited = &self.visited;
            stack.extend(
                adjacent(&point)
                    .into_iter()
                    .filter(|next| !visited.contains(next)),
            );
            let fresh = points.insert(point);
            debug_assert!(fresh, "island point was not marked visited before insertion");
        }
        points
    }
}
