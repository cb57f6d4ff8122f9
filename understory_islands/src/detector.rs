// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Unconstrained island detection.

use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::Hash;

use crate::island::Island;
use crate::traversal::Traversal;

/// Finds connected components over a candidate set of coordinates.
///
/// `adjacent` lists the neighbors of a coordinate and `valid` decides whether a
/// coordinate may belong to an island at all. Starting points are only seeds:
/// a flood fill follows `adjacent` to any valid coordinate, whether or not it
/// was listed as a start point. Restrict `valid` to the candidate set if that
/// is not wanted.
///
/// Adjacency is expected to be symmetric. With a one-directional adjacency,
/// which island absorbs a pair depends on seed order.
pub struct IslandDetector<C, A, V> {
    start_points: Vec<C>,
    adjacent: A,
    valid: V,
}

impl<C, A, V> Debug for IslandDetector<C, A, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("IslandDetector")
            .field("start_points", &self.start_points.len())
            .finish_non_exhaustive()
    }
}

impl<C, A, V> IslandDetector<C, A, V> {
    /// Create a detector over `start_points` with the given strategies.
    pub fn new(start_points: impl IntoIterator<Item = C>, adjacent: A, valid: V) -> Self {
        Self {
            start_points: start_points.into_iter().collect(),
            adjacent,
            valid,
        }
    }

    /// The candidate coordinates islands are seeded from, in seed order.
    pub fn start_points(&self) -> &[C] {
        &self.start_points
    }
}

impl<C, A, V> IslandDetector<C, A, V>
where
    C: Eq + Hash + Clone,
    V: Fn(&C) -> bool,
{
    /// Discover every island reachable from the start points.
    ///
    /// Start points are taken in order; each one not already claimed by an
    /// earlier island and passing `valid` seeds a new island. Every call runs
    /// on fresh state, so repeated calls return the same membership.
    pub fn find_islands<I>(&self) -> Vec<Island<C>>
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
            let points = traversal.fill(seed.clone(), &self.adjacent, |p| (self.valid)(p));
            if !points.is_empty() {
                islands.push(Island::from_points(points));
            }
        }
        islands
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use core::cell::Cell;

    use hashbrown::HashSet;
    use understory_cell_grid::{SquareCoord, SquareGrid};

    /// Parse an ASCII mask; `#` marks a valid cell.
    fn mask(rows: &[&str]) -> HashSet<SquareCoord> {
        let mut out = HashSet::new();
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                if ch == '#' {
                    out.insert(SquareCoord::new(
                        i32::try_from(x).unwrap(),
                        i32::try_from(y).unwrap(),
                    ));
                }
            }
        }
        out
    }

    fn sorted_sizes<C>(islands: &[Island<C>]) -> Vec<usize> {
        let mut sizes: Vec<_> = islands.iter().map(Island::len).collect();
        sizes.sort_unstable();
        sizes
    }

    #[test]
    fn separate_blobs_become_separate_islands() {
        let cells = mask(&[
            "##..#", //
            "#...#", //
            "....#", //
            ".##..", //
        ]);
        let grid = SquareGrid::default();
        let detector = IslandDetector::new(
            cells.iter().copied(),
            |c: &SquareCoord| grid.neighbors(*c),
            |c: &SquareCoord| cells.contains(c),
        );
        let islands = detector.find_islands();
        assert_eq!(sorted_sizes(&islands), [2, 3, 3]);

        let union: usize = islands.iter().map(Island::len).sum();
        assert_eq!(union, cells.len());
    }

    #[test]
    fn single_isolated_cell() {
        let only = SquareCoord::new(4, 4);
        let grid = SquareGrid::default();
        let detector = IslandDetector::new(
            [only],
            |c: &SquareCoord| grid.neighbors(*c),
            |c: &SquareCoord| *c == only,
        );
        let islands = detector.find_islands();
        assert_eq!(islands.len(), 1);
        assert_eq!(islands[0].len(), 1);
        assert!(islands[0].contains(&only));
    }

    #[test]
    fn empty_and_all_invalid_inputs() {
        let grid = SquareGrid::default();
        let adjacent = |c: &SquareCoord| grid.neighbors(*c);

        let empty = IslandDetector::new(Vec::<SquareCoord>::new(), adjacent, |_: &SquareCoord| true);
        assert!(empty.find_islands().is_empty());

        let starts = vec![SquareCoord::new(0, 0), SquareCoord::new(1, 0)];
        let invalid = IslandDetector::new(starts, adjacent, |_: &SquareCoord| false);
        assert!(invalid.find_islands().is_empty());
    }

    #[test]
    fn duplicate_start_points_do_not_duplicate_islands() {
        let cells = mask(&["###"]);
        let grid = SquareGrid::default();
        let a = SquareCoord::new(0, 0);
        let detector = IslandDetector::new(
            [a, a, SquareCoord::new(2, 0), a],
            |c: &SquareCoord| grid.neighbors(*c),
            |c: &SquareCoord| cells.contains(c),
        );
        let islands = detector.find_islands();
        assert_eq!(islands.len(), 1);
        assert_eq!(islands[0].len(), 3);
    }

    #[test]
    fn flood_reaches_valid_cells_outside_the_start_set() {
        let cells = mask(&[
            "###", //
            "..#", //
            "###", //
        ]);
        let grid = SquareGrid::default();
        let detector = IslandDetector::new(
            [SquareCoord::new(0, 0)],
            |c: &SquareCoord| grid.neighbors(*c),
            |c: &SquareCoord| cells.contains(c),
        );
        let islands = detector.find_islands();
        assert_eq!(islands.len(), 1);
        assert_eq!(islands[0].points(), &cells);
    }

    #[test]
    fn invalid_seed_is_skipped_but_later_seeds_proceed() {
        let cells = mask(&["#.#"]);
        let grid = SquareGrid::default();
        let detector = IslandDetector::new(
            [
                SquareCoord::new(1, 0),
                SquareCoord::new(0, 0),
                SquareCoord::new(2, 0),
            ],
            |c: &SquareCoord| grid.neighbors(*c),
            |c: &SquareCoord| cells.contains(c),
        );
        assert_eq!(sorted_sizes(&detector.find_islands()), [1, 1]);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let cells = mask(&[
            "#.##", //
            "#..#", //
            "##.#", //
        ]);
        let grid = SquareGrid::default();
        let detector = IslandDetector::new(
            cells.iter().copied(),
            |c: &SquareCoord| grid.neighbors(*c),
            |c: &SquareCoord| cells.contains(c),
        );
        let first = detector.find_islands();
        let second = detector.find_islands();
        assert_eq!(first.len(), second.len());
        for island in &first {
            assert!(second.contains(island));
        }
    }

    #[test]
    fn long_corridor_does_not_exhaust_the_stack() {
        const LEN: i32 = 200_000;
        let detector = IslandDetector::new(
            [0_i32],
            |x: &i32| [x - 1, x + 1],
            |x: &i32| (0..LEN).contains(x),
        );
        let islands = detector.find_islands();
        assert_eq!(islands.len(), 1);
        assert_eq!(islands[0].len(), usize::try_from(LEN).unwrap());
    }

    #[test]
    fn reentrant_callbacks_see_independent_state() {
        let cells = mask(&[
            "##.#", //
            "...#", //
        ]);
        let grid = SquareGrid::default();
        let adjacent = |c: &SquareCoord| grid.neighbors(*c);
        let is_cell = |c: &SquareCoord| cells.contains(c);

        let plain = IslandDetector::new(cells.iter().copied(), adjacent, is_cell).find_islands();

        let nested_runs = Cell::new(0_usize);
        let reentrant = IslandDetector::new(cells.iter().copied(), adjacent, |c: &SquareCoord| {
            // A nested detection over the same coordinate type, run mid-traversal.
            let inner = IslandDetector::new(cells.iter().copied(), adjacent, is_cell);
            assert_eq!(inner.find_islands().len(), 2);
            nested_runs.set(nested_runs.get() + 1);
            cells.contains(c)
        });
        let outer = reentrant.find_islands();

        assert!(nested_runs.get() > 0);
        assert_eq!(sorted_sizes(&outer), sorted_sizes(&plain));
        for island in &outer {
            assert!(plain.contains(island));
        }
    }

    #[test]
    fn one_directional_adjacency_is_seed_order_dependent() {
        // 0 -> 1 only. Seeding from 0 absorbs 1; seeding from 1 first splits them.
        let forward = |x: &u8| if *x == 0 { vec![1_u8] } else { vec![] };
        let valid = |_: &u8| true;
        assert_eq!(IslandDetector::new([0, 1], forward, valid).find_islands().len(), 1);
        assert_eq!(IslandDetector::new([1, 0], forward, valid).find_islands().len(), 2);
    }
}
