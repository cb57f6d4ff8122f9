// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boundary polygon tracing by walking touching corners.

use alloc::vec::Vec;

/// How a boundary walk ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OutlineStatus {
    /// The walk returned to its first point; the outline is a closed polygon.
    Closed,
    /// The walk reached a corner with nowhere to continue.
    DeadEnd,
    /// The walk used up [`OutlineOptions::max_steps`] without closing.
    StepLimit,
    /// No corner of the region lies on its outer edge (or the region is
    /// empty), so there was nothing to walk.
    NoBoundary,
}

/// Result of [`trace_outline`].
///
/// Only [`OutlineStatus::Closed`] outlines are complete polygons. Every other
/// status carries whatever points were collected before the walk stopped.
#[derive(Clone, Debug, PartialEq)]
pub struct Outline<P> {
    /// Corner positions in walk order. The closing point is not repeated.
    pub points: Vec<P>,
    /// How the walk ended.
    pub status: OutlineStatus,
}

impl<P> Outline<P> {
    const fn new(points: Vec<P>, status: OutlineStatus) -> Self {
        Self { points, status }
    }

    /// Whether the walk closed into a polygon.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.status == OutlineStatus::Closed
    }

    /// Number of points collected.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if no points were collected.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The collected points, if the outline closed.
    pub fn into_closed(self) -> Option<Vec<P>> {
        self.is_closed().then_some(self.points)
    }
}

/// Tuning for [`trace_outline_with`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct OutlineOptions {
    /// Maximum number of cell-to-cell moves before the walk gives up.
    pub max_steps: usize,
}

impl OutlineOptions {
    /// The step cap used by [`trace_outline`].
    pub const DEFAULT_MAX_STEPS: usize = 1000;
}

impl Default for OutlineOptions {
    fn default() -> Self {
        Self {
            max_steps: Self::DEFAULT_MAX_STEPS,
        }
    }
}

/// Trace the outer outline of a connected region of cells.
///
/// - `num_corners` is the fixed corner count of every cell (4 for squares,
///   6 for hexagons). Corners must be numbered in one consistent rotational
///   direction; the outline follows that direction.
/// - `touching_corner(a, i, b)` returns the index of the corner of `b` that
///   coincides with corner `i` of `a`, or `None`.
/// - `corner_point(cell, i)` returns the position of corner `i`. Positions of a
///   shared vertex must compare equal no matter which cell produced them, since
///   closure is detected by equality with the first point.
///
/// The walk starts at the first `(cell, corner)` pair, in `cells` order, whose
/// corner touches no other cell. From there it sweeps the current cell's
/// corners forward, and at each corner hops to whichever other cell touches it
/// with the smallest forward rotation, which keeps the walk on the outside of
/// multi-cell junctions.
///
/// Uses [`OutlineOptions::default`]; see [`trace_outline_with`] to change the
/// step cap.
pub fn trace_outline<C, P, T, K>(
    cells: &[C],
    num_corners: usize,
    touching_corner: T,
    corner_point: K,
) -> Outline<P>
where
    P: PartialEq,
    T: Fn(&C, usize, &C) -> Option<usize>,
    K: Fn(&C, usize) -> P,
{
    trace_outline_with(
        cells,
        num_corners,
        touching_corner,
        corner_point,
        &OutlineOptions::default(),
    )
}

/// [`trace_outline`] with explicit [`OutlineOptions`].
pub fn trace_outline_with<C, P, T, K>(
    cells: &[C],
    num_corners: usize,
    touching_corner: T,
    corner_point: K,
    options: &OutlineOptions,
) -> Outline<P>
where
    P: PartialEq,
    T: Fn(&C, usize, &C) -> Option<usize>,
    K: Fn(&C, usize) -> P,
{
    if num_corners == 0 {
        return Outline::new(Vec::new(), OutlineStatus::NoBoundary);
    }
    let Some((mut cell, mut rot)) = find_start(cells, num_corners, &touching_corner) else {
        return Outline::new(Vec::new(), OutlineStatus::NoBoundary);
    };

    let mut points: Vec<P> = Vec::new();
    for _ in 0..options.max_steps {
        let mut hop = None;
        for offset in 1..=num_corners {
            let corner = (rot + offset) % num_corners;
            let p = corner_point(&cells[cell], corner);
            if points.first() == Some(&p) {
                return Outline::new(points, OutlineStatus::Closed);
            }
            points.push(p);
            hop = next_cell(cells, cell, corner, num_corners, &touching_corner);
            if hop.is_some() {
                break;
            }
        }
        match hop {
            Some((next, next_rot)) => {
                cell = next;
                rot = next_rot;
            }
            None => {
                // A full sweep touching nothing has circled an isolated cell,
                // ending one corner short of where it began.
                let p = corner_point(&cells[cell], (rot + 1) % num_corners);
                let status = if points.first() == Some(&p) {
                    OutlineStatus::Closed
                } else {
                    OutlineStatus::DeadEnd
                };
                return Outline::new(points, status);
            }
        }
    }
    Outline::new(points, OutlineStatus::StepLimit)
}

/// First `(cell index, corner)` whose corner touches no other cell.
fn find_start<C, T>(cells: &[C], num_corners: usize, touching_corner: &T) -> Option<(usize, usize)>
where
    T: Fn(&C, usize, &C) -> Option<usize>,
{
    cells.iter().enumerate().find_map(|(index, cell)| {
        (0..num_corners)
            .find(|&corner| {
                cells
                    .iter()
                    .enumerate()
                    .all(|(other_index, other)| {
                        other_index == index || touching_corner(cell, corner, other).is_none()
                    })
            })
            .map(|corner| (index, corner))
    })
}

/// The other cell touching `corner` of `cells[current]` whose matching corner
/// is the fewest forward steps from `corner`, with that matching corner.
///
/// Ties keep the earliest cell in `cells` order.
fn next_cell<C, T>(
    cells: &[C],
    current: usize,
    corner: usize,
    num_corners: usize,
    touching_corner: &T,
) -> Option<(usize, usize)>
where
    T: Fn(&C, usize, &C) -> Option<usize>,
{
    let here = &cells[current];
    let mut best: Option<(usize, usize, usize)> = None;
    for (index, other) in cells.iter().enumerate() {
        if index == current {
            continue;
        }
        let Some(matched) = touching_corner(here, corner, other) else {
            continue;
        };
        let matched = matched % num_corners;
        let ahead = forward_distance(corner, matched, num_corners);
        if best.is_none_or(|(best_ahead, _, _)| ahead < best_ahead) {
            best = Some((ahead, index, matched));
        }
    }
    best.map(|(_, index, matched)| (index, matched))
}

/// Steps forward from `from` to `to`, in `1..=num_corners`.
///
/// An identical index counts as a full turn so it ranks behind every corner
/// that is actually ahead.
#[inline]
fn forward_distance(from: usize, to: usize, num_corners: usize) -> usize {
    match (to + num_corners - from) % num_corners {
        0 => num_corners,
        d => d,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    use kurbo::Point;
    use understory_cell_grid::{HexCoord, HexGrid, SquareCoord, SquareGrid};

    fn square_outline(cells: &[SquareCoord], options: &OutlineOptions) -> Outline<Point> {
        let grid = SquareGrid::default();
        trace_outline_with(
            cells,
            SquareGrid::NUM_CORNERS,
            |a, i, b| grid.touching_corner(*a, i, *b),
            |c, i| grid.corner_point(*c, i),
            options,
        )
    }

    fn block(w: i32, h: i32) -> Vec<SquareCoord> {
        let mut out = Vec::new();
        for y in 0..h {
            for x in 0..w {
                out.push(SquareCoord::new(x, y));
            }
        }
        out
    }

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn two_by_two_block_closes_with_eight_points() {
        let outline = square_outline(&block(2, 2), &OutlineOptions::default());
        assert!(outline.is_closed());
        assert_eq!(
            outline.points,
            pts(&[
                (1.0, 0.0),
                (2.0, 0.0),
                (2.0, 1.0),
                (2.0, 2.0),
                (1.0, 2.0),
                (0.0, 2.0),
                (0.0, 1.0),
                (0.0, 0.0),
            ])
        );
    }

    #[test]
    fn single_cell_closes_with_its_own_corners() {
        let outline = square_outline(&[SquareCoord::new(3, 3)], &OutlineOptions::default());
        assert_eq!(outline.status, OutlineStatus::Closed);
        assert_eq!(
            outline.points,
            pts(&[(4.0, 3.0), (4.0, 4.0), (3.0, 4.0), (3.0, 3.0)])
        );
    }

    #[test]
    fn l_shape_stays_outside_the_junction() {
        // A missing top-right cell leaves a concave corner at (1, 1).
        let cells = [
            SquareCoord::new(0, 0),
            SquareCoord::new(1, 0),
            SquareCoord::new(0, 1),
        ];
        let outline = square_outline(&cells, &OutlineOptions::default());
        assert!(outline.is_closed());
        assert_eq!(
            outline.points,
            pts(&[
                (1.0, 0.0),
                (2.0, 0.0),
                (2.0, 1.0),
                (1.0, 1.0),
                (1.0, 2.0),
                (0.0, 2.0),
                (0.0, 1.0),
                (0.0, 0.0),
            ])
        );
    }

    #[test]
    fn concave_junction_prefers_the_nearest_corner_ahead() {
        // (1, 1) touches both remaining cells; the walk must turn toward
        // (0, 0)'s top edge instead of cutting back through (1, 0).
        let cells = [
            SquareCoord::new(0, 0),
            SquareCoord::new(1, 0),
            SquareCoord::new(1, 1),
        ];
        let outline = square_outline(&cells, &OutlineOptions::default());
        assert!(outline.is_closed());
        assert_eq!(
            outline.points,
            pts(&[
                (1.0, 0.0),
                (2.0, 0.0),
                (2.0, 1.0),
                (2.0, 2.0),
                (1.0, 2.0),
                (1.0, 1.0),
                (0.0, 1.0),
                (0.0, 0.0),
            ])
        );
    }

    #[test]
    fn ring_with_hole_traces_the_outer_boundary() {
        let cells: Vec<_> = block(3, 3)
            .into_iter()
            .filter(|c| *c != SquareCoord::new(1, 1))
            .collect();
        let outline = square_outline(&cells, &OutlineOptions::default());
        assert!(outline.is_closed());
        assert_eq!(outline.len(), 12);
        assert!(!outline.points.contains(&Point::new(1.0, 1.0)));
        assert!(!outline.points.contains(&Point::new(2.0, 2.0)));
    }

    #[test]
    fn step_limit_is_reported_as_partial() {
        let options = OutlineOptions { max_steps: 1 };
        let outline = square_outline(&block(2, 2), &options);
        assert_eq!(outline.status, OutlineStatus::StepLimit);
        assert_eq!(outline.points, pts(&[(1.0, 0.0)]));
        assert_eq!(outline.into_closed(), None);
    }

    #[test]
    fn disjoint_cells_close_around_the_first_only() {
        let cells = [SquareCoord::new(0, 0), SquareCoord::new(5, 0)];
        let outline = square_outline(&cells, &OutlineOptions::default());
        assert!(outline.is_closed());
        assert_eq!(outline.len(), 4);
        assert!(outline.points.iter().all(|p| p.x <= 1.0));
    }

    #[test]
    fn empty_region_has_no_boundary() {
        let outline = square_outline(&[], &OutlineOptions::default());
        assert_eq!(outline.status, OutlineStatus::NoBoundary);
        assert!(outline.is_empty());

        let zero = trace_outline(&[1_u8], 0, |_, _, _| None, |_, i| i);
        assert_eq!(zero.status, OutlineStatus::NoBoundary);
    }

    #[test]
    fn fully_enclosed_corners_have_no_boundary() {
        // Every corner of the one "cell" claims to touch the other.
        let outline = trace_outline(&[0_u8, 1], 4, |_, i, _| Some(i), |c, i| (*c, i));
        assert_eq!(outline.status, OutlineStatus::NoBoundary);
    }

    #[test]
    fn walk_that_never_returns_hits_the_step_limit() {
        // Corner 0 touches nothing and every other corner hops to the other
        // cell, but positions never repeat the first one.
        let next = core::cell::Cell::new(0_u32);
        let outline = trace_outline_with(
            &[0_u8, 1],
            4,
            |_, i, _| (i != 0).then_some(0),
            |_, _| {
                next.set(next.get() + 1);
                next.get()
            },
            &OutlineOptions { max_steps: 16 },
        );
        assert_eq!(outline.status, OutlineStatus::StepLimit);
        assert!(!outline.is_empty());
    }

    #[test]
    fn one_way_touch_ends_in_a_dead_end() {
        // Cell 0 hands off to cell 1, but nothing leads back out of cell 1.
        let outline = trace_outline(
            &[0_u8, 1],
            4,
            |a, i, _| (*a == 0 && i == 1).then_some(0),
            |c, i| (*c, i),
        );
        assert_eq!(outline.status, OutlineStatus::DeadEnd);
        assert_eq!(outline.points, [(0, 1), (1, 1), (1, 2), (1, 3), (1, 0)]);
    }

    #[test]
    fn hex_flower_closes_with_eighteen_points() {
        let grid = HexGrid::new(1.0);
        let center = HexCoord::new(0, 0);
        let mut cells = vec![center];
        cells.extend(grid.neighbors(center));
        let outline = trace_outline(
            &cells,
            HexGrid::NUM_CORNERS,
            |a, i, b| grid.touching_corner(*a, i, *b),
            |c, i| grid.corner_point(*c, i),
        );
        assert!(outline.is_closed());
        assert_eq!(outline.len(), 18);
        // Every outline point is a corner of an outer cell, never of the center only.
        let center_corners: Vec<_> = (0..6).map(|i| grid.corner_point(center, i)).collect();
        assert!(outline.points.iter().all(|p| !center_corners.contains(p)));
    }

    #[test]
    fn forward_distance_wraps_and_ranks_identity_last() {
        assert_eq!(forward_distance(3, 0, 4), 1);
        assert_eq!(forward_distance(0, 2, 4), 2);
        assert_eq!(forward_distance(2, 2, 4), 4);
        assert_eq!(forward_distance(5, 1, 6), 2);
    }
}
