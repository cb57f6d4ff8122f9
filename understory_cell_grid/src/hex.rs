// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointy-top hexagonal cell topology in axial coordinates.

use alloc::vec::Vec;

use kurbo::{Point, Vec2};
use smallvec::SmallVec;

use crate::signed_radius;

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Axial neighbor offsets `(dq, dr)`; direction `k` points at 60·k degrees.
const DIRECTIONS: [(i32, i32); 6] = [(1, 0), (0, 1), (-1, 1), (-1, 0), (0, -1), (1, -1)];

/// Unit corner offsets; corner `k` sits at 30 + 60·k degrees.
const CORNER_UNITS: [(f64, f64); 6] = [
    (SQRT_3 / 2.0, 0.5),
    (0.0, 1.0),
    (-SQRT_3 / 2.0, 0.5),
    (-SQRT_3 / 2.0, -0.5),
    (0.0, -1.0),
    (SQRT_3 / 2.0, -0.5),
];

/// Axial address of a hexagonal cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HexCoord {
    /// Column axis.
    pub q: i32,
    /// Row axis.
    pub r: i32,
}

impl HexCoord {
    /// Create a new coordinate.
    #[inline]
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// The neighbor in direction `direction` (taken modulo 6).
    #[inline]
    pub const fn neighbor(self, direction: usize) -> Self {
        let (dq, dr) = DIRECTIONS[direction % 6];
        self.offset(dq, dr)
    }

    const fn offset(self, dq: i32, dr: i32) -> Self {
        Self {
            q: self.q.saturating_add(dq),
            r: self.r.saturating_add(dr),
        }
    }
}

/// A pointy-top hexagonal grid.
///
/// Corner `k` of every cell lies between neighbor directions `k` and `k + 1`,
/// so corner `k` of a cell coincides with corner `k + 2` of its neighbor in
/// direction `k` and with corner `k + 4` of its neighbor in direction `k + 1`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HexGrid {
    /// Distance from a cell center to any of its corners, in world units.
    pub size: f64,
    /// World position of the center of cell `(0, 0)`.
    pub origin: Point,
}

impl Default for HexGrid {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl HexGrid {
    /// Number of corners of every hexagonal cell.
    pub const NUM_CORNERS: usize = 6;

    /// Create a grid with the given hexagon size and origin at (0, 0).
    pub const fn new(size: f64) -> Self {
        Self {
            size,
            origin: Point::ZERO,
        }
    }

    /// Returns this grid with a different origin.
    #[must_use]
    pub const fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    /// The six cells sharing an edge with `cell`.
    pub fn neighbors(&self, cell: HexCoord) -> SmallVec<[HexCoord; 6]> {
        (0..6).map(|k| cell.neighbor(k)).collect()
    }

    /// Cube distance between two cells.
    pub fn distance(&self, a: HexCoord, b: HexCoord) -> u32 {
        let dq = i64::from(a.q) - i64::from(b.q);
        let dr = i64::from(a.r) - i64::from(b.r);
        let sum = (dq.abs() + dr.abs() + (dq + dr).abs()) / 2;
        u32::try_from(sum).unwrap_or(u32::MAX)
    }

    /// Every cell at exactly `distance` from `cell`, walking the ring
    /// counter-clockwise.
    ///
    /// A distance of zero yields `cell` itself.
    pub fn ring(&self, cell: HexCoord, distance: u32) -> Vec<HexCoord> {
        if distance == 0 {
            return alloc::vec![cell];
        }
        let d = signed_radius(distance);
        let (sq, sr) = DIRECTIONS[4];
        let mut current = cell.offset(sq.saturating_mul(d), sr.saturating_mul(d));
        let mut out = Vec::with_capacity(6 * distance as usize);
        for side in 0..6 {
            for _ in 0..d {
                out.push(current);
                current = current.neighbor(side);
            }
        }
        out
    }

    /// World position of the center of `cell`.
    pub fn cell_center(&self, cell: HexCoord) -> Point {
        let q = f64::from(cell.q);
        let r = f64::from(cell.r);
        self.origin + Vec2::new(self.size * SQRT_3 * (q + 0.5 * r), self.size * 1.5 * r)
    }

    /// World position of corner `corner` of `cell`.
    ///
    /// Each vertex is evaluated through a single canonical owning cell, so all
    /// three cells meeting at a vertex report bit-identical points.
    pub fn corner_point(&self, cell: HexCoord, corner: usize) -> Point {
        let (owner, k) = canonical_vertex(cell, corner % Self::NUM_CORNERS);
        let (ux, uy) = CORNER_UNITS[k];
        self.cell_center(owner) + Vec2::new(ux * self.size, uy * self.size)
    }

    /// Index of the corner of `other` that coincides with corner `corner` of
    /// `cell`, or `None` if the two cells do not share that vertex.
    pub fn touching_corner(&self, cell: HexCoord, corner: usize, other: HexCoord) -> Option<usize> {
        let k = corner % Self::NUM_CORNERS;
        if other == cell.neighbor(k) {
            Some((k + 2) % Self::NUM_CORNERS)
        } else if other == cell.neighbor(k + 1) {
            Some((k + 4) % Self::NUM_CORNERS)
        } else {
            None
        }
    }
}

/// The `(cell, corner)` pair with `corner ∈ {0, 1}` naming the same vertex.
fn canonical_vertex(cell: HexCoord, corner: usize) -> (HexCoord, usize) {
    match corner {
        0 | 1 => (cell, corner),
        // Corner k is corner k + 2 of the neighbor in direction k.
        4 | 5 => (cell.neighbor(corner), (corner + 2) % 6),
        // Corner k is corner k + 4 of the neighbor in direction k + 1.
        _ => (cell.neighbor(corner + 1), (corner + 4) % 6),
    }
}
