// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Square cell topology.

use alloc::vec::Vec;

use kurbo::{Point, Vec2};
use smallvec::SmallVec;

use crate::signed_radius;

/// Corner offsets from a cell's minimum vertex, counter-clockwise with +y up.
const CORNER_OFFSETS: [(i32, i32); 4] = [(0, 0), (1, 0), (1, 1), (0, 1)];

const EDGE_OFFSETS: [(i32, i32); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

const DIAGONAL_OFFSETS: [(i32, i32); 4] = [(1, 1), (-1, 1), (-1, -1), (1, -1)];

/// Integer address of a square cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SquareCoord {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl SquareCoord {
    /// Create a new coordinate.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The coordinate shifted by `(dx, dy)`, saturating at the `i32` range.
    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

impl From<(i32, i32)> for SquareCoord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Which cells count as adjacent on a square grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Connectivity {
    /// Edge-sharing neighbors only; rings are Manhattan diamonds.
    #[default]
    Four,
    /// Edge- and corner-sharing neighbors; rings are Chebyshev squares.
    Eight,
}

/// A uniform square grid.
///
/// The grid itself is unbounded and stateless: it only describes how
/// [`SquareCoord`]s relate to each other and where their corners lie.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SquareGrid {
    /// Side length of one cell in world units.
    pub cell_size: f64,
    /// World position of the minimum corner of cell `(0, 0)`.
    pub origin: Point,
    /// Adjacency and ring metric.
    pub connectivity: Connectivity,
}

impl Default for SquareGrid {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl SquareGrid {
    /// Number of corners of every square cell.
    pub const NUM_CORNERS: usize = 4;

    /// Create a 4-connected grid with the given cell size and origin at (0, 0).
    pub const fn new(cell_size: f64) -> Self {
        Self {
            cell_size,
            origin: Point::ZERO,
            connectivity: Connectivity::Four,
        }
    }

    /// Returns this grid with a different connectivity.
    #[must_use]
    pub const fn with_connectivity(mut self, connectivity: Connectivity) -> Self {
        self.connectivity = connectivity;
        self
    }

    /// Returns this grid with a different origin.
    #[must_use]
    pub const fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    /// Cells adjacent to `cell` under this grid's [`Connectivity`].
    pub fn neighbors(&self, cell: SquareCoord) -> SmallVec<[SquareCoord; 8]> {
        let mut out: SmallVec<[SquareCoord; 8]> = EDGE_OFFSETS
            .iter()
            .map(|&(dx, dy)| cell.offset(dx, dy))
            .collect();
        if self.connectivity == Connectivity::Eight {
            out.extend(DIAGONAL_OFFSETS.iter().map(|&(dx, dy)| cell.offset(dx, dy)));
        }
        out
    }

    /// Topological distance between two cells.
    ///
    /// Manhattan distance for [`Connectivity::Four`], Chebyshev distance for
    /// [`Connectivity::Eight`].
    pub fn distance(&self, a: SquareCoord, b: SquareCoord) -> u32 {
        let dx = a.x.abs_diff(b.x);
        let dy = a.y.abs_diff(b.y);
        match self.connectivity {
            Connectivity::Four => dx.saturating_add(dy),
            Connectivity::Eight => dx.max(dy),
        }
    }

    /// Every cell at exactly `distance` from `cell`.
    ///
    /// A distance of zero yields `cell` itself.
    pub fn ring(&self, cell: SquareCoord, distance: u32) -> Vec<SquareCoord> {
        if distance == 0 {
            return alloc::vec![cell];
        }
        let d = signed_radius(distance);
        match self.connectivity {
            Connectivity::Four => {
                let mut out = Vec::with_capacity(4 * distance as usize);
                for k in 0..d {
                    out.push(cell.offset(d - k, k));
                    out.push(cell.offset(-k, d - k));
                    out.push(cell.offset(k - d, -k));
                    out.push(cell.offset(k, k - d));
                }
                out
            }
            Connectivity::Eight => {
                let mut out = Vec::with_capacity(8 * distance as usize);
                for i in -d..d {
                    out.push(cell.offset(i, -d));
                }
                for i in -d..d {
                    out.push(cell.offset(d, i));
                }
                for i in -d..d {
                    out.push(cell.offset(-i, d));
                }
                for i in -d..d {
                    out.push(cell.offset(-d, -i));
                }
                out
            }
        }
    }

    /// World position of the center of `cell`.
    pub fn cell_center(&self, cell: SquareCoord) -> Point {
        let half = 0.5 * self.cell_size;
        self.origin
            + Vec2::new(
                f64::from(cell.x) * self.cell_size + half,
                f64::from(cell.y) * self.cell_size + half,
            )
    }

    /// World position of corner `corner` of `cell`.
    ///
    /// Corner indices are taken modulo [`Self::NUM_CORNERS`].
    pub fn corner_point(&self, cell: SquareCoord, corner: usize) -> Point {
        let (vx, vy) = vertex(cell, corner);
        self.origin + Vec2::new(f64::from(vx) * self.cell_size, f64::from(vy) * self.cell_size)
    }

    /// Index of the corner of `other` that coincides with corner `corner` of
    /// `cell`, or `None` if the two cells do not share that vertex.
    ///
    /// A cell never touches itself.
    pub fn touching_corner(
        &self,
        cell: SquareCoord,
        corner: usize,
        other: SquareCoord,
    ) -> Option<usize> {
        if cell == other {
            return None;
        }
        let v = vertex(cell, corner);
        (0..Self::NUM_CORNERS).find(|&j| vertex(other, j) == v)
    }
}

/// Integer lattice vertex of a cell corner.
fn vertex(cell: SquareCoord, corner: usize) -> (i32, i32) {
    let (dx, dy) = CORNER_OFFSETS[corner % SquareGrid::NUM_CORNERS];
    let v = cell.offset(dx, dy);
    (v.x, v.y)
}
