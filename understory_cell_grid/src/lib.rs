// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_cell_grid --heading-base-level=0

//! Understory Cell Grid: concrete cell topologies for discrete spatial queries.
//!
//! The island and outline crates are generic over an opaque coordinate type and
//! consume adjacency, ring, and corner geometry as plain closures. This crate
//! provides ready-made implementations of those strategies for the two most
//! common topologies:
//!
//! - [`SquareGrid`] over [`SquareCoord`]: 4- or 8-connected square cells
//!   (see [`Connectivity`]), with Manhattan or Chebyshev rings respectively.
//! - [`HexGrid`] over [`HexCoord`]: pointy-top hexagons in axial coordinates,
//!   with cube-distance rings.
//!
//! Both grids expose the same surface:
//!
//! - `neighbors(cell)`: the adjacency function.
//! - `ring(cell, distance)`: every cell at exactly `distance` steps.
//! - `corner_point(cell, index)`: world-space position of a cell corner as a
//!   [`kurbo::Point`]. Corners are numbered counter-clockwise (with +y up).
//! - `touching_corner(a, index, b)`: the index of the corner of `b` that
//!   coincides with corner `index` of `a`, if any.
//!
//! Corner positions are exact in the sense that matters for outline tracing:
//! a vertex shared by several cells yields bit-identical [`kurbo::Point`]s no
//! matter which cell it is requested through.
//!
//! ## Example
//!
//! ```rust
//! use understory_cell_grid::{HexCoord, HexGrid, SquareCoord, SquareGrid};
//!
//! let square = SquareGrid::default();
//! let a = SquareCoord::new(0, 0);
//! let b = SquareCoord::new(1, 0);
//! assert_eq!(square.neighbors(a).len(), 4);
//! // The bottom-right corner of `a` is the bottom-left corner of `b`.
//! assert_eq!(square.touching_corner(a, 1, b), Some(0));
//! assert_eq!(square.corner_point(a, 1), square.corner_point(b, 0));
//!
//! let hex = HexGrid::new(1.0);
//! let origin = HexCoord::new(0, 0);
//! assert_eq!(hex.ring(origin, 2).len(), 12);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for `kurbo`'s
//!   floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod hex;
mod square;

pub use hex::{HexCoord, HexGrid};
pub use square::{Connectivity, SquareCoord, SquareGrid};

/// Convert a ring distance into a signed axis offset, saturating at `i32::MAX`.
#[inline]
pub(crate) fn signed_radius(distance: u32) -> i32 {
    i32::try_from(distance).unwrap_or(i32::MAX)
}
