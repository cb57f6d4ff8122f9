// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_outline --heading-base-level=0

//! Understory Outline: boundary polygons and distance bands for regions of cells.
//!
//! Given a region (a set of cells that is already known, typically an island
//! from `understory_islands`), this crate answers two questions without owning
//! a grid or knowing its geometry:
//!
//! - **Where is the edge?** [`trace_outline`] walks the touching corners of
//!   adjacent cells and returns the ordered corner positions of the region's
//!   outer boundary as an [`Outline`]. The result is tagged with an
//!   [`OutlineStatus`], so a walk that closed can be told apart from one that
//!   hit a dead end or the step cap in [`OutlineOptions`].
//! - **What is near the edge?** [`ring_distances`] computes a bounded signed
//!   distance field from the region's boundary, where negative means inside and
//!   positive means outside. [`outline_band`] selects one band of it, for example
//!   the boundary ring itself, a visibility fringe just outside, or a margin
//!   just inside.
//!
//! Topology is injected as plain closures, so the same code serves square
//! cells, hex cells, or anything with a fixed number of numbered corners:
//!
//! - `touching_corner: Fn(&C, usize, &C) -> Option<usize>`
//! - `corner_point: Fn(&C, usize) -> P` with `P: PartialEq`
//! - `ring: Fn(&C, u32) -> impl IntoIterator<Item = C>`
//!
//! ## Example
//!
//! Using `understory_cell_grid` for square-cell topology:
//!
//! ```rust
//! use understory_cell_grid::{SquareCoord, SquareGrid};
//! use understory_outline::{outline_band, trace_outline};
//!
//! let grid = SquareGrid::default();
//! let cells: Vec<_> = (0..2)
//!     .flat_map(|y| (0..2).map(move |x| SquareCoord::new(x, y)))
//!     .collect();
//!
//! // A 2x2 block traces as a closed 8-point square.
//! let outline = trace_outline(
//!     &cells,
//!     SquareGrid::NUM_CORNERS,
//!     |a, i, b| grid.touching_corner(*a, i, *b),
//!     |c, i| grid.corner_point(*c, i),
//! );
//! assert!(outline.is_closed());
//! assert_eq!(outline.len(), 8);
//!
//! // The 8 cells directly around the block (4-connected rings).
//! let fringe: Vec<_> = outline_band(cells.iter().copied(), 1, |c: &SquareCoord, d| {
//!     grid.ring(*c, d)
//! })
//! .collect();
//! assert_eq!(fringe.len(), 8);
//! ```
//!
//! ## Caveats
//!
//! - The outline follows the outer boundary only; holes are not traced.
//! - Non-manifold regions (cells joined at a single vertex) and disconnected
//!   input give well-defined but possibly partial results. Check
//!   [`Outline::status`] before treating the points as a polygon.
//! - The walk is `O(steps · corners · cells)`. It is meant for islands of
//!   modest size, not whole worlds.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod band;
mod trace;

pub use band::{outline_band, ring_distances};
pub use trace::{Outline, OutlineOptions, OutlineStatus, trace_outline, trace_outline_with};
