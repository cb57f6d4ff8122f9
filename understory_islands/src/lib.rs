// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_islands --heading-base-level=0

//! Understory Islands: connected-component discovery over caller-defined coordinates.
//!
//! An *island* is a maximal set of coordinates connected under a caller-supplied
//! adjacency relation, restricted to coordinates a caller-supplied predicate
//! accepts. This crate finds islands over any coordinate type with value
//! equality and hashing: square cells, hex cells, graph nodes, or anything else
//! that is discretely addressable.
//!
//! - [`IslandDetector`]: unconstrained flood fill from a list of start points.
//! - [`OwnedIslandDetector`]: flood fill where adjacent coordinates only merge if
//!   a caller-supplied owner function returns equal values for both.
//! - [`Island`] / [`OwnedIsland`]: the unordered, unique point sets returned.
//!
//! The crate does not own a grid or decide cell geometry. Callers inject three
//! plain closures:
//!
//! - `adjacent: Fn(&C) -> impl IntoIterator<Item = C>`
//! - `valid: Fn(&C) -> bool`
//! - `owner: Fn(&C) -> O` where `O: PartialEq` (owned detector only)
//!
//! ## Example
//!
//! ```rust
//! use understory_islands::IslandDetector;
//!
//! // Cells on a 1D strip; 3 is a gap.
//! let cells = [0, 1, 2, 4, 5];
//! let detector = IslandDetector::new(
//!     cells,
//!     |x: &i32| [x - 1, x + 1],
//!     |x: &i32| cells.contains(x),
//! );
//!
//! let islands = detector.find_islands();
//! assert_eq!(islands.len(), 2);
//! assert!(islands.iter().any(|i| i.len() == 3 && i.contains(&1)));
//! ```
//!
//! Owners split otherwise-connected regions:
//!
//! ```rust
//! use understory_islands::OwnedIslandDetector;
//!
//! let owners = ['r', 'r', 'b', 'b', 'r'];
//! let detector = OwnedIslandDetector::new(
//!     0..5_usize,
//!     |x: &usize| [x.wrapping_sub(1), x + 1],
//!     |x: &usize| *x < owners.len(),
//!     |x: &usize| owners[*x],
//! );
//!
//! let islands = detector.find_islands();
//! assert_eq!(islands.len(), 3);
//! assert_eq!(islands.iter().filter(|i| *i.owner() == 'r').count(), 2);
//! ```
//!
//! ## Semantics
//!
//! - Start points are seeds, taken in order. A seed already claimed by an
//!   earlier island, or rejected by `valid`, starts nothing. Both detectors
//!   validate seeds the same way.
//! - The fill follows adjacency to any valid coordinate, not only listed start
//!   points.
//! - Every coordinate belongs to at most one island, and the islands returned
//!   are never empty.
//! - Traversal state lives inside each `find_islands` call. Detectors can be
//!   reused, shared across threads when their closures allow it, and re-entered
//!   from within their own callbacks.
//! - The fill uses an explicit stack, so very large regions do not risk stack
//!   exhaustion.
//!
//! Adjacency is expected to be symmetric and owner equality consistent; neither
//! is checked.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod detector;
mod island;
mod owned;
mod traversal;

pub use detector::IslandDetector;
pub use island::{Island, OwnedIsland};
pub use owned::OwnedIslandDetector;
