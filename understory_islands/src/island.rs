// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Island result types.

use core::hash::Hash;
use core::ops::Deref;

use hashbrown::HashSet;
use hashbrown::hash_set::{IntoIter, Iter};

/// One connected component discovered by a detector.
///
/// The points are unique and unordered. Islands are read-only once returned;
/// use [`Island::into_points`] to take ownership of the underlying set.
#[derive(Clone, Debug)]
pub struct Island<C> {
    points: HashSet<C>,
}

impl<C> Default for Island<C> {
    fn default() -> Self {
        Self {
            points: HashSet::default(),
        }
    }
}

impl<C> Island<C> {
    pub(crate) fn from_points(points: HashSet<C>) -> Self {
        Self { points }
    }

    /// The set of coordinates in this island.
    #[inline]
    pub fn points(&self) -> &HashSet<C> {
        &self.points
    }

    /// Number of coordinates in this island.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the island has no coordinates.
    ///
    /// Detectors never return empty islands.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over the coordinates in arbitrary order.
    pub fn iter(&self) -> Iter<'_, C> {
        self.points.iter()
    }

    /// Consume the island and return its coordinate set.
    pub fn into_points(self) -> HashSet<C> {
        self.points
    }
}

impl<C: Eq + Hash> Island<C> {
    /// Whether `point` belongs to this island.
    #[inline]
    pub fn contains(&self, point: &C) -> bool {
        self.points.contains(point)
    }
}

impl<C: Eq + Hash> PartialEq for Island<C> {
    fn eq(&self, other: &Self) -> bool {
        self.points == other.points
    }
}

impl<C: Eq + Hash> Eq for Island<C> {}

impl<C> IntoIterator for Island<C> {
    type Item = C;
    type IntoIter = IntoIter<C>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a, C> IntoIterator for &'a Island<C> {
    type Item = &'a C;
    type IntoIter = Iter<'a, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// An [`Island`] whose coordinates all share one owner.
///
/// Dereferences to the inner [`Island`], so the point accessors are available
/// directly.
#[derive(Clone, Debug)]
pub struct OwnedIsland<C, O> {
    island: Island<C>,
    owner: O,
}

impl<C, O> OwnedIsland<C, O> {
    pub(crate) fn new(island: Island<C>, owner: O) -> Self {
        Self { island, owner }
    }

    /// The owner shared by every coordinate in this island.
    #[inline]
    pub fn owner(&self) -> &O {
        &self.owner
    }

    /// The underlying island.
    #[inline]
    pub fn island(&self) -> &Island<C> {
        &self.island
    }

    /// Split into the island and its owner.
    pub fn into_parts(self) -> (Island<C>, O) {
        (self.island, self.owner)
    }
}

impl<C, O> Deref for OwnedIsland<C, O> {
    type Target = Island<C>;

    fn deref(&self) -> &Island<C> {
        &self.island
    }
}

impl<C: Eq + Hash, O: PartialEq> PartialEq for OwnedIsland<C, O> {
    fn eq(&self, other: &Self) -> bool {
        self.owner == other.owner && self.island == other.island
    }
}
