// Copyright (c) 2026 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! Traits for weighted graphs and edge weights.
//!
//! The shortest path algorithms do not depend on a particular graph
//! representation. They only need a fixed number of vertices, numbered
//! `0..n`, the weight of the edge between two vertices and the outgoing
//! edges of a vertex. This is the [`WeightedGraph`] trait.
//!
//! Distances are values of some [`Weight`] type. A missing distance
//! (`None`) means that there is no path, so every value of the weight
//! type is a valid path length.

use crate::error::{check_index, Result};
use crate::num::traits::{CheckedAdd, Zero};

use std::fmt::Debug;

/// A numeric edge weight (and path length).
pub trait Weight: Copy + PartialOrd + Zero + Debug {
    /// Return the length of two concatenated paths.
    ///
    /// Returns `None` if the sum is not representable by this type.
    fn checked_sum(self, other: Self) -> Option<Self>;
}

macro_rules! int_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn checked_sum(self, other: Self) -> Option<Self> {
                    <$t as CheckedAdd>::checked_add(&self, &other)
                }
            }
        )*
    };
}

int_weight!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! float_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                /// The sum of two floats must be finite.
                fn checked_sum(self, other: Self) -> Option<Self> {
                    let sum = self + other;
                    if sum.is_finite() {
                        Some(sum)
                    } else {
                        None
                    }
                }
            }
        )*
    };
}

float_weight!(f32, f64);

/// Return `true` if `d` is shorter than the distance `old`.
///
/// `None` stands for "no path" and is longer than every length.
pub(crate) fn is_shorter<W: PartialOrd>(d: W, old: Option<W>) -> bool {
    match old {
        Some(old) => d < old,
        None => true,
    }
}

/// An iterator over some graph elements that does not hold a reference
/// to the graph.
///
/// The graph is passed to each call of `next` instead. Use
/// [`GraphIterator::iter`] to turn it into a standard iterator.
pub trait GraphIterator<G: ?Sized>: Clone {
    type Item;

    fn next(&mut self, g: &G) -> Option<Self::Item>;

    fn iter(self, g: &G) -> GraphIter<G, Self>
    where
        G: Sized,
    {
        GraphIter(self, g)
    }
}

/// A graph iterator together with its graph as a standard iterator.
pub struct GraphIter<'a, G, I>(I, &'a G);

impl<'a, G, I> Iterator for GraphIter<'a, G, I>
where
    I: GraphIterator<G>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next(self.1)
    }
}

/// A weighted graph on the vertices `0..num_vertices()`.
///
/// There is at most one weight per ordered pair of vertices. An
/// undirected edge is represented by the same weight in both directions.
pub trait WeightedGraph {
    /// Type of edge weights.
    type Weight: Weight;

    /// Type of the iterator over outgoing edges.
    ///
    /// Graphs without a better way to find the outgoing edges can use
    /// [`ScanIt`].
    type OutIt: GraphIterator<Self, Item = (usize, Self::Weight)>;

    /// Return the number of vertices.
    fn num_vertices(&self) -> usize;

    /// Return the weight of the edge `(u, v)` or `None` if there is no
    /// such edge.
    ///
    /// Implementations may panic if `u` or `v` is not a vertex index.
    fn weight(&self, u: usize, v: usize) -> Option<Self::Weight>;

    /// Return a graph iterator over the outgoing edges `(v, w)` of `u`.
    fn out_iter(&self, u: usize) -> Self::OutIt;

    /// Return an iterator over the outgoing edges `(v, w)` of `u`.
    fn outedges(&self, u: usize) -> GraphIter<Self, Self::OutIt>
    where
        Self: Sized,
    {
        GraphIter(self.out_iter(u), self)
    }

    /// Return `true` if the graph contains the edge `(u, v)`.
    fn has_edge(&self, u: usize, v: usize) -> bool {
        self.weight(u, v).is_some()
    }

    /// Return an error if `u` is not a vertex of this graph.
    fn check_vertex(&self, u: usize) -> Result<()> {
        check_index(u, self.num_vertices())
    }
}

/// Outgoing edges found by asking for the weight to every vertex.
///
/// Each step takes constant time on graphs with constant time weight
/// queries, the whole iteration `O(n)`.
#[derive(Clone, Debug)]
pub struct ScanIt {
    u: usize,
    v: usize,
}

impl ScanIt {
    pub fn new(u: usize) -> Self {
        ScanIt { u, v: 0 }
    }
}

impl<G> GraphIterator<G> for ScanIt
where
    G: WeightedGraph + ?Sized,
{
    type Item = (usize, G::Weight);

    fn next(&mut self, g: &G) -> Option<Self::Item> {
        while self.v < g.num_vertices() {
            let v = self.v;
            self.v += 1;
            if let Some(w) = g.weight(self.u, v) {
                return Some((v, w));
            }
        }
        None
    }
}

/// Graph iterator of `G` used as graph iterator of `&G`.
#[derive(Clone, Debug)]
pub struct WrapIt<I>(pub I);

impl<'a, G, I> GraphIterator<&'a G> for WrapIt<I>
where
    G: ?Sized,
    I: GraphIterator<G>,
{
    type Item = I::Item;

    fn next(&mut self, g: &&'a G) -> Option<Self::Item> {
        self.0.next(*g)
    }
}

impl<'a, G> WeightedGraph for &'a G
where
    G: WeightedGraph + ?Sized,
{
    type Weight = G::Weight;

    type OutIt = WrapIt<G::OutIt>;

    fn num_vertices(&self) -> usize {
        (**self).num_vertices()
    }

    fn weight(&self, u: usize, v: usize) -> Option<Self::Weight> {
        (**self).weight(u, v)
    }

    fn out_iter(&self, u: usize) -> Self::OutIt {
        WrapIt((**self).out_iter(u))
    }

    fn has_edge(&self, u: usize, v: usize) -> bool {
        (**self).has_edge(u, v)
    }
}
