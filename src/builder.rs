/*
 * Copyright (c) 2026 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

//! Traits for constructing weighted graphs.

/// A trait to construct weighted graphs.
///
/// The number of vertices is fixed when the builder is created. Edges
/// are added between vertex indices. Once the construction is complete
/// the builder is turned into a graph, which is not modified by the
/// shortest path algorithms.
pub trait Builder
where
    Self: Sized,
{
    /// The graph type produced by this builder.
    type Graph;

    /// The type of edge weights.
    type Weight: Copy;

    /// Create a new builder for a graph with `n` vertices and no edges.
    fn with_vertices(n: usize) -> Self;

    /// Add the directed edge `(u, v)` with weight `w`.
    ///
    /// # Panics
    ///
    /// Panics if `u` or `v` is not a vertex index.
    fn add_edge(&mut self, u: usize, v: usize, w: Self::Weight);

    /// Add the undirected edge `{u, v}` with weight `w`.
    ///
    /// This is the same as adding the directed edges `(u, v)` and `(v, u)`
    /// with equal weights.
    fn add_undirected_edge(&mut self, u: usize, v: usize, w: Self::Weight) {
        self.add_edge(u, v, w);
        self.add_edge(v, u, w);
    }

    /// Turn the builder into a graph.
    fn into_graph(self) -> Self::Graph;
}

/// A graph with a default builder.
pub trait Buildable
where
    Self: Sized,
{
    type Builder: Builder<Graph = Self>;

    /// Create a new builder for a graph with `n` vertices.
    fn new_builder(n: usize) -> Self::Builder {
        Self::Builder::with_vertices(n)
    }

    /// Create a new graph with `n` vertices by passing the builder to the
    /// callback `f`.
    ///
    /// # Example
    ///
    /// ```
    /// use rs_shortestpath::{Buildable, Builder, MatrixGraph};
    /// use rs_shortestpath::traits::WeightedGraph;
    ///
    /// let g = MatrixGraph::<u32>::new_with(3, |b| {
    ///     b.add_edge(0, 1, 4);
    ///     b.add_undirected_edge(1, 2, 7);
    /// });
    ///
    /// assert_eq!(g.num_vertices(), 3);
    /// assert_eq!(g.weight(0, 1), Some(4));
    /// assert_eq!(g.weight(1, 0), None);
    /// assert_eq!(g.weight(2, 1), Some(7));
    /// ```
    fn new_with<F>(n: usize, f: F) -> Self
    where
        F: FnOnce(&mut Self::Builder),
    {
        let mut b = Self::new_builder(n);
        f(&mut b);
        b.into_graph()
    }
}
