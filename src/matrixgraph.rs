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

//! A weighted graph stored as dense adjacency matrix.

use crate::builder::{Buildable, Builder};
use crate::traits::{ScanIt, Weight, WeightedGraph};

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// A weighted graph stored as `n x n` adjacency matrix.
///
/// Entry `(u, v)` holds the weight of the edge `(u, v)` or `None`. Weight
/// queries take constant time.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct MatrixGraph<W> {
    /// Number of vertices.
    n: usize,
    /// Row-major matrix of edge weights.
    weights: Vec<Option<W>>,
}

impl<W> MatrixGraph<W>
where
    W: Copy,
{
    /// Create a graph with `n` vertices and no edges.
    pub fn new(n: usize) -> Self {
        MatrixGraph {
            n,
            weights: vec![None; n * n],
        }
    }

    /// Remove the edge `(u, v)` if it exists.
    pub fn remove_edge(&mut self, u: usize, v: usize) {
        let idx = self.index(u, v);
        self.weights[idx] = None;
    }

    /// Remove both directions of the undirected edge `{u, v}`.
    pub fn remove_undirected_edge(&mut self, u: usize, v: usize) {
        self.remove_edge(u, v);
        self.remove_edge(v, u);
    }

    /// Return the number of (directed) edges.
    pub fn num_edges(&self) -> usize {
        self.weights.iter().filter(|w| w.is_some()).count()
    }

    fn index(&self, u: usize, v: usize) -> usize {
        assert!(
            u < self.n && v < self.n,
            "Invalid edge ({},{}) for {} vertices",
            u,
            v,
            self.n
        );
        u * self.n + v
    }
}

impl<W> Builder for MatrixGraph<W>
where
    W: Copy,
{
    type Graph = Self;
    type Weight = W;

    fn with_vertices(n: usize) -> Self {
        MatrixGraph::new(n)
    }

    /// Add the edge `(u, v)`, replacing the weight of an existing edge.
    fn add_edge(&mut self, u: usize, v: usize, w: W) {
        let idx = self.index(u, v);
        self.weights[idx] = Some(w);
    }

    fn into_graph(self) -> Self {
        self
    }
}

impl<W> Buildable for MatrixGraph<W>
where
    W: Copy,
{
    type Builder = Self;
}

impl<W> WeightedGraph for MatrixGraph<W>
where
    W: Weight,
{
    type Weight = W;

    type OutIt = ScanIt;

    fn num_vertices(&self) -> usize {
        self.n
    }

    fn weight(&self, u: usize, v: usize) -> Option<W> {
        self.weights[self.index(u, v)]
    }

    fn out_iter(&self, u: usize) -> ScanIt {
        assert!(u < self.n, "Invalid vertex {} for {} vertices", u, self.n);
        ScanIt::new(u)
    }
}
