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

//! A weighted graph stored as adjacency lists.

use crate::builder::{Buildable, Builder};
use crate::traits::{GraphIterator, Weight, WeightedGraph};

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// A weighted graph stored as list of outgoing edges for each vertex.
///
/// Weight queries take time linear in the out-degree of the source.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct ListGraph<W> {
    /// The outgoing edges `(sink, weight)` of each vertex.
    adj: Vec<Vec<(usize, W)>>,
}

impl<W> ListGraph<W>
where
    W: Copy,
{
    /// Create a graph with `n` vertices and no edges.
    pub fn new(n: usize) -> Self {
        ListGraph {
            adj: (0..n).map(|_| vec![]).collect(),
        }
    }

    /// Remove the edge `(u, v)` if it exists.
    pub fn remove_edge(&mut self, u: usize, v: usize) {
        self.check(u, v);
        self.adj[u].retain(|&(w, _)| w != v);
    }

    /// Remove both directions of the undirected edge `{u, v}`.
    pub fn remove_undirected_edge(&mut self, u: usize, v: usize) {
        self.remove_edge(u, v);
        self.remove_edge(v, u);
    }

    /// Return the number of (directed) edges.
    pub fn num_edges(&self) -> usize {
        self.adj.iter().map(Vec::len).sum()
    }

    fn check(&self, u: usize, v: usize) {
        assert!(
            u < self.adj.len() && v < self.adj.len(),
            "Invalid edge ({},{}) for {} vertices",
            u,
            v,
            self.adj.len()
        );
    }
}

/// The outgoing edges of a vertex in insertion order.
#[derive(Clone, Debug)]
pub struct ListIt {
    u: usize,
    pos: usize,
}

impl<W> GraphIterator<ListGraph<W>> for ListIt
where
    W: Copy,
{
    type Item = (usize, W);

    fn next(&mut self, g: &ListGraph<W>) -> Option<Self::Item> {
        let edge = g.adj[self.u].get(self.pos)?;
        self.pos += 1;
        Some(*edge)
    }
}

impl<W> Builder for ListGraph<W>
where
    W: Copy,
{
    type Graph = Self;
    type Weight = W;

    fn with_vertices(n: usize) -> Self {
        ListGraph::new(n)
    }

    /// Add the edge `(u, v)` unless it already exists.
    ///
    /// The weight of an existing edge is kept.
    fn add_edge(&mut self, u: usize, v: usize, w: W) {
        self.check(u, v);
        if self.adj[u].iter().all(|&(x, _)| x != v) {
            self.adj[u].push((v, w));
        }
    }

    fn into_graph(self) -> Self {
        self
    }
}

impl<W> Buildable for ListGraph<W>
where
    W: Copy,
{
    type Builder = Self;
}

impl<W> WeightedGraph for ListGraph<W>
where
    W: Weight,
{
    type Weight = W;

    type OutIt = ListIt;

    fn num_vertices(&self) -> usize {
        self.adj.len()
    }

    fn out_iter(&self, u: usize) -> ListIt {
        self.check(u, u);
        ListIt { u, pos: 0 }
    }

    fn weight(&self, u: usize, v: usize) -> Option<W> {
        self.check(u, v);
        self.adj[u].iter().find(|&&(x, _)| x == v).map(|&(_, w)| w)
    }
}
