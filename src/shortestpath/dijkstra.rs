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

//! Dijkstra's shortest path algorithm.
//!
//! Dijkstra's algorithm computes the shortest path from some start vertex
//! `s` to all other vertices of a (directed or undirected) graph. Each
//! edge is assigned a non-negative weight (or length) `w(u,v) >= 0`.
//!
//! In each step the algorithm selects the vertex with the smallest
//! tentative distance that has not been finalized yet, finalizes it and
//! relaxes its outgoing edges. The vertex can be selected in two ways
//! (see [`Selection`]): by scanning all vertices, or with a priority
//! queue. Both produce the same distances. Ties are broken by the
//! smaller vertex index.
//!
//! Negative weights are not detected. The algorithm terminates but the
//! distances may be wrong.
//!
//! # Example
//!
//! ```
//! use rs_shortestpath::MatrixGraph;
//! use rs_shortestpath::classes::cycle;
//! use rs_shortestpath::shortestpath::dijkstra::{self, Selection};
//!
//! let g: MatrixGraph<u32> = cycle(&[2, 3, 1, 4, 2]);
//!
//! let tree = dijkstra::run(&g, 0).unwrap();
//! assert_eq!(tree.distances(), &[Some(0), Some(2), Some(5), Some(6), Some(2)]);
//! assert_eq!(tree.path_to(3).unwrap(), vec![0, 4, 3]);
//!
//! let heap = dijkstra::run_with(&g, 0, Selection::Heap).unwrap();
//! assert_eq!(heap.distances(), tree.distances());
//!
//! // the search can also be run step by step
//! let order = dijkstra::start(&g, 0).unwrap().collect::<Result<Vec<_>, _>>().unwrap();
//! assert_eq!(order, vec![(0, 0), (1, 2), (4, 2), (2, 5), (3, 6)]);
//! ```

use crate::collections::{BinHeap, PriQueue};
use crate::error::{check_index, Error, Result};
use crate::shortestpath::path;
use crate::traits::{is_shorter, GraphIterator, Weight, WeightedGraph};

use crate::num::traits::Zero;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

use tracing::{debug, trace};

/// The strategy for selecting the next vertex to be finalized.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    /// Scan all vertices for the smallest tentative distance.
    ///
    /// Each step takes `O(n)` time, the whole search `O(n^2)`.
    Scan,
    /// Keep the improved vertices in a binary heap.
    ///
    /// Outdated heap entries are skipped when they are popped. The whole
    /// search takes `O((n + m) log n)` time on graphs whose outgoing edges
    /// can be enumerated in time proportional to their number.
    Heap,
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Scan
    }
}

/// The result of a single-source shortest path search.
///
/// Contains the distance from the source to each vertex and the
/// predecessor of each vertex on a shortest path. Unreachable vertices
/// have no distance and no predecessor.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct ShortestPathTree<W> {
    /// The source vertex.
    source: usize,
    /// The (tentative) distance of each vertex.
    dists: Vec<Option<W>>,
    /// The vertex from which each vertex has been reached last.
    preds: Vec<Option<usize>>,
}

impl<W> ShortestPathTree<W>
where
    W: Weight,
{
    fn new(n: usize, source: usize) -> Self {
        let mut dists = vec![None; n];
        dists[source] = Some(W::zero());
        ShortestPathTree {
            source,
            dists,
            preds: vec![None; n],
        }
    }

    /// Return the source vertex.
    pub fn source(&self) -> usize {
        self.source
    }

    /// Return the number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.dists.len()
    }

    /// Return the distances of all vertices.
    ///
    /// Unreachable vertices have distance `None`.
    pub fn distances(&self) -> &[Option<W>] {
        &self.dists
    }

    /// Return the predecessors of all vertices.
    pub fn predecessors(&self) -> &[Option<usize>] {
        &self.preds
    }

    /// Return the distance of `v` or `None` if `v` is unreachable.
    pub fn distance(&self, v: usize) -> Result<Option<W>> {
        check_index(v, self.num_vertices())?;
        Ok(self.dists[v])
    }

    /// Return the predecessor of `v` on a shortest path.
    ///
    /// This is `None` for the source and unreachable vertices.
    pub fn predecessor(&self, v: usize) -> Result<Option<usize>> {
        check_index(v, self.num_vertices())?;
        Ok(self.preds[v])
    }

    /// Return `true` if there is a path from the source to `v`.
    pub fn is_reachable(&self, v: usize) -> Result<bool> {
        Ok(self.distance(v)?.is_some())
    }

    /// Return an iterator over all reachable vertices in increasing order.
    ///
    /// The source itself is always reachable.
    pub fn reachable(&self) -> impl Iterator<Item = usize> + '_ {
        self.dists
            .iter()
            .enumerate()
            .filter(|(_, d)| d.is_some())
            .map(|(v, _)| v)
    }

    /// Return a shortest path from the source to `dst`.
    ///
    /// The path contains both end points. It is empty if `dst` is not
    /// reachable.
    pub fn path_to(&self, dst: usize) -> Result<Vec<usize>> {
        check_index(dst, self.num_vertices())?;
        if self.dists[dst].is_none() {
            return Ok(vec![]);
        }
        path::from_predecessors(&self.preds, self.source, dst)
    }

    /// Return a shortest path from the source to `dst` without using the
    /// stored predecessors.
    ///
    /// `g` must be the graph the search has been run on. See
    /// [`path::from_distances`].
    pub fn path_to_without_predecessors<G>(&self, g: &G, dst: usize) -> Result<Vec<usize>>
    where
        G: WeightedGraph<Weight = W>,
    {
        path::from_distances(g, &self.dists, self.source, dst)
    }

    /// Return the distance and predecessor vectors.
    pub fn into_parts(self) -> (Vec<Option<W>>, Vec<Option<usize>>) {
        (self.dists, self.preds)
    }
}

/// Dijkstra search iterator.
///
/// Each call to `next` finalizes one vertex and returns it together with
/// its distance from the source. The source itself is returned first.
/// The iterator ends when no vertex with a tentative distance is left.
///
/// If some vertex is only reachable on paths whose length does not fit
/// into the weight type, the last item is [`Error::Overflow`].
pub struct Dijkstra<'a, G>
where
    G: WeightedGraph,
{
    g: &'a G,
    tree: ShortestPathTree<G::Weight>,
    finalized: Vec<bool>,
    /// Vertices reached by a path whose length overflows.
    overflow: Vec<bool>,
    /// The priority queue, only used by [`Selection::Heap`].
    heap: Option<BinHeap<usize, (G::Weight, usize)>>,
    done: bool,
}

/// Start a Dijkstra search from `src` using [`Selection::Scan`].
pub fn start<G>(g: &G, src: usize) -> Result<Dijkstra<'_, G>>
where
    G: WeightedGraph,
{
    start_with(g, src, Selection::default())
}

/// Start a Dijkstra search from `src` with the given selection strategy.
///
/// Returns an error if `src` is not a vertex of `g`.
pub fn start_with<G>(g: &G, src: usize, selection: Selection) -> Result<Dijkstra<'_, G>>
where
    G: WeightedGraph,
{
    let n = g.num_vertices();
    g.check_vertex(src)?;

    let heap = match selection {
        Selection::Scan => None,
        Selection::Heap => {
            let mut heap = BinHeap::new();
            heap.push(src, (G::Weight::zero(), src));
            Some(heap)
        }
    };

    Ok(Dijkstra {
        g,
        tree: ShortestPathTree::new(n, src),
        finalized: vec![false; n],
        overflow: vec![false; n],
        heap,
        done: false,
    })
}

/// Run Dijkstra's algorithm from `src` using [`Selection::Scan`].
pub fn run<G>(g: &G, src: usize) -> Result<ShortestPathTree<G::Weight>>
where
    G: WeightedGraph,
{
    start(g, src)?.into_tree()
}

/// Run Dijkstra's algorithm from `src` with the given selection strategy.
pub fn run_with<G>(g: &G, src: usize, selection: Selection) -> Result<ShortestPathTree<G::Weight>>
where
    G: WeightedGraph,
{
    start_with(g, src, selection)?.into_tree()
}

impl<'a, G> Dijkstra<'a, G>
where
    G: WeightedGraph,
{
    /// Return the current state of the search.
    ///
    /// The distances of vertices that are not finalized are tentative.
    pub fn tree(&self) -> &ShortestPathTree<G::Weight> {
        &self.tree
    }

    /// Return `true` if the distance of `u` is final.
    pub fn is_finalized(&self, u: usize) -> Result<bool> {
        check_index(u, self.finalized.len())?;
        Ok(self.finalized[u])
    }

    /// Run the search to completion and return the result.
    pub fn into_tree(mut self) -> Result<ShortestPathTree<G::Weight>> {
        let mut reached = 0;
        for step in self.by_ref() {
            step?;
            reached += 1;
        }
        debug!(
            source = self.tree.source,
            vertices = self.tree.num_vertices(),
            reached,
            "single-source shortest paths computed"
        );
        Ok(self.tree)
    }

    /// Return the unfinalized vertex with the smallest distance.
    fn select(&mut self) -> Option<(usize, G::Weight)> {
        let dists = &self.tree.dists;
        let finalized = &self.finalized;
        match self.heap.as_mut() {
            None => {
                let mut best: Option<(usize, G::Weight)> = None;
                for (u, &d) in dists.iter().enumerate() {
                    if finalized[u] {
                        continue;
                    }
                    if let Some(d) = d {
                        if best.map_or(true, |(_, b)| d < b) {
                            best = Some((u, d));
                        }
                    }
                }
                best
            }
            Some(heap) => {
                // the first entry of a vertex carries its current distance
                while let Some((u, (d, _))) = heap.pop_min() {
                    if !finalized[u] {
                        return Some((u, d));
                    }
                }
                None
            }
        }
    }

    /// Return the overflow error for a vertex that has not been reached by
    /// any representable path.
    fn overflow_error(&self) -> Option<Error> {
        let dists = &self.tree.dists;
        self.overflow
            .iter()
            .enumerate()
            .find(|&(v, &o)| o && dists[v].is_none())
            .map(|(v, _)| Error::Overflow {
                from: self.tree.source,
                to: v,
            })
    }
}

impl<'a, G> Iterator for Dijkstra<'a, G>
where
    G: WeightedGraph,
{
    type Item = Result<(usize, G::Weight)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let (u, du) = match self.select() {
            Some(next) => next,
            None => {
                self.done = true;
                return self.overflow_error().map(Err);
            }
        };
        self.finalized[u] = true;
        trace!(vertex = u, distance = ?du, "finalized");

        let g = self.g;
        let mut it = g.out_iter(u);
        while let Some((v, w)) = it.next(g) {
            if self.finalized[v] {
                continue;
            }
            match du.checked_sum(w) {
                Some(dv) => {
                    if is_shorter(dv, self.tree.dists[v]) {
                        self.tree.dists[v] = Some(dv);
                        self.tree.preds[v] = Some(u);
                        if let Some(heap) = self.heap.as_mut() {
                            heap.push(v, (dv, v));
                        }
                    }
                }
                None => self.overflow[v] = true,
            }
        }

        Some(Ok((u, du)))
    }
}
