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

//! Some common weighted graph classes.
//!
//! All graphs are undirected, i.e. each edge is added in both directions
//! with the same weight.

use crate::builder::{Buildable, Builder};

/// Returns an undirected path with `weights.len()` edges.
///
/// Edge `i` connects the vertices `i` and `i + 1` and has weight
/// `weights[i]`.
pub fn path<G, W>(weights: &[W]) -> G
where
    G: Buildable,
    G::Builder: Builder<Weight = W>,
    W: Copy,
{
    let mut b = G::Builder::with_vertices(weights.len() + 1);
    for (u, &w) in weights.iter().enumerate() {
        b.add_undirected_edge(u, u + 1, w);
    }
    b.into_graph()
}

/// Returns an undirected cycle with `weights.len()` vertices.
///
/// Edge `i` connects the vertices `i` and `(i + 1) % n` and has weight
/// `weights[i]`.
pub fn cycle<G, W>(weights: &[W]) -> G
where
    G: Buildable,
    G::Builder: Builder<Weight = W>,
    W: Copy,
{
    let n = weights.len();
    let mut b = G::Builder::with_vertices(n);
    for (u, &w) in weights.iter().enumerate() {
        b.add_undirected_edge(u, (u + 1) % n, w);
    }
    b.into_graph()
}

/// Returns the complete undirected graph on `n` vertices.
///
/// The edge `{u, v}` with `u < v` has weight `weight(u, v)`.
pub fn complete_graph<G, W, F>(n: usize, weight: F) -> G
where
    G: Buildable,
    G::Builder: Builder<Weight = W>,
    F: Fn(usize, usize) -> W,
{
    let mut b = G::Builder::with_vertices(n);
    for u in 0..n {
        for v in u + 1..n {
            b.add_undirected_edge(u, v, weight(u, v));
        }
    }
    b.into_graph()
}

#[cfg(test)]
mod tests {
    use super::{complete_graph, cycle, path};
    use crate::traits::WeightedGraph;
    use crate::{ListGraph, MatrixGraph};

    #[test]
    fn test_path() {
        let g: MatrixGraph<u32> = path(&[5, 3, 2]);
        assert_eq!(g.num_vertices(), 4);
        assert_eq!(g.num_edges(), 6);
        assert_eq!(g.weight(0, 1), Some(5));
        assert_eq!(g.weight(2, 1), Some(3));
        assert_eq!(g.weight(3, 2), Some(2));
        assert_eq!(g.weight(0, 3), None);
    }

    #[test]
    fn test_cycle() {
        let g: ListGraph<u32> = cycle(&[2, 3, 1, 4, 2]);
        assert_eq!(g.num_vertices(), 5);
        assert_eq!(g.num_edges(), 10);
        assert_eq!(g.weight(4, 0), Some(2));
        assert_eq!(g.weight(0, 4), Some(2));
        assert_eq!(g.weight(2, 3), Some(1));
    }

    #[test]
    fn test_complete() {
        let n = 7;
        let g: MatrixGraph<usize> = complete_graph(n, |u, v| u + v);
        assert_eq!(g.num_edges(), n * (n - 1));
        for u in 0..n {
            assert!(!g.has_edge(u, u));
            for v in 0..n {
                if u != v {
                    assert_eq!(g.weight(u, v), Some(u + v));
                }
            }
        }
    }
}
