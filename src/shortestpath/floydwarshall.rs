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

//! All-Pairs-Shortest-Path algorithm of Floyd and Warshall.
//!
//! The algorithm starts with the matrix of edge weights (zero on the
//! diagonal, `None` for missing edges) and *eliminates* the vertices
//! `k = 0, ..., n-1` one after another. Eliminating `k` shortens each
//! distance `d[i][j]` to `d[i][k] + d[k][j]` if this is smaller. After
//! eliminating `0, ..., k` the entry `d[i][j]` is the length of a
//! shortest path from `i` to `j` with all inner vertices in `{0, ..., k}`.
//!
//! Whenever an entry is shortened the eliminated vertex is stored as
//! *glue* of the pair. The glues describe the shortest paths completely,
//! see [`path::from_glues`].
//!
//! Negative weights are allowed. If the graph contains a cycle of
//! negative length some diagonal entries become negative, see
//! [`AllPairs::has_negative_cycle`].

#![allow(clippy::needless_range_loop)]

use crate::error::{check_index, Error, Result};
use crate::shortestpath::path::{self, GlueMatrix};
use crate::traits::{is_shorter, GraphIterator, Weight, WeightedGraph};

use crate::num::traits::Zero;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

use tracing::{debug, trace};

/// Matrix of distances, `None` meaning that there is no path.
pub type DistMatrix<W> = Vec<Vec<Option<W>>>;

/// Return the initial distance matrix of `g`.
///
/// Entry `(i, j)` is the weight of the edge `(i, j)` or `None` if there
/// is no such edge. The diagonal is zero, even without loops.
pub fn matrix<G>(g: &G) -> DistMatrix<G::Weight>
where
    G: WeightedGraph,
{
    let n = g.num_vertices();
    let mut dist = vec![vec![None; n]; n];
    for u in 0..n {
        let mut it = g.out_iter(u);
        while let Some((v, w)) = it.next(g) {
            dist[u][v] = Some(w);
        }
        dist[u][u] = Some(G::Weight::zero());
    }
    dist
}

/// Eliminate vertex `k` from the distance matrix `dist`.
///
/// Each entry `dist[i][j]` is replaced by `dist[i][k] + dist[k][j]` if
/// both exist and the sum is strictly smaller. If `glues` is given,
/// `glues[i][j]` is set to `k` for each replaced entry.
///
/// Applied to a partially eliminated matrix this *discards* `k`: after
/// the call no shortest path between two other vertices needs `k` as an
/// inner vertex.
///
/// Returns an error if the matrices are not square of the same dimension
/// or `k` is out of range. Returns [`Error::Overflow`] if the length of
/// a shortest path through `k` is not representable and there is no
/// other path. The matrices may be partially updated in this case.
///
/// # Example
///
/// ```
/// use rs_shortestpath::{Buildable, Builder, MatrixGraph};
/// use rs_shortestpath::shortestpath::floydwarshall::{eliminate, matrix};
///
/// let g = MatrixGraph::<u32>::new_with(3, |b| {
///     b.add_edge(0, 1, 2);
///     b.add_edge(1, 2, 3);
///     b.add_edge(0, 2, 9);
/// });
///
/// let mut dist = matrix(&g);
/// eliminate(&mut dist, None, 1).unwrap();
/// assert_eq!(dist[0][2], Some(5));
/// ```
pub fn eliminate<W>(dist: &mut [Vec<Option<W>>], glues: Option<&mut [Vec<Option<usize>>]>, k: usize) -> Result<()>
where
    W: Weight,
{
    let n = dist.len();
    for row in dist.iter() {
        if row.len() != n {
            return Err(Error::SizeMismatch {
                expected: n,
                got: row.len(),
            });
        }
    }
    if let Some(glues) = glues.as_ref() {
        if glues.len() != n {
            return Err(Error::SizeMismatch {
                expected: n,
                got: glues.len(),
            });
        }
        if let Some(row) = glues.iter().find(|row| row.len() != n) {
            return Err(Error::SizeMismatch {
                expected: n,
                got: row.len(),
            });
        }
    }
    check_index(k, n)?;
    eliminate_round(dist, glues, k)
}

/// One elimination round on matrices of matching dimensions.
///
/// Fails if some pair is only connected by paths whose length overflows.
fn eliminate_round<W>(dist: &mut [Vec<Option<W>>], glues: Option<&mut [Vec<Option<usize>>]>, k: usize) -> Result<()>
where
    W: Weight,
{
    let mut overflow = None;
    eliminate_square(dist, glues, k, |i, j| {
        overflow.get_or_insert((i, j));
    })?;
    match overflow {
        Some((from, to)) => Err(Error::Overflow { from, to }),
        None => Ok(()),
    }
}

/// Eliminate `k` from square matrices of matching dimensions.
///
/// Pairs `(i, j)` without distance whose path through `k` is too long
/// for the weight type are passed to `overflow`. A path through `k` that
/// is too short for the weight type is an error immediately.
fn eliminate_square<W, F>(
    dist: &mut [Vec<Option<W>>],
    mut glues: Option<&mut [Vec<Option<usize>>]>,
    k: usize,
    mut overflow: F,
) -> Result<()>
where
    W: Weight,
    F: FnMut(usize, usize),
{
    let n = dist.len();
    for i in 0..n {
        let dist_ik = match dist[i][k] {
            Some(d) => d,
            None => continue,
        };
        for j in 0..n {
            let dist_kj = match dist[k][j] {
                Some(d) => d,
                None => continue,
            };
            match dist_ik.checked_sum(dist_kj) {
                Some(d) => {
                    if is_shorter(d, dist[i][j]) {
                        dist[i][j] = Some(d);
                        if let Some(glues) = glues.as_mut() {
                            glues[i][j] = Some(k);
                        }
                    }
                }
                None if dist_kj < W::zero() => return Err(Error::Overflow { from: i, to: j }),
                None => {
                    if dist[i][j].is_none() {
                        overflow(i, j)
                    }
                }
            }
        }
    }
    trace!(vertex = k, "eliminated");

    Ok(())
}

/// Eliminate all vertices.
///
/// Paths whose length overflows in an intermediate round may be replaced
/// by shorter ones later, so overflows are only reported at the end.
fn eliminate_all<W>(dist: &mut [Vec<Option<W>>], mut glues: Option<&mut [Vec<Option<usize>>]>) -> Result<()>
where
    W: Weight,
{
    let n = dist.len();
    let mut overflow = vec![vec![false; n]; n];
    for k in 0..n {
        eliminate_square(dist, glues.as_deref_mut(), k, |i, j| overflow[i][j] = true)?;
    }
    for i in 0..n {
        for j in 0..n {
            if overflow[i][j] && dist[i][j].is_none() {
                return Err(Error::Overflow { from: i, to: j });
            }
        }
    }
    Ok(())
}

/// Return the matrix of shortest path distances of `g` without glues.
pub fn distances<G>(g: &G) -> Result<DistMatrix<G::Weight>>
where
    G: WeightedGraph,
{
    let mut dist = matrix(g);
    eliminate_all(&mut dist, None)?;
    Ok(dist)
}

/// Solve the All-Pairs-Shortest-Path-Problem on `g`.
///
/// Returns [`Error::Overflow`] if some shortest path length is not
/// representable by the weight type.
///
/// # Example
///
/// ```
/// use rs_shortestpath::MatrixGraph;
/// use rs_shortestpath::classes::path;
/// use rs_shortestpath::shortestpath::floydwarshall;
///
/// let g: MatrixGraph<u32> = path(&[5, 3, 2]);
/// let apsp = floydwarshall::run(&g).unwrap();
///
/// assert_eq!(apsp.distance(0, 3).unwrap(), Some(10));
/// assert_eq!(apsp.glue(0, 3).unwrap(), Some(2));
/// assert_eq!(apsp.path(0, 3).unwrap(), vec![0, 1, 2, 3]);
/// assert_eq!(apsp.path(3, 0).unwrap(), vec![3, 2, 1, 0]);
/// ```
pub fn run<G>(g: &G) -> Result<AllPairs<G::Weight>>
where
    G: WeightedGraph,
{
    let mut apsp = AllPairs::new(g);
    eliminate_all(&mut apsp.dist, Some(&mut apsp.glues[..]))?;
    debug!(
        vertices = apsp.num_vertices(),
        density = apsp.density(),
        "all-pairs shortest paths computed"
    );
    Ok(apsp)
}

/// Return the fraction of off-diagonal entries of `dist` with a distance.
///
/// This is the density of the graph whose edges are the connected pairs.
/// It grows when vertices are eliminated and is 1 after eliminating all
/// vertices of a strongly connected graph. A matrix with less than two
/// rows has density 0.
pub fn density<W>(dist: &[Vec<Option<W>>]) -> f64 {
    let n = dist.len();
    if n < 2 {
        return 0.0;
    }
    let connected = dist
        .iter()
        .enumerate()
        .map(|(i, row)| row.iter().enumerate().filter(|&(j, d)| i != j && d.is_some()).count())
        .sum::<usize>();
    connected as f64 / (n * (n - 1)) as f64
}

/// The distance and glue matrices of the Floyd-Warshall algorithm.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct AllPairs<W> {
    dist: DistMatrix<W>,
    glues: GlueMatrix,
}

impl<W> AllPairs<W>
where
    W: Weight,
{
    /// Return the initial matrices of `g` before any elimination.
    ///
    /// The vertices can then be eliminated one by one with
    /// [`AllPairs::discard`]. Use [`run`] to eliminate all vertices.
    pub fn new<G>(g: &G) -> Self
    where
        G: WeightedGraph<Weight = W>,
    {
        let n = g.num_vertices();
        AllPairs {
            dist: matrix(g),
            glues: vec![vec![None; n]; n],
        }
    }

    /// Eliminate vertex `k`.
    ///
    /// Afterwards `k` is no longer needed as inner vertex of any shortest
    /// path. Eliminating a vertex twice does not change anything unless
    /// there is a negative cycle.
    ///
    /// Returns [`Error::Overflow`] if a pair is only connected through
    /// `k` by a path whose length is not representable. The round is
    /// completed anyway, unless the length is too small.
    pub fn discard(&mut self, k: usize) -> Result<()> {
        check_index(k, self.num_vertices())?;
        eliminate_round(&mut self.dist, Some(&mut self.glues[..]), k)
    }

    /// Return the number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.dist.len()
    }

    /// Return the distance from `s` to `t` or `None` if `t` is
    /// unreachable from `s`.
    pub fn distance(&self, s: usize, t: usize) -> Result<Option<W>> {
        self.check(s, t)?;
        Ok(self.dist[s][t])
    }

    /// Return the glue vertex of the pair `(s, t)`.
    pub fn glue(&self, s: usize, t: usize) -> Result<Option<usize>> {
        self.check(s, t)?;
        Ok(self.glues[s][t])
    }

    /// Return a shortest path from `s` to `t` including both end points.
    ///
    /// The path is empty if `t` is not reachable from `s`.
    pub fn path(&self, s: usize, t: usize) -> Result<Vec<usize>> {
        self.check(s, t)?;
        if self.dist[s][t].is_none() {
            return Ok(vec![]);
        }
        path::from_glues(&self.glues, s, t)
    }

    /// Return `true` if some diagonal entry is negative.
    ///
    /// After eliminating all vertices this is the case iff the graph
    /// contains a cycle of negative length.
    pub fn has_negative_cycle(&self) -> bool {
        (0..self.num_vertices()).any(|i| self.dist[i][i].map_or(false, |d| d < W::zero()))
    }

    /// Return the fraction of connected pairs.
    pub fn density(&self) -> f64 {
        density(&self.dist)
    }

    /// Return the distance matrix.
    pub fn matrix(&self) -> &[Vec<Option<W>>] {
        &self.dist
    }

    /// Return the glue matrix.
    pub fn glues(&self) -> &[Vec<Option<usize>>] {
        &self.glues
    }

    /// Return the distance and glue matrices.
    pub fn into_parts(self) -> (DistMatrix<W>, GlueMatrix) {
        (self.dist, self.glues)
    }

    fn check(&self, s: usize, t: usize) -> Result<()> {
        check_index(s, self.num_vertices())?;
        check_index(t, self.num_vertices())
    }
}

#[cfg(test)]
mod tests {
    use super::{density, distances, eliminate, matrix, run, AllPairs};
    use crate::builder::{Buildable, Builder};
    use crate::classes::{cycle, path};
    use crate::error::Error;
    use crate::shortestpath::path::path_weight;
    use crate::{ListGraph, MatrixGraph};

    /// ```text
    ///       A--(7)--B--(12)--E
    ///       |       |        |
    ///      (1)     (2)      (4)
    ///       |       |        |
    ///       F       H--(3)---G
    ///       |       |
    ///     (22)     (6)
    ///       |       |
    ///       C--(2)--D
    /// ```
    fn letters<G>() -> G
    where
        G: Buildable,
        G::Builder: Builder<Weight = i32>,
    {
        let (a, b, c, d, e, f, g, h) = (0, 1, 2, 3, 4, 5, 6, 7);
        G::new_with(8, |bld| {
            bld.add_undirected_edge(a, b, 7);
            bld.add_undirected_edge(b, e, 12);
            bld.add_undirected_edge(e, g, 4);
            bld.add_undirected_edge(h, g, 3);
            bld.add_undirected_edge(b, h, 2);
            bld.add_undirected_edge(a, f, 1);
            bld.add_undirected_edge(f, c, 22);
            bld.add_undirected_edge(h, d, 6);
            bld.add_undirected_edge(c, d, 2);
        })
    }

    #[test]
    fn test_path_graph() {
        let g: MatrixGraph<u32> = path(&[5, 3, 2]);
        let apsp = run(&g).unwrap();
        assert_eq!(apsp.distance(0, 3).unwrap(), Some(10));
        let glue = apsp.glue(0, 3).unwrap();
        assert!(glue == Some(1) || glue == Some(2));
        assert_eq!(apsp.path(0, 3).unwrap(), vec![0, 1, 2, 3]);
        assert_eq!(apsp.glue(0, 1).unwrap(), None);
        assert_eq!(apsp.path(0, 1).unwrap(), vec![0, 1]);
        assert_eq!(apsp.path(2, 2).unwrap(), vec![2]);
    }

    #[test]
    fn test_letters() {
        let g: MatrixGraph<i32> = letters();
        let apsp = run(&g).unwrap();
        // A -> B -> H -> D -> C
        assert_eq!(apsp.distance(0, 2).unwrap(), Some(17));
        assert_eq!(apsp.path(0, 2).unwrap(), vec![0, 1, 7, 3, 2]);
        // F -> A -> B -> H -> G -> E
        assert_eq!(apsp.distance(5, 4).unwrap(), Some(17));
        assert_eq!(apsp.path(5, 4).unwrap(), vec![5, 0, 1, 7, 6, 4]);
        assert!((apsp.density() - 1.0).abs() < 1e-12);
        assert!(!apsp.has_negative_cycle());

        let h: ListGraph<i32> = letters();
        assert_eq!(matrix(&h), matrix(&g));
        assert_eq!(run(&h).unwrap(), apsp);
    }

    #[test]
    fn test_discard() {
        let g: MatrixGraph<i32> = letters();
        let mut apsp = AllPairs::new(&g);
        // 9 undirected edges
        assert!((apsp.density() - 18.0 / 56.0).abs() < 1e-12);

        // G glues E and H
        apsp.discard(6).unwrap();
        assert_eq!(apsp.distance(4, 7).unwrap(), Some(7));
        assert_eq!(apsp.glue(4, 7).unwrap(), Some(6));
        let d1 = apsp.density();
        assert!(d1 > 18.0 / 56.0);

        // H glues B, D, E (and G)
        apsp.discard(7).unwrap();
        assert_eq!(apsp.distance(1, 4).unwrap(), Some(9));
        assert_eq!(apsp.path(1, 4).unwrap(), vec![1, 7, 6, 4]);
        assert_eq!(apsp.distance(4, 3).unwrap(), Some(13));
        assert!(apsp.density() > d1);

        // A and F reach E only through B, which is not discarded yet
        assert_eq!(apsp.distance(0, 4).unwrap(), None);
        assert_eq!(apsp.distance(5, 4).unwrap(), None);
        assert!(apsp.path(5, 4).unwrap().is_empty());

        assert_eq!(
            apsp.discard(8),
            Err(Error::VertexOutOfRange {
                vertex: 8,
                num_vertices: 8
            })
        );
    }

    #[test]
    fn test_isolated() {
        let g = MatrixGraph::<u32>::new_with(4, |b| {
            b.add_undirected_edge(0, 1, 1);
            b.add_edge(1, 2, 1);
        });
        let apsp = run(&g).unwrap();
        for i in 0..3 {
            assert_eq!(apsp.distance(i, 3).unwrap(), None);
            assert_eq!(apsp.distance(3, i).unwrap(), None);
            assert!(apsp.path(i, 3).unwrap().is_empty());
        }
        assert_eq!(apsp.distance(3, 3).unwrap(), Some(0));
        assert_eq!(apsp.distance(2, 0).unwrap(), None);
        assert_eq!(apsp.matrix()[0][3], None);
    }

    #[test]
    fn test_negative_cycle() {
        let g = MatrixGraph::<i32>::new_with(3, |b| {
            b.add_edge(0, 1, 1);
            b.add_edge(1, 2, -3);
            b.add_edge(2, 0, 1);
        });
        let apsp = run(&g).unwrap();
        assert!(apsp.has_negative_cycle());

        let h = MatrixGraph::<i32>::new_with(3, |b| {
            b.add_edge(0, 1, 1);
            b.add_edge(1, 2, -3);
            b.add_edge(2, 0, 2);
        });
        let apsp = run(&h).unwrap();
        assert!(!apsp.has_negative_cycle());
        assert_eq!(apsp.distance(0, 2).unwrap(), Some(-2));
        let p = apsp.path(2, 1).unwrap();
        assert_eq!(p, vec![2, 0, 1]);
        assert_eq!(path_weight(&h, &p), Some(3));
    }

    #[test]
    fn test_idempotent() {
        let g: MatrixGraph<u32> = cycle(&[4, 1, 7, 3, 3, 9, 2]);
        let first = run(&g).unwrap();
        let second = run(&g).unwrap();
        assert_eq!(first, second);
        assert_eq!(distances(&g).unwrap(), first.matrix());

        // a second pass of eliminations changes nothing
        let (mut dist, mut glues) = first.clone().into_parts();
        for k in 0..dist.len() {
            eliminate(&mut dist, Some(&mut glues[..]), k).unwrap();
        }
        assert_eq!(dist, first.matrix());
        assert_eq!(glues, first.glues());
    }

    #[test]
    fn test_large_weights() {
        // lengths close to the maximum of the weight type are valid
        let big = u8::MAX / 2 + 10;
        let g = MatrixGraph::<u8>::new_with(4, |b| {
            b.add_edge(0, 1, big);
            b.add_edge(1, 2, 100);
            b.add_edge(3, 2, u8::MAX);
        });
        let apsp = run(&g).unwrap();
        assert_eq!(apsp.distance(0, 1).unwrap(), Some(big));
        assert_eq!(apsp.distance(0, 2).unwrap(), Some(big + 100));
        assert_eq!(apsp.path(0, 2).unwrap(), vec![0, 1, 2]);
        assert_eq!(apsp.distance(3, 2).unwrap(), Some(u8::MAX));
        assert_eq!(apsp.path(3, 2).unwrap(), vec![3, 2]);
    }

    #[test]
    fn test_overflow() {
        let g = MatrixGraph::<u8>::new_with(3, |b| {
            b.add_edge(0, 1, 200);
            b.add_edge(1, 2, 100);
        });
        assert_eq!(run(&g), Err(Error::Overflow { from: 0, to: 2 }));
        assert_eq!(distances(&g), Err(Error::Overflow { from: 0, to: 2 }));

        // negative lengths can overflow, too
        let h = MatrixGraph::<i8>::new_with(3, |b| {
            b.add_edge(0, 1, -100);
            b.add_edge(1, 2, -100);
        });
        assert_eq!(run(&h), Err(Error::Overflow { from: 0, to: 2 }));
    }

    #[test]
    fn test_overflow_replaced() {
        // 0 -> 1 -> 3 overflows, 0 -> 2 -> 3 does not
        let g = MatrixGraph::<u8>::new_with(4, |b| {
            b.add_edge(0, 1, 200);
            b.add_edge(1, 3, 100);
            b.add_edge(0, 2, 1);
            b.add_edge(2, 3, 1);
        });
        let apsp = run(&g).unwrap();
        assert_eq!(apsp.distance(0, 3).unwrap(), Some(2));
        assert_eq!(apsp.path(0, 3).unwrap(), vec![0, 2, 3]);

        // discarding only 1 connects 0 and 3 by an overflowing path
        let mut apsp = AllPairs::new(&g);
        assert_eq!(apsp.discard(1), Err(Error::Overflow { from: 0, to: 3 }));
        assert_eq!(apsp.distance(0, 3).unwrap(), None);
        apsp.discard(2).unwrap();
        assert_eq!(apsp.distance(0, 3).unwrap(), Some(2));
    }

    #[test]
    fn test_eliminate_errors() {
        let mut dist = vec![vec![Some(0u32), Some(1)], vec![Some(1)]];
        assert_eq!(
            eliminate(&mut dist, None, 0),
            Err(Error::SizeMismatch { expected: 2, got: 1 })
        );

        let g: MatrixGraph<u32> = path(&[1, 1]);
        let mut dist = matrix(&g);
        let mut glues = vec![vec![None; 3]; 2];
        assert_eq!(
            eliminate(&mut dist, Some(&mut glues[..]), 0),
            Err(Error::SizeMismatch { expected: 3, got: 2 })
        );
        assert_eq!(
            eliminate(&mut dist, None, 3),
            Err(Error::VertexOutOfRange {
                vertex: 3,
                num_vertices: 3
            })
        );
    }

    #[test]
    fn test_density() {
        assert_eq!(density::<f64>(&[]), 0.0);
        assert_eq!(density(&[vec![Some(0.0), Some(1.0)], vec![None, Some(0.0)]]), 0.5);
    }

    #[cfg(feature = "serialize")]
    mod serialize {
        use super::super::{run, AllPairs};
        use crate::classes::path;
        use crate::MatrixGraph;
        use serde_json;

        #[test]
        fn test_serde() {
            let g: MatrixGraph<u32> = path(&[5, 3, 2]);
            let apsp = run(&g).unwrap();

            let serialized = serde_json::to_string(&apsp).unwrap();
            let restored: AllPairs<u32> = serde_json::from_str(&serialized).unwrap();

            assert_eq!(apsp, restored);
        }
    }
}
