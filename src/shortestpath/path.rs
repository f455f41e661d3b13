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

//! Reconstruction of shortest paths.
//!
//! A path is returned as sequence of vertices from the source to the
//! destination, both inclusive. An empty sequence means that there is no
//! path.
//!
//! Single-source results are reconstructed from a predecessor vector
//! ([`from_predecessors`]) or, more slowly, from the distances alone
//! ([`from_distances`]). All-pairs results are reconstructed from a glue
//! matrix ([`from_glues`]).

use crate::error::{check_index, Error, Result};
use crate::num::traits::Zero;
use crate::traits::{Weight, WeightedGraph};

use std::collections::VecDeque;

/// Matrix of glue vertices.
///
/// `glues[i][j]` is the intermediate vertex of the best known path from
/// `i` to `j` or `None` if `i` and `j` are linked directly.
pub type GlueMatrix = Vec<Vec<Option<usize>>>;

/// Return the path from `src` to `dst` by following the predecessors.
///
/// `preds[v]` is the vertex preceding `v` on a shortest path from `src`
/// or `None` if `v` is `src` or unreachable.
///
/// # Example
///
/// ```
/// use rs_shortestpath::shortestpath::path::from_predecessors;
///
/// let preds = vec![None, Some(0), Some(1), None];
/// assert_eq!(from_predecessors(&preds, 0, 2).unwrap(), vec![0, 1, 2]);
/// assert!(from_predecessors(&preds, 0, 3).unwrap().is_empty());
/// ```
pub fn from_predecessors(preds: &[Option<usize>], src: usize, dst: usize) -> Result<Vec<usize>> {
    let n = preds.len();
    check_index(src, n)?;
    check_index(dst, n)?;

    let mut path = vec![dst];
    let mut cur = dst;
    while cur != src {
        match preds[cur] {
            // the chain cannot be longer than the number of vertices
            Some(u) if path.len() < n => {
                path.push(u);
                cur = u;
            }
            _ => return Ok(vec![]),
        }
    }
    path.reverse();
    Ok(path)
}

/// Return a shortest path from `src` to `dst` using only the distances.
///
/// `dists[v]` must be the shortest path distance from `src` to `v` in
/// `g` (`None` if `v` is unreachable). The path is built backwards from
/// `dst` along edges `(u, v)` with `dists[u] + w(u,v) == dists[v]`. This
/// is slower than [`from_predecessors`] and may return a different path
/// if there are several shortest paths.
pub fn from_distances<G>(g: &G, dists: &[Option<G::Weight>], src: usize, dst: usize) -> Result<Vec<usize>>
where
    G: WeightedGraph,
{
    let n = g.num_vertices();
    if dists.len() != n {
        return Err(Error::SizeMismatch {
            expected: n,
            got: dists.len(),
        });
    }
    check_index(src, n)?;
    check_index(dst, n)?;

    if dists[dst].is_none() {
        return Ok(vec![]);
    }

    // succ[u] is the vertex following u on the path to dst
    let mut succ: Vec<Option<usize>> = vec![None; n];
    let mut seen = vec![false; n];
    let mut queue = VecDeque::new();
    seen[dst] = true;
    queue.push_back(dst);
    while !seen[src] {
        let cur = match queue.pop_front() {
            Some(cur) => cur,
            None => return Ok(vec![]),
        };
        for u in 0..n {
            if seen[u] {
                continue;
            }
            let du = match dists[u] {
                Some(du) => du,
                None => continue,
            };
            if let Some(w) = g.weight(u, cur) {
                if du.checked_sum(w) == dists[cur] {
                    seen[u] = true;
                    succ[u] = Some(cur);
                    queue.push_back(u);
                }
            }
        }
    }

    let mut path = vec![src];
    let mut cur = src;
    while let Some(v) = succ[cur] {
        path.push(v);
        cur = v;
    }
    Ok(path)
}

/// Append the interior vertices of the path from `src` to `dst` to `path`.
///
/// This is the recursive formulation of [`glue_exclusive`]: the path from
/// `src` to `dst` via glue `k` consists of the path from `src` to `k`,
/// the vertex `k` and the path from `k` to `dst`. The recursion depth is
/// the number of interior vertices.
pub fn glue_exclusive_recursive(glues: &[Vec<Option<usize>>], src: usize, dst: usize, path: &mut Vec<usize>) -> Result<()> {
    let n = glues.len();
    check_index(src, n)?;
    check_index(dst, n)?;
    glue_rec(glues, src, dst, path, 0)
}

fn glue_rec(glues: &[Vec<Option<usize>>], src: usize, dst: usize, path: &mut Vec<usize>, depth: usize) -> Result<()> {
    if let Some(k) = glues[src][dst] {
        if depth >= glues.len() {
            return Err(Error::NegativeCycle { vertex: src });
        }
        glue_rec(glues, src, k, path, depth + 1)?;
        path.push(k);
        glue_rec(glues, k, dst, path, depth + 1)?;
    }
    Ok(())
}

enum Step {
    /// Expand the segment between two vertices.
    Segment(usize, usize),
    /// Emit a glue vertex.
    Emit(usize),
}

/// Return the interior vertices of the path from `src` to `dst`.
///
/// The vertices `src` and `dst` themselves are not contained. The result
/// is the same as for [`glue_exclusive_recursive`] but uses an explicit
/// stack instead of recursion.
pub fn glue_exclusive(glues: &[Vec<Option<usize>>], src: usize, dst: usize) -> Result<Vec<usize>> {
    let n = glues.len();
    check_index(src, n)?;
    check_index(dst, n)?;

    let mut path = vec![];
    let mut stack = vec![Step::Segment(src, dst)];
    while let Some(step) = stack.pop() {
        match step {
            Step::Segment(from, to) => {
                if let Some(k) = glues[from][to] {
                    // a simple path cannot produce a deeper stack
                    if stack.len() > 3 * n {
                        return Err(Error::NegativeCycle { vertex: from });
                    }
                    stack.push(Step::Segment(k, to));
                    stack.push(Step::Emit(k));
                    stack.push(Step::Segment(from, k));
                }
            }
            Step::Emit(k) => {
                if path.len() >= n {
                    return Err(Error::NegativeCycle { vertex: k });
                }
                path.push(k)
            }
        }
    }
    Ok(path)
}

/// Return the path from `src` to `dst` including both end points.
///
/// The glue matrix does not encode reachability, the caller must check
/// that the distance from `src` to `dst` is finite.
///
/// # Example
///
/// ```
/// use rs_shortestpath::shortestpath::path::from_glues;
///
/// // path 0 - 1 - 2 - 3
/// let mut glues = vec![vec![None; 4]; 4];
/// glues[0][2] = Some(1);
/// glues[1][3] = Some(2);
/// glues[0][3] = Some(2);
///
/// assert_eq!(from_glues(&glues, 0, 3).unwrap(), vec![0, 1, 2, 3]);
/// assert_eq!(from_glues(&glues, 2, 2).unwrap(), vec![2]);
/// ```
pub fn from_glues(glues: &[Vec<Option<usize>>], src: usize, dst: usize) -> Result<Vec<usize>> {
    if src == dst {
        check_index(src, glues.len())?;
        return Ok(vec![src]);
    }
    let mut path = vec![src];
    path.extend(glue_exclusive(glues, src, dst)?);
    path.push(dst);
    Ok(path)
}

/// Return the total weight of the edges along `path` in `g`.
///
/// Returns `None` if the path is empty, uses an edge that is not in
/// the graph or its weight is not representable. A path consisting of a
/// single vertex has weight zero.
pub fn path_weight<G>(g: &G, path: &[usize]) -> Option<G::Weight>
where
    G: WeightedGraph,
{
    if path.is_empty() {
        return None;
    }
    let mut total = G::Weight::zero();
    for uv in path.windows(2) {
        total = total.checked_sum(g.weight(uv[0], uv[1])?)?;
    }
    Some(total)
}
