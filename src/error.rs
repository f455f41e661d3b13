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

//! Errors reported by the shortest path algorithms.
//!
//! An unreachable vertex is *not* an error. It is represented by a
//! missing distance and an empty path.

use std::error;
use std::fmt;

/// Error when calling a shortest path operation with invalid arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A vertex index is not in `0..num_vertices`.
    VertexOutOfRange { vertex: usize, num_vertices: usize },
    /// A distance or glue matrix does not have the expected dimension.
    SizeMismatch { expected: usize, got: usize },
    /// The glue chain passes a vertex on a negative cycle.
    NegativeCycle { vertex: usize },
    /// The length of a shortest path from `from` to `to` does not fit
    /// into the weight type.
    Overflow { from: usize, to: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> std::result::Result<(), fmt::Error> {
        use self::Error::*;
        match self {
            VertexOutOfRange { vertex, num_vertices } => write!(
                fmt,
                "Vertex {} out of range (graph has {} vertices)",
                vertex, num_vertices
            ),
            SizeMismatch { expected, got } => {
                write!(fmt, "Matrix dimension mismatch (expected: {}, got: {})", expected, got)
            }
            NegativeCycle { vertex } => write!(fmt, "Vertex {} lies on a negative cycle", vertex),
            Overflow { from, to } => write!(fmt, "Length of shortest path from {} to {} overflows", from, to),
        }
    }
}

impl error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

/// Return an error if `u` is not a vertex index for `n` vertices.
pub(crate) fn check_index(u: usize, n: usize) -> Result<()> {
    if u < n {
        Ok(())
    } else {
        Err(Error::VertexOutOfRange {
            vertex: u,
            num_vertices: n,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{check_index, Error};

    #[test]
    fn test_check_index() {
        assert_eq!(check_index(0, 1), Ok(()));
        assert_eq!(
            check_index(3, 3),
            Err(Error::VertexOutOfRange {
                vertex: 3,
                num_vertices: 3
            })
        );
    }

    #[test]
    fn test_display() {
        let err = Error::VertexOutOfRange {
            vertex: 7,
            num_vertices: 5,
        };
        assert_eq!(err.to_string(), "Vertex 7 out of range (graph has 5 vertices)");
        assert_eq!(
            Error::SizeMismatch { expected: 4, got: 3 }.to_string(),
            "Matrix dimension mismatch (expected: 4, got: 3)"
        );
        assert_eq!(
            Error::Overflow { from: 0, to: 2 }.to_string(),
            "Length of shortest path from 0 to 2 overflows"
        );
    }
}
