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

#![forbid(unsafe_code)]

//! Single-source and all-pairs shortest paths on weighted graphs.
//!
//! The algorithms work on any graph implementing
//! [`WeightedGraph`](traits::WeightedGraph), i.e. a fixed set of vertices
//! `0..n` with an optional weight for each ordered pair of vertices. Two
//! implementations are provided: [`MatrixGraph`] and [`ListGraph`].
//!
//! - [`shortestpath::dijkstra`] computes the shortest paths from one
//!   source vertex (non-negative weights).
//! - [`shortestpath::floydwarshall`] computes the shortest paths between
//!   all pairs of vertices.
//! - [`shortestpath::path`] reconstructs the paths from the results.
//!
//! The library emits diagnostic events with `tracing` but never installs
//! a subscriber.

mod num {
    pub use num_traits as traits;
}

// # Data structures

pub mod error;
pub use self::error::{Error, Result};

pub mod traits;
pub use self::traits::{Weight, WeightedGraph};

pub mod builder;
pub use self::builder::{Buildable, Builder};

pub mod matrixgraph;
pub use self::matrixgraph::MatrixGraph;

pub mod listgraph;
pub use self::listgraph::ListGraph;

/// Graph classes
pub mod classes;

pub mod collections;

// # Algorithms

pub mod shortestpath;
