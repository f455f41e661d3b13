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

//! Binary heap implementation

use crate::collections::PriQueue;

/// Simple binary min-heap on values that are only partially ordered.
///
/// Unlike `std::collections::BinaryHeap` the values need not implement
/// `Ord`, so floating point distances can be used directly. Incomparable
/// values (e.g. `NaN`) are treated as "not smaller".
pub struct BinHeap<K, V> {
    /// The heap elements, the smallest value at position 0.
    heap: Vec<(K, V)>,
}

impl<K, V> BinHeap<K, V> {
    pub fn new() -> Self {
        Default::default()
    }
}

impl<K, V> Default for BinHeap<K, V> {
    fn default() -> Self {
        BinHeap { heap: vec![] }
    }
}

impl<K, V> PriQueue<K, V> for BinHeap<K, V>
where
    V: PartialOrd,
{
    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn clear(&mut self) {
        self.heap.clear();
    }

    fn push(&mut self, key: K, value: V) {
        self.heap.push((key, value));
        self.upheap(self.heap.len() - 1);
    }

    fn pop_min(&mut self) -> Option<(K, V)> {
        if self.heap.is_empty() {
            return None;
        }
        // the last element is moved to the root
        let min = self.heap.swap_remove(0);
        if !self.heap.is_empty() {
            self.downheap(0);
        }
        Some(min)
    }
}

impl<K, V> BinHeap<K, V>
where
    V: PartialOrd,
{
    /// Move the element at `pos` up in the heap until its parent does not
    /// have a larger value or the root is reached.
    fn upheap(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !(self.heap[pos].1 < self.heap[parent].1) {
                break;
            }
            self.heap.swap(pos, parent);
            pos = parent;
        }
    }

    /// Move the element at `pos` down in the heap until no child has a
    /// smaller value.
    fn downheap(&mut self, mut pos: usize) {
        let n = self.heap.len();
        loop {
            let left = 2 * pos + 1;
            let right = left + 1;
            let next = if left >= n {
                break;
            } else if right >= n || self.heap[left].1 < self.heap[right].1 {
                left
            } else {
                right
            };

            if !(self.heap[next].1 < self.heap[pos].1) {
                break;
            }
            self.heap.swap(pos, next);
            pos = next;
        }
    }
}
