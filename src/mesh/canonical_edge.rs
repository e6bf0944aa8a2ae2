// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::fmt;

/// An undirected edge stored with its smaller vertex index first.
///
/// Field order gives the derived ordering: by `v1`, then by `v2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    pub v1: usize,
    pub v2: usize,
}

impl Edge {
    pub fn new(a: usize, b: usize) -> Self {
        if a < b {
            Self { v1: a, v2: b }
        } else {
            Self { v1: b, v2: a }
        }
    }

    pub fn vertices(&self) -> [usize; 2] {
        [self.v1, self.v2]
    }

    pub fn contains(&self, v: usize) -> bool {
        self.v1 == v || self.v2 == v
    }

    /// The endpoint opposite to `v`, if `v` is an endpoint.
    pub fn other(&self, v: usize) -> Option<usize> {
        if v == self.v1 {
            Some(self.v2)
        } else if v == self.v2 {
            Some(self.v1)
        } else {
            None
        }
    }

    /// Incidence slot of a face traversing this edge from `from`:
    /// 0 when the face walks `v1 -> v2` (face on the left), 1 otherwise.
    #[inline(always)]
    pub fn slot_for(&self, from: usize) -> usize {
        if from == self.v1 { 0 } else { 1 }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.v1, self.v2)
    }
}

impl From<(usize, usize)> for Edge {
    fn from((a, b): (usize, usize)) -> Self {
        Edge::new(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order() {
        assert_eq!(Edge::new(4, 1), Edge { v1: 1, v2: 4 });
        assert_eq!(Edge::new(1, 4), Edge::new(4, 1));
        assert_eq!(Edge::from((7, 3)).vertices(), [3, 7]);
    }

    #[test]
    fn test_total_order() {
        let mut edges = vec![Edge::new(2, 3), Edge::new(0, 5), Edge::new(0, 1), Edge::new(1, 2)];
        edges.sort();
        assert_eq!(
            edges,
            vec![Edge::new(0, 1), Edge::new(0, 5), Edge::new(1, 2), Edge::new(2, 3)]
        );
    }

    #[test]
    fn test_other_and_slot() {
        let e = Edge::new(3, 8);
        assert_eq!(e.other(3), Some(8));
        assert_eq!(e.other(8), Some(3));
        assert_eq!(e.other(5), None);
        assert_eq!(e.slot_for(3), 0);
        assert_eq!(e.slot_for(8), 1);
    }
}
