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

use std::collections::{BTreeMap, BTreeSet};

use ahash::AHashMap;
use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::{
    error::{MeshError, MeshResult},
    mesh::canonical_edge::Edge,
};

/// The distinct undirected edges of a face table, in ascending order, with a
/// reverse lookup from edge to its position.
#[derive(Clone, Debug, Default)]
pub struct EdgeIndex {
    edges: Vec<Edge>,
    positions: AHashMap<Edge, usize>,
}

// `positions` is a function of `edges`.
impl PartialEq for EdgeIndex {
    fn eq(&self, other: &Self) -> bool {
        self.edges == other.edges
    }
}

impl EdgeIndex {
    pub fn build(faces: &[[usize; 3]]) -> Self {
        // for each lower vertex, the higher vertices it is joined to
        let mut adjacency: BTreeMap<usize, BTreeSet<usize>> = BTreeMap::new();
        for face in faces {
            for i in 0..3 {
                let e = Edge::new(face[i], face[(i + 1) % 3]);
                adjacency.entry(e.v1).or_default().insert(e.v2);
            }
        }

        let count = adjacency.values().map(BTreeSet::len).sum();
        let mut edges = Vec::with_capacity(count);
        let mut positions = AHashMap::with_capacity(count);
        for (&v1, uppers) in &adjacency {
            for &v2 in uppers {
                let edge = Edge { v1, v2 };
                positions.insert(edge, edges.len());
                edges.push(edge);
            }
        }

        debug!(faces = faces.len(), edges = edges.len(), "Built edge index");
        Self { edges, positions }
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<Edge> {
        self.edges.get(i).copied()
    }

    /// Position of `edge` in the sequence.
    pub fn position(&self, edge: &Edge) -> Option<usize> {
        self.positions.get(edge).copied()
    }

    pub fn as_slice(&self) -> &[Edge] {
        &self.edges
    }

    pub fn iter(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter()
    }
}

/// For each edge of an [`EdgeIndex`], the face on each side.
///
/// Slot 0 holds the face that walks the edge from its smaller to its larger
/// vertex, slot 1 the face walking it the other way.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EdgeFaces {
    slots: Vec<[Option<usize>; 2]>,
}

impl EdgeFaces {
    /// Fails on the first edge side claimed by two faces; nothing partial is
    /// returned.
    pub fn build(faces: &[[usize; 3]], index: &EdgeIndex) -> MeshResult<Self> {
        let mut slots = vec![[None, None]; index.len()];

        for (face_idx, face) in faces.iter().enumerate() {
            for i in 0..3 {
                let from = face[i];
                let edge = Edge::new(from, face[(i + 1) % 3]);
                let edge_idx = index
                    .position(&edge)
                    .ok_or(MeshError::MissingEdge { edge })?;

                let slot = edge.slot_for(from);
                match slots[edge_idx][slot] {
                    Some(first) => {
                        warn!(%edge, slot, first, second = face_idx, "Non-manifold edge");
                        return Err(MeshError::NonManifoldEdge {
                            edge,
                            slot,
                            first,
                            second: face_idx,
                        });
                    }
                    None => slots[edge_idx][slot] = Some(face_idx),
                }
            }
        }

        debug!(edges = slots.len(), "Built edge-face incidence");
        Ok(Self { slots })
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Both sides of edge `edge_idx`, `None` where no face lies.
    pub fn slots(&self, edge_idx: usize) -> Option<[Option<usize>; 2]> {
        self.slots.get(edge_idx).copied()
    }

    /// Occupied sides of edge `edge_idx`, slot 0 first.
    pub fn faces(&self, edge_idx: usize) -> SmallVec<[usize; 2]> {
        self.slots
            .get(edge_idx)
            .map(|s| s.iter().flatten().copied().collect())
            .unwrap_or_default()
    }

    /// Positions of the edges with exactly one incident face.
    pub fn boundary_edges(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, s)| s[0].is_some() != s[1].is_some())
            .map(|(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TETRA: [[usize; 3]; 4] = [[0, 1, 2], [0, 2, 3], [0, 3, 1], [3, 2, 1]];

    #[test]
    fn test_edge_index_tetrahedron() {
        let index = EdgeIndex::build(&TETRA);
        assert_eq!(index.len(), 6);
        assert_eq!(
            index.as_slice(),
            &[
                Edge::new(0, 1),
                Edge::new(0, 2),
                Edge::new(0, 3),
                Edge::new(1, 2),
                Edge::new(1, 3),
                Edge::new(2, 3),
            ]
        );
        for (i, e) in index.iter().enumerate() {
            assert_eq!(index.position(e), Some(i));
        }
        assert_eq!(index.position(&Edge::new(0, 9)), None);
    }

    #[test]
    fn test_edge_index_is_deterministic() {
        assert_eq!(EdgeIndex::build(&TETRA), EdgeIndex::build(&TETRA));
    }

    #[test]
    fn test_incidence_tetrahedron() {
        let index = EdgeIndex::build(&TETRA);
        let inc = EdgeFaces::build(&TETRA, &index).unwrap();
        // face 0 walks 0 -> 1, face 2 walks 1 -> 0
        let e01 = index.position(&Edge::new(0, 1)).unwrap();
        assert_eq!(inc.slots(e01), Some([Some(0), Some(2)]));
        for i in 0..index.len() {
            assert_eq!(inc.faces(i).len(), 2);
        }
        assert_eq!(inc.boundary_edges().count(), 0);
    }

    #[test]
    fn test_incidence_open_strip() {
        let faces = [[0, 1, 2], [0, 2, 3]];
        let index = EdgeIndex::build(&faces);
        let inc = EdgeFaces::build(&faces, &index).unwrap();
        assert_eq!(index.len(), 5);
        assert_eq!(inc.boundary_edges().count(), 4);
        let diag = index.position(&Edge::new(0, 2)).unwrap();
        assert_eq!(inc.faces(diag).as_slice(), &[1, 0]);
    }

    #[test]
    fn test_incidence_rejects_third_face() {
        // faces 0 and 2 both walk 0 -> 1
        let faces = [[0, 1, 2], [1, 0, 3], [0, 1, 4]];
        let index = EdgeIndex::build(&faces);
        match EdgeFaces::build(&faces, &index) {
            Err(MeshError::NonManifoldEdge { edge, slot, first, second }) => {
                assert_eq!(edge, Edge::new(0, 1));
                assert_eq!(slot, 0);
                assert_eq!((first, second), (0, 2));
            }
            other => panic!("expected a non-manifold error, got {:?}", other),
        }
    }

    #[test]
    fn test_incidence_with_missing_edge() {
        let index = EdgeIndex::build(&[[0, 1, 2]]);
        let err = EdgeFaces::build(&[[0, 1, 3]], &index).unwrap_err();
        assert!(matches!(err, MeshError::MissingEdge { .. }));
    }
}
