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

use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
    sync::atomic::{AtomicU64, Ordering as AtomicOrdering},
};

use smallvec::SmallVec;

use crate::{
    error::MeshResult,
    geometry::{point::Point3, segment::Segment3, triangle::Triangle3, vector::Vector3},
    mesh::{canonical_edge::Edge, core::TriMesh},
    numeric::scalar::Scalar,
};

static NEXT_MESH_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of one mesh instance. Never reused within a process.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MeshId(u64);

impl MeshId {
    pub(crate) fn fresh() -> Self {
        MeshId(NEXT_MESH_ID.fetch_add(1, AtomicOrdering::Relaxed))
    }
}

/// Handles compare and hash by (owner, key); the generation they were minted
/// at only takes part in validity checks.
macro_rules! impl_handle_identity {
    ($handle:ident, $key:ident) => {
        impl PartialEq for $handle {
            fn eq(&self, other: &Self) -> bool {
                self.mesh == other.mesh && self.$key == other.$key
            }
        }

        impl Eq for $handle {}

        impl Hash for $handle {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.mesh.hash(state);
                self.$key.hash(state);
            }
        }

        impl PartialOrd for $handle {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $handle {
            fn cmp(&self, other: &Self) -> Ordering {
                (self.mesh, self.$key).cmp(&(other.mesh, other.$key))
            }
        }

        impl $handle {
            /// The mesh this handle was created by.
            pub fn mesh_id(&self) -> MeshId {
                self.mesh
            }

            pub fn generation(&self) -> u64 {
                self.generation
            }

            pub fn belongs_to<T: Scalar>(&self, mesh: &TriMesh<T>) -> bool {
                self.mesh == mesh.id()
            }
        }
    };
}

#[derive(Clone, Copy, Debug)]
pub struct VertexHandle {
    pub(crate) mesh: MeshId,
    pub(crate) index: usize,
    pub(crate) generation: u64,
}

#[derive(Clone, Copy, Debug)]
pub struct FaceHandle {
    pub(crate) mesh: MeshId,
    pub(crate) index: usize,
    pub(crate) generation: u64,
}

/// An edge is identified by its canonical vertex pair, not by its position
/// in the edge sequence.
#[derive(Clone, Copy, Debug)]
pub struct EdgeHandle {
    pub(crate) mesh: MeshId,
    pub(crate) edge: Edge,
    pub(crate) generation: u64,
}

impl_handle_identity!(VertexHandle, index);
impl_handle_identity!(FaceHandle, index);
impl_handle_identity!(EdgeHandle, edge);

impl VertexHandle {
    /// Index at creation time. Use [`TriMesh::index_of_vertex`] for a
    /// checked lookup.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn position<T: Scalar>(&self, mesh: &TriMesh<T>) -> MeshResult<Point3<T>> {
        mesh.vertex_position(self)
    }

    pub fn neighbors<T: Scalar>(&self, mesh: &TriMesh<T>) -> MeshResult<Vec<VertexHandle>> {
        mesh.vertex_neighbors(self)
    }

    pub fn faces<T: Scalar>(&self, mesh: &TriMesh<T>) -> MeshResult<Vec<FaceHandle>> {
        mesh.vertex_faces(self)
    }

    pub fn edges<T: Scalar>(&self, mesh: &TriMesh<T>) -> MeshResult<Vec<EdgeHandle>> {
        mesh.vertex_edges(self)
    }

    pub fn normal<T: Scalar>(&self, mesh: &TriMesh<T>) -> MeshResult<Vector3<T>> {
        mesh.vertex_normal(self)
    }
}

impl FaceHandle {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn vertices<T: Scalar>(&self, mesh: &TriMesh<T>) -> MeshResult<[VertexHandle; 3]> {
        mesh.face_vertices(self)
    }

    pub fn edges<T: Scalar>(&self, mesh: &TriMesh<T>) -> MeshResult<[EdgeHandle; 3]> {
        mesh.face_edges(self)
    }

    pub fn normal<T: Scalar>(&self, mesh: &TriMesh<T>) -> MeshResult<Vector3<T>> {
        mesh.face_normal(self)
    }

    pub fn triangle<T: Scalar>(&self, mesh: &TriMesh<T>) -> MeshResult<Triangle3<T>> {
        mesh.face_triangle(self)
    }
}

impl EdgeHandle {
    pub fn edge(&self) -> Edge {
        self.edge
    }

    /// Smaller endpoint index.
    pub fn source(&self) -> usize {
        self.edge.v1
    }

    /// Larger endpoint index.
    pub fn target(&self) -> usize {
        self.edge.v2
    }

    pub fn vertices<T: Scalar>(&self, mesh: &TriMesh<T>) -> MeshResult<[VertexHandle; 2]> {
        mesh.edge_vertices(self)
    }

    pub fn faces<T: Scalar>(&self, mesh: &TriMesh<T>) -> MeshResult<SmallVec<[FaceHandle; 2]>> {
        mesh.edge_faces(self)
    }

    pub fn segment<T: Scalar>(&self, mesh: &TriMesh<T>) -> MeshResult<Segment3<T>> {
        mesh.edge_segment(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_identity_ignores_generation() {
        let id = MeshId::fresh();
        let a = VertexHandle { mesh: id, index: 2, generation: 0 };
        let b = VertexHandle { mesh: id, index: 2, generation: 5 };
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
    }

    #[test]
    fn test_distinct_owners_never_equal() {
        let a = FaceHandle { mesh: MeshId::fresh(), index: 0, generation: 0 };
        let b = FaceHandle { mesh: MeshId::fresh(), index: 0, generation: 0 };
        assert_ne!(a, b);
    }

    #[test]
    fn test_edge_handle_identity() {
        let id = MeshId::fresh();
        let a = EdgeHandle { mesh: id, edge: Edge::new(1, 3), generation: 0 };
        let b = EdgeHandle { mesh: id, edge: Edge::new(3, 1), generation: 0 };
        assert_eq!(a, b);
        assert_eq!((a.source(), a.target()), (1, 3));
    }
}
