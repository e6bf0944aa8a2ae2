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

use std::sync::Arc;

use tracing::{trace, warn};

use crate::{
    error::{ElementKind, MeshError, MeshResult},
    geometry::point::Point3,
    mesh::{
        cache::DerivedCache,
        canonical_edge::Edge,
        handles::{EdgeHandle, FaceHandle, MeshId, VertexHandle},
        topology::{EdgeFaces, EdgeIndex},
    },
    numeric::scalar::Scalar,
};

/// An indexed triangle mesh.
///
/// Vertices and faces are stored in two tables; edges and edge-face
/// incidence are derived from the face table on demand and dropped by every
/// mutation of it.
#[derive(Debug)]
pub struct TriMesh<T: Scalar = f64> {
    id: MeshId,
    generation: u64,
    positions: Vec<Point3<T>>,
    faces: Vec<[usize; 3]>,
    edge_index: DerivedCache<EdgeIndex>,
    edge_faces: DerivedCache<EdgeFaces>,
}

impl<T: Scalar> Default for TriMesh<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A clone is a different mesh: it gets its own identity, so handles of the
/// source mesh are rejected by the copy.
impl<T: Scalar> Clone for TriMesh<T> {
    fn clone(&self) -> Self {
        Self {
            id: MeshId::fresh(),
            generation: 0,
            positions: self.positions.clone(),
            faces: self.faces.clone(),
            edge_index: DerivedCache::new(),
            edge_faces: DerivedCache::new(),
        }
    }
}

impl<T: Scalar> TriMesh<T> {
    pub fn new() -> Self {
        Self::with_capacity(0, 0)
    }

    /// Empty mesh with room for `vertices` and `faces` entries.
    pub fn with_capacity(vertices: usize, faces: usize) -> Self {
        Self {
            id: MeshId::fresh(),
            generation: 0,
            positions: Vec::with_capacity(vertices),
            faces: Vec::with_capacity(faces),
            edge_index: DerivedCache::new(),
            edge_faces: DerivedCache::new(),
        }
    }

    /// Builds a mesh from raw tables, validating every face.
    pub fn from_triangles(positions: Vec<Point3<T>>, faces: &[[usize; 3]]) -> MeshResult<Self> {
        let mut mesh = Self::with_capacity(positions.len(), faces.len());
        mesh.positions = positions;
        for &[i, j, k] in faces {
            mesh.add_face(i, j, k)?;
        }
        Ok(mesh)
    }

    /// For tables known to satisfy the index invariants.
    pub(crate) fn from_parts_unchecked(positions: Vec<Point3<T>>, faces: Vec<[usize; 3]>) -> Self {
        debug_assert!(faces.iter().flatten().all(|&v| v < positions.len()));
        let mut mesh = Self::new();
        mesh.positions = positions;
        mesh.faces = faces;
        mesh
    }

    pub fn id(&self) -> MeshId {
        self.id
    }

    /// Bumped by every removal, since removals shift indices.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Number of distinct undirected edges. Builds the edge index if needed.
    pub fn edge_count(&self) -> usize {
        self.edge_index().len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Point3<T>] {
        &self.positions
    }

    /// Positions may move freely; the derived tables only depend on faces.
    pub(crate) fn positions_mut(&mut self) -> &mut [Point3<T>] {
        &mut self.positions
    }

    pub fn face_table(&self) -> &[[usize; 3]] {
        &self.faces
    }

    // -- derived data --------------------------------------------------------

    pub fn edge_index(&self) -> Arc<EdgeIndex> {
        self.edge_index.get_or_build(|| EdgeIndex::build(&self.faces))
    }

    /// Edge-face incidence; fails if an edge side is claimed by two faces.
    pub fn edge_face_incidence(&self) -> MeshResult<Arc<EdgeFaces>> {
        self.edge_faces.get_or_try_build(|| {
            let index = self.edge_index();
            EdgeFaces::build(&self.faces, &index)
        })
    }

    /// `true` while the edge index is built and valid.
    pub fn has_edge_index(&self) -> bool {
        self.edge_index.is_fresh()
    }

    pub fn has_edge_face_incidence(&self) -> bool {
        self.edge_faces.is_fresh()
    }

    fn invalidate_derived(&mut self) {
        trace!(mesh = ?self.id, "Invalidating edge index and incidence");
        self.edge_index.invalidate();
        self.edge_faces.invalidate();
    }

    // -- vertices ------------------------------------------------------------

    pub fn add_vertex(&mut self, position: Point3<T>) -> VertexHandle {
        let index = self.positions.len();
        self.positions.push(position);
        self.vertex_handle(index)
    }

    /// Removes an unreferenced vertex and returns its position. Vertices after
    /// it move down by one; faces are renumbered to match.
    pub fn remove_vertex(&mut self, vertex: &VertexHandle) -> MeshResult<Point3<T>> {
        let index = self.index_of_vertex(vertex)?;
        if let Some(face) = self.faces.iter().position(|f| f.contains(&index)) {
            warn!(vertex = index, face, "Refusing to remove a vertex used by a face");
            return Err(MeshError::ReferentialIntegrity {
                vertex: index,
                face,
            });
        }

        let position = self.positions.remove(index);
        for face in &mut self.faces {
            for v in face.iter_mut() {
                if *v > index {
                    *v -= 1;
                }
            }
        }
        self.generation += 1;
        self.invalidate_derived();
        Ok(position)
    }

    pub fn vertex(&self, index: usize) -> MeshResult<VertexHandle> {
        self.check_vertex_index(index)?;
        Ok(self.vertex_handle(index))
    }

    pub fn vertices(&self) -> impl Iterator<Item = VertexHandle> + '_ {
        (0..self.positions.len()).map(|i| self.vertex_handle(i))
    }

    pub fn index_of_vertex(&self, vertex: &VertexHandle) -> MeshResult<usize> {
        self.check_owner(vertex.mesh_id(), vertex.generation(), ElementKind::Vertex)?;
        self.check_vertex_index(vertex.index)?;
        Ok(vertex.index)
    }

    pub(crate) fn vertex_handle(&self, index: usize) -> VertexHandle {
        VertexHandle {
            mesh: self.id,
            index,
            generation: self.generation,
        }
    }

    fn check_vertex_index(&self, index: usize) -> MeshResult<()> {
        if index < self.positions.len() {
            Ok(())
        } else {
            Err(MeshError::out_of_range(ElementKind::Vertex, index, self.positions.len()))
        }
    }

    // -- faces ---------------------------------------------------------------

    /// Appends the triangle `(i, j, k)`; its winding defines the outward normal.
    pub fn add_face(&mut self, i: usize, j: usize, k: usize) -> MeshResult<FaceHandle> {
        for v in [i, j, k] {
            self.check_vertex_index(v)?;
        }
        if i == j || j == k || k == i {
            return Err(MeshError::DegenerateFace {
                vertices: [i, j, k],
            });
        }

        let index = self.faces.len();
        self.faces.push([i, j, k]);
        self.invalidate_derived();
        Ok(self.face_handle(index))
    }

    pub fn add_face_from_vertices(
        &mut self,
        v1: &VertexHandle,
        v2: &VertexHandle,
        v3: &VertexHandle,
    ) -> MeshResult<FaceHandle> {
        let i = self.index_of_vertex(v1)?;
        let j = self.index_of_vertex(v2)?;
        let k = self.index_of_vertex(v3)?;
        self.add_face(i, j, k)
    }

    /// Removes a face and returns its vertex triple. Faces after it move down
    /// by one.
    pub fn remove_face(&mut self, face: &FaceHandle) -> MeshResult<[usize; 3]> {
        let index = self.index_of_face(face)?;
        let removed = self.faces.remove(index);
        self.generation += 1;
        self.invalidate_derived();
        Ok(removed)
    }

    pub fn face(&self, index: usize) -> MeshResult<FaceHandle> {
        self.check_face_index(index)?;
        Ok(self.face_handle(index))
    }

    pub fn faces(&self) -> impl Iterator<Item = FaceHandle> + '_ {
        (0..self.faces.len()).map(|i| self.face_handle(i))
    }

    pub fn index_of_face(&self, face: &FaceHandle) -> MeshResult<usize> {
        self.check_owner(face.mesh_id(), face.generation(), ElementKind::Face)?;
        self.check_face_index(face.index)?;
        Ok(face.index)
    }

    /// Vertex indices of a face, in winding order.
    pub fn face_indices(&self, face: &FaceHandle) -> MeshResult<[usize; 3]> {
        Ok(self.faces[self.index_of_face(face)?])
    }

    pub(crate) fn face_handle(&self, index: usize) -> FaceHandle {
        FaceHandle {
            mesh: self.id,
            index,
            generation: self.generation,
        }
    }

    fn check_face_index(&self, index: usize) -> MeshResult<()> {
        if index < self.faces.len() {
            Ok(())
        } else {
            Err(MeshError::out_of_range(ElementKind::Face, index, self.faces.len()))
        }
    }

    // -- edges ---------------------------------------------------------------

    /// The `index`-th edge of the (ascending) edge sequence.
    pub fn edge(&self, index: usize) -> MeshResult<EdgeHandle> {
        let edges = self.edge_index();
        let edge = edges
            .get(index)
            .ok_or_else(|| MeshError::out_of_range(ElementKind::Edge, index, edges.len()))?;
        Ok(self.edge_handle(edge))
    }

    /// Handle of the edge joining two vertices, if some face uses it.
    pub fn find_edge(&self, a: &VertexHandle, b: &VertexHandle) -> MeshResult<Option<EdgeHandle>> {
        let edge = Edge::new(self.index_of_vertex(a)?, self.index_of_vertex(b)?);
        Ok(self
            .edge_index()
            .position(&edge)
            .map(|_| self.edge_handle(edge)))
    }

    /// All edges in ascending order.
    pub fn edges(&self) -> impl Iterator<Item = EdgeHandle> + use<T> {
        let edges = self.edge_index();
        let (mesh, generation) = (self.id, self.generation);
        (0..edges.len()).filter_map(move |i| {
            edges.get(i).map(|edge| EdgeHandle {
                mesh,
                edge,
                generation,
            })
        })
    }

    /// Position of the edge in the edge sequence.
    pub fn index_of_edge(&self, edge: &EdgeHandle) -> MeshResult<usize> {
        self.check_owner(edge.mesh_id(), edge.generation(), ElementKind::Edge)?;
        self.edge_index()
            .position(&edge.edge)
            .ok_or(MeshError::MissingEdge { edge: edge.edge })
    }

    pub(crate) fn edge_handle(&self, edge: Edge) -> EdgeHandle {
        EdgeHandle {
            mesh: self.id,
            edge,
            generation: self.generation,
        }
    }

    // -- handles -------------------------------------------------------------

    fn check_owner(&self, mesh: MeshId, generation: u64, kind: ElementKind) -> MeshResult<()> {
        if mesh != self.id {
            return Err(MeshError::HandleOwnership { kind });
        }
        if generation != self.generation {
            return Err(MeshError::StaleHandle {
                kind,
                handle: generation,
                mesh: self.generation,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3<f64> {
        Point3::new(x, y, z)
    }

    fn make_single_triangle() -> TriMesh {
        let mut m = TriMesh::new();
        m.add_vertex(p(0.0, 0.0, 0.0));
        m.add_vertex(p(1.0, 0.0, 0.0));
        m.add_vertex(p(0.0, 1.0, 0.0));
        m.add_face(0, 1, 2).unwrap();
        m
    }

    #[test]
    fn test_add_vertex_keeps_caches() {
        let mut m = make_single_triangle();
        assert_eq!(m.edge_count(), 3);
        m.edge_face_incidence().unwrap();
        assert!(m.has_edge_index() && m.has_edge_face_incidence());

        m.add_vertex(p(5.0, 5.0, 5.0));
        assert!(m.has_edge_index());
        assert!(m.has_edge_face_incidence());
    }

    #[test]
    fn test_add_face_invalidates_caches() {
        let mut m = make_single_triangle();
        m.edge_face_incidence().unwrap();
        let v = m.add_vertex(p(1.0, 1.0, 0.0));
        m.add_face(1, v.index(), 2).unwrap();
        assert!(!m.has_edge_index());
        assert!(!m.has_edge_face_incidence());
        assert_eq!(m.edge_count(), 5);
    }

    #[test]
    fn test_add_face_out_of_range() {
        let mut m = make_single_triangle();
        let err = m.add_face(0, 1, 3).unwrap_err();
        assert!(matches!(
            err,
            MeshError::IndexOutOfRange { kind: ElementKind::Vertex, index: 3, count: 3 }
        ));
        assert_eq!(m.face_count(), 1);
    }

    #[test]
    fn test_add_face_degenerate() {
        let mut m = make_single_triangle();
        assert!(matches!(m.add_face(0, 1, 1), Err(MeshError::DegenerateFace { .. })));
    }

    #[test]
    fn test_remove_unreferenced_vertex_renumbers_faces() {
        let mut m = TriMesh::new();
        let lonely = m.add_vertex(p(9.0, 9.0, 9.0));
        m.add_vertex(p(0.0, 0.0, 0.0));
        m.add_vertex(p(1.0, 0.0, 0.0));
        m.add_vertex(p(0.0, 1.0, 0.0));
        m.add_face(1, 2, 3).unwrap();

        let removed = m.remove_vertex(&lonely).unwrap();
        assert_eq!(removed, p(9.0, 9.0, 9.0));
        assert_eq!(m.vertex_count(), 3);
        assert_eq!(m.face_table(), &[[0, 1, 2]]);
        assert_eq!(m.edge_count(), 3);
    }

    #[test]
    fn test_removal_makes_old_handles_stale() {
        let mut m = make_single_triangle();
        let v0 = m.vertex(0).unwrap();
        let f0 = m.face(0).unwrap();
        m.remove_face(&f0).unwrap();
        assert!(matches!(
            m.index_of_vertex(&v0),
            Err(MeshError::StaleHandle { kind: ElementKind::Vertex, .. })
        ));
        let fresh = m.vertex(0).unwrap();
        assert_eq!(fresh, v0);
        assert_eq!(m.index_of_vertex(&fresh).unwrap(), 0);
    }

    #[test]
    fn test_clone_has_new_identity() {
        let m = make_single_triangle();
        let copy = m.clone();
        let f = m.face(0).unwrap();
        assert_ne!(m.id(), copy.id());
        assert!(matches!(
            copy.index_of_face(&f),
            Err(MeshError::HandleOwnership { kind: ElementKind::Face })
        ));
        assert_eq!(copy.face_table(), m.face_table());
    }

    #[test]
    fn test_edge_access_and_lookup() {
        let m = make_single_triangle();
        let e = m.edge(1).unwrap();
        assert_eq!(e.edge(), Edge::new(0, 2));
        assert_eq!(m.index_of_edge(&e).unwrap(), 1);
        assert!(matches!(
            m.edge(3),
            Err(MeshError::IndexOutOfRange { kind: ElementKind::Edge, .. })
        ));

        let (a, c) = (m.vertex(1).unwrap(), m.vertex(2).unwrap());
        assert_eq!(m.find_edge(&a, &c).unwrap().map(|e| e.edge()), Some(Edge::new(1, 2)));
        let edges: Vec<_> = m.edges().map(|e| e.edge()).collect();
        assert_eq!(edges, vec![Edge::new(0, 1), Edge::new(0, 2), Edge::new(1, 2)]);
    }

    #[test]
    fn test_from_triangles_validates() {
        let pts = vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0)];
        assert!(TriMesh::from_triangles(pts.clone(), &[[0, 1, 2]]).is_ok());
        assert!(TriMesh::from_triangles(pts, &[[0, 1, 5]]).is_err());
    }
}
