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

//! Adjacency walks over the face table. Vertex-side queries scan the faces;
//! edge-side queries go through the cached edge index and incidence.

use std::collections::BTreeSet;

use smallvec::SmallVec;

use crate::{
    error::MeshResult,
    geometry::{point::Point3, segment::Segment3, triangle::Triangle3, vector::Vector3},
    impl_trimesh,
    mesh::{
        canonical_edge::Edge,
        handles::{EdgeHandle, FaceHandle, VertexHandle},
    },
};

impl_trimesh! {
    pub fn vertex_position(&self, vertex: &VertexHandle) -> MeshResult<Point3<T>> {
        Ok(self.positions()[self.index_of_vertex(vertex)?])
    }

    pub fn set_vertex_position(&mut self, vertex: &VertexHandle, position: Point3<T>) -> MeshResult<()> {
        let index = self.index_of_vertex(vertex)?;
        self.positions_mut()[index] = position;
        Ok(())
    }

    /// Vertices sharing a face with `vertex`, ascending and without repeats.
    pub fn vertex_neighbors(&self, vertex: &VertexHandle) -> MeshResult<Vec<VertexHandle>> {
        let v = self.index_of_vertex(vertex)?;
        let ring: BTreeSet<usize> = self
            .face_table()
            .iter()
            .filter(|f| f.contains(&v))
            .flatten()
            .copied()
            .filter(|&u| u != v)
            .collect();
        Ok(ring.into_iter().map(|u| self.vertex_handle(u)).collect())
    }

    /// Faces using `vertex`, in face order.
    pub fn vertex_faces(&self, vertex: &VertexHandle) -> MeshResult<Vec<FaceHandle>> {
        let v = self.index_of_vertex(vertex)?;
        Ok(self
            .face_table()
            .iter()
            .enumerate()
            .filter(|(_, f)| f.contains(&v))
            .map(|(i, _)| self.face_handle(i))
            .collect())
    }

    /// Edges incident to `vertex`, in edge order.
    pub fn vertex_edges(&self, vertex: &VertexHandle) -> MeshResult<Vec<EdgeHandle>> {
        let v = self.index_of_vertex(vertex)?;
        Ok(self
            .edge_index()
            .iter()
            .filter(|e| e.contains(v))
            .map(|&e| self.edge_handle(e))
            .collect())
    }

    /// Normalized sum of the face normals around `vertex`, so larger faces
    /// weigh more. Zero for an isolated vertex or when the normals cancel.
    pub fn vertex_normal(&self, vertex: &VertexHandle) -> MeshResult<Vector3<T>> {
        let v = self.index_of_vertex(vertex)?;
        let sum = self
            .face_table()
            .iter()
            .filter(|f| f.contains(&v))
            .map(|f| self.triangle_at(f).normal())
            .fold(Vector3::zero(), |acc, n| acc + n);
        Ok(sum.try_normalized().unwrap_or_else(Vector3::zero))
    }

    pub fn face_vertices(&self, face: &FaceHandle) -> MeshResult<[VertexHandle; 3]> {
        let f = self.face_indices(face)?;
        Ok(f.map(|v| self.vertex_handle(v)))
    }

    /// Edges of a face in winding order: (v0,v1), (v1,v2), (v2,v0).
    pub fn face_edges(&self, face: &FaceHandle) -> MeshResult<[EdgeHandle; 3]> {
        let [a, b, c] = self.face_indices(face)?;
        Ok([(a, b), (b, c), (c, a)].map(|(u, v)| self.edge_handle(Edge::new(u, v))))
    }

    /// `(p2 - p1) × (p3 - p1)`, not normalized.
    pub fn face_normal(&self, face: &FaceHandle) -> MeshResult<Vector3<T>> {
        let f = self.face_indices(face)?;
        Ok(self.triangle_at(&f).normal())
    }

    pub fn face_triangle(&self, face: &FaceHandle) -> MeshResult<Triangle3<T>> {
        let f = self.face_indices(face)?;
        Ok(self.triangle_at(&f))
    }

    pub fn edge_vertices(&self, edge: &EdgeHandle) -> MeshResult<[VertexHandle; 2]> {
        self.index_of_edge(edge)?;
        Ok(edge.edge().vertices().map(|v| self.vertex_handle(v)))
    }

    /// Faces on either side of the edge: one for a boundary edge, two for an
    /// interior one. The face that walks `v1 -> v2` comes first.
    pub fn edge_faces(&self, edge: &EdgeHandle) -> MeshResult<SmallVec<[FaceHandle; 2]>> {
        let index = self.index_of_edge(edge)?;
        let incidence = self.edge_face_incidence()?;
        Ok(incidence
            .faces(index)
            .into_iter()
            .map(|f| self.face_handle(f))
            .collect())
    }

    pub fn edge_segment(&self, edge: &EdgeHandle) -> MeshResult<Segment3<T>> {
        self.index_of_edge(edge)?;
        let [a, b] = edge.edge().vertices();
        Ok(Segment3::new(self.positions()[a], self.positions()[b]))
    }

    /// Edges with a face on one side only.
    pub fn boundary_edges(&self) -> MeshResult<Vec<EdgeHandle>> {
        let index = self.edge_index();
        let incidence = self.edge_face_incidence()?;
        Ok(incidence
            .boundary_edges()
            .filter_map(|i| index.get(i))
            .map(|e| self.edge_handle(e))
            .collect())
    }

    /// `true` when every edge has a face on both sides.
    pub fn is_closed(&self) -> MeshResult<bool> {
        Ok(self.edge_face_incidence()?.boundary_edges().next().is_none())
    }

    pub(crate) fn triangle_at(&self, face: &[usize; 3]) -> Triangle3<T> {
        let p = self.positions();
        Triangle3::new(p[face[0]], p[face[1]], p[face[2]])
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::{error::MeshError, mesh::core::TriMesh};

    /// Unit square split along its 0-2 diagonal.
    fn make_square() -> TriMesh {
        let mut m = TriMesh::new();
        for (x, y) in [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)] {
            m.add_vertex(Point3::new(x, y, 0.0));
        }
        m.add_face(0, 1, 2).unwrap();
        m.add_face(0, 2, 3).unwrap();
        m
    }

    #[test]
    fn test_vertex_neighbors_sorted_unique() {
        let m = make_square();
        let v0 = m.vertex(0).unwrap();
        let ring: Vec<usize> = m.vertex_neighbors(&v0).unwrap().iter().map(|v| v.index()).collect();
        assert_eq!(ring, vec![1, 2, 3]);

        let v1 = m.vertex(1).unwrap();
        let ring: Vec<usize> = v1.neighbors(&m).unwrap().iter().map(|v| v.index()).collect();
        assert_eq!(ring, vec![0, 2]);
    }

    #[test]
    fn test_vertex_faces_and_edges() {
        let m = make_square();
        let v2 = m.vertex(2).unwrap();
        let faces: Vec<usize> = v2.faces(&m).unwrap().iter().map(|f| f.index()).collect();
        assert_eq!(faces, vec![0, 1]);
        let edges: Vec<Edge> = v2.edges(&m).unwrap().iter().map(|e| e.edge()).collect();
        assert_eq!(edges, vec![Edge::new(0, 2), Edge::new(1, 2), Edge::new(2, 3)]);
    }

    #[test]
    fn test_normals_follow_winding() {
        let m = make_square();
        let f = m.face(1).unwrap();
        let n = f.normal(&m).unwrap();
        assert_relative_eq!(n.coords[2], 1.0);
        let vn = m.vertex(0).unwrap().normal(&m).unwrap();
        assert_relative_eq!(vn.coords[0], 0.0);
        assert_relative_eq!(vn.coords[2], 1.0);
    }

    #[test]
    fn test_isolated_vertex_normal_is_zero() {
        let mut m = make_square();
        let lonely = m.add_vertex(Point3::new(3.0, 3.0, 3.0));
        assert!(lonely.normal(&m).unwrap().is_zero());
        assert!(lonely.neighbors(&m).unwrap().is_empty());
    }

    #[test]
    fn test_face_edges_in_winding_order() {
        let m = make_square();
        let f = m.face(1).unwrap();
        let edges = f.edges(&m).unwrap().map(|e| e.edge());
        assert_eq!(edges, [Edge::new(0, 2), Edge::new(2, 3), Edge::new(0, 3)]);
        let verts = f.vertices(&m).unwrap().map(|v| v.index());
        assert_eq!(verts, [0, 2, 3]);
    }

    #[test]
    fn test_edge_faces_and_boundary() {
        let m = make_square();
        let diagonal = m.find_edge(&m.vertex(0).unwrap(), &m.vertex(2).unwrap()).unwrap().unwrap();
        let faces: Vec<usize> = diagonal.faces(&m).unwrap().iter().map(|f| f.index()).collect();
        assert_eq!(faces, vec![1, 0]);
        assert_relative_eq!(diagonal.segment(&m).unwrap().length(), 2.0_f64.sqrt());

        let boundary = m.boundary_edges().unwrap();
        assert_eq!(boundary.len(), 4);
        assert!(!boundary.contains(&diagonal));
        assert!(!m.is_closed().unwrap());
    }

    #[test]
    fn test_foreign_handle_rejected() {
        let a = make_square();
        let b = make_square();
        let v = a.vertex(0).unwrap();
        assert!(matches!(b.vertex_neighbors(&v), Err(MeshError::HandleOwnership { .. })));
    }

    #[test]
    fn test_set_vertex_position() {
        let mut m = make_square();
        let v = m.vertex(2).unwrap();
        m.set_vertex_position(&v, Point3::new(2.0, 2.0, 0.0)).unwrap();
        assert_eq!(v.position(&m).unwrap(), Point3::new(2.0, 2.0, 0.0));
    }
}
