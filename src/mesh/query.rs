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

use tracing::debug;

use crate::{
    geometry::{aabb::Aabb3, point::Point3, transform::AffineTransform3},
    impl_trimesh,
    mesh::handles::{FaceHandle, VertexHandle},
    numeric::scalar::Scalar,
};

/// Nearest surface point found by [`TriMesh::closest_point`](crate::mesh::TriMesh::closest_point).
#[derive(Clone, Copy, Debug)]
pub struct ClosestPoint<T: Scalar> {
    pub face: FaceHandle,
    pub point: Point3<T>,
    pub distance: T,
}

impl_trimesh! {
    /// `true` if `point` lies within `eps` of some face.
    ///
    /// This is a surface test: a point strictly inside a closed mesh is not
    /// contained.
    pub fn contains(&self, point: &Point3<T>, eps: T) -> bool {
        self.face_table()
            .iter()
            .any(|f| self.triangle_at(f).contains(point, eps))
    }

    /// [`contains`](Self::contains) with [`Scalar::query_tolerance`].
    pub fn contains_point(&self, point: &Point3<T>) -> bool {
        self.contains(point, T::query_tolerance())
    }

    /// Distance from `(x, y, z)` to the nearest face; infinite without faces.
    pub fn distance(&self, x: T, y: T, z: T) -> T {
        self.distance_to(&Point3::new(x, y, z))
    }

    pub fn distance_to(&self, point: &Point3<T>) -> T {
        self.face_table()
            .iter()
            .map(|f| self.triangle_at(f).distance(point))
            .fold(T::infinity(), |acc, d| acc.min(d))
    }

    /// Nearest point over all faces. The first face wins ties; faces giving a
    /// non-finite distance are skipped, as in [`distance_to`](Self::distance_to).
    pub fn closest_point(&self, point: &Point3<T>) -> Option<ClosestPoint<T>> {
        let mut best: Option<ClosestPoint<T>> = None;
        for (i, f) in self.face_table().iter().enumerate() {
            let candidate = self.triangle_at(f).closest_point(point);
            let distance = candidate.distance_to(point);
            if !distance.is_finite() {
                continue;
            }
            if best.is_none_or(|b| distance < b.distance) {
                best = Some(ClosestPoint {
                    face: self.face_handle(i),
                    point: candidate,
                    distance,
                });
            }
        }
        best
    }

    /// Vertex nearest to `point`, faces ignored.
    pub fn find_closest_vertex(&self, point: &Point3<T>) -> Option<VertexHandle> {
        self.positions()
            .iter()
            .enumerate()
            .map(|(i, p)| (i, p.distance_squared_to(point)))
            .fold(None, |best: Option<(usize, T)>, (i, d)| match best {
                Some((_, bd)) if bd <= d => best,
                _ => Some((i, d)),
            })
            .map(|(i, _)| self.vertex_handle(i))
    }

    pub fn surface_area(&self) -> T {
        self.face_table()
            .iter()
            .map(|f| self.triangle_at(f).area())
            .fold(T::zero(), |acc, a| acc + a)
    }

    /// Bounds of all vertices, referenced or not.
    pub fn bounding_box(&self) -> Option<Aabb3<T>> {
        Aabb3::from_points(self.positions())
    }

    /// Moves every vertex through `transform`. Topology is untouched, so
    /// handles and derived tables stay valid.
    pub fn transform(&mut self, transform: &impl AffineTransform3<T>) {
        for p in self.positions_mut() {
            *p = transform.apply(p);
        }
        debug!(vertices = self.vertex_count(), "Transformed mesh");
    }
}
