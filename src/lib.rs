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

//! Indexed triangle meshes with lazily derived edge topology, plus the
//! closest-point kernel used by the mesh distance and containment queries.
//!
//! ```
//! use trimesh3d::{Point3, TriMesh};
//!
//! let mut mesh: TriMesh = TriMesh::new();
//! let a = mesh.add_vertex(Point3::new(0.0, 0.0, 0.0));
//! let b = mesh.add_vertex(Point3::new(1.0, 0.0, 0.0));
//! let c = mesh.add_vertex(Point3::new(0.0, 1.0, 0.0));
//! mesh.add_face_from_vertices(&a, &b, &c)?;
//!
//! assert_eq!(mesh.edge_count(), 3);
//! assert!((mesh.distance(0.25, 0.25, 2.0) - 2.0).abs() < 1e-12);
//! # Ok::<(), trimesh3d::MeshError>(())
//! ```

pub mod error;
pub mod geometry;
pub mod io;
pub mod mesh;
pub mod numeric;

pub use error::{ElementKind, MeshError, MeshResult};
pub use geometry::{Aabb3, AffineTransform3, Plane3, Point3, Segment3, Triangle3, Vector3};
pub use mesh::{ClosestPoint, Edge, EdgeHandle, FaceHandle, MeshId, TriMesh, VertexHandle};
pub use numeric::Scalar;
