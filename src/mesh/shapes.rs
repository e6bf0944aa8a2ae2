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

//! Small closed, consistently oriented meshes. Every face normal points away
//! from the centroid.

use crate::{geometry::point::Point3, mesh::core::TriMesh, numeric::scalar::Scalar};

fn points<T: Scalar>(coords: &[[f64; 3]]) -> Vec<Point3<T>> {
    coords
        .iter()
        .map(|c| Point3::new(T::lit(c[0]), T::lit(c[1]), T::lit(c[2])))
        .collect()
}

/// Regular tetrahedron inscribed in the unit cube.
pub fn tetrahedron<T: Scalar>() -> TriMesh<T> {
    let vertices = points(&[
        [0.0, 0.0, 0.0],
        [1.0, 1.0, 0.0],
        [1.0, 0.0, 1.0],
        [0.0, 1.0, 1.0],
    ]);
    let faces = vec![[0, 1, 2], [0, 2, 3], [0, 3, 1], [3, 2, 1]];
    TriMesh::from_parts_unchecked(vertices, faces)
}

/// Octahedron with its vertices on the unit axes.
pub fn octahedron<T: Scalar>() -> TriMesh<T> {
    let vertices = points(&[
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [-1.0, 0.0, 0.0],
        [0.0, -1.0, 0.0],
        [0.0, 0.0, 1.0],
        [0.0, 0.0, -1.0],
    ]);
    let faces = vec![
        [0, 1, 4],
        [1, 2, 4],
        [2, 3, 4],
        [3, 0, 4],
        [0, 5, 1],
        [1, 5, 2],
        [2, 5, 3],
        [0, 3, 5],
    ];
    TriMesh::from_parts_unchecked(vertices, faces)
}
