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

use approx::assert_relative_eq;
use trimesh3d::{Point3, TriMesh, mesh::shapes};

#[test]
fn test_octahedron_distances() {
    let mesh: TriMesh = shapes::octahedron();
    // Face planes sit at distance 1/sqrt(3) from the origin.
    assert_relative_eq!(mesh.distance(0.0, 0.0, 0.0), 1.0 / 3.0_f64.sqrt(), epsilon = 1e-12);
    assert_relative_eq!(mesh.distance(0.0, 0.0, 3.0), 2.0, epsilon = 1e-12);
    assert_relative_eq!(mesh.distance(2.0, 0.0, 0.0), 1.0, epsilon = 1e-12);

    let far = Point3::new(1.0, 1.0, 1.0);
    let hit = mesh.closest_point(&far).unwrap();
    assert_eq!(hit.face.index(), 0);
    for c in hit.point.coords {
        assert_relative_eq!(c, 1.0 / 3.0, epsilon = 1e-12);
    }
    assert_relative_eq!(hit.distance, mesh.distance_to(&far));
}

#[test]
fn test_surface_membership() {
    let mesh: TriMesh = shapes::octahedron();
    // Vertices and edge midpoints are on the surface, the centre is not.
    for v in mesh.vertices() {
        assert!(mesh.contains(&v.position(&mesh).unwrap(), 1e-9));
    }
    for e in mesh.edges() {
        assert!(mesh.contains(&e.segment(&mesh).unwrap().midpoint(), 1e-9));
    }
    assert!(!mesh.contains(&Point3::origin(), 1e-9));
    assert!(mesh.contains(&Point3::origin(), 0.6));
}

#[test]
fn test_areas_and_bounds() {
    let tet: TriMesh = shapes::tetrahedron();
    assert_relative_eq!(tet.surface_area(), 2.0 * 3.0_f64.sqrt(), epsilon = 1e-12);

    let oct: TriMesh = shapes::octahedron();
    assert_relative_eq!(oct.surface_area(), 4.0 * 3.0_f64.sqrt(), epsilon = 1e-12);
    let bounds = oct.bounding_box().unwrap();
    assert_eq!(bounds.min, Point3::new(-1.0, -1.0, -1.0));
    assert_eq!(bounds.max, Point3::new(1.0, 1.0, 1.0));

    let v = oct.find_closest_vertex(&Point3::new(0.1, -0.9, 0.2)).unwrap();
    assert_eq!(v.index(), 3);
}

#[test]
fn test_queries_after_edits() {
    let mut mesh: TriMesh = shapes::tetrahedron();
    let probe = Point3::new(0.5, 0.5, -1.0);
    let before = mesh.distance_to(&probe);

    let far = mesh.add_vertex(Point3::new(0.5, 0.5, -1.0));
    let a = mesh.vertex(0).unwrap();
    let b = mesh.vertex(1).unwrap();
    let f = mesh.add_face_from_vertices(&a, &far, &b).unwrap();
    assert!(mesh.distance_to(&probe) < 1e-12);
    assert!(before > 0.5);

    mesh.remove_face(&f).unwrap();
    assert_relative_eq!(mesh.distance_to(&probe), before);
}

#[test]
fn test_zero_area_face_keeps_distance_finite() {
    let mut mesh: TriMesh = shapes::tetrahedron();
    let p = mesh.add_vertex(Point3::new(9.0, 9.0, 9.0));
    let q = mesh.add_vertex(Point3::new(9.0, 9.0, 9.0));
    mesh.add_face(0, p.index(), q.index()).unwrap();
    let d = mesh.distance(0.0, 0.0, -1.0);
    assert!(d.is_finite());
    assert_relative_eq!(d, 1.0, epsilon = 1e-12);
}
