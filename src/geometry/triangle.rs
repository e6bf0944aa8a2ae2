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

use crate::{
    geometry::{aabb::Aabb3, plane::Plane3, point::Point3, vector::Vector3},
    numeric::scalar::Scalar,
};

/// Parameters `(s, t)` of the point `p1 + s·e1 + t·e2` of the closed triangle
/// closest to a query point.
///
/// The inputs are the scalar products of the quadratic
/// `|p1 + s·e1 + t·e2 - q|²` with `e1 = p2 - p1`, `e2 = p3 - p1`:
/// `a = e1·e1`, `b = e1·e2`, `c = e2·e2`, `d = e1·(p1 - q)`,
/// `e = e2·(p1 - q)`.
///
/// The unconstrained minimum `(s, t)` is computed scaled by
/// `det = ac - b²` and classified into one of the seven regions of the
/// parameter plane; outside the triangle the minimum is searched on the
/// boundary edge (or vertex) facing that region. The division by `det` is
/// not guarded: a degenerate triangle produces non-finite parameters.
///
/// ```text
///        t
///   \ 2 |
///    \  |
///     \ |
///      \|
///       *
///       |\
///    3  | \   1
///       | 0\
///  _____*___*_____ s
///    4  |  5 \  6
/// ```
pub fn closest_params<T: Scalar>(a: T, b: T, c: T, d: T, e: T) -> (T, T) {
    let zero = T::zero();
    let one = T::one();

    let det = a * c - b * b;
    let s = b * e - c * d;
    let t = b * d - a * e;

    // minimum of |s·e1 + diff| over s in [0, 1] (edge t = 0)
    let on_edge_t0 = || {
        if d >= zero {
            zero
        } else if a <= -d {
            one
        } else {
            -d / a
        }
    };
    // minimum over t in [0, 1] (edge s = 0)
    let on_edge_s0 = || {
        if e >= zero {
            zero
        } else if c <= -e {
            one
        } else {
            -e / c
        }
    };

    if s + t < det {
        if s < zero {
            if t < zero {
                // region 4: the vertex p1 or one of the two adjacent edges
                if d < zero {
                    (on_edge_t0(), zero)
                } else {
                    (zero, on_edge_s0())
                }
            } else {
                // region 3
                (zero, on_edge_s0())
            }
        } else if t < zero {
            // region 5
            (on_edge_t0(), zero)
        } else {
            // region 0
            (s / det, t / det)
        }
    } else {
        let denom = a - T::two() * b + c;
        if s < zero {
            // region 2: edges s + t = 1 and s = 0 meeting at p3
            let tmp0 = b + d;
            let tmp1 = c + e;
            if tmp1 > tmp0 {
                let numer = tmp1 - tmp0;
                let s = if numer >= denom { one } else { numer / denom };
                (s, one - s)
            } else if tmp1 <= zero {
                (zero, one)
            } else {
                (zero, on_edge_s0())
            }
        } else if t < zero {
            // region 6: edges s + t = 1 and t = 0 meeting at p2
            let tmp0 = b + e;
            let tmp1 = a + d;
            if tmp1 > tmp0 {
                let numer = tmp1 - tmp0;
                let t = if numer >= denom { one } else { numer / denom };
                (one - t, t)
            } else if tmp1 <= zero {
                (one, zero)
            } else {
                (on_edge_t0(), zero)
            }
        } else {
            // region 1
            let numer = (c + e) - (b + d);
            let s = if numer <= zero {
                zero
            } else if numer >= denom {
                one
            } else {
                numer / denom
            };
            (s, one - s)
        }
    }
}

/// A triangle materialized from three positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle3<T: Scalar> {
    pub p1: Point3<T>,
    pub p2: Point3<T>,
    pub p3: Point3<T>,
}

impl<T: Scalar> Triangle3<T> {
    pub fn new(p1: Point3<T>, p2: Point3<T>, p3: Point3<T>) -> Self {
        Self { p1, p2, p3 }
    }

    pub fn vertices(&self) -> [Point3<T>; 3] {
        [self.p1, self.p2, self.p3]
    }

    #[inline(always)]
    fn edge_vectors(&self) -> (Vector3<T>, Vector3<T>) {
        (self.p1.vector_to(&self.p2), self.p1.vector_to(&self.p3))
    }

    /// `(p2 - p1) × (p3 - p1)`; its length is twice the area.
    pub fn normal(&self) -> Vector3<T> {
        let (e1, e2) = self.edge_vectors();
        e1.cross(&e2)
    }

    pub fn unit_normal(&self) -> Option<Vector3<T>> {
        self.normal().try_normalized()
    }

    pub fn area(&self) -> T {
        self.normal().norm() / T::two()
    }

    pub fn supporting_plane(&self) -> Plane3<T> {
        Plane3::from_points(&self.p1, &self.p2, &self.p3)
    }

    pub fn bounding_box(&self) -> Aabb3<T> {
        Aabb3::new(self.p1, self.p1)
            .expanded(&self.p2)
            .expanded(&self.p3)
    }

    /// Scalar products `(a, b, c, d, e)` of the distance quadratic, see
    /// [`closest_params`].
    fn quadratic(&self, q: &Point3<T>) -> (T, T, T, T, T) {
        let (e1, e2) = self.edge_vectors();
        let diff = q.vector_to(&self.p1);
        (
            e1.dot(&e1),
            e1.dot(&e2),
            e2.dot(&e2),
            e1.dot(&diff),
            e2.dot(&diff),
        )
    }

    /// Coordinates `(s, t)` of the projection of `q` onto the supporting
    /// plane, in the frame `(p1, p2 - p1, p3 - p1)`. Not clamped.
    pub fn projected_position(&self, q: &Point3<T>) -> (T, T) {
        let (a, b, c, d, e) = self.quadratic(q);
        let det = a * c - b * b;
        ((b * e - c * d) / det, (b * d - a * e) / det)
    }

    /// Parameters of the closest point of the closed triangle.
    pub fn closest_params(&self, q: &Point3<T>) -> (T, T) {
        let (a, b, c, d, e) = self.quadratic(q);
        closest_params(a, b, c, d, e)
    }

    pub fn point_at(&self, s: T, t: T) -> Point3<T> {
        let (e1, e2) = self.edge_vectors();
        self.p1.add_vector(&(e1.scale(s) + e2.scale(t)))
    }

    pub fn closest_point(&self, q: &Point3<T>) -> Point3<T> {
        let (s, t) = self.closest_params(q);
        self.point_at(s, t)
    }

    /// Euclidean distance from `q` to the closed triangle.
    pub fn distance(&self, q: &Point3<T>) -> T {
        self.closest_point(q).distance_to(q)
    }

    pub fn distance_xyz(&self, x: T, y: T, z: T) -> T {
        self.distance(&Point3::new(x, y, z))
    }

    /// `true` if `q` lies within `eps` of the supporting plane and its
    /// projected coordinates satisfy `s, t >= -eps`, `s, t, s + t <= 1 + eps`.
    pub fn contains(&self, q: &Point3<T>, eps: T) -> bool {
        if !self.supporting_plane().contains(q, eps) {
            return false;
        }
        let (s, t) = self.projected_position(q);
        let upper = T::one() + eps;
        s >= -eps && t >= -eps && s <= upper && t <= upper && s + t <= upper
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit() -> Triangle3<f64> {
        Triangle3::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        )
    }

    #[test]
    fn test_region_0_interior() {
        let tri = unit();
        let q = Point3::new(0.25, 0.25, 2.0);
        assert_eq!(tri.closest_point(&q), Point3::new(0.25, 0.25, 0.0));
        assert_relative_eq!(tri.distance(&q), 2.0);
    }

    #[test]
    fn test_region_5_vertex_p2() {
        let tri = unit();
        let q = Point3::new(2.0, -2.0, 0.0);
        assert_eq!(tri.closest_params(&q), (1.0, 0.0));
        assert_relative_eq!(tri.distance(&q), 5f64.sqrt());
    }

    #[test]
    fn test_region_1_hypotenuse() {
        // (s, t) = (2, 2): independent clamping would give the corner
        // (1, 1), which is not even on the triangle.
        let tri = unit();
        let q = Point3::new(2.0, 2.0, 0.0);
        let (s, t) = tri.closest_params(&q);
        assert_relative_eq!(s, 0.5);
        assert_relative_eq!(t, 0.5);
        assert_relative_eq!(tri.distance(&q), 1.5 * 2f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_region_4_vertex_p1() {
        let tri = unit();
        let q = Point3::new(-1.0, -2.0, 2.0);
        assert_eq!(tri.closest_point(&q), Point3::new(0.0, 0.0, 0.0));
        assert_relative_eq!(tri.distance(&q), 3.0);
    }

    #[test]
    fn test_region_3_and_2() {
        let tri = unit();
        // left of edge s = 0
        let q = Point3::new(-1.0, 0.5, 0.0);
        assert_eq!(tri.closest_point(&q), Point3::new(0.0, 0.5, 0.0));
        // beyond p3
        let q = Point3::new(-0.5, 3.0, 0.0);
        assert_eq!(tri.closest_point(&q), Point3::new(0.0, 1.0, 0.0));
        assert_relative_eq!(tri.distance(&q), (0.25f64 + 4.0).sqrt());
    }

    #[test]
    fn test_region_6_and_5() {
        let tri = unit();
        let q = Point3::new(3.0, -0.5, 0.0);
        assert_eq!(tri.closest_point(&q), Point3::new(1.0, 0.0, 0.0));
        let q = Point3::new(0.8, -0.1, 0.0);
        let p = tri.closest_point(&q);
        assert_relative_eq!(p.x(), 0.8, epsilon = 1e-12);
        assert_relative_eq!(p.y(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_contains_edge_midpoints() {
        let tri = unit();
        for (a, b) in [(tri.p1, tri.p2), (tri.p2, tri.p3), (tri.p3, tri.p1)] {
            assert!(tri.contains(&a.midpoint(&b), 1e-9));
        }
        assert!(!tri.contains(&Point3::new(0.6, 0.6, 0.0), 1e-9));
        assert!(!tri.contains(&Point3::new(-0.1, 0.5, 0.0), 1e-9));
        assert!(!tri.contains(&Point3::new(0.2, 0.2, 0.1), 1e-9));
    }

    #[test]
    fn test_area_and_normal() {
        let tri = unit();
        assert_relative_eq!(tri.area(), 0.5);
        assert_eq!(tri.normal(), Vector3::new(0.0, 0.0, 1.0));
        let bb = tri.bounding_box();
        assert_eq!(bb.max, Point3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_degenerate_triangle_is_not_finite() {
        let tri: Triangle3<f64> = Triangle3::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
        );
        let (s, t) = tri.projected_position(&Point3::new(0.5, 1.0, 0.0));
        assert!(!s.is_finite() || !t.is_finite());
    }
}
