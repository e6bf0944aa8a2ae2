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
    geometry::{point::Point3, vector::Vector3},
    numeric::scalar::Scalar,
};

/// A plane given by an origin and two (not necessarily orthogonal) direction
/// vectors. The normal is `v1 × v2` and is not normalized.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane3<T: Scalar> {
    pub origin: Point3<T>,
    pub v1: Vector3<T>,
    pub v2: Vector3<T>,
}

impl<T: Scalar> Plane3<T> {
    pub fn new(origin: Point3<T>, v1: Vector3<T>, v2: Vector3<T>) -> Self {
        Self { origin, v1, v2 }
    }

    pub fn from_points(p1: &Point3<T>, p2: &Point3<T>, p3: &Point3<T>) -> Self {
        Self::new(*p1, p1.vector_to(p2), p1.vector_to(p3))
    }

    pub fn normal(&self) -> Vector3<T> {
        self.v1.cross(&self.v2)
    }

    /// Orthogonal projection of `point` onto the plane.
    pub fn projection(&self, point: &Point3<T>) -> Point3<T> {
        let n = self.normal();
        let t = n.dot(&point.vector_to(&self.origin)) / n.norm_squared();
        point.add_vector(&n.scale(t))
    }

    /// Unsigned distance from `point` to the plane.
    pub fn distance(&self, point: &Point3<T>) -> T {
        let n = self.normal();
        n.dot(&self.origin.vector_to(point)).abs() / n.norm()
    }

    pub fn contains(&self, point: &Point3<T>, eps: T) -> bool {
        self.distance(point) <= eps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_plane_distance_and_projection() {
        let plane = Plane3::from_points(
            &Point3::new(0.0, 0.0, 1.0),
            &Point3::new(1.0, 0.0, 1.0),
            &Point3::new(0.0, 1.0, 1.0),
        );
        let q = Point3::new(3.0, -2.0, 4.0);
        assert_relative_eq!(plane.distance(&q), 3.0);
        assert_eq!(plane.projection(&q), Point3::new(3.0, -2.0, 1.0));
        assert!(plane.contains(&Point3::new(7.0, 7.0, 1.0), 1e-12));
        assert!(!plane.contains(&q, 1e-12));
    }
}
