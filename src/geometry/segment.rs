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

use crate::{geometry::point::Point3, numeric::scalar::Scalar};

/// A straight segment between two points, used to materialize mesh edges.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment3<T: Scalar> {
    pub a: Point3<T>,
    pub b: Point3<T>,
}

impl<T: Scalar> Segment3<T> {
    pub fn new(a: Point3<T>, b: Point3<T>) -> Self {
        Self { a, b }
    }

    pub fn length(&self) -> T {
        self.a.distance_to(&self.b)
    }

    pub fn midpoint(&self) -> Point3<T> {
        self.a.midpoint(&self.b)
    }

    /// Parameter in `[0, 1]` of the segment point closest to `p`.
    pub fn closest_parameter(&self, p: &Point3<T>) -> T {
        let dir = self.a.vector_to(&self.b);
        let len2 = dir.norm_squared();
        if len2.is_zero() {
            return T::zero();
        }
        let t = dir.dot(&self.a.vector_to(p)) / len2;
        t.max(T::zero()).min(T::one())
    }

    pub fn distance(&self, p: &Point3<T>) -> T {
        let t = self.closest_parameter(p);
        let closest = self.a.add_vector(&self.a.vector_to(&self.b).scale(t));
        closest.distance_to(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_segment_length_and_distance() {
        let s = Segment3::new(Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, 5.0, 0.0));
        assert_relative_eq!(s.length(), 5.0);
        assert_relative_eq!(s.distance(&Point3::new(2.0, 1.0, 0.0)), 2.0);
        assert_relative_eq!(s.distance(&Point3::new(0.0, 8.0, 4.0)), 5.0);
        assert_relative_eq!(s.closest_parameter(&Point3::new(0.0, -3.0, 0.0)), 0.0);
    }
}
