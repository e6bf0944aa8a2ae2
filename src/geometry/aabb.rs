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

/// An axis-aligned bounding box in 3D.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb3<T: Scalar> {
    pub min: Point3<T>,
    pub max: Point3<T>,
}

impl<T: Scalar> Aabb3<T> {
    pub fn new(min: Point3<T>, max: Point3<T>) -> Self {
        Self { min, max }
    }

    /// Smallest box containing every point, or `None` for an empty input.
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point3<T>>,
    {
        let mut it = points.into_iter();
        let first = *it.next()?;
        Some(it.fold(Aabb3::new(first, first), |acc, p| acc.expanded(p)))
    }

    pub fn expanded(&self, p: &Point3<T>) -> Self {
        Aabb3 {
            min: Point3 {
                coords: std::array::from_fn(|i| self.min[i].min(p[i])),
            },
            max: Point3 {
                coords: std::array::from_fn(|i| self.max[i].max(p[i])),
            },
        }
    }

    pub fn union(&self, other: &Aabb3<T>) -> Self {
        self.expanded(&other.min).expanded(&other.max)
    }

    pub fn contains(&self, p: &Point3<T>) -> bool {
        (0..3).all(|i| self.min[i] <= p[i] && p[i] <= self.max[i])
    }

    /// Length along axis `i`.
    pub fn extent(&self, i: usize) -> T {
        self.max[i] - self.min[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_from_points_and_union() {
        let pts = [
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(2.0, -1.0, 3.0),
            Point3::new(1.0, 0.0, -1.0),
        ];
        let a = Aabb3::from_points(&pts).unwrap();
        assert_eq!(a.min, Point3::new(0.0, -1.0, -1.0));
        assert_eq!(a.max, Point3::new(2.0, 1.0, 3.0));
        assert_eq!(a.extent(2), 4.0);

        let b = Aabb3::new(Point3::new(-1.0, 0.0, 0.0), Point3::new(0.5, 5.0, 0.5));
        let u = a.union(&b);
        assert_eq!(u.min, Point3::new(-1.0, -1.0, -1.0));
        assert_eq!(u.max, Point3::new(2.0, 5.0, 3.0));
        assert!(u.contains(&Point3::new(0.0, 4.0, 0.0)));
    }

    #[test]
    fn test_aabb_empty() {
        let none: [Point3<f64>; 0] = [];
        assert!(Aabb3::from_points(&none).is_none());
    }
}
